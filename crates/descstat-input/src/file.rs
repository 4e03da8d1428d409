use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{InputError, Position, parse_value};

/// Reads one value per line from the file at `path`.
///
/// Surrounding whitespace is trimmed and blank lines are skipped.
///
/// # Errors
///
/// * [`InputError::Io`] if the file cannot be opened or read
/// * [`InputError::Parse`] if a non-blank line is not a number
pub fn read_values<P>(path: P) -> Result<Vec<f64>, InputError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let values = read_lines(BufReader::new(file), path)?;
    log::debug!("read {} values from {}", values.len(), path.display());
    Ok(values)
}

fn read_lines<R>(reader: R, path: &Path) -> Result<Vec<f64>, InputError>
where
    R: BufRead,
{
    let mut values = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| io_error(path, source))?;
        if line.trim().is_empty() {
            continue;
        }
        values.push(parse_value(&line, Position::Line(i + 1))?);
    }
    Ok(values)
}

/// Writes `values` to a new file at `path`, one per line.
///
/// The output can be loaded back with [`read_values`] without loss.
///
/// # Errors
///
/// Returns [`InputError::Io`] if the file cannot be created or written.
pub fn write_values<P>(path: P, values: &[f64]) -> Result<(), InputError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| io_error(path, source))?;
    let mut writer = BufWriter::new(file);
    write_values_to(&mut writer, values)
        .and_then(|()| writer.flush())
        .map_err(|source| io_error(path, source))?;
    log::debug!("wrote {} values to {}", values.len(), path.display());
    Ok(())
}

/// Writes `values` to `writer`, one per line.
pub fn write_values_to<W>(writer: &mut W, values: &[f64]) -> io::Result<()>
where
    W: Write + ?Sized,
{
    for value in values {
        writeln!(writer, "{value}")?;
    }
    Ok(())
}

fn io_error(path: &Path, source: io::Error) -> InputError {
    InputError::Io {
        path: path.to_owned(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor, path::PathBuf};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("descstat-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_read_lines_skips_blank_lines() {
        let input = Cursor::new("1.5\n  2\n\n-3e2\n");
        let values = read_lines(input, Path::new("mem")).unwrap();
        assert_eq!(values, vec![1.5, 2.0, -300.0]);
    }

    #[test]
    fn test_bad_line_aborts_load() {
        let input = Cursor::new("1\n2\nthree\n4\n");
        match read_lines(input, Path::new("mem")).unwrap_err() {
            InputError::Parse {
                position, token, ..
            } => {
                assert_eq!(position, Position::Line(3));
                assert_eq!(token, "three");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let path = temp_path("does-not-exist.txt");
        let err = read_values(&path).unwrap_err();
        assert!(err.is_io());
        assert!(err.to_string().contains("does-not-exist.txt"));
    }

    #[test]
    fn test_write_then_read_back() {
        let path = temp_path("write-read.txt");
        let values = [0.1, 999.997_246, -42.0, 1e-7];
        write_values(&path, &values).unwrap();
        let read = read_values(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(read, values);
    }

    #[test]
    fn test_write_values_to_formats_one_per_line() {
        let mut out = Vec::new();
        write_values_to(&mut out, &[1.0, 2.5]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1\n2.5\n");
    }
}
