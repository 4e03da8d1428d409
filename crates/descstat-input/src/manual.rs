use crate::{InputError, Position, parse_value};

/// At most this many values are read from one line of manual input.
pub const MAX_MANUAL_VALUES: usize = 1000;

/// Parses a line of comma-separated numbers.
///
/// Whitespace around each value is ignored. Values beyond
/// [`MAX_MANUAL_VALUES`] are dropped without being parsed.
///
/// # Errors
///
/// Returns [`InputError::Parse`] if any of the first [`MAX_MANUAL_VALUES`]
/// values is not a number, including an empty value.
///
/// # Examples
///
/// ```
/// use descstat_input::manual::parse_values;
///
/// assert_eq!(parse_values("1, 2.5,-3").unwrap(), vec![1.0, 2.5, -3.0]);
/// assert!(parse_values("1,,2").is_err());
/// ```
pub fn parse_values(line: &str) -> Result<Vec<f64>, InputError> {
    let values = line
        .split(',')
        .take(MAX_MANUAL_VALUES)
        .enumerate()
        .map(|(i, token)| parse_value(token, Position::Value(i + 1)))
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("parsed {} manually entered values", values.len());
    Ok(values)
}
