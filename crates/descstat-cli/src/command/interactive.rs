//! Menu-driven shell: load a data set, then query statistics until the user
//! clears the data set or exits.

use std::{
    fmt::Display,
    io::{self, BufRead, Write},
    ops::ControlFlow,
};

use anyhow::Context;
use descstat_input::{
    InputError, file,
    generator::{DataGenerator, GeneratorParams},
    manual::{self, MAX_MANUAL_VALUES},
};
use descstat_stats::StatisticsEngine;

use crate::{command::source, measure::Measure, render};

const SEPARATOR_WIDTH: usize = 80;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InteractiveArg {
    /// Seed for the random number generator data source
    #[arg(long)]
    seed: Option<u64>,
}

pub(crate) fn run(arg: &InteractiveArg) -> anyhow::Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    Shell::new(stdin, stdout, source::new_generator(arg.seed)).run()
}

/// `Break` means the user asked to exit or input ended.
type Flow<T = ()> = ControlFlow<(), T>;

/// Outcome of one load attempt: `Continue(None)` asks the user again.
type Attempt = Flow<Option<Vec<f64>>>;

struct Shell<R, W> {
    input: R,
    output: W,
    engine: StatisticsEngine,
    generator: DataGenerator,
}

impl<R, W> Shell<R, W>
where
    R: BufRead,
    W: Write,
{
    fn new(input: R, output: W, generator: DataGenerator) -> Self {
        Self {
            input,
            output,
            engine: StatisticsEngine::new(),
            generator,
        }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Hi, welcome to use this statistical calculator.\n")?;
        loop {
            self.separator()?;
            writeln!(self.output, "No data set is loaded into the calculator.")?;
            writeln!(self.output, "    1. Load data")?;
            writeln!(self.output, "    2. Exit")?;
            let Some(choice) = self.prompt("Your choice (1-2): ")? else {
                break;
            };
            match choice.as_str() {
                "1" => {
                    if self.load_data()?.is_break() || self.select_measure()?.is_break() {
                        break;
                    }
                }
                "2" => break,
                _ => writeln!(self.output, "Invalid choice, try again.\n")?,
            }
        }
        writeln!(self.output, "Good bye.")?;
        self.output.flush()?;
        Ok(())
    }

    fn separator(&mut self) -> io::Result<()> {
        writeln!(self.output, "{}", "-".repeat(SEPARATOR_WIDTH))
    }

    fn menu_item(&mut self, number: usize, text: &dyn Display) -> io::Result<()> {
        let label = format!("{number}.");
        writeln!(self.output, "    {label:<3} {text}")
    }

    /// Prints `text` and reads one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from stdin")?;
        if read == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn load_data(&mut self) -> anyhow::Result<Flow> {
        loop {
            self.separator()?;
            writeln!(self.output, "Choose a way to input your data: ")?;
            writeln!(self.output, "    1. Manual input")?;
            writeln!(self.output, "    2. Load from an external file")?;
            writeln!(
                self.output,
                "    3. Load from data generated by a random number generator"
            )?;
            let Some(choice) = self.prompt("Your choice (1-3): ")? else {
                return Ok(ControlFlow::Break(()));
            };
            let attempt = match choice.as_str() {
                "1" => self.read_manual()?,
                "2" => self.read_file()?,
                "3" => self.read_generated()?,
                _ => {
                    writeln!(self.output, "Invalid choice, try again.\n")?;
                    continue;
                }
            };
            let values = match attempt {
                ControlFlow::Break(()) => return Ok(ControlFlow::Break(())),
                ControlFlow::Continue(None) => continue,
                ControlFlow::Continue(Some(values)) => values,
            };

            self.engine.load(values);
            if self.engine.is_loaded() {
                writeln!(
                    self.output,
                    "{} values are successfully loaded.\n",
                    self.engine.count()
                )?;
                return Ok(ControlFlow::Continue(()));
            }
            writeln!(self.output, "The data set is empty, try again.\n")?;
        }
    }

    fn read_manual(&mut self) -> anyhow::Result<Attempt> {
        self.separator()?;
        writeln!(
            self.output,
            "Please enter numbers separated by commas, press enter to terminate input ({MAX_MANUAL_VALUES} numbers at most): "
        )?;
        let Some(line) = self.prompt("")? else {
            return Ok(ControlFlow::Break(()));
        };
        self.report_input(manual::parse_values(&line), "Invalid input")
    }

    fn read_file(&mut self) -> anyhow::Result<Attempt> {
        self.separator()?;
        let Some(path) =
            self.prompt("Please enter full path to the file which contains data set: ")?
        else {
            return Ok(ControlFlow::Break(()));
        };
        self.report_input(file::read_values(&path), "An error occurred when loading the file")
    }

    fn report_input(
        &mut self,
        result: Result<Vec<f64>, InputError>,
        message: &str,
    ) -> anyhow::Result<Attempt> {
        match result {
            Ok(values) => Ok(ControlFlow::Continue(Some(values))),
            Err(err) => {
                writeln!(self.output, "{message}: {err}\n")?;
                Ok(ControlFlow::Continue(None))
            }
        }
    }

    /// Asks for generator parameters until they are valid.
    fn read_generated(&mut self) -> anyhow::Result<Attempt> {
        self.separator()?;
        loop {
            let Some(line) = self.prompt(
                "Please enter lower bound, upper bound and count of number of the data set you want to generate (separate by comma: x,x,x): ",
            )?
            else {
                return Ok(ControlFlow::Break(()));
            };
            let Ok(params) = line.parse::<GeneratorParams>() else {
                writeln!(
                    self.output,
                    "Invalid parameters for the random number generator."
                )?;
                writeln!(self.output, "Please try again.\n")?;
                continue;
            };
            match self.generator.generate_with(params) {
                Ok(values) => return Ok(ControlFlow::Continue(Some(values))),
                Err(err) => {
                    writeln!(
                        self.output,
                        "Invalid parameters for the random number generator: "
                    )?;
                    writeln!(self.output, "{err}")?;
                    writeln!(self.output, "Please try again.\n")?;
                }
            }
        }
    }

    /// Measure menu. `Continue` means the data set was cleared.
    fn select_measure(&mut self) -> anyhow::Result<Flow> {
        let show_all = Measure::ALL.len() + 1;
        let clear = show_all + 1;
        let exit = clear + 1;
        loop {
            self.separator()?;
            writeln!(
                self.output,
                "Choose a measure for the data set or reload a new data set:"
            )?;
            for (i, measure) in Measure::ALL.iter().enumerate() {
                self.menu_item(i + 1, measure)?;
            }
            self.menu_item(show_all, &"Show all")?;
            self.menu_item(clear, &"Clear data set")?;
            self.menu_item(exit, &"Exit")?;
            let Some(choice) = self.prompt(&format!("Your choice (1-{exit}): "))? else {
                return Ok(ControlFlow::Break(()));
            };

            match choice.parse::<usize>() {
                Ok(n) if (1..=Measure::ALL.len()).contains(&n) => {
                    let measure = Measure::ALL[n - 1];
                    match measure.evaluate(&self.engine) {
                        Ok(value) => writeln!(self.output, "{measure}: {value}")?,
                        Err(err) => writeln!(self.output, "{measure}: {err}")?,
                    }
                }
                Ok(n) if n == show_all => {
                    let summary = self.engine.summary()?;
                    render::write_summary(&mut self.output, &summary)?;
                }
                Ok(n) if n == clear => {
                    self.engine.clear();
                    return Ok(ControlFlow::Continue(()));
                }
                Ok(n) if n == exit => return Ok(ControlFlow::Break(())),
                _ => writeln!(self.output, "Invalid choice, try again.\n")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use super::*;

    fn run_script(script: &str) -> String {
        let mut output = Vec::new();
        Shell::new(
            Cursor::new(script.to_owned()),
            &mut output,
            DataGenerator::with_seed(0),
        )
        .run()
        .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_exit_immediately() {
        let out = run_script("2\n");
        assert!(out.contains("No data set is loaded"));
        assert!(out.ends_with("Good bye.\n"));
    }

    #[test]
    fn test_manual_input_and_measures() {
        let out = run_script("1\n1\n1,2,3,4,5\n5\n4\n10\n8\n14\n");
        assert!(out.contains("5 values are successfully loaded."));
        assert!(out.contains("Mean: 3\n"));
        assert!(out.contains("Median: 3\n"));
        assert!(out.contains("Sample variance: 2.5\n"));
        assert!(out.contains("Population variance: 2\n"));
        assert!(out.ends_with("Good bye.\n"));
    }

    #[test]
    fn test_invalid_manual_input_asks_again() {
        let out = run_script("1\n1\n1,x\n1\n2,2,3,4\n3\n14\n");
        assert!(out.contains("Invalid input: invalid number \"x\" at value #2"));
        assert!(out.contains("4 values are successfully loaded."));
        assert!(out.contains("Mode: 2\n"));
    }

    #[test]
    fn test_errors_are_reported_not_fatal() {
        let out = run_script("1\n1\n5\n10\n6\n14\n");
        assert!(out.contains("Sample variance: at least 2 samples required, got 1\n"));

        let out = run_script("1\n1\n0,2\n6\n14\n");
        assert!(out.contains("Harmonic mean: harmonic mean is undefined"));
    }

    #[test]
    fn test_show_all() {
        let out = run_script("1\n1\n1,2,3,4,5,6,7\n12\n14\n");
        assert!(out.contains("Number of values: 7\n"));
        assert!(out.contains("Mode: 1 2 3 4 5 ... and 2 more value(s)\n"));
    }

    #[test]
    fn test_clear_returns_to_start_menu() {
        let out = run_script("1\n1\n1,2\n13\n1\n1\n10,20,30\n5\n14\n");
        assert_eq!(out.matches("No data set is loaded").count(), 2);
        assert!(out.contains("3 values are successfully loaded."));
        assert!(out.contains("Mean: 20\n"));
    }

    #[test]
    fn test_generator_retries_until_valid() {
        let out = run_script("1\n3\n5,1,10\nfoo\n0,1,0\n0,1,25\n14\n");
        assert!(out.contains("the upper bound should be finite and bigger than the lower bound"));
        assert!(out.contains("Invalid parameters for the random number generator.\n"));
        assert!(out.contains("the count of values should be greater than 0"));
        assert!(out.contains("25 values are successfully loaded."));
    }

    #[test]
    fn test_file_input() {
        let path = std::env::temp_dir().join(format!("descstat-shell-{}.txt", std::process::id()));
        fs::write(&path, "4\n8\n").unwrap();
        let script = format!("1\n2\n{}\n5\n14\n", path.display());
        let out = run_script(&script);
        fs::remove_file(&path).unwrap();
        assert!(out.contains("2 values are successfully loaded."));
        assert!(out.contains("Mean: 6\n"));
    }

    #[test]
    fn test_missing_file_asks_again() {
        let out = run_script("1\n2\n/nonexistent/descstat/data.txt\n");
        assert!(out.contains("An error occurred when loading the file: failed to access"));
        assert!(out.ends_with("Good bye.\n"));
    }

    #[test]
    fn test_invalid_menu_choices() {
        let out = run_script("9\n1\n7\n1\n3\n99\n14\n");
        assert_eq!(out.matches("Invalid choice, try again.").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits() {
        let out = run_script("1\n1\n1,2,3\n");
        assert!(out.ends_with("Good bye.\n"));
    }
}
