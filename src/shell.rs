//! Shell
//!
//! Turns price text into advice on a writer. Input that does not coerce to a
//! positive price never reaches the planners.

use std::{
    io::{self, BufRead, Write},
    time::Instant,
};

use humanize_duration::{Truncate, prelude::DurationExt};
use thiserror::Error;
use tracing::{info_span, warn};

use crate::{
    advice::Advisor,
    catalogue::FixtureError,
    config::{Config, OutputFormat},
    planners::PlannerError,
    price::Price,
    receipt::{Receipt, ReceiptError},
};

/// Errors that stop the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The catalogue could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Plan B could not be searched.
    #[error(transparent)]
    Planner(#[from] PlannerError),

    /// The advice could not be written.
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// Input could not be read or output written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Writes advice for each price it is handed.
#[derive(Debug)]
pub struct Shell<W> {
    advisor: Advisor,
    output: OutputFormat,
    color: bool,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Create a shell writing `output` formatted advice to `out`.
    pub fn new(advisor: Advisor, output: OutputFormat, out: W) -> Self {
        Self {
            advisor,
            output,
            color: true,
            out,
        }
    }

    /// Enable or disable ANSI colours in table output.
    #[must_use]
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Advise on one price entry.
    ///
    /// Returns `false` without writing anything when the text is not a
    /// positive number.
    ///
    /// # Errors
    ///
    /// Returns a [`ShellError`] if planning or writing fails.
    pub fn handle(&mut self, input: &str) -> Result<bool, ShellError> {
        let price = match Price::parse(input) {
            Ok(price) => price,
            Err(err) => {
                warn!(input, %err, "ignoring price");

                return Ok(false);
            }
        };

        let _span = info_span!("advise", price = price.baht()).entered();

        let start = Instant::now();
        let advice = self.advisor.advise(price)?;
        let elapsed = start.elapsed();

        let receipt = Receipt::new(&advice)
            .with_catalogue_name(self.advisor.catalogue().name())
            .with_color(self.color);

        match self.output {
            OutputFormat::Table => {
                receipt.write_to(&mut self.out)?;

                writeln!(self.out, " Planned in {}", elapsed.human(Truncate::Nano))?;
            }
            OutputFormat::Yaml => receipt.write_yaml(&mut self.out)?,
        }

        Ok(true)
    }

    /// Advise on every non-blank line of `input`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShellError`] if reading, planning or writing fails.
    pub fn run_lines(&mut self, input: impl BufRead) -> Result<(), ShellError> {
        for line in input.lines() {
            let line = line?;

            if line.trim().is_empty() {
                continue;
            }

            self.handle(&line)?;
        }

        Ok(())
    }

    /// Consume the shell, returning its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Run the shell for `config`: advise on the prices given as arguments, or on
/// each line of `input` when there are none.
///
/// # Errors
///
/// Returns a [`ShellError`] if the catalogue is invalid, Plan B cannot be
/// searched, or IO fails.
pub fn run<W: Write>(config: &Config, color: bool, input: impl BufRead, out: W) -> Result<(), ShellError> {
    let advisor = Advisor::new(config.catalogue()?, config.max_per_denomination)?;

    let mut shell = Shell::new(advisor, config.output, out).with_color(color);

    if config.prices.is_empty() {
        return shell.run_lines(input);
    }

    for price in &config.prices {
        shell.handle(price)?;
    }

    Ok(())
}
