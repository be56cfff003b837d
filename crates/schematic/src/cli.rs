//! CLI helpers.

mod output;
mod stderr_logger;

#[cfg(test)]
mod tests;

use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};

pub use self::output::{Output, OutputKind};

static STDERR_LOGGER: stderr_logger::StderrLogger = stderr_logger::StderrLogger;

/// Which totals to print.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Print both totals as a pair.
    #[default]
    Both,
    /// Only print the sum of part numbers.
    Parts,
    /// Only print the sum of gear ratios.
    Gears,
}

/// Command line options.
#[derive(Debug, Default)]
pub struct Opts {
    /// The schematic to scan, if exactly one was given.
    pub path: Option<PathBuf>,
    /// Totals to print.
    pub metric: Metric,
    /// Run in verbose mode.
    pub verbose: bool,
    /// Output JSON report.
    pub json: bool,
}

impl Opts {
    /// Parse CLI options and install the logger.
    pub fn parse() -> Result<Self> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        log::set_max_level(if opts.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        });

        log::set_logger(&STDERR_LOGGER).map_err(|error| anyhow!("failed to set log: {error}"))?;
        Ok(opts)
    }

    /// Parse options from the given arguments, not including the program
    /// name.
    ///
    /// Anything which isn't a known flag is a positional argument. Unless
    /// exactly one positional argument is given there is nothing to scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::cli::{Metric, Opts};
    ///
    /// let opts = Opts::parse_from(["--gears", "input.txt"])?;
    /// assert_eq!(opts.metric, Metric::Gears);
    /// assert!(opts.path.is_some());
    ///
    /// let opts = Opts::parse_from(["a.txt", "b.txt"])?;
    /// assert!(opts.path.is_none());
    /// # Ok::<_, anyhow::Error>(())
    /// ```
    pub fn parse_from<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut opts = Self::default();
        let mut positional = Vec::new();
        let mut it = args.into_iter().map(Into::<OsString>::into);

        for arg in it.by_ref() {
            let Some(s) = arg.to_str() else {
                bail!("non-utf8 argument");
            };

            match s {
                "--parts" => {
                    opts.set_metric(Metric::Parts)?;
                }
                "--gears" => {
                    opts.set_metric(Metric::Gears)?;
                }
                "--json" => {
                    opts.json = true;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--" => {
                    break;
                }
                _ => {
                    positional.push(PathBuf::from(s));
                }
            }
        }

        positional.extend(it.map(PathBuf::from));

        if positional.len() == 1 {
            opts.path = positional.pop();
        }

        Ok(opts)
    }

    /// Output kind selected by the options.
    pub fn output_kind(&self) -> OutputKind {
        if self.json {
            OutputKind::Json
        } else {
            OutputKind::Normal
        }
    }

    fn set_metric(&mut self, metric: Metric) -> Result<()> {
        if self.metric != Metric::Both {
            bail!("`--parts` and `--gears` are mutually exclusive");
        }

        self.metric = metric;
        Ok(())
    }
}
