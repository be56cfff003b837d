use std::io::{self, Write};

use serde::Serialize;

use crate::cli::Metric;
use crate::scan::Totals;

/// Writer for the final report.
pub struct Output<O> {
    out: O,
    kind: OutputKind,
}

/// How the report is formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// A single JSON line.
    Json,
    /// Plain text.
    Normal,
}

impl<O> Output<O>
where
    O: Write,
{
    pub fn new(out: O, kind: OutputKind) -> Self {
        Self { out, kind }
    }

    /// Write the selected totals.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Totals;
    /// use schematic::cli::{Metric, Output, OutputKind};
    ///
    /// let totals = Totals { parts: 4361, gears: 467835 };
    ///
    /// let mut out = Vec::new();
    /// Output::new(&mut out, OutputKind::Normal).report(&totals, Metric::Both)?;
    /// assert_eq!(out, b"(4361, 467835)\n");
    /// # Ok::<_, std::io::Error>(())
    /// ```
    pub fn report(&mut self, totals: &Totals, metric: Metric) -> io::Result<()> {
        match self.kind {
            OutputKind::Json => {
                let data = Report::new(totals, metric);

                self.json(&Line {
                    ty: LineType::Report,
                    data,
                })?;
            }
            OutputKind::Normal => match metric {
                Metric::Both => writeln!(self.out, "{totals}")?,
                Metric::Parts => writeln!(self.out, "{}", totals.parts)?,
                Metric::Gears => writeln!(self.out, "{}", totals.gears)?,
            },
        }

        Ok(())
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Report,
}

#[derive(Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    parts: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gears: Option<u64>,
}

impl Report {
    fn new(totals: &Totals, metric: Metric) -> Self {
        let parts = matches!(metric, Metric::Both | Metric::Parts).then_some(totals.parts);
        let gears = matches!(metric, Metric::Both | Metric::Gears).then_some(totals.gears);
        Self { parts, gears }
    }
}
