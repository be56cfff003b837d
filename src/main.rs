use anyhow::Result;
use schematic::cli::{Opts, Output};

fn main() -> Result<()> {
    let opts = Opts::parse()?;

    let Some(path) = &opts.path else {
        log::debug!("expected exactly one input path, nothing to do");
        return Ok(());
    };

    let totals = schematic::scan_path(path)?;

    let stdout = std::io::stdout();
    let mut o = Output::new(stdout.lock(), opts.output_kind());
    o.report(&totals, opts.metric)?;
    Ok(())
}
