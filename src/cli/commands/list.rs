use crate::config::{Config, OutputFormat};
use crate::core::branch::BranchRecord;
use crate::utils::Result;
use std::io::{self, Write};

pub fn execute(config: &Config, branches: &[BranchRecord]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_branches(&mut out, branches, config.output)
}

pub fn write_branches<W: Write>(
    out: &mut W,
    branches: &[BranchRecord],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for branch in branches {
                writeln!(out, "{}", branch.summary_line())?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, branches)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
