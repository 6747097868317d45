use anyhow::{Context, Result};
use std::io::Write;
use std::str::FromStr;

use crate::resolve::DisplayRecord;


const COLUMN_GAP: usize = 3;

/// How records are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned columns with a header row
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
    /// YAML sequence
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "" | "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => anyhow::bail!("Unknown output format: {s} (expected table, json or yaml)"),
        }
    }
}

/// Write `records` to `out`. `quiet` prints only names and ignores `format`.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn render<W: Write>(
    out: &mut W,
    records: &[DisplayRecord],
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    if quiet {
        for record in records {
            writeln!(out, "{}", record.name)?;
        }
        return Ok(());
    }
    match format {
        OutputFormat::Table => render_table(out, records),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, records).context("Failed to write JSON")?;
            writeln!(out)?;
            Ok(())
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(records).context("Failed to serialize YAML")?;
            out.write_all(yaml.as_bytes())?;
            Ok(())
        }
    }
}

fn render_table<W: Write>(out: &mut W, records: &[DisplayRecord]) -> Result<()> {
    let header = ["NAME", "DEFAULT", "DESCRIPTION"];
    let rows: Vec<[&str; 3]> = records
        .iter()
        .map(|r| {
            let flag = if r.is_default { "*" } else { "" };
            [r.name.as_str(), flag, r.description.as_str()]
        })
        .collect();

    let mut widths = header.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for row in std::iter::once(&header).chain(&rows) {
        let line = format!(
            "{:<w0$}{:<w1$}{}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0] + COLUMN_GAP,
            w1 = widths[1] + COLUMN_GAP,
        );
        writeln!(out, "{}", line.trim_end())?;
    }
    Ok(())
}
