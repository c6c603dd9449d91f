use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use phonebook_core::csv;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Subcommand)]
pub enum ExportCommand {
    /// Write all contacts as CSV with a Name,Phone,Email header
    Csv(ExportCsvArgs),
}

#[derive(Debug, Args)]
pub struct ExportCsvArgs {
    /// Write to this file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ExportReport {
    format: &'static str,
    count: usize,
    output: String,
}

pub fn export_csv(ctx: &Context<'_>, args: ExportCsvArgs) -> Result<()> {
    let contacts = ctx.store.list_all();
    let data = csv::export_csv(contacts);

    let Some(out) = args.out else {
        if ctx.json {
            return Err(invalid_input("--json needs --out; CSV goes to stdout otherwise"));
        }
        print!("{data}");
        return Ok(());
    };

    if let Some(dir) = out.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("create export directory {}", dir.display()))?;
    }
    fs::write(&out, data).with_context(|| format!("write CSV export {}", out.display()))?;

    if ctx.json {
        return print_json(&ExportReport {
            format: "csv",
            count: contacts.len(),
            output: out.display().to_string(),
        });
    }
    println!("Exported {} contacts to {}", contacts.len(), out.display());
    Ok(())
}
