use crate::commands::{print_json, Context};
use anyhow::{Context as _, Result};
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Where to write the copy; must not be the contacts file itself
    #[arg(long)]
    pub out: PathBuf,
}

#[derive(Debug, Serialize)]
struct BackupReport {
    source: String,
    output: String,
    size_bytes: u64,
}

pub fn backup(ctx: &Context<'_>, args: BackupArgs) -> Result<()> {
    let source = ctx.store.storage().path();
    ctx.store
        .backup_to(&args.out)
        .with_context(|| format!("back up {} to {}", source.display(), args.out.display()))?;

    let report = BackupReport {
        source: source.display().to_string(),
        output: args.out.display().to_string(),
        size_bytes: fs::metadata(&args.out).map(|meta| meta.len()).unwrap_or(0),
    };
    if ctx.json {
        return print_json(&report);
    }
    println!(
        "Backed up {} to {} ({} bytes)",
        report.source, report.output, report.size_bytes
    );
    Ok(())
}
