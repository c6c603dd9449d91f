mod commands;
mod error;
mod mail;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{backup, completions, contacts, export, mail as mail_cmd, Context};
use crate::error::{exit_code_for, report_error, unsaved};
use phonebook_config as config;
use phonebook_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "phonebook", version, about = "phonebook CLI")]
struct Cli {
    #[arg(long, global = true)]
    contacts_file: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Add(contacts::AddContactArgs),
    Edit(contacts::EditContactArgs),
    Delete(contacts::DeleteArgs),
    List,
    Search(contacts::SearchArgs),
    Show(contacts::ShowArgs),
    #[command(subcommand)]
    Export(export::ExportCommand),
    /// Open the mail client with a new message to a contact
    Mail(mail_cmd::MailArgs),
    Backup(backup::BackupArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        contacts_file,
        config: config_path,
        json,
        verbose: _,
        command,
    } = cli;

    match command {
        Command::Completions(args) => completions::emit(args),
        command => run_with_store(contacts_file, config_path, json, command),
    }
}

fn run_with_store(
    contacts_file: Option<PathBuf>,
    config_path: Option<PathBuf>,
    json: bool,
    command: Command,
) -> Result<()> {
    let loaded = config::load(config_path).with_context(|| "load config")?;
    match &loaded.source {
        Some(path) => debug!(path = %path.display(), "config loaded"),
        None => debug!("no config file, using defaults"),
    }
    let app_config = loaded.config;

    let contacts_path =
        paths::resolve_contacts_path(contacts_file.or_else(|| app_config.contacts_file.clone()))
            .with_context(|| "resolve contacts file path")?;
    debug!(path = %contacts_path.display(), "contacts file resolved");

    let mut store = Store::open(&contacts_path);
    {
        let mut ctx = Context {
            store: &mut store,
            json,
            config: &app_config,
        };

        match command {
            Command::Add(args) => contacts::add_contact(&mut ctx, args),
            Command::Edit(args) => contacts::edit_contact(&mut ctx, args),
            Command::Delete(args) => contacts::delete_contact(&mut ctx, args),
            Command::List => contacts::list_contacts(&ctx),
            Command::Search(args) => contacts::search_contacts(&ctx, args),
            Command::Show(args) => contacts::show_contact(&ctx, args),
            Command::Export(cmd) => match cmd {
                export::ExportCommand::Csv(args) => export::export_csv(&ctx, args),
            },
            Command::Mail(args) => mail_cmd::mail_contact(&ctx, args),
            Command::Backup(args) => backup::backup(&ctx, args),
            Command::Completions(_) => {
                unreachable!("completions command handled before store initialization")
            }
        }?;
    }

    if store.has_unsaved_changes() {
        return Err(unsaved(store.storage().path()));
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
