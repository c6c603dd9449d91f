use crate::commands::{print_json, Context};
use crate::mail::{launcher_for, mailto_url};
use crate::util::parse_contact_ref;
use anyhow::Result;
use clap::{ArgAction, Args};
use phonebook_config::MailLauncherKind;
use serde::Serialize;
use tracing::warn;

#[derive(Debug, Args)]
pub struct MailArgs {
    /// List index or contact id
    pub contact: String,
    /// Print the mailto: link instead of opening the mail client
    #[arg(long, action = ArgAction::SetTrue)]
    pub print: bool,
}

#[derive(Debug, Serialize)]
struct MailReport {
    email: String,
    url: String,
    launched: bool,
}

pub fn mail_contact(ctx: &Context<'_>, args: MailArgs) -> Result<()> {
    let target = parse_contact_ref(&args.contact)?;
    let contact = ctx.store.get(target)?;
    let url = mailto_url(&contact.email)?;

    let kind = if args.print {
        MailLauncherKind::Stdout
    } else {
        ctx.config.mail.launcher
    };

    // In JSON mode the report already carries the link.
    let launched = if ctx.json && kind == MailLauncherKind::Stdout {
        false
    } else {
        match launcher_for(kind).open(&url) {
            Ok(()) => true,
            Err(err) => {
                warn!(url = %url, error = %err, "could not open mail client");
                false
            }
        }
    };

    if ctx.json {
        print_json(&MailReport {
            email: contact.email.clone(),
            url: url.to_string(),
            launched,
        })?;
    }
    Ok(())
}
