use anyhow::{anyhow, Result};
use phonebook_config::MailLauncherKind;
use std::process::{Command, Stdio};
use url::Url;

pub trait MailLauncher {
    fn open(&self, url: &Url) -> Result<()>;
}

pub struct StdoutMailLauncher;

impl MailLauncher for StdoutMailLauncher {
    fn open(&self, url: &Url) -> Result<()> {
        println!("{url}");
        Ok(())
    }
}

/// Hands the URL to the desktop's default handler for `mailto:`.
pub struct SystemMailLauncher;

impl MailLauncher for SystemMailLauncher {
    fn open(&self, url: &Url) -> Result<()> {
        let status = opener(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()?;
        if !status.success() {
            return Err(anyhow!("mail client launcher exited with status {status}"));
        }
        Ok(())
    }
}

pub fn launcher_for(kind: MailLauncherKind) -> Box<dyn MailLauncher> {
    match kind {
        MailLauncherKind::System => Box::new(SystemMailLauncher),
        MailLauncherKind::Stdout => Box::new(StdoutMailLauncher),
    }
}

/// `mailto:` link whose only recipient is `address`. Characters that would
/// start a query or fragment (`?`, `#`) are percent-encoded on both sides of
/// the `@`.
pub fn mailto_url(address: &str) -> Result<Url> {
    let address = address.trim();
    if address.is_empty() {
        return Err(anyhow!("email address cannot be empty"));
    }
    let recipient = match address.rsplit_once('@') {
        Some((local, domain)) => format!(
            "{}@{}",
            urlencoding::encode(local),
            urlencoding::encode(domain)
        ),
        None => urlencoding::encode(address).into_owned(),
    };
    Url::parse(&format!("mailto:{recipient}")).map_err(|err| anyhow!("invalid mailto url: {err}"))
}

#[cfg(target_os = "macos")]
fn opener(target: &str) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(target);
    cmd
}

#[cfg(windows)]
fn opener(target: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(target);
    cmd
}

#[cfg(not(any(target_os = "macos", windows)))]
fn opener(target: &str) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(target);
    cmd
}
