use std::io::{self, Write};
use std::process::{Command, Stdio};

use anyhow::Context;

/// Where the generated password goes.
pub(crate) enum Sink {
    Stdout,
    Clipboard,
}

impl Sink {
    /// Write `text`. An aborted run writes an empty line to stdout, and leaves the clipboard alone.
    pub(crate) fn write(&self, text: &str) -> anyhow::Result<()> {
        match self {
            Sink::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{text}").context("failed to write the password to stdout")?;
                Ok(())
            }
            Sink::Clipboard if text.is_empty() => Ok(()),
            Sink::Clipboard => {
                send_to_clipboard(text.as_bytes())?;
                eprintln!("Copied to the clipboard.");
                Ok(())
            }
        }
    }
}

fn send_to_clipboard(data: &[u8]) -> anyhow::Result<()> {
    let mut child = clipboard_cmd()
        .stdin(Stdio::piped())
        .spawn()
        .context("failed to start the clipboard command")?;
    child
        .stdin
        .as_mut()
        .context("the clipboard command has no stdin")?
        .write_all(data)?;
    let status = child.wait()?;
    if !status.success() {
        anyhow::bail!("the clipboard command exited with {status}");
    }
    Ok(())
}

#[cfg(target_os = "macos")]
fn clipboard_cmd() -> Command {
    Command::new("pbcopy")
}

#[cfg(not(target_os = "macos"))]
fn clipboard_cmd() -> Command {
    let mut cmd = Command::new("xsel");
    cmd.arg("-b");
    cmd
}
