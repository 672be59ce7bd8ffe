//! Help text rendering
//!
//! Three renderings: the root listing, per-command help, and the
//! usage-failure variant shown when a subcommand's flags fail to parse.
//! Everything is written to the caller-provided sink, which dispatch wires
//! to standard error so help never mixes with real command output. A write
//! failure has no fallback channel and panics.

use std::io::{self, Write};

use clap::error::ErrorKind;

use crate::command::Command;
use crate::error::UsageError;

impl Command {
    /// Prints root-level or command-level help depending on the command's
    /// position in the tree.
    pub fn print_help(&self, w: &mut dyn Write) {
        if self.is_root() {
            print_root(self, w);
        } else {
            print_command(self, w);
        }
    }
}

/// Prints the root listing: summary, generic usage, runnable subcommands in
/// insertion order, and the closing help hint.
pub fn print_root(root: &Command, w: &mut dyn Write) {
    checked(render_root(root, w));
}

/// Prints a command's help: usage line, the parser's default-formatted
/// option summary, and the long description.
pub fn print_command(cmd: &Command, w: &mut dyn Write) {
    checked(render_command(cmd, w));
}

/// Prints the usage-failure rendering for a failed flag parse: a one-line
/// diagnostic derived from the parser's error (skipped when the "failure"
/// was an explicit help request), then the command help body.
pub fn print_usage_failure(cmd: &Command, err: &clap::Error, w: &mut dyn Write) {
    if err.kind() != ErrorKind::DisplayHelp {
        let text = err.to_string();
        let first = text.lines().next().unwrap_or_default();
        let reason = first.strip_prefix("error: ").unwrap_or(first);
        let fault = UsageError::InvalidArgs {
            command: cmd.name.clone(),
            reason: reason.to_string(),
        };
        checked(writeln!(w, "{fault}").and_then(|()| writeln!(w)));
    }
    print_command(cmd, w);
}

/// Prints the unknown-command diagnostic with a hint pointing at the root's
/// help listing.
pub fn print_unknown(root: &Command, name: &str, w: &mut dyn Write) {
    let fault = UsageError::UnknownCommand(name.to_string());
    checked(
        writeln!(w, "{fault}")
            .and_then(|()| writeln!(w, "Run '{} help' for available commands.", root.name)),
    );
}

fn render_root(root: &Command, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{}", root.short)?;
    writeln!(w)?;
    writeln!(w, "Usage:")?;
    writeln!(w, "  {} command [arguments]", root.name)?;
    writeln!(w)?;
    writeln!(w, "Available commands:")?;
    let runnable = || root.subcommands.iter().filter(|c| c.is_runnable());
    let width = runnable().map(|c| c.name.len()).max().unwrap_or(0);
    for cmd in runnable() {
        writeln!(w, "  {:<width$}  {}", cmd.name, cmd.short)?;
    }
    writeln!(w)?;
    writeln!(
        w,
        "Use '{} help [command]' for more information about a command.",
        root.name
    )
}

fn render_command(cmd: &Command, w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "Usage:")?;
    writeln!(w)?;
    writeln!(w, "  {}", cmd.usage)?;
    writeln!(w)?;
    let mut flags = cmd.flags.clone();
    let summary = flags.render_help().to_string();
    writeln!(w, "{}", summary.trim_end())?;
    writeln!(w)?;
    writeln!(w, "{}", cmd.long)
}

fn checked(result: io::Result<()>) {
    if let Err(err) = result {
        panic!("cannot write to the error stream: {err}");
    }
}
