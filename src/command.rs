//! Command tree construction
//!
//! This module defines the [`Command`] entity and the attach operation that
//! wires a flat, single-level tree: one root, any number of named
//! subcommands. Each command owns a private [`clap::Command`] holding its
//! flags; the root's instance doubles as the global parser used to split the
//! process arguments before dispatch.

use clap::{Arg, ArgMatches};

/// Handler invoked for a resolved command: the command itself, the parsed
/// flag matches, and the positional arguments left over after all
/// recognized flags were consumed.
pub type Handler = Box<dyn Fn(&Command, &ArgMatches, &[String])>;

/// Hidden catch-all argument that collects everything from the first
/// positional token onward, so parsing stops at the command boundary the
/// same way for every node.
pub(crate) const REST: &str = "__args";

/// A named, runnable unit in the command tree, or the root container.
///
/// Commands are built fully formed with [`Command::new`] and the chained
/// setters, attached to a root with [`Command::add_command`], and never
/// mutated once dispatch begins. A command is runnable exactly when a
/// handler was installed with [`Command::run`]; the root and placeholder
/// grouping nodes stay non-runnable and are skipped by lookup and listings.
pub struct Command {
    /// Name used for lookup; may be empty for the root.
    pub name: String,
    /// Single-line synopsis shown in command help.
    pub usage: String,
    /// One-line summary shown in the root listing.
    pub short: String,
    /// Full help text shown by `help <command>`.
    pub long: String,
    /// Ordered children; insertion order drives the help listing.
    pub subcommands: Vec<Command>,
    pub(crate) flags: clap::Command,
    pub(crate) run: Option<Handler>,
    pub(crate) has_parent: bool,
}

impl Command {
    /// Creates a command with the given name and an empty flag set.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let flags = clap::Command::new(name.clone())
            .no_binary_name(true)
            .help_template("{options}")
            .arg(
                Arg::new(REST)
                    .num_args(0..)
                    .value_name("ARGS")
                    .trailing_var_arg(true)
                    .hide(true),
            );
        Command {
            name,
            usage: String::new(),
            short: String::new(),
            long: String::new(),
            subcommands: Vec::new(),
            flags,
            run: None,
            has_parent: false,
        }
    }

    /// Sets the single-line usage synopsis.
    pub fn usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Sets the one-line summary shown in listings.
    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    /// Sets the full help text.
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    /// Registers a flag on the command's private parser.
    pub fn flag(mut self, arg: Arg) -> Self {
        self.flags = self.flags.arg(arg);
        self
    }

    /// Installs the handler, making the command runnable.
    pub fn run(mut self, run: impl Fn(&Command, &ArgMatches, &[String]) + 'static) -> Self {
        self.run = Some(Box::new(run));
        self
    }

    /// Attaches a subcommand to this root, preserving call order.
    ///
    /// Attaching is only legal on a root: calling this on an attached
    /// command, or attaching a command that already belongs to a tree, is a
    /// wiring bug in the embedding application and panics.
    pub fn add_command(&mut self, mut command: Command) {
        if self.has_parent {
            panic!("commands can only be added to a root command");
        }
        if command.has_parent {
            panic!(
                "command '{}' is already attached to a root",
                command.name
            );
        }
        command.has_parent = true;
        self.subcommands.push(command);
    }

    /// True when the command has a handler and can be dispatched to.
    pub fn is_runnable(&self) -> bool {
        self.run.is_some()
    }

    /// True for the top-level command that owns the tree.
    pub fn is_root(&self) -> bool {
        !self.has_parent
    }

    /// Looks up a runnable child by exact, case-sensitive name.
    pub(crate) fn find(&self, name: &str) -> Option<&Command> {
        self.subcommands
            .iter()
            .find(|c| c.name == name && c.is_runnable())
    }

    /// Parses `args` with the command's private parser. Recognized flags are
    /// consumed; everything from the first positional token onward lands in
    /// the hidden catch-all and is read back with [`rest_args`].
    pub(crate) fn parse_rest(&self, args: &[String]) -> Result<ArgMatches, clap::Error> {
        self.flags.clone().try_get_matches_from(args)
    }
}

/// Leftover positional arguments from a parse, in original order.
pub(crate) fn rest_args(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>(REST)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
