//! Top-level dispatch
//!
//! This module turns a process argument vector into exactly one of: a
//! handler invocation, a help rendering, or a diagnostic. Every outcome
//! except a successful handler run terminates the process; [`Command::dispatch`]
//! exposes the same decision as a returned status so the paths can be
//! exercised without exiting, the same split clap makes between
//! `get_matches` and `try_get_matches`.

use std::env;
use std::io::{self, Write};
use std::process;

use crate::command::{rest_args, Command};
use crate::help;

/// Exit status for every terminal path except `help <command>`.
pub const EXIT_USAGE: i32 = 2;

impl Command {
    /// Parses the process arguments, resolves a subcommand, and runs it.
    ///
    /// Called exactly once per process, on the root. Every fault path
    /// prints to standard error and exits with [`EXIT_USAGE`];
    /// `help <command>` exits 0. The call returns normally only after an
    /// invoked handler does.
    pub fn execute(&self) {
        let args: Vec<String> = env::args().skip(1).collect();
        if let Some(code) = self.dispatch(&args, &mut io::stderr()) {
            process::exit(code);
        }
    }

    /// Core of [`Command::execute`]: dispatches `args`, writing help and
    /// diagnostics to `w`, and returns the status the process would exit
    /// with, or `None` after a handler ran.
    ///
    /// Panics when called on an attached command; dispatch starts at the
    /// root.
    pub fn dispatch(&self, args: &[String], w: &mut dyn Write) -> Option<i32> {
        if !self.is_root() {
            panic!("dispatch may only be called on a root command");
        }

        // Global parse. The root's parser carries no user flags; its only
        // job is to split recognized tokens from the leftover positionals.
        let rest = match self.parse_rest(args) {
            Ok(matches) => rest_args(&matches),
            Err(_) => {
                help::print_root(self, w);
                return Some(EXIT_USAGE);
            }
        };

        let Some(name) = rest.first().map(String::as_str) else {
            help::print_root(self, w);
            return Some(EXIT_USAGE);
        };

        // The help literal wins over any subcommand with the same name.
        if name == "help" {
            let code = match rest.get(1).map(String::as_str) {
                None => {
                    help::print_root(self, w);
                    EXIT_USAGE
                }
                Some(target) => match self.find(target) {
                    Some(cmd) => {
                        help::print_command(cmd, w);
                        0
                    }
                    None => {
                        help::print_unknown(self, target, w);
                        EXIT_USAGE
                    }
                },
            };
            return Some(code);
        }

        let Some(cmd) = self.find(name) else {
            help::print_unknown(self, name, w);
            return Some(EXIT_USAGE);
        };

        let matches = match cmd.parse_rest(&rest[1..]) {
            Ok(matches) => matches,
            Err(err) => {
                help::print_usage_failure(cmd, &err, w);
                return Some(EXIT_USAGE);
            }
        };

        let leftover = rest_args(&matches);
        if let Some(run) = &cmd.run {
            run(cmd, &matches, &leftover);
        }
        None
    }
}
