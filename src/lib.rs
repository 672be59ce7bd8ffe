//! Rudder - a minimal subcommand dispatcher
//!
//! Rudder gives a command-line tool a flat set of named subcommands, each
//! with its own flags, usage text, and run behavior. The embedding
//! application builds the tree at startup and hands control to
//! [`Command::execute`], which resolves the first positional argument to a
//! subcommand, parses that subcommand's flags, and runs its handler. Flag
//! parsing itself is delegated to [`clap`]'s builder API.
//!
//! ```no_run
//! use rudder::{Arg, ArgAction, Command};
//!
//! let mut root = Command::new("tool").short("An example tool");
//! root.add_command(
//!     Command::new("build")
//!         .usage("tool build [--release] [target...]")
//!         .short("compile the project")
//!         .long("Build compiles every target named on the command line.")
//!         .flag(Arg::new("release").long("release").action(ArgAction::SetTrue))
//!         .run(|_cmd, matches, args| {
//!             println!("release={} targets={:?}", matches.get_flag("release"), args);
//!         }),
//! );
//! root.execute();
//! ```
//!
//! Help and diagnostics always go to standard error so that piped command
//! output never mixes with usage text. `<tool> help <command>` exits 0;
//! every other terminal path exits with [`EXIT_USAGE`].

// Public modules
pub mod command;
pub mod dispatch;
pub mod error;
pub mod help;

// Re-export commonly used types
pub use clap::{self, Arg, ArgAction, ArgMatches};
pub use command::{Command, Handler};
pub use dispatch::EXIT_USAGE;
pub use error::UsageError;

/// Current version of Rudder
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
