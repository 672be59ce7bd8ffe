//! Sample tool wired on top of the rudder dispatcher.
//!
//! Exists so the end-to-end tests have a real binary to drive, and as a
//! compact reference for the builder API.

use rudder::{Arg, ArgAction, Command};

fn main() {
    let mut root =
        Command::new("rudder-demo").short("A sample tool built on the rudder dispatcher");

    root.add_command(
        Command::new("greet")
            .usage("rudder-demo greet [--shout] [name...]")
            .short("print a greeting")
            .long("Greet prints a greeting for every name given on the command line,\ndefaulting to 'world' when no names are given.")
            .flag(
                Arg::new("shout")
                    .long("shout")
                    .action(ArgAction::SetTrue)
                    .help("print the greeting in upper case"),
            )
            .run(|_, matches, args| {
                let shout = matches.get_flag("shout");
                let names: Vec<&str> = if args.is_empty() {
                    vec!["world"]
                } else {
                    args.iter().map(String::as_str).collect()
                };
                for name in names {
                    let line = format!("hello, {name}");
                    if shout {
                        println!("{}", line.to_uppercase());
                    } else {
                        println!("{line}");
                    }
                }
            }),
    );

    root.add_command(
        Command::new("version")
            .usage("rudder-demo version")
            .short("print the dispatcher version")
            .long("Version prints the rudder library version this demo was built against.")
            .run(|_, _, _| println!("rudder {}", rudder::VERSION)),
    );

    // Placeholder without a handler: invisible to lookup and listings.
    root.add_command(Command::new("status").short("not implemented yet"));

    root.execute();
}
