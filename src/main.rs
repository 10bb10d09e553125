//! citypin binary entry point.
//!
//! Loads configuration, builds the resolver over the embedded gazetteer,
//! runs the host command passed on the command line, and prints the
//! resulting status line. The only fatal startup error is a malformed
//! embedded dataset; a missing or incomplete configuration degrades to
//! logged errors per execution.

use anyhow::Result;

mod args;

use args::{CliAction, ParsedArgs, print_help, print_version};
use citypin::config::Config;
use citypin::constants::EXIT_FAILURE;
use citypin::logger::Log;
use citypin::resolution::Resolver;

fn main() {
    let parsed = ParsedArgs::parse(std::env::args());

    match parsed.action {
        CliAction::Run { command, quiet } => {
            if quiet {
                Log::set_enabled(false);
            }
            if let Err(e) = run(&command) {
                Log::set_enabled(true);
                Log::log_error(&format!("{e:#}"));
                std::process::exit(EXIT_FAILURE);
            }
        }
        CliAction::ShowHelp => print_help(),
        CliAction::ShowVersion => print_version(),
        CliAction::ShowHelpDueToError => {
            print_help();
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn run(command: &str) -> Result<()> {
    Log::log_version();

    let config = Config::load()?;
    let mut resolver = Resolver::new(&config)?;

    resolver.handle_command(command);

    Log::log_pipe();
    Log::log_decorated("Status:");
    Log::log_indented(resolver.last_result());
    Log::log_end();

    // The status line is the scriptable output when logging is silenced
    if !Log::is_enabled() {
        println!("{}", resolver.last_result());
    }

    Ok(())
}
