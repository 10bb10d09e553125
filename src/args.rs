//! Command-line argument parsing and processing.
//!
//! This module handles parsing of command-line arguments and provides a
//! clean interface for the main application logic. It supports the standard
//! help, version, and quiet flags while gracefully handling unknown
//! options. Everything that isn't a flag is joined into the host command
//! text (so `citypin Execute Tokyo` and `citypin "Execute Tokyo"` behave
//! the same).

use citypin::logger::Log;

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run the given host command text
    Run { command: String, quiet: bool },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown or missing arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// # Arguments
    /// * `args` - Iterator over command-line arguments (typically from std::env::args())
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut quiet = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;
        let mut command_parts: Vec<String> = Vec::new();

        for arg in args.into_iter().skip(1) {
            let arg_str = arg.as_ref();
            match arg_str {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--quiet" | "-q" => quiet = true,
                _ => {
                    if arg_str.starts_with('-') {
                        Log::log_warning(&format!("Unknown option: {}", arg_str));
                        unknown_arg_found = true;
                    } else {
                        command_parts.push(arg_str.to_string());
                    }
                }
            }
        }

        let action = if display_help {
            CliAction::ShowHelp
        } else if display_version {
            CliAction::ShowVersion
        } else if unknown_arg_found || command_parts.is_empty() {
            CliAction::ShowHelpDueToError
        } else {
            CliAction::Run {
                command: command_parts.join(" "),
                quiet,
            }
        };

        ParsedArgs { action }
    }
}

/// Print usage information.
pub fn print_help() {
    println!("citypin v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: citypin [OPTIONS] <COMMAND TEXT>");
    println!();
    println!("Resolves a city name against the embedded gazetteer and writes");
    println!("the result section to the configured output file.");
    println!();
    println!("Command text:");
    println!("  Execute <CityName>   Resolve <CityName> (prefix is case-insensitive)");
    println!();
    println!("Options:");
    println!("  -q, --quiet          Suppress log output, print only the status line");
    println!("  -h, --help           Print help information");
    println!("  -V, --version        Print version information");
}

/// Print version information.
pub fn print_version() {
    println!("citypin v{}", env!("CARGO_PKG_VERSION"));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        ParsedArgs::parse(args.iter().copied()).action
    }

    #[test]
    fn test_parse_command_text() {
        assert_eq!(
            parse(&["citypin", "Execute", "Tokyo"]),
            CliAction::Run {
                command: "Execute Tokyo".to_string(),
                quiet: false,
            }
        );
    }

    #[test]
    fn test_parse_quoted_command_text() {
        assert_eq!(
            parse(&["citypin", "Execute Tokyo"]),
            CliAction::Run {
                command: "Execute Tokyo".to_string(),
                quiet: false,
            }
        );
    }

    #[test]
    fn test_quiet_flag() {
        assert_eq!(
            parse(&["citypin", "-q", "Execute", "Delhi"]),
            CliAction::Run {
                command: "Execute Delhi".to_string(),
                quiet: true,
            }
        );
    }

    #[test]
    fn test_help_takes_precedence() {
        assert_eq!(parse(&["citypin", "--help", "Execute", "Tokyo"]), CliAction::ShowHelp);
    }

    #[test]
    fn test_version_flag() {
        assert_eq!(parse(&["citypin", "--version"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_no_command_shows_help_error() {
        assert_eq!(parse(&["citypin"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_unknown_option_shows_help_error() {
        Log::set_enabled(false);
        assert_eq!(
            parse(&["citypin", "--bogus", "Execute", "Tokyo"]),
            CliAction::ShowHelpDueToError
        );
        Log::set_enabled(true);
    }
}
