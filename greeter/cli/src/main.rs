//! Greeting CLI.
//!
//! With no arguments prints `Hello, World from Go!` and exits. Flags can
//! change the name, the runtime label, or switch to JSON output.

use std::io::Write;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use greeter::{DEFAULT_NAME, DEFAULT_RUNTIME_LABEL, Greeter};
use tracing::debug;

/// Print a greeting
#[derive(Parser, Debug)]
#[command(name = "greet")]
#[command(author, version, about = "Print a greeting for a name")]
struct Args {
    /// Name to greet
    #[arg(long, value_name = "NAME", default_value = DEFAULT_NAME)]
    name: String,

    /// Runtime label shown after "from"
    #[arg(long, value_name = "LABEL", default_value = DEFAULT_RUNTIME_LABEL)]
    label: String,

    /// Output in JSON format
    #[arg(long)]
    json: bool,
}

impl Args {
    fn greeter(&self) -> Greeter {
        Greeter::new(self.name.as_str()).with_label(self.label.as_str())
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so stdout carries only the greeting
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();
    debug!(?args, "parsed arguments");

    let greeter = args.greeter();

    if args.json {
        return print_json(&greeter);
    }

    greeter.greet().wrap_err("could not print greeting")?;
    Ok(())
}

fn print_json(greeter: &Greeter) -> color_eyre::Result<()> {
    let json = serde_json::to_string(&greeter.greeting())?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").wrap_err("could not print greeting")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args_uses_defaults() {
        let args = Args::try_parse_from(["greet"]).unwrap();
        assert_eq!(args.name, "World");
        assert_eq!(args.label, "Go");
        assert!(!args.json);
        assert_eq!(args.greeter(), Greeter::default());
    }

    #[test]
    fn test_name_and_label_flags() {
        let args = Args::try_parse_from(["greet", "--name", "Ferris", "--label", "Rust"]).unwrap();
        assert_eq!(args.greeter().message(), "Hello, Ferris from Rust!");
    }

    #[test]
    fn test_empty_name_flag() {
        let args = Args::try_parse_from(["greet", "--name", ""]).unwrap();
        assert_eq!(args.greeter().message(), "Hello,  from Go!");
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["greet", "--loud"]).is_err());
    }

    #[test]
    fn test_args_definition_is_valid() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
