use crate::demo::{run_demo, run_labels, run_screen, DemoArgs, ScreenArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use eb1_screener::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "EB-1 Eligibility Screener",
    about = "Screen EB-1 petition readiness from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify one submission and print or export its report
    Screen(ScreenArgs),
    /// Print the intake questionnaire in report order
    Labels,
    /// Classify sample profiles covering every outcome band
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Screen(args) => run_screen(args),
        Command::Labels => run_labels(),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn screen_accepts_repeated_overrides() {
        let cli = Cli::try_parse_from([
            "eb1-screener-api",
            "screen",
            "--set",
            "offer=yes",
            "--set",
            "experience=3_years",
            "--format",
            "json",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Screen(args)) => {
                assert_eq!(args.set.len(), 2);
                assert_eq!(args.set[0].0, "offer");
            }
            other => panic!("expected screen command, got {other:?}"),
        }
    }

    #[test]
    fn malformed_override_is_rejected() {
        let result = Cli::try_parse_from(["eb1-screener-api", "screen", "--set", "offer"]);
        assert!(result.is_err());
    }
}
