use anyhow::Result;
use clap::Parser;
use ialirt_data_access::{Instance, QueryParams, commands};
use log::LevelFilter;

/// ialirt-data-access - query the I-ALiRT log API
///
/// The API URL defaults to https://ialirt.dev.imap-mission.com. It can also be
/// set with the IALIRT_DATA_ACCESS_URL environment variable; --url overrides both.
///
/// Examples:
///   ialirt-data-access ialirt-log-query --year 2024 --doy 045 --instance 1
#[derive(Parser, Debug)]
#[command(name = "ialirt-data-access", version = env!("IALIRT_DATA_ACCESS_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// URL of the I-ALiRT API
    #[arg(long, value_name = "URL", global = true)]
    url: Option<String>,

    /// Print lots of debugging statements
    #[arg(long, global = true)]
    debug: bool,

    /// Add verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl Cli {
    fn log_level(&self) -> Option<LevelFilter> {
        if self.debug {
            Some(LevelFilter::Debug)
        } else if self.verbose {
            Some(LevelFilter::Info)
        } else {
            None
        }
    }
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Query the log files available for a day
    #[command(name = "ialirt-log-query")]
    LogQuery(LogQueryArgs),
}

#[derive(clap::Args, Debug)]
struct LogQueryArgs {
    /// Year
    #[arg(long)]
    year: String,

    /// Day of year
    #[arg(long)]
    doy: String,

    /// Instance
    #[arg(long, value_enum)]
    instance: Instance,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = cli.log_level() {
        logger.filter_level(level);
    }
    logger.init();

    let runtime = ialirt_data_access::runtime::RealRuntime;

    match cli.command {
        Commands::LogQuery(args) => {
            let params = QueryParams::new(args.year, args.doy, args.instance);
            commands::log_query(&runtime, cli.url, params).await?
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_log_query_parsing() {
        let cli = Cli::try_parse_from([
            "ialirt-data-access",
            "ialirt-log-query",
            "--year",
            "2024",
            "--doy",
            "045",
            "--instance",
            "1",
        ])
        .unwrap();
        assert_eq!(cli.url, None);
        assert_eq!(cli.log_level(), None);

        let Commands::LogQuery(args) = cli.command;
        assert_eq!(args.year, "2024");
        assert_eq!(args.doy, "045");
        assert_eq!(args.instance, Instance::One);
    }

    #[test]
    fn test_cli_global_flags() {
        let cli = Cli::try_parse_from([
            "ialirt-data-access",
            "--url",
            "http://localhost:8080",
            "-v",
            "ialirt-log-query",
            "--year",
            "2024",
            "--doy",
            "045",
            "--instance",
            "2",
        ])
        .unwrap();
        assert_eq!(cli.url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(cli.log_level(), Some(LevelFilter::Info));
    }

    #[test]
    fn test_cli_debug_wins_over_verbose() {
        let cli = Cli::try_parse_from([
            "ialirt-data-access",
            "ialirt-log-query",
            "--year",
            "2024",
            "--doy",
            "045",
            "--instance",
            "2",
            "--verbose",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level(), Some(LevelFilter::Debug));
    }

    #[test]
    fn test_cli_invalid_instance_fails() {
        let result = Cli::try_parse_from([
            "ialirt-data-access",
            "ialirt-log-query",
            "--year",
            "2024",
            "--doy",
            "045",
            "--instance",
            "3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_missing_parameter_fails() {
        let result = Cli::try_parse_from([
            "ialirt-data-access",
            "ialirt-log-query",
            "--year",
            "2024",
            "--instance",
            "1",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_no_subcommand_fails() {
        let result = Cli::try_parse_from(["ialirt-data-access"]);
        assert!(result.is_err());
    }
}
