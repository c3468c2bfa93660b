use clap::Parser;
use here_search::utils::error::{ErrorSeverity, HereError};
use here_search::utils::{logger, validation::Validate};
use here_search::{CliConfig, Command, HereApi};
use serde::Serialize;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);
    tracing::debug!("Starting here-search CLI");

    match run(&cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

async fn run(cli: &CliConfig) -> Result<String, HereError> {
    let config = cli.client_config()?;
    config.validate()?;

    let api = HereApi::from_config(&config);
    tracing::debug!("Using language {}", api.language());

    match &cli.command {
        Command::Discover {
            at,
            limit,
            query,
            in_filter,
        } => to_json(&api.discover(*at, *limit, query, in_filter).await?),
        Command::Geocode { query } => to_json(&api.geocode(query).await?),
        Command::Autosuggest { at, limit, query } => {
            to_json(&api.autosuggest(*at, *limit, query).await?)
        }
        Command::Browse {
            at,
            limit,
            categories,
        } => to_json(&api.browse(*at, *limit, categories.as_slice()).await?),
        Command::Lookup { id } => to_json(&api.lookup(id).await?),
        Command::ReverseGeocode { at } => to_json(&api.reverse_geocode(*at).await?),
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, HereError> {
    Ok(serde_json::to_string_pretty(value)?)
}
