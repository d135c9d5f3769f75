use ajustes::application::replies;
use ajustes::cli::commands::{Cli, Commands};
use ajustes::config::Settings;
use ajustes::domain::error::DomainError;
use ajustes::Ajustes;
use clap::Parser;
use tokio::io::BufReader;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let settings = match Settings::from_env() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading configuration: {e}");
            std::process::exit(1);
        }
    };

    let app = match Ajustes::new(&settings) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error initializing ajustes: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(app, cli.command).await {
        println!("{}", replies::error_reply(&e));
        if !e.is_expected() {
            std::process::exit(1);
        }
    }
}

async fn run_command(app: Ajustes, cmd: Commands) -> Result<(), DomainError> {
    match cmd {
        Commands::Listar { json, refresh } => {
            if refresh {
                app.refresh().await;
            }
            let names = app.list_names().await?;
            if json {
                println!("{}", to_json(&names));
            } else {
                println!("{}", replies::names_reply(&names));
            }
        }
        Commands::Ajuste {
            code,
            json,
            refresh,
        } => {
            if refresh {
                app.refresh().await;
            }
            let commodities = app.lookup(&code).await?;
            if json {
                println!("{}", to_json(&commodities));
            } else {
                let texts: Vec<String> = commodities.iter().map(replies::commodity_reply).collect();
                println!("{}", texts.join("\n\n"));
            }
        }
        Commands::Manual => {
            println!("{}", replies::help_text());
        }
        Commands::Chat => {
            let input = BufReader::new(tokio::io::stdin());
            if let Err(e) = app.chat(input, tokio::io::stdout()).await {
                error!(error = %e, "chat session aborted: could not read stdin");
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
}
