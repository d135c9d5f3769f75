use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ajustes", about = "B3 daily settlement prices (ajustes do pregão)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every contract name in today's table
    Listar {
        /// Print JSON instead of one name per line
        #[arg(long)]
        json: bool,
        /// Ignore the cached snapshot and fetch again
        #[arg(long)]
        refresh: bool,
    },
    /// Show the settlement of one contract (e.g. DOLN20)
    Ajuste {
        /// Acronym followed by the 3-character due date code
        code: String,
        #[arg(long)]
        json: bool,
        #[arg(long)]
        refresh: bool,
    },
    /// Print the usage manual
    Manual,
    /// Read chat commands (/listar, /ajuste CODE, /help) from stdin
    Chat,
}
