use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, version, about = "squashpro booking backend")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the backend server
    Serve {
        /// Port number (optional, defaults to 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
    /// Ask the coach for a pre-match tip
    Advice {
        /// Your skill level (Beginner, Intermediate, Advanced, Pro)
        #[arg(short, long, default_value = "Intermediate")]
        skill: String,
        /// Opponent's skill level, if known
        #[arg(short, long)]
        opponent: Option<String>,
        /// What you want advice about
        context: String,
    },
}
