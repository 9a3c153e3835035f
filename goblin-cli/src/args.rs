use clap::{Args, Parser, Subcommand};
use goblin::types::TranslatorError;

pub mod version {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const NAME: &str = "Goblin CLI";
    pub const AUTHORS: &str = "Goblin Team";
}
use version::{AUTHORS, NAME, VERSION};

#[derive(Debug, Parser)]
#[clap(name = NAME, version = VERSION, author = AUTHORS)]
pub struct GoblinCli {
    #[clap(short, long, global = true, help = "Log translator activity to stderr")]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: CommandType,
}

#[derive(Debug, Subcommand)]
pub enum CommandType {
    /// Translate a traversal descriptor into a Gremlin script
    Translate(TranslateCommand),

    /// Write a default translator config
    Init(InitCommand),
}

#[derive(Debug, Args)]
#[clap(name = "translate", about = "Translate a traversal descriptor into a Gremlin script")]
pub struct TranslateCommand {
    #[clap(help = "Path to the JSON traversal descriptor")]
    pub file: String,

    #[clap(short, long, help = "Path to a translator config file")]
    pub config: Option<String>,

    #[clap(short, long, help = "Prefix written before lambda markers")]
    pub lambda_prefix: Option<String>,
}

#[derive(Debug, Args)]
#[clap(name = "init", about = "Write a default translator config")]
pub struct InitCommand {
    #[clap(short, long, help = "Directory to write config.json into")]
    pub path: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Translator(#[from] TranslatorError),
    #[error("{0}")]
    New(String),
}
