use args::{CliError, CommandType, GoblinCli, InitCommand, TranslateCommand};
use clap::Parser;
use goblin::{config::TranslatorConfig, protocol::descriptor::TraversalDescriptor};
use std::{fs, path::PathBuf, process};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod args;

const CONFIG_FILE: &str = "config.json";

fn main() {
    let args = GoblinCli::parse();

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) if args.verbose => EnvFilter::new("goblin=debug,goblin_cli=debug"),
        Err(_) => EnvFilter::new("warn"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match args.command {
        CommandType::Translate(command) => translate(&command).map(|program| println!("{}", program)),
        CommandType::Init(command) => init(&command).map(|path| {
            println!("Wrote default config to {}", path.display());
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// `--config` wins, then `~/.goblin/config.json`, then the defaults.
fn load_config(command: &TranslateCommand) -> Result<TranslatorConfig, CliError> {
    let mut config = match &command.config {
        Some(path) => TranslatorConfig::from_config_file(PathBuf::from(path))?,
        None => match dirs::home_dir().map(|home| home.join(".goblin").join(CONFIG_FILE)) {
            Some(path) if path.exists() => TranslatorConfig::from_config_file(path)?,
            _ => {
                debug!("no config file found, using defaults");
                TranslatorConfig::default()
            }
        },
    };
    if let Some(prefix) = &command.lambda_prefix {
        config.lambda_prefix = prefix.clone();
    }
    Ok(config)
}

fn translate(command: &TranslateCommand) -> Result<String, CliError> {
    let config = load_config(command)?;
    let contents = fs::read_to_string(&command.file)?;
    let descriptor = TraversalDescriptor::from_json(&contents)?;
    info!(file = %command.file, alias = %config.alias, "translating traversal");
    Ok(descriptor.translate(&config)?)
}

fn init(command: &InitCommand) -> Result<PathBuf, CliError> {
    let dir = match &command.path {
        Some(path) => PathBuf::from(path),
        None => dirs::home_dir()
            .map(|home| home.join(".goblin"))
            .ok_or_else(|| CliError::New("could not determine home directory".to_string()))?,
    };
    fs::create_dir_all(&dir)?;
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Err(CliError::New(format!("{} already exists", path.display())));
    }
    fs::write(&path, TranslatorConfig::init_config())?;
    Ok(path)
}
