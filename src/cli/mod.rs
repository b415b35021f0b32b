mod args;
mod config;
mod global;
mod handlers;

use clap::{Parser, Subcommand};
use log::LevelFilter;

use args::{ConfigAction, DecodeArgs, EncodeArgs, HexArgs};
use global::GlobalArgs;

#[derive(Parser)]
#[command(name = "hashids")]
#[command(version)]
#[command(about = "Generate short, unique, reversible ids from numbers", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    global: GlobalArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode numbers into a hash
    Encode(EncodeArgs),

    /// Decode a hash back into numbers
    Decode(DecodeArgs),

    /// Encode a hex string into a hash
    EncodeHex(HexArgs),

    /// Decode a hash back into a hex string
    DecodeHex(HexArgs),

    /// Inspect codec profiles
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let level = if cli.global.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();

    let registry = config::load_registry(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Commands::EncodeHex(args) => handlers::hex::handle_encode(args, &cli.global, &registry),
        Commands::DecodeHex(args) => handlers::hex::handle_decode(args, &cli.global, &registry),
        Commands::Config { action } => handlers::config::handle(action, &cli.global, &registry),
    }
}
