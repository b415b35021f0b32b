use clap::{Args, Subcommand};

/// Arguments for encoding numbers
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Numbers to encode (reads whitespace or comma separated numbers from stdin if not provided)
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<String>,
}

/// Arguments for decoding a hash
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Hash to decode (reads from stdin if not provided)
    pub hash: Option<String>,

    /// Output as a JSON array
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the hex subcommands
#[derive(Args, Debug)]
pub struct HexArgs {
    /// Input value (reads from stdin if not provided)
    pub input: Option<String>,
}

/// Config subcommand actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// List available profiles
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the settings and derived tables of a profile
    Show {
        /// Profile name
        profile: String,
    },
}
