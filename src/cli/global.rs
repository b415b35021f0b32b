use clap::Args;
use hashids::ProfileConfig;

/// Global arguments that apply to all subcommands
#[derive(Args)]
pub struct GlobalArgs {
    /// Profile to start from (defaults to the configured default profile)
    #[arg(short = 'p', long, global = true)]
    pub profile: Option<String>,

    /// Salt, overriding the profile
    #[arg(short = 's', long, global = true)]
    pub salt: Option<String>,

    /// Minimum hash length, overriding the profile
    #[arg(short = 'm', long, global = true, value_name = "N")]
    pub min_length: Option<usize>,

    /// Alphabet, overriding the profile
    #[arg(short = 'a', long, global = true)]
    pub alphabet: Option<String>,

    /// Separator candidates, overriding the profile
    #[arg(long, global = true)]
    pub separators: Option<String>,

    /// Extra profiles file merged over the built-in and user profiles
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// Profile fields set on the command line.
    pub fn overrides(&self) -> ProfileConfig {
        ProfileConfig {
            salt: self.salt.clone(),
            min_length: self.min_length,
            alphabet: self.alphabet.clone(),
            separators: self.separators.clone(),
        }
    }
}
