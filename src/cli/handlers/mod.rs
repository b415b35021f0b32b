pub mod config;
pub mod decode;
pub mod encode;
pub mod hex;

use std::io::{self, Read};

/// Returns the argument if given, otherwise everything on stdin.
pub fn read_input(arg: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    match arg {
        Some(value) => Ok(value),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
