use crate::cli::{args::EncodeArgs, config::create_codec, global::GlobalArgs, handlers::read_input};
use hashids::ProfileRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    registry: &ProfileRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = if args.numbers.is_empty() {
        read_input(None)?
    } else {
        args.numbers.join(" ")
    };

    let numbers = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_number)
        .collect::<Result<Vec<u64>, String>>()?;

    if numbers.is_empty() {
        return Err("No numbers to encode".into());
    }

    let hashids = create_codec(registry, global)?;
    println!("{}", hashids.encode_unsigned(&numbers));
    Ok(())
}

fn parse_number(token: &str) -> Result<u64, String> {
    if let Some(magnitude) = token.strip_prefix('-') {
        if magnitude.parse::<u64>().is_ok() {
            return Err(format!("Cannot encode negative number {}", token));
        }
    }
    token
        .parse::<u64>()
        .map_err(|e| format!("Invalid number '{}': {}", token, e))
}
