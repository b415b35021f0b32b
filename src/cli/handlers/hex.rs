use crate::cli::{args::HexArgs, config::create_codec, global::GlobalArgs, handlers::read_input};
use hashids::ProfileRegistry;

pub fn handle_encode(
    args: HexArgs,
    global: &GlobalArgs,
    registry: &ProfileRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.input)?;
    let hex = input.trim();

    let hashids = create_codec(registry, global)?;
    let hash = hashids.encode_hex(hex);
    if hash.is_empty() {
        return Err(format!("Invalid hex string '{}'", hex).into());
    }

    println!("{}", hash);
    Ok(())
}

pub fn handle_decode(
    args: HexArgs,
    global: &GlobalArgs,
    registry: &ProfileRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.input)?;
    let hash = input.trim();

    let hashids = create_codec(registry, global)?;
    let hex = hashids.decode_hex(hash);
    if hex.is_empty() {
        return Err(format!("Hash '{}' is not valid for this configuration", hash).into());
    }

    println!("{}", hex);
    Ok(())
}
