use crate::cli::{args::DecodeArgs, config::create_codec, global::GlobalArgs, handlers::read_input};
use hashids::ProfileRegistry;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    registry: &ProfileRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.hash)?;
    let hash = input.trim();

    let hashids = create_codec(registry, global)?;
    let numbers = hashids.decode_unsigned(hash);
    if numbers.is_empty() {
        return Err(format!("Hash '{}' is not valid for this configuration", hash).into());
    }

    if args.json {
        println!("{}", serde_json::to_string(&numbers)?);
    } else {
        let rendered: Vec<String> = numbers.iter().map(u64::to_string).collect();
        println!("{}", rendered.join(" "));
    }
    Ok(())
}
