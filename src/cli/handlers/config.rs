use crate::cli::{args::ConfigAction, global::GlobalArgs};
use hashids::{ProfileConfig, ProfileNotFoundError, ProfileRegistry, find_closest_profile};

pub fn handle(
    action: ConfigAction,
    _global: &GlobalArgs,
    registry: &ProfileRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::List { json } => handle_list(json, registry),
        ConfigAction::Show { profile } => handle_show(&profile, registry),
    }
}

fn handle_list(json: bool, registry: &ProfileRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let names = registry.names();
    let default_name = registry.default_profile_name();

    if json {
        let output = serde_json::json!({
            "default": default_name,
            "profiles": names,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Available profiles:\n");
    for name in &names {
        let Some(profile) = registry.get_profile(name) else {
            continue;
        };
        let marker = if name == default_name { "*" } else { " " };
        println!("{} {:<15} {}", marker, name, summary(profile));
    }
    println!("\n* default profile");

    Ok(())
}

fn summary(profile: &ProfileConfig) -> String {
    let salt = if profile.salt.as_deref().is_some_and(|s| !s.trim().is_empty()) {
        "salted"
    } else {
        "unsalted"
    };
    format!(
        "{:<9} min-length {:<4} {} alphabet chars",
        salt,
        profile.min_length.unwrap_or(0),
        profile.effective_alphabet().chars().count()
    )
}

fn handle_show(name: &str, registry: &ProfileRegistry) -> Result<(), Box<dyn std::error::Error>> {
    let profile = registry.get_profile(name).ok_or_else(|| {
        let suggestion = find_closest_profile(name, &registry.names());
        ProfileNotFoundError::new(name, suggestion)
    })?;

    println!("Profile: {}", name);
    println!("  Salt: {:?}", profile.salt.as_deref().unwrap_or(""));
    println!("  Min length: {}", profile.min_length.unwrap_or(0));
    println!("  Alphabet: {}", profile.effective_alphabet());
    println!("  Separators: {}", profile.effective_separators());

    match profile.build() {
        Ok(hashids) => {
            println!("  Derived tables:");
            println!("    Digits: {}", hashids.alphabet().iter().collect::<String>());
            println!(
                "    Separators: {}",
                hashids.separators().iter().collect::<String>()
            );
            println!("    Guards: {}", hashids.guards().iter().collect::<String>());
        }
        Err(e) => println!("  Invalid: {}", e),
    }

    Ok(())
}
