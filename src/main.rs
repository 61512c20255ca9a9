use anyhow::anyhow;
use armor_compendium::{PackConfig, build_pack, handle_error};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = PackConfig::default();

    println!("Generating Burning Wheel armor compendium...");

    let summary = build_pack(&config).map_err(|e| {
        anyhow!(
            "Failed to write armor compendium to {}: {}",
            config.output_path.display(),
            handle_error(&e)
        )
    })?;

    println!("{}", summary);
    println!("\nArmor compendium written to: {}", config.output_path.display());
    println!("Done!");

    Ok(())
}
