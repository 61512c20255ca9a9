//! Burning Wheel armor compendium generator for Foundry VTT.
//!
//! The work lives in the member crates: `items` holds the template and
//! quality tables, `pack` builds and writes the records, `error` carries
//! the shared error type.

pub use error::{CompendiumError, Result, handle_error};
pub use items::{
    ARMOR_TYPES, ArmorTemplate, HELMETS, HelmetTemplate, ItemCategory, ItemTemplate, Penalties,
    Quality, SHIELDS, ShieldTemplate, UntrainedPenalty,
};
pub use pack::{
    Coverage, DEFAULT_PACK_PATH, Entry, PackConfig, PackSummary, PackWriter, generate_all_entries,
    generate_all_entries_with,
};

/// Generate the full compendium and write it to the configured location
pub fn build_pack(config: &PackConfig) -> Result<PackSummary> {
    let entries = generate_all_entries();
    let writer = PackWriter::new(&config.output_path)?;
    writer.write_entries(&entries)?;
    Ok(PackSummary::of(&entries))
}
