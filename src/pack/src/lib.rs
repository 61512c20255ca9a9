//src/pack/src/lib.rs
//! Builds the armor compendium records and writes them as a pack file.

use items::{ARMOR_TYPES, HELMETS, ItemCategory, Quality, SHIELDS};
use log::debug;
use rand::Rng;
use std::fmt;
use std::path::PathBuf;
use strum::IntoEnumIterator;

pub use crate::entry::{
    ArmorSystem, Coverage, ENTRY_TYPE, Entry, SHADE, armor_entry, helmet_entry, shield_entry,
};
pub use crate::id::{ID_LENGTH, generate_id, generate_id_with};
pub use crate::writer::PackWriter;

pub mod entry;
pub mod id;
pub mod writer;

/// Where the pack lands, relative to the working directory
pub const DEFAULT_PACK_PATH: &str = "packs/armor.db";

/// Output settings for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackConfig {
    pub output_path: PathBuf,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_PACK_PATH),
        }
    }
}

/// Every suit, then every helmet, then every shield, each at poor,
/// run-of-the-mill and superior quality
pub fn generate_all_entries() -> Vec<Entry> {
    generate_all_entries_with(&mut rand::rng())
}

/// Same as [`generate_all_entries`], ids drawn from `rng`
pub fn generate_all_entries_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<Entry> {
    let mut entries = Vec::with_capacity(PackSummary::expected().total);

    for armor in ARMOR_TYPES {
        for quality in Quality::ALL {
            entries.push(armor_entry(armor, quality, rng));
        }
    }

    for helmet in HELMETS {
        for quality in Quality::ALL {
            entries.push(helmet_entry(helmet, quality, rng));
        }
    }

    for shield in SHIELDS {
        for quality in Quality::ALL {
            entries.push(shield_entry(shield, quality, rng));
        }
    }

    debug!("generated {} entries", entries.len());
    entries
}

/// Per-category record counts of a pack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PackSummary {
    pub total: usize,
    pub armor: usize,
    pub helmets: usize,
    pub shields: usize,
}

impl PackSummary {
    /// Counts a full generation run produces
    pub fn expected() -> Self {
        let armor = ItemCategory::Armor.entry_count();
        let helmets = ItemCategory::Helmet.entry_count();
        let shields = ItemCategory::Shield.entry_count();
        Self {
            total: armor + helmets + shields,
            armor,
            helmets,
            shields,
        }
    }

    /// Count the given entries by category.
    ///
    /// Entries with an unrecognised coverage layout only count toward the total.
    pub fn of(entries: &[Entry]) -> Self {
        entries
            .iter()
            .fold(PackSummary::default(), |mut summary, entry| {
                summary.total += 1;
                match entry.category() {
                    Some(ItemCategory::Armor) => summary.armor += 1,
                    Some(ItemCategory::Helmet) => summary.helmets += 1,
                    Some(ItemCategory::Shield) => summary.shields += 1,
                    None => {}
                }
                summary
            })
    }

    pub fn count(&self, category: ItemCategory) -> usize {
        match category {
            ItemCategory::Armor => self.armor,
            ItemCategory::Helmet => self.helmets,
            ItemCategory::Shield => self.shields,
        }
    }
}

impl fmt::Display for PackSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generated {} entries:", self.total)?;
        for category in ItemCategory::iter() {
            write!(f, "\n  - {} {}", self.count(category), category.label())?;
        }
        Ok(())
    }
}
