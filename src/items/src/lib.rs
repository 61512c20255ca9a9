//src/items/src/lib.rs
//! Base templates and quality tiers for the armor compendium.

use strum::EnumIter;

pub use crate::armor::{ARMOR_TYPES, ArmorTemplate, Penalties, UntrainedPenalty};
pub use crate::helmet::{HELMETS, HelmetTemplate};
pub use crate::quality::Quality;
pub use crate::shield::{SHIELDS, ShieldTemplate};

pub mod armor;
pub mod helmet;
pub mod quality;
pub mod shield;

/// Template category, in compendium order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ItemCategory {
    Armor,  // full suits
    Helmet, // head only
    Shield, // shield slot only
}

impl ItemCategory {
    /// Label used in the generation report
    pub fn label(&self) -> &'static str {
        match self {
            ItemCategory::Armor => "full armor suits",
            ItemCategory::Helmet => "helmets",
            ItemCategory::Shield => "shields",
        }
    }

    /// Number of base templates in this category's table
    pub fn template_count(&self) -> usize {
        match self {
            ItemCategory::Armor => ARMOR_TYPES.len(),
            ItemCategory::Helmet => HELMETS.len(),
            ItemCategory::Shield => SHIELDS.len(),
        }
    }

    /// Number of records this category contributes to the pack
    pub fn entry_count(&self) -> usize {
        self.template_count() * Quality::ALL.len()
    }
}

/// Shared view over the three template tables
pub trait ItemTemplate {
    fn name(&self) -> &str;

    /// Armor dice granted by the item
    fn dice(&self) -> u32;

    /// Cost at run-of-the-mill quality
    fn base_cost(&self) -> u32;

    fn description(&self) -> &str;

    /// Icon path in the host's asset library
    fn img(&self) -> &str;

    fn category(&self) -> ItemCategory;

    fn display_name(&self, quality: Quality) -> String {
        quality.display_name(self.name())
    }

    fn point_cost(&self, quality: Quality) -> u32 {
        quality.cost(self.base_cost())
    }

    fn full_description(&self, quality: Quality) -> String {
        quality.describe(self.description())
    }
}
