//src/items/src/shield.rs
use crate::{ItemCategory, ItemTemplate};

/// Shield occupying the shield slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShieldTemplate {
    pub name: &'static str,
    pub dice: u32,
    pub base_cost: u32,
    pub description: &'static str,
    pub img: &'static str,
}

impl ItemTemplate for ShieldTemplate {
    fn name(&self) -> &str {
        self.name
    }
    fn dice(&self) -> u32 {
        self.dice
    }
    fn base_cost(&self) -> u32 {
        self.base_cost
    }
    fn description(&self) -> &str {
        self.description
    }
    fn img(&self) -> &str {
        self.img
    }
    fn category(&self) -> ItemCategory {
        ItemCategory::Shield
    }
}

pub const SHIELDS: &[ShieldTemplate] = &[
    ShieldTemplate {
        name: "Buckler",
        dice: 1,
        base_cost: 2,
        description: "A small buckler shield used for parrying.",
        img: "icons/equipment/shield/buckler-wooden-boss-brown.webp",
    },
    ShieldTemplate {
        name: "Target Shield",
        dice: 2,
        base_cost: 4,
        description: "A medium-sized round target shield.",
        img: "icons/equipment/shield/round-wooden-boss-steel.webp",
    },
    ShieldTemplate {
        name: "Heater Shield",
        dice: 3,
        base_cost: 6,
        description: "A large heater-style shield providing substantial protection.",
        img: "icons/equipment/shield/heater-steel-worn-blue.webp",
    },
    ShieldTemplate {
        name: "Great Shield",
        dice: 4,
        base_cost: 8,
        description: "A massive shield that provides excellent protection at the cost of mobility.",
        img: "icons/equipment/shield/kite-steel-grey.webp",
    },
];
