//src/items/src/helmet.rs
use crate::{ItemCategory, ItemTemplate};

/// Helmet covering only the head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelmetTemplate {
    pub name: &'static str,
    pub dice: u32,
    pub base_cost: u32,
    pub description: &'static str,
    pub perception_penalty: u32, // Perception/Observation obstacle penalty
    pub img: &'static str,
}

impl ItemTemplate for HelmetTemplate {
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
        ItemCategory::Helmet
    }
}

pub const HELMETS: &[HelmetTemplate] = &[
    HelmetTemplate {
        name: "Leather Hood",
        dice: 1,
        base_cost: 2,
        description: "A simple leather hood or skull cap that provides minimal protection.",
        perception_penalty: 0,
        img: "icons/equipment/head/hood-leather-brown.webp",
    },
    HelmetTemplate {
        name: "Light Helmet",
        dice: 2,
        base_cost: 3,
        description: "A light helmet or pot helm that covers the head.",
        perception_penalty: 1,
        img: "icons/equipment/head/helm-barbute-scaled-grey.webp",
    },
    HelmetTemplate {
        name: "Spangenhelm",
        dice: 3,
        base_cost: 5,
        description: "A segmented helmet with an open face design.",
        perception_penalty: 1,
        img: "icons/equipment/head/helm-barbute-studded-steel.webp",
    },
    HelmetTemplate {
        name: "Open-faced Bascinet",
        dice: 4,
        base_cost: 8,
        description: "A well-crafted helmet with an open face or barbute design.",
        perception_penalty: 2,
        img: "icons/equipment/head/helm-masked-steel-grey.webp",
    },
    HelmetTemplate {
        name: "Closed Bascinet",
        dice: 5,
        base_cost: 13,
        description: "A closed-face helmet such as a sallet or closed bascinet.",
        perception_penalty: 2,
        img: "icons/equipment/head/helm-full-steel.webp",
    },
    HelmetTemplate {
        name: "Great Helm",
        dice: 6,
        base_cost: 25,
        description: "A massive great helm that fully encloses the head.",
        perception_penalty: 3,
        img: "icons/equipment/head/helm-great-steel-grey.webp",
    },
];
