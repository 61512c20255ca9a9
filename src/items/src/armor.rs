//src/items/src/armor.rs
use serde::{Deserialize, Serialize};

use crate::{ItemCategory, ItemTemplate};

/// Penalty category for wearing a suit without armor training
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UntrainedPenalty {
    #[default]
    None,
    Light,
    Heavy,
    Plate,
}

/// Obstacle penalties applied while the item is worn.
///
/// Serialized flat into the record with the host system's field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Penalties {
    #[serde(rename = "agilityPenalty")]
    pub agility: u32,
    #[serde(rename = "speedObPenalty")]
    pub speed_ob: u32,
    #[serde(rename = "speedDiePenalty")]
    pub speed_die: u32,
    #[serde(rename = "climbingPenalty")]
    pub climbing: u32,
    #[serde(rename = "healthFortePenalty")]
    pub health_forte: u32,
    #[serde(rename = "throwingShootingPenalty")]
    pub throwing_shooting: u32,
    #[serde(rename = "stealthyPenalty")]
    pub stealthy: u32,
    #[serde(rename = "swimmingPenalty")]
    pub swimming: u32,
    #[serde(rename = "perceptionObservationPenalty")]
    pub perception_observation: u32,
}

impl Penalties {
    pub const NONE: Penalties = Penalties {
        agility: 0,
        speed_ob: 0,
        speed_die: 0,
        climbing: 0,
        health_forte: 0,
        throwing_shooting: 0,
        stealthy: 0,
        swimming: 0,
        perception_observation: 0,
    };

    /// Only the Perception/Observation penalty set, as helmets do
    pub const fn perception(value: u32) -> Self {
        Penalties {
            perception_observation: value,
            ..Self::NONE
        }
    }
}

/// Full suit of armor covering every body location
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmorTemplate {
    pub name: &'static str,
    pub dice: u32,      // armor dice
    pub base_cost: u32, // resource points at run-of-the-mill quality
    pub description: &'static str,
    pub untrained: UntrainedPenalty,
    pub penalties: Penalties,
    pub img: &'static str,
}

impl ItemTemplate for ArmorTemplate {
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
        ItemCategory::Armor
    }
}

/// Armor suits in compendium order
pub const ARMOR_TYPES: &[ArmorTemplate] = &[
    ArmorTemplate {
        name: "Gambeson",
        dice: 1,
        base_cost: 3,
        description: "Gambesons are cloth, padded armor and thin, boiled leather. This armor was cheap, easy to make and effective when enough was worn.",
        untrained: UntrainedPenalty::None,
        penalties: Penalties {
            agility: 0,
            speed_ob: 0,
            speed_die: 0,
            climbing: 0,
            health_forte: 0,
            throwing_shooting: 0,
            stealthy: 0,
            swimming: 0,
            perception_observation: 0,
        },
        img: "icons/equipment/chest/breastplate-layered-leather-brown.webp",
    },
    ArmorTemplate {
        name: "Reinforced Leather",
        dice: 2,
        base_cost: 6,
        description: "Reinforced leather was boiled and reinforced with metal rings, small plates or lamellar. This was probably the most popular armor for foot soldiers worldwide. It was fairly cheap and very effective; it can stop all but the most powerful blows.",
        untrained: UntrainedPenalty::None,
        penalties: Penalties {
            agility: 1,
            speed_ob: 0,
            speed_die: 0,
            climbing: 0,
            health_forte: 1,
            throwing_shooting: 0,
            stealthy: 0,
            swimming: 1,
            perception_observation: 0,
        },
        img: "icons/equipment/chest/breastplate-leather-studded-brown.webp",
    },
    ArmorTemplate {
        name: "Light Mail",
        dice: 3,
        base_cost: 10,
        description: "Light mail is either a light chain shirt or a heavy gambeson with a coat of metal plates sewn into the cloth. It's light, flexible and concealable.",
        untrained: UntrainedPenalty::Light,
        penalties: Penalties {
            agility: 1,
            speed_ob: 1,
            speed_die: 1,
            climbing: 0,
            health_forte: 1,
            throwing_shooting: 1,
            stealthy: 1,
            swimming: 1,
            perception_observation: 0,
        },
        img: "icons/equipment/chest/breastplate-scale-grey.webp",
    },
    ArmorTemplate {
        name: "Heavy Mail",
        dice: 4,
        base_cost: 15,
        description: "Interlocking rings form a shirt, hood, sleeves, skirt and leggings all worn over leather or cloth padding—which provides protection from impact (and from the armor itself). More often than not, the chain is covered by a decorative outer layer of cloth as well. Heavy mail is versatile, effective, heavy and expensive.",
        untrained: UntrainedPenalty::Heavy,
        penalties: Penalties {
            agility: 2,
            speed_ob: 1,
            speed_die: 1,
            climbing: 1,
            health_forte: 1,
            throwing_shooting: 2,
            stealthy: 1,
            swimming: 2,
            perception_observation: 0,
        },
        img: "icons/equipment/chest/breastplate-chainmail-iron.webp",
    },
    ArmorTemplate {
        name: "Plated Mail",
        dice: 5,
        base_cost: 20,
        description: "Using the same basic kit as heavy mail, certain areas are reinforced with hard metal plates; usually a breast and back plate, as well as arm and leg greaves. This armor is extraordinarily expensive and very effective.",
        untrained: UntrainedPenalty::Plate,
        penalties: Penalties {
            agility: 2,
            speed_ob: 1,
            speed_die: 1,
            climbing: 1,
            health_forte: 2,
            throwing_shooting: 2,
            stealthy: 2,
            swimming: 2,
            perception_observation: 0,
        },
        img: "icons/equipment/chest/breastplate-helmet-steel.webp",
    },
    ArmorTemplate {
        name: "Full Plate",
        dice: 6,
        base_cost: 50,
        description: "This is the Cadillac and armored tank of the Middle Ages rolled into one. It is the most frequently depicted armor in cinematic recreations of the Middle Ages—though its historical lifespan was actually rather short. This is the stuff of the knights in shining armor. It is rare, heavy, powerful and hideously expensive to maintain.",
        untrained: UntrainedPenalty::Plate,
        penalties: Penalties {
            agility: 1,
            speed_ob: 1,
            speed_die: 1,
            climbing: 1,
            health_forte: 2,
            throwing_shooting: 1,
            stealthy: 1,
            swimming: 3,
            perception_observation: 0,
        },
        img: "icons/equipment/chest/breastplate-collared-steel-grey.webp",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untrained_category_defaults_to_none() {
        assert_eq!(UntrainedPenalty::default(), UntrainedPenalty::None);
        assert_eq!(ARMOR_TYPES[0].untrained, UntrainedPenalty::None);
        assert_eq!(ARMOR_TYPES[5].untrained, UntrainedPenalty::Plate);
    }

    #[test]
    fn suits_get_heavier_down_the_table() {
        let dice: Vec<u32> = ARMOR_TYPES.iter().map(|a| a.dice).collect();
        assert_eq!(dice, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(ARMOR_TYPES[0].penalties, Penalties::NONE);
        assert_eq!(ARMOR_TYPES[5].penalties.swimming, 3);
    }

    #[test]
    fn suits_never_penalize_perception() {
        assert!(
            ARMOR_TYPES
                .iter()
                .all(|a| a.penalties.perception_observation == 0)
        );
    }

    #[test]
    fn perception_only_penalties() {
        let p = Penalties::perception(2);
        assert_eq!(p.perception_observation, 2);
        assert_eq!(
            Penalties {
                perception_observation: 0,
                ..p
            },
            Penalties::NONE
        );
    }
}
