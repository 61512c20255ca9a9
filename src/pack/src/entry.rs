//src/pack/src/entry.rs
use items::{
    ArmorTemplate, HelmetTemplate, ItemCategory, ItemTemplate, Penalties, Quality,
    ShieldTemplate, UntrainedPenalty,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::id::generate_id_with;

/// Item type the host uses for suits, helmets and shields alike
pub const ENTRY_TYPE: &str = "armor";

/// Shade of every generated item
pub const SHADE: &str = "B";

/// One compendium document, one line of the pack file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub img: String,
    pub system: ArmorSystem,
}

/// Game-system data of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArmorSystem {
    pub point_cost: u32,
    pub quality: Quality,
    pub dice: u32,
    #[serde(flatten)]
    pub coverage: Coverage,
    pub description: String,
    pub equipped: bool,
    pub untrained_penalty: UntrainedPenalty,
    #[serde(flatten)]
    pub penalties: Penalties,
    pub shade: String,
}

/// Covered locations, each with its damage counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coverage {
    pub has_helm: bool,
    pub damage_helm: u32,
    pub has_torso: bool,
    pub damage_torso: u32,
    pub has_left_arm: bool,
    pub damage_left_arm: u32,
    pub has_right_arm: bool,
    pub damage_right_arm: u32,
    pub has_left_leg: bool,
    pub damage_left_leg: u32,
    pub has_right_leg: bool,
    pub damage_right_leg: u32,
    pub has_shield: bool,
    pub damage_shield: u32,
}

impl Coverage {
    /// Every body location, no shield
    pub fn full_suit() -> Self {
        Coverage {
            has_helm: true,
            has_torso: true,
            has_left_arm: true,
            has_right_arm: true,
            has_left_leg: true,
            has_right_leg: true,
            ..Default::default()
        }
    }

    pub fn helm_only() -> Self {
        Coverage {
            has_helm: true,
            ..Default::default()
        }
    }

    pub fn shield_only() -> Self {
        Coverage {
            has_shield: true,
            ..Default::default()
        }
    }

    /// Layout every item of `category` is generated with
    pub fn for_category(category: ItemCategory) -> Self {
        match category {
            ItemCategory::Armor => Self::full_suit(),
            ItemCategory::Helmet => Self::helm_only(),
            ItemCategory::Shield => Self::shield_only(),
        }
    }

    /// Flags in record order: helm, torso, arms, legs, shield
    pub fn flags(&self) -> [bool; 7] {
        [
            self.has_helm,
            self.has_torso,
            self.has_left_arm,
            self.has_right_arm,
            self.has_left_leg,
            self.has_right_leg,
            self.has_shield,
        ]
    }
}

impl Entry {
    /// Category whose coverage layout this entry carries, if any.
    ///
    /// Damage counters are ignored, only the coverage flags are compared.
    pub fn category(&self) -> Option<ItemCategory> {
        let flags = self.system.coverage.flags();
        ItemCategory::iter().find(|category| Coverage::for_category(*category).flags() == flags)
    }
}

fn build_entry<T, R>(
    template: &T,
    quality: Quality,
    untrained_penalty: UntrainedPenalty,
    penalties: Penalties,
    rng: &mut R,
) -> Entry
where
    T: ItemTemplate + ?Sized,
    R: Rng + ?Sized,
{
    Entry {
        id: generate_id_with(rng),
        name: template.display_name(quality),
        kind: ENTRY_TYPE.to_string(),
        img: template.img().to_string(),
        system: ArmorSystem {
            point_cost: template.point_cost(quality),
            quality,
            dice: template.dice(),
            coverage: Coverage::for_category(template.category()),
            description: template.full_description(quality),
            equipped: true,
            untrained_penalty,
            penalties,
            shade: SHADE.to_string(),
        },
    }
}

/// Full suit: every location covered, the template's penalties copied over
pub fn armor_entry<R: Rng + ?Sized>(
    template: &ArmorTemplate,
    quality: Quality,
    rng: &mut R,
) -> Entry {
    build_entry(template, quality, template.untrained, template.penalties, rng)
}

/// Helmet: head only, Perception/Observation is the only penalty
pub fn helmet_entry<R: Rng + ?Sized>(
    template: &HelmetTemplate,
    quality: Quality,
    rng: &mut R,
) -> Entry {
    build_entry(
        template,
        quality,
        UntrainedPenalty::None,
        Penalties::perception(template.perception_penalty),
        rng,
    )
}

/// Shield: shield slot only, no penalties
pub fn shield_entry<R: Rng + ?Sized>(
    template: &ShieldTemplate,
    quality: Quality,
    rng: &mut R,
) -> Entry {
    build_entry(template, quality, UntrainedPenalty::None, Penalties::NONE, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use items::{ARMOR_TYPES, HELMETS, SHIELDS};
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(1234)
    }

    #[test]
    fn poor_gambeson() {
        let entry = armor_entry(&ARMOR_TYPES[0], Quality::Poor, &mut rng());
        assert_eq!(entry.name, "Poor Gambeson");
        assert_eq!(entry.kind, "armor");
        assert_eq!(entry.system.point_cost, 2);
        assert_eq!(entry.system.dice, 1);
        assert_eq!(entry.system.quality, Quality::Poor);
        assert!(
            entry
                .system
                .description
                .ends_with("all 1s rolled count for losing armor dice.")
        );
        assert_eq!(entry.id.len(), 16);
    }

    #[test]
    fn suit_covers_every_location_but_the_shield() {
        let heavy_mail = &ARMOR_TYPES[3];
        let entry = armor_entry(heavy_mail, Quality::Standard, &mut rng());
        assert_eq!(entry.system.coverage, Coverage::full_suit());
        assert!(!entry.system.coverage.has_shield);
        assert_eq!(entry.system.untrained_penalty, UntrainedPenalty::Heavy);
        assert_eq!(entry.system.penalties, heavy_mail.penalties);
        assert_eq!(entry.category(), Some(ItemCategory::Armor));
    }

    #[test]
    fn helmet_only_carries_perception_penalty() {
        let great_helm = HELMETS.last().unwrap();
        let entry = helmet_entry(great_helm, Quality::Superior, &mut rng());
        assert_eq!(entry.name, "Superior Great Helm");
        assert_eq!(entry.system.point_cost, 100);
        assert_eq!(entry.system.coverage.flags(), [true, false, false, false, false, false, false]);
        assert_eq!(entry.system.penalties, Penalties::perception(3));
        assert_eq!(entry.system.untrained_penalty, UntrainedPenalty::None);
        assert_eq!(entry.category(), Some(ItemCategory::Helmet));
    }

    #[test]
    fn shield_has_no_penalties() {
        let entry = shield_entry(&SHIELDS[2], Quality::Standard, &mut rng());
        assert_eq!(entry.name, "Heater Shield");
        assert_eq!(entry.system.description, SHIELDS[2].description);
        assert_eq!(entry.system.coverage.flags(), [false, false, false, false, false, false, true]);
        assert_eq!(entry.system.penalties, Penalties::NONE);
        assert_eq!(entry.category(), Some(ItemCategory::Shield));
    }

    #[test]
    fn fixed_fields_are_constant() {
        let entry = shield_entry(&SHIELDS[0], Quality::Poor, &mut rng());
        assert!(entry.system.equipped);
        assert_eq!(entry.system.shade, "B");
        assert_eq!(entry.system.coverage, Coverage::shield_only());
        assert_eq!(entry.system.coverage.damage_shield, 0);
        assert_eq!(entry.img, SHIELDS[0].img);
    }

    #[test]
    fn builders_use_the_template_category_layout() {
        let mut rng = rng();
        let suit = armor_entry(&ARMOR_TYPES[2], Quality::Poor, &mut rng);
        let helmet = helmet_entry(&HELMETS[2], Quality::Poor, &mut rng);
        let shield = shield_entry(&SHIELDS[1], Quality::Poor, &mut rng);

        assert_eq!(suit.system.coverage, Coverage::for_category(ARMOR_TYPES[2].category()));
        assert_eq!(helmet.system.coverage, Coverage::for_category(HELMETS[2].category()));
        assert_eq!(shield.system.coverage, Coverage::for_category(SHIELDS[1].category()));
    }

    #[test]
    fn unknown_layout_has_no_category() {
        let mut entry = armor_entry(&ARMOR_TYPES[0], Quality::Standard, &mut rng());
        entry.system.coverage = Coverage {
            has_torso: true,
            ..Default::default()
        };
        assert_eq!(entry.category(), None);

        // damage taken does not change what the item is
        entry.system.coverage = Coverage {
            damage_helm: 2,
            ..Coverage::helm_only()
        };
        assert_eq!(entry.category(), Some(ItemCategory::Helmet));
    }

    #[test]
    fn plate_untrained_penalty_serializes_lowercase() {
        let full_plate = ARMOR_TYPES.last().unwrap();
        let value = serde_json::to_value(armor_entry(full_plate, Quality::Superior, &mut rng())).unwrap();
        assert_eq!(value["system"]["untrainedPenalty"], "plate");
    }

    #[test]
    fn serialized_keys_follow_host_layout() {
        let entry = helmet_entry(&HELMETS[1], Quality::Poor, &mut rng());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.starts_with(r#"{"_id":""#));
        assert!(json.contains(r#""type":"armor""#));
        assert!(json.contains(r#""system":{"pointCost":2,"quality":"poor","dice":2,"hasHelm":true,"damageHelm":0,"#));
        assert!(json.contains(r#""untrainedPenalty":"none","agilityPenalty":0,"#));
        assert!(json.ends_with(r#""perceptionObservationPenalty":1,"shade":"B"}}"#));
    }

    #[test]
    fn standard_quality_tag_is_run_of_the_mill() {
        let entry = armor_entry(&ARMOR_TYPES[1], Quality::Standard, &mut rng());
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["system"]["quality"], "run of the mill");
        assert_eq!(value["name"], "Reinforced Leather");
    }
}
