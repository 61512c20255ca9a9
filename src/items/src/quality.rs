//src/items/src/quality.rs
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Craftsmanship tier applied on top of a base template
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Poor, // half price, 1s strip armor dice
    #[strum(serialize = "run of the mill")]
    #[serde(rename = "run of the mill")]
    Standard,
    Superior, // 4x price, first 1 is rerolled
}

impl Quality {
    /// Generation order: poor, standard, superior
    pub const ALL: [Quality; 3] = [Quality::Poor, Quality::Standard, Quality::Superior];

    /// Prefix put in front of the template name
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Quality::Poor => Some("Poor"),
            Quality::Standard => None,
            Quality::Superior => Some("Superior"),
        }
    }

    pub fn cost_multiplier(&self) -> f64 {
        match self {
            Quality::Poor => 0.5,
            Quality::Standard => 1.0,
            Quality::Superior => 4.0,
        }
    }

    /// Rules text appended to the template description
    pub fn description_suffix(&self) -> &'static str {
        match self {
            Quality::Poor => {
                " This is poor quality and will fall apart quickly—all 1s rolled count for losing armor dice."
            }
            Quality::Standard => "",
            Quality::Superior => {
                " This is superior quality—only the first 1 counts and is rerolled; if that die comes up a 1 again, an armor die is lost."
            }
        }
    }

    /// Point cost for a template of `base_cost` at this quality.
    ///
    /// Poor items round half up, the other tiers truncate.
    pub fn cost(&self, base_cost: u32) -> u32 {
        let cost = base_cost as f64 * self.cost_multiplier();
        match self {
            Quality::Poor => (cost + 0.5) as u32,
            _ => cost as u32,
        }
    }

    /// "Poor Gambeson", "Gambeson", "Superior Gambeson"
    pub fn display_name(&self, base_name: &str) -> String {
        match self.prefix() {
            Some(prefix) => format!("{} {}", prefix, base_name),
            None => base_name.to_string(),
        }
    }

    pub fn describe(&self, base_description: &str) -> String {
        format!("{}{}", base_description, self.description_suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn poor_cost_rounds_half_up() {
        assert_eq!(Quality::Poor.cost(3), 2);
        assert_eq!(Quality::Poor.cost(6), 3);
        assert_eq!(Quality::Poor.cost(1), 1);
        assert_eq!(Quality::Poor.cost(0), 0);
        assert_eq!(Quality::Poor.cost(13), 7);
    }

    #[test]
    fn superior_cost_is_four_times_base() {
        assert_eq!(Quality::Superior.cost(50), 200);
        assert_eq!(Quality::Superior.cost(0), 0);
    }

    #[test]
    fn iteration_order_matches_generation_order() {
        let order: Vec<Quality> = Quality::iter().collect();
        assert_eq!(order, Quality::ALL.to_vec());
    }

    #[test]
    fn tags_match_compendium_values() {
        assert_eq!(Quality::Poor.to_string(), "poor");
        assert_eq!(Quality::Standard.to_string(), "run of the mill");
        assert_eq!(Quality::Superior.to_string(), "superior");
        assert_eq!(Quality::from_str("run of the mill").unwrap(), Quality::Standard);
    }

    #[test]
    fn standard_name_has_no_leading_space() {
        assert_eq!(Quality::Standard.display_name("Buckler"), "Buckler");
        assert_eq!(Quality::Poor.display_name("Buckler"), "Poor Buckler");
    }

    #[test]
    fn standard_description_is_untouched() {
        assert_eq!(Quality::Standard.describe("A shield."), "A shield.");
        assert!(
            Quality::Superior
                .describe("A shield.")
                .starts_with("A shield. This is superior quality")
        );
    }

    proptest! {
        #[test]
        fn cost_follows_tier_rules(base in 0u32..1_000_000) {
            prop_assert_eq!(Quality::Standard.cost(base), base);
            prop_assert_eq!(Quality::Superior.cost(base), base * 4);
            prop_assert_eq!(Quality::Poor.cost(base), (base + 1) / 2);
        }
    }
}
