use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::debug;

mod config;
pub use config::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    #[default]
    Summer,
    Winter,
}

impl Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Summer => f.write_str("Summer"),
            Season::Winter => f.write_str("Winter"),
        }
    }
}

/// Roof size as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoofInput {
    Area(String),
    Dimensions { length: String, width: String },
}

impl RoofInput {
    /// Roof area in m², zero when any field does not parse.
    pub fn area(&self) -> f64 {
        match self {
            RoofInput::Area(area) => parse_measure(area),
            RoofInput::Dimensions { length, width } => {
                parse_measure(length) * parse_measure(width)
            }
        }
    }
}

/// Parses a user typed measurement, accepting a comma as decimal separator.
/// Anything that is not a finite positive number becomes 0.
pub fn parse_measure(value: &str) -> f64 {
    let normalized = value.trim().replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(number) if number.is_finite() && number > 0.0 => number,
        _ => 0.0,
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub season: Season,
    pub area: f64,
    pub required_mass: f64,
    pub tins: u64,
    pub bottles: u64,
    pub matting_area: f64,
    pub long_rolls: u64,
    pub short_rolls: u64,
}

impl Estimate {
    /// True for the placeholder state shown before a usable size is entered.
    pub fn is_empty(&self) -> bool {
        self.area <= 0.0
    }

    pub fn rolls(&self) -> u64 {
        self.long_rolls.saturating_add(self.short_rolls)
    }
}

#[derive(Default)]
pub struct Estimator {
    config: Config,
}

impl Estimator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn estimate(&self, input: &RoofInput, season: Season) -> Estimate {
        self.estimate_area(input.area(), season)
    }

    /// Never fails: a zero, negative or non finite area yields the empty estimate.
    /// Counts saturate at `u64::MAX` for areas too large to represent.
    pub fn estimate_area(&self, area: f64, season: Season) -> Estimate {
        let config = &self.config;
        if !area.is_finite() || area <= 0.0 {
            return Estimate {
                season,
                ..Default::default()
            };
        }

        let required_mass = area * config.coverage;
        let tins = if required_mass > 0.0 {
            f64::max(1.0, f64::ceil(required_mass / config.tin_size)) as u64
        } else {
            0
        };
        let bottles = tins.saturating_mul(u64::from(self.activator_per_tin(season)));

        let matting_area = area * config.matting_factor;
        let long_rolls = f64::floor(matting_area / config.long_roll_area);
        let remainder = matting_area - long_rolls * config.long_roll_area;
        let mut short_rolls = f64::max(0.0, f64::ceil(remainder / config.short_roll_area)) as u64;
        let long_rolls = long_rolls as u64;
        // Policy: always recommend at least one roll for a non-empty roof.
        if long_rolls == 0 && short_rolls == 0 {
            short_rolls = 1;
        }

        debug!(area, tins, bottles, long_rolls, short_rolls, "Estimated materials");
        Estimate {
            season,
            area,
            required_mass,
            tins,
            bottles,
            matting_area,
            long_rolls,
            short_rolls,
        }
    }

    pub fn activator_per_tin(&self, season: Season) -> u32 {
        match season {
            Season::Summer => self.config.activator_per_tin_summer,
            Season::Winter => self.config.activator_per_tin_winter,
        }
    }

    pub fn activator_rule(&self, season: Season) -> String {
        let per_tin = self.activator_per_tin(season);
        let plural = if per_tin == 1 { "" } else { "s" };
        format!("Activator is required at {per_tin} bottle{plural} per tin ({season}).")
    }

    pub fn matting_recommendation(&self, estimate: &Estimate) -> String {
        if estimate.is_empty() {
            return "Recommended: —".into();
        }
        let mut parts = Vec::new();
        if estimate.long_rolls > 0 {
            parts.push(format!(
                "{} × ({})",
                estimate.long_rolls, self.config.long_roll_label
            ));
        }
        if estimate.short_rolls > 0 {
            parts.push(format!(
                "{} × ({})",
                estimate.short_rolls, self.config.short_roll_label
            ));
        }
        format!("Recommended: {}", parts.join(" + "))
    }
}

#[test]
fn parse_measure_test() {
    assert_eq!(parse_measure("12,5"), 12.5);
    assert_eq!(parse_measure(" 40 "), 40.0);
    assert_eq!(parse_measure(""), 0.0);
    assert_eq!(parse_measure("-3"), 0.0);
    assert_eq!(parse_measure("abc"), 0.0);
    assert_eq!(parse_measure("inf"), 0.0);
}

#[test]
fn activator_rule_test() {
    let estimator = Estimator::default();
    assert_eq!(
        estimator.activator_rule(Season::Summer),
        "Activator is required at 1 bottle per tin (Summer)."
    );
    assert_eq!(
        estimator.activator_rule(Season::Winter),
        "Activator is required at 2 bottles per tin (Winter)."
    );
}
