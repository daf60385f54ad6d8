/*
 * Copyright (c):
 * 2025 Gustavo Mondragón
 * gustavms93@gmail.com
 *
 * This file is part of nu-sui.
 *
 * nu-sui is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * nu-sui is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with nu-sui. If not, see <https://www.gnu.org/licenses/>.
 */

use tracing::{debug, info};
use crate::calc::{GearCombination, GearSetup};
use crate::lang::Language;
use crate::{Result, DEFAULT_SLOPE, DEFAULT_TARGET_SPEED};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteConditions {
    pub target_speed_kmh: f64,
    pub slope_pct: f64
}

impl Default for RouteConditions {
    fn default() -> Self {
        RouteConditions {
            target_speed_kmh: DEFAULT_TARGET_SPEED as f64,
            slope_pct: DEFAULT_SLOPE as f64
        }
    }
}

impl RouteConditions {
    /// Speed a combination is expected to hold once the slope is taken into account
    pub fn adjusted_speed(&self, speed_kmh: f64) -> f64 {
        speed_kmh * (1.0 - self.slope_pct / 100.0 * 0.1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainringPosition {
    Large,
    Middle,
    Small,
    /// 1-based position for drivetrains that aren't a double or a triple
    Numbered(usize)
}

impl ChainringPosition {
    pub fn from_index(chainring_idx: usize, chainring_count: usize) -> ChainringPosition {
        match (chainring_count, chainring_idx) {
            (3, 0) | (2, 0) => ChainringPosition::Large,
            (3, 1) => ChainringPosition::Middle,
            (3, 2) | (2, 1) => ChainringPosition::Small,
            (_, idx) => ChainringPosition::Numbered(idx + 1)
        }
    }

    pub fn describe(&self, language: Language) -> String {
        let text = language.text();
        match self {
            ChainringPosition::Large => text.ring_large.to_string(),
            ChainringPosition::Middle => text.ring_middle.to_string(),
            ChainringPosition::Small => text.ring_small.to_string(),
            ChainringPosition::Numbered(n) => format!("#{}", n)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlopeAdvice {
    Steep,
    Uphill,
    Descent,
    Flat
}

impl SlopeAdvice {
    pub fn for_slope(slope_pct: f64) -> SlopeAdvice {
        if slope_pct > 8.0 {
            SlopeAdvice::Steep
        } else if slope_pct > 0.0 {
            SlopeAdvice::Uphill
        } else if slope_pct < -5.0 {
            SlopeAdvice::Descent
        } else {
            SlopeAdvice::Flat
        }
    }

    pub fn text(&self, language: Language) -> &'static str {
        let text = language.text();
        match self {
            SlopeAdvice::Steep => text.advice_steep,
            SlopeAdvice::Uphill => text.advice_uphill,
            SlopeAdvice::Descent => text.advice_descent,
            SlopeAdvice::Flat => text.advice_flat
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// The chosen gear. Its speed, ratio and development are the values at the
    /// setup's cadence, without the slope adjustment
    pub combination: GearCombination,
    pub position: ChainringPosition,
    pub sprocket_number: usize,
    pub chainring_count: usize,
    pub sprocket_count: usize,
    pub crosses_chain: bool,
    pub advice: SlopeAdvice
}

impl Recommendation {
    pub fn gear_text(&self) -> String {
        format!("{}T / {}T", self.combination.chainring, self.combination.sprocket)
    }

    pub fn position_text(&self, language: Language) -> String {
        let ring = self.position.describe(language);
        match language {
            Language::English => format!("Use the {} chainring (of {}) and sprocket #{} (of {})",
                                         ring, self.chainring_count, self.sprocket_number, self.sprocket_count),
            Language::Spanish => format!("Usa el plato {} (de {}) y el piñón #{} (de {})",
                                         ring, self.chainring_count, self.sprocket_number, self.sprocket_count)
        }
    }
}

fn closest<'a, I>(combinations: I, conditions: &RouteConditions) -> Option<&'a GearCombination>
    where I: Iterator<Item = &'a GearCombination>
{
    let mut best: Option<(&GearCombination, f64)> = None;
    for combination in combinations {
        let diff = (conditions.adjusted_speed(combination.speed_kmh) - conditions.target_speed_kmh).abs();
        match best {
            Some((_, best_diff)) if diff >= best_diff => {}
            _ => best = Some((combination, diff))
        }
    }
    best.map(|(combination, _)| combination)
}

/// Find the gear closest to the target speed once adjusted for slope.
///
/// Combinations that cross the chain are only considered when nothing else is available,
/// in which case the result is flagged as crossing. Returns `None` only for a setup with
/// no combinations at all
pub fn recommend(setup: &GearSetup, conditions: &RouteConditions) -> Result<Option<Recommendation>> {
    let combinations = setup.combinations()?;
    let chosen = match closest(combinations.iter().filter(|c| !c.crosses_chain()), conditions) {
        Some(combination) => Some(combination),
        None => {
            info!("Every combination crosses the chain. Recommending from all combinations");
            closest(combinations.iter(), conditions)
        }
    };
    let Some(combination) = chosen else {
        return Ok(None);
    };
    debug!("Recommending {}/{} for {:?}", combination.chainring, combination.sprocket, conditions);
    let chainring_count = setup.drivetrain().chainring_count();
    Ok(Some(Recommendation {
        combination: combination.clone(),
        position: ChainringPosition::from_index(combination.chainring_idx, chainring_count),
        sprocket_number: combination.sprocket_idx + 1,
        chainring_count,
        sprocket_count: setup.drivetrain().sprocket_count(),
        crosses_chain: combination.crosses_chain(),
        advice: SlopeAdvice::for_slope(conditions.slope_pct)
    }))
}

#[cfg(test)]
mod tests {
    use crate::bike::BikeType;
    use crate::calc::GearSetup;
    use crate::drivetrain::Drivetrain;
    use crate::lang::Language;
    use crate::recommend::{recommend, ChainringPosition, RouteConditions, SlopeAdvice};

    fn road_setup() -> GearSetup {
        GearSetup::new(BikeType::Road.drivetrain().unwrap(), "700x25C", 80).unwrap()
    }

    #[test]
    fn closest_safe_gear_on_the_flat() {
        let setup = road_setup();
        let conditions = RouteConditions { target_speed_kmh: 20.0, slope_pct: 0.0 };
        let recommendation = recommend(&setup, &conditions).unwrap().unwrap();
        // 50/24 (21.05 km/h) and 34/16 (21.47 km/h) cross the chain, 34/18 gives 19.08
        assert_eq!(recommendation.gear_text(), "34T / 18T");
        assert!(!recommendation.crosses_chain);
        assert_eq!(recommendation.position, ChainringPosition::Small);
        assert_eq!(recommendation.sprocket_number, 3);
        assert_eq!(recommendation.advice, SlopeAdvice::Flat);
        assert_eq!(recommendation.position_text(Language::English),
                   "Use the small chainring (of 2) and sprocket #3 (of 7)");
    }

    #[test]
    fn never_crosses_when_a_safe_gear_exists() {
        let setup = road_setup();
        for target in 5..=50 {
            let conditions = RouteConditions { target_speed_kmh: target as f64, slope_pct: 0.0 };
            let recommendation = recommend(&setup, &conditions).unwrap().unwrap();
            assert!(!recommendation.crosses_chain, "target {} crossed the chain", target);
        }
    }

    #[test]
    fn slope_lowers_expected_speed() {
        let setup = road_setup();
        let flat = recommend(&setup, &RouteConditions { target_speed_kmh: 30.0, slope_pct: 0.0 }).unwrap().unwrap();
        let climb = recommend(&setup, &RouteConditions { target_speed_kmh: 30.0, slope_pct: 20.0 }).unwrap().unwrap();
        assert!(climb.combination.speed_kmh >= flat.combination.speed_kmh);
        assert_eq!(climb.advice, SlopeAdvice::Steep);
    }

    #[test]
    fn falls_back_to_crossing_gears() {
        let drivetrain = Drivetrain::new(vec![34, 50], vec![16]).unwrap();
        let setup = GearSetup::new(drivetrain, "700C", 80).unwrap();
        let recommendation = recommend(&setup, &RouteConditions::default()).unwrap().unwrap();
        assert!(recommendation.crosses_chain);
        assert_eq!(recommendation.combination.chainring, 34);
        assert_eq!(recommendation.position, ChainringPosition::Small);
    }

    #[test]
    fn chainring_positions() {
        assert_eq!(ChainringPosition::from_index(1, 3), ChainringPosition::Middle);
        assert_eq!(ChainringPosition::from_index(2, 3), ChainringPosition::Small);
        assert_eq!(ChainringPosition::from_index(1, 2), ChainringPosition::Small);
        assert_eq!(ChainringPosition::from_index(0, 1), ChainringPosition::Numbered(1));
        assert_eq!(ChainringPosition::from_index(2, 4), ChainringPosition::Numbered(3));
        assert_eq!(ChainringPosition::Numbered(3).describe(Language::Spanish), "#3");
        assert_eq!(ChainringPosition::Middle.describe(Language::Spanish), "mediano");
    }

    #[test]
    fn slope_advice_bands() {
        assert_eq!(SlopeAdvice::for_slope(9.0), SlopeAdvice::Steep);
        assert_eq!(SlopeAdvice::for_slope(8.0), SlopeAdvice::Uphill);
        assert_eq!(SlopeAdvice::for_slope(1.0), SlopeAdvice::Uphill);
        assert_eq!(SlopeAdvice::for_slope(0.0), SlopeAdvice::Flat);
        assert_eq!(SlopeAdvice::for_slope(-5.0), SlopeAdvice::Flat);
        assert_eq!(SlopeAdvice::for_slope(-6.0), SlopeAdvice::Descent);
    }
}
