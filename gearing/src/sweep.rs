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

use ndarray::Array1;
use tracing::debug;
use utils::numeric::index_of_nearest;
use crate::calc::{gear_ratio, power_estimate, GearSetup};
use crate::{Result, OPTIMAL_CADENCE_MAX, OPTIMAL_CADENCE_MIN};

pub const SWEEP_START_RPM: f64 = 60.0;
pub const SWEEP_END_RPM: f64 = 110.0;
pub const SWEEP_STEP_RPM: f64 = 2.0;

/// Speed and flat road power of a single gear across a range of cadences
#[derive(Debug, Clone, PartialEq)]
pub struct CadenceSweep {
    pub chainring: u32,
    pub sprocket: u32,
    pub cadences: Array1<f64>,
    pub speeds: Array1<f64>,
    pub powers: Array1<f64>,
    /// First and last sample index (inclusive) of the optimal cadence band
    pub optimal: (usize, usize)
}

impl CadenceSweep {
    pub fn new(setup: &GearSetup, chainring: u32, sprocket: u32) -> Result<CadenceSweep> {
        let ratio = gear_ratio(chainring, sprocket)?;
        let cadences = Array1::range(SWEEP_START_RPM, SWEEP_END_RPM, SWEEP_STEP_RPM);
        let speeds = cadences.mapv(|cadence| setup.speed_for_ratio(ratio, cadence));
        let powers = speeds.mapv(|speed| power_estimate(speed, 0.0));

        let samples = cadences.to_vec();
        let optimal_start = index_of_nearest(&samples, OPTIMAL_CADENCE_MIN as f64).unwrap_or(0);
        let optimal_end = index_of_nearest(&samples, OPTIMAL_CADENCE_MAX as f64).unwrap_or(optimal_start);
        debug!("Cadence sweep for {}/{}: {} samples, optimal band {}..={}",
               chainring, sprocket, samples.len(), optimal_start, optimal_end);
        Ok(CadenceSweep {
            chainring,
            sprocket,
            cadences,
            speeds,
            powers,
            optimal: (optimal_start, optimal_end)
        })
    }

    /// Cadence values bounding the optimal band
    pub fn optimal_cadences(&self) -> (f64, f64) {
        (self.cadences[self.optimal.0], self.cadences[self.optimal.1])
    }

    pub fn max_speed(&self) -> f64 {
        self.speeds.fold(0.0, |acc, speed| acc.max(*speed))
    }

    pub fn max_power(&self) -> f64 {
        self.powers.fold(0.0, |acc, power| acc.max(*power))
    }
}

#[cfg(test)]
mod tests {
    use crate::bike::BikeType;
    use crate::calc::GearSetup;
    use crate::sweep::CadenceSweep;
    use crate::GearingError;

    fn setup() -> GearSetup {
        GearSetup::new(BikeType::Road.drivetrain().unwrap(), "700x25C", 80).unwrap()
    }

    #[test]
    fn samples_cover_60_to_108() {
        let sweep = CadenceSweep::new(&setup(), 50, 20).unwrap();
        assert_eq!(sweep.cadences.len(), 25);
        assert_eq!(sweep.cadences[0], 60.0);
        assert_eq!(sweep.cadences[24], 108.0);
        assert_eq!(sweep.speeds.len(), sweep.powers.len());
    }

    #[test]
    fn optimal_band() {
        let sweep = CadenceSweep::new(&setup(), 50, 20).unwrap();
        assert_eq!(sweep.optimal, (10, 15));
        assert_eq!(sweep.optimal_cadences(), (80.0, 90.0));
    }

    #[test]
    fn speed_is_linear_and_power_cubic() {
        let sweep = CadenceSweep::new(&setup(), 50, 20).unwrap();
        let ratio = sweep.speeds[15] / sweep.speeds[0];
        assert!((ratio - 1.5).abs() < 1e-9);
        let power_ratio = sweep.powers[15] / sweep.powers[0];
        assert!((power_ratio - 3.375).abs() < 1e-9);
        assert!((sweep.max_speed() - sweep.speeds[24]).abs() < 1e-9);
        assert!((sweep.max_power() - sweep.powers[24]).abs() < 1e-9);
    }

    #[test]
    fn zero_tooth_sprocket() {
        assert!(matches!(CadenceSweep::new(&setup(), 50, 0), Err(GearingError::ZeroTeeth)));
    }
}
