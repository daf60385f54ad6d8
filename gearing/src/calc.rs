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

use tracing::debug;
use utils::units::metres_per_minute_to_kmh;
use crate::crossing::{CrossingKind, CrossingMatrix};
use crate::drivetrain::Drivetrain;
use crate::wheel::{self, WheelSize};
use crate::{GearingError, Result, MAX_CADENCE, MIN_CADENCE};

pub fn gear_ratio(chainring: u32, sprocket: u32) -> Result<f64> {
    if sprocket == 0 {
        return Err(GearingError::ZeroTeeth);
    }
    Ok(chainring as f64 / sprocket as f64)
}

/// Road speed in km/h for a gear ratio turning a wheel of `circumference` metres at `cadence` RPM
pub fn speed_kmh(ratio: f64, circumference: f64, cadence: f64) -> f64 {
    metres_per_minute_to_kmh(ratio * circumference * cadence)
}

/// Metres travelled for one turn of the cranks
pub fn development(ratio: f64, circumference: f64) -> f64 {
    ratio * circumference
}

/// Simplified power model, aerodynamic drag only. The result is in relative units
pub fn power_estimate(speed_kmh: f64, slope_pct: f64) -> f64 {
    const DRAG_COEFFICIENT: f64 = 0.004;
    DRAG_COEFFICIENT * (1.0 + slope_pct / 100.0) * speed_kmh.powi(3)
}

#[derive(Debug, Clone, PartialEq)]
pub struct GearCombination {
    pub chainring_idx: usize,
    pub sprocket_idx: usize,
    pub chainring: u32,
    pub sprocket: u32,
    pub ratio: f64,
    pub development: f64,
    pub speed_kmh: f64,
    pub crossing: Option<CrossingKind>
}

impl GearCombination {
    pub fn crosses_chain(&self) -> bool {
        self.crossing.is_some()
    }

    /// `chainring/sprocket` label used on the ratio chart
    pub fn label(&self) -> String {
        format!("{}/{}", self.chainring, self.sprocket)
    }
}

/// A validated drivetrain together with the wheel and cadence it is ridden with
#[derive(Debug, Clone, PartialEq)]
pub struct GearSetup {
    drivetrain: Drivetrain,
    wheel: &'static WheelSize,
    cadence: u32,
    crossings: CrossingMatrix
}

impl GearSetup {
    pub fn new(drivetrain: Drivetrain, wheel_name: &str, cadence: u32) -> Result<GearSetup> {
        drivetrain.validate()?;
        if !(MIN_CADENCE..=MAX_CADENCE).contains(&cadence) {
            return Err(GearingError::CadenceOutOfRange(cadence));
        }
        let wheel = wheel::find(wheel_name)?;
        let crossings = CrossingMatrix::build(&drivetrain);
        debug!("Created gear setup {:?} on {} at {} RPM", drivetrain, wheel.name, cadence);
        Ok(GearSetup { drivetrain, wheel, cadence, crossings })
    }

    pub fn drivetrain(&self) -> &Drivetrain {
        &self.drivetrain
    }

    pub fn wheel(&self) -> &'static WheelSize {
        self.wheel
    }

    pub fn cadence(&self) -> u32 {
        self.cadence
    }

    pub fn crossings(&self) -> &CrossingMatrix {
        &self.crossings
    }

    pub fn speed_for_ratio(&self, ratio: f64, cadence: f64) -> f64 {
        speed_kmh(ratio, self.wheel.circumference, cadence)
    }

    pub fn combination(&self, chainring_idx: usize, sprocket_idx: usize) -> Result<GearCombination> {
        let missing = || GearingError::NoSuchGear(chainring_idx, sprocket_idx);
        let chainring = *self.drivetrain.chainrings().get(chainring_idx).ok_or_else(missing)?;
        let sprocket = *self.drivetrain.sprockets().get(sprocket_idx).ok_or_else(missing)?;
        let ratio = gear_ratio(chainring, sprocket)?;
        Ok(GearCombination {
            chainring_idx,
            sprocket_idx,
            chainring,
            sprocket,
            ratio,
            development: development(ratio, self.wheel.circumference),
            speed_kmh: self.speed_for_ratio(ratio, self.cadence as f64),
            crossing: self.crossings.get(chainring_idx, sprocket_idx)
        })
    }

    /// Every combination, grouped by chainring (largest first) then by sprocket (smallest first)
    pub fn combinations(&self) -> Result<Vec<GearCombination>> {
        let mut out = Vec::with_capacity(self.drivetrain.combination_count());
        for chainring_idx in 0..self.drivetrain.chainring_count() {
            for sprocket_idx in 0..self.drivetrain.sprocket_count() {
                out.push(self.combination(chainring_idx, sprocket_idx)?);
            }
        }
        Ok(out)
    }

    /// Ratios of one chainring across the cassette
    pub fn ratios_for_chainring(&self, chainring_idx: usize) -> Result<Vec<f64>> {
        (0..self.drivetrain.sprocket_count())
            .map(|sprocket_idx| self.combination(chainring_idx, sprocket_idx).map(|c| c.ratio))
            .collect()
    }

    pub fn gear_table(&self) -> Result<GearTable> {
        let mut rows = Vec::with_capacity(self.drivetrain.chainring_count());
        let mut crossing_count = 0;
        for chainring_idx in 0..self.drivetrain.chainring_count() {
            let mut cells = Vec::with_capacity(self.drivetrain.sprocket_count());
            for sprocket_idx in 0..self.drivetrain.sprocket_count() {
                let combination = self.combination(chainring_idx, sprocket_idx)?;
                if combination.crosses_chain() {
                    crossing_count += 1;
                    cells.push(None);
                } else {
                    cells.push(Some(combination.speed_kmh));
                }
            }
            rows.push(GearTableRow { chainring: self.drivetrain.chainrings()[chainring_idx], cells });
        }
        Ok(GearTable {
            cadence: self.cadence,
            sprockets: self.drivetrain.sprockets().to_vec(),
            rows,
            crossing_count,
            total: self.drivetrain.combination_count()
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GearTableRow {
    pub chainring: u32,
    /// Speed of each sprocket, `None` where the combination crosses the chain
    pub cells: Vec<Option<f64>>
}

impl GearTableRow {
    pub fn label(&self) -> String {
        format!("{}T", self.chainring)
    }

    pub fn cell_text(&self) -> Vec<String> {
        self.cells.iter().map(|cell| GearTable::format_cell(*cell)).collect()
    }
}

/// Speeds of every safe combination at the setup's cadence
#[derive(Debug, Clone, PartialEq)]
pub struct GearTable {
    pub cadence: u32,
    pub sprockets: Vec<u32>,
    pub rows: Vec<GearTableRow>,
    pub crossing_count: usize,
    pub total: usize
}

impl GearTable {
    pub const HIDDEN_CELL: &'static str = "---";

    pub fn format_cell(cell: Option<f64>) -> String {
        match cell {
            Some(speed) => format!("{:.1}", speed),
            None => GearTable::HIDDEN_CELL.to_string()
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = format!("{:>6}", "");
        for sprocket in &self.sprockets {
            out.push_str(&format!("{:>7}", sprocket));
        }
        for row in &self.rows {
            out.push_str(&format!("\n{:>6}", row.label()));
            for cell in row.cell_text() {
                out.push_str(&format!("{:>7}", cell));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use crate::bike::BikeType;
    use crate::calc::{development, gear_ratio, power_estimate, speed_kmh, GearSetup};
    use crate::crossing::CrossingKind;
    use crate::drivetrain::Drivetrain;
    use crate::GearingError;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn ratio() {
        assert!(approx_eq(gear_ratio(50, 25).unwrap(), 2.0));
        assert!(approx_eq(gear_ratio(34, 17).unwrap(), 2.0));
        assert!(approx_eq(gear_ratio(42, 14).unwrap(), 3.0));
        assert!(matches!(gear_ratio(42, 0), Err(GearingError::ZeroTeeth)));
    }

    #[test]
    fn speed_and_development() {
        // 50/25 on a 2.105m wheel at 80 RPM
        let speed = speed_kmh(2.0, 2.105, 80.0);
        assert!(approx_eq(speed, 20.208));
        assert!(approx_eq(speed_kmh(2.0, 2.105, 160.0), speed * 2.0));
        assert!(approx_eq(development(2.0, 2.105), 4.21));
    }

    #[test]
    fn power() {
        assert!(approx_eq(power_estimate(10.0, 0.0), 4.0));
        assert!(approx_eq(power_estimate(10.0, 10.0), 4.4));
        assert!(approx_eq(power_estimate(20.0, 0.0), 32.0));
        assert!(approx_eq(power_estimate(0.0, 5.0), 0.0));
    }

    #[test]
    fn setup_rejects_bad_input() {
        let drivetrain = Drivetrain::new(vec![60], vec![11]).unwrap();
        assert!(matches!(GearSetup::new(drivetrain, "700C", 80), Err(GearingError::TeethOutOfRange(60))));
        let drivetrain = BikeType::Road.drivetrain().unwrap();
        assert!(matches!(GearSetup::new(drivetrain, "fat", 80), Err(GearingError::UnknownWheelSize(_))));
    }

    #[test]
    fn setup_rejects_cadence_outside_pedalling_range() {
        let drivetrain = BikeType::Road.drivetrain().unwrap();
        assert!(matches!(GearSetup::new(drivetrain.clone(), "700C", 0), Err(GearingError::CadenceOutOfRange(0))));
        assert!(matches!(GearSetup::new(drivetrain.clone(), "700C", 101), Err(GearingError::CadenceOutOfRange(101))));
        assert_eq!(GearSetup::new(drivetrain.clone(), "700C", 60).unwrap().cadence(), 60);
        assert_eq!(GearSetup::new(drivetrain, "700C", 100).unwrap().cadence(), 100);
    }

    #[test]
    fn combinations_are_chainring_major() {
        let setup = GearSetup::new(BikeType::Road.drivetrain().unwrap(), "700x25C", 80).unwrap();
        let combinations = setup.combinations().unwrap();
        assert_eq!(combinations.len(), 14);
        assert_eq!((combinations[0].chainring, combinations[0].sprocket), (50, 14));
        assert_eq!((combinations[6].chainring, combinations[6].sprocket), (50, 28));
        assert_eq!((combinations[7].chainring, combinations[7].sprocket), (34, 14));
        assert_eq!(combinations[6].crossing, Some(CrossingKind::LargeWithLarge));
        assert_eq!(combinations[7].label(), "34/14");
        assert!(approx_eq(combinations[6].speed_kmh, 50.0 / 28.0 * 2.105 * 80.0 * 60.0 / 1000.0));
    }

    #[test]
    fn table_hides_crossings() {
        let setup = GearSetup::new(BikeType::Mtb.drivetrain().unwrap(), "26x2.1", 80).unwrap();
        let table = setup.gear_table().unwrap();
        assert_eq!(table.total, 21);
        assert_eq!(table.crossing_count, 8);
        assert_eq!(table.rows[0].label(), "42T");
        let hidden: usize = table.rows.iter()
            .map(|row| row.cells.iter().filter(|cell| cell.is_none()).count())
            .sum();
        assert_eq!(hidden, setup.crossings().crossing_count());
        // 42/14 = 3.0 on 2.068m at 80 RPM
        assert_eq!(table.rows[0].cell_text()[0], "29.8");
        assert_eq!(table.rows[0].cell_text()[6], "---");
        assert!(table.to_text().contains("---"));
    }
}
