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

use crate::{GearingError, Result};

/// A tyre size together with its rolling circumference in metres
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSize {
    pub name: &'static str,
    pub circumference: f64
}

impl WheelSize {
    const fn new(name: &'static str, circumference: f64) -> WheelSize {
        WheelSize { name, circumference }
    }
}

impl std::fmt::Display for WheelSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

pub const WHEEL_SIZES: &[WheelSize] = &[
    WheelSize::new("700x18C", 2.07),
    WheelSize::new("700x19C", 2.08),
    WheelSize::new("700x20C", 2.086),
    WheelSize::new("700x23C", 2.096),
    WheelSize::new("700x25C", 2.105),
    WheelSize::new("700x26C", 2.115),
    WheelSize::new("700C", 2.13),
    WheelSize::new("700x28C", 2.136),
    WheelSize::new("700x30C", 2.146),
    WheelSize::new("700x32C", 2.155),
    WheelSize::new("700x35C", 2.168),
    WheelSize::new("700x38C", 2.18),
    WheelSize::new("700x40C", 2.2),
    WheelSize::new("700x44C", 2.235),
    WheelSize::new("700x45C", 2.242),
    WheelSize::new("700x47C", 2.268),
    WheelSize::new("650x20C", 1.938),
    WheelSize::new("650x23C", 1.944),
    WheelSize::new("650x35A", 2.09),
    WheelSize::new("650x38B", 2.105),
    WheelSize::new("650x38A", 2.125),
    WheelSize::new("12x1.75", 0.935),
    WheelSize::new("12x1.95", 0.94),
    WheelSize::new("14x1.50", 1.02),
    WheelSize::new("14x1.75", 1.055),
    WheelSize::new("16x1.50", 1.185),
    WheelSize::new("16x1.75", 1.195),
    WheelSize::new("16x2.00", 1.245),
    WheelSize::new("16x1-1/8", 1.29),
    WheelSize::new("16x1-3/8", 1.3),
    WheelSize::new("18x1.50", 1.34),
    WheelSize::new("18x1.75", 1.35),
    WheelSize::new("20x1.25", 1.45),
    WheelSize::new("20x1.35", 1.46),
    WheelSize::new("20x1.50", 1.49),
    WheelSize::new("20x1.75", 1.515),
    WheelSize::new("20x1.95", 1.565),
    WheelSize::new("20x1-1/8", 1.545),
    WheelSize::new("20x1-3/8", 1.615),
    WheelSize::new("22x1-3/8", 1.77),
    WheelSize::new("22x1-1/2", 1.785),
    WheelSize::new("24x3/4", 1.785),
    WheelSize::new("24x1", 1.753),
    WheelSize::new("24x1-1/8", 1.795),
    WheelSize::new("24x1-1/4", 1.905),
    WheelSize::new("24x1.75", 1.89),
    WheelSize::new("24x2.00", 1.925),
    WheelSize::new("24x2.125", 1.965),
    WheelSize::new("26x7/8", 1.92),
    WheelSize::new("26x1.25", 1.95),
    WheelSize::new("26x1.40", 2.005),
    WheelSize::new("26x1.50", 2.01),
    WheelSize::new("26x1.75", 2.023),
    WheelSize::new("26x1.95", 2.05),
    WheelSize::new("26x2.00", 2.055),
    WheelSize::new("26x2.1", 2.068),
    WheelSize::new("26x2.125", 2.07),
    WheelSize::new("26x2.35", 2.083),
    WheelSize::new("26x3.00", 2.17),
    WheelSize::new("26x1-1.0", 1.913),
    WheelSize::new("26x1", 1.952),
    WheelSize::new("26x1-1/8", 1.97),
    WheelSize::new("26x1-3/8", 2.068),
    WheelSize::new("26x1-1/2", 2.1),
    WheelSize::new("27x1", 2.145),
    WheelSize::new("27x1-1/8", 2.155),
    WheelSize::new("27x1-1/4", 2.161),
    WheelSize::new("27x1-3/8", 2.169),
    WheelSize::new("27.5x1.50", 2.079),
    WheelSize::new("27.5x1.95", 2.09),
    WheelSize::new("27.5x2.10", 2.148),
    WheelSize::new("27.5x2.25", 2.182),
    WheelSize::new("29x2.25", 2.281),
    WheelSize::new("29x2.1", 2.288),
    WheelSize::new("29x2.2", 2.298),
    WheelSize::new("29x2.3", 2.326),
];

pub fn find(name: &str) -> Result<&'static WheelSize> {
    WHEEL_SIZES.iter()
        .find(|wheel| wheel.name == name)
        .ok_or_else(|| GearingError::UnknownWheelSize(name.to_string()))
}

pub fn circumference_for(name: &str) -> Option<f64> {
    find(name).ok().map(|wheel| wheel.circumference)
}

pub fn names() -> impl Iterator<Item=&'static str> {
    WHEEL_SIZES.iter().map(|wheel| wheel.name)
}

#[cfg(test)]
mod tests {
    use crate::GearingError;
    use crate::wheel::{circumference_for, find, names, WHEEL_SIZES};

    #[test]
    fn lookup_known_sizes() {
        assert_eq!(circumference_for("700x25C"), Some(2.105));
        assert_eq!(circumference_for("26x2.1"), Some(2.068));
        assert_eq!(circumference_for("29x2.3"), Some(2.326));
        assert_eq!(circumference_for("24x3/4"), Some(1.785));
        assert_eq!(find("700C").unwrap().circumference, 2.13);
    }

    #[test]
    fn unknown_size_is_an_error() {
        match find("31x9") {
            Err(GearingError::UnknownWheelSize(name)) => assert_eq!(name, "31x9"),
            other => panic!("Unexpected result {:?}", other)
        }
        assert_eq!(circumference_for(""), None);
    }

    #[test]
    fn catalogue_is_ordered_and_unique() {
        let all: Vec<&str> = names().collect();
        assert_eq!(all.len(), WHEEL_SIZES.len());
        assert_eq!(all.first(), Some(&"700x18C"));
        assert_eq!(all.last(), Some(&"29x2.3"));
        let mut deduped = all.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), all.len());
        assert!(WHEEL_SIZES.iter().all(|w| w.circumference > 0.9 && w.circumference < 2.4));
    }
}
