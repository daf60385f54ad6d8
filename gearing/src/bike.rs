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

use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::drivetrain::Drivetrain;
use crate::lang::Language;
use crate::wheel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BikeType {
    #[default]
    Mtb,
    Road,
    Urban,
    Custom
}

const MTB_WHEELS: [&str; 7] = ["26x2.1", "26x2.35", "27.5x2.10", "27.5x2.25", "29x2.1", "29x2.25", "29x2.3"];
const ROAD_WHEELS: [&str; 4] = ["700x23C", "700x25C", "700x28C", "700C"];
const URBAN_WHEELS: [&str; 4] = ["700x35C", "700x38C", "700x40C", "26x1.75"];

impl BikeType {
    pub const ALL: [BikeType; 4] = [BikeType::Mtb, BikeType::Road, BikeType::Urban, BikeType::Custom];

    /// Chainring teeth of the preset in the order they are usually quoted
    pub fn chainrings(&self) -> &'static [u32] {
        match self {
            BikeType::Mtb | BikeType::Urban => &[24, 34, 42],
            BikeType::Road => &[34, 50],
            BikeType::Custom => &[]
        }
    }

    pub fn sprockets(&self) -> &'static [u32] {
        match self {
            BikeType::Mtb => &[14, 16, 18, 20, 22, 24, 34],
            BikeType::Road | BikeType::Urban => &[14, 16, 18, 20, 22, 24, 28],
            BikeType::Custom => &[]
        }
    }

    pub fn default_wheel(&self) -> &'static str {
        match self {
            BikeType::Mtb => "26x2.1",
            BikeType::Road => "700x25C",
            BikeType::Urban => "700x35C",
            BikeType::Custom => "700C"
        }
    }

    /// The wheel sizes offered for this kind of bike. A custom bike can use any size in the catalogue
    pub fn wheel_options(&self) -> Vec<&'static str> {
        match self {
            BikeType::Mtb => MTB_WHEELS.to_vec(),
            BikeType::Road => ROAD_WHEELS.to_vec(),
            BikeType::Urban => URBAN_WHEELS.to_vec(),
            BikeType::Custom => wheel::names().collect()
        }
    }

    /// The drivetrain fitted to the preset, `None` for a custom bike which starts empty
    pub fn drivetrain(&self) -> Option<Drivetrain> {
        Drivetrain::new(self.chainrings().to_vec(), self.sprockets().to_vec()).ok()
    }

    pub fn allows_manual_config(&self) -> bool {
        *self == BikeType::Custom
    }

    pub fn label(&self, language: Language) -> &'static str {
        let text = language.text();
        match self {
            BikeType::Mtb => text.bike_mtb,
            BikeType::Road => text.bike_road,
            BikeType::Urban => text.bike_urban,
            BikeType::Custom => text.bike_custom
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            BikeType::Mtb => "mtb",
            BikeType::Road => "road",
            BikeType::Urban => "urban",
            BikeType::Custom => "custom"
        }
    }

    pub fn from_key(key: &str) -> Option<BikeType> {
        BikeType::ALL.into_iter().find(|bike| bike.key() == key.trim().to_ascii_lowercase())
    }
}

impl Display for BikeType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use crate::bike::BikeType;
    use crate::lang::Language;
    use crate::wheel;

    #[test]
    fn preset_drivetrains_are_sorted() {
        let mtb = BikeType::Mtb.drivetrain().unwrap();
        assert_eq!(mtb.chainrings(), &[42, 34, 24]);
        assert_eq!(mtb.sprockets(), &[14, 16, 18, 20, 22, 24, 34]);

        let road = BikeType::Road.drivetrain().unwrap();
        assert_eq!(road.chainrings(), &[50, 34]);
        assert_eq!(road.sprockets(), &[14, 16, 18, 20, 22, 24, 28]);

        let urban = BikeType::Urban.drivetrain().unwrap();
        assert_eq!(urban.chainrings(), &[42, 34, 24]);
        assert_eq!(urban.sprockets().last(), Some(&28));
    }

    #[test]
    fn custom_bike_starts_empty() {
        assert!(BikeType::Custom.drivetrain().is_none());
        assert!(BikeType::Custom.allows_manual_config());
        assert!(!BikeType::Road.allows_manual_config());
        assert_eq!(BikeType::Custom.wheel_options().len(), wheel::WHEEL_SIZES.len());
    }

    #[test]
    fn every_offered_wheel_exists() {
        for bike in BikeType::ALL {
            assert!(bike.wheel_options().contains(&bike.default_wheel()), "{}", bike);
            for name in bike.wheel_options() {
                assert!(wheel::find(name).is_ok(), "{} offers unknown wheel {}", bike, name);
            }
        }
    }

    #[test]
    fn labels_and_keys() {
        assert_eq!(BikeType::Mtb.label(Language::English), "MTB (Mountain)");
        assert_eq!(BikeType::Road.label(Language::Spanish), "Carretera");
        for bike in BikeType::ALL {
            assert_eq!(BikeType::from_key(bike.key()), Some(bike));
        }
        assert_eq!(BikeType::from_key("tandem"), None);
    }
}
