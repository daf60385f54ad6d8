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

use serde::{Deserialize, Serialize};
use tracing::debug;
use utils::list::{join_list, parse_u32_list};
use crate::{GearingError, Result, MAX_TEETH, MIN_TEETH};

/// The chainrings and sprockets of a bike.
///
/// Chainrings are held largest first so index 0 is always the big ring, sprockets are
/// held smallest first so index 0 is always the fastest sprocket. Both lists are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drivetrain {
    chainrings: Vec<u32>,
    sprockets: Vec<u32>
}

impl Drivetrain {
    pub fn new(mut chainrings: Vec<u32>, mut sprockets: Vec<u32>) -> Result<Drivetrain> {
        if chainrings.is_empty() || sprockets.is_empty() {
            return Err(GearingError::EmptyDrivetrain);
        }
        chainrings.sort_unstable_by(|a, b| b.cmp(a));
        sprockets.sort_unstable();
        Ok(Drivetrain { chainrings, sprockets })
    }

    /// Build a drivetrain from the comma separated tooth counts entered by a user
    pub fn parse(chainrings_text: &str, sprockets_text: &str) -> Result<Drivetrain> {
        let chainrings = parse_u32_list(chainrings_text).map_err(|(token, e)| {
            debug!("Bad chainring value '{}'. {}", token, e);
            GearingError::InvalidTeeth(token)
        })?;
        let sprockets = parse_u32_list(sprockets_text).map_err(|(token, e)| {
            debug!("Bad sprocket value '{}'. {}", token, e);
            GearingError::InvalidTeeth(token)
        })?;
        Drivetrain::new(chainrings, sprockets)
    }

    /// Check every tooth count is one that can be fitted to a bike
    pub fn validate(&self) -> Result<()> {
        match self.chainrings.iter()
            .chain(self.sprockets.iter())
            .find(|teeth| !(MIN_TEETH..=MAX_TEETH).contains(*teeth)) {
            Some(teeth) => Err(GearingError::TeethOutOfRange(*teeth)),
            None => Ok(())
        }
    }

    pub fn chainrings(&self) -> &[u32] {
        &self.chainrings
    }

    pub fn sprockets(&self) -> &[u32] {
        &self.sprockets
    }

    pub fn chainring_count(&self) -> usize {
        self.chainrings.len()
    }

    pub fn sprocket_count(&self) -> usize {
        self.sprockets.len()
    }

    pub fn combination_count(&self) -> usize {
        self.chainrings.len() * self.sprockets.len()
    }

    pub fn chainrings_text(&self) -> String {
        join_list(&self.chainrings)
    }

    pub fn sprockets_text(&self) -> String {
        join_list(&self.sprockets)
    }

    /// The text forms of the chainrings and sprockets, as accepted by [`Drivetrain::parse`]
    pub fn to_text(&self) -> (String, String) {
        (self.chainrings_text(), self.sprockets_text())
    }
}

#[cfg(test)]
mod tests {
    use crate::drivetrain::Drivetrain;
    use crate::GearingError;

    #[test]
    fn new_sorts_teeth() {
        let drivetrain = Drivetrain::new(vec![24, 42, 34], vec![34, 14, 20, 16]).unwrap();
        assert_eq!(drivetrain.chainrings(), &[42, 34, 24]);
        assert_eq!(drivetrain.sprockets(), &[14, 16, 20, 34]);
        assert_eq!(drivetrain.combination_count(), 12);
    }

    #[test]
    fn empty_lists_are_rejected() {
        assert!(matches!(Drivetrain::new(vec![], vec![11]), Err(GearingError::EmptyDrivetrain)));
        assert!(matches!(Drivetrain::new(vec![34], vec![]), Err(GearingError::EmptyDrivetrain)));
        assert!(matches!(Drivetrain::parse("", "11,12"), Err(GearingError::EmptyDrivetrain)));
    }

    #[test]
    fn parse_user_text() {
        let drivetrain = Drivetrain::parse(" 34, 50", "11,12,14,16,18,21,24,28,32,36").unwrap();
        assert_eq!(drivetrain.chainrings(), &[50, 34]);
        assert_eq!(drivetrain.sprocket_count(), 10);
        match Drivetrain::parse("34,fifty", "11") {
            Err(GearingError::InvalidTeeth(token)) => assert_eq!(token, "fifty"),
            other => panic!("Unexpected result {:?}", other)
        }
        match Drivetrain::parse("34", "11,-2") {
            Err(GearingError::InvalidTeeth(token)) => assert_eq!(token, "-2"),
            other => panic!("Unexpected result {:?}", other)
        }
    }

    #[test]
    fn validate_tooth_range() {
        assert!(Drivetrain::new(vec![53, 11], vec![11, 53]).unwrap().validate().is_ok());
        match Drivetrain::new(vec![60, 42], vec![11]).unwrap().validate() {
            Err(GearingError::TeethOutOfRange(60)) => {}
            other => panic!("Unexpected result {:?}", other)
        }
        match Drivetrain::new(vec![42], vec![10, 12]).unwrap().validate() {
            Err(GearingError::TeethOutOfRange(10)) => {}
            other => panic!("Unexpected result {:?}", other)
        }
    }

    #[test]
    fn text_form_parses_back() {
        let drivetrain = Drivetrain::new(vec![24, 34, 42], vec![14, 16, 18]).unwrap();
        let (chainrings, sprockets) = drivetrain.to_text();
        assert_eq!(chainrings, "42,34,24");
        assert_eq!(sprockets, "14,16,18");
        assert_eq!(Drivetrain::parse(&chainrings, &sprockets).unwrap(), drivetrain);
    }
}
