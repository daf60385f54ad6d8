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
use tracing::debug;
use utils::numeric::fraction_of_count;
use crate::drivetrain::Drivetrain;
use crate::lang::Language;

/// The ways a chainring/sprocket combination can run the chain at too steep an angle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CrossingKind {
    LargeWithLarge,
    SmallWithSmall,
    MiddleWithExtreme,
    IntermediateWithExtreme
}

impl CrossingKind {
    pub fn reason(&self, language: Language) -> &'static str {
        let text = language.text();
        match self {
            CrossingKind::LargeWithLarge => text.crossing_large_large,
            CrossingKind::SmallWithSmall => text.crossing_small_small,
            CrossingKind::MiddleWithExtreme => text.crossing_middle_extreme,
            CrossingKind::IntermediateWithExtreme => text.crossing_intermediate_extreme
        }
    }
}

/// The crossing thresholds that apply to a drivetrain. The counts are the number of
/// sprockets at an end of the cassette that a ring must stay away from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossingRule {
    Single,
    Double { extreme: usize },
    Triple { extreme: usize, medium: usize },
    General { chainrings: usize, extreme: usize }
}

impl CrossingRule {
    pub fn for_counts(chainring_count: usize, sprocket_count: usize) -> CrossingRule {
        match chainring_count {
            0 | 1 => CrossingRule::Single,
            2 => CrossingRule::Double {
                extreme: fraction_of_count(sprocket_count, 0.35, 2)
            },
            3 => CrossingRule::Triple {
                extreme: fraction_of_count(sprocket_count, 0.4, 2),
                medium: fraction_of_count(sprocket_count, 0.15, 1)
            },
            n => CrossingRule::General {
                chainrings: n,
                extreme: fraction_of_count(sprocket_count, 0.3, 1)
            }
        }
    }

    pub fn for_drivetrain(drivetrain: &Drivetrain) -> CrossingRule {
        CrossingRule::for_counts(drivetrain.chainring_count(), drivetrain.sprocket_count())
    }

    /// Evaluate a single combination. `chainring_idx` 0 is the largest ring and
    /// `sprocket_idx` 0 is the smallest sprocket
    pub fn check(&self, sprocket_count: usize, chainring_idx: usize, sprocket_idx: usize) -> Option<CrossingKind> {
        let large_with_large = |extreme: usize| {
            chainring_idx == 0 && sprocket_idx >= sprocket_count.saturating_sub(extreme)
        };
        match *self {
            CrossingRule::Single => None,
            CrossingRule::Double { extreme } => {
                if large_with_large(extreme) {
                    Some(CrossingKind::LargeWithLarge)
                } else if chainring_idx == 1 && sprocket_idx < extreme {
                    Some(CrossingKind::SmallWithSmall)
                } else {
                    None
                }
            }
            CrossingRule::Triple { extreme, medium } => {
                if large_with_large(extreme) {
                    Some(CrossingKind::LargeWithLarge)
                } else if chainring_idx == 2 && sprocket_idx < extreme {
                    Some(CrossingKind::SmallWithSmall)
                } else if chainring_idx == 1 &&
                    (sprocket_idx >= sprocket_count.saturating_sub(medium) || sprocket_idx < medium) {
                    Some(CrossingKind::MiddleWithExtreme)
                } else {
                    None
                }
            }
            CrossingRule::General { chainrings, extreme } => {
                if large_with_large(extreme) {
                    Some(CrossingKind::LargeWithLarge)
                } else if chainring_idx == chainrings - 1 && sprocket_idx < extreme {
                    Some(CrossingKind::SmallWithSmall)
                } else if chainring_idx > 0 && chainring_idx < chainrings - 1 &&
                    (sprocket_idx == 0 || sprocket_idx + 1 >= sprocket_count) {
                    Some(CrossingKind::IntermediateWithExtreme)
                } else {
                    None
                }
            }
        }
    }

    /// Lines explaining the thresholds in use, shown alongside the crossing matrix
    pub fn describe(&self, language: Language) -> Vec<String> {
        match (*self, language) {
            (CrossingRule::Double { extreme }, Language::English) => vec![
                format!("Double chainring: Crossings on large chainring: {} large sprockets", extreme),
                format!("Double chainring: Crossings on small chainring: {} small sprockets", extreme),
            ],
            (CrossingRule::Double { extreme }, Language::Spanish) => vec![
                format!("Plato doble: Cruces en plato grande: {} piñones grandes", extreme),
                format!("Plato doble: Cruces en plato pequeño: {} piñones pequeños", extreme),
            ],
            (CrossingRule::Triple { extreme, medium }, Language::English) => vec![
                format!("Triple chainring: Crossings on large chainring: {} large sprockets", extreme),
                format!("Triple chainring: Crossings on small chainring: {} small sprockets", extreme),
                format!("Triple chainring: Crossings on middle chainring: {} small sprockets and {} large sprockets", medium, medium),
            ],
            (CrossingRule::Triple { extreme, medium }, Language::Spanish) => vec![
                format!("Plato triple: Cruces en plato grande: {} piñones grandes", extreme),
                format!("Plato triple: Cruces en plato pequeño: {} piñones pequeños", extreme),
                format!("Plato triple: Cruces en plato mediano: {} piñones pequeños y {} piñones grandes", medium, medium),
            ],
            _ => Vec::new()
        }
    }
}

/// Determine whether a combination crosses the chain on a drivetrain with the given counts
pub fn chain_crossing(chainring_count: usize,
                      sprocket_count: usize,
                      chainring_idx: usize,
                      sprocket_idx: usize) -> Option<CrossingKind> {
    CrossingRule::for_counts(chainring_count, sprocket_count).check(sprocket_count, chainring_idx, sprocket_idx)
}

/// Crossing evaluation of every chainring/sprocket combination of a drivetrain
#[derive(Debug, Clone, PartialEq)]
pub struct CrossingMatrix {
    pub rule: CrossingRule,
    pub chainrings: Vec<u32>,
    pub sprockets: Vec<u32>,
    cells: Vec<Vec<Option<CrossingKind>>>
}

impl CrossingMatrix {
    pub fn build(drivetrain: &Drivetrain) -> CrossingMatrix {
        let rule = CrossingRule::for_drivetrain(drivetrain);
        debug!("Checking chain crossing for chainrings={:?}, sprockets={:?} using {:?}",
               drivetrain.chainrings(), drivetrain.sprockets(), rule);
        let sprocket_count = drivetrain.sprocket_count();
        let cells = (0..drivetrain.chainring_count()).map(|chainring_idx| {
            (0..sprocket_count).map(|sprocket_idx| {
                let crossing = rule.check(sprocket_count, chainring_idx, sprocket_idx);
                debug!("chainring idx={} sprocket idx={} -> {:?}", chainring_idx, sprocket_idx, crossing);
                crossing
            }).collect()
        }).collect();
        CrossingMatrix {
            rule,
            chainrings: drivetrain.chainrings().to_vec(),
            sprockets: drivetrain.sprockets().to_vec(),
            cells
        }
    }

    pub fn get(&self, chainring_idx: usize, sprocket_idx: usize) -> Option<CrossingKind> {
        self.cells.get(chainring_idx)
            .and_then(|row| row.get(sprocket_idx))
            .copied()
            .flatten()
    }

    pub fn rows(&self) -> &[Vec<Option<CrossingKind>>] {
        &self.cells
    }

    pub fn crossing_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn all_crossing(&self) -> bool {
        self.cells.iter().flatten().all(|cell| cell.is_some())
    }
}

/// `X` for a crossing combination and `O` for a safe one, one row per chainring
impl Display for CrossingMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>6}", "")?;
        for sprocket in &self.sprockets {
            write!(f, "{:>5}", format!("{}T", sprocket))?;
        }
        for (chainring, row) in self.chainrings.iter().zip(self.cells.iter()) {
            write!(f, "\n{:>6}", format!("{}T", chainring))?;
            for cell in row {
                write!(f, "{:>5}", if cell.is_some() { "X" } else { "O" })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::bike::BikeType;
    use crate::crossing::{chain_crossing, CrossingKind, CrossingMatrix, CrossingRule};
    use crate::drivetrain::Drivetrain;
    use crate::lang::Language;

    fn pattern(matrix: &CrossingMatrix) -> Vec<String> {
        matrix.rows().iter().map(|row| {
            row.iter().map(|cell| if cell.is_some() { 'X' } else { 'O' }).collect()
        }).collect()
    }

    #[test]
    fn single_chainring_never_crosses() {
        for sprocket_idx in 0..12 {
            assert_eq!(chain_crossing(1, 12, 0, sprocket_idx), None);
        }
        assert_eq!(CrossingRule::for_counts(1, 12), CrossingRule::Single);
    }

    #[test]
    fn double_thresholds_round_half_even() {
        // 7 * 0.35 = 2.45, rounds to 2
        assert_eq!(CrossingRule::for_counts(2, 7), CrossingRule::Double { extreme: 2 });
        // 10 * 0.35 = 3.5, rounds to 4
        assert_eq!(CrossingRule::for_counts(2, 10), CrossingRule::Double { extreme: 4 });
        // minimum of 2 applies to short cassettes
        assert_eq!(CrossingRule::for_counts(2, 3), CrossingRule::Double { extreme: 2 });
    }

    #[test]
    fn road_preset_matrix() {
        let drivetrain = BikeType::Road.drivetrain().unwrap();
        let matrix = CrossingMatrix::build(&drivetrain);
        assert_eq!(pattern(&matrix), vec!["OOOOOXX", "XXOOOOO"]);
        assert_eq!(matrix.get(0, 6), Some(CrossingKind::LargeWithLarge));
        assert_eq!(matrix.get(1, 0), Some(CrossingKind::SmallWithSmall));
        assert_eq!(matrix.crossing_count(), 4);
    }

    #[test]
    fn mtb_preset_matrix() {
        let drivetrain = BikeType::Mtb.drivetrain().unwrap();
        let matrix = CrossingMatrix::build(&drivetrain);
        // 7 sprockets: extreme = round(2.8) = 3, medium = round(1.05) = 1
        assert_eq!(matrix.rule, CrossingRule::Triple { extreme: 3, medium: 1 });
        assert_eq!(pattern(&matrix), vec!["OOOOXXX", "XOOOOOX", "XXXOOOO"]);
        assert_eq!(matrix.get(1, 0), Some(CrossingKind::MiddleWithExtreme));
        assert_eq!(matrix.get(1, 6), Some(CrossingKind::MiddleWithExtreme));
        assert_eq!(matrix.get(2, 2), Some(CrossingKind::SmallWithSmall));
        assert_eq!(matrix.get(5, 5), None);
    }

    #[test]
    fn general_rule_for_four_rings() {
        // 10 * 0.3 = 3
        let rule = CrossingRule::for_counts(4, 10);
        assert_eq!(rule, CrossingRule::General { chainrings: 4, extreme: 3 });
        assert_eq!(rule.check(10, 0, 7), Some(CrossingKind::LargeWithLarge));
        assert_eq!(rule.check(10, 0, 6), None);
        assert_eq!(rule.check(10, 3, 2), Some(CrossingKind::SmallWithSmall));
        assert_eq!(rule.check(10, 3, 3), None);
        assert_eq!(rule.check(10, 1, 0), Some(CrossingKind::IntermediateWithExtreme));
        assert_eq!(rule.check(10, 2, 9), Some(CrossingKind::IntermediateWithExtreme));
        assert_eq!(rule.check(10, 2, 5), None);
    }

    #[test]
    fn everything_crosses_on_tiny_cassette() {
        let drivetrain = Drivetrain::new(vec![34, 50], vec![16]).unwrap();
        let matrix = CrossingMatrix::build(&drivetrain);
        assert!(matrix.all_crossing());
    }

    #[test]
    fn rule_description() {
        let lines = CrossingRule::for_counts(3, 7).describe(Language::English);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Triple chainring: Crossings on large chainring: 3 large sprockets");
        assert!(CrossingRule::Single.describe(Language::Spanish).is_empty());
    }

    #[test]
    fn matrix_display() {
        let drivetrain = Drivetrain::new(vec![34, 50], vec![11, 13, 15, 17]).unwrap();
        let rendered = CrossingMatrix::build(&drivetrain).to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].trim_start().starts_with("50T"));
        assert!(lines[1].ends_with("X    X"));
    }
}
