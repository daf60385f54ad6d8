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
use crate::calc::GearSetup;
use crate::lang::Language;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapLevel {
    Low,
    Moderate,
    High
}

impl OverlapLevel {
    pub fn for_percentage(pct: f64) -> OverlapLevel {
        if pct < 10.0 {
            OverlapLevel::Low
        } else if pct < 30.0 {
            OverlapLevel::Moderate
        } else {
            OverlapLevel::High
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeLevel {
    Limited,
    Moderate,
    Wide
}

impl RangeLevel {
    pub fn for_range(range: f64) -> RangeLevel {
        if range < 3.0 {
            RangeLevel::Limited
        } else if range < 5.0 {
            RangeLevel::Moderate
        } else {
            RangeLevel::Wide
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlapSpan {
    pub start: f64,
    pub end: f64,
    /// Share of the larger chainring's ratio span that the smaller ring also covers
    pub percentage: f64,
    pub level: OverlapLevel
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChainringPairOverlap {
    pub larger: u32,
    pub smaller: u32,
    /// False when one of the rings had no safe combination and every ratio was used instead
    pub crossings_excluded: bool,
    pub span: Option<OverlapSpan>
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlapReport {
    pub pairs: Vec<ChainringPairOverlap>,
    /// max/min over the ratios that don't cross the chain
    pub usable_range: Option<f64>,
    /// max/min over every ratio
    pub total_range: f64,
    pub range_level: RangeLevel
}

fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values.iter().fold(None, |acc, &val| match acc {
        None => Some((val, val)),
        Some((min, max)) => Some((min.min(val), max.max(val)))
    })
}

fn span_between(first: (f64, f64), second: (f64, f64)) -> Option<OverlapSpan> {
    let (min1, max1) = first;
    let (min2, max2) = second;
    let start = min1.max(min2);
    let end = max1.min(max2);
    if start > end {
        return None;
    }
    let width = max1 - min1;
    let percentage = if width > 0.0 {
        (end - start) / width * 100.0
    } else {
        100.0
    };
    Some(OverlapSpan { start, end, percentage, level: OverlapLevel::for_percentage(percentage) })
}

/// Compare the ratios covered by each pair of neighbouring chainrings.
///
/// Returns `None` when the setup has fewer than two chainrings
pub fn analyse(setup: &GearSetup) -> Result<Option<OverlapReport>> {
    let drivetrain = setup.drivetrain();
    if drivetrain.chainring_count() < 2 {
        return Ok(None);
    }
    let crossings = setup.crossings();
    let mut all_ratios = Vec::with_capacity(drivetrain.chainring_count());
    let mut safe_ratios = Vec::with_capacity(drivetrain.chainring_count());
    for chainring_idx in 0..drivetrain.chainring_count() {
        let ratios = setup.ratios_for_chainring(chainring_idx)?;
        let safe: Vec<f64> = ratios.iter()
            .enumerate()
            .filter(|(sprocket_idx, _)| crossings.get(chainring_idx, *sprocket_idx).is_none())
            .map(|(_, ratio)| *ratio)
            .collect();
        all_ratios.push(ratios);
        safe_ratios.push(safe);
    }

    let mut pairs = Vec::with_capacity(drivetrain.chainring_count() - 1);
    for idx in 0..drivetrain.chainring_count() - 1 {
        let safe = min_max(&safe_ratios[idx]).zip(min_max(&safe_ratios[idx + 1]));
        let (crossings_excluded, bounds) = match safe {
            Some(bounds) => (true, Some(bounds)),
            None => (false, min_max(&all_ratios[idx]).zip(min_max(&all_ratios[idx + 1])))
        };
        let span = bounds.and_then(|(first, second)| span_between(first, second));
        debug!("Overlap between ring {} and {}: {:?}", idx, idx + 1, span);
        pairs.push(ChainringPairOverlap {
            larger: drivetrain.chainrings()[idx],
            smaller: drivetrain.chainrings()[idx + 1],
            crossings_excluded,
            span
        });
    }

    let flat_safe: Vec<f64> = safe_ratios.into_iter().flatten().collect();
    let usable_range = min_max(&flat_safe).map(|(min, max)| max / min);
    let flat_all: Vec<f64> = all_ratios.into_iter().flatten().collect();
    let total_range = min_max(&flat_all).map(|(min, max)| max / min).unwrap_or(1.0);

    Ok(Some(OverlapReport {
        pairs,
        usable_range,
        total_range,
        range_level: RangeLevel::for_range(total_range)
    }))
}

impl OverlapReport {
    pub fn to_text(&self, language: Language) -> String {
        let text = language.text();
        let mut out = format!("{}\n\n", text.overlap_heading);
        for pair in &self.pairs {
            out.push_str(&language.overlap_pair_heading(pair.larger, pair.smaller, pair.crossings_excluded));
            out.push('\n');
            match &pair.span {
                Some(span) => {
                    out.push_str(&format!("{} {:.2} {} {:.2}\n", text.overlap_range, span.start, text.overlap_to, span.end));
                    out.push_str(&format!("{} {:.1}%\n", text.overlap_percentage, span.percentage));
                    out.push_str(match span.level {
                        OverlapLevel::Low => text.overlap_low,
                        OverlapLevel::Moderate => text.overlap_moderate,
                        OverlapLevel::High => text.overlap_high
                    });
                    out.push('\n');
                }
                None => {
                    out.push_str(text.overlap_none);
                    out.push('\n');
                }
            }
            out.push('\n');
        }
        match self.usable_range {
            Some(range) => out.push_str(&format!("{} {:.2}x\n", text.total_range_without_crossings, range)),
            None => {
                out.push_str(text.total_range_unavailable);
                out.push('\n');
            }
        }
        out.push_str(&format!("{} {:.2}x\n", text.total_range_including_crossings, self.total_range));
        out.push_str(match self.range_level {
            RangeLevel::Limited => text.range_limited,
            RangeLevel::Moderate => text.range_moderate,
            RangeLevel::Wide => text.range_wide
        });
        out
    }
}

/// The overlap analysis as shown to the user, including the message for single ring setups
pub fn analysis_text(setup: &GearSetup, language: Language) -> Result<String> {
    Ok(match analyse(setup)? {
        Some(report) => report.to_text(language),
        None => language.text().overlap_needs_two_rings.to_string()
    })
}

#[cfg(test)]
mod tests {
    use crate::bike::BikeType;
    use crate::calc::GearSetup;
    use crate::drivetrain::Drivetrain;
    use crate::lang::Language;
    use crate::overlap::{analyse, analysis_text, OverlapLevel, RangeLevel};

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn road_preset_overlap() {
        let setup = GearSetup::new(BikeType::Road.drivetrain().unwrap(), "700x25C", 80).unwrap();
        let report = analyse(&setup).unwrap().unwrap();
        assert_eq!(report.pairs.len(), 1);
        let pair = &report.pairs[0];
        assert_eq!((pair.larger, pair.smaller), (50, 34));
        assert!(pair.crossings_excluded);
        // safe 50T ratios: 50/22..50/14, safe 34T ratios: 34/28..34/18, these don't meet
        assert!(pair.span.is_none());
        assert!(approx_eq(report.usable_range.unwrap(), (50.0 / 14.0) / (34.0 / 28.0)));
        assert!(approx_eq(report.total_range, (50.0 / 14.0) / (34.0 / 28.0)));
        assert_eq!(report.range_level, RangeLevel::Limited);
    }

    #[test]
    fn mtb_preset_overlap_values() {
        let setup = GearSetup::new(BikeType::Mtb.drivetrain().unwrap(), "26x2.1", 80).unwrap();
        let report = analyse(&setup).unwrap().unwrap();
        assert_eq!(report.pairs.len(), 2);

        // 42T safe: 42/20..42/14 = 2.1..3.0, 34T safe: 34/24..34/16 = 1.4167..2.125
        let first = report.pairs[0].span.unwrap();
        assert!(approx_eq(first.start, 2.1));
        assert!(approx_eq(first.end, 2.125));
        assert!(approx_eq(first.percentage, 0.025 / 0.9 * 100.0));
        assert_eq!(first.level, OverlapLevel::Low);

        // 24T safe: 24/34..24/20 = 0.7059..1.2, below the safe 34T ratios
        assert!(report.pairs[1].span.is_none());

        assert!(approx_eq(report.usable_range.unwrap(), 3.0 / (24.0 / 34.0)));
        assert!(approx_eq(report.total_range, 3.0 / (24.0 / 34.0)));
        assert_eq!(report.range_level, RangeLevel::Moderate);
    }

    #[test]
    fn single_chainring_has_no_report() {
        let drivetrain = Drivetrain::new(vec![32], vec![11, 13, 15, 18, 21, 24, 28, 32]).unwrap();
        let setup = GearSetup::new(drivetrain, "29x2.3", 90).unwrap();
        assert!(analyse(&setup).unwrap().is_none());
        assert_eq!(analysis_text(&setup, Language::English).unwrap(),
                   "At least two chainrings are needed to analyze overlap.");
    }

    #[test]
    fn falls_back_to_every_ratio_when_a_ring_always_crosses() {
        let drivetrain = Drivetrain::new(vec![34, 50], vec![16]).unwrap();
        let setup = GearSetup::new(drivetrain, "700C", 80).unwrap();
        let report = analyse(&setup).unwrap().unwrap();
        assert!(!report.pairs[0].crossings_excluded);
        assert!(report.pairs[0].span.is_none());
        assert_eq!(report.usable_range, None);
        let text = report.to_text(Language::English);
        assert!(text.contains("(including chain crossings)"));
        assert!(text.contains("There is no overlap between usable gears."));
        assert!(text.contains("Cannot calculate range without chain crossings."));
        assert!(text.ends_with("Evaluation: Limited range. Suitable for uniform terrain or specific use."));
    }

    #[test]
    fn report_text_layout() {
        let setup = GearSetup::new(BikeType::Mtb.drivetrain().unwrap(), "26x2.1", 80).unwrap();
        let text = analysis_text(&setup, Language::Spanish).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Análisis de solapamiento entre platos:");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "Entre plato 42T y 34T (sin cruces de cadena):");
        assert!(lines[3].starts_with("- Rango de solapamiento: 2.10 a 2.1"));
        assert_eq!(lines[4], "- Porcentaje de solapamiento: 2.8%");
        assert!(text.contains("Rango total de marchas (incluyendo cruces de cadena): 4.25x"));
    }
}
