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

use std::path::Path;
use plotters::coord::Shift;
use plotters::drawing::DrawingAreaErrorKind;
use plotters::prelude::*;
use tracing::{debug, info};
use crate::calc::{GearCombination, GearSetup};
use crate::lang::Language;
use crate::sweep::CadenceSweep;
use crate::{GearingError, Result};

pub const DEFAULT_CHART_SIZE: (u32, u32) = (1000, 600);

const CHAINRING_COLOURS: [RGBColor; 3] = [
    RGBColor(255, 0, 0),
    RGBColor(0, 0, 255),
    RGBColor(0, 128, 0)
];
const FALLBACK_COLOUR: RGBColor = RGBColor(128, 128, 128);
const SPEED_COLOUR: RGBColor = RGBColor(0, 0, 255);
const POWER_COLOUR: RGBColor = RGBColor(255, 0, 0);

const OPTIMAL_RATIO_MIN: f64 = 2.5;
const OPTIMAL_RATIO_MAX: f64 = 5.0;

type DrawResult<DB> = std::result::Result<(), DrawingAreaErrorKind<<DB as DrawingBackend>::ErrorType>>;

pub fn chainring_colour(chainring_idx: usize) -> RGBColor {
    CHAINRING_COLOURS.get(chainring_idx).copied().unwrap_or(FALLBACK_COLOUR)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Speed,
    Development,
    Ratio,
    Overlap,
    Power { chainring: u32, sprocket: u32 }
}

impl ChartKind {
    /// Cadence vs power chart for the biggest chainring and the middle of the cassette
    pub fn default_power(setup: &GearSetup) -> ChartKind {
        let drivetrain = setup.drivetrain();
        ChartKind::Power {
            chainring: drivetrain.chainrings()[0],
            sprocket: drivetrain.sprockets()[drivetrain.sprocket_count() / 2]
        }
    }

    /// Whether the gear a power chart is drawn for exists on `setup`
    pub fn fits(&self, setup: &GearSetup) -> bool {
        match self {
            ChartKind::Power { chainring, sprocket } => {
                let drivetrain = setup.drivetrain();
                drivetrain.chainrings().contains(chainring) && drivetrain.sprockets().contains(sprocket)
            }
            _ => true
        }
    }

    pub fn all(setup: &GearSetup) -> [ChartKind; 5] {
        [ChartKind::Speed, ChartKind::Development, ChartKind::Ratio, ChartKind::Overlap, ChartKind::default_power(setup)]
    }

    pub fn file_stem(&self) -> String {
        match self {
            ChartKind::Speed => "speed".to_string(),
            ChartKind::Development => "development".to_string(),
            ChartKind::Ratio => "ratio".to_string(),
            ChartKind::Overlap => "overlap".to_string(),
            ChartKind::Power { chainring, sprocket } => format!("power-{}x{}", chainring, sprocket)
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartOptions {
    pub language: Language,
    /// Simplified axes for riders who don't know their cassette by tooth count
    pub beginner: bool
}

impl Default for ChartOptions {
    fn default() -> Self {
        ChartOptions { language: Language::English, beginner: true }
    }
}

/// Combinations grouped per chainring, largest ring first
struct RingData {
    chainring: u32,
    colour: RGBColor,
    gears: Vec<GearCombination>
}

fn ring_data(setup: &GearSetup) -> Result<Vec<RingData>> {
    let combinations = setup.combinations()?;
    let mut rings: Vec<RingData> = setup.drivetrain().chainrings().iter()
        .enumerate()
        .map(|(idx, chainring)| RingData {
            chainring: *chainring,
            colour: chainring_colour(idx),
            gears: Vec::with_capacity(setup.drivetrain().sprocket_count())
        })
        .collect();
    for combination in combinations {
        rings[combination.chainring_idx].gears.push(combination);
    }
    Ok(rings)
}

fn max_of<I: Iterator<Item = f64>>(values: I) -> f64 {
    values.fold(0.0, f64::max)
}

fn to_chart_error<E: std::error::Error + Send + Sync>(err: DrawingAreaErrorKind<E>) -> GearingError {
    GearingError::Chart(err.to_string())
}

fn legend_line(colour: RGBColor) -> impl Fn((i32, i32)) -> PathElement<(i32, i32)> {
    move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], colour.stroke_width(2))
}

fn legend_box(colour: RGBColor) -> impl Fn((i32, i32)) -> Rectangle<(i32, i32)> {
    move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], colour.filled())
}

fn dashed_line(x_start: f64, x_end: f64, y: f64) -> Vec<PathElement<(f64, f64)>> {
    const DASHES: usize = 40;
    let step = (x_end - x_start) / DASHES as f64;
    (0..DASHES).step_by(2)
        .map(|dash| {
            let x = x_start + step * dash as f64;
            PathElement::new(vec![(x, y), (x + step, y)], FALLBACK_COLOUR.mix(0.5).stroke_width(1))
        })
        .collect()
}

fn draw_speed_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>,
                                        rings: &[RingData],
                                        sprockets: &[u32],
                                        cadence: u32,
                                        options: &ChartOptions) -> DrawResult<DB> {
    let text = options.language.text();
    let sprocket_count = sprockets.len() as i32;
    let x_of = |gear: &GearCombination| -> i32 {
        if options.beginner { gear.sprocket_idx as i32 + 1 } else { gear.sprocket as i32 }
    };
    let x_range = if options.beginner {
        0..sprocket_count + 1
    } else {
        let first = sprockets.first().copied().unwrap_or(0) as i32;
        let last = sprockets.last().copied().unwrap_or(0) as i32;
        first - 1..last + 1
    };
    let max_speed = max_of(rings.iter().flat_map(|ring| ring.gears.iter().map(|g| g.speed_kmh)));

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .caption(options.language.speeds_at_cadence(cadence), ("sans-serif", 22))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(x_range.clone(), 0f64..max_speed * 1.1)?;

    let x_label_count = (x_range.end - x_range.start) as usize;
    let beginner = options.beginner;
    chart.configure_mesh()
        .x_labels(x_label_count)
        .x_label_formatter(&|x: &i32| {
            if beginner && (*x < 1 || *x > sprocket_count) { String::new() } else { x.to_string() }
        })
        .x_desc(if options.beginner { text.chart_sprocket_order } else { text.chart_sprocket_teeth })
        .y_desc(text.chart_speed_axis)
        .draw()?;

    for ring in rings {
        let colour = ring.colour;
        chart.draw_series(LineSeries::new(ring.gears.iter().map(|g| (x_of(g), g.speed_kmh)), colour.stroke_width(2)))?
            .label(options.language.chainring_label(ring.chainring))
            .legend(legend_line(colour));
        chart.draw_series(ring.gears.iter()
            .filter(|g| !g.crosses_chain())
            .map(|g| Circle::new((x_of(g), g.speed_kmh), 4, colour.filled())))?;
        chart.draw_series(ring.gears.iter()
            .filter(|g| g.crosses_chain())
            .map(|g| Cross::new((x_of(g), g.speed_kmh), 6, colour.mix(0.7).stroke_width(2))))?;
    }

    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

fn draw_development_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>,
                                              rings: &[RingData],
                                              sprockets: &[u32],
                                              options: &ChartOptions) -> DrawResult<DB> {
    let text = options.language.text();
    let sprocket_count = sprockets.len();
    let bar_width = 0.8 / rings.len().max(1) as f64;
    let max_development = max_of(rings.iter().flat_map(|ring| ring.gears.iter().map(|g| g.development)));

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .caption(text.chart_development_title, ("sans-serif", 22))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.6f64..sprocket_count as f64 - 0.4, 0f64..max_development * 1.1)?;

    chart.configure_mesh()
        .disable_x_mesh()
        .x_labels(sprocket_count + 1)
        .x_label_formatter(&|x: &f64| {
            let nearest = x.round();
            if (x - nearest).abs() > 0.05 || nearest < 0.0 {
                return String::new();
            }
            sprockets.get(nearest as usize).map(|teeth| format!("{}T", teeth)).unwrap_or_default()
        })
        .x_desc(text.chart_sprocket_teeth)
        .y_desc(text.chart_development_axis)
        .draw()?;

    for (ring_idx, ring) in rings.iter().enumerate() {
        let colour = ring.colour;
        let left_of = |g: &GearCombination| g.sprocket_idx as f64 - 0.4 + bar_width * ring_idx as f64;
        chart.draw_series(ring.gears.iter().map(|g| {
            let style = if g.crosses_chain() { colour.mix(0.5).filled() } else { colour.filled() };
            Rectangle::new([(left_of(g), 0.0), (left_of(g) + bar_width, g.development)], style)
        }))?
            .label(options.language.chainring_label(ring.chainring))
            .legend(legend_box(colour));
        chart.draw_series(ring.gears.iter()
            .filter(|g| g.crosses_chain())
            .map(|g| Cross::new((left_of(g) + bar_width / 2.0, g.development), 5, BLACK.stroke_width(2))))?;
    }

    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

fn draw_ratio_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>,
                                        rings: &[RingData],
                                        options: &ChartOptions) -> DrawResult<DB> {
    let text = options.language.text();
    let labels: Vec<String> = rings.iter().flat_map(|ring| ring.gears.iter().map(|g| g.label())).collect();
    let bar_count = labels.len();
    let max_ratio = max_of(rings.iter().flat_map(|ring| ring.gears.iter().map(|g| g.ratio)));
    let x_end = bar_count as f64 - 0.5;

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .caption(text.chart_ratio_title, ("sans-serif", 22))
        .x_label_area_size(70)
        .y_label_area_size(50)
        .build_cartesian_2d(-0.5f64..x_end, 0f64..(max_ratio * 1.1).max(OPTIMAL_RATIO_MAX + 0.5))?;

    chart.configure_mesh()
        .disable_x_mesh()
        .x_labels(bar_count + 1)
        .x_label_style(("sans-serif", 11).into_font().transform(FontTransform::Rotate90))
        .x_label_formatter(&|x: &f64| {
            let nearest = x.round();
            if (x - nearest).abs() > 0.05 || nearest < 0.0 {
                return String::new();
            }
            labels.get(nearest as usize).cloned().unwrap_or_default()
        })
        .x_desc(text.chart_combination_axis)
        .y_desc(text.chart_ratio_axis)
        .draw()?;

    let mut position = 0usize;
    for ring in rings {
        let colour = ring.colour;
        let first = position;
        chart.draw_series(ring.gears.iter().enumerate().map(|(offset, g)| {
            let x = (first + offset) as f64;
            Rectangle::new([(x - 0.4, 0.0), (x + 0.4, g.ratio)], colour.filled())
        }))?
            .label(options.language.chainring_label(ring.chainring))
            .legend(legend_box(colour));
        position += ring.gears.len();
    }

    let mut reference = dashed_line(-0.5, x_end, OPTIMAL_RATIO_MIN);
    reference.extend(dashed_line(-0.5, x_end, OPTIMAL_RATIO_MAX));
    chart.draw_series(reference)?
        .label(text.chart_optimal_ratio)
        .legend(legend_line(FALLBACK_COLOUR));

    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

fn draw_overlap_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>,
                                          rings: &[RingData],
                                          sprockets: &[u32],
                                          options: &ChartOptions) -> DrawResult<DB> {
    let text = options.language.text();
    let sprocket_count = sprockets.len() as i32;
    let max_ratio = max_of(rings.iter().flat_map(|ring| ring.gears.iter().map(|g| g.ratio)));

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .caption(text.chart_overlap_title, ("sans-serif", 22))
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(-1i32..sprocket_count, 0f64..max_ratio * 1.1)?;

    chart.configure_mesh()
        .x_labels(sprocket_count as usize + 1)
        .x_label_formatter(&|x: &i32| {
            usize::try_from(*x).ok()
                .and_then(|idx| sprockets.get(idx))
                .map(|teeth| teeth.to_string())
                .unwrap_or_default()
        })
        .x_desc(text.chart_sprocket_position)
        .y_desc(text.chart_ratio_axis)
        .light_line_style(&FALLBACK_COLOUR.mix(0.2))
        .draw()?;

    for ring in rings {
        let colour = ring.colour;
        chart.draw_series(LineSeries::new(ring.gears.iter().map(|g| (g.sprocket_idx as i32, g.ratio)), colour.stroke_width(2)))?
            .label(options.language.chainring_label(ring.chainring))
            .legend(legend_line(colour));
        chart.draw_series(ring.gears.iter()
            .filter(|g| !g.crosses_chain())
            .map(|g| Circle::new((g.sprocket_idx as i32, g.ratio), 4, colour.filled())))?;
        chart.draw_series(ring.gears.iter()
            .filter(|g| g.crosses_chain())
            .map(|g| Cross::new((g.sprocket_idx as i32, g.ratio), 6, colour.mix(0.7).stroke_width(2))))?;
    }

    chart.draw_series(std::iter::empty::<Circle<(i32, f64), i32>>())?
        .label(text.chart_safe)
        .legend(|(x, y)| Circle::new((x + 10, y), 4, FALLBACK_COLOUR.filled()));
    chart.draw_series(std::iter::empty::<Cross<(i32, f64), i32>>())?
        .label(text.chart_crossing)
        .legend(|(x, y)| Cross::new((x + 10, y), 5, FALLBACK_COLOUR.stroke_width(2)));

    chart.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

fn draw_power_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>,
                                        sweep: &CadenceSweep,
                                        options: &ChartOptions) -> DrawResult<DB> {
    let text = options.language.text();
    let first_cadence = sweep.cadences.first().copied().unwrap_or(0.0);
    let last_cadence = sweep.cadences.last().copied().unwrap_or(0.0);
    let x_range = first_cadence - 2.0..last_cadence + 2.0;
    let speed_top = sweep.max_speed() * 1.1;
    let power_top = sweep.max_power() * 1.1;

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .caption(options.language.power_chart_title(sweep.chainring, sweep.sprocket), ("sans-serif", 22))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), 0f64..speed_top)?
        .set_secondary_coord(x_range, 0f64..power_top);

    chart.configure_mesh()
        .x_desc(text.chart_cadence_axis)
        .y_desc(text.chart_speed_axis)
        .y_label_style(("sans-serif", 14).into_font().color(&SPEED_COLOUR))
        .draw()?;
    chart.configure_secondary_axes()
        .y_desc(text.chart_power_axis)
        .label_style(("sans-serif", 14).into_font().color(&POWER_COLOUR))
        .draw()?;

    let (band_start, band_end) = sweep.optimal_cadences();
    chart.draw_series(std::iter::once(
        Rectangle::new([(band_start, 0.0), (band_end, speed_top)], FALLBACK_COLOUR.mix(0.1).filled())
    ))?
        .label(text.chart_optimal_cadence)
        .legend(legend_box(RGBColor(230, 230, 230)));

    let speed_points: Vec<(f64, f64)> = sweep.cadences.iter().copied().zip(sweep.speeds.iter().copied()).collect();
    chart.draw_series(LineSeries::new(speed_points, SPEED_COLOUR.stroke_width(2)))?
        .label(text.chart_speed_series)
        .legend(legend_line(SPEED_COLOUR));

    let power_points: Vec<(f64, f64)> = sweep.cadences.iter().copied().zip(sweep.powers.iter().copied()).collect();
    chart.draw_secondary_series(LineSeries::new(power_points, POWER_COLOUR.stroke_width(2)))?
        .label(text.chart_power_series)
        .legend(legend_line(POWER_COLOUR));

    chart.configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;
    Ok(())
}

/// Draw a chart of `setup` onto any plotters drawing area
pub fn draw_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>,
                                      kind: ChartKind,
                                      setup: &GearSetup,
                                      options: &ChartOptions) -> Result<()> {
    debug!("Drawing {:?} chart", kind);
    root.fill(&WHITE).map_err(to_chart_error)?;
    let sprockets = setup.drivetrain().sprockets();
    let drawn = match kind {
        ChartKind::Speed => {
            let rings = ring_data(setup)?;
            draw_speed_chart(root, &rings, sprockets, setup.cadence(), options)
        }
        ChartKind::Development => {
            let rings = ring_data(setup)?;
            draw_development_chart(root, &rings, sprockets, options)
        }
        ChartKind::Ratio => {
            let rings = ring_data(setup)?;
            draw_ratio_chart(root, &rings, options)
        }
        ChartKind::Overlap => {
            let rings = ring_data(setup)?;
            draw_overlap_chart(root, &rings, sprockets, options)
        }
        ChartKind::Power { chainring, sprocket } => {
            let sweep = CadenceSweep::new(setup, chainring, sprocket)?;
            draw_power_chart(root, &sweep, options)
        }
    };
    drawn.map_err(to_chart_error)?;
    root.present().map_err(to_chart_error)
}

/// Render a chart to RGBA pixels, row major, suitable for an image handle
pub fn render_rgba(kind: ChartKind,
                   setup: &GearSetup,
                   options: &ChartOptions,
                   size: (u32, u32)) -> Result<Vec<u8>> {
    let pixel_count = size.0 as usize * size.1 as usize;
    let mut rgb = vec![0u8; pixel_count * 3];
    {
        let root = BitMapBackend::with_buffer(&mut rgb, size).into_drawing_area();
        draw_chart(&root, kind, setup, options)?;
    }
    let mut rgba = Vec::with_capacity(pixel_count * 4);
    for pixel in rgb.chunks_exact(3) {
        rgba.extend_from_slice(&[pixel[0], pixel[1], pixel[2], u8::MAX]);
    }
    Ok(rgba)
}

pub fn render_svg_string(kind: ChartKind,
                         setup: &GearSetup,
                         options: &ChartOptions,
                         size: (u32, u32)) -> Result<String> {
    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, size).into_drawing_area();
        draw_chart(&root, kind, setup, options)?;
    }
    Ok(out)
}

pub fn render_svg_file(kind: ChartKind,
                       setup: &GearSetup,
                       options: &ChartOptions,
                       size: (u32, u32),
                       path: &Path) -> Result<()> {
    let svg = render_svg_string(kind, setup, options, size)?;
    std::fs::write(path, svg)?;
    info!("Wrote {:?} chart to {}", kind, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use plotters::prelude::{FontDesc, FontFamily, FontStyle};
    use crate::bike::BikeType;
    use crate::calc::GearSetup;
    use crate::drivetrain::Drivetrain;
    use crate::lang::Language;
    use crate::plot::{chainring_colour, render_rgba, render_svg_file, render_svg_string, ChartKind, ChartOptions};

    // Text layout needs a system sans-serif font. Skip rendering checks on machines without one
    fn fonts_available() -> bool {
        let available = FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal).box_size("0").is_ok();
        if !available {
            eprintln!("No sans-serif font found, skipping chart rendering");
        }
        available
    }

    fn mtb_setup() -> GearSetup {
        GearSetup::new(BikeType::Mtb.drivetrain().unwrap(), "26x2.1", 80).unwrap()
    }

    #[test]
    fn chart_kinds() {
        let setup = mtb_setup();
        assert_eq!(ChartKind::default_power(&setup), ChartKind::Power { chainring: 42, sprocket: 20 });
        let stems: Vec<String> = ChartKind::all(&setup).iter().map(|kind| kind.file_stem()).collect();
        assert_eq!(stems, vec!["speed", "development", "ratio", "overlap", "power-42x20"]);
        assert!(ChartKind::Power { chainring: 24, sprocket: 34 }.fits(&setup));
        assert!(!ChartKind::Power { chainring: 50, sprocket: 20 }.fits(&setup));
        assert!(!ChartKind::Power { chainring: 42, sprocket: 11 }.fits(&setup));
        assert_eq!(chainring_colour(1), plotters::style::RGBColor(0, 0, 255));
        assert_eq!(chainring_colour(5), plotters::style::RGBColor(128, 128, 128));
    }

    #[test]
    fn render_every_chart_to_rgba() {
        if !fonts_available() {
            return;
        }
        let setup = mtb_setup();
        for beginner in [true, false] {
            let options = ChartOptions { language: Language::Spanish, beginner };
            for kind in ChartKind::all(&setup) {
                let pixels = render_rgba(kind, &setup, &options, (400, 300)).unwrap();
                assert_eq!(pixels.len(), 400 * 300 * 4);
                assert!(pixels.chunks_exact(4).all(|px| px[3] == u8::MAX));
                assert!(pixels.chunks_exact(4).any(|px| px[0] != px[1] || px[1] != px[2]),
                        "{:?} chart has no coloured pixels", kind);
            }
        }
    }

    #[test]
    fn svg_contains_captions() {
        if !fonts_available() {
            return;
        }
        let setup = mtb_setup();
        let svg = render_svg_string(ChartKind::Speed, &setup, &ChartOptions::default(), (800, 500)).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Speeds at 80 RPM"));
        assert!(svg.contains("Chainring 42T"));
        let svg = render_svg_string(ChartKind::Power { chainring: 34, sprocket: 18 }, &setup,
                                    &ChartOptions { language: Language::Spanish, beginner: false }, (800, 500)).unwrap();
        assert!(svg.contains("34T / 18T"));
    }

    #[test]
    fn single_ring_single_sprocket_renders() {
        if !fonts_available() {
            return;
        }
        let setup = GearSetup::new(Drivetrain::new(vec![32], vec![16]).unwrap(), "700C", 90).unwrap();
        for kind in ChartKind::all(&setup) {
            render_rgba(kind, &setup, &ChartOptions::default(), (320, 240)).unwrap();
        }
    }

    #[test]
    fn svg_written_to_file() {
        if !fonts_available() {
            return;
        }
        let tmp_dir = tempfile::tempdir().unwrap();
        let path = tmp_dir.path().join("ratio.svg");
        render_svg_file(ChartKind::Ratio, &mtb_setup(), &ChartOptions::default(), (800, 500), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("42/14"));
        assert!(contents.contains("Optimal range (2.5-5.0)"));
    }
}
