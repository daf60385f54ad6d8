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

use std::path::PathBuf;
use clap::{Parser, ValueHint};
use tracing::{error, info, Level};
use gearing::bike::BikeType;
use gearing::calc::GearSetup;
use gearing::drivetrain::Drivetrain;
use gearing::lang::Language;
use gearing::overlap::analysis_text;
use gearing::plot::{render_svg_file, ChartKind, ChartOptions, DEFAULT_CHART_SIZE};
use gearing::recommend::{recommend, RouteConditions};
use gearing::{GearingError, DEFAULT_CADENCE, DEFAULT_SLOPE, DEFAULT_TARGET_SPEED};

fn parse_bike(value: &str) -> Result<BikeType, String> {
    BikeType::from_key(value).ok_or_else(|| format!("unknown bicycle type `{}`. Use mtb, road, urban or custom", value))
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::from_code(value).ok_or_else(|| format!("unknown language `{}`. Use en or es", value))
}

/// Print the gear table of a bicycle and write its charts as SVG files
#[derive(Parser)]
#[command(author, version)]
struct Cli {
    /// Bicycle preset: mtb, road, urban or custom
    #[arg(value_parser = parse_bike)]
    bike: BikeType,

    /// Comma separated chainring teeth, overrides the preset
    #[arg(long)]
    chainrings: Option<String>,

    /// Comma separated sprocket teeth, overrides the preset
    #[arg(long)]
    sprockets: Option<String>,

    /// Wheel size name such as 700x25C or 29x2.3. Defaults to the preset's wheel
    #[arg(long)]
    wheel: Option<String>,

    #[arg(long, default_value_t = DEFAULT_CADENCE)]
    cadence: u32,

    /// Desired speed in km/h for the gear recommendation
    #[arg(long, default_value_t = DEFAULT_TARGET_SPEED as f64)]
    target_speed: f64,

    /// Route slope in percent for the gear recommendation
    #[arg(long, default_value_t = DEFAULT_SLOPE as f64, allow_hyphen_values = true)]
    slope: f64,

    #[arg(long, default_value = "en", value_parser = parse_language)]
    lang: Language,

    /// Label the speed chart with tooth counts instead of sprocket positions
    #[arg(long)]
    technical: bool,

    /// Directory the SVG charts are written to
    #[arg(long, default_value = ".", value_hint = ValueHint::DirPath)]
    out: PathBuf,
}

fn build_setup(cli: &Cli) -> gearing::Result<GearSetup> {
    let drivetrain = match (&cli.chainrings, &cli.sprockets) {
        (Some(chainrings), Some(sprockets)) => Drivetrain::parse(chainrings, sprockets)?,
        (None, None) => cli.bike.drivetrain().ok_or(GearingError::EmptyDrivetrain)?,
        (Some(chainrings), None) => Drivetrain::parse(chainrings, &utils::list::join_list(cli.bike.sprockets()))?,
        (None, Some(sprockets)) => Drivetrain::parse(&utils::list::join_list(cli.bike.chainrings()), sprockets)?
    };
    let wheel = cli.wheel.as_deref().unwrap_or_else(|| cli.bike.default_wheel());
    GearSetup::new(drivetrain, wheel, cli.cadence)
}

fn run(cli: &Cli) -> gearing::Result<()> {
    let setup = build_setup(cli)?;
    let table = setup.gear_table()?;
    println!("{}", cli.lang.speeds_at_cadence(setup.cadence()));
    println!("{} ({}m)", setup.wheel().name, setup.wheel().circumference);
    println!("{}\n", table.to_text());
    println!("{}\n", setup.crossings());
    for line in setup.crossings().rule.describe(cli.lang) {
        println!("{}", line);
    }
    println!("\n{}\n", analysis_text(&setup, cli.lang)?);

    let conditions = RouteConditions { target_speed_kmh: cli.target_speed, slope_pct: cli.slope };
    if let Some(recommendation) = recommend(&setup, &conditions)? {
        println!("{}", recommendation.gear_text());
        println!("{}", recommendation.position_text(cli.lang));
        println!("{}", recommendation.advice.text(cli.lang));
    }

    std::fs::create_dir_all(&cli.out)?;
    let options = ChartOptions { language: cli.lang, beginner: !cli.technical };
    for kind in ChartKind::all(&setup) {
        let path = cli.out.join(format!("{}.svg", kind.file_stem()));
        render_svg_file(kind, &setup, &options, DEFAULT_CHART_SIZE, &path)?;
    }
    info!("Charts written to {}", cli.out.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).compact().init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        error!("{}", err);
        return Err(Box::new(err));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use plotters::prelude::{FontDesc, FontFamily, FontStyle};
    use gearing::bike::BikeType;
    use gearing::lang::Language;
    use gearing::GearingError;
    use crate::{build_setup, run, Cli};

    fn fonts_available() -> bool {
        FontDesc::new(FontFamily::SansSerif, 12.0, FontStyle::Normal).box_size("0").is_ok()
    }

    #[test]
    fn arguments_parse_with_defaults() {
        let cli = Cli::try_parse_from(["gear-plot", "road"]).unwrap();
        assert_eq!(cli.bike, BikeType::Road);
        assert_eq!(cli.cadence, 80);
        assert_eq!(cli.target_speed, 20.0);
        assert_eq!(cli.slope, 0.0);
        assert_eq!(cli.lang, Language::English);
        assert!(!cli.technical);

        let cli = Cli::try_parse_from(["gear-plot", "mtb", "--slope", "-6", "--lang", "es",
                                       "--cadence", "90", "--technical"]).unwrap();
        assert_eq!(cli.bike, BikeType::Mtb);
        assert_eq!(cli.slope, -6.0);
        assert_eq!(cli.lang, Language::Spanish);
        assert_eq!(cli.cadence, 90);
        assert!(cli.technical);

        assert!(Cli::try_parse_from(["gear-plot", "tandem"]).is_err());
        assert!(Cli::try_parse_from(["gear-plot", "road", "--lang", "fr"]).is_err());
    }

    #[test]
    fn teeth_override_the_preset() {
        let cli = Cli::try_parse_from(["gear-plot", "road", "--chainrings", "30,46"]).unwrap();
        let setup = build_setup(&cli).unwrap();
        assert_eq!(setup.drivetrain().chainrings(), &[46, 30]);
        assert_eq!(setup.drivetrain().sprockets(), BikeType::Road.drivetrain().unwrap().sprockets());
        assert_eq!(setup.wheel().name, BikeType::Road.default_wheel());

        let cli = Cli::try_parse_from(["gear-plot", "custom"]).unwrap();
        assert!(matches!(build_setup(&cli), Err(GearingError::EmptyDrivetrain)));
        let cli = Cli::try_parse_from(["gear-plot", "road", "--cadence", "0"]).unwrap();
        assert!(matches!(build_setup(&cli), Err(GearingError::CadenceOutOfRange(0))));
    }

    #[test]
    fn charts_written_to_output_dir() {
        if !fonts_available() {
            eprintln!("No sans-serif font found, skipping chart rendering");
            return;
        }
        let tmp_dir = tempfile::tempdir().unwrap();
        let out = tmp_dir.path().join("charts");
        let cli = Cli::try_parse_from(["gear-plot", "mtb", "--out", out.to_str().unwrap()]).unwrap();
        run(&cli).unwrap();
        for stem in ["speed", "development", "ratio", "overlap", "power-42x20"] {
            let contents = std::fs::read_to_string(out.join(format!("{}.svg", stem))).unwrap();
            assert!(contents.starts_with("<svg"), "{} chart is not an svg", stem);
        }
    }
}
