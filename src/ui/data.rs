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

use iced::widget::image;
use tracing::{info, span, warn, Level};
use gearing::plot::{render_rgba, ChartKind, ChartOptions, DEFAULT_CHART_SIZE};
use gearing::{BikeType, Drivetrain, GearSetup, GearingError};
use crate::settings::GlobalSettings;
use crate::ui::text::UiText;

/// A chart drawn for the current setup, ready to be shown in an image widget
pub struct RenderedChart {
    pub kind: ChartKind,
    pub handle: image::Handle
}

pub fn render_chart(kind: ChartKind, setup: &GearSetup, options: &ChartOptions) -> gearing::Result<RenderedChart> {
    let (width, height) = DEFAULT_CHART_SIZE;
    let pixels = render_rgba(kind, setup, options, DEFAULT_CHART_SIZE)?;
    Ok(RenderedChart { kind, handle: image::Handle::from_pixels(width, height, pixels) })
}

pub struct ApplicationData {
    pub(crate) settings: GlobalSettings,
    /// The teeth picked from a preset or entered manually. `None` until a custom bike is configured
    pub(crate) drivetrain: Option<Drivetrain>,
    /// Set once the bike has been visualised
    pub(crate) setup: Option<GearSetup>,
    charts: Vec<RenderedChart>
}

fn drivetrain_for(settings: &GlobalSettings) -> Option<Drivetrain> {
    match settings.bike_type {
        BikeType::Custom => {
            if settings.custom_chainrings.is_empty() && settings.custom_sprockets.is_empty() {
                return None;
            }
            match Drivetrain::parse(&settings.custom_chainrings, &settings.custom_sprockets) {
                Ok(drivetrain) => Some(drivetrain),
                Err(e) => {
                    warn!("Ignoring stored custom gears. {}", e);
                    None
                }
            }
        }
        preset => preset.drivetrain()
    }
}

impl ApplicationData {
    pub(crate) fn new() -> ApplicationData {
        let settings = GlobalSettings::load().unwrap_or_else(|e| {
            warn!("Failed to load settings. {}", e.to_string());
            GlobalSettings::default()
        });
        info!("Settings loaded from {}", settings.path().display());
        ApplicationData::with_settings(settings)
    }

    pub(crate) fn with_settings(settings: GlobalSettings) -> ApplicationData {
        let drivetrain = drivetrain_for(&settings);
        match &drivetrain {
            None => info!("No gears configured for {} bike", settings.bike_type),
            Some(d) => info!("Using {} bike with chainrings {} and sprockets {}",
                             settings.bike_type, d.chainrings_text(), d.sprockets_text())
        }
        ApplicationData {
            settings,
            drivetrain,
            setup: None,
            charts: Vec::new()
        }
    }

    pub fn text(&self) -> &'static UiText {
        UiText::for_language(self.settings.language)
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            language: self.settings.language,
            beginner: !self.settings.technical_mode
        }
    }

    pub fn select_bike(&mut self, bike_type: BikeType) {
        self.settings.select_bike(bike_type);
        self.drivetrain = bike_type.drivetrain();
    }

    /// Store the teeth entered in the manual configuration dialog. They are only range
    /// checked when the bike is visualised
    pub fn set_manual_gears(&mut self, chainrings_text: &str, sprockets_text: &str) -> gearing::Result<()> {
        let drivetrain = Drivetrain::parse(chainrings_text, sprockets_text)?;
        self.settings.custom_chainrings = drivetrain.chainrings_text();
        self.settings.custom_sprockets = drivetrain.sprockets_text();
        self.drivetrain = Some(drivetrain);
        Ok(())
    }

    /// Validate the current configuration into a setup that can be visualised
    pub fn build_setup(&self) -> gearing::Result<GearSetup> {
        let drivetrain = self.drivetrain.clone().ok_or(GearingError::EmptyDrivetrain)?;
        GearSetup::new(drivetrain, &self.settings.wheel_size, self.settings.cadence)
    }

    pub fn chart(&self, kind: ChartKind) -> Option<&RenderedChart> {
        self.charts.iter().find(|chart| chart.kind == kind)
    }

    pub fn power_chart(&self) -> Option<&RenderedChart> {
        self.charts.iter().find(|chart| matches!(chart.kind, ChartKind::Power { .. }))
    }

    /// Draw every chart the current mode shows. Technical charts are skipped in beginner mode
    pub fn render_charts(&mut self) -> gearing::Result<()> {
        let Some(setup) = &self.setup else {
            self.charts.clear();
            return Ok(());
        };
        let span = span!(Level::INFO, "Rendering charts");
        let _enter = span.enter();
        let options = self.chart_options();
        let power = self.power_chart()
            .map(|chart| chart.kind)
            .filter(|kind| kind.fits(setup))
            .unwrap_or_else(|| ChartKind::default_power(setup));
        let mut kinds = vec![ChartKind::Speed, ChartKind::Development];
        if self.settings.technical_mode {
            kinds.extend([ChartKind::Ratio, ChartKind::Overlap, power]);
        }
        let charts = kinds.into_iter()
            .map(|kind| render_chart(kind, setup, &options))
            .collect::<gearing::Result<Vec<_>>>()?;
        info!("Rendered {} charts", charts.len());
        self.charts = charts;
        Ok(())
    }

    pub fn render_power_chart(&mut self, chainring: u32, sprocket: u32) -> gearing::Result<()> {
        let Some(setup) = &self.setup else {
            return Ok(());
        };
        let chart = render_chart(ChartKind::Power { chainring, sprocket }, setup, &self.chart_options())?;
        self.charts.retain(|chart| !matches!(chart.kind, ChartKind::Power { .. }));
        self.charts.push(chart);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use gearing::{BikeType, GearingError};
    use crate::settings::GlobalSettings;
    use crate::ui::data::ApplicationData;

    #[test]
    fn presets_provide_gears() {
        let mut data = ApplicationData::with_settings(GlobalSettings::default());
        assert_eq!(data.drivetrain.as_ref().unwrap().chainrings(), &[42, 34, 24]);
        data.select_bike(BikeType::Road);
        let setup = data.build_setup().unwrap();
        assert_eq!(setup.drivetrain().chainrings(), &[50, 34]);
        assert_eq!(setup.wheel().name, "700x25C");
        assert_eq!(setup.cadence(), 80);
    }

    #[test]
    fn custom_bike_needs_manual_gears() {
        let mut data = ApplicationData::with_settings(GlobalSettings::default());
        data.select_bike(BikeType::Custom);
        assert!(data.drivetrain.is_none());
        assert!(matches!(data.build_setup(), Err(GearingError::EmptyDrivetrain)));

        data.set_manual_gears("34, 50", "28,11,14").unwrap();
        assert_eq!(data.settings.custom_chainrings, "50,34");
        assert_eq!(data.settings.custom_sprockets, "11,14,28");
        assert!(data.build_setup().is_ok());
    }

    #[test]
    fn manual_gears_are_range_checked_on_visualise() {
        let mut data = ApplicationData::with_settings(GlobalSettings::default());
        data.select_bike(BikeType::Custom);
        assert!(matches!(data.set_manual_gears("34,x", "11"), Err(GearingError::InvalidTeeth(_))));
        assert!(data.drivetrain.is_none());

        data.set_manual_gears("60", "11").unwrap();
        assert!(matches!(data.build_setup(), Err(GearingError::TeethOutOfRange(60))));
    }

    #[test]
    fn stored_custom_gears_are_restored() {
        let mut settings = GlobalSettings::default();
        settings.select_bike(BikeType::Custom);
        settings.custom_chainrings = "46,30".to_string();
        settings.custom_sprockets = "11,13,15".to_string();
        let data = ApplicationData::with_settings(settings);
        assert_eq!(data.drivetrain.unwrap().chainrings(), &[46, 30]);
    }

    #[test]
    fn nothing_rendered_without_a_setup() {
        let mut data = ApplicationData::with_settings(GlobalSettings::default());
        data.render_charts().unwrap();
        assert!(data.chart(gearing::plot::ChartKind::Speed).is_none());
        assert!(data.power_chart().is_none());
    }
}
