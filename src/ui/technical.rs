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

use iced::{theme, Alignment, Element, Length};
use iced::widget::{Button, Column, PickList, Row, Text};
use gearing::overlap::analysis_text;
use gearing::plot::ChartKind;
use gearing::GearSetup;
use tracing::error;
use crate::ui::{Message, Mode, Tab};
use crate::ui::data::ApplicationData;
use crate::ui::elements::{boxed, chart_view, section, tab_bar};
use crate::ui::text::UiText;

const RATIO_VIEW: usize = 0;
const POWER_VIEW: usize = 1;
const OVERLAP_VIEW: usize = 2;

#[derive(Debug, Clone)]
pub enum TechnicalMessage {
    ViewSelected(usize),
    ChainringSelected(u32),
    SprocketSelected(u32),
    UpdatePowerChart
}

#[derive(Default)]
pub struct TechnicalTab {
    active_view: usize,
    chainring_options: Vec<u32>,
    sprocket_options: Vec<u32>,
    pub(crate) chainring: Option<u32>,
    pub(crate) sprocket: Option<u32>
}

impl TechnicalTab {
    pub(crate) fn new(app_data: &ApplicationData) -> Self {
        let mut tab = TechnicalTab::default();
        if let Some(setup) = &app_data.setup {
            tab.reset_power_selection(app_data, setup);
        }
        tab
    }

    /// Offer the teeth of `setup` and select the gear the power chart is drawn for
    fn reset_power_selection(&mut self, app_data: &ApplicationData, setup: &GearSetup) {
        let drivetrain = setup.drivetrain();
        self.chainring_options = drivetrain.chainrings().to_vec();
        self.sprocket_options = drivetrain.sprockets().to_vec();
        let shown = app_data.power_chart()
            .map(|chart| chart.kind)
            .filter(|kind| kind.fits(setup))
            .unwrap_or_else(|| ChartKind::default_power(setup));
        if let ChartKind::Power { chainring, sprocket } = shown {
            self.chainring = Some(chainring);
            self.sprocket = Some(sprocket);
        }
    }

    pub fn app_data_update(&mut self, app_data: &ApplicationData, update_event: &Message) {
        if let Message::VisualizeRequested | Message::ModeChanged(Mode::Technical) = update_event {
            self.active_view = RATIO_VIEW;
            match &app_data.setup {
                Some(setup) => self.reset_power_selection(app_data, setup),
                None => *self = TechnicalTab::default()
            }
        }
    }

    pub fn update(&mut self, message: TechnicalMessage, _app_data: &ApplicationData) {
        match message {
            TechnicalMessage::ViewSelected(view) => self.active_view = view,
            TechnicalMessage::ChainringSelected(chainring) => self.chainring = Some(chainring),
            TechnicalMessage::SprocketSelected(sprocket) => self.sprocket = Some(sprocket),
            TechnicalMessage::UpdatePowerChart => {}
        }
    }

    fn ratio_view<'a>(&self, app_data: &'a ApplicationData) -> Element<'a, Message> {
        let text = app_data.text();
        let mut layout = Column::new()
            .spacing(10)
            .push(section(text.ratio_heading));
        if let Some(chart) = app_data.chart(ChartKind::Ratio) {
            layout = layout.push(chart_view(chart, text.export_svg));
        }
        layout.push(Text::new(text.ratio_explanation)).into()
    }

    fn power_view<'a>(&'a self, app_data: &'a ApplicationData) -> Element<'a, Message> {
        let text = app_data.text();
        let pickers = Row::new()
            .spacing(15)
            .align_items(Alignment::Center)
            .push(Text::new(text.chainring_picker))
            .push(PickList::new(
                &self.chainring_options,
                self.chainring,
                move |val| Message::Technical(TechnicalMessage::ChainringSelected(val))
            ).width(Length::Units(90)))
            .push(Text::new(text.sprocket_picker))
            .push(PickList::new(
                &self.sprocket_options,
                self.sprocket,
                move |val| Message::Technical(TechnicalMessage::SprocketSelected(val))
            ).width(Length::Units(90)))
            .push(Button::new(Text::new(text.update_chart))
                .style(theme::Button::Primary)
                .on_press(Message::Technical(TechnicalMessage::UpdatePowerChart)));
        let mut layout = Column::new()
            .spacing(10)
            .push(section(text.power_heading))
            .push(pickers);
        if let Some(chart) = app_data.power_chart() {
            layout = layout.push(chart_view(chart, text.export_svg));
        }
        layout.push(Text::new(text.power_explanation)).into()
    }

    fn overlap_view<'a>(&self, app_data: &'a ApplicationData, setup: &GearSetup) -> Element<'a, Message> {
        let text = app_data.text();
        let mut layout = Column::new()
            .spacing(10)
            .push(section(text.overlap_heading));
        if let Some(chart) = app_data.chart(ChartKind::Overlap) {
            layout = layout.push(chart_view(chart, text.export_svg));
        }
        let analysis = match analysis_text(setup, app_data.settings.language) {
            Ok(analysis) => analysis,
            Err(e) => {
                error!("Failed to analyse overlap. {}", e);
                text.error_in("calculate_overlap_analysis", &e.to_string())
            }
        };
        layout
            .push(Text::new(text.overlap_box).size(20))
            .push(boxed(Text::new(analysis)).width(Length::Units(900)))
            .into()
    }
}

impl Tab for TechnicalTab {
    type Message = Message;

    fn title(&self, text: &UiText) -> &'static str {
        text.tab_technical
    }

    fn content<'a, 'b>(&'a self, app_data: &'b ApplicationData) -> Element<'_, Self::Message>
        where 'b: 'a
    {
        let text = app_data.text();
        let Some(setup) = &app_data.setup else {
            return Text::new(text.configure_first).into();
        };
        let view = match self.active_view {
            POWER_VIEW => self.power_view(app_data),
            OVERLAP_VIEW => self.overlap_view(app_data, setup),
            _ => self.ratio_view(app_data)
        };
        Column::new()
            .spacing(20)
            .push(Text::new(text.technical_explanation))
            .push(tab_bar(
                &[text.tech_ratio_tab, text.tech_power_tab, text.tech_overlap_tab],
                self.active_view,
                |view| Message::Technical(TechnicalMessage::ViewSelected(view))
            ))
            .push(view)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use gearing::{BikeType, GearSetup};
    use crate::settings::GlobalSettings;
    use crate::ui::data::ApplicationData;
    use crate::ui::technical::{TechnicalMessage, TechnicalTab};
    use crate::ui::Message;

    #[test]
    fn power_selection_defaults_to_big_ring_mid_cassette() {
        let mut app_data = ApplicationData::with_settings(GlobalSettings::default());
        app_data.setup = Some(GearSetup::new(BikeType::Road.drivetrain().unwrap(), "700x25C", 80).unwrap());
        let mut tab = TechnicalTab::default();
        tab.app_data_update(&app_data, &Message::VisualizeRequested);
        assert_eq!(tab.chainring, Some(50));
        assert_eq!(tab.sprocket, Some(20));
        assert_eq!(tab.chainring_options, vec![50, 34]);

        tab.update(TechnicalMessage::SprocketSelected(28), &app_data);
        assert_eq!(tab.sprocket, Some(28));
    }
}
