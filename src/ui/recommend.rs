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

use iced::{theme, Alignment, Element, Length, Padding};
use iced::widget::{slider, Button, Column, Row, Text};
use gearing::recommend::{Recommendation, RouteConditions};
use gearing::{DEFAULT_SLOPE, DEFAULT_TARGET_SPEED, MAX_SLOPE, MAX_TARGET_SPEED, MIN_SLOPE, MIN_TARGET_SPEED};
use crate::ui::{Message, Tab};
use crate::ui::colour::crossing_red;
use crate::ui::data::ApplicationData;
use crate::ui::elements::{boxed, hint, section};
use crate::ui::text::UiText;

const DETAIL_LABEL_WIDTH: u16 = 200;

#[derive(Debug, Clone)]
pub enum RecommendMessage {
    TargetSpeedChanged(u32),
    SlopeChanged(i32),
    CalculateRequested
}

pub struct RecommendTab {
    target_speed: u32,
    slope: i32,
    pub(crate) result: Option<Recommendation>
}

impl Default for RecommendTab {
    fn default() -> Self {
        RecommendTab {
            target_speed: DEFAULT_TARGET_SPEED,
            slope: DEFAULT_SLOPE,
            result: None
        }
    }
}

fn detail_row<'a>(label: &str, value: String) -> Row<'a, Message> {
    Row::new()
        .push(Text::new(label.to_string()).width(Length::Units(DETAIL_LABEL_WIDTH)))
        .push(Text::new(value))
}

fn result_panel<'a>(recommendation: &Recommendation, app_data: &ApplicationData) -> Column<'a, Message> {
    let text = app_data.text();
    let language = app_data.settings.language;
    let combination = &recommendation.combination;
    let mut panel = Column::new()
        .spacing(12)
        .push(Text::new(text.recommended_gear(&recommendation.gear_text())).size(24))
        .push(Text::new(recommendation.position_text(language)))
        .push(Column::new()
            .spacing(4)
            .push(detail_row(text.estimated_speed, format!("{:.1} km/h", combination.speed_kmh)))
            .push(detail_row(text.gear_ratio, format!("{:.2}", combination.ratio)))
            .push(detail_row(text.development_label, format!("{:.2} {}", combination.development, text.metres_per_stroke))));
    if recommendation.crosses_chain {
        panel = panel.push(Text::new(format!("⚠ {}", text.crossing_warning)).style(crossing_red()));
    }
    panel
        .push(Text::new(text.tip).size(20))
        .push(Text::new(recommendation.advice.text(language)))
}

impl RecommendTab {
    pub fn conditions(&self) -> RouteConditions {
        RouteConditions {
            target_speed_kmh: self.target_speed as f64,
            slope_pct: self.slope as f64
        }
    }

    pub fn app_data_update(&mut self, _app_data: &ApplicationData, update_event: &Message) {
        if let Message::VisualizeRequested = update_event {
            self.result = None;
        }
    }

    pub fn update(&mut self, message: RecommendMessage, _app_data: &ApplicationData) {
        match message {
            RecommendMessage::TargetSpeedChanged(speed) => self.target_speed = speed,
            RecommendMessage::SlopeChanged(slope) => self.slope = slope,
            RecommendMessage::CalculateRequested => {}
        }
    }
}

impl Tab for RecommendTab {
    type Message = Message;

    fn title(&self, text: &UiText) -> &'static str {
        text.tab_recommend
    }

    fn heading(&self, text: &UiText) -> &'static str {
        text.recommend_title
    }

    fn content<'a, 'b>(&'a self, app_data: &'b ApplicationData) -> Element<'_, Self::Message>
        where 'b: 'a
    {
        let text = app_data.text();
        if app_data.drivetrain.is_none() {
            return Text::new(text.configure_first).into();
        }

        let speed_select = Column::new()
            .spacing(5)
            .push(Text::new(text.target_speed_label))
            .push(Row::new()
                .spacing(10)
                .align_items(Alignment::Center)
                .push(slider(MIN_TARGET_SPEED..=MAX_TARGET_SPEED, self.target_speed,
                             move |val| Message::Recommend(RecommendMessage::TargetSpeedChanged(val)))
                    .width(Length::Units(300)))
                .push(Text::new(format!("{} km/h", self.target_speed))));
        let slope_select = Column::new()
            .spacing(5)
            .push(Text::new(text.slope_label))
            .push(Row::new()
                .spacing(10)
                .align_items(Alignment::Center)
                .push(slider(MIN_SLOPE..=MAX_SLOPE, self.slope,
                             move |val| Message::Recommend(RecommendMessage::SlopeChanged(val)))
                    .width(Length::Units(300)))
                .push(Text::new(format!("{}%", self.slope))))
            .push(hint(text.slope_hint));
        let route = section(text.route_heading)
            .spacing(15)
            .push(speed_select)
            .push(slope_select)
            .push(Button::new(Text::new(text.calculate))
                .padding(Padding::from([8, 20]))
                .style(theme::Button::Primary)
                .on_press(Message::Recommend(RecommendMessage::CalculateRequested)));

        let result: Element<'_, Message> = match &self.result {
            Some(recommendation) => result_panel(recommendation, app_data).into(),
            None => Text::new(text.result_placeholder).into()
        };

        Column::new()
            .spacing(30)
            .push(route)
            .push(section(text.result_heading).push(boxed(result).width(Length::Units(700))))
            .into()
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::recommend::{RecommendMessage, RecommendTab};
    use crate::settings::GlobalSettings;
    use crate::ui::data::ApplicationData;

    #[test]
    fn sliders_set_route_conditions() {
        let app_data = ApplicationData::with_settings(GlobalSettings::default());
        let mut tab = RecommendTab::default();
        assert_eq!(tab.conditions().target_speed_kmh, 20.0);
        assert_eq!(tab.conditions().slope_pct, 0.0);
        tab.update(RecommendMessage::TargetSpeedChanged(32), &app_data);
        tab.update(RecommendMessage::SlopeChanged(-6), &app_data);
        assert_eq!(tab.conditions().target_speed_kmh, 32.0);
        assert_eq!(tab.conditions().slope_pct, -6.0);
    }
}
