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
use iced::widget::{slider, Button, Column, PickList, Row, Text, TextInput};
use iced_native::widget::radio;
use gearing::{BikeType, MAX_CADENCE, MIN_CADENCE};
use crate::ui::{Message, Tab};
use crate::ui::data::ApplicationData;
use crate::ui::dialog::frame;
use crate::ui::elements::{hint, section};
use crate::ui::text::UiText;

#[derive(Debug, Clone)]
pub enum BikeMessage {
    BikeSelected(BikeType),
    WheelSelected(String),
    CadenceChanged(u32),
    ManualConfigRequested,
    ChainringsEntered(String),
    SprocketsEntered(String),
    ManualConfigSaved,
    ManualConfigCancelled
}

pub struct BikeTab {
    wheel_options: Vec<String>,
    pub(crate) manual_chainrings: String,
    pub(crate) manual_sprockets: String
}

fn wheel_options_for(bike_type: BikeType) -> Vec<String> {
    bike_type.wheel_options().into_iter().map(String::from).collect()
}

impl BikeTab {
    pub(crate) fn new(app_data: &ApplicationData) -> Self {
        BikeTab {
            wheel_options: wheel_options_for(app_data.settings.bike_type),
            manual_chainrings: app_data.settings.custom_chainrings.clone(),
            manual_sprockets: app_data.settings.custom_sprockets.clone()
        }
    }

    pub fn app_data_update(&mut self, app_data: &ApplicationData, update_event: &Message) {
        match update_event {
            Message::Bike(BikeMessage::BikeSelected(bike_type)) => {
                self.wheel_options = wheel_options_for(*bike_type);
            }
            Message::Bike(BikeMessage::ManualConfigSaved) => {
                self.manual_chainrings = app_data.settings.custom_chainrings.clone();
                self.manual_sprockets = app_data.settings.custom_sprockets.clone();
            }
            _ => {}
        }
    }

    pub fn update(&mut self, message: BikeMessage, app_data: &ApplicationData) {
        match message {
            BikeMessage::ManualConfigRequested => {
                if let Some(drivetrain) = &app_data.drivetrain {
                    (self.manual_chainrings, self.manual_sprockets) = drivetrain.to_text();
                }
            }
            BikeMessage::ChainringsEntered(val) => self.manual_chainrings = val,
            BikeMessage::SprocketsEntered(val) => self.manual_sprockets = val,
            _ => {}
        }
    }

    pub fn manual_config_dialog<'a>(&'a self, text: &UiText) -> Element<'a, Message> {
        let chainrings = Column::new()
            .spacing(5)
            .push(Text::new(text.manual_chainrings).size(20))
            .push(Text::new(text.manual_prompt))
            .push(TextInput::new(
                "24,34,42",
                &self.manual_chainrings,
                move |val| Message::Bike(BikeMessage::ChainringsEntered(val))
            ).padding(5).width(Length::Units(400)))
            .push(hint(text.manual_chainrings_example));
        let sprockets = Column::new()
            .spacing(5)
            .push(Text::new(text.manual_sprockets).size(20))
            .push(Text::new(text.manual_prompt))
            .push(TextInput::new(
                "11,12,14,16,18,21,24,28",
                &self.manual_sprockets,
                move |val| Message::Bike(BikeMessage::SprocketsEntered(val))
            ).padding(5).width(Length::Units(400)))
            .push(hint(text.manual_sprockets_example));
        let buttons = Row::new()
            .spacing(10)
            .push(Button::new(Text::new(text.cancel))
                .style(theme::Button::Secondary)
                .on_press(Message::Bike(BikeMessage::ManualConfigCancelled)))
            .push(Button::new(Text::new(text.save_configuration))
                .style(theme::Button::Positive)
                .on_press(Message::Bike(BikeMessage::ManualConfigSaved)));
        frame(
            Column::new()
                .spacing(20)
                .push(Text::new(text.manual_title).size(26))
                .push(Text::new(text.manual_heading))
                .push(chainrings)
                .push(sprockets)
                .push(buttons)
        ).into()
    }
}

impl Tab for BikeTab {
    type Message = Message;

    fn title(&self, text: &UiText) -> &'static str {
        text.tab_bike
    }

    fn heading(&self, text: &UiText) -> &'static str {
        text.bike_title
    }

    fn content<'a, 'b>(&'a self, app_data: &'b ApplicationData) -> Element<'_, Self::Message>
        where 'b: 'a
    {
        let text = app_data.text();
        let language = app_data.settings.language;
        let selected_bike = app_data.settings.bike_type;

        let bike_radios = BikeType::ALL.iter().fold(
            Column::new().spacing(8),
            |column, bike_type| {
                column.push(radio(
                    bike_type.label(language),
                    *bike_type,
                    Some(selected_bike),
                    move |val| Message::Bike(BikeMessage::BikeSelected(val)))
                    .spacing(3).size(20).text_size(18))
            }
        );
        let bike_select = section(text.bike_type_heading)
            .push(Text::new(text.bike_type_prompt))
            .push(bike_radios);

        let wheel_select = Column::new()
            .spacing(5)
            .push(Text::new(text.wheel_size_label))
            .push(PickList::new(
                &self.wheel_options,
                Some(app_data.settings.wheel_size.clone()),
                move |val| Message::Bike(BikeMessage::WheelSelected(val))
            ).width(Length::Units(200)));

        let cadence = app_data.settings.cadence;
        let cadence_select = Column::new()
            .spacing(5)
            .push(Text::new(text.cadence_label))
            .push(Row::new()
                .spacing(10)
                .align_items(Alignment::Center)
                .push(slider(MIN_CADENCE..=MAX_CADENCE, cadence, move |val| Message::Bike(BikeMessage::CadenceChanged(val)))
                    .width(Length::Units(300)))
                .push(Text::new(format!("{} RPM", cadence))))
            .push(hint(text.cadence_hint));

        let mut manual_button = Button::new(Text::new(text.configure_manually))
            .style(theme::Button::Secondary);
        if selected_bike.allows_manual_config() {
            manual_button = manual_button.on_press(Message::Bike(BikeMessage::ManualConfigRequested));
        }
        let mut teeth = Column::new().spacing(3);
        if let Some(drivetrain) = &app_data.drivetrain {
            teeth = teeth
                .push(Text::new(format!("{} {}", text.matrix_chainrings, drivetrain.chainrings_text())))
                .push(Text::new(format!("{} {}", text.matrix_sprockets, drivetrain.sprockets_text())));
        }
        let detail = section(text.detail_heading)
            .spacing(15)
            .push(wheel_select)
            .push(cadence_select)
            .push(teeth)
            .push(manual_button);

        let visualize_button = Button::new(Text::new(text.visualize).size(22))
            .padding(Padding::from([8, 20]))
            .style(theme::Button::Primary)
            .on_press(Message::VisualizeRequested);

        Column::new()
            .spacing(30)
            .push(Text::new(text.bike_explanation))
            .push(bike_select)
            .push(detail)
            .push(visualize_button)
            .into()
    }
}
