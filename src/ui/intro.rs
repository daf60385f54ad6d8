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

use iced::{theme, Element, Length, Padding};
use iced::widget::{Button, Column, Row, Text};
use crate::ui::{Message, Tab, BIKE_TAB};
use crate::ui::data::ApplicationData;
use crate::ui::elements::{boxed, section};
use crate::ui::text::{ConceptCard, UiText};

const CARD_WIDTH: u16 = 480;

#[derive(Default)]
pub struct IntroTab;

fn card<'a>(concept: &ConceptCard) -> Element<'a, Message> {
    boxed(
        Column::new()
            .spacing(6)
            .push(Text::new(concept.title).size(20))
            .push(Text::new(concept.body))
    ).width(Length::Units(CARD_WIDTH)).into()
}

impl Tab for IntroTab {
    type Message = Message;

    fn title(&self, text: &UiText) -> &'static str {
        text.tab_intro
    }

    fn heading(&self, text: &UiText) -> &'static str {
        text.intro_title
    }

    fn content<'a, 'b>(&'a self, app_data: &'b ApplicationData) -> Element<'_, Self::Message>
        where 'b: 'a
    {
        let text = app_data.text();
        let cards = text.concept_cards.chunks(2).fold(
            Column::new().spacing(10),
            |column, pair| {
                column.push(pair.iter().fold(Row::new().spacing(10), |row, concept| row.push(card(concept))))
            }
        );
        Column::new()
            .spacing(25)
            .push(Text::new(text.intro_text))
            .push(section(text.concepts_heading).push(cards))
            .push(Button::new(Text::new(text.intro_start).size(22))
                .padding(Padding::from([8, 20]))
                .style(theme::Button::Primary)
                .on_press(Message::TabSelected(BIKE_TAB)))
            .into()
    }
}
