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

use iced::{theme, Alignment, Background, Color, Element, Length, Padding, Theme};
use iced::widget::{container, scrollable, Button, Column, Container, Row, Text};
use gearing::{CrossingMatrix, Language};
use crate::ui::colour::{crossing_red, safe_green, warn_orange};
use crate::ui::data::ApplicationData;
use crate::ui::bike::BikeTab;
use crate::ui::elements::section;
use crate::ui::text::UiText;
use crate::ui::Message;

const DIALOG_WIDTH: u16 = 720;
const DIALOG_BODY_HEIGHT: u16 = 460;
const MATRIX_LABEL_WIDTH: u16 = 150;
const MATRIX_CELL_WIDTH: u16 = 56;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpTopic {
    Concepts,
    Usage,
    About
}

#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Notice { level: NoticeLevel, title: String, body: String },
    ManualConfig,
    CrossingMatrix,
    Help(HelpTopic)
}

impl Dialog {
    pub fn info(title: &str, body: impl Into<String>) -> Dialog {
        Dialog::Notice { level: NoticeLevel::Info, title: title.to_string(), body: body.into() }
    }

    pub fn warning(title: &str, body: impl Into<String>) -> Dialog {
        Dialog::Notice { level: NoticeLevel::Warning, title: title.to_string(), body: body.into() }
    }

    pub fn error(title: &str, body: impl Into<String>) -> Dialog {
        Dialog::Notice { level: NoticeLevel::Error, title: title.to_string(), body: body.into() }
    }

    /// Whether clicking outside the dialog dismisses it. Forms have to be cancelled explicitly
    pub fn closes_on_blur(&self) -> bool {
        !matches!(self, Dialog::ManualConfig)
    }
}

pub fn frame<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    let f: fn(&Theme) -> container::Appearance = |_theme: &Theme| {
        container::Appearance {
            text_color: None,
            background: Some(Background::Color(Color::WHITE)),
            border_radius: 6.0,
            border_width: 1.0,
            border_color: Color::BLACK,
        }
    };
    Container::new(content)
        .width(Length::Units(DIALOG_WIDTH))
        .padding(Padding::from(20))
        .style(theme::Container::Custom(Box::new(f)))
}

fn close_row<'a>(text: &UiText) -> Row<'a, Message> {
    Row::new()
        .push(Button::new(Text::new(text.close)).on_press(Message::CloseDialog))
}

fn titled<'a>(title: &str, body: impl Into<Element<'a, Message>>, text: &UiText) -> Element<'a, Message> {
    frame(
        Column::new()
            .spacing(15)
            .align_items(Alignment::Center)
            .push(Text::new(title.to_string()).size(26))
            .push(body)
            .push(close_row(text))
    ).into()
}

fn long_text<'a>(body: &str) -> Element<'a, Message> {
    scrollable(Text::new(body.to_string()).size(17))
        .height(Length::Units(DIALOG_BODY_HEIGHT))
        .into()
}

fn notice<'a>(level: NoticeLevel, title: &str, body: &str, text: &UiText) -> Element<'a, Message> {
    let body_text = Text::new(body.to_string());
    let body_text = match level {
        NoticeLevel::Info => body_text,
        NoticeLevel::Warning => body_text.style(warn_orange()),
        NoticeLevel::Error => body_text.style(crossing_red())
    };
    titled(title, body_text, text)
}

fn matrix_grid<'a>(matrix: &CrossingMatrix, text: &UiText) -> Column<'a, Message> {
    let header = matrix.sprockets.iter().fold(
        Row::new().push(Text::new(text.matrix_corner).width(Length::Units(MATRIX_LABEL_WIDTH))),
        |row, sprocket| row.push(Text::new(format!("{}T", sprocket)).width(Length::Units(MATRIX_CELL_WIDTH)))
    );
    matrix.chainrings.iter().zip(matrix.rows()).fold(
        Column::new().spacing(6).push(header),
        |grid, (chainring, cells)| {
            let row = cells.iter().fold(
                Row::new().push(Text::new(format!("{}T", chainring)).width(Length::Units(MATRIX_LABEL_WIDTH))),
                |row, cell| {
                    let mark = match cell {
                        Some(_) => Text::new("X").style(crossing_red()),
                        None => Text::new("O").style(safe_green())
                    };
                    row.push(mark.width(Length::Units(MATRIX_CELL_WIDTH)))
                });
            grid.push(row)
        }
    )
}

fn teeth_list(teeth: &[u32]) -> String {
    teeth.iter().map(|t| format!("{}T", t)).collect::<Vec<_>>().join(", ")
}

fn crossing_matrix<'a>(app_data: &ApplicationData, text: &UiText) -> Element<'a, Message> {
    let Some(setup) = &app_data.setup else {
        return titled(text.matrix_title, Text::new(text.configure_first), text);
    };
    let matrix = setup.crossings();
    let language: Language = app_data.settings.language;
    let mut info = Column::new()
        .spacing(3)
        .push(Text::new(format!("{} {}", text.matrix_chainrings, teeth_list(&matrix.chainrings))))
        .push(Text::new(format!("{} {}", text.matrix_sprockets, teeth_list(&matrix.sprockets))));
    for line in matrix.rule.describe(language) {
        info = info.push(Text::new(line).size(16));
    }
    let body = Column::new()
        .spacing(15)
        .push(Text::new(text.matrix_heading).size(20))
        .push(info)
        .push(matrix_grid(matrix, text))
        .push(section(text.explanation_heading))
        .push(Text::new(text.matrix_explanation).size(16));
    titled(text.matrix_title, scrollable(body).height(Length::Units(DIALOG_BODY_HEIGHT)), text)
}

fn help<'a>(topic: HelpTopic, text: &UiText) -> Element<'a, Message> {
    match topic {
        HelpTopic::Concepts => titled(text.concepts_title, long_text(text.concepts_text), text),
        HelpTopic::Usage => titled(text.usage_title, long_text(text.usage_text), text),
        HelpTopic::About => {
            let body = Column::new()
                .spacing(10)
                .align_items(Alignment::Center)
                .push(Text::new(text.about_name).size(22))
                .push(Text::new(text.about_version))
                .push(Text::new(text.about_text));
            titled(text.about_title, body, text)
        }
    }
}

pub fn view<'a>(dialog: &Dialog, app_data: &ApplicationData, bike_tab: &'a BikeTab) -> Element<'a, Message> {
    let text = app_data.text();
    match dialog {
        Dialog::Notice { level, title, body } => notice(*level, title, body, text),
        Dialog::ManualConfig => bike_tab.manual_config_dialog(text),
        Dialog::CrossingMatrix => crossing_matrix(app_data, text),
        Dialog::Help(topic) => help(*topic, text)
    }
}

#[cfg(test)]
mod tests {
    use crate::ui::dialog::{teeth_list, Dialog, HelpTopic, NoticeLevel};

    #[test]
    fn only_forms_need_explicit_dismissal() {
        assert!(!Dialog::ManualConfig.closes_on_blur());
        assert!(Dialog::CrossingMatrix.closes_on_blur());
        assert!(Dialog::Help(HelpTopic::About).closes_on_blur());
        let warning = Dialog::warning("Insufficient data", "Please select a bicycle type or configure manually.");
        assert!(warning.closes_on_blur());
        assert!(matches!(warning, Dialog::Notice { level: NoticeLevel::Warning, .. }));
    }

    #[test]
    fn teeth_are_listed_with_units() {
        assert_eq!(teeth_list(&[42, 34, 24]), "42T, 34T, 24T");
        assert_eq!(teeth_list(&[]), "");
    }
}
