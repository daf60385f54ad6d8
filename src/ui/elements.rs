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
use iced::widget::{container, horizontal_rule, Button, Column, Container, Row, Text};
use iced::widget::image::Image;
use gearing::plot::ChartKind;
use crate::ui::colour::hint_grey;
use crate::ui::data::RenderedChart;
use crate::ui::Message;

pub const SECTION_SIZE: u16 = 22;
const CHART_WIDTH: u16 = 900;

pub fn section<'a>(title: &str) -> Column<'a, Message> {
    Column::new()
        .spacing(3)
        .push(Text::new(title.to_string()).size(SECTION_SIZE))
        .push(horizontal_rule(5))
}

pub fn hint<'a>(content: &str) -> Text<'a> {
    Text::new(content.to_string()).size(16).style(hint_grey())
}

/// A row of buttons acting as tabs. The active tab is highlighted
pub fn tab_bar<'a>(titles: &[&str], active: usize, on_select: fn(usize) -> Message) -> Row<'a, Message> {
    titles.iter().enumerate().fold(
        Row::new().spacing(4).align_items(Alignment::End),
        |row, (idx, title)| {
            let style = if idx == active { theme::Button::Primary } else { theme::Button::Secondary };
            row.push(Button::new(Text::new(title.to_string()))
                .padding(Padding::from([6, 14]))
                .style(style)
                .on_press(on_select(idx)))
        }
    )
}

pub fn export_button<'a>(label: &str, kind: ChartKind) -> Button<'a, Message> {
    Button::new(Text::new(label.to_string()))
        .style(theme::Button::Secondary)
        .on_press(Message::ExportRequested(kind))
}

/// A rendered chart with its export button beneath it
pub fn chart_view<'a>(chart: &RenderedChart, export_label: &str) -> Element<'a, Message> {
    Column::new()
        .spacing(8)
        .align_items(Alignment::Start)
        .push(Image::new(chart.handle.clone()).width(Length::Units(CHART_WIDTH)))
        .push(export_button(export_label, chart.kind))
        .into()
}

pub fn boxed<'a>(content: impl Into<Element<'a, Message>>) -> Container<'a, Message> {
    let f: fn(&Theme) -> container::Appearance = |_theme: &Theme| {
        container::Appearance {
            text_color: None,
            background: Some(Background::Color(Color::from_rgb8(245, 245, 245))),
            border_radius: 4.0,
            border_width: 1.0,
            border_color: Color::from_rgb8(200, 200, 200),
        }
    };
    Container::new(content)
        .padding(10)
        .style(theme::Container::Custom(Box::new(f)))
}
