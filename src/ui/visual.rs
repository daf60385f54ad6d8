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

use iced::{Alignment, Element, Length};
use iced::widget::{Column, Row, Text};
use gearing::plot::ChartKind;
use gearing::{GearSetup, GearTable};
use tracing::error;
use crate::ui::{Message, Tab};
use crate::ui::colour::{hint_grey, warn_orange};
use crate::ui::data::ApplicationData;
use crate::ui::elements::{chart_view, hint, section, tab_bar};
use crate::ui::text::UiText;

const LABEL_WIDTH: u16 = 110;
const CELL_WIDTH: u16 = 70;

const TABLE_VIEW: usize = 0;
const SPEED_VIEW: usize = 1;
const DEVELOPMENT_VIEW: usize = 2;

#[derive(Debug, Clone)]
pub enum VisualMessage {
    ViewSelected(usize)
}

#[derive(Default)]
pub struct VisualTab {
    active_view: usize
}

fn gear_table<'a>(table: &GearTable, setup: &GearSetup, text: &UiText) -> Element<'a, Message> {
    let header = table.sprockets.iter().fold(
        Row::new().push(Text::new(text.table_corner()).width(Length::Units(LABEL_WIDTH))),
        |row, sprocket| row.push(Text::new(sprocket.to_string()).width(Length::Units(CELL_WIDTH)))
    );
    let grid = table.rows.iter().fold(
        Column::new().spacing(6).push(header),
        |grid, table_row| {
            let row = table_row.cells.iter().fold(
                Row::new().push(Text::new(table_row.label()).width(Length::Units(LABEL_WIDTH))),
                |row, cell| {
                    let cell_text = Text::new(GearTable::format_cell(*cell)).width(Length::Units(CELL_WIDTH));
                    match cell {
                        Some(_) => row.push(cell_text),
                        None => row.push(cell_text.style(hint_grey()))
                    }
                });
            grid.push(row)
        }
    );
    let wheel = setup.wheel();
    let mut layout = Column::new()
        .spacing(15)
        .push(section(&text.table_title(table.cadence)))
        .push(grid)
        .push(hint(&text.wheel_note(wheel.name, wheel.circumference)));
    if table.crossing_count > 0 {
        layout = layout.push(Text::new(text.table_warning(table.crossing_count, table.total)).style(warn_orange()));
    }
    layout.into()
}

fn legend<'a>(text: &UiText) -> Row<'a, Message> {
    Row::new()
        .spacing(30)
        .push(Text::new(text.legend_safe).size(16))
        .push(Text::new(text.legend_crossing).size(16))
}

impl VisualTab {
    pub fn app_data_update(&mut self, _app_data: &ApplicationData, update_event: &Message) {
        if let Message::VisualizeRequested = update_event {
            self.active_view = TABLE_VIEW;
        }
    }

    pub fn update(&mut self, message: VisualMessage, _app_data: &ApplicationData) {
        match message {
            VisualMessage::ViewSelected(view) => self.active_view = view
        }
    }

    fn table_view<'a>(&self, app_data: &ApplicationData, setup: &GearSetup) -> Element<'a, Message> {
        let text = app_data.text();
        match setup.gear_table() {
            Ok(table) => gear_table(&table, setup, text),
            Err(e) => {
                error!("Failed to build gear table. {}", e);
                Text::new(text.error_in("create_gear_table", &e.to_string())).into()
            }
        }
    }

    fn speed_view<'a>(&self, app_data: &'a ApplicationData) -> Element<'a, Message> {
        let text = app_data.text();
        let mut layout = Column::new().spacing(10);
        if let Some(chart) = app_data.chart(ChartKind::Speed) {
            layout = layout.push(chart_view(chart, text.export_svg));
        }
        layout.push(legend(text)).into()
    }

    fn development_view<'a>(&self, app_data: &'a ApplicationData) -> Element<'a, Message> {
        let text = app_data.text();
        let mut layout = Column::new()
            .spacing(10)
            .push(section(text.development_title))
            .push(Text::new(text.development_explanation));
        if let Some(chart) = app_data.chart(ChartKind::Development) {
            layout = layout.push(chart_view(chart, text.export_svg));
        }
        layout
            .push(Text::new(text.development_notes).size(16))
            .push(Text::new(text.development_warning).style(warn_orange()))
            .into()
    }
}

impl Tab for VisualTab {
    type Message = Message;

    fn title(&self, text: &UiText) -> &'static str {
        text.tab_visual
    }

    fn content<'a, 'b>(&'a self, app_data: &'b ApplicationData) -> Element<'_, Self::Message>
        where 'b: 'a
    {
        let text = app_data.text();
        let Some(setup) = &app_data.setup else {
            return Text::new(text.configure_first).into();
        };
        let view = match self.active_view {
            SPEED_VIEW => self.speed_view(app_data),
            DEVELOPMENT_VIEW => self.development_view(app_data),
            _ => self.table_view(app_data, setup)
        };
        Column::new()
            .spacing(20)
            .align_items(Alignment::Start)
            .push(tab_bar(
                &[text.visual_table, text.visual_speed, text.visual_development],
                self.active_view,
                |view| Message::Visual(VisualMessage::ViewSelected(view))
            ))
            .push(view)
            .into()
    }
}
