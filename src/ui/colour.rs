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

use iced::Color;

pub fn safe_green() -> Color {
    Color::from_rgb8(0, 128, 0)
}

pub fn crossing_red() -> Color {
    Color::from_rgb8(220, 20, 20)
}

pub fn warn_orange() -> Color {
    Color::from_rgb8(230, 120, 0)
}

pub fn hint_grey() -> Color {
    Color::from_rgb8(110, 110, 110)
}
