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

use std::{io, result};

pub type Result<T> = result::Result<T, GearingError>;

#[derive(thiserror::Error, Debug)]
pub enum GearingError {
    #[error("at least one chainring and one sprocket must be configured")]
    EmptyDrivetrain,
    #[error("invalid teeth value `{0}`")]
    InvalidTeeth(String),
    #[error("teeth value out of range: {0}")]
    TeethOutOfRange(u32),
    #[error("sprocket cannot have 0 teeth")]
    ZeroTeeth,
    #[error("cadence out of range: {0} RPM")]
    CadenceOutOfRange(u32),
    #[error("unknown wheel size `{0}`")]
    UnknownWheelSize(String),
    #[error("no gear at chainring index {0}, sprocket index {1}")]
    NoSuchGear(usize, usize),
    #[error("chart rendering failed. {0}")]
    Chart(String),
    #[error("io error")]
    Io(#[from] io::Error),
}

impl GearingError {
    /// Whether the error was caused by bad user input rather than a fault in the application
    pub fn is_user_error(&self) -> bool {
        match self {
            GearingError::EmptyDrivetrain |
            GearingError::InvalidTeeth(_) |
            GearingError::TeethOutOfRange(_) |
            GearingError::ZeroTeeth |
            GearingError::CadenceOutOfRange(_) |
            GearingError::UnknownWheelSize(_) => true,
            GearingError::NoSuchGear(..) | GearingError::Chart(_) | GearingError::Io(_) => false
        }
    }
}
