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

pub mod error;
pub mod wheel;
pub mod bike;
pub mod drivetrain;
pub mod crossing;
pub mod calc;
pub mod recommend;
pub mod overlap;
pub mod sweep;
pub mod plot;
pub mod lang;

pub use error::{GearingError, Result};
pub use bike::BikeType;
pub use drivetrain::Drivetrain;
pub use calc::{GearCombination, GearSetup, GearTable};
pub use crossing::{CrossingKind, CrossingMatrix, CrossingRule};
pub use lang::Language;

pub const DEFAULT_CADENCE: u32 = 80;
pub const MIN_CADENCE: u32 = 60;
pub const MAX_CADENCE: u32 = 100;
pub const OPTIMAL_CADENCE_MIN: u32 = 80;
pub const OPTIMAL_CADENCE_MAX: u32 = 90;
pub const MIN_TEETH: u32 = 11;
pub const MAX_TEETH: u32 = 53;

pub const MIN_TARGET_SPEED: u32 = 5;
pub const MAX_TARGET_SPEED: u32 = 50;
pub const DEFAULT_TARGET_SPEED: u32 = 20;
pub const MIN_SLOPE: i32 = -10;
pub const MAX_SLOPE: i32 = 20;
pub const DEFAULT_SLOPE: i32 = 0;
