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

const SECONDS_PER_MINUTE: f64 = 60.0;
const METRES_PER_KM: f64 = 1000.0;

/// Distance covered per minute (metres) expressed as km/h
pub fn metres_per_minute_to_kmh(metres_per_minute: f64) -> f64 {
    (metres_per_minute * SECONDS_PER_MINUTE) / METRES_PER_KM
}

#[cfg(test)]
mod tests {
    use crate::units::metres_per_minute_to_kmh;

    #[test]
    fn conversion_tests() {
        assert!((metres_per_minute_to_kmh(1000.0) - 60.0).abs() < 1e-9);
        assert!((metres_per_minute_to_kmh(168.4) - 10.104).abs() < 1e-9);
    }
}
