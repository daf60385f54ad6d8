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

/// Round to the nearest integer with ties going to the even neighbour
/// i.e. 2.5 -> 2, 3.5 -> 4
pub fn round_half_even(val: f64) -> i64 {
    let floor = val.floor();
    let diff = val - floor;
    let rounded = if diff > 0.5 {
        floor + 1.0
    } else if diff < 0.5 {
        floor
    } else if floor % 2.0 == 0.0 {
        floor
    } else {
        floor + 1.0
    };
    rounded as i64
}

/// Count of items representing `fraction` of `total`, never less than `minimum`
pub fn fraction_of_count(total: usize, fraction: f64, minimum: usize) -> usize {
    let count = round_half_even(total as f64 * fraction).max(0) as usize;
    count.max(minimum)
}

/// Index of the value in `values` closest to `target`. Earliest index wins ties
pub fn index_of_nearest(values: &[f64], target: f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, val) in values.iter().enumerate() {
        let diff = (val - target).abs();
        match best {
            Some((_, best_diff)) if best_diff <= diff => {}
            _ => best = Some((idx, diff))
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use crate::numeric::{fraction_of_count, index_of_nearest, round_half_even};

    #[test]
    fn half_even_tests() {
        assert_eq!(round_half_even(0.5), 0);
        assert_eq!(round_half_even(1.5), 2);
        assert_eq!(round_half_even(2.5), 2);
        assert_eq!(round_half_even(2.45), 2);
        assert_eq!(round_half_even(2.8), 3);
        assert_eq!(round_half_even(3.5), 4);
        assert_eq!(round_half_even(1.05), 1);
    }

    #[test]
    fn fraction_count_tests() {
        assert_eq!(fraction_of_count(7, 0.35, 2), 2);
        assert_eq!(fraction_of_count(10, 0.35, 2), 4);
        assert_eq!(fraction_of_count(7, 0.4, 2), 3);
        assert_eq!(fraction_of_count(7, 0.15, 1), 1);
        assert_eq!(fraction_of_count(2, 0.3, 1), 1);
        assert_eq!(fraction_of_count(0, 0.3, 1), 1);
    }

    #[test]
    fn nearest_index_tests() {
        let vals = [60.0, 62.0, 64.0, 66.0];
        assert_eq!(index_of_nearest(&vals, 63.0), Some(1));
        assert_eq!(index_of_nearest(&vals, 100.0), Some(3));
        assert_eq!(index_of_nearest(&[], 1.0), None);
    }
}
