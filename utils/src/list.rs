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

use std::num::ParseIntError;
use itertools::Itertools;

/// Parses a comma separated list of integers. Whitespace around entries is ignored
/// and an empty (or all whitespace) string is an empty list.
///
/// On failure the offending token is returned alongside the parse error
pub fn parse_u32_list(text: &str) -> Result<Vec<u32>, (String, ParseIntError)> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    trimmed.split(',')
        .map(|token| {
            let token = token.trim();
            token.parse::<u32>().map_err(|e| (token.to_string(), e))
        })
        .collect()
}

pub fn join_list<T: ToString>(vals: &[T]) -> String {
    vals.iter().map(|v| v.to_string()).join(",")
}

#[cfg(test)]
mod tests {
    use crate::list::{join_list, parse_u32_list};

    #[test]
    fn parse_list() {
        assert_eq!(parse_u32_list("24,34,42").unwrap(), vec![24, 34, 42]);
        assert_eq!(parse_u32_list(" 34 , 50 ").unwrap(), vec![34, 50]);
        assert_eq!(parse_u32_list("").unwrap(), Vec::<u32>::new());
        assert_eq!(parse_u32_list("   ").unwrap(), Vec::<u32>::new());
        let (token, _) = parse_u32_list("11,x2,13").unwrap_err();
        assert_eq!(token, "x2");
        let (token, _) = parse_u32_list("11,,13").unwrap_err();
        assert_eq!(token, "");
    }

    #[test]
    fn join() {
        assert_eq!(join_list(&[24u32, 34, 42]), "24,34,42");
        assert_eq!(join_list::<u32>(&[]), "");
    }
}
