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

use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Spanish
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es"
        }
    }

    pub fn from_code(code: &str) -> Option<Language> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Some(Language::English),
            "es" | "spanish" | "español" => Some(Language::Spanish),
            _ => None
        }
    }

    pub fn text(&self) -> &'static DomainText {
        match self {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Spanish => write!(f, "Español")
        }
    }
}

/// Text describing the gearing domain. Everything the model produces that ends up
/// in front of a user is looked up from here
pub struct DomainText {
    pub bike_mtb: &'static str,
    pub bike_road: &'static str,
    pub bike_urban: &'static str,
    pub bike_custom: &'static str,

    pub crossing_large_large: &'static str,
    pub crossing_small_small: &'static str,
    pub crossing_middle_extreme: &'static str,
    pub crossing_intermediate_extreme: &'static str,

    pub advice_steep: &'static str,
    pub advice_uphill: &'static str,
    pub advice_descent: &'static str,
    pub advice_flat: &'static str,

    pub ring_large: &'static str,
    pub ring_middle: &'static str,
    pub ring_small: &'static str,

    pub overlap_needs_two_rings: &'static str,
    pub overlap_heading: &'static str,
    pub overlap_without_crossings: &'static str,
    pub overlap_including_crossings: &'static str,
    pub overlap_range: &'static str,
    pub overlap_to: &'static str,
    pub overlap_percentage: &'static str,
    pub overlap_low: &'static str,
    pub overlap_moderate: &'static str,
    pub overlap_high: &'static str,
    pub overlap_none: &'static str,
    pub total_range_without_crossings: &'static str,
    pub total_range_unavailable: &'static str,
    pub total_range_including_crossings: &'static str,
    pub range_limited: &'static str,
    pub range_moderate: &'static str,
    pub range_wide: &'static str,

    pub chainring: &'static str,
    pub sprocket: &'static str,

    pub chart_speeds_at: &'static str,
    pub chart_sprocket_teeth: &'static str,
    pub chart_sprocket_order: &'static str,
    pub chart_speed_axis: &'static str,
    pub chart_development_title: &'static str,
    pub chart_development_axis: &'static str,
    pub chart_ratio_title: &'static str,
    pub chart_combination_axis: &'static str,
    pub chart_ratio_axis: &'static str,
    pub chart_optimal_ratio: &'static str,
    pub chart_overlap_title: &'static str,
    pub chart_sprocket_position: &'static str,
    pub chart_safe: &'static str,
    pub chart_crossing: &'static str,
    pub chart_power_title: &'static str,
    pub chart_cadence_axis: &'static str,
    pub chart_power_axis: &'static str,
    pub chart_speed_series: &'static str,
    pub chart_power_series: &'static str,
    pub chart_optimal_cadence: &'static str,
}

impl Language {
    pub fn chainring_label(&self, teeth: u32) -> String {
        format!("{} {}T", self.text().chainring, teeth)
    }

    pub fn overlap_pair_heading(&self, larger: u32, smaller: u32, crossings_excluded: bool) -> String {
        let text = self.text();
        let qualifier = if crossings_excluded {
            text.overlap_without_crossings
        } else {
            text.overlap_including_crossings
        };
        match self {
            Language::English => format!("Between chainring {}T and {}T ({}):", larger, smaller, qualifier),
            Language::Spanish => format!("Entre plato {}T y {}T ({}):", larger, smaller, qualifier)
        }
    }

    pub fn speeds_at_cadence(&self, cadence: u32) -> String {
        format!("{} {} RPM", self.text().chart_speeds_at, cadence)
    }

    pub fn power_chart_title(&self, chainring: u32, sprocket: u32) -> String {
        format!("{} {}T / {}T", self.text().chart_power_title, chainring, sprocket)
    }
}

pub static ENGLISH: DomainText = DomainText {
    bike_mtb: "MTB (Mountain)",
    bike_road: "Road",
    bike_urban: "Urban/Commuter",
    bike_custom: "Custom",

    crossing_large_large: "Large chainring with large sprocket: increases wear and reduces efficiency",
    crossing_small_small: "Small chainring with small sprocket: increases wear and reduces efficiency",
    crossing_middle_extreme: "Middle chainring with extreme sprocket: may cause wear",
    crossing_intermediate_extreme: "Intermediate chainring with extreme sprocket: may cause wear",

    advice_steep: "For steep slopes, maintain a high cadence and use lighter gears to avoid straining your knees.",
    advice_uphill: "Maintain a constant cadence. If you feel you're exerting too much force, switch to a lighter gear.",
    advice_descent: "On descents, you can use harder gears or simply stop pedaling if the speed is high.",
    advice_flat: "On flat terrain, try to maintain a comfortable cadence (80-90 RPM) and adjust the gear according to the wind and your physical condition.",

    ring_large: "large",
    ring_middle: "middle",
    ring_small: "small",

    overlap_needs_two_rings: "At least two chainrings are needed to analyze overlap.",
    overlap_heading: "Overlap analysis between chainrings:",
    overlap_without_crossings: "without chain crossings",
    overlap_including_crossings: "including chain crossings",
    overlap_range: "- Overlap range:",
    overlap_to: "to",
    overlap_percentage: "- Overlap percentage:",
    overlap_low: "- Evaluation: Low overlap. There may be 'gaps' when changing chainrings.",
    overlap_moderate: "- Evaluation: Moderate overlap. Balanced configuration.",
    overlap_high: "- Evaluation: High overlap. There are many redundant gears.",
    overlap_none: "- There is no overlap between usable gears.",
    total_range_without_crossings: "Total gear range (without chain crossings):",
    total_range_unavailable: "Cannot calculate range without chain crossings.",
    total_range_including_crossings: "Total gear range (including chain crossings):",
    range_limited: "Evaluation: Limited range. Suitable for uniform terrain or specific use.",
    range_moderate: "Evaluation: Moderate range. Good for general use.",
    range_wide: "Evaluation: Wide range. Excellent versatility for different terrains.",

    chainring: "Chainring",
    sprocket: "Sprocket",

    chart_speeds_at: "Speeds at",
    chart_sprocket_teeth: "Sprocket teeth",
    chart_sprocket_order: "Sprockets (from fastest to easiest)",
    chart_speed_axis: "Speed (km/h)",
    chart_development_title: "Development by chainring",
    chart_development_axis: "Development (meters/pedal stroke)",
    chart_ratio_title: "Gear ratio by combination",
    chart_combination_axis: "Combination (chainring/sprocket)",
    chart_ratio_axis: "Gear ratio",
    chart_optimal_ratio: "Optimal range (2.5-5.0)",
    chart_overlap_title: "Overlap between chainrings",
    chart_sprocket_position: "Sprocket position",
    chart_safe: "Safe combination",
    chart_crossing: "Chain crossing",
    chart_power_title: "Speed and power for combination",
    chart_cadence_axis: "Cadence (RPM)",
    chart_power_axis: "Estimated power (relative units)",
    chart_speed_series: "Speed",
    chart_power_series: "Estimated power",
    chart_optimal_cadence: "Optimal cadence range",
};

pub static SPANISH: DomainText = DomainText {
    bike_mtb: "MTB (Montaña)",
    bike_road: "Carretera",
    bike_urban: "Urbana/Paseo",
    bike_custom: "Personalizada",

    crossing_large_large: "Plato grande con piñón grande: aumenta el desgaste y reduce la eficiencia",
    crossing_small_small: "Plato pequeño con piñón pequeño: aumenta el desgaste y reduce la eficiencia",
    crossing_middle_extreme: "Plato mediano con piñón extremo: puede causar desgaste",
    crossing_intermediate_extreme: "Plato intermedio con piñón extremo: puede causar desgaste",

    advice_steep: "Para pendientes pronunciadas, mantén una cadencia alta y usa marchas más ligeras para no forzar las rodillas.",
    advice_uphill: "Mantén una cadencia constante. Si sientes que haces demasiada fuerza, cambia a una marcha más ligera.",
    advice_descent: "En descensos, puedes usar marchas más duras o directamente dejar de pedalear si la velocidad es elevada.",
    advice_flat: "En llano, busca mantener una cadencia cómoda (80-90 RPM) y ajusta la marcha según el viento y tu estado físico.",

    ring_large: "grande",
    ring_middle: "mediano",
    ring_small: "pequeño",

    overlap_needs_two_rings: "Se necesitan al menos dos platos para analizar el solapamiento.",
    overlap_heading: "Análisis de solapamiento entre platos:",
    overlap_without_crossings: "sin cruces de cadena",
    overlap_including_crossings: "incluyendo cruces de cadena",
    overlap_range: "- Rango de solapamiento:",
    overlap_to: "a",
    overlap_percentage: "- Porcentaje de solapamiento:",
    overlap_low: "- Evaluación: Solapamiento bajo. Puede haber 'saltos' grandes al cambiar de plato.",
    overlap_moderate: "- Evaluación: Solapamiento moderado. Configuración equilibrada.",
    overlap_high: "- Evaluación: Solapamiento alto. Hay muchas marchas redundantes.",
    overlap_none: "- No hay solapamiento entre marchas utilizables.",
    total_range_without_crossings: "Rango total de marchas (sin cruces de cadena):",
    total_range_unavailable: "No se puede calcular el rango sin cruces de cadena.",
    total_range_including_crossings: "Rango total de marchas (incluyendo cruces de cadena):",
    range_limited: "Evaluación: Rango limitado. Adecuado para terreno uniforme o uso específico.",
    range_moderate: "Evaluación: Rango moderado. Bueno para uso general.",
    range_wide: "Evaluación: Rango amplio. Excelente versatilidad para diferentes terrenos.",

    chainring: "Plato",
    sprocket: "Piñón",

    chart_speeds_at: "Velocidades a",
    chart_sprocket_teeth: "Dientes del piñón",
    chart_sprocket_order: "Piñones (de más rápido a más fácil)",
    chart_speed_axis: "Velocidad (km/h)",
    chart_development_title: "Desarrollo por plato",
    chart_development_axis: "Desarrollo (metros/pedalada)",
    chart_ratio_title: "Relación de marchas por combinación",
    chart_combination_axis: "Combinación (plato/piñón)",
    chart_ratio_axis: "Relación de marcha",
    chart_optimal_ratio: "Rango óptimo (2.5-5.0)",
    chart_overlap_title: "Solapamiento entre platos",
    chart_sprocket_position: "Posición del piñón",
    chart_safe: "Combinación segura",
    chart_crossing: "Cruce de cadena",
    chart_power_title: "Velocidad y potencia para la combinación",
    chart_cadence_axis: "Cadencia (RPM)",
    chart_power_axis: "Potencia estimada (unidades relativas)",
    chart_speed_series: "Velocidad",
    chart_power_series: "Potencia estimada",
    chart_optimal_cadence: "Rango de cadencia óptimo",
};

#[cfg(test)]
mod tests {
    use crate::lang::Language;

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("en"), Some(Language::English));
        assert_eq!(Language::from_code(" ES "), Some(Language::Spanish));
        assert_eq!(Language::from_code("fr"), None);
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
    }

    #[test]
    fn formatted_text() {
        assert_eq!(Language::English.chainring_label(50), "Chainring 50T");
        assert_eq!(Language::Spanish.chainring_label(34), "Plato 34T");
        assert_eq!(Language::English.overlap_pair_heading(42, 34, true),
                   "Between chainring 42T and 34T (without chain crossings):");
        assert_eq!(Language::Spanish.speeds_at_cadence(80), "Velocidades a 80 RPM");
    }
}
