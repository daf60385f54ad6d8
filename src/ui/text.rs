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

use gearing::Language;

pub struct ConceptCard {
    pub title: &'static str,
    pub body: &'static str
}

/// Window and widget text for one language
pub struct UiText {
    pub language: Language,
    pub window_title: &'static str,
    pub mode_label: &'static str,
    pub mode_beginner: &'static str,
    pub mode_technical: &'static str,
    pub show_debug: &'static str,
    pub language_label: &'static str,
    pub help_label: &'static str,
    pub help_concepts: &'static str,
    pub help_usage: &'static str,
    pub help_about: &'static str,
    pub close: &'static str,
    pub export_svg: &'static str,
    pub export_title: &'static str,
    pub error_title: &'static str,

    pub tab_intro: &'static str,
    pub tab_bike: &'static str,
    pub tab_visual: &'static str,
    pub tab_recommend: &'static str,
    pub tab_technical: &'static str,

    pub intro_title: &'static str,
    pub intro_text: &'static str,
    pub concepts_heading: &'static str,
    pub concept_cards: [ConceptCard; 4],
    pub intro_start: &'static str,

    pub bike_title: &'static str,
    pub bike_explanation: &'static str,
    pub bike_type_heading: &'static str,
    pub bike_type_prompt: &'static str,
    pub detail_heading: &'static str,
    pub wheel_size_label: &'static str,
    pub cadence_label: &'static str,
    pub cadence_hint: &'static str,
    pub configure_manually: &'static str,
    pub visualize: &'static str,

    pub manual_title: &'static str,
    pub manual_heading: &'static str,
    pub manual_chainrings: &'static str,
    pub manual_sprockets: &'static str,
    pub manual_prompt: &'static str,
    pub manual_chainrings_example: &'static str,
    pub manual_sprockets_example: &'static str,
    pub cancel: &'static str,
    pub save_configuration: &'static str,
    pub saved_title: &'static str,
    pub saved_body: &'static str,
    pub config_error_title: &'static str,
    pub insufficient_title: &'static str,
    pub insufficient_body: &'static str,
    pub invalid_title: &'static str,

    pub visual_table: &'static str,
    pub visual_speed: &'static str,
    pub visual_development: &'static str,
    pub legend_safe: &'static str,
    pub legend_crossing: &'static str,
    pub development_title: &'static str,
    pub development_explanation: &'static str,
    pub development_notes: &'static str,
    pub development_warning: &'static str,
    pub configure_first: &'static str,

    pub recommend_title: &'static str,
    pub route_heading: &'static str,
    pub target_speed_label: &'static str,
    pub slope_label: &'static str,
    pub slope_hint: &'static str,
    pub calculate: &'static str,
    pub result_heading: &'static str,
    pub result_placeholder: &'static str,
    pub estimated_speed: &'static str,
    pub gear_ratio: &'static str,
    pub development_label: &'static str,
    pub metres_per_stroke: &'static str,
    pub crossing_warning: &'static str,
    pub tip: &'static str,

    pub technical_title: &'static str,
    pub technical_explanation: &'static str,
    pub tech_ratio_tab: &'static str,
    pub tech_power_tab: &'static str,
    pub tech_overlap_tab: &'static str,
    pub ratio_heading: &'static str,
    pub ratio_explanation: &'static str,
    pub power_heading: &'static str,
    pub chainring_picker: &'static str,
    pub sprocket_picker: &'static str,
    pub update_chart: &'static str,
    pub power_explanation: &'static str,
    pub overlap_heading: &'static str,
    pub overlap_box: &'static str,

    pub matrix_title: &'static str,
    pub matrix_heading: &'static str,
    pub matrix_corner: &'static str,
    pub matrix_chainrings: &'static str,
    pub matrix_sprockets: &'static str,
    pub explanation_heading: &'static str,
    pub matrix_explanation: &'static str,

    pub concepts_title: &'static str,
    pub concepts_text: &'static str,
    pub usage_title: &'static str,
    pub usage_text: &'static str,
    pub about_title: &'static str,
    pub about_name: &'static str,
    pub about_version: &'static str,
    pub about_text: &'static str
}

impl UiText {
    pub fn for_language(language: Language) -> &'static UiText {
        match language {
            Language::English => &ENGLISH,
            Language::Spanish => &SPANISH
        }
    }

    pub fn table_title(&self, cadence: u32) -> String {
        match self.language {
            Language::English => format!("Estimated speeds (km/h) at {} RPM", cadence),
            Language::Spanish => format!("Velocidades estimadas (km/h) a {} RPM", cadence)
        }
    }

    pub fn table_corner(&self) -> &'static str {
        match self.language {
            Language::English => "Chainring",
            Language::Spanish => "Plato"
        }
    }

    pub fn wheel_note(&self, wheel: &str, circumference: f64) -> String {
        match self.language {
            Language::English => format!("Speeds are calculated with wheel size: {} ({}m circumference)", wheel, circumference),
            Language::Spanish => format!("Las velocidades están calculadas con el tamaño de rueda: {} ({}m de circunferencia)", wheel, circumference)
        }
    }

    pub fn table_warning(&self, hidden: usize, total: usize) -> String {
        match self.language {
            Language::English => format!(
                "Speeds for {} of {} combinations are not shown because they cause 'chain crossing', \
                which increases component wear and reduces efficiency. These combinations are marked with '---'.",
                hidden, total),
            Language::Spanish => format!(
                "No se muestran las velocidades para {} de {} combinaciones porque causan 'cruce de cadena', \
                lo que aumenta el desgaste de los componentes y reduce la eficiencia. \
                Estas combinaciones están marcadas con '---'.",
                hidden, total)
        }
    }

    pub fn recommended_gear(&self, gear: &str) -> String {
        match self.language {
            Language::English => format!("Recommended gear: {}", gear),
            Language::Spanish => format!("Marcha recomendada: {}", gear)
        }
    }

    pub fn error_in(&self, action: &str, reason: &str) -> String {
        match self.language {
            Language::English => format!("Error in {}: {}", action, reason),
            Language::Spanish => format!("Error en {}: {}", action, reason)
        }
    }

    pub fn chart_saved(&self, path: &str) -> String {
        match self.language {
            Language::English => format!("Chart saved to {}", path),
            Language::Spanish => format!("Gráfico guardado en {}", path)
        }
    }
}

static ENGLISH: UiText = UiText {
    language: Language::English,
    window_title: "Ñu-sui: learn how to use your bike gears",
    mode_label: "Mode:",
    mode_beginner: "Beginner",
    mode_technical: "Technical/Sport",
    show_debug: "Show debug",
    language_label: "Language:",
    help_label: "Help:",
    help_concepts: "Basic Concepts",
    help_usage: "How to Use the App",
    help_about: "About",
    close: "Close",
    export_svg: "Export SVG…",
    export_title: "Chart exported",
    error_title: "Error",

    tab_intro: "Introduction",
    tab_bike: "My Bicycle",
    tab_visual: "Visualization",
    tab_recommend: "Which Gear to Use?",
    tab_technical: "Technical Analysis",

    intro_title: "Ñu-sui: Learn how to use your bike gears!",
    intro_text: "PLEASE! If you like this application, any donation is welcome.
This is part of a personal project, non-profit.
You can donate via PayPal: https://paypal.me/gimondragon?country.x=MX&locale.x=es_XC
Code originally made by: Gustavo Mondragón. You can follow me on social media:
- Twitter/X: @GustavMondragon
- Instagram: @gmondragons

Hello! This app will help you understand how to use your bicycle gears.

Learning to use gears properly will allow you to:
• Pedal with less effort
• Maintain a comfortable speed
• Climb hills more easily
• Prevent premature wear on your bicycle

It's like choosing the right gear in a car, but for your bicycle.",
    concepts_heading: "Basic Concepts",
    concept_cards: [
        ConceptCard {
            title: "What are gears?",
            body: "Gears are combinations of 'chainrings' (front) and 'sprockets' (rear) that determine how far your bicycle moves with each pedal stroke."
        },
        ConceptCard {
            title: "Chainrings (front)",
            body: "These are the toothed discs attached to the pedals. The larger ones are for speed on flat terrain, the smaller ones for climbing hills."
        },
        ConceptCard {
            title: "Sprockets (rear)",
            body: "These are the toothed discs on the rear wheel. The smaller ones are for speed, the larger ones for easier pedaling uphill."
        },
        ConceptCard {
            title: "Cadence",
            body: "This is the speed at which you pedal (revolutions per minute). Ideally, maintain between 70-90 RPM for most cyclists."
        }
    ],
    intro_start: "Let's configure my bicycle!",

    bike_title: "Configure your bicycle",
    bike_explanation: "Let's configure your bicycle step by step. If you don't know some data, you can use the default values.",
    bike_type_heading: "Bicycle type",
    bike_type_prompt: "Select the type of bicycle you have:",
    detail_heading: "Detailed configuration",
    wheel_size_label: "Wheel size:",
    cadence_label: "Usual cadence (pedal strokes per minute):",
    cadence_hint: "A cadence of 70-90 RPM is suitable for most cyclists.",
    configure_manually: "Configure manually",
    visualize: "Visualize my bicycle",

    manual_title: "Manual gear configuration",
    manual_heading: "Configure the teeth of chainrings and sprockets",
    manual_chainrings: "Chainrings (front)",
    manual_sprockets: "Sprockets (rear)",
    manual_prompt: "Enter the number of teeth separated by commas:",
    manual_chainrings_example: "Example: 24,34,42 for triple chainring\nor 34,50 for double chainring",
    manual_sprockets_example: "Example: 11,12,14,16,18,21,24,28,32,36\nfor a 10-speed cassette",
    cancel: "Cancel",
    save_configuration: "Save configuration",
    saved_title: "Configuration saved",
    saved_body: "Gear configuration saved successfully",
    config_error_title: "Configuration error",
    insufficient_title: "Insufficient data",
    insufficient_body: "Please select a bicycle type or configure manually.",
    invalid_title: "Invalid configuration",

    visual_table: "Gear table",
    visual_speed: "Speed chart",
    visual_development: "Development",
    legend_safe: "○ = Safe combinations",
    legend_crossing: "✕ = Chain crossing combinations (avoid)",
    development_title: "Gear Development",
    development_explanation: "Development indicates the distance traveled in meters for each complete pedal stroke.",
    development_notes: "• Solid bars represent safe combinations.
• Semi-transparent bars marked with ✕ represent combinations with chain crossing.
• Higher development = greater distance traveled per pedal stroke (more \"hard\" to pedal).
• Lower development = less distance traveled per pedal stroke (more \"light\" to pedal).",
    development_warning: "Combinations marked with ✕ cause 'chain crossing', which increases component wear and reduces efficiency. \
It is recommended to avoid these combinations for prolonged periods.",
    configure_first: "Please configure your bicycle first in the 'My Bicycle' tab",

    recommend_title: "Which gear should I use?",
    route_heading: "What is your route like?",
    target_speed_label: "Desired speed (km/h):",
    slope_label: "Slope (%):",
    slope_hint: "0% = flat terrain, positive values = uphill, negative values = downhill",
    calculate: "Calculate recommended gear",
    result_heading: "Recommendation",
    result_placeholder: "Complete the form and press 'Calculate' to get\na gear recommendation.",
    estimated_speed: "Estimated speed:",
    gear_ratio: "Gear ratio:",
    development_label: "Development:",
    metres_per_stroke: "meters/pedal stroke",
    crossing_warning: "WARNING: This combination crosses the chain. \
No optimal combination was found that does not cross the chain for the specified speed and slope. \
It is recommended to use this gear only briefly and adjust the target speed.",
    tip: "Tip:",

    technical_title: "Technical Analysis",
    technical_explanation: "This tab contains technical analyses for experienced cyclists.",
    tech_ratio_tab: "Gear ratio",
    tech_power_tab: "Cadence vs Power",
    tech_overlap_tab: "Overlap",
    ratio_heading: "Gear ratio analysis",
    ratio_explanation: "The gear ratio is the number of teeth on the chainring divided by the number of teeth on the sprocket. \
A higher value indicates a \"harder\" gear (for speed), while a lower value indicates a \"lighter\" gear (for climbing).

In general:
• Values > 5.0: Very hard gears for descents or speed
• Values 2.5-5.0: Optimal range for normal use
• Values < 2.5: Light gears for climbing

The total range of ratios on your bicycle directly affects its versatility.",
    power_heading: "Relationship between cadence, speed, and power",
    chainring_picker: "Chainring:",
    sprocket_picker: "Sprocket:",
    update_chart: "Update chart",
    power_explanation: "This chart shows the relationship between cadence, speed, and estimated power for a specific chainring/sprocket combination.

The power is an estimate based on a simplified model, considering the aerodynamic resistance that increases exponentially with speed.

Key observations:
• For the same gear, increasing cadence linearly increases speed
• Power required increases exponentially with speed
• The optimal cadence is usually between 80-90 RPM for most cyclists
• At very low cadences (<60 RPM) you strain your joints more, while very high cadences (>100 RPM) are less energy efficient",
    overlap_heading: "Gear overlap analysis",
    overlap_box: "Overlap analysis",

    matrix_title: "Debug: Chain Crossing Matrix",
    matrix_heading: "Chain Crossing Matrix (X = crossing, O = safe)",
    matrix_corner: "Chainring\\Sprocket",
    matrix_chainrings: "Chainrings:",
    matrix_sprockets: "Sprockets:",
    explanation_heading: "Explanation",
    matrix_explanation: "This matrix shows which chainring and sprocket combinations cause 'chain crossing'.

Combinations marked with X should be avoided for prolonged periods because:
- They increase wear on the chain, chainrings, sprockets, and derailleur
- They reduce pedaling efficiency
- They increase the risk of the chain coming off or getting damaged

General rules:
- For large chainring: avoid large sprockets
- For small chainring: avoid small sprockets
- For middle chainring: avoid extreme sprockets",

    concepts_title: "Basic cycling concepts",
    concepts_text: "TRANSMISSION AND GEARS

Chainrings (or crowns): These are the toothed discs attached to the pedals. They determine how much force is transmitted to the chain.
- Large chainrings (more teeth): Higher speed, require more force
- Small chainrings (fewer teeth): Lower speed, easier pedaling

Sprockets (or cassette): Set of toothed discs on the rear wheel.
- Small sprockets (fewer teeth): Higher speed, require more force
- Large sprockets (more teeth): Lower speed, easier pedaling

Gear ratio: Number of teeth on the chainring divided by the number of teeth on the sprocket. Indicates how many turns the wheel makes for each complete revolution of the pedals.

Development: Distance traveled for each complete pedal stroke. It is calculated by multiplying the gear ratio by the wheel circumference.

PEDALING CONCEPTS

Cadence: The speed at which you pedal, measured in revolutions per minute (RPM).
- Low cadence (<70 RPM): Greater effort on each pedal stroke, more tension on joints
- Medium cadence (70-90 RPM): Optimal balance for most cyclists
- High cadence (>90 RPM): Less effort per pedal stroke, higher heart rate

CHAIN CROSSING

Chain crossing occurs when using extreme combinations:
- Large chainring (front) with large sprocket (rear)
- Small chainring (front) with small sprocket (rear)

These combinations cause the chain to work at a pronounced diagonal angle, causing:
- Increased wear on the chain, chainrings, sprockets, and derailleur
- Loss of efficiency (you waste energy when pedaling)
- More noise during pedaling
- Risk of the chain coming off or getting damaged

That's why, in this application, these combinations are marked or filtered.
The golden rule is: use combinations where the chain works as straight as possible.

PROPER USE OF GEARS

Basic principles:
1. Maintain a constant and comfortable cadence by adjusting gears
2. Anticipate terrain changes and shift before you need to
3. Avoid extreme combinations (chain crossing)
4. Shift sequentially, don't skip many gears at once

Specific situations:
- Climbs: Use small chainrings and large sprockets to pedal with less effort
- Descents: Use large chainrings and small sprockets or stop pedaling if speed is high
- Flat terrain: Find a combination that allows you to maintain your ideal cadence",
    usage_title: "How to use this application",
    usage_text: "QUICK USAGE GUIDE

1. CONFIGURING YOUR BICYCLE (Tab \"My Bicycle\")
   - Select the bicycle type most similar to yours
   - Adjust the wheel size accordingly
   - Set your usual cadence (if you're not sure, leave the default value)
   - If you know exactly the configuration of your bicycle, use \"Configure manually\"
   - Press \"Visualize my bicycle\" to continue

2. VISUALIZATION (Tab \"Visualization\")
   - Explore the \"Gear table\" to see what speed you'll reach with each combination
   - Review the \"Speed chart\" to understand how each sprocket affects your speed
   - Observe the \"Development\" to understand the distance traveled per pedal stroke

3. RECOMMENDATIONS (Tab \"Which Gear to Use?\")
   - Set your desired speed and the slope of the terrain
   - Get a personalized recommendation of which gear to use
   - Read the specific tips for your situation

4. TECHNICAL ANALYSIS (Only in technical mode)
   - Explore advanced analyses such as gear ratio, power, and overlap
   - Useful for experienced cyclists who want to optimize their technique

MODE CHANGE

- Beginner Mode: Simplified interface with basic concepts
- Technical/Sport Mode: Access to advanced analyses and technical terms

GENERAL TIPS

- Experiment with different configurations to better understand how gears work
- Use the recommendations tab before going for a ride to plan which gears to use
- Consult the help or basic concepts if any term is unfamiliar to you
- Every chart can be saved as an SVG file with \"Export SVG…\"",
    about_title: "About",
    about_name: "Bicycle Speed Calculator",
    about_version: "Version 1.0",
    about_text: "The term \"Ñu-sui\" means \"cyclist\" in Zapoteco, a native language from Oaxaca, Mexico.
An educational tool for cyclists of all levels.

This application helps you understand and optimize the use of your bicycle gears to improve your pedaling experience.

Developed by Gustavo Mondragón.
For questions and suggestions, email me! gustavms93@gmail.com."
};

static SPANISH: UiText = UiText {
    language: Language::Spanish,
    window_title: "Ñu-sui: aprende a usar las velocidades de tu bici",
    mode_label: "Modo:",
    mode_beginner: "Principiante",
    mode_technical: "Deportivo/Técnico",
    show_debug: "Mostrar debug",
    language_label: "Idioma:",
    help_label: "Ayuda:",
    help_concepts: "Conceptos básicos",
    help_usage: "Cómo usar la app",
    help_about: "Acerca de",
    close: "Cerrar",
    export_svg: "Exportar SVG…",
    export_title: "Gráfico exportado",
    error_title: "Error",

    tab_intro: "Introducción",
    tab_bike: "Mi Bicicleta",
    tab_visual: "Visualización",
    tab_recommend: "¿Qué marcha usar?",
    tab_technical: "Análisis Técnico",

    intro_title: "Ñu-sui: ¡Aprende a usar las marchas de tu bicicleta!",
    intro_text: "¡POR FAVOR! Si te gusta la aplicación, toda donación es bienvenida.
Esto es parte de un proyecto personal, sin fines de lucro.

Puedes donar vía PayPal: https://paypal.me/gimondragon?country.x=MX&locale.x=es_XC
Código hecho originalmente por: Gustavo Mondragón. Puedes seguirme en redes:
- Twitter/X: @GustavMondragon
- Instagram: @gmondragons

¡Hola! Esta app te ayudará a comprender cómo usar las velocidades de tu bicicleta.

Aprender a usar bien las marchas te permitirá:
• Pedalear con menos esfuerzo
• Mantener una velocidad cómoda
• Subir pendientes más fácilmente
• Evitar el desgaste prematuro de tu bicicleta

Es como elegir la marcha correcta en un coche, pero para tu bicicleta.",
    concepts_heading: "Conceptos básicos",
    concept_cards: [
        ConceptCard {
            title: "¿Qué son las marchas?",
            body: "Las marchas son combinaciones de 'platos' (adelante) y 'piñones' (atrás) que determinan cuánto avanza tu bicicleta con cada pedalada."
        },
        ConceptCard {
            title: "Platos (adelante)",
            body: "Son los discos dentados unidos a los pedales. Los más grandes son para ir rápido en terreno plano, los más pequeños para subir cuestas."
        },
        ConceptCard {
            title: "Piñones (atrás)",
            body: "Son los discos dentados en la rueda trasera. Los más pequeños son para velocidad, los más grandes para facilitar el pedaleo en subidas."
        },
        ConceptCard {
            title: "Cadencia",
            body: "Es la velocidad a la que pedaleas (revoluciones por minuto). Lo ideal es mantener entre 70-90 RPM para la mayoría de ciclistas."
        }
    ],
    intro_start: "¡Vamos a configurar mi bicicleta!",

    bike_title: "Configuración de tu bicicleta",
    bike_explanation: "Vamos a configurar tu bicicleta paso a paso. Si no sabes algún dato, puedes usar los valores predeterminados.",
    bike_type_heading: "Tipo de bicicleta",
    bike_type_prompt: "Selecciona el tipo de bicicleta que tienes:",
    detail_heading: "Configuración detallada",
    wheel_size_label: "Tamaño de rueda:",
    cadence_label: "Cadencia habitual (pedaladas por minuto):",
    cadence_hint: "Una cadencia de 70-90 RPM es adecuada para la mayoría de ciclistas.",
    configure_manually: "Configurar manualmente",
    visualize: "Visualizar mi bicicleta",

    manual_title: "Configuración manual de marchas",
    manual_heading: "Configura los dientes de platos y piñones",
    manual_chainrings: "Platos (delanteros)",
    manual_sprockets: "Piñones (traseros)",
    manual_prompt: "Introduce el número de dientes separados por comas:",
    manual_chainrings_example: "Ejemplo: 24,34,42 para triple plato\no 34,50 para doble plato",
    manual_sprockets_example: "Ejemplo: 11,12,14,16,18,21,24,28,32,36\npara un cassette de 10 velocidades",
    cancel: "Cancelar",
    save_configuration: "Guardar configuración",
    saved_title: "Configuración guardada",
    saved_body: "Configuración de marchas guardada correctamente",
    config_error_title: "Error en configuración",
    insufficient_title: "Datos insuficientes",
    insufficient_body: "Por favor, selecciona un tipo de bicicleta o configura manualmente.",
    invalid_title: "Configuración inválida",

    visual_table: "Tabla de marchas",
    visual_speed: "Gráfico de velocidades",
    visual_development: "Desarrollo",
    legend_safe: "○ = Combinaciones seguras",
    legend_crossing: "✕ = Combinaciones con cruce de cadena (evitar)",
    development_title: "Desarrollo de marchas",
    development_explanation: "El desarrollo indica la distancia recorrida en metros por cada pedalada completa.",
    development_notes: "• Las barras sólidas representan combinaciones seguras.
• Las barras semitransparentes marcadas con ✕ representan combinaciones con cruce de cadena.
• Mayor desarrollo = mayor distancia recorrida por pedalada (más \"duro\" de pedalear).
• Menor desarrollo = menor distancia recorrida por pedalada (más \"ligero\" de pedalear).",
    development_warning: "Las combinaciones marcadas con ✕ causan 'cruce de cadena', lo que aumenta el desgaste de los componentes y reduce la eficiencia. \
Se recomienda evitar estas combinaciones durante periodos prolongados.",
    configure_first: "Por favor, configura tu bicicleta primero en la pestaña 'Mi Bicicleta'",

    recommend_title: "¿Qué marcha debo usar?",
    route_heading: "¿Cómo es tu ruta?",
    target_speed_label: "Velocidad deseada (km/h):",
    slope_label: "Pendiente (%):",
    slope_hint: "0% = terreno plano, valores positivos = subida, negativos = bajada",
    calculate: "Calcular marcha recomendada",
    result_heading: "Recomendación",
    result_placeholder: "Completa el formulario y pulsa 'Calcular' para obtener\nuna recomendación de marcha.",
    estimated_speed: "Velocidad estimada:",
    gear_ratio: "Relación de marchas:",
    development_label: "Desarrollo:",
    metres_per_stroke: "metros/pedalada",
    crossing_warning: "ADVERTENCIA: Esta combinación cruza la cadena. \
No se encontró ninguna combinación óptima que no cruce la cadena para la velocidad y pendiente indicadas. \
Se recomienda usar esta marcha solo brevemente y ajustar la velocidad objetivo.",
    tip: "Consejo:",

    technical_title: "Análisis Técnico",
    technical_explanation: "Esta pestaña contiene análisis técnicos para ciclistas experimentados.",
    tech_ratio_tab: "Relación de marchas",
    tech_power_tab: "Cadencia vs Potencia",
    tech_overlap_tab: "Solapamiento",
    ratio_heading: "Análisis de relación de marchas",
    ratio_explanation: "La relación de marchas (gear ratio) es el número de dientes del plato dividido entre los dientes del piñón. \
Un valor mayor indica una marcha más \"dura\" (para velocidad), mientras que un valor menor indica una marcha más \"ligera\" (para subidas).

En general:
• Valores > 5.0: Marchas muy duras para descensos o velocidad
• Valores 2.5-5.0: Rango óptimo para uso normal
• Valores < 2.5: Marchas ligeras para subidas

El rango total de relaciones de tu bicicleta afecta directamente su versatilidad.",
    power_heading: "Relación entre cadencia, velocidad y potencia",
    chainring_picker: "Plato:",
    sprocket_picker: "Piñón:",
    update_chart: "Actualizar gráfico",
    power_explanation: "Este gráfico muestra la relación entre cadencia, velocidad y potencia estimada para una combinación de plato/piñón.

La potencia es una estimación basada en un modelo simplificado, considerando la resistencia aerodinámica que aumenta exponencialmente con la velocidad.

Observaciones clave:
• Para una misma marcha, aumentar la cadencia aumenta linealmente la velocidad
• La potencia necesaria aumenta exponencialmente con la velocidad
• La cadencia óptima suele estar entre 80-90 RPM para la mayoría de ciclistas
• A cadencias muy bajas (<60 RPM) se fuerza más las articulaciones, mientras que cadencias muy altas (>100 RPM) son menos eficientes energéticamente",
    overlap_heading: "Análisis de solapamiento de marchas",
    overlap_box: "Análisis de solapamiento",

    matrix_title: "Debug: Matriz de cruce de cadena",
    matrix_heading: "Matriz de cruce de cadena (X = cruce, O = seguro)",
    matrix_corner: "Plato\\Piñón",
    matrix_chainrings: "Platos:",
    matrix_sprockets: "Piñones:",
    explanation_heading: "Explicación",
    matrix_explanation: "Esta matriz muestra qué combinaciones de plato y piñón causan 'cruce de cadena'.

Las combinaciones marcadas con X deben evitarse durante periodos prolongados porque:
- Aumentan el desgaste de la cadena, platos, piñones y desviador
- Reducen la eficiencia de pedaleo
- Aumentan el riesgo de que la cadena se salga o se dañe

Reglas generales:
- Para plato grande: evitar piñones grandes
- Para plato pequeño: evitar piñones pequeños
- Para plato mediano: evitar los piñones extremos",

    concepts_title: "Conceptos básicos de ciclismo",
    concepts_text: "TRANSMISIÓN Y MARCHAS

Platos (o coronas): Son los discos dentados unidos a los pedales. Determinan cuánta fuerza se transmite a la cadena.
- Platos grandes (más dientes): Mayor velocidad, requieren más fuerza
- Platos pequeños (menos dientes): Menor velocidad, pedaleo más fácil

Piñones (o casete): Conjunto de discos dentados en la rueda trasera.
- Piñones pequeños (menos dientes): Mayor velocidad, requieren más fuerza
- Piñones grandes (más dientes): Menor velocidad, pedaleo más fácil

Relación de marchas: Número de dientes del plato dividido por el número de dientes del piñón. Indica cuántas vueltas da la rueda por cada vuelta completa de los pedales.

Desarrollo: Distancia recorrida por cada pedalada completa. Se calcula multiplicando la relación de marchas por la circunferencia de la rueda.

CONCEPTOS DE PEDALEO

Cadencia: Velocidad a la que se pedalea, medida en revoluciones por minuto (RPM).
- Cadencia baja (<70 RPM): Mayor esfuerzo en cada pedalada, mayor tensión en articulaciones
- Cadencia media (70-90 RPM): Equilibrio óptimo para la mayoría de ciclistas
- Cadencia alta (>90 RPM): Menor esfuerzo por pedalada, mayor frecuencia cardíaca

CRUCE DE CADENA

El cruce de cadena ocurre cuando se utilizan combinaciones extremas:
- Plato grande (delantero) con piñón grande (trasero)
- Plato pequeño (delantero) con piñón pequeño (trasero)

Estas combinaciones provocan que la cadena trabaje en un ángulo diagonal pronunciado, causando:
- Mayor desgaste de la cadena, platos, piñones y desviador
- Pérdida de eficiencia (desperdicias energía al pedalear)
- Mayor ruido durante el pedaleo
- Riesgo de que la cadena se salga o se dañe

Por eso, en esta aplicación, estas combinaciones están marcadas o filtradas.
La regla de oro es: usa combinaciones donde la cadena trabaje lo más recta posible.

USO CORRECTO DE LAS MARCHAS

Principios básicos:
1. Mantén una cadencia constante y cómoda ajustando las marchas
2. Anticipa cambios de terreno y cambia antes de necesitarlo
3. Evita combinaciones extremas (cruce de cadena)
4. Cambia secuencialmente, no saltes muchas marchas de golpe

Situaciones específicas:
- Subidas: Usa platos pequeños y piñones grandes para pedalear con menos esfuerzo
- Bajadas: Usa platos grandes y piñones pequeños o deja de pedalear si la velocidad es alta
- Llano: Busca una combinación que te permita mantener tu cadencia ideal",
    usage_title: "Cómo usar esta aplicación",
    usage_text: "GUÍA DE USO RÁPIDA

1. CONFIGURACIÓN DE TU BICICLETA (Pestaña \"Mi Bicicleta\")
   - Selecciona el tipo de bicicleta más parecido a la tuya
   - Ajusta el tamaño de rueda según corresponda
   - Establece tu cadencia habitual (si no estás seguro, deja el valor predeterminado)
   - Si conoces exactamente la configuración de tu bicicleta, usa \"Configurar manualmente\"
   - Pulsa \"Visualizar mi bicicleta\" para continuar

2. VISUALIZACIÓN (Pestaña \"Visualización\")
   - Explora la \"Tabla de marchas\" para ver qué velocidad alcanzarás con cada combinación
   - Revisa el \"Gráfico de velocidades\" para entender cómo afecta cada piñón a tu velocidad
   - Observa el \"Desarrollo\" para comprender la distancia recorrida por pedalada

3. RECOMENDACIONES (Pestaña \"¿Qué marcha usar?\")
   - Establece tu velocidad deseada y la pendiente del terreno
   - Obtén una recomendación personalizada de qué marcha usar
   - Lee los consejos específicos para tu situación

4. ANÁLISIS TÉCNICO (Solo en modo técnico)
   - Explora análisis avanzados como relación de marchas, potencia y solapamiento
   - Útil para ciclistas experimentados que deseen optimizar su técnica

CAMBIO DE MODO

- Modo Principiante: Interfaz simplificada con conceptos básicos
- Modo Deportivo/Técnico: Acceso a análisis avanzados y términos técnicos

CONSEJOS GENERALES

- Experimenta con diferentes configuraciones para entender mejor cómo funcionan las marchas
- Usa la pestaña de recomendaciones antes de salir a rodar para planificar qué marchas usar
- Consulta la ayuda o los conceptos básicos si algún término no te resulta familiar
- Cada gráfico se puede guardar como archivo SVG con \"Exportar SVG…\"",
    about_title: "Acerca de",
    about_name: "Ñu-sui",
    about_version: "Versión 1.0",
    about_text: "\"Ñu-sui\" es un término en zapoteco que significa \"ciclista\".
Una herramienta educativa para ciclistas de todos los niveles.

Esta aplicación te ayuda a entender y optimizar el uso de las marchas de tu bicicleta para mejorar tu experiencia al pedalear.

Desarrollada por Gustavo Mondragón.
Para más ideas o sugerencias, envíame un correo electrónico a gustavms93@gmail.com."
};

#[cfg(test)]
mod tests {
    use gearing::Language;
    use crate::ui::text::UiText;

    #[test]
    fn table_texts() {
        let english = UiText::for_language(Language::English);
        assert_eq!(english.table_title(80), "Estimated speeds (km/h) at 80 RPM");
        assert_eq!(english.wheel_note("26x2.1", 2.068),
                   "Speeds are calculated with wheel size: 26x2.1 (2.068m circumference)");
        assert!(english.table_warning(8, 21).starts_with("Speeds for 8 of 21 combinations are not shown"));
        let spanish = UiText::for_language(Language::Spanish);
        assert!(spanish.table_warning(8, 21).ends_with("Estas combinaciones están marcadas con '---'."));
        assert_eq!(spanish.recommended_gear("34T / 18T"), "Marcha recomendada: 34T / 18T");
    }

    #[test]
    fn text_matches_language() {
        for language in Language::ALL {
            assert_eq!(UiText::for_language(language).language, language);
        }
    }
}
