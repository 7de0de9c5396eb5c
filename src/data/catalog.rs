//! Static catalogue of parameter codes: readable names and chart categories.

/// Code of the total race time, the only parameter used for ranking.
pub const TOTAL_TIME_CODE: &str = "T TOTAL";

/// (code, display name) for every known parameter.
const DISPLAY_NAMES: &[(&str, &str)] = &[
    ("T15 (1)", "Tiempo 15m (1)"),
    ("T25 (1)", "Tiempo 25m (1)"),
    ("T15 (2)", "Tiempo 15m (2)"),
    ("T25 (2)", "Tiempo 25m (2)"),
    ("T TOTAL", "Tiempo Total"),
    ("# de BRZ 1", "Numero de Brazadas (1)"),
    ("# de BRZ 2", "Numero de Brazadas (2)"),
    ("BRZ TOTAL", "Total de Brazadas"),
    ("DIST x BRZ", "Distancia por Brazada"),
    ("V1", "Velocidad (1)"),
    ("V2", "Velocidad (2)"),
    ("V promedio", "Velocidad Promedio"),
    ("F1", "Flechas (1)"),
    ("F2", "Flechas (2)"),
    ("F promedio", "Promedio Metros en Flecha"),
    ("DIST sin F", "Distancia sin Flecha"),
];

/// Human-readable name of a parameter code; unknown codes are returned as-is.
pub fn display_name(code: &str) -> &str {
    DISPLAY_NAMES
        .iter()
        .find(|(c, _)| *c == code)
        .map_or(code, |&(_, name)| name)
}

/// Thematic group a parameter is charted under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Time,
    StrokeCount,
    Speed,
    Streamline,
}

impl Category {
    /// Categories in the order their chart sections are shown.
    pub const ALL: [Category; 4] = [
        Category::Time,
        Category::StrokeCount,
        Category::Speed,
        Category::Streamline,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Category::Time => "Tiempo",
            Category::StrokeCount => "Brazadas",
            Category::Speed => "Velocidad",
            Category::Streamline => "Flechas",
        }
    }

    /// Member codes, in chart order.
    pub fn codes(self) -> &'static [&'static str] {
        match self {
            Category::Time => &["T15 (1)", "T25 (1)", "T15 (2)", "T25 (2)", "T TOTAL"],
            Category::StrokeCount => &["# de BRZ 1", "# de BRZ 2", "BRZ TOTAL", "DIST x BRZ"],
            Category::Speed => &["V1", "V2", "V promedio"],
            Category::Streamline => &["F1", "F2", "F promedio", "DIST sin F"],
        }
    }
}

/// Category of a parameter code, if it belongs to one.
pub fn category(code: &str) -> Option<Category> {
    Category::ALL
        .into_iter()
        .find(|cat| cat.codes().contains(&code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_has_display_name() {
        assert_eq!(display_name("T TOTAL"), "Tiempo Total");
        assert_eq!(display_name("# de BRZ 1"), "Numero de Brazadas (1)");
    }

    #[test]
    fn unknown_code_falls_back_to_itself() {
        assert_eq!(display_name("XYZ"), "XYZ");
        assert_eq!(category("XYZ"), None);
    }

    #[test]
    fn categories_cover_every_named_code_once() {
        for (code, _) in DISPLAY_NAMES {
            let owners = Category::ALL
                .iter()
                .filter(|cat| cat.codes().contains(code))
                .count();
            assert_eq!(owners, 1, "{code}");
        }
        assert_eq!(category(TOTAL_TIME_CODE), Some(Category::Time));
        assert_eq!(category("DIST sin F"), Some(Category::Streamline));
    }
}
