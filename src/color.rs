use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Swimmer → Color32
// ---------------------------------------------------------------------------

/// Gives every swimmer of the dataset a stable colour, so the same swimmer
/// looks the same in every chart.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new(swimmers: &[String]) -> Self {
        let mapping = swimmers
            .iter()
            .cloned()
            .zip(generate_palette(swimmers.len()))
            .collect();
        ColorMap { mapping }
    }

    pub fn color_for(&self, swimmer: &str) -> Color32 {
        self.mapping.get(swimmer).copied().unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_swimmer_gets_a_distinct_colour() {
        let swimmers = vec!["Ana".to_string(), "Luis".to_string(), "Mia".to_string()];
        let map = ColorMap::new(&swimmers);
        assert_ne!(map.color_for("Ana"), map.color_for("Luis"));
        assert_ne!(map.color_for("Luis"), map.color_for("Mia"));
        assert_eq!(map.color_for("Nadie"), Color32::GRAY);
        assert!(generate_palette(0).is_empty());
    }
}
