use std::path::PathBuf;

/// Application settings. The dashboard has no settings file; these are the
/// fixed defaults the UI reads.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// File opened at start-up when it exists.
    pub default_path: PathBuf,
    /// Viewport widths below this are laid out compactly.
    pub compact_breakpoint: f32,
    /// Maximum number of swimmers compared at once.
    pub max_swimmers: usize,
    pub version: &'static str,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_path: PathBuf::from("archivo.csv"),
            compact_breakpoint: 992.0,
            max_swimmers: 4,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl DashboardConfig {
    pub fn density_for(&self, width: f32) -> Density {
        if width < self.compact_breakpoint {
            Density::Compact
        } else {
            Density::Full
        }
    }
}

/// Layout density hint handed to the rendering code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Density {
    Compact,
    #[default]
    Full,
}

impl Density {
    pub fn chart_height(self) -> f32 {
        match self {
            Density::Compact => 400.0,
            Density::Full => 600.0,
        }
    }

    pub fn ranking_height(self) -> f32 {
        match self {
            Density::Compact => 300.0,
            Density::Full => 400.0,
        }
    }

    pub fn table_height(self) -> f32 {
        match self {
            Density::Compact => 300.0,
            Density::Full => 600.0,
        }
    }

    /// Whether swimmer names are shortened in the ranking.
    pub fn abbreviate_names(self) -> bool {
        self == Density::Compact
    }
}
