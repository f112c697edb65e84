use serde::{Deserialize, Serialize};

/// Accent colour palettes offered in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorPalette {
    #[default]
    Ocean,
    Forest,
    Sunset,
    Slate,
}

impl ColorPalette {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorPalette::Ocean => "ocean",
            ColorPalette::Forest => "forest",
            ColorPalette::Sunset => "sunset",
            ColorPalette::Slate => "slate",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ColorPalette::Ocean => "Ocean",
            ColorPalette::Forest => "Forest",
            ColorPalette::Sunset => "Sunset",
            ColorPalette::Slate => "Slate",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "forest" => ColorPalette::Forest,
            "sunset" => ColorPalette::Sunset,
            "slate" => ColorPalette::Slate,
            _ => ColorPalette::Ocean,
        }
    }

    /// Primary accent colour (CSS hex).
    pub fn primary(&self) -> &'static str {
        match self {
            ColorPalette::Ocean => "#0ea5e9",
            ColorPalette::Forest => "#16a34a",
            ColorPalette::Sunset => "#f97316",
            ColorPalette::Slate => "#64748b",
        }
    }

    pub fn all() -> [ColorPalette; 4] {
        [
            ColorPalette::Ocean,
            ColorPalette::Forest,
            ColorPalette::Sunset,
            ColorPalette::Slate,
        ]
    }
}

/// UI preferences shared by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_dark")]
    pub dark_mode: bool,
    #[serde(default)]
    pub palette: ColorPalette,
}

fn default_dark() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: default_dark(),
            palette: ColorPalette::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_use_defaults() {
        let s: AppSettings = serde_json::from_str(r#"{"palette":"sunset"}"#).unwrap();
        assert!(s.dark_mode);
        assert_eq!(s.palette, ColorPalette::Sunset);
    }

    #[test]
    fn test_palette_round_names() {
        for p in ColorPalette::all() {
            assert_eq!(ColorPalette::from_str(p.as_str()), p);
        }
        assert_eq!(ColorPalette::from_str("unknown"), ColorPalette::Ocean);
    }
}
