use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Viewport width at which a single-page view widens to a double spread.
    pub wide_breakpoint: f32,
    /// Viewport width below which a double spread collapses to one page.
    pub narrow_breakpoint: f32,
    pub single_page_max_width: f32,
    pub double_page_max_width: f32,
    /// Horizontal space between the two pages of a spread.
    pub page_gutter: f32,
    /// Fixed padding the host subtracts from the viewer region, once.
    pub container_inset: f32,
    /// Estimated width of one terminal cell, used to express the terminal
    /// size in the same units as the breakpoints.
    pub cell_width_px: f32,
    pub start_in_double_mode: bool,
    pub show_key_hints: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            wide_breakpoint: 1920.0,
            narrow_breakpoint: 1024.0,
            single_page_max_width: 800.0,
            double_page_max_width: 600.0,
            page_gutter: 20.0,
            container_inset: 40.0,
            cell_width_px: 8.0,
            start_in_double_mode: false,
            show_key_hints: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.wide_breakpoint, 1920.0);
        assert_eq!(settings.narrow_breakpoint, 1024.0);
        assert_eq!(settings.single_page_max_width, 800.0);
        assert_eq!(settings.double_page_max_width, 600.0);
        assert_eq!(settings.page_gutter, 20.0);
        assert_eq!(settings.container_inset, 40.0);
        assert!(!settings.start_in_double_mode);
        assert!(settings.show_key_hints);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"start_in_double_mode": true}"#).unwrap();
        assert!(settings.start_in_double_mode);
        assert_eq!(settings.wide_breakpoint, 1920.0);
    }

    #[test]
    fn test_full_round_trip_through_json() {
        let settings = Settings {
            wide_breakpoint: 2560.0,
            start_in_double_mode: true,
            ..Settings::default()
        };
        let json = serde_json::to_string(&settings).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, settings);
    }
}
