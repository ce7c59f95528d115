use serde::{Deserialize, Serialize};

/// Visual styling of the dial. Loaded as the `theme` section of the dial config.
///
/// Example YAML:
///
/// theme:
///   background_color: [18, 18, 24, 255]
///   track_color: [255, 255, 255, 40]
///   text_color: [255, 255, 255]
///   secondary_text_color: [170, 170, 180]
///   marker_color: [255, 255, 255]
///   marker_border_color: [18, 18, 24]
///   font_size: 14.0
///   arc_width: 0.14
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background_color: [u8; 4],
    pub track_color: [u8; 4],
    pub text_color: [u8; 3],
    pub secondary_text_color: [u8; 3],
    pub marker_color: [u8; 3],
    pub marker_border_color: [u8; 3],
    pub font_size: f32,
    pub arc_width: f32, // fraction of the dial radius
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background_color: [18, 18, 24, 255],
            track_color: [255, 255, 255, 40],
            text_color: [255, 255, 255],
            secondary_text_color: [170, 170, 180],
            marker_color: [255, 255, 255],
            marker_border_color: [18, 18, 24],
            font_size: 14.0,
            arc_width: 0.14,
        }
    }
}

impl Theme {
    // Helper to convert [u8; 3] or [u8; 4] to femtovg::Color
    pub fn color3(rgb: [u8; 3]) -> femtovg::Color {
        femtovg::Color::rgb(rgb[0], rgb[1], rgb[2])
    }
    pub fn color4(rgba: [u8; 4]) -> femtovg::Color {
        femtovg::Color::rgba(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}
