use serde::{Deserialize, Serialize};

/// Display geometry as reported by the display driver.
///
/// All three values are in columns (pixel columns for a dot-matrix panel).
/// They are read once per chunking call; the driver owns the real hardware
/// state and may change fonts between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMetrics {
    /// On-screen width: how many columns the panel shows at once
    pub viewport_columns: u32,
    /// Scroll-animation buffer capacity in columns
    pub buffer_capacity_columns: u32,
    /// Width of one glyph in columns for the selected font
    pub glyph_width: u32,
}

impl DisplayMetrics {
    pub fn new(viewport_columns: u32, buffer_capacity_columns: u32, glyph_width: u32) -> Self {
        Self {
            viewport_columns,
            buffer_capacity_columns,
            glyph_width,
        }
    }
}
