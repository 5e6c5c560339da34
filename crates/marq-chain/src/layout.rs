//! Scroll layout arithmetic
//!
//! Converts the display driver's column geometry into the character counts
//! the chunking algorithm works in. Computed once per chunking call; the
//! driver may switch fonts between calls, so layouts are not cached.

use marq_core::{DisplayMetrics, MarqError, MarqResult};

/// Character-count geometry derived from a [`DisplayMetrics`] triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLayout {
    /// Characters visible on screen at once
    pub screen_chars: usize,
    /// New characters the scroll buffer can fully scroll through before refill
    pub max_fully_scroll_chars: usize,
    /// Total characters one segment may hold: the scrollable portion plus the
    /// screenful still visible as the scroll completes
    pub max_shown_chars: usize,
}

impl ScrollLayout {
    /// Derive a layout, rejecting geometry the scroll buffer cannot work with.
    ///
    /// A zero glyph width or a buffer smaller than one glyph has no usable
    /// character geometry; both are rejected with [`MarqError::Layout`].
    pub fn new(metrics: &DisplayMetrics) -> MarqResult<Self> {
        if metrics.glyph_width == 0 {
            return Err(MarqError::Layout("glyph width is zero".into()));
        }
        if metrics.buffer_capacity_columns < metrics.glyph_width {
            return Err(MarqError::Layout(format!(
                "scroll buffer of {} columns cannot hold a {}-column glyph",
                metrics.buffer_capacity_columns, metrics.glyph_width
            )));
        }

        let screen_chars = (metrics.viewport_columns / metrics.glyph_width) as usize;
        let max_fully_scroll_chars =
            (metrics.buffer_capacity_columns / metrics.glyph_width) as usize;

        Ok(Self {
            screen_chars,
            max_fully_scroll_chars,
            max_shown_chars: max_fully_scroll_chars + screen_chars,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_character_counts() {
        let metrics = DisplayMetrics::new(48, 100, 4);
        let layout = ScrollLayout::new(&metrics).unwrap();
        assert_eq!(layout.screen_chars, 12);
        assert_eq!(layout.max_fully_scroll_chars, 25);
        assert_eq!(layout.max_shown_chars, 37);
    }

    #[test]
    fn truncates_partial_glyphs() {
        // 52 columns fit ten full 5-column glyphs, the remainder is unusable
        let metrics = DisplayMetrics::new(52, 53, 5);
        let layout = ScrollLayout::new(&metrics).unwrap();
        assert_eq!(layout.screen_chars, 10);
        assert_eq!(layout.max_fully_scroll_chars, 10);
    }

    #[test]
    fn viewport_narrower_than_glyph_is_allowed() {
        // Degenerate but well-defined: nothing stays visible across hand-off
        let metrics = DisplayMetrics::new(3, 96, 4);
        let layout = ScrollLayout::new(&metrics).unwrap();
        assert_eq!(layout.screen_chars, 0);
        assert_eq!(layout.max_shown_chars, layout.max_fully_scroll_chars);
    }

    #[test]
    fn rejects_zero_glyph_width() {
        let err = ScrollLayout::new(&DisplayMetrics::new(12, 96, 0)).unwrap_err();
        assert!(matches!(err, MarqError::Layout(_)));
    }

    #[test]
    fn rejects_buffer_smaller_than_glyph() {
        let err = ScrollLayout::new(&DisplayMetrics::new(12, 3, 4)).unwrap_err();
        assert!(matches!(err, MarqError::Layout(_)));
    }
}
