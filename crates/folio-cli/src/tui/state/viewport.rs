//! Mapping between terminal rows and page pixels

/// Pixels represented by one terminal row
pub const ROW_PX: f64 = 20.0;

/// Converts between terminal rows and simulated page pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelScale {
    row_px: f64,
}

impl Default for PixelScale {
    fn default() -> Self {
        Self { row_px: ROW_PX }
    }
}

impl PixelScale {
    pub fn rows_to_px(&self, rows: u16) -> f64 {
        rows as f64 * self.row_px
    }

    /// Whole rows covered by `px`, rounded toward zero
    pub fn px_to_rows(&self, px: f64) -> i64 {
        (px / self.row_px).trunc() as i64
    }

    /// Scroll distance of one mouse wheel notch
    pub fn wheel_step(&self) -> f64 {
        3.0 * self.row_px
    }

    /// Scroll distance of one arrow key press
    pub fn line_step(&self) -> f64 {
        2.0 * self.row_px
    }

    /// Scroll distance of a page key press for a viewport of `viewport_px`
    pub fn page_step(&self, viewport_px: f64) -> f64 {
        (viewport_px * 0.9).max(self.row_px)
    }
}
