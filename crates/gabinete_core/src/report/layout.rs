//! Page geometry and break arithmetic for history reports.
//!
//! # Responsibility
//! - Hold the fixed US-Letter layout constants.
//! - Track the vertical cursor and decide when a new page starts.
//!
//! # Invariants
//! - The break check happens before a record is drawn: a record is never
//!   split across pages.
//! - Every record consumes exactly one [`RECORD_BLOCK_PT`] block.

/// US Letter width in points.
pub const PAGE_WIDTH_PT: f64 = 612.0;
/// US Letter height in points.
pub const PAGE_HEIGHT_PT: f64 = 792.0;
/// Font size for every text line.
pub const FONT_SIZE: f64 = 10.0;
/// Left margin for all text.
pub const LEFT_MARGIN_PT: f64 = 100.0;
/// Baseline of the report title on the first page.
pub const TITLE_Y_PT: f64 = 750.0;
/// Baseline of the separator line under the title.
pub const SEPARATOR_Y_PT: f64 = 735.0;
/// Baseline of the first record block on the first page.
pub const FIRST_RECORD_Y_PT: f64 = 720.0;
/// Baseline the cursor resets to on every continuation page.
pub const PAGE_RESET_Y_PT: f64 = 750.0;
/// Records may not start below this line.
pub const BOTTOM_MARGIN_PT: f64 = 50.0;
/// Vertical distance between consecutive field lines.
pub const LINE_HEIGHT_PT: f64 = 15.0;
/// Field lines drawn per record.
pub const RECORD_LINES: usize = 10;
/// Vertical space one record block consumes.
pub const RECORD_BLOCK_PT: f64 = LINE_HEIGHT_PT * RECORD_LINES as f64;

/// Running vertical cursor over the printable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageCursor {
    y: f64,
    page: usize,
}

impl PageCursor {
    /// Cursor positioned under the first-page header.
    pub fn new() -> Self {
        Self {
            y: FIRST_RECORD_Y_PT,
            page: 1,
        }
    }

    /// True when the next record block would start below the bottom
    /// margin and a page break is required first.
    pub fn needs_break(&self) -> bool {
        self.y < BOTTOM_MARGIN_PT
    }

    /// Moves to a fresh continuation page.
    pub fn start_new_page(&mut self) {
        self.page += 1;
        self.y = PAGE_RESET_Y_PT;
    }

    /// Consumes one record block.
    pub fn advance_record(&mut self) {
        self.y -= RECORD_BLOCK_PT;
    }

    /// Baseline for the given field line (0-based) of the current record.
    pub fn line_y(&self, line: usize) -> f64 {
        self.y - LINE_HEIGHT_PT * line as f64
    }

    /// 1-based page the cursor currently sits on.
    pub fn page(&self) -> usize {
        self.page
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{FIRST_RECORD_Y_PT, PageCursor, RECORD_BLOCK_PT};

    fn pages_for(record_count: usize) -> usize {
        let mut cursor = PageCursor::new();
        for _ in 0..record_count {
            if cursor.needs_break() {
                cursor.start_new_page();
            }
            cursor.advance_record();
        }
        cursor.page()
    }

    #[test]
    fn block_height_is_150pt() {
        assert_eq!(RECORD_BLOCK_PT, 150.0);
    }

    #[test]
    fn no_records_stay_on_one_page() {
        assert_eq!(pages_for(0), 1);
    }

    #[test]
    fn ten_records_break_exactly_once() {
        // 720, 570, 420, 270, 120 fit on page one; the sixth record would
        // start at -30 and forces the break.
        assert_eq!(pages_for(5), 1);
        assert_eq!(pages_for(10), 2);
    }

    #[test]
    fn line_positions_step_down_by_leading() {
        let cursor = PageCursor::new();
        assert_eq!(cursor.line_y(0), FIRST_RECORD_Y_PT);
        assert_eq!(cursor.line_y(1), FIRST_RECORD_Y_PT - 15.0);
        assert_eq!(cursor.line_y(9), FIRST_RECORD_Y_PT - 135.0);
    }
}
