//! Page geometry for the A4 inventory table.
//!
//! All measurements are PDF points (1/72 inch), origin bottom-left.

pub const CM: f32 = 72.0 / 2.54;

pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const MARGIN: f32 = 1.5 * CM;

/// Cover, details, and ISBN/date column widths.
pub const COLUMN_WIDTHS: [f32; 3] = [2.8 * CM, 10.5 * CM, 4.2 * CM];
pub const COLUMN_HEADERS: [&str; 3] = ["CAPA", "DETALHES DO LIVRO", "ISBN / DATA"];

pub const COVER_MAX_WIDTH: f32 = 1.8 * CM;
pub const COVER_MAX_HEIGHT: f32 = 2.5 * CM;

pub const CELL_PADDING: f32 = 4.0;
pub const HEADER_ROW_HEIGHT: f32 = 20.0;
pub const ROW_HEIGHT: f32 = COVER_MAX_HEIGHT + 2.0 * CELL_PADDING;

pub const TITLE_SIZE: f32 = 16.0;
pub const TITLE_LINE: f32 = 24.0;
pub const SUBTITLE_SIZE: f32 = 8.0;
pub const SUBTITLE_LINE: f32 = 14.0;
pub const HEADING_SPACER: f32 = 12.0;

pub const BODY_SIZE: f32 = 10.0;
pub const BODY_LINE: f32 = 12.0;
pub const TITLE_MAX_LINES: usize = 2;

/// Left edge of the table, centered on the page.
pub fn table_left() -> f32 {
    let table_width: f32 = COLUMN_WIDTHS.iter().sum();
    (PAGE_WIDTH - table_width) / 2.0
}

/// Vertical space taken by the title block on the first page.
pub fn heading_height(has_subtitle: bool) -> f32 {
    let subtitle = if has_subtitle { SUBTITLE_LINE } else { 0.0 };
    TITLE_LINE + subtitle + HEADING_SPACER
}

fn rows_fitting(available: f32) -> usize {
    ((available - HEADER_ROW_HEIGHT) / ROW_HEIGHT).floor().max(1.0) as usize
}

/// Number of data rows on each page for `rows` books.
///
/// Always returns at least one page; an empty report is a single page
/// holding only the header row.
pub fn plan_pages(rows: usize, has_subtitle: bool) -> Vec<usize> {
    let body = PAGE_HEIGHT - 2.0 * MARGIN;
    let first = rows_fitting(body - heading_height(has_subtitle));
    let rest = rows_fitting(body);

    let mut pages = vec![rows.min(first)];
    let mut remaining = rows.saturating_sub(first);
    while remaining > 0 {
        let n = remaining.min(rest);
        pages.push(n);
        remaining -= n;
    }
    pages
}
