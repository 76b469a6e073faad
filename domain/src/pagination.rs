//! Page slicing of the query result.

use shared::PageSize;
use std::ops::Range;

/// Visible slice of the filtered rows for the clamped current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page after clamping into `[1, max(1, total_pages)]`
    pub page: usize,
    /// Number of pages; zero when there are no rows to page over
    pub total_pages: usize,
    pub total_items: usize,
    pub start: usize,
    pub end: usize,
}

impl PageWindow {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Page count as displayed, at least 1
    pub fn display_total_pages(&self) -> usize {
        self.total_pages.max(1)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Computes the window for `requested_page` over `total_items` rows
pub fn paginate(total_items: usize, requested_page: usize, page_size: PageSize) -> PageWindow {
    match page_size {
        PageSize::All => PageWindow {
            page: 1,
            total_pages: 1,
            total_items,
            start: 0,
            end: total_items,
        },
        PageSize::Limited(size) => {
            let size = size.max(1);
            let total_pages = total_items.div_ceil(size);
            let page = requested_page.clamp(1, total_pages.max(1));
            let start = ((page - 1) * size).min(total_items);
            let end = (start + size).min(total_items);
            PageWindow {
                page,
                total_pages,
                total_items,
                start,
                end,
            }
        }
    }
}
