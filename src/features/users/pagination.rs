//! Client-side paging over the full user list.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    Five,
    Ten,
    TwentyFive,
}

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Five, PageSize::Ten, PageSize::TwentyFive];

    pub const fn rows(self) -> usize {
        match self {
            PageSize::Five => 5,
            PageSize::Ten => 10,
            PageSize::TwentyFive => 25,
        }
    }

    pub fn from_rows(rows: usize) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.rows() == rows)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationWindow {
    page_index: usize,
    page_size: PageSize,
}

impl PaginationWindow {
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Changing the size always returns to the first page.
    pub fn set_page_size(&mut self, size: PageSize) {
        self.page_size = size;
        self.page_index = 0;
    }

    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size.rows()).max(1)
    }

    /// Keeps the index on an existing page after the list shrinks.
    pub fn clamp(&mut self, total: usize) {
        self.page_index = self.page_index.min(self.page_count(total) - 1);
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self, total: usize) -> bool {
        self.page_index + 1 < self.page_count(total)
    }

    pub fn prev(&mut self) {
        self.page_index = self.page_index.saturating_sub(1);
    }

    pub fn next(&mut self, total: usize) {
        if self.has_next(total) {
            self.page_index += 1;
        }
    }

    /// Slice of `items` shown on the current page.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let rows = self.page_size.rows();
        let start = (self.page_index * rows).min(items.len());
        let end = (start + rows).min(items.len());
        &items[start..end]
    }

    /// One-based `first-last of total` label; `0-0 of 0` for an empty list.
    pub fn range_label(&self, total: usize) -> String {
        if total == 0 {
            return "0-0 of 0".to_string();
        }
        let rows = self.page_size.rows();
        let first = (self.page_index * rows).min(total - 1) + 1;
        let last = (first - 1 + rows).min(total);
        format!("{first}-{last} of {total}")
    }
}
