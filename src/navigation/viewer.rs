//! Paginated viewer over a step's content pages.
//!
//! Pages are looked up from the `ContentTable` on every call instead of
//! being cached, so the viewer only stores the step id and a page index.
//! Out-of-range navigation is absorbed as a no-op.

use crate::content::{ContentPage, ContentTable, StepId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContentViewer {
    open: bool,
    step: Option<StepId>,
    page: usize,
    /// Page-local; cleared whenever `page` changes
    samples_visible: bool,
}

impl ContentViewer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open on `step` at the first page, even if already open.
    #[must_use]
    pub fn open(self, step: StepId) -> Self {
        Self {
            open: true,
            step: Some(step),
            page: 0,
            samples_visible: false,
        }
    }

    /// Hide the viewer. Step and page are kept as they were.
    #[must_use]
    pub fn close(self) -> Self {
        Self {
            open: false,
            ..self
        }
    }

    #[must_use]
    pub fn next(self, table: &ContentTable) -> Self {
        if self.page + 1 < self.page_count(table) {
            self.at_page(self.page + 1)
        } else {
            self
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self.page.checked_sub(1) {
            Some(page) => self.at_page(page),
            None => self,
        }
    }

    /// Go to `index` if it is a valid page, otherwise ignore.
    #[must_use]
    pub fn jump_to(self, index: usize, table: &ContentTable) -> Self {
        if index < self.page_count(table) && index != self.page {
            self.at_page(index)
        } else {
            self
        }
    }

    /// Flip sample visibility; no-op unless the current page has samples.
    #[must_use]
    pub fn toggle_samples(self, table: &ContentTable) -> Self {
        match self.current_page(table) {
            Some(page) if page.has_samples() => Self {
                samples_visible: !self.samples_visible,
                ..self
            },
            _ => self,
        }
    }

    fn at_page(self, page: usize) -> Self {
        Self {
            page,
            samples_visible: false,
            ..self
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn step(&self) -> Option<StepId> {
        self.step
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn samples_visible(&self) -> bool {
        self.samples_visible
    }

    /// Pages for the viewer's step; empty before the first `open`
    pub fn pages<'a>(&self, table: &'a ContentTable) -> &'a [ContentPage] {
        match self.step {
            Some(step) => table.pages_for(step),
            None => &[],
        }
    }

    pub fn page_count(&self, table: &ContentTable) -> usize {
        self.pages(table).len()
    }

    pub fn current_page<'a>(&self, table: &'a ContentTable) -> Option<&'a ContentPage> {
        self.pages(table).get(self.page)
    }

    pub fn has_next(&self, table: &ContentTable) -> bool {
        self.page + 1 < self.page_count(table)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 0
    }

    /// Whether anything should be drawn: open, with a page to show.
    pub fn is_visible(&self, table: &ContentTable) -> bool {
        self.open && self.current_page(table).is_some()
    }
}
