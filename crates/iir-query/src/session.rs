//! Session controller.
//!
//! A [`Session`] owns the store and the only mutable browsing state: the
//! current criteria, the filtered view and the page. Each action replaces
//! that state wholesale and returns the [`PageView`] the renderer should
//! draw next.

use serde::Serialize;
use tracing::debug;

use iir_model::{DatasetStore, FilterCriteria};

use crate::filter::{FilteredView, apply_filters};
use crate::paginate::PageState;
use crate::project::{DisplayRow, project};
use crate::vocabulary::Vocabularies;

/// Everything a renderer needs for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// Records in the filtered view, across all pages.
    pub total_records: usize,
    pub page: usize,
    pub total_pages: usize,
    pub page_size: usize,
    /// 1-based position of the first row on this page; 0 when empty.
    pub first_item: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub rows: Vec<DisplayRow>,
}

impl PageView {
    /// `共 N 条记录`
    pub fn results_summary(&self) -> String {
        format!("共 {} 条记录", self.total_records)
    }

    /// `第 P 页，共 T 页`
    pub fn page_summary(&self) -> String {
        format!("第 {} 页，共 {} 页", self.page, self.total_pages)
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    store: DatasetStore,
    vocabularies: Vocabularies,
    criteria: FilterCriteria,
    view: FilteredView,
    page: PageState,
}

impl Session {
    /// Start a session showing every record on page 1.
    pub fn new(store: DatasetStore, page_size: usize) -> Self {
        let vocabularies = Vocabularies::build(store.records());
        let view = FilteredView::all(store.len());
        debug!(
            records = store.len(),
            routes = vocabularies.routes.len(),
            dosage_forms = vocabularies.dosage_forms.len(),
            "session started"
        );
        Self {
            store,
            vocabularies,
            criteria: FilterCriteria::default(),
            view,
            page: PageState::new(page_size),
        }
    }

    pub fn store(&self) -> &DatasetStore {
        &self.store
    }

    pub fn vocabularies(&self) -> &Vocabularies {
        &self.vocabularies
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn view(&self) -> &FilteredView {
        &self.view
    }

    pub fn page_state(&self) -> PageState {
        self.page
    }

    /// Filter with `criteria` and go back to page 1.
    pub fn search(&mut self, criteria: FilterCriteria) -> PageView {
        self.view = apply_filters(self.store.records(), &criteria);
        self.criteria = criteria;
        self.page = self.page.first();
        debug!(
            matched = self.view.len(),
            active_criteria = self.criteria.active_count(),
            "search applied"
        );
        self.current_page()
    }

    /// Clear every criterion and go back to page 1.
    pub fn reset(&mut self) -> PageView {
        self.criteria = FilterCriteria::default();
        self.view = FilteredView::all(self.store.len());
        self.page = self.page.first();
        debug!(records = self.view.len(), "search reset");
        self.current_page()
    }

    /// Move `delta` pages. Returns `None`, leaving the state untouched, when
    /// the target page is out of range.
    pub fn change_page(&mut self, delta: isize) -> Option<PageView> {
        let Some(next) = self.page.step(delta, self.view.len()) else {
            debug!(page = self.page.page(), delta, "page change ignored");
            return None;
        };
        self.page = next;
        Some(self.current_page())
    }

    /// Jump straight to `page`. Pages past either end land on the nearest
    /// existing page.
    pub fn go_to_page(&mut self, page: usize) -> PageView {
        self.page = self.page.at(page, self.view.len());
        debug!(requested = page, page = self.page.page(), "page jump");
        self.current_page()
    }

    /// Project the current page.
    pub fn current_page(&self) -> PageView {
        let page = self.page.slice(self.view.indices());
        let records = self.store.records();
        let mapping = self.store.field_mapping();
        let rows = page
            .items
            .iter()
            .filter_map(|&idx| records.get(idx))
            .map(|record| project(record, mapping))
            .collect::<Vec<_>>();
        let first_item = if rows.is_empty() {
            0
        } else {
            (page.page - 1) * self.page.page_size() + 1
        };
        PageView {
            total_records: page.total_items,
            page: page.page,
            total_pages: page.total_pages,
            page_size: self.page.page_size(),
            first_item,
            has_previous: page.page > 1,
            has_next: page.page < page.total_pages,
            rows,
        }
    }
}
