//! Query-and-presentation engine for the ingredient browser.
//!
//! Data flows leaf to root: the [`Session`] owns the store, runs
//! [`apply_filters`] on every search, slices the result with [`paginate`] and
//! turns the current page into [`DisplayRow`]s with [`project`].
//! [`Vocabularies`] are derived once for the categorical filters.

pub mod filter;
pub mod paginate;
pub mod project;
pub mod session;
pub mod stats;
pub mod tooltip;
pub mod vocabulary;

pub use filter::{FilteredView, apply_filters, matches};
pub use paginate::{DEFAULT_PAGE_SIZE, Page, PageState, paginate, total_pages};
pub use project::{DisplayCell, DisplayRow, project, project_columns};
pub use session::{PageView, Session};
pub use stats::DatasetStats;
pub use tooltip::{Point, Size, TOOLTIP_OFFSET, place_tooltip};
pub use vocabulary::{Vocabularies, VocabularyEntry, build_vocabulary};
