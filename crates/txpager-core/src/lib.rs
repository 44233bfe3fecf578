//! Pagination and page-stability engine for transaction lists
//!
//! Records are sorted into a canonical order, cut into fixed-size pages and
//! tracked by a [`PageCoordinator`] that keeps one session's current page
//! valid while the collection is replaced by refreshes.

pub mod coordinator;
pub mod error;
pub mod locator;
pub mod pagination;
pub mod record;
pub mod sort;
pub mod source;

pub use coordinator::{PageCoordinator, RefreshOutcome};
pub use error::{CoreError, CoreResult, DefaultErrorLogger, ErrorCode, ErrorContext, ErrorDetails, ErrorLogger, ErrorSeverity};
pub use locator::{locate, Matcher};
pub use pagination::{paginate, Page, Pagination, DEFAULT_ITEMS_PER_PAGE};
pub use record::{Identified, Record, RecordDraft, Timestamped};
pub use sort::{direction_or_default, parse_direction, sort_by_timestamp};
pub use source::{MemoryRecordSource, RecordSource};
pub use txpager_config::SortDirection;
