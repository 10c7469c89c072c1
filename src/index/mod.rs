//! Tag index generation.
//!
//! The aggregation-and-pagination pipeline:
//!
//! ```text
//! documents ──> collector (buffer + pass-through)
//!                   │ end of input
//!                   ▼
//!           aggregate_tags ──> sort ──> paginate
//!                   │ per page, strictly in order
//!                   ▼
//!           build_links + build_pagination_links ──> render ──> emit
//! ```
//!
//! `aggregate`, `paginate` and `links` are pure; all sequencing and I/O
//! lives in `collector`.

pub mod aggregate;
pub mod collector;
pub mod links;
pub mod paginate;

pub use aggregate::aggregate_tags;
pub use collector::{CollectError, Collector, IndexOptions};
pub use links::{Pagination, TagEntry, TagLinks, build_links, build_pagination_links};
pub use paginate::{DEFAULT_PER_PAGE, Page, paginate};
