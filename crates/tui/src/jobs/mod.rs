//! Jobs list view model: query state, facets, filtering, and empty states.
//!
//! Everything here is synchronous and free of terminal or network concerns,
//! so the app state machine and tests drive it directly.

pub mod facets;
pub mod list_state;
pub mod query;
pub mod view;

pub use facets::{FacetKind, FacetOption, FacetPanel};
pub use list_state::{EmptyState, ErrorAction, ErrorPanel, JobsListState};
pub use query::JobsQuery;
pub use view::{JobListView, JobRow};
