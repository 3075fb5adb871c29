//! State engines behind the DocHub portal UI.
//!
//! Two engines share one design: a mutable set as the single source of
//! truth, with everything else derived per query.
//!
//! - [`SelectionEngine`]: tri-state selection over the two-level
//!   organization tree, plus live text filtering of the tree.
//! - [`TagEngine`]: boolean tags (starred, visited) keyed by stable
//!   document identity, independent of listing order or active tab.
//!
//! Both are synchronous and single-owner; hosts embed them in their view
//! state and query them on every render.

pub mod selection;
pub mod tags;

pub use selection::{DepartmentView, SelectionEngine, SelectionStatus};
pub use tags::TagEngine;
