//! Board projections

mod filter;

pub use filter::filter_by_assignee;
