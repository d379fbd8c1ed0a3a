//! Service layer: the pure computations behind the list and filter screens.
//!
//! Everything here is a synchronous, single-threaded transformation over
//! in-memory collections; fetching and state sequencing belong to the
//! caller.

pub mod filters;

pub mod ranges;

pub mod store;

pub use filters::{active_filters, apply_filters, filters_equal, settings_equal};
pub use ranges::{initial_range, max_value_of, min_value_of};
pub use store::NeoStore;
