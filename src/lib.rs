//! # NEO Rust Core
//!
//! Data core for a near-Earth-object (NEO) browser built on the NASA NeoWs
//! API. The crate owns everything between a fetched payload and a rendered
//! list: wire models, payload adapters, the client-side filter engine, range
//! derivation for slider bounds, and the injected store holding the applied
//! state.
//!
//! ## Architecture
//!
//! - [`models`]: wire types for the NeoWs feed and by-id payloads, the
//!   simplified `NearEarthObject` entity, and the filter model (a closed sum
//!   type keyed per entity field)
//! - [`services`]: the filter engine (AND-composed text/range/boolean
//!   matching), active-filter extraction, settings equality, min/max range
//!   derivation, and the `NeoStore` state object
//!
//! Fetching is out of scope: callers hand JSON payloads to the adapter and
//! own the store. All computations are synchronous and pure.

pub mod models;

pub mod services;
