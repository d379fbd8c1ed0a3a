pub mod neo;
pub mod neo_adapter;
pub mod raw;

pub use neo::*;
pub use neo_adapter::*;
pub use raw::*;
