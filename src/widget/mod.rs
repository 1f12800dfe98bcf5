//! Concrete layout nodes and leaf sizers.

pub mod block;
pub mod sizers;

pub use block::{Block, Placement};
pub use sizers::{FixedSizer, ReflowSizer};
