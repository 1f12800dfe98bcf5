//! Trellis is a constraint-based layout core for retained-mode GUI toolkits.
//!
//! The centerpiece is [`Precision`], a grid layout where each child chooses its span, alignment,
//! whether it grabs surplus space, and optional size overrides through [`PrecisionData`]. A
//! simpler line-wrapping [`Flow`] layout sits beside it.
//!
//! # Layers
//!
//! 1. **Contract**: [`Layoutable`] is all a strategy needs from a node; [`Layout`] is a strategy.
//! 2. **Strategies**: [`Precision`] and [`Flow`], selected per container through [`LayoutKind`].
//! 3. **Nodes**: [`Block`] is a ready-made retained node with [`FixedSizer`] and [`ReflowSizer`]
//!    leaves.
//! 4. **Documents**: [`LayoutDocument`] describes a block tree as JSON for tools and tests.
//!
//! Layout is single-threaded and synchronous. Containers lay themselves out and then recurse
//! into their children; nothing is shared between passes except the [`PrecisionData`] cache each
//! child carries.
//!
//! See [`crate::guide`] for a walkthrough of one grid pass.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod layout;
mod scene;
mod widget;

/// Standalone walkthrough of the layout model.
pub mod guide;

pub use foundation::core::{
    Insets, NO_HINT, NO_HINT_SIZE, Point, Rect, Size, SizeExt, Sizes, has_hint, inset_origin,
};
pub use foundation::error::{TrellisError, TrellisResult};
pub use layout::helpers::{DEFAULT_MAX, default_max_size, fallback_sizes, leaf_sizes};
pub use layout::precision::{GridMetrics, Precision};
pub use layout::{Alignment, Flow, Layout, LayoutKind, Layoutable, PrecisionData, Sizer};
pub use scene::{ContentSpec, Edges, LayoutDocument, NodeSpec};
pub use widget::{Block, FixedSizer, Placement, ReflowSizer};
