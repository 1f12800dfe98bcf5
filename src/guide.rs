//! # Trellis guide
//!
//! A walkthrough of how a layout pass works and where each piece lives. For command-line usage,
//! start with the repository `README.md`.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Layoutable`](crate::Layoutable): anything that can be sized and positioned. Containers
//!   hand their children out through it; strategies never see concrete node types.
//! - [`Layout`](crate::Layout): a strategy that sizes a container and positions its children.
//!   [`Precision`](crate::Precision) is the grid, [`Flow`](crate::Flow) wraps lines.
//! - [`PrecisionData`](crate::PrecisionData): what a child tells the grid about itself (spans,
//!   alignment, grab flags, size overrides). It also carries the sizes the grid cached for the
//!   child during the latest pass.
//! - [`Block`](crate::Block): the concrete retained node shipped with the crate.
//! - [`LayoutDocument`](crate::LayoutDocument): a block tree as JSON.
//!
//! ## Hints
//!
//! Size queries take a hint per axis. [`NO_HINT`](crate::NO_HINT) means "unconstrained"; any other
//! value is a width or height the parent has already decided. Content whose height depends on
//! its width (wrapped text) is queried twice by the grid: once unconstrained, then again at the
//! width its column ended up with.
//!
//! ## One grid pass
//!
//! 1. Every child is sized with no hint and gets a [`PrecisionData`](crate::PrecisionData)
//!    (its own, or the default).
//! 2. Children are dropped into the grid in order, left to right, wrapping to new rows. A child
//!    spanning several columns or rows occupies all of them; later children skip occupied cells.
//! 3. Column widths are resolved: single-column children first, then spanning children push
//!    their deficit into the columns they cover. With a width to fill, surplus (or shortage) is
//!    shared between grabbing columns, which never shrink below their floor.
//! 4. Children whose column width differs from what they asked for are re-queried at that width.
//! 5. Row heights are resolved the same way as columns.
//! 6. The grid is aligned inside the container and each child is placed in its cell according
//!    to its own alignment. A child is never larger than its cell.
//!
//! ```
//! use trellis::{Block, FixedSizer, Layoutable, Precision, PrecisionData, Rect, Size};
//!
//! let mut form = Block::new("form")
//!     .with_layout(Precision::new(2).spacing(4.0, 2.0))
//!     .with_child(Block::new("label").with_sizer(FixedSizer::preferred(Size::new(50.0, 20.0))))
//!     .with_child(
//!         Block::new("field")
//!             .with_sizer(FixedSizer::preferred(Size::new(80.0, 20.0)))
//!             .with_data(PrecisionData::new().fill_horizontal()),
//!     );
//! form.resize_to(Size::new(200.0, 20.0));
//!
//! let field = form.find("field").map(|b| b.bounds());
//! assert_eq!(field, Some(Rect::new(54.0, 0.0, 200.0, 20.0)));
//! ```
//!
//! ## Errors
//!
//! The layout engine does not fail. Zero columns or no children simply produce an empty grid,
//! and odd spans are clamped. Errors ([`TrellisError`](crate::TrellisError)) only come from
//! loading and validating documents.
//!
//! ## Logging
//!
//! The crate emits `tracing` spans around each grid and flow pass and traces resolved column
//! widths and row heights at `TRACE` level. Install a subscriber in your binary to see them.
