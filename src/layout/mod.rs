//! Layout strategies and the capability contract they consume.
//!
//! A container asks its [`LayoutKind`] for sizes and child placement; the strategy in turn talks
//! to children only through [`Layoutable`].

pub mod data;
pub mod flow;
pub mod helpers;
pub mod precision;

use crate::foundation::core::{Insets, Rect, Size, Sizes};

pub use data::PrecisionData;
pub use flow::Flow;
pub use precision::Precision;

/// How an item is placed within the space it has been given on one axis.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Left or top.
    #[default]
    Beginning,
    /// Centered.
    Middle,
    /// Right or bottom.
    End,
    /// Stretched to the full space.
    Fill,
}

/// Contract for anything that participates in layout.
pub trait Layoutable {
    /// Minimum, preferred and maximum sizes. Each hint axis is either [`NO_HINT`] or a value
    /// already decided for that axis.
    ///
    /// [`NO_HINT`]: crate::NO_HINT
    fn compute_sizes(&mut self, hint: Size) -> Sizes;

    /// Direct children, in layout order.
    fn layout_children(&mut self) -> Vec<&mut dyn Layoutable>;

    /// Grid layout data attached to this node, if any.
    fn layout_data(&self) -> Option<&PrecisionData>;

    /// Attach grid layout data to this node, replacing any previous value.
    fn set_layout_data(&mut self, data: PrecisionData);

    /// Location and size, relative to the parent.
    fn bounds(&self) -> Rect;

    /// Move and resize.
    fn set_bounds(&mut self, bounds: Rect);

    /// Margins reserved inside the bounds (for example by a border).
    fn insets(&self) -> Insets;
}

/// Size provider for leaf content that has no layout of its own.
pub trait Sizer: std::fmt::Debug {
    /// Minimum, preferred and maximum sizes for the given hint.
    fn sizes(&self, hint: Size) -> Sizes;
}

/// A layout strategy.
pub trait Layout {
    /// Minimum, preferred and maximum sizes of `target`, insets included.
    fn compute_sizes(&self, target: &mut dyn Layoutable, hint: Size) -> Sizes;

    /// Position the children of `target` within its current bounds.
    fn layout(&self, target: &mut dyn Layoutable);
}

/// The layout strategy held by a container.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// No layout: sizes come from the node's sizer and children are left where they are.
    #[default]
    None,
    /// Line-wrapping layout.
    Flow(Flow),
    /// Grid layout.
    Precision(Precision),
}

impl LayoutKind {
    /// `true` unless this is [`LayoutKind::None`].
    pub fn is_some(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// The active strategy, if any.
    pub fn strategy(&self) -> Option<&dyn Layout> {
        match self {
            Self::None => None,
            Self::Flow(flow) => Some(flow),
            Self::Precision(precision) => Some(precision),
        }
    }
}

impl From<Flow> for LayoutKind {
    fn from(value: Flow) -> Self {
        Self::Flow(value)
    }
}

impl From<Precision> for LayoutKind {
    fn from(value: Precision) -> Self {
        Self::Precision(value)
    }
}
