pub use kurbo::{Insets, Point, Rect, Size};

/// Hint value meaning "no constraint" on an axis.
pub const NO_HINT: f64 = -1.0;

/// A hint with neither axis constrained. Pass it to size queries when nothing is known yet.
pub const NO_HINT_SIZE: Size = Size::new(NO_HINT, NO_HINT);

/// Returns `true` when `value` carries a real constraint rather than [`NO_HINT`].
#[inline]
pub fn has_hint(value: f64) -> bool {
    value != NO_HINT
}

/// Minimum, preferred and maximum sizes reported by a size query.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Sizes {
    /// Smallest usable size.
    pub min: Size,
    /// Natural size.
    pub pref: Size,
    /// Largest useful size.
    pub max: Size,
}

impl Sizes {
    /// Bundle a min/pref/max triple.
    pub const fn new(min: Size, pref: Size, max: Size) -> Self {
        Self { min, pref, max }
    }
}

/// Inset arithmetic on [`Size`].
pub trait SizeExt {
    /// Grow by the horizontal and vertical totals of `insets`.
    fn add_insets(self, insets: Insets) -> Size;
    /// Shrink by the horizontal and vertical totals of `insets`.
    fn subtract_insets(self, insets: Insets) -> Size;
}

impl SizeExt for Size {
    fn add_insets(self, insets: Insets) -> Size {
        Size::new(
            self.width + insets.x0 + insets.x1,
            self.height + insets.y0 + insets.y1,
        )
    }

    fn subtract_insets(self, insets: Insets) -> Size {
        Size::new(
            self.width - (insets.x0 + insets.x1),
            self.height - (insets.y0 + insets.y1),
        )
    }
}

/// Top-left content origin inside a node with the given insets.
#[inline]
pub fn inset_origin(insets: Insets) -> Point {
    Point::new(insets.x0, insets.y0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
