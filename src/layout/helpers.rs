use crate::foundation::core::{Size, Sizes};
use crate::layout::Sizer;

/// Maximum used by content that has no real upper bound.
///
/// Deliberately far below `f64::MAX` so sums of several maxima stay well behaved. Larger values
/// are fine for content that genuinely needs them.
pub const DEFAULT_MAX: f64 = 10_000.0;

/// A size at least [`DEFAULT_MAX`] on both axes, or `pref` where that is larger.
pub fn default_max_size(pref: Size) -> Size {
    Size::new(DEFAULT_MAX.max(pref.width), DEFAULT_MAX.max(pref.height))
}

/// Sizes of a node that has neither a layout nor a sizer.
pub fn fallback_sizes() -> Sizes {
    Sizes::new(Size::ZERO, Size::ZERO, default_max_size(Size::ZERO))
}

/// Sizes of a node without a layout: whatever its sizer reports, else [`fallback_sizes`].
pub fn leaf_sizes(sizer: Option<&dyn Sizer>, hint: Size) -> Sizes {
    match sizer {
        Some(sizer) => sizer.sizes(hint),
        None => fallback_sizes(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/helpers.rs"]
mod tests;
