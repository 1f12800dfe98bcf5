use crate::foundation::core::{NO_HINT_SIZE, Size, has_hint};
use crate::layout::{Alignment, Layoutable};

/// Controls how one child is placed by the [`Precision`](crate::Precision) layout.
///
/// The public fields are configuration. The cache is filled in by the layout on every pass and is
/// never serialized.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PrecisionData {
    /// Placement within the cell horizontally.
    pub horizontal_alignment: Alignment,
    /// Placement within the cell vertically.
    pub vertical_alignment: Alignment,
    /// Explicit size override; [`NO_HINT`](crate::NO_HINT) per axis when unset.
    pub size_hint: Size,
    /// Columns covered. Clamped to `[1, columns]` when used.
    pub horizontal_span: usize,
    /// Rows covered. Clamped to at least 1 when used.
    pub vertical_span: usize,
    /// Explicit size floor; [`NO_HINT`](crate::NO_HINT) per axis when unset.
    pub min_size: Size,
    /// Eligible for surplus width.
    pub horizontal_grab: bool,
    /// Eligible for surplus height.
    pub vertical_grab: bool,
    #[serde(skip)]
    pub(crate) cache_size: Size,
    #[serde(skip)]
    pub(crate) cache_min_width: f64,
}

impl Default for PrecisionData {
    fn default() -> Self {
        Self {
            horizontal_alignment: Alignment::Beginning,
            vertical_alignment: Alignment::Middle,
            size_hint: NO_HINT_SIZE,
            horizontal_span: 1,
            vertical_span: 1,
            min_size: NO_HINT_SIZE,
            horizontal_grab: false,
            vertical_grab: false,
            cache_size: Size::ZERO,
            cache_min_width: 0.0,
        }
    }
}

impl PrecisionData {
    /// Defaults: Beginning/Middle alignment, spans of 1, no hints, no grab.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both alignments.
    pub fn align(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    /// Set both spans.
    pub fn span(mut self, horizontal: usize, vertical: usize) -> Self {
        self.horizontal_span = horizontal;
        self.vertical_span = vertical;
        self
    }

    /// Set both grab flags.
    pub fn grab(mut self, horizontal: bool, vertical: bool) -> Self {
        self.horizontal_grab = horizontal;
        self.vertical_grab = vertical;
        self
    }

    /// Fill the cell horizontally and take any surplus width.
    pub fn fill_horizontal(mut self) -> Self {
        self.horizontal_alignment = Alignment::Fill;
        self.horizontal_grab = true;
        self
    }

    /// Fill the cell vertically and take any surplus height.
    pub fn fill_vertical(mut self) -> Self {
        self.vertical_alignment = Alignment::Fill;
        self.vertical_grab = true;
        self
    }

    /// Set the size hint.
    pub fn hint(mut self, size: Size) -> Self {
        self.size_hint = size;
        self
    }

    /// Set the width hint only.
    pub fn width_hint(mut self, width: f64) -> Self {
        self.size_hint.width = width;
        self
    }

    /// Set the height hint only.
    pub fn height_hint(mut self, height: f64) -> Self {
        self.size_hint.height = height;
        self
    }

    /// Set the minimum size.
    pub fn min(mut self, size: Size) -> Self {
        self.min_size = size;
        self
    }

    /// Set the minimum width only.
    pub fn min_width(mut self, width: f64) -> Self {
        self.min_size.width = width;
        self
    }

    /// Set the minimum height only.
    pub fn min_height(mut self, height: f64) -> Self {
        self.min_size.height = height;
        self
    }

    /// Size computed for the child during the most recent layout pass.
    pub fn cached_size(&self) -> Size {
        self.cache_size
    }

    /// Minimum width computed for the child during the most recent layout pass.
    pub fn cached_min_width(&self) -> f64 {
        self.cache_min_width
    }

    pub(crate) fn clamped_horizontal_span(&self, columns: usize) -> usize {
        self.horizontal_span.min(columns).max(1)
    }

    pub(crate) fn clamped_vertical_span(&self) -> usize {
        self.vertical_span.max(1)
    }

    pub(crate) fn effective_min_width(&self, min: Size) -> f64 {
        if has_hint(self.min_size.width) {
            self.min_size.width
        } else {
            min.width
        }
    }

    fn effective_min_height(&self, min: Size) -> f64 {
        if has_hint(self.min_size.height) {
            self.min_size.height
        } else {
            min.height
        }
    }

    /// Ask `target` for its sizes under `hint` and remember the result for this pass.
    pub(crate) fn compute_cache_size(
        &mut self,
        target: &mut dyn Layoutable,
        mut hint: Size,
        use_minimum_size: bool,
    ) {
        self.cache_min_width = 0.0;
        self.cache_size = Size::ZERO;
        let sizes = target.compute_sizes(hint);
        if has_hint(hint.width) || has_hint(hint.height) {
            if has_hint(hint.width) {
                let floor = self.effective_min_width(sizes.min);
                if hint.width < floor {
                    hint.width = floor;
                }
                if hint.width > sizes.max.width {
                    hint.width = sizes.max.width;
                }
            }
            if has_hint(hint.height) {
                let floor = self.effective_min_height(sizes.min);
                if hint.height < floor {
                    hint.height = floor;
                }
                if hint.height > sizes.max.height {
                    hint.height = sizes.max.height;
                }
            }
        }

        self.cache_size = if use_minimum_size {
            sizes.min
        } else {
            sizes.pref
        };
        self.cache_min_width = self.effective_min_width(sizes.min);

        if has_hint(hint.width) {
            self.cache_size.width = hint.width;
        } else {
            if has_hint(self.size_hint.width) {
                self.cache_size.width = self.size_hint.width;
            }
            if has_hint(self.min_size.width) && self.cache_size.width < self.min_size.width {
                self.cache_size.width = self.min_size.width;
            }
        }
        if has_hint(hint.height) {
            self.cache_size.height = hint.height;
        } else {
            if has_hint(self.size_hint.height) {
                self.cache_size.height = self.size_hint.height;
            }
            if has_hint(self.min_size.height) && self.cache_size.height < self.min_size.height {
                self.cache_size.height = self.min_size.height;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/data.rs"]
mod tests;
