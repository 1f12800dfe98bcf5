use crate::foundation::core::{Size, Sizes, has_hint};
use crate::layout::Sizer;
use crate::layout::helpers::default_max_size;

/// Content with fixed sizes that ignore the hint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedSizer(
    /// Sizes reported for every hint.
    pub Sizes,
);

impl FixedSizer {
    /// Explicit min/pref/max.
    pub fn new(min: Size, pref: Size, max: Size) -> Self {
        Self(Sizes::new(min, pref, max))
    }

    /// Rigid content: minimum and preferred are both `size`.
    pub fn preferred(size: Size) -> Self {
        Self(Sizes::new(size, size, default_max_size(size)))
    }
}

impl Sizer for FixedSizer {
    fn sizes(&self, _hint: Size) -> Sizes {
        self.0
    }
}

/// Monospaced text that wraps at whatever width it is offered.
///
/// Unconstrained it reports a single line. Given a width hint narrower than that line, it fits
/// as many glyphs per line as the width allows (never fewer than one) and grows taller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReflowSizer {
    /// Number of glyphs.
    pub glyphs: usize,
    /// Advance of one glyph.
    pub glyph_width: f64,
    /// Height of one line.
    pub line_height: f64,
}

impl ReflowSizer {
    /// Text of `glyphs` glyphs with the given metrics.
    pub fn new(glyphs: usize, glyph_width: f64, line_height: f64) -> Self {
        Self {
            glyphs,
            glyph_width,
            line_height,
        }
    }

    fn single_line_width(&self) -> f64 {
        self.glyphs as f64 * self.glyph_width
    }
}

impl Sizer for ReflowSizer {
    fn sizes(&self, hint: Size) -> Sizes {
        let min = Size::new(self.glyph_width, self.line_height);
        let pref = if has_hint(hint.width) && hint.width < self.single_line_width() {
            let per_line = ((hint.width / self.glyph_width).floor() as usize).max(1);
            let lines = self.glyphs.div_ceil(per_line);
            Size::new(
                per_line as f64 * self.glyph_width,
                lines as f64 * self.line_height,
            )
        } else {
            Size::new(self.single_line_width(), self.line_height)
        };
        Sizes::new(min, pref, default_max_size(pref))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/sizers.rs"]
mod tests;
