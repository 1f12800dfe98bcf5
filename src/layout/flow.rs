use crate::foundation::core::{NO_HINT, NO_HINT_SIZE, Point, Rect, Size, Sizes};
use crate::layout::helpers::default_max_size;
use crate::layout::{Layout, Layoutable};

/// Lays out children left-to-right, then top-to-bottom, at their preferred sizes when they fit.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Flow {
    /// Gap between neighbors on a line.
    pub horizontal_spacing: f64,
    /// Gap between lines.
    pub vertical_spacing: f64,
}

impl Flow {
    /// A flow with the given gaps.
    pub fn new(horizontal_spacing: f64, vertical_spacing: f64) -> Self {
        Self {
            horizontal_spacing,
            vertical_spacing,
        }
    }

    /// Walk the children, deciding each one's rectangle. Returns the flowed extent (including the
    /// leading insets) and the largest child minimum.
    fn flow(
        &self,
        target: &mut dyn Layoutable,
        size: Size,
        mut place: impl FnMut(&mut dyn Layoutable, Rect),
    ) -> (Size, Size) {
        let insets = target.insets();
        let width = size.width - (insets.x0 + insets.x1);
        let mut cursor = Line {
            origin: Point::new(insets.x0, insets.y0),
            left: insets.x0,
            width,
            available_width: width,
            available_height: size.height - (insets.y0 + insets.y1),
            tallest: 0.0,
        };
        let mut extent = Size::new(insets.x0, insets.y0);
        let mut largest_min = Size::ZERO;

        for child in target.layout_children() {
            let mut sizes = child.compute_sizes(NO_HINT_SIZE);
            largest_min.width = largest_min.width.max(sizes.min.width);
            largest_min.height = largest_min.height.max(sizes.min.height);
            if sizes.pref.width > cursor.available_width {
                if sizes.min.width <= cursor.available_width {
                    sizes.pref.width = cursor.available_width;
                } else if cursor.origin.x == cursor.left {
                    sizes.pref.width = sizes.min.width;
                } else {
                    cursor.break_line(self.vertical_spacing);
                    if sizes.pref.width > cursor.available_width {
                        sizes.pref.width = if sizes.min.width <= cursor.available_width {
                            cursor.available_width
                        } else {
                            sizes.min.width
                        };
                    }
                }
                let chosen_width = sizes.pref.width;
                sizes = child.compute_sizes(Size::new(chosen_width, NO_HINT));
                sizes.pref.width = chosen_width;
                if sizes.pref.height > cursor.available_height {
                    sizes.pref.height = if sizes.min.height <= cursor.available_height {
                        cursor.available_height
                    } else {
                        sizes.min.height
                    };
                }
            }
            place(child, Rect::from_origin_size(cursor.origin, sizes.pref));
            extent.width = extent.width.max(cursor.origin.x + sizes.pref.width);
            extent.height = extent.height.max(cursor.origin.y + sizes.pref.height);
            cursor.tallest = cursor.tallest.max(sizes.pref.height);
            cursor.available_width -= sizes.pref.width + self.horizontal_spacing;
            if cursor.available_width <= 0.0 {
                cursor.break_line(self.vertical_spacing);
            } else {
                cursor.origin.x += sizes.pref.width + self.horizontal_spacing;
            }
        }
        (extent, largest_min)
    }
}

/// Placement cursor for the line being filled.
struct Line {
    origin: Point,
    left: f64,
    width: f64,
    available_width: f64,
    available_height: f64,
    tallest: f64,
}

impl Line {
    fn break_line(&mut self, vertical_spacing: f64) {
        self.origin.x = self.left;
        self.origin.y += self.tallest + vertical_spacing;
        self.available_width = self.width;
        self.available_height -= self.tallest + vertical_spacing;
        self.tallest = 0.0;
    }
}

impl Layout for Flow {
    #[tracing::instrument(skip_all)]
    fn compute_sizes(&self, target: &mut dyn Layoutable, hint: Size) -> Sizes {
        let bounded = Size::new(
            if hint.width < 0.0 { f64::MAX } else { hint.width },
            if hint.height < 0.0 { f64::MAX } else { hint.height },
        );
        let insets = target.insets();
        let (extent, largest_min) = self.flow(target, bounded, |_, _| {});
        let pref = Size::new(extent.width + insets.x1, extent.height + insets.y1);
        let min = Size::new(
            largest_min.width + insets.x0 + insets.x1,
            largest_min.height + insets.y0 + insets.y1,
        );
        Sizes::new(min, pref, default_max_size(pref))
    }

    #[tracing::instrument(skip_all)]
    fn layout(&self, target: &mut dyn Layoutable) {
        let size = target.bounds().size();
        self.flow(target, size, |child, bounds| child.set_bounds(bounds));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flow.rs"]
mod tests;
