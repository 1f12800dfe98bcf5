use crate::foundation::core::{Insets, NO_HINT_SIZE, Point, Rect, Size, Sizes};
use crate::layout::helpers::leaf_sizes;
use crate::layout::{LayoutKind, Layoutable, PrecisionData, Sizer};

/// A retained layout node: a container when it has a layout, a leaf when it has a sizer.
#[derive(Debug, Default)]
pub struct Block {
    id: String,
    bounds: Rect,
    insets: Insets,
    layout: LayoutKind,
    sizer: Option<Box<dyn Sizer>>,
    layout_data: Option<PrecisionData>,
    children: Vec<Block>,
}

/// Where a block ended up after layout.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Block id.
    pub id: String,
    /// Bounds relative to the parent.
    pub bounds: Rect,
    /// Bounds relative to the root's parent.
    pub absolute: Rect,
}

impl Block {
    /// An empty block with no layout, sizer or children.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Use `layout` to size and position children.
    pub fn with_layout(mut self, layout: impl Into<LayoutKind>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Reserve `insets` inside the bounds.
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Report sizes from `sizer` when there is no layout.
    pub fn with_sizer(mut self, sizer: impl Sizer + 'static) -> Self {
        self.sizer = Some(Box::new(sizer));
        self
    }

    /// Attach grid layout data.
    pub fn with_data(mut self, data: PrecisionData) -> Self {
        self.layout_data = Some(data);
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: Block) -> Self {
        self.children.push(child);
        self
    }

    /// Append a child.
    pub fn add_child(&mut self, child: Block) {
        self.children.push(child);
    }

    /// Identifier, unique within a document.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The active layout.
    pub fn layout(&self) -> LayoutKind {
        self.layout
    }

    /// Replace the active layout.
    pub fn set_layout(&mut self, layout: impl Into<LayoutKind>) {
        self.layout = layout.into();
    }

    /// Children in layout order.
    pub fn children(&self) -> &[Block] {
        &self.children
    }

    /// Depth-first search for the block with `id`, starting with `self`.
    pub fn find(&self, id: &str) -> Option<&Block> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Lay out this block's children, then theirs, all the way down.
    pub fn validate_layout(&mut self) {
        let layout = self.layout;
        if let Some(strategy) = layout.strategy() {
            strategy.layout(self);
        }
        for child in &mut self.children {
            child.validate_layout();
        }
    }

    /// Resize to the preferred size, keeping the origin, and lay out the subtree.
    pub fn pack(&mut self) {
        let pref = self.compute_sizes(NO_HINT_SIZE).pref;
        self.resize_to(pref);
    }

    /// Resize to `size`, keeping the origin, and lay out the subtree.
    pub fn resize_to(&mut self, size: Size) {
        self.bounds = Rect::from_origin_size(self.bounds.origin(), size);
        self.validate_layout();
    }

    /// Pre-order list of every block's bounds.
    pub fn placements(&self) -> Vec<Placement> {
        let mut out = Vec::new();
        self.collect_placements(Point::ORIGIN, &mut out);
        out
    }

    fn collect_placements(&self, parent_origin: Point, out: &mut Vec<Placement>) {
        let absolute = self.bounds + parent_origin.to_vec2();
        out.push(Placement {
            id: self.id.clone(),
            bounds: self.bounds,
            absolute,
        });
        for child in &self.children {
            child.collect_placements(absolute.origin(), out);
        }
    }
}

impl Layoutable for Block {
    fn compute_sizes(&mut self, hint: Size) -> Sizes {
        let layout = self.layout;
        match layout.strategy() {
            Some(strategy) => strategy.compute_sizes(self, hint),
            None => leaf_sizes(self.sizer.as_deref(), hint),
        }
    }

    fn layout_children(&mut self) -> Vec<&mut dyn Layoutable> {
        self.children
            .iter_mut()
            .map(|child| child as &mut dyn Layoutable)
            .collect()
    }

    fn layout_data(&self) -> Option<&PrecisionData> {
        self.layout_data.as_ref()
    }

    fn set_layout_data(&mut self, data: PrecisionData) {
        self.layout_data = Some(data);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn insets(&self) -> Insets {
        self.insets
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/block.rs"]
mod tests;
