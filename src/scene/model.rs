use std::collections::HashSet;

use crate::foundation::core::{Insets, NO_HINT, NO_HINT_SIZE, Size, Sizes};
use crate::foundation::error::{TrellisError, TrellisResult};
use crate::layout::helpers::default_max_size;
use crate::layout::{LayoutKind, Layoutable, PrecisionData};
use crate::widget::{Block, FixedSizer, Placement, ReflowSizer};

/// A block tree described as data, plus the size it is meant to be shown at.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutDocument {
    /// Size to lay the root out at when the caller does not pick one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Size>,
    /// Root of the tree.
    pub root: NodeSpec,
}

/// One node of a [`LayoutDocument`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct NodeSpec {
    /// Identifier, unique within the document.
    pub id: String,
    /// Space reserved inside the node's bounds.
    #[serde(default)]
    pub insets: Edges,
    /// How the node's children are arranged.
    #[serde(default)]
    pub layout: LayoutKind,
    /// Grid placement of this node inside its parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<PrecisionData>,
    /// Leaf content. Ignored for sizing when the node has a layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentSpec>,
    /// Child nodes in layout order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeSpec>,
}

/// Margins on each side, as written in documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Edges {
    /// Left margin.
    pub left: f64,
    /// Top margin.
    pub top: f64,
    /// Right margin.
    pub right: f64,
    /// Bottom margin.
    pub bottom: f64,
}

/// Leaf content and how it sizes itself.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentSpec {
    /// Fixed sizes. `min` defaults to `pref`, `max` to the default maximum.
    Fixed {
        /// Smallest usable size.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<Size>,
        /// Natural size.
        pref: Size,
        /// Largest useful size.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<Size>,
    },
    /// Monospaced text that wraps to the width it is given.
    Reflow {
        /// Number of glyphs.
        glyphs: usize,
        /// Advance of one glyph. Must be positive.
        glyph_width: f64,
        /// Height of one line.
        line_height: f64,
    },
}

impl Edges {
    /// The same margin on every side.
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    /// As kurbo insets.
    pub fn to_insets(self) -> Insets {
        Insets::new(self.left, self.top, self.right, self.bottom)
    }
}

impl LayoutDocument {
    /// Parse a document from JSON. Does not validate.
    pub fn from_json(json: &str) -> TrellisResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check ids, margins, spacing, hints and content metrics.
    pub fn validate(&self) -> TrellisResult<()> {
        if let Some(viewport) = self.viewport {
            non_negative("viewport", "width", viewport.width)?;
            non_negative("viewport", "height", viewport.height)?;
        }
        let mut seen = HashSet::new();
        self.root.validate(&mut seen)
    }

    /// Validate, then turn the document into a [`Block`] tree.
    #[tracing::instrument(skip(self), fields(root = %self.root.id))]
    pub fn build(&self) -> TrellisResult<Block> {
        self.validate()?;
        let block = self.root.build();
        tracing::debug!("built block tree");
        Ok(block)
    }

    /// Sizes of the root at no particular hint.
    pub fn sizes(&self) -> TrellisResult<Sizes> {
        let mut root = self.build()?;
        Ok(root.compute_sizes(NO_HINT_SIZE))
    }

    /// Lay the tree out at `size`, else the viewport, else the root's preferred size, and
    /// report where everything went.
    pub fn layout(&self, size: Option<Size>) -> TrellisResult<Vec<Placement>> {
        if let Some(size) = size {
            non_negative("layout", "width", size.width)?;
            non_negative("layout", "height", size.height)?;
        }
        let mut root = self.build()?;
        match size.or(self.viewport) {
            Some(size) => root.resize_to(size),
            None => root.pack(),
        }
        Ok(root.placements())
    }
}

impl NodeSpec {
    /// A bare node with the given id.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    fn validate(&self, seen: &mut HashSet<String>) -> TrellisResult<()> {
        if self.id.trim().is_empty() {
            return Err(TrellisError::validation("node id must be non-empty"));
        }
        if !seen.insert(self.id.clone()) {
            return Err(TrellisError::validation(format!(
                "duplicate node id '{}'",
                self.id
            )));
        }
        let id = self.id.as_str();
        let scope = format!("node '{id}'");

        let Edges {
            left,
            top,
            right,
            bottom,
        } = self.insets;
        for value in [left, top, right, bottom] {
            non_negative(&scope, "insets", value)?;
        }

        match self.layout {
            LayoutKind::None => {}
            LayoutKind::Flow(flow) => {
                non_negative(&scope, "horizontal_spacing", flow.horizontal_spacing)?;
                non_negative(&scope, "vertical_spacing", flow.vertical_spacing)?;
            }
            LayoutKind::Precision(precision) => {
                if precision.columns == 0 {
                    return Err(TrellisError::validation(format!(
                        "node '{id}' grid must have columns > 0"
                    )));
                }
                non_negative(&scope, "horizontal_spacing", precision.horizontal_spacing)?;
                non_negative(&scope, "vertical_spacing", precision.vertical_spacing)?;
                let rows = self.children.len();
                for child in &self.children {
                    if let Some(data) = &child.data
                        && data.vertical_span > rows
                    {
                        return Err(TrellisError::validation(format!(
                            "node '{}' vertical_span {} exceeds the {rows} children of '{id}'",
                            child.id, data.vertical_span
                        )));
                    }
                }
            }
        }

        if let Some(data) = &self.data {
            for (what, value) in [
                ("size_hint.width", data.size_hint.width),
                ("size_hint.height", data.size_hint.height),
                ("min_size.width", data.min_size.width),
                ("min_size.height", data.min_size.height),
            ] {
                hint(&scope, what, value)?;
            }
        }

        match &self.content {
            None => {}
            Some(ContentSpec::Fixed { min, pref, max }) => {
                for size in [Some(*pref), *min, *max].into_iter().flatten() {
                    non_negative(&scope, "content width", size.width)?;
                    non_negative(&scope, "content height", size.height)?;
                }
            }
            Some(ContentSpec::Reflow {
                glyph_width,
                line_height,
                ..
            }) => {
                if !(glyph_width.is_finite() && *glyph_width > 0.0) {
                    return Err(TrellisError::validation(format!(
                        "node '{id}' glyph_width must be > 0"
                    )));
                }
                non_negative(&scope, "line_height", *line_height)?;
            }
        }

        for child in &self.children {
            child.validate(seen)?;
        }
        Ok(())
    }

    fn build(&self) -> Block {
        let mut block = Block::new(self.id.clone())
            .with_insets(self.insets.to_insets())
            .with_layout(self.layout);
        if let Some(data) = &self.data {
            block = block.with_data(data.clone());
        }
        match self.content {
            None => {}
            Some(ContentSpec::Fixed { min, pref, max }) => {
                block = block.with_sizer(FixedSizer::new(
                    min.unwrap_or(pref),
                    pref,
                    max.unwrap_or_else(|| default_max_size(pref)),
                ));
            }
            Some(ContentSpec::Reflow {
                glyphs,
                glyph_width,
                line_height,
            }) => {
                block = block.with_sizer(ReflowSizer::new(glyphs, glyph_width, line_height));
            }
        }
        for child in &self.children {
            block.add_child(child.build());
        }
        block
    }
}

fn non_negative(scope: &str, what: &str, value: f64) -> TrellisResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(TrellisError::validation(format!(
            "{scope} {what} must be finite and >= 0"
        )));
    }
    Ok(())
}

/// A hint axis is either unset or a real, non-negative extent.
fn hint(scope: &str, what: &str, value: f64) -> TrellisResult<()> {
    if value == NO_HINT {
        return Ok(());
    }
    non_negative(scope, what, value)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
