//! Grid layout with per-child spans, alignment, grab flags and size overrides.
//!
//! One pass over a container:
//!
//! 1. size every child unconstrained and attach its [`PrecisionData`]
//! 2. drop children into a grid, left-to-right and top-to-bottom, honoring spans
//! 3. resolve column widths
//! 4. re-query children whose width was decided by the columns (wrapping content)
//! 5. resolve row heights
//! 6. align the whole grid within the container and position every child in its cell

use std::ops::RangeInclusive;

use crate::foundation::core::{
    NO_HINT, NO_HINT_SIZE, Point, Rect, Size, SizeExt, Sizes, has_hint, inset_origin,
};
use crate::layout::helpers::default_max_size;
use crate::layout::{Alignment, Layout, Layoutable, PrecisionData};

/// Expansion stops once the distributed total is this close to the available space.
const EPSILON: f64 = 0.01;

/// Upper bound on expansion passes. Each pass normally converges or retires a line.
const MAX_EXPANSION_PASSES: usize = 256;

/// Lays out the children of its target in a grid driven by each child's [`PrecisionData`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Precision {
    /// Number of columns. Zero lays out nothing.
    pub columns: usize,
    /// Gap between columns.
    pub horizontal_spacing: f64,
    /// Gap between rows.
    pub vertical_spacing: f64,
    /// Placement of the whole grid when the container is wider than the grid.
    pub horizontal_alignment: Alignment,
    /// Placement of the whole grid when the container is taller than the grid.
    pub vertical_alignment: Alignment,
    /// Give every column the same width.
    pub equal_columns: bool,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            columns: 1,
            horizontal_spacing: 4.0,
            vertical_spacing: 2.0,
            horizontal_alignment: Alignment::Beginning,
            vertical_alignment: Alignment::Beginning,
            equal_columns: false,
        }
    }
}

/// Resolved grid geometry, as reported by [`Precision::metrics`].
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct GridMetrics {
    /// Total size of the grid, spacing included, insets excluded.
    pub size: Size,
    /// Width of each column.
    pub widths: Vec<f64>,
    /// Height of each row.
    pub heights: Vec<f64>,
    /// `cells[row][column]` holds the index of the child covering that cell.
    pub cells: Vec<Vec<Option<usize>>>,
}

impl Precision {
    /// A grid with `columns` columns and default spacing and alignment.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Set the gaps between columns and rows.
    pub fn spacing(mut self, horizontal: f64, vertical: f64) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    /// Set the alignment of the whole grid within its container.
    pub fn align(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    /// Force all columns to share one width.
    pub fn equal(mut self, equal_columns: bool) -> Self {
        self.equal_columns = equal_columns;
        self
    }

    /// Resolve the grid for the children of `target` at the content-area `hint`, without
    /// moving anything.
    pub fn metrics(&self, target: &mut dyn Layoutable, hint: Size) -> GridMetrics {
        let mut children = target.layout_children();
        self.solve(&mut children, Point::ORIGIN, hint, false, false)
    }

    fn solve(
        &self,
        children: &mut [&mut dyn Layoutable],
        location: Point,
        hint: Size,
        position: bool,
        use_minimum_size: bool,
    ) -> GridMetrics {
        if self.columns == 0 || children.is_empty() {
            return GridMetrics::default();
        }

        let mut data: Vec<PrecisionData> = children
            .iter_mut()
            .map(|child| {
                let mut data = child.layout_data().cloned().unwrap_or_default();
                data.compute_cache_size(&mut **child, NO_HINT_SIZE, use_minimum_size);
                data
            })
            .collect();

        let grid = Grid::build(self.columns, &data);
        let widths = resolve_axis(
            &grid.column_lines(&data),
            self.horizontal_spacing,
            self.equal_columns,
            hint.width,
        );
        self.wrap(hint.width, &grid, &widths, &mut data, children, use_minimum_size);
        let heights = resolve_axis(
            &grid.row_lines(&data),
            self.vertical_spacing,
            false,
            hint.height,
        );
        tracing::trace!(?widths, ?heights, rows = grid.rows(), "resolved grid");

        let size = Size::new(
            widths.iter().sum::<f64>() + gaps(self.horizontal_spacing, self.columns),
            heights.iter().sum::<f64>() + gaps(self.vertical_spacing, grid.rows()),
        );

        if position {
            let mut origin = location;
            if size.width < hint.width {
                origin.x += shift(self.horizontal_alignment, hint.width - size.width);
            }
            if size.height < hint.height {
                origin.y += shift(self.vertical_alignment, hint.height - size.height);
            }
            self.position_children(origin, &grid, &widths, &heights, &data, children);
        }

        for (child, entry) in children.iter_mut().zip(data) {
            child.set_layout_data(entry);
        }

        GridMetrics {
            size,
            widths,
            heights,
            cells: grid.cells,
        }
    }

    /// Re-query children whose column width turned out different from their unconstrained
    /// width, so content that wraps can report the height it needs at that width.
    fn wrap(
        &self,
        width: f64,
        grid: &Grid,
        widths: &[f64],
        data: &mut [PrecisionData],
        children: &mut [&mut dyn Layoutable],
        use_minimum_size: bool,
    ) {
        if !has_hint(width) {
            return;
        }
        for column in 0..self.columns {
            for row in 0..grid.rows() {
                let Some(index) = grid.last_cell(data, row, column) else {
                    continue;
                };
                let entry = &mut data[index];
                if has_hint(entry.size_hint.height) {
                    continue;
                }
                let span = entry.clamped_horizontal_span(self.columns);
                let current = widths[column + 1 - span..=column].iter().sum::<f64>()
                    + gaps(self.horizontal_spacing, span);
                let cached = entry.cache_size.width;
                if (current != cached && entry.horizontal_alignment == Alignment::Fill)
                    || cached > current
                {
                    let hint = Size::new(entry.cache_min_width.max(current), NO_HINT);
                    entry.compute_cache_size(&mut *children[index], hint, use_minimum_size);
                    let min_height = entry.min_size.height;
                    if entry.vertical_grab
                        && min_height > 0.0
                        && entry.cache_size.height < min_height
                    {
                        entry.cache_size.height = min_height;
                    }
                }
            }
        }
    }

    fn position_children(
        &self,
        origin: Point,
        grid: &Grid,
        widths: &[f64],
        heights: &[f64],
        data: &[PrecisionData],
        children: &mut [&mut dyn Layoutable],
    ) {
        let mut y = origin.y;
        for row in 0..grid.rows() {
            let mut x = origin.x;
            for column in 0..self.columns {
                if let Some(index) = grid.first_cell(data, row, column) {
                    let entry = &data[index];
                    let h_span = entry.clamped_horizontal_span(self.columns);
                    let v_span = entry.clamped_vertical_span();
                    let cell_width = widths[column..column + h_span].iter().sum::<f64>()
                        + gaps(self.horizontal_spacing, h_span);
                    let cell_height = heights[row..row + v_span].iter().sum::<f64>()
                        + gaps(self.vertical_spacing, v_span);
                    let (child_x, child_width) = place(
                        x,
                        cell_width,
                        entry.cache_size.width,
                        entry.horizontal_alignment,
                    );
                    let (child_y, child_height) = place(
                        y,
                        cell_height,
                        entry.cache_size.height,
                        entry.vertical_alignment,
                    );
                    children[index].set_bounds(Rect::from_origin_size(
                        (child_x, child_y),
                        (child_width, child_height),
                    ));
                }
                x += widths[column] + self.horizontal_spacing;
            }
            y += heights[row] + self.vertical_spacing;
        }
    }
}

impl Layout for Precision {
    #[tracing::instrument(skip_all, fields(columns = self.columns))]
    fn compute_sizes(&self, target: &mut dyn Layoutable, _hint: Size) -> Sizes {
        let insets = target.insets();
        let mut children = target.layout_children();
        let min = self
            .solve(&mut children, Point::ORIGIN, NO_HINT_SIZE, false, true)
            .size
            .add_insets(insets);
        let pref = self
            .solve(&mut children, Point::ORIGIN, NO_HINT_SIZE, false, false)
            .size
            .add_insets(insets);
        Sizes::new(min, pref, default_max_size(pref))
    }

    #[tracing::instrument(skip_all, fields(columns = self.columns))]
    fn layout(&self, target: &mut dyn Layoutable) {
        let insets = target.insets();
        let hint = target.bounds().size().subtract_insets(insets);
        let mut children = target.layout_children();
        self.solve(&mut children, inset_origin(insets), hint, true, false);
    }
}

/// Total spacing between `count` consecutive lines.
fn gaps(spacing: f64, count: usize) -> f64 {
    spacing * count.saturating_sub(1) as f64
}

/// Offset of content inside a larger space for a container-level alignment.
fn shift(alignment: Alignment, surplus: f64) -> f64 {
    match alignment {
        Alignment::Middle => surplus / 2.0,
        Alignment::End => surplus,
        Alignment::Beginning | Alignment::Fill => 0.0,
    }
}

/// Origin and extent of a child inside its cell on one axis. The child never exceeds the cell.
fn place(origin: f64, cell: f64, wanted: f64, alignment: Alignment) -> (f64, f64) {
    let extent = wanted.min(cell);
    match alignment {
        Alignment::Beginning => (origin, extent),
        Alignment::Middle => (origin + ((cell - extent) / 2.0).max(0.0), extent),
        Alignment::End => (origin + (cell - extent).max(0.0), extent),
        Alignment::Fill => (origin, cell),
    }
}

/// Child indices laid out in rows and columns. A spanning child occupies every cell of its
/// footprint.
struct Grid {
    columns: usize,
    cells: Vec<Vec<Option<usize>>>,
}

impl Grid {
    fn build(columns: usize, data: &[PrecisionData]) -> Self {
        let mut cells: Vec<Vec<Option<usize>>> = Vec::new();
        let (mut row, mut column) = (0usize, 0usize);
        for (index, entry) in data.iter().enumerate() {
            let h_span = entry.clamped_horizontal_span(columns);
            let v_span = entry.clamped_vertical_span();
            loop {
                while cells.len() < row + v_span {
                    cells.push(vec![None; columns]);
                }
                while column < columns && cells[row][column].is_some() {
                    column += 1;
                }
                let end = column + h_span;
                if end <= columns {
                    let mut probe = column;
                    while probe < end && cells[row][probe].is_none() {
                        probe += 1;
                    }
                    if probe == end {
                        break;
                    }
                    column = probe;
                }
                if column + h_span >= columns {
                    column = 0;
                    row += 1;
                }
            }
            for line in &mut cells[row..row + v_span] {
                for cell in &mut line[column..column + h_span] {
                    *cell = Some(index);
                }
            }
            column += h_span;
        }
        Self { columns, cells }
    }

    fn rows(&self) -> usize {
        self.cells.len()
    }

    /// The child whose footprint starts at this cell.
    fn first_cell(&self, data: &[PrecisionData], row: usize, column: usize) -> Option<usize> {
        let index = self.cells[row][column]?;
        let entry = &data[index];
        let last_row = row + entry.clamped_vertical_span() - 1;
        let last_column = column + entry.clamped_horizontal_span(self.columns) - 1;
        self.owns(index, last_row, last_column)
    }

    /// The child whose footprint ends at this cell.
    fn last_cell(&self, data: &[PrecisionData], row: usize, column: usize) -> Option<usize> {
        let index = self.cells[row][column]?;
        let entry = &data[index];
        let first_row = row.checked_sub(entry.clamped_vertical_span() - 1)?;
        let first_column = column.checked_sub(entry.clamped_horizontal_span(self.columns) - 1)?;
        self.owns(index, first_row, first_column)
    }

    fn owns(&self, index: usize, row: usize, column: usize) -> Option<usize> {
        let cell = self.cells.get(row)?.get(column)?;
        (*cell == Some(index)).then_some(index)
    }

    fn column_lines(&self, data: &[PrecisionData]) -> Vec<Line> {
        (0..self.columns)
            .map(|column| {
                let mut line = Line::default();
                for row in 0..self.rows() {
                    if let Some(index) = self.first_cell(data, row, column) {
                        let entry = &data[index];
                        if entry.clamped_horizontal_span(self.columns) == 1 {
                            line.singles.push(column_item(entry, 1));
                        }
                    }
                }
                for row in 0..self.rows() {
                    if let Some(index) = self.last_cell(data, row, column) {
                        let entry = &data[index];
                        let span = entry.clamped_horizontal_span(self.columns);
                        if span > 1 {
                            line.spanning.push(column_item(entry, span));
                        }
                    }
                }
                line
            })
            .collect()
    }

    fn row_lines(&self, data: &[PrecisionData]) -> Vec<Line> {
        (0..self.rows())
            .map(|row| {
                let mut line = Line::default();
                for column in 0..self.columns {
                    if let Some(index) = self.first_cell(data, row, column) {
                        let entry = &data[index];
                        if entry.clamped_vertical_span() == 1 {
                            line.singles.push(row_item(entry, 1));
                        }
                    }
                }
                for column in 0..self.columns {
                    if let Some(index) = self.last_cell(data, row, column) {
                        let entry = &data[index];
                        let span = entry.clamped_vertical_span();
                        if span > 1 {
                            line.spanning.push(row_item(entry, span));
                        }
                    }
                }
                line
            })
            .collect()
    }
}

/// One child's demand on a column or row.
#[derive(Clone, Copy, Debug)]
struct Item {
    span: usize,
    size: f64,
    /// Floor this child imposes, if it imposes one.
    minimum: Option<f64>,
    grab: bool,
}

/// Demands on one column or row: children that sit only in this line, then children whose
/// span ends in this line.
#[derive(Debug, Default)]
struct Line {
    singles: Vec<Item>,
    spanning: Vec<Item>,
}

fn column_item(entry: &PrecisionData, span: usize) -> Item {
    Item {
        span,
        size: entry.cache_size.width,
        minimum: floor_for(
            entry.horizontal_grab,
            entry.cache_min_width,
            entry.cache_size.width,
        ),
        grab: entry.horizontal_grab,
    }
}

fn row_item(entry: &PrecisionData, span: usize) -> Item {
    Item {
        span,
        size: entry.cache_size.height,
        minimum: floor_for(
            entry.vertical_grab,
            entry.min_size.height,
            entry.cache_size.height,
        ),
        grab: entry.vertical_grab,
    }
}

/// A child that does not grab holds its line at its cached size. A grabbing child holds it at
/// its explicit minimum, or not at all when that minimum is zero.
fn floor_for(grab: bool, minimum: f64, cached: f64) -> Option<f64> {
    if grab && minimum == 0.0 {
        None
    } else if !grab || !has_hint(minimum) {
        Some(cached)
    } else {
        Some(minimum)
    }
}

/// Spread `extra` over the expandable lines of `span`, or add it all to the last line of the
/// span when none of them expand.
fn apportion(
    extra: f64,
    span: RangeInclusive<usize>,
    expandable: usize,
    expand: &[bool],
    values: &mut [f64],
) {
    if expandable == 0 {
        values[*span.end()] += extra;
        return;
    }
    let delta = extra / expandable as f64;
    for line in span {
        if expand[line] {
            values[line] += delta;
        }
    }
}

/// Resolve the sizes of the lines of one axis. `extent` is the space available on that axis,
/// or [`NO_HINT`](crate::NO_HINT).
fn resolve_axis(lines: &[Line], spacing: f64, equal: bool, extent: f64) -> Vec<f64> {
    let count = lines.len();
    let available = extent - gaps(spacing, count);
    let mut sizes = vec![0.0f64; count];
    let mut minimums = vec![0.0f64; count];
    let mut expand = vec![false; count];
    let mut expand_count = 0usize;

    for (index, line) in lines.iter().enumerate() {
        for item in &line.singles {
            if sizes[index] < item.size {
                sizes[index] = item.size;
            }
            if item.grab {
                if !expand[index] {
                    expand_count += 1;
                }
                expand[index] = true;
            }
            if let Some(minimum) = item.minimum
                && minimums[index] < minimum
            {
                minimums[index] = minimum;
            }
        }
        for item in &line.spanning {
            let span = index + 1 - item.span..=index;
            let span_size: f64 = sizes[span.clone()].iter().sum();
            let span_minimum: f64 = minimums[span.clone()].iter().sum();
            let span_expand = expand[span.clone()].iter().filter(|e| **e).count();
            if item.grab && span_expand == 0 {
                expand_count += 1;
                expand[index] = true;
            }
            let gap = gaps(spacing, item.span);
            let extra = item.size - span_size - gap;
            if extra > 0.0 {
                if equal {
                    let shared = (extra + span_size) / item.span as f64;
                    for size in &mut sizes[span.clone()] {
                        if *size < shared {
                            *size = shared;
                        }
                    }
                } else {
                    apportion(extra, span.clone(), span_expand, &expand, &mut sizes);
                }
            }
            if let Some(minimum) = item.minimum {
                let extra = minimum - span_minimum - gap;
                if extra > 0.0 {
                    apportion(extra, span, span_expand, &expand, &mut minimums);
                }
            }
        }
    }

    if equal {
        let floor = minimums.iter().copied().fold(0.0, f64::max);
        let mut shared = sizes.iter().copied().fold(0.0, f64::max);
        if has_hint(extent) && expand_count > 0 {
            shared = floor.max(available / count as f64);
        }
        sizes.fill(shared);
    } else if has_hint(extent) && expand_count > 0 {
        expand_lines(
            lines,
            spacing,
            available,
            &mut sizes,
            &minimums,
            &mut expand,
            expand_count,
        );
    }
    sizes
}

/// Hand the difference between `available` and the current total to the expandable lines,
/// retiring a line once it would drop to its floor, until the total matches.
fn expand_lines(
    lines: &[Line],
    spacing: f64,
    available: f64,
    sizes: &mut [f64],
    minimums: &[f64],
    expand: &mut [bool],
    expand_count: usize,
) {
    let mut remaining = expand_count;
    let mut total: f64 = sizes.iter().sum();
    let mut delta = (available - total) / remaining as f64;
    let mut passes = 0usize;
    while (total - available).abs() > EPSILON {
        for line in 0..sizes.len() {
            if expand[line] {
                if sizes[line] + delta > minimums[line] {
                    sizes[line] += delta;
                } else {
                    sizes[line] = minimums[line];
                    expand[line] = false;
                    remaining -= 1;
                }
            }
        }
        for (index, line) in lines.iter().enumerate() {
            for item in &line.spanning {
                let Some(minimum) = item.minimum else {
                    continue;
                };
                let span = index + 1 - item.span..=index;
                let span_size: f64 = sizes[span.clone()].iter().sum();
                let span_expand = expand[span.clone()].iter().filter(|e| **e).count();
                let extra = minimum - span_size - gaps(spacing, item.span);
                if extra > 0.0 {
                    apportion(extra, span, span_expand, expand, sizes);
                }
            }
        }
        if remaining == 0 {
            break;
        }
        passes += 1;
        if passes >= MAX_EXPANSION_PASSES {
            tracing::warn!(passes, available, total, "grid expansion did not converge");
            break;
        }
        total = sizes.iter().sum();
        delta = (available - total) / remaining as f64;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/precision.rs"]
mod tests;
