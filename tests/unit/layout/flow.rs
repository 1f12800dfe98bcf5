use super::*;
use crate::foundation::core::Insets;
use crate::layout::PrecisionData;

#[derive(Default)]
struct Node {
    sizes: Sizes,
    insets: Insets,
    bounds: Rect,
    flow: Option<Flow>,
    children: Vec<Node>,
}

fn leaf(min_width: f64, width: f64, height: f64) -> Node {
    let pref = Size::new(width, height);
    Node {
        sizes: Sizes::new(Size::new(min_width, height), pref, default_max_size(pref)),
        ..Node::default()
    }
}

fn container(flow: Flow, width: f64, height: f64, children: Vec<Node>) -> Node {
    Node {
        flow: Some(flow),
        bounds: Rect::new(0.0, 0.0, width, height),
        children,
        ..Node::default()
    }
}

impl Layoutable for Node {
    fn compute_sizes(&mut self, hint: Size) -> Sizes {
        match self.flow {
            Some(flow) => flow.compute_sizes(self, hint),
            None => self.sizes,
        }
    }

    fn layout_children(&mut self) -> Vec<&mut dyn Layoutable> {
        self.children
            .iter_mut()
            .map(|child| child as &mut dyn Layoutable)
            .collect()
    }

    fn layout_data(&self) -> Option<&PrecisionData> {
        None
    }

    fn set_layout_data(&mut self, _data: PrecisionData) {}

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

fn lay_out(node: &mut Node) {
    if let Some(flow) = node.flow {
        flow.layout(node);
    }
}

#[test]
fn children_wrap_onto_a_new_line() {
    let mut node = container(
        Flow::new(5.0, 5.0),
        100.0,
        100.0,
        vec![
            leaf(40.0, 40.0, 10.0),
            leaf(40.0, 40.0, 10.0),
            leaf(40.0, 40.0, 10.0),
        ],
    );
    lay_out(&mut node);
    assert_eq!(node.children[0].bounds, Rect::new(0.0, 0.0, 40.0, 10.0));
    assert_eq!(node.children[1].bounds, Rect::new(45.0, 0.0, 85.0, 10.0));
    assert_eq!(node.children[2].bounds, Rect::new(0.0, 15.0, 40.0, 25.0));
}

#[test]
fn unconstrained_sizes_keep_everything_on_one_line() {
    let mut node = container(
        Flow::new(5.0, 5.0),
        0.0,
        0.0,
        vec![leaf(40.0, 40.0, 10.0), leaf(30.0, 40.0, 12.0), leaf(20.0, 40.0, 10.0)],
    );
    node.insets = Insets::uniform(2.0);
    let sizes = node.compute_sizes(NO_HINT_SIZE);
    assert_eq!(sizes.pref, Size::new(134.0, 16.0));
    assert_eq!(sizes.min, Size::new(44.0, 16.0));
    assert_eq!(sizes.max, default_max_size(sizes.pref));
}

#[test]
fn width_hint_makes_the_flow_wrap() {
    let mut node = container(
        Flow::new(0.0, 0.0),
        0.0,
        0.0,
        vec![leaf(50.0, 50.0, 10.0), leaf(50.0, 50.0, 10.0)],
    );
    let sizes = node.compute_sizes(Size::new(60.0, NO_HINT));
    assert_eq!(sizes.pref, Size::new(50.0, 20.0));
}

#[test]
fn wide_child_is_narrowed_to_the_line() {
    let mut node = container(Flow::default(), 50.0, 50.0, vec![leaf(20.0, 80.0, 10.0)]);
    lay_out(&mut node);
    assert_eq!(node.children[0].bounds, Rect::new(0.0, 0.0, 50.0, 10.0));
}

#[test]
fn child_never_shrinks_below_its_minimum() {
    let mut node = container(Flow::default(), 50.0, 50.0, vec![leaf(60.0, 80.0, 10.0)]);
    lay_out(&mut node);
    assert_eq!(node.children[0].bounds, Rect::new(0.0, 0.0, 60.0, 10.0));
}

#[test]
fn insets_offset_the_first_line() {
    let mut node = container(Flow::default(), 100.0, 100.0, vec![leaf(10.0, 10.0, 10.0)]);
    node.insets = Insets::new(3.0, 4.0, 0.0, 0.0);
    lay_out(&mut node);
    assert_eq!(node.children[0].bounds, Rect::new(3.0, 4.0, 13.0, 14.0));
}
