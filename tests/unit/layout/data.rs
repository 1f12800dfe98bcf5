use super::*;
use crate::foundation::core::{Insets, NO_HINT, Rect, Sizes};

/// Leaf that reports fixed sizes and records the hints it was asked with.
#[derive(Default)]
struct Probe {
    sizes: Sizes,
    hints: Vec<Size>,
    data: Option<PrecisionData>,
}

impl Probe {
    fn new(min: (f64, f64), pref: (f64, f64), max: (f64, f64)) -> Self {
        Self {
            sizes: Sizes::new(min.into(), pref.into(), max.into()),
            ..Self::default()
        }
    }
}

impl Layoutable for Probe {
    fn compute_sizes(&mut self, hint: Size) -> Sizes {
        self.hints.push(hint);
        self.sizes
    }

    fn layout_children(&mut self) -> Vec<&mut dyn Layoutable> {
        Vec::new()
    }

    fn layout_data(&self) -> Option<&PrecisionData> {
        self.data.as_ref()
    }

    fn set_layout_data(&mut self, data: PrecisionData) {
        self.data = Some(data);
    }

    fn bounds(&self) -> Rect {
        Rect::ZERO
    }

    fn set_bounds(&mut self, _bounds: Rect) {}

    fn insets(&self) -> Insets {
        Insets::ZERO
    }
}

#[test]
fn defaults_match_documented_values() {
    let data = PrecisionData::new();
    assert_eq!(data.horizontal_alignment, Alignment::Beginning);
    assert_eq!(data.vertical_alignment, Alignment::Middle);
    assert_eq!(data.horizontal_span, 1);
    assert_eq!(data.vertical_span, 1);
    assert_eq!(data.size_hint, NO_HINT_SIZE);
    assert_eq!(data.min_size, NO_HINT_SIZE);
    assert!(!data.horizontal_grab && !data.vertical_grab);
}

#[test]
fn unhinted_query_caches_pref_or_min() {
    let mut probe = Probe::new((10.0, 5.0), (40.0, 20.0), (100.0, 100.0));
    let mut data = PrecisionData::new();

    data.compute_cache_size(&mut probe, NO_HINT_SIZE, false);
    assert_eq!(data.cache_size, Size::new(40.0, 20.0));
    assert_eq!(data.cache_min_width, 10.0);

    data.compute_cache_size(&mut probe, NO_HINT_SIZE, true);
    assert_eq!(data.cache_size, Size::new(10.0, 5.0));
    assert_eq!(data.cache_min_width, 10.0);
}

#[test]
fn width_hint_is_clamped_between_min_and_max() {
    let mut probe = Probe::new((10.0, 5.0), (40.0, 20.0), (60.0, 100.0));
    let mut data = PrecisionData::new();

    data.compute_cache_size(&mut probe, Size::new(4.0, NO_HINT), false);
    assert_eq!(data.cache_size, Size::new(10.0, 20.0));

    data.compute_cache_size(&mut probe, Size::new(500.0, NO_HINT), false);
    assert_eq!(data.cache_size, Size::new(60.0, 20.0));

    data.compute_cache_size(&mut probe, Size::new(30.0, NO_HINT), false);
    assert_eq!(data.cache_size, Size::new(30.0, 20.0));
}

#[test]
fn explicit_min_width_overrides_child_min_for_clamping() {
    let mut probe = Probe::new((10.0, 5.0), (40.0, 20.0), (60.0, 100.0));
    let mut data = PrecisionData::new().min_width(25.0);
    data.compute_cache_size(&mut probe, Size::new(12.0, NO_HINT), false);
    assert_eq!(data.cache_size.width, 25.0);
    assert_eq!(data.cache_min_width, 25.0);
}

#[test]
fn height_hint_is_clamped_against_height_limits() {
    let mut probe = Probe::new((10.0, 5.0), (40.0, 20.0), (60.0, 30.0));
    let mut data = PrecisionData::new();
    data.compute_cache_size(&mut probe, Size::new(NO_HINT, 2.0), false);
    assert_eq!(data.cache_size.height, 5.0);
    data.compute_cache_size(&mut probe, Size::new(NO_HINT, 80.0), false);
    assert_eq!(data.cache_size.height, 30.0);
}

#[test]
fn size_hint_replaces_pref_and_min_size_raises_it() {
    let mut probe = Probe::new((10.0, 5.0), (40.0, 20.0), (100.0, 100.0));
    let mut data = PrecisionData::new()
        .hint(Size::new(70.0, NO_HINT))
        .min_height(35.0);
    data.compute_cache_size(&mut probe, NO_HINT_SIZE, false);
    assert_eq!(data.cache_size, Size::new(70.0, 35.0));
}

#[test]
fn min_size_does_not_lower_a_larger_value() {
    let mut probe = Probe::new((10.0, 5.0), (40.0, 20.0), (100.0, 100.0));
    let mut data = PrecisionData::new().min(Size::new(15.0, 15.0));
    data.compute_cache_size(&mut probe, NO_HINT_SIZE, false);
    assert_eq!(data.cache_size, Size::new(40.0, 20.0));
}

#[test]
fn cache_computation_is_idempotent() {
    let mut probe = Probe::new((10.0, 5.0), (40.0, 20.0), (100.0, 100.0));
    let mut data = PrecisionData::new().min_width(12.0);
    data.compute_cache_size(&mut probe, Size::new(33.0, NO_HINT), false);
    let first = data.clone();
    data.compute_cache_size(&mut probe, Size::new(33.0, NO_HINT), false);
    assert_eq!(first, data);
    assert_eq!(probe.hints, vec![Size::new(33.0, NO_HINT); 2]);
}

#[test]
fn spans_are_clamped_at_use() {
    let data = PrecisionData::new().span(0, 0);
    assert_eq!(data.clamped_horizontal_span(3), 1);
    assert_eq!(data.clamped_vertical_span(), 1);
    let data = PrecisionData::new().span(9, 4);
    assert_eq!(data.clamped_horizontal_span(3), 3);
    assert_eq!(data.clamped_vertical_span(), 4);
}

#[test]
fn serde_skips_cache_and_fills_defaults() {
    let data: PrecisionData =
        serde_json::from_str(r#"{ "horizontal_span": 2, "horizontal_alignment": "fill" }"#)
            .unwrap();
    assert_eq!(data.horizontal_span, 2);
    assert_eq!(data.horizontal_alignment, Alignment::Fill);
    assert_eq!(data.vertical_alignment, Alignment::Middle);
    assert_eq!(data.size_hint, NO_HINT_SIZE);

    let json = serde_json::to_value(&data).unwrap();
    assert!(json.get("cache_size").is_none());
}
