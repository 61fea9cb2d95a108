use scatterview::data::filter::FilterState;
use scatterview::{sample_datasets, DataPoint, Dataset, PlotRenderer, ScatterConfig};

fn renderer() -> PlotRenderer {
    PlotRenderer::initialize(&sample_datasets(), &ScatterConfig::default()).unwrap()
}

fn visibility(r: &PlotRenderer) -> Vec<bool> {
    r.markers().iter().map(|m| m.visible).collect()
}

#[test]
fn all_markers_visible_initially() {
    let r = renderer();
    assert_eq!(r.visible_count(), 6);
}

#[test]
fn filter_is_case_insensitive_substring() {
    let mut r = renderer();
    r.on_filter_input("a");
    assert_eq!(visibility(&r), vec![true, false, false, true, false, false]);
    r.on_filter_input("C");
    assert_eq!(visibility(&r), vec![false, false, true, false, false, true]);
}

#[test]
fn filter_without_match_hides_everything() {
    let mut r = renderer();
    r.on_filter_input("zzz");
    assert_eq!(r.visible_count(), 0);
}

#[test]
fn applying_same_filter_twice_is_idempotent() {
    let mut r = renderer();
    r.on_filter_input("b");
    let once = visibility(&r);
    r.on_filter_input("b");
    assert_eq!(visibility(&r), once);
}

#[test]
fn clearing_filter_restores_all() {
    let mut r = renderer();
    r.on_filter_input("B");
    assert_eq!(r.visible_count(), 2);
    r.on_filter_input("");
    assert_eq!(r.visible_count(), 6);
    assert!(r.filter().is_empty());
}

#[test]
fn filter_leaves_geometry_and_colors_untouched() {
    let mut r = renderer();
    let before: Vec<_> = r.markers().iter().map(|m| (m.center, m.radius, m.color)).collect();
    r.on_filter_input("A");
    let after: Vec<_> = r.markers().iter().map(|m| (m.center, m.radius, m.color)).collect();
    assert_eq!(before, after);
}

#[test]
fn multi_letter_categories_match_inner_substrings() {
    let data = vec![Dataset::new(
        "greek",
        vec![
            DataPoint::new(1.0, 1.0, "Alpha"),
            DataPoint::new(2.0, 2.0, "Beta"),
            DataPoint::new(3.0, 3.0, "Gamma"),
        ],
    )];
    let mut r = PlotRenderer::initialize(&data, &ScatterConfig::default()).unwrap();
    r.on_filter_input("ph");
    assert_eq!(visibility(&r), vec![true, false, false]);
    r.on_filter_input("A");
    assert_eq!(visibility(&r), vec![true, true, true]);
}

#[test]
fn filter_state_matches_everything_when_empty() {
    let f = FilterState::default();
    assert!(f.matches("anything"));
    let f = FilterState::new("x");
    assert!(!f.matches("A"));
    assert_eq!(f.text(), "x");
}
