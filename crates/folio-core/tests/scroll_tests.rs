// Host-side tests for scroll progress, section tracking and visibility flags.

use folio_core::constants::SECTION_COUNT;
use folio_core::*;

#[test]
fn section_index_matches_floor_formula_over_full_range() {
    let viewport = 900.0;
    let doc = 5400.0;
    let range: f64 = doc - viewport;
    let mut s = 0.0;
    while s <= range {
        let m = ScrollMetrics::new(s, viewport, doc);
        let raw = ((s / range) * SECTION_COUNT as f64).floor() as usize;
        let expected = raw.min(SECTION_COUNT - 1);
        assert_eq!(section_index(scroll_progress(&m), SECTION_COUNT), expected, "s = {s}");
        s += 7.5;
    }
}

#[test]
fn progress_is_clamped() {
    assert_eq!(scroll_progress(&ScrollMetrics::new(-40.0, 800.0, 4000.0)), 0.0);
    assert_eq!(scroll_progress(&ScrollMetrics::new(9000.0, 800.0, 4000.0)), 1.0);
    let half = scroll_progress(&ScrollMetrics::new(1600.0, 800.0, 4000.0));
    assert!((half - 0.5).abs() < 1e-12);
}

#[test]
fn bottom_of_page_is_last_section() {
    let m = ScrollMetrics::new(3200.0, 800.0, 4000.0);
    assert_eq!(section_index(scroll_progress(&m), 5), 4);
}

#[test]
fn tracker_reports_changes_only() {
    let mut t = SectionTracker::new(5);
    assert_eq!(t.update(&ScrollMetrics::new(10.0, 800.0, 4800.0)), None);
    assert_eq!(
        t.update(&ScrollMetrics::new(900.0, 800.0, 4800.0)),
        Some(SectionChange { from: 0, to: 1 })
    );
    assert_eq!(t.update(&ScrollMetrics::new(950.0, 800.0, 4800.0)), None);
    assert_eq!(
        t.update(&ScrollMetrics::new(0.0, 800.0, 4800.0)),
        Some(SectionChange { from: 1, to: 0 })
    );
    assert_eq!(t.current(), 0);
}

#[test]
fn indicator_appears_after_small_scroll() {
    let mut t = SectionTracker::new(5);
    t.update(&ScrollMetrics::new(80.0, 800.0, 4800.0));
    assert!(!t.view().indicator_visible);
    t.update(&ScrollMetrics::new(120.0, 800.0, 4800.0));
    let view = t.view();
    assert!(view.indicator_visible);
    assert!((view.percent - 3.0).abs() < 1e-9);
}

#[test]
fn navigation_targets_are_bounded() {
    let t = SectionTracker::new(5);
    assert_eq!(t.target(4), Some(4));
    assert_eq!(t.target(5), None);
}

#[test]
fn visibility_is_independent_of_percentage_index() {
    let mut tracker = SectionTracker::new(5);
    let mut vis = SectionVisibility::new(5);
    // Near a boundary the observer can report section 1 before the index moves.
    tracker.update(&ScrollMetrics::new(700.0, 800.0, 4800.0));
    assert!(vis.observe(1, true));
    assert_eq!(tracker.current(), 0);
    assert!(vis.is_visible(1));
    assert!(!vis.observe(1, true));
    assert!(vis.observe(1, false));
    assert!(!vis.observe(9, true));
    assert!(!vis.is_visible(9));
}

#[test]
fn section_table_is_consistent() {
    assert_eq!(SECTIONS.len(), SECTION_COUNT);
    for s in SECTIONS.iter() {
        assert!(s.visibility_threshold > 0.0 && s.visibility_threshold < 1.0);
        assert!(s.dot_color.starts_with('#'));
    }
}
