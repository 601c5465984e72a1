// Host-side tests for the mascot guide state machine.

use folio_core::constants::{MASCOT_MESSAGE_DURATION, MASCOT_STARTUP_DELAY};
use folio_core::*;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

fn run(guide: &mut MascotGuide, total: Duration) {
    let mut t = Duration::ZERO;
    while t < total {
        guide.tick(TICK);
        t += TICK;
    }
}

fn visible_guide() -> MascotGuide {
    let mut g = MascotGuide::default();
    run(&mut g, MASCOT_STARTUP_DELAY);
    g
}

#[test]
fn appears_after_startup_delay_without_input() {
    let mut g = MascotGuide::default();
    assert_eq!(g.state(), MascotState::Hidden);
    run(&mut g, MASCOT_STARTUP_DELAY - TICK);
    assert_eq!(g.state(), MascotState::Hidden);
    assert!(g.tick(TICK));
    assert_eq!(g.state(), MascotState::VisibleSilent);
}

#[test]
fn no_message_before_interaction() {
    let mut g = visible_guide();
    assert!(g.show_hint());
    assert!(!g.on_section_change(1));
    assert_eq!(g.state(), MascotState::VisibleSilent);
    assert!(g.show_hint());
}

#[test]
fn message_shows_after_interaction_then_hides() {
    let mut g = visible_guide();
    g.on_section_change(1);
    assert!(!g.on_scroll(40.0));
    assert!(g.on_scroll(150.0));
    assert!(!g.on_scroll(400.0));
    assert!(!g.show_hint());

    assert!(g.on_section_change(2));
    assert_eq!(g.state(), MascotState::VisibleSpeaking);
    assert_eq!(g.message(), MASCOT_MESSAGES[2]);
    assert_eq!(g.anchor(), MASCOT_ANCHORS[2]);

    run(&mut g, MASCOT_MESSAGE_DURATION - TICK);
    assert_eq!(g.state(), MascotState::VisibleSpeaking);
    g.tick(TICK);
    assert_eq!(g.state(), MascotState::VisibleSilent);
}

#[test]
fn new_section_restarts_the_countdown() {
    let mut g = visible_guide();
    g.on_scroll(500.0);
    g.on_section_change(1);
    run(&mut g, Duration::from_millis(4000));
    g.on_section_change(2);
    run(&mut g, Duration::from_millis(4000));
    assert_eq!(g.state(), MascotState::VisibleSpeaking);
    assert_eq!(g.section(), 2);
    run(&mut g, Duration::from_millis(1000));
    assert_eq!(g.state(), MascotState::VisibleSilent);
}

#[test]
fn same_section_is_not_a_change() {
    let mut g = visible_guide();
    g.on_scroll(500.0);
    assert!(!g.on_section_change(0));
    assert_eq!(g.state(), MascotState::VisibleSilent);
}

#[test]
fn click_toggles_bubble() {
    let mut g = visible_guide();
    g.on_click();
    assert_eq!(g.state(), MascotState::VisibleSpeaking);
    g.on_click();
    assert_eq!(g.state(), MascotState::VisibleSilent);
}

#[test]
fn change_while_hidden_shows_once_visible() {
    let mut g = MascotGuide::new(Duration::from_millis(1000), Duration::from_millis(3000));
    g.on_scroll(200.0);
    g.on_section_change(3);
    assert_eq!(g.state(), MascotState::Hidden);
    run(&mut g, Duration::from_millis(1000));
    assert_eq!(g.state(), MascotState::VisibleSpeaking);
    assert_eq!(g.message(), MASCOT_MESSAGES[3]);
}

#[test]
fn out_of_range_section_defaults_to_first_entry() {
    let mut g = visible_guide();
    g.on_scroll(500.0);
    g.on_section_change(17);
    assert_eq!(g.message(), MASCOT_MESSAGES[0]);
    assert_eq!(g.anchor(), MASCOT_ANCHORS[0]);
}

#[test]
fn moving_between_sides_clears_the_old_inset() {
    let mut g = visible_guide();
    g.on_section_change(1);
    let props = g.anchor().style_properties();
    assert!(props.contains(&("left", Some("5%".to_string()))));
    assert!(props.contains(&("right", None)));

    g.on_section_change(4);
    let props = g.anchor().style_properties();
    assert!(props.contains(&("bottom", Some("25%".to_string()))));
    assert!(props.contains(&("left", None)));
    assert!(props.contains(&("right", Some("5%".to_string()))));
}
