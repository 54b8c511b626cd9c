//! Integration tests for section layout, active-section detection and the
//! smooth-scroll math.

mod common;

use common::*;
use portfolio::nav::{
    self, ACTIVE_WINDOW_BOTTOM, ACTIVE_WINDOW_TOP, HEADER_HEIGHT, ScrollAnimation,
};

#[test]
fn test_section_map_is_cumulative() {
    let map = SectionMap::for_viewport(800.0);

    // 1. The first section starts at the top of the document.
    assert_eq!(map.top(Section::Hero), 0.0);

    // 2. Every later section starts where the previous one ends.
    let mut expected = 0.0;
    for section in Section::ALL {
        assert_eq!(map.top(section), expected);
        expected += map.height(section);
    }
    assert_eq!(map.total_height(), expected);
}

#[test]
fn test_active_section_follows_scroll() {
    let map = SectionMap::for_viewport(800.0);

    // At the top of the page the hero is active.
    assert_eq!(nav::active_section(&map, 0.0, Section::Hero), Section::Hero);

    // Near the about section's top, about wins even though the hero is
    // still partially visible.
    let near_about = map.top(Section::About) - 200.0;
    assert_eq!(
        nav::active_section(&map, near_about, Section::Hero),
        Section::About
    );

    // Deep into the document, contact is active.
    let near_contact = map.top(Section::Contact) + 100.0;
    assert_eq!(
        nav::active_section(&map, near_contact, Section::Projects),
        Section::Contact
    );
}

#[test]
fn test_active_section_window_bounds_are_inclusive() {
    let map = SectionMap::for_viewport(800.0);
    let about_top = map.top(Section::About);

    // Exactly at the lower edge of the window.
    assert_eq!(
        nav::active_section(&map, about_top - ACTIVE_WINDOW_BOTTOM, Section::Hero),
        Section::About
    );
    // Exactly at the upper edge.
    assert_eq!(
        nav::active_section(&map, about_top - ACTIVE_WINDOW_TOP, Section::Hero),
        Section::About
    );
}

#[test]
fn test_active_section_retained_when_nothing_matches() {
    let map = SectionMap::for_viewport(800.0);

    // 350 px down: the hero's top is already above the window, the about
    // section's not yet inside it. The previous value must survive.
    assert_eq!(
        nav::active_section(&map, 350.0, Section::Hero),
        Section::Hero
    );
    assert_eq!(
        nav::active_section(&map, 350.0, Section::Contact),
        Section::Contact
    );
}

#[test]
fn test_scroll_target_accounts_for_header() {
    let map = SectionMap::for_viewport(800.0);

    assert_eq!(
        nav::scroll_target(&map, Section::About),
        map.top(Section::About) - HEADER_HEIGHT
    );
    // The hero target clamps at the top of the document.
    assert_eq!(nav::scroll_target(&map, Section::Hero), 0.0);
}

#[test]
fn test_scroll_progress_is_clamped() {
    assert_eq!(nav::scroll_progress(0.0, 3600.0, 800.0), 0.0);
    assert_eq!(nav::scroll_progress(1400.0, 3600.0, 800.0), 0.5);
    assert_eq!(nav::scroll_progress(2800.0, 3600.0, 800.0), 1.0);
    // Overscroll and degenerate content sizes stay inside [0, 1].
    assert_eq!(nav::scroll_progress(99999.0, 3600.0, 800.0), 1.0);
    assert_eq!(nav::scroll_progress(10.0, 500.0, 800.0), 0.0);
}

#[test]
fn test_ease_out_cubic_shape() {
    assert_eq!(nav::ease_out_cubic(0.0), 0.0);
    assert_eq!(nav::ease_out_cubic(1.0), 1.0);

    let mut previous = 0.0;
    for step in 1..=100 {
        let value = nav::ease_out_cubic(step as f32 / 100.0);
        assert!(value >= previous, "easing must be monotonic");
        previous = value;
    }
}

#[test]
fn test_scroll_animation_reaches_target() {
    let mut anim = ScrollAnimation::new(0.0, 720.0);
    let mut last = 0.0;

    let mut steps = 0;
    while !anim.is_done() {
        let offset = anim.step();
        assert!(offset >= last, "animation must move towards the target");
        last = offset;
        steps += 1;
        assert!(steps < 1000, "animation must terminate");
    }

    assert_eq!(last, 720.0);
    assert_eq!(anim.target(), 720.0);
}
