//! Integration tests for the portfolio page's view-state transitions:
//! menu, modal selection, toast generations, pointer tracking and the
//! scroll orchestration. Tasks returned by `update` are never executed
//! here; only the state transitions are observed.

#![cfg(feature = "gui")]

mod common;

use common::*;
use iced::{Point, Size};
use portfolio::gui::AppState;
use portfolio::gui::screens::Screen;
use portfolio::gui::screens::portfolio::{PortfolioMessage, PortfolioScreen};
use portfolio::nav;

/// A page backed by an empty asset directory.
fn test_screen() -> (PortfolioScreen, AppState, tempfile::TempDir) {
    let (config, dir) = temp_site_config();
    let mut state = AppState::new(config);
    let mut screen = PortfolioScreen::new(&state);
    // The runtime delivers the real window size through a resize event.
    let _ = screen.update(
        PortfolioMessage::WindowResized(Size::new(1280.0, 800.0)),
        &mut state,
    );
    (screen, state, dir)
}

#[test]
fn test_menu_toggles_and_closes_on_navigation() {
    let (mut screen, mut state, _dir) = test_screen();
    assert!(!screen.view_state().menu_open);

    // 1. Toggle open, toggle closed.
    let _ = screen.update(PortfolioMessage::MenuToggled, &mut state);
    assert!(screen.view_state().menu_open);
    let _ = screen.update(PortfolioMessage::MenuToggled, &mut state);
    assert!(!screen.view_state().menu_open);

    // 2. Navigating from the open menu closes it.
    let _ = screen.update(PortfolioMessage::MenuToggled, &mut state);
    let _ = screen.update(PortfolioMessage::NavClicked(Section::About), &mut state);
    assert!(!screen.view_state().menu_open);
}

#[test]
fn test_project_selection_and_close() {
    let (mut screen, mut state, _dir) = test_screen();
    assert_eq!(screen.view_state().selected_project, None);

    // 1. Clicking a card selects exactly that project.
    let _ = screen.update(PortfolioMessage::ProjectSelected(2), &mut state);
    assert_eq!(screen.view_state().selected_project, Some(2));

    // 2. The close button clears the selection.
    let _ = screen.update(PortfolioMessage::ModalClosed, &mut state);
    assert_eq!(screen.view_state().selected_project, None);

    // 3. A backdrop click sends the same message and clears it too.
    let _ = screen.update(PortfolioMessage::ProjectSelected(1), &mut state);
    assert_eq!(screen.view_state().selected_project, Some(1));
    let _ = screen.update(PortfolioMessage::ModalClosed, &mut state);
    assert_eq!(screen.view_state().selected_project, None);
}

#[test]
fn test_toast_generations() {
    let (mut screen, mut state, _dir) = test_screen();
    assert!(!screen.view_state().toast.visible());

    // 1. Copying shows the toast immediately.
    let _ = screen.update(PortfolioMessage::CopyEmail, &mut state);
    assert!(screen.view_state().toast.visible());
    let first = screen.view_state().toast.seq();

    // 2. A second copy bumps the generation.
    let _ = screen.update(PortfolioMessage::CopyEmail, &mut state);
    let second = screen.view_state().toast.seq();
    assert!(second > first);

    // 3. The stale expiry is ignored; the current one dismisses.
    let _ = screen.update(PortfolioMessage::ToastExpired(first), &mut state);
    assert!(screen.view_state().toast.visible());
    let _ = screen.update(PortfolioMessage::ToastExpired(second), &mut state);
    assert!(!screen.view_state().toast.visible());
}

#[test]
fn test_pointer_tracking() {
    let (mut screen, mut state, _dir) = test_screen();

    let _ = screen.update(
        PortfolioMessage::PointerMoved(Point::new(123.0, 456.0)),
        &mut state,
    );
    assert_eq!(screen.view_state().pointer, Point::new(123.0, 456.0));
}

#[test]
fn test_scroll_updates_active_section_and_progress() {
    let (mut screen, mut state, _dir) = test_screen();
    let map = *screen.section_map();
    let content = map.total_height();

    // 1. Near the about section's top, the tracker switches to it.
    let _ = screen.update(
        PortfolioMessage::Scrolled {
            offset: map.top(Section::About) - 100.0,
            viewport: 800.0,
            content,
        },
        &mut state,
    );
    assert_eq!(screen.view_state().active_section, Section::About);
    assert!(screen.view_state().scroll_progress > 0.0);

    // 2. In a dead zone between windows, the previous value is retained.
    let _ = screen.update(
        PortfolioMessage::Scrolled {
            offset: 350.0,
            viewport: 800.0,
            content,
        },
        &mut state,
    );
    assert_eq!(screen.view_state().active_section, Section::About);

    // 3. At the bottom the progress saturates at 1.
    let _ = screen.update(
        PortfolioMessage::Scrolled {
            offset: content - 800.0,
            viewport: 800.0,
            content,
        },
        &mut state,
    );
    assert_eq!(screen.view_state().scroll_progress, 1.0);
}

#[test]
fn test_navigation_starts_and_finishes_scroll_animation() {
    let (mut screen, mut state, _dir) = test_screen();
    assert!(screen.scroll_animation().is_none());

    // 1. A nav click starts an animation aimed below the header.
    let _ = screen.update(PortfolioMessage::NavClicked(Section::Projects), &mut state);
    let target = nav::scroll_target(screen.section_map(), Section::Projects);
    assert_eq!(screen.scroll_animation().map(|anim| anim.target()), Some(target));

    // 2. Frame ticks run it to completion, then it is torn down.
    let mut frames = 0;
    while screen.scroll_animation().is_some() {
        let _ = screen.update(PortfolioMessage::ScrollFrame, &mut state);
        frames += 1;
        assert!(frames < 1000, "animation must terminate");
    }
}

#[test]
fn test_typewriter_ticks_advance_the_hero_line() {
    let (mut screen, mut state, _dir) = test_screen();
    assert_eq!(screen.typewriter_text(), "");

    let _ = screen.update(PortfolioMessage::TypewriterTick, &mut state);
    assert_eq!(screen.typewriter_text(), "D");
    let _ = screen.update(PortfolioMessage::TypewriterTick, &mut state);
    assert_eq!(screen.typewriter_text(), "De");
}
