// Host-side tests for the gallery tabs/lightbox and spotlight card helpers.

use glam::Vec2;
use portfolio_core::*;

fn gallery() -> GalleryState {
    GalleryState::new(
        ["hackathons", "events", "events", "life", "events"]
            .into_iter()
            .map(String::from)
            .collect(),
    )
}

#[test]
fn gallery_opens_on_events_tab() {
    let g = gallery();
    assert_eq!(g.category(), "events");
    assert_eq!(g.visible(), vec![1, 2, 4]);
    assert!(!g.is_open());
}

#[test]
fn gallery_falls_back_to_first_category() {
    let g = GalleryState::new(vec!["life".into(), "hackathons".into()]);
    assert_eq!(g.category(), "life");
    assert_eq!(g.visible(), vec![0]);
}

#[test]
fn lightbox_only_opens_on_visible_images() {
    let mut g = gallery();
    assert!(!g.select(0));
    assert!(!g.select(99));
    assert_eq!(g.selected(), None);
    assert!(g.select(2));
    assert_eq!(g.selected(), Some(2));
}

#[test]
fn switching_tabs_closes_lightbox() {
    let mut g = gallery();
    g.select(1);
    g.set_category(" Hackathons ");
    assert_eq!(g.category(), "hackathons");
    assert_eq!(g.selected(), None);
    assert_eq!(g.visible(), vec![0]);

    g.set_category("");
    assert_eq!(g.category(), "hackathons");
}

#[test]
fn escape_closes_lightbox_once() {
    let mut g = gallery();
    assert!(!g.handle_key("Escape"));
    g.select(4);
    assert!(!g.handle_key("Enter"));
    assert!(g.is_open());
    assert!(g.handle_key("Escape"));
    assert!(!g.is_open());
    assert!(!g.close());
}

#[test]
fn spotlight_is_relative_to_card_origin() {
    let [x, y, color] =
        spotlight_properties(Vec2::new(130.0, 75.5), Vec2::new(100.0, 50.0), None);
    assert_eq!(x, (MOUSE_X_VAR, "30px".to_string()));
    assert_eq!(y, (MOUSE_Y_VAR, "25.5px".to_string()));
    assert_eq!(color, (COLOR_VAR, "rgba(147, 51, 234, 0.2)".to_string()));
}

#[test]
fn spotlight_color_override() {
    let [_, _, color] = spotlight_properties(Vec2::ZERO, Vec2::ZERO, Some(" #fff "));
    assert_eq!(color.1, "#fff");
    let [_, _, color] = spotlight_properties(Vec2::ZERO, Vec2::ZERO, Some("  "));
    assert_eq!(color.1, "rgba(147, 51, 234, 0.2)");
}
