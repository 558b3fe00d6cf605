// Host-side tests for the small page-state models: contact form, scroll
// affordances, cursor follower and project browser.

use portfolio_core::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::new();
    form.set(Field::Name, "Ada");
    form.set(Field::Email, "ada@example.com");
    form.set(Field::Subject, "Hello");
    form.set(Field::Message, "Nice site.");
    form
}

#[test]
fn contact_empty_message_is_an_error_and_keeps_values() {
    let mut form = filled();
    form.set(Field::Message, "");
    assert_eq!(
        form.begin_submit(),
        Err(ContactError::MissingField("message"))
    );
    assert_eq!(form.status(), FormStatus::Error);
    assert!(!form.is_submitting());
    assert_eq!(form.fields().name, "Ada");
    assert_eq!(form.fields().email, "ada@example.com");
}

#[test]
fn contact_whitespace_counts_as_empty() {
    let mut form = filled();
    form.set(Field::Name, "   \n");
    assert_eq!(form.begin_submit(), Err(ContactError::MissingField("name")));
}

#[test]
fn contact_subject_is_optional() {
    let mut form = filled();
    form.set(Field::Subject, "");
    assert_eq!(form.begin_submit(), Ok(()));
    assert!(form.is_submitting());
}

#[test]
fn contact_success_clears_fields() {
    let mut form = filled();
    form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(ContactError::Busy));
    form.finish_submit();
    assert_eq!(form.status(), FormStatus::Success);
    assert!(!form.is_submitting());
    assert_eq!(form.fields(), &ContactFields::default());
}

#[test]
fn contact_valid_retry_clears_error_status() {
    let mut form = filled();
    form.set(Field::Email, "");
    assert!(form.begin_submit().is_err());
    assert_eq!(form.status(), FormStatus::Error);

    form.set(Field::Email, "ada@example.com");
    assert_eq!(form.begin_submit(), Ok(()));
    assert_eq!(form.status(), FormStatus::Idle);
    assert!(form.is_submitting());
}

#[test]
fn contact_finish_without_submit_is_ignored() {
    let mut form = filled();
    form.finish_submit();
    assert_eq!(form.status(), FormStatus::Idle);
    assert_eq!(form.fields().name, "Ada");
}

#[test]
fn contact_field_names() {
    for f in Field::ALL {
        assert_eq!(Field::from_name(f.name()), Some(f));
    }
    assert_eq!(Field::from_name("phone"), None);
}

#[test]
fn scroll_hints() {
    let fits = ScrollState::measure(ScrollMetrics {
        scroll_top: 0.0,
        client_height: 800.0,
        scroll_height: 800.0,
    });
    assert!(!fits.scrollable);
    assert!(!fits.show_up_hint() && !fits.show_down_hint());

    let top = ScrollState::measure(ScrollMetrics {
        scroll_top: 0.0,
        client_height: 800.0,
        scroll_height: 2000.0,
    });
    assert!(top.scrollable && top.at_top && !top.at_bottom);
    assert!(!top.show_up_hint() && top.show_down_hint());

    // Within the 5px slack of the bottom.
    let bottom = ScrollState::measure(ScrollMetrics {
        scroll_top: 1196.0,
        client_height: 800.0,
        scroll_height: 2000.0,
    });
    assert!(bottom.at_bottom && !bottom.at_top);
    assert!(bottom.show_up_hint() && !bottom.show_down_hint());
}

#[test]
fn cursor_snaps_then_eases() {
    let mut c = CursorFollower::default();
    c.pointer_moved(100.0, 50.0);
    assert_eq!(c.pos, glam::Vec2::new(100.0, 50.0));

    c.pointer_moved(200.0, 50.0);
    c.step();
    assert!((c.pos.x - 140.0).abs() < 1e-4);
    for _ in 0..60 {
        c.step();
    }
    assert!((c.pos.x - 200.0).abs() < 1e-3);
}

#[test]
fn cursor_scales_and_transforms() {
    let mut c = CursorFollower::default();
    c.pointer_moved(20.0, 30.0);
    assert_eq!(c.dot_transform(), "translate3d(16.0px, 26.0px, 0) scale(1)");
    assert_eq!(c.ring_transform(), "translate3d(4.0px, 14.0px, 0) scale(1)");

    c.hovering_link = true;
    assert_eq!(c.dot_scale(), 1.5);
    assert_eq!(c.ring_scale(), 1.5);
    c.clicked = true;
    assert_eq!(c.dot_scale(), 0.75);
    assert_eq!(c.ring_scale(), 1.1);
}

fn browser() -> ProjectBrowser {
    ProjectBrowser::new(
        ["web", "ml", "web", "web", "game", "ml", "web"]
            .into_iter()
            .map(String::from)
            .collect(),
    )
}

#[test]
fn projects_paginate_by_three() {
    let mut b = browser();
    assert_eq!(b.total_pages(), 3);
    assert_eq!(b.visible(), vec![0, 1, 2]);
    b.set_page(3);
    assert_eq!(b.visible(), vec![6]);
    b.set_page(99);
    assert_eq!(b.page(), 3);
    b.set_page(0);
    assert_eq!(b.page(), 1);
}

#[test]
fn projects_filter_resets_page() {
    let mut b = browser();
    b.set_page(2);
    b.set_filter("Web".parse().unwrap());
    assert_eq!(b.page(), 1);
    assert_eq!(b.matching(), vec![0, 2, 3, 6]);
    assert_eq!(b.total_pages(), 2);

    b.set_filter("nothing".parse().unwrap());
    assert!(b.visible().is_empty());
    assert_eq!(b.total_pages(), 0);
    b.set_page(4);
    assert_eq!(b.page(), 1);
}

#[test]
fn projects_prev_next_clamp_at_the_ends() {
    let mut b = browser();
    assert!(!b.has_prev() && b.has_next());
    b.prev();
    assert_eq!(b.page(), 1);
    b.next();
    b.next();
    assert_eq!(b.page(), 3);
    assert!(b.has_prev() && !b.has_next());
    b.next();
    assert_eq!(b.page(), 3);
    b.prev();
    assert_eq!(b.page(), 2);

    b.set_filter("game".parse().unwrap());
    assert!(!b.has_prev() && !b.has_next());
    b.next();
    assert_eq!(b.page(), 1);
}

#[test]
fn filter_parsing() {
    assert_eq!("all".parse::<Filter>().unwrap(), Filter::All);
    assert_eq!("".parse::<Filter>().unwrap(), Filter::All);
    assert_eq!(
        " ML ".parse::<Filter>().unwrap(),
        Filter::Category("ml".into())
    );
}
