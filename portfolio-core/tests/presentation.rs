use portfolio_core::{
    status_text, MilestoneList, MilestoneRecord, ModalState, Presentation, PresentationConfig,
    Theme, DARK_THEME_CLASS, FALLBACK_LESSON,
};

fn rendered() -> Presentation {
    let mut presentation = Presentation::default();
    presentation.render_cards();
    presentation
}

fn flipped(presentation: &Presentation) -> Vec<bool> {
    presentation.cards().iter().map(|card| card.flipped).collect()
}

#[test]
fn lesson_for_every_listed_role() {
    let journey = MilestoneList::journey();
    for record in journey.records() {
        assert_eq!(journey.lesson_for_role(&record.role), record.lesson);
    }
}

#[test]
fn unknown_roles_fall_back() {
    let journey = MilestoneList::journey();
    for role in ["", "Uber", "uber - operations", "Java House - Barista "] {
        assert_eq!(journey.lesson_for_role(role), FALLBACK_LESSON);
    }
    assert_eq!(FALLBACK_LESSON, "Every role is a lesson - keep learning.");
}

#[test]
fn render_creates_one_card_per_record_in_order() {
    let mut presentation = Presentation::default();
    assert!(presentation.cards().is_empty());

    let indices: Vec<usize> = presentation.render_cards().iter().map(|card| card.index).collect();
    assert_eq!(indices, (0..presentation.milestones().len()).collect::<Vec<_>>());

    let roles: Vec<&str> = presentation
        .card_views()
        .map(|(_, record)| record.role.as_str())
        .collect();
    let expected: Vec<&str> = presentation
        .milestones()
        .records()
        .iter()
        .map(|record| record.role.as_str())
        .collect();
    assert_eq!(roles, expected);
}

#[test]
fn render_again_replaces_flipped_cards() {
    let mut presentation = rendered();
    presentation.toggle_card(2);
    presentation.reveal_next();

    presentation.render_cards();
    assert_eq!(presentation.cards().len(), 6);
    assert!(flipped(&presentation).iter().all(|flag| !flag));
}

#[test]
fn flipping_one_card_leaves_siblings_alone() {
    let mut presentation = rendered();

    assert_eq!(presentation.toggle_card(1), Some(true));
    assert_eq!(
        flipped(&presentation),
        vec![false, true, false, false, false, false]
    );

    assert_eq!(presentation.toggle_card(4), Some(true));
    assert_eq!(presentation.toggle_card(1), Some(false));
    assert_eq!(
        flipped(&presentation),
        vec![false, false, false, false, true, false]
    );
}

#[test]
fn full_reveal_cycle_matches_list_order() {
    let mut presentation = rendered();
    let len = presentation.milestones().len();
    let start = presentation.cursor();
    let records: Vec<MilestoneRecord> = presentation.milestones().records().to_vec();

    for record in &records {
        let reveal = presentation.reveal_next();
        assert_eq!(reveal.role, record.role);
        assert_eq!(
            presentation.status_text(),
            Some(format!("Next: {} — {}", record.role, record.lesson).as_str())
        );
        assert_eq!(reveal.status, status_text(&record.role, &record.lesson));
    }

    assert_eq!(presentation.cursor() % len, start % len);
    assert_eq!(presentation.cursor(), start + len);
}

#[test]
fn first_three_reveals_follow_the_journey() {
    let mut presentation = rendered();
    let expected = [
        "Java House - Barista",
        "Fremara Solutions - Sales",
        "Nyumbani Concepts - Real Estate",
    ];

    for role in expected {
        presentation.reveal_next();
        let status = presentation.status_text().unwrap_or_default();
        assert!(status.contains(role), "{status} phải nhắc tới {role}");
    }
}

#[test]
fn reveal_flips_target_card_until_settled() {
    let mut presentation = rendered();

    let reveal = presentation.reveal_next();
    let unflip = reveal.unflip.expect("Thẻ 0 đã được render");
    assert_eq!(unflip.index, 0);
    assert_eq!(unflip.after.as_millis(), 2200);
    assert!(flipped(&presentation)[0]);

    presentation.settle_card(unflip.index);
    assert!(flipped(&presentation).iter().all(|flag| !flag));
}

#[test]
fn reveal_wraps_past_the_end() {
    let records = vec![
        MilestoneRecord::new("A", "a.png", "first", "lesson a"),
        MilestoneRecord::new("B", "b.png", "second", "lesson b"),
    ];
    let list = MilestoneList::new(records).expect("Danh sách hợp lệ");
    let mut presentation = Presentation::new(list, PresentationConfig::default());

    let roles: Vec<String> = (0..5).map(|_| presentation.reveal_next().role).collect();
    assert_eq!(roles, ["A", "B", "A", "B", "A"]);
    assert_eq!(presentation.cursor(), 5);
}

#[test]
fn modal_open_close_and_escape() {
    let mut presentation = Presentation::default();
    assert_eq!(presentation.modal(), ModalState::Closed);
    assert_eq!(presentation.modal().css_class(), None);
    assert_eq!(presentation.modal().aria_hidden(), "true");

    presentation.open_modal();
    assert_eq!(presentation.modal().css_class(), Some("show"));
    assert_eq!(presentation.modal().aria_hidden(), "false");

    presentation.close_modal();
    assert_eq!(presentation.modal(), ModalState::Closed);
    assert_eq!(presentation.modal().aria_hidden(), "true");

    presentation.open_modal();
    assert!(presentation.handle_key("Escape"));
    assert_eq!(presentation.modal(), ModalState::Closed);

    // Escape trên hộp thoại đã đóng không đổi gì.
    assert!(presentation.handle_key("Escape"));
    assert_eq!(presentation.modal(), ModalState::Closed);
}

#[test]
fn double_theme_toggle_restores_state() {
    let mut presentation = Presentation::default();
    let initial = presentation.theme();
    assert_eq!(initial, Theme::Light);
    assert_eq!(initial.root_class_toggle(), (DARK_THEME_CLASS, false));
    assert_eq!(initial.aria_pressed(), "false");

    let dark = presentation.toggle_theme();
    assert_eq!(dark.root_class_toggle(), ("dark", true));
    assert_eq!(dark.aria_pressed(), "true");

    let back = presentation.toggle_theme();
    assert_eq!(back, initial);
    assert_eq!(back.root_class_toggle(), initial.root_class_toggle());
    assert_eq!(back.aria_pressed(), initial.aria_pressed());
}

#[test]
fn toggles_are_independent() {
    let mut presentation = rendered();
    presentation.toggle_theme();
    presentation.open_modal();
    presentation.toggle_card(3);
    presentation.reveal_next();

    assert!(presentation.theme().is_dark());
    assert!(presentation.modal().is_open());
    assert_eq!(
        flipped(&presentation),
        vec![true, false, false, true, false, false]
    );
}
