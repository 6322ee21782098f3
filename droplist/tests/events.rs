use crossterm::event::{
    Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton as CtMouseButton,
    MouseEvent, MouseEventKind,
};
use droplist::{
    hit_test, hit_test_any, hit_test_focusable, layout, Element, Event, FocusState, LayoutResult,
    Rect, Select, SelectOption, Selection,
};

fn create_layout(elements: &[(&str, Rect)]) -> LayoutResult {
    let mut layout = LayoutResult::new();
    for (id, rect) in elements {
        layout.insert(id.to_string(), *rect);
    }
    layout
}

fn catalog() -> Vec<SelectOption> {
    vec![
        SelectOption::new("First", 1),
        SelectOption::new("Second", 2),
        SelectOption::new("Third", 3),
    ]
}

// ============================================================================
// Hit testing
// ============================================================================

#[test]
fn test_hit_test_deepest_clickable_wins() {
    let root = Element::box_()
        .id("root")
        .clickable(true)
        .child(Element::text("Click me").id("btn").clickable(true));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    // Inside btn: the nested control wins, the container never sees it.
    assert_eq!(hit_test(&layout, &root, 15, 11), Some("btn".to_string()));

    // Inside root but outside btn.
    assert_eq!(hit_test(&layout, &root, 5, 5), Some("root".to_string()));

    // Outside everything.
    assert_eq!(hit_test(&layout, &root, 150, 150), None);
}

#[test]
fn test_hit_test_only_clickable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Plain").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("text", Rect::new(10, 10, 30, 3)),
    ]);

    assert_eq!(hit_test(&layout, &root, 15, 11), None);
    assert_eq!(
        hit_test_any(&layout, &root, 15, 11),
        Some("text".to_string())
    );
}

#[test]
fn test_hit_test_focusable() {
    let root = Element::box_()
        .id("root")
        .child(Element::text("Input").id("input").focusable(true))
        .child(Element::text("Plain").id("text"));

    let layout = create_layout(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("input", Rect::new(10, 10, 30, 3)),
        ("text", Rect::new(10, 20, 30, 3)),
    ]);

    assert_eq!(
        hit_test_focusable(&layout, &root, 15, 11),
        Some("input".to_string())
    );
    assert_eq!(hit_test_focusable(&layout, &root, 15, 21), None);
}

#[test]
fn test_clear_affordance_click_is_contained() {
    // The clear button sits inside the clickable container; a click on it
    // must resolve to the button, not the container's toggle.
    let select = Select::new("sel", catalog());
    let root = select.build(&Selection::Single(None), false);
    let result = layout(&root, Rect::from_size(80, 24));

    let clear_rect = *result.get(&select.clear_id()).expect("clear laid out");
    assert_eq!(
        hit_test(&result, &root, clear_rect.x, clear_rect.y),
        Some(select.clear_id())
    );

    // The caret is not clickable itself, so its cells toggle the container.
    let sel_rect = *result.get("sel").expect("select laid out");
    assert_eq!(
        hit_test(&result, &root, sel_rect.x, sel_rect.y),
        Some("sel".to_string())
    );
}

#[test]
fn test_chip_click_is_contained() {
    let options = catalog();
    let select = Select::new("sel", options.clone());
    let value = Selection::Multiple(vec![options[0].clone(), options[1].clone()]);
    let root = select.build(&value, false);
    let result = layout(&root, Rect::from_size(80, 24));

    let chip_rect = *result.get(&select.chip_id(1)).expect("chip laid out");
    assert_eq!(
        hit_test(&result, &root, chip_rect.x, chip_rect.y),
        Some(select.chip_id(1))
    );
}

#[test]
fn test_open_list_wins_over_later_siblings() {
    // The open list is an absolute overlay; content that follows the select
    // in normal flow sits underneath it for both painting and hit testing.
    let mut select = Select::new("sel", catalog());
    select.open();

    let root = Element::col()
        .id("page")
        .child(select.build(&Selection::Single(None), true))
        .child(Element::text("Underneath").id("below").clickable(true));
    let result = layout(&root, Rect::from_size(80, 24));

    let row_rect = *result.get(&select.option_id(0)).expect("row laid out");
    let below_rect = *result.get("below").expect("sibling laid out");
    assert!(row_rect.y == below_rect.y, "overlay should cover the sibling");

    assert_eq!(
        hit_test(&result, &root, row_rect.x, row_rect.y),
        Some(select.option_id(0))
    );
}

// ============================================================================
// Focus state
// ============================================================================

#[test]
fn test_focus_state_focus_blur() {
    let mut focus = FocusState::new();

    assert_eq!(focus.focused(), None);

    assert!(focus.focus("a"));
    assert_eq!(focus.focused(), Some("a"));

    // Focusing the focused element is not a change.
    assert!(!focus.focus("a"));

    assert!(focus.focus("b"));
    assert_eq!(focus.focused(), Some("b"));

    assert!(focus.blur());
    assert_eq!(focus.focused(), None);
    assert!(!focus.blur());
}

#[test]
fn test_focus_next_wraps() {
    let root = Element::col()
        .child(Element::text("One").id("one").focusable(true))
        .child(Element::text("Two").id("two").focusable(true));

    let mut focus = FocusState::new();
    assert_eq!(focus.focus_next(&root), Some("one".to_string()));
    assert_eq!(focus.focus_next(&root), Some("two".to_string()));
    assert_eq!(focus.focus_next(&root), Some("one".to_string()));
    assert_eq!(focus.focus_prev(&root), Some("two".to_string()));
}

#[test]
fn test_tab_emits_blur_and_focus_events() {
    let root = Element::col()
        .child(Element::text("One").id("one").focusable(true))
        .child(Element::text("Two").id("two").focusable(true));
    let result = layout(&root, Rect::from_size(80, 24));

    let mut focus = FocusState::new();
    let tab = CrosstermEvent::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));

    let events = focus.process_events(&[tab.clone()], &root, &result);
    assert_eq!(
        events,
        vec![Event::Focus {
            target: "one".to_string()
        }]
    );

    let events = focus.process_events(&[tab], &root, &result);
    assert_eq!(
        events,
        vec![
            Event::Blur {
                target: "one".to_string()
            },
            Event::Focus {
                target: "two".to_string()
            },
        ]
    );
}

#[test]
fn test_key_events_target_the_focused_element() {
    let root = Element::col().child(Element::text("One").id("one").focusable(true));
    let result = layout(&root, Rect::from_size(80, 24));

    let mut focus = FocusState::new();
    focus.focus("one");

    let enter = CrosstermEvent::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
    let events = focus.process_events(&[enter], &root, &result);
    assert_eq!(events.len(), 1);
    assert!(matches!(
        &events[0],
        Event::Key {
            target: Some(t),
            ..
        } if t == "one"
    ));
}

fn mouse_down(x: u16, y: u16) -> CrosstermEvent {
    CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(CtMouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

#[test]
fn test_click_outside_blurs() {
    let mut select = Select::new("sel", catalog());
    select.open();
    let root = Element::col()
        .id("page")
        .width(droplist::Size::Fixed(80))
        .height(droplist::Size::Fixed(24))
        .child(select.build(&Selection::Single(None), true));
    let result = layout(&root, Rect::from_size(80, 24));

    let mut focus = FocusState::new();
    focus.focus("sel");

    let events = focus.process_events(&[mouse_down(70, 20)], &root, &result);
    assert!(events.contains(&Event::Blur {
        target: "sel".to_string()
    }));
}

#[test]
fn test_click_on_own_list_keeps_focus() {
    // Option rows are not focusable, but they belong to the focused
    // container's subtree: clicking one must not blur it.
    let mut select = Select::new("sel", catalog());
    select.open();
    let root = Element::col()
        .id("page")
        .child(select.build(&Selection::Single(None), true));
    let result = layout(&root, Rect::from_size(80, 24));

    let mut focus = FocusState::new();
    focus.focus("sel");

    let row_rect = *result.get(&select.option_id(1)).expect("row laid out");
    let events = focus.process_events(&[mouse_down(row_rect.x, row_rect.y)], &root, &result);

    assert!(!events.iter().any(|e| matches!(e, Event::Blur { .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        Event::Click {
            target: Some(t),
            ..
        } if *t == select.option_id(1)
    )));
    assert_eq!(focus.focused(), Some("sel"));
}
