use droplist::{
    layout, render_to_buffer, Buffer, Color, Element, Rect, Select, SelectOption, Selection, Style,
};

fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let result = layout(root, Rect::from_size(width, height));
    let mut buf = Buffer::new(width, height);
    render_to_buffer(root, &result, &mut buf);
    buf
}

fn row_text(buf: &Buffer, y: u16, len: u16) -> String {
    (0..len).map(|x| buf.get(x, y).unwrap().char).collect()
}

#[test]
fn test_text_is_painted_at_its_rect() {
    let root = Element::col()
        .id("root")
        .child(Element::text("hello").id("a"))
        .child(Element::text("world").id("b"));

    let buf = render(&root, 10, 4);

    assert_eq!(row_text(&buf, 0, 5), "hello");
    assert_eq!(row_text(&buf, 1, 5), "world");
    // Untouched cells keep the blank default.
    assert_eq!(buf.get(6, 0).unwrap().char, ' ');
}

#[test]
fn test_background_fills_the_rect() {
    let bg = Color::rgb(10, 20, 30);
    let root = Element::col()
        .id("root")
        .width(droplist::Size::Fixed(4))
        .height(droplist::Size::Fixed(2))
        .style(Style::new().background(bg));

    let buf = render(&root, 10, 4);

    assert_eq!(buf.get(3, 1).unwrap().bg, bg.to_rgb());
    assert_eq!(buf.get(4, 1).unwrap().bg, droplist::Rgb::new(0, 0, 0));
}

#[test]
fn test_focused_style_is_applied_when_focused() {
    let base = Color::rgb(1, 1, 1);
    let hot = Color::rgb(200, 200, 200);
    let make = |focused| {
        Element::text("x")
            .id("x")
            .style(Style::new().background(base))
            .style_focused(Style::new().background(hot))
            .focused(focused)
    };

    let buf = render(&make(false), 5, 2);
    assert_eq!(buf.get(0, 0).unwrap().bg, base.to_rgb());

    let buf = render(&make(true), 5, 2);
    assert_eq!(buf.get(0, 0).unwrap().bg, hot.to_rgb());
}

#[test]
fn test_selected_option_renders_bold() {
    let options = vec![
        SelectOption::new("First", 1),
        SelectOption::new("Second", 2),
    ];
    let mut select = Select::new("sel", options.clone());
    select.open();
    let value = Selection::Single(Some(options[1].clone()));

    let root = select.build(&value, false);
    let result = layout(&root, Rect::from_size(40, 10));
    let mut buf = Buffer::new(40, 10);
    render_to_buffer(&root, &result, &mut buf);

    let row0 = result.get(&select.option_id(0)).unwrap();
    let row1 = result.get(&select.option_id(1)).unwrap();

    // Row text starts one cell in (row padding).
    assert_eq!(buf.get(row0.x + 1, row0.y).unwrap().char, 'F');
    assert!(!buf.get(row0.x + 1, row0.y).unwrap().style.bold);
    assert_eq!(buf.get(row1.x + 1, row1.y).unwrap().char, 'S');
    assert!(buf.get(row1.x + 1, row1.y).unwrap().style.bold);
}

#[test]
fn test_open_list_paints_over_later_siblings() {
    let options = vec![
        SelectOption::new("First", 1),
        SelectOption::new("Second", 2),
    ];
    let mut select = Select::new("sel", options);
    select.open();

    let root = Element::col()
        .id("page")
        .child(select.build(&Selection::Single(None), false))
        .child(Element::text("UNDERNEATH").id("below"));

    let result = layout(&root, Rect::from_size(40, 10));
    let mut buf = Buffer::new(40, 10);
    render_to_buffer(&root, &result, &mut buf);

    // The sibling occupies the same row as the first option, but the
    // overlay is painted after it.
    let row0 = *result.get(&select.option_id(0)).unwrap();
    let below = *result.get("below").unwrap();
    assert_eq!(row0.y, below.y);
    assert_eq!(buf.get(row0.x + 1, row0.y).unwrap().char, 'F');
}

#[test]
fn test_buffer_diff_reports_changed_cells_only() {
    let mut a = Buffer::new(4, 2);
    let b = a.clone();

    a.set(2, 1, droplist::buffer::Cell::new('z'));

    let changes: Vec<_> = a.diff(&b).collect();
    assert_eq!(changes.len(), 1);
    let (x, y, cell) = changes[0];
    assert_eq!((x, y), (2, 1));
    assert_eq!(cell.char, 'z');
}
