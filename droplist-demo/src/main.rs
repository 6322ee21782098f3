//! Select widget demo.
//!
//! Two selects over the same five-entry catalog: one single-select holding
//! an optional value, one multi-select holding an ordered list. The page
//! state lives here; the widgets emit change events and this loop applies
//! them and re-renders.
//!
//! Tab focuses a select, Enter/Space opens it, Up/Down move the highlight,
//! Enter commits, Escape closes. Click the × to clear; in the multi select
//! click a value chip to remove it. `q` (with nothing focused) quits.

use std::fs::File;
use std::io;

use droplist::{
    Color, Edges, Element, Event, FocusState, Key, Select, SelectOption, Selection, Size, Style,
    Terminal,
};
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn catalog() -> Vec<SelectOption> {
    vec![
        SelectOption::new("First", 1),
        SelectOption::new("Second", 2),
        SelectOption::new("Third", 3),
        SelectOption::new("Fourth", 4),
        SelectOption::new("Fifth", 5),
    ]
}

fn describe(value: &Selection) -> String {
    match value {
        Selection::Single(Some(option)) => option.label.clone(),
        Selection::Single(None) => "(none)".to_string(),
        Selection::Multiple(values) if values.is_empty() => "(none)".to_string(),
        Selection::Multiple(values) => values
            .iter()
            .map(|option| option.label.as_str())
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn build_page(
    single: &Select,
    single_value: &Selection,
    multi: &Select,
    multi_value: &Selection,
    focus: &FocusState,
) -> Element {
    Element::col()
        .width(Size::Fill)
        .height(Size::Fill)
        .style(Style::new().background(Color::oklch(0.15, 0.01, 250.0)))
        .padding(Edges::all(2))
        .gap(1)
        .child(Element::text("Select Widget Demo").style(Style::new().bold()))
        .child(
            Element::text("Tab to focus, Enter/Space to open, Up/Down to move, q to quit")
                .style(Style::new().dim()),
        )
        .child(Element::text(""))
        .child(Element::text("Single select:"))
        .child(single.build(single_value, focus.focused() == Some(single.id())))
        .child(Element::text(format!("Selected: {}", describe(single_value))))
        .child(Element::text(""))
        .child(Element::text("Multiple select:"))
        .child(multi.build(multi_value, focus.focused() == Some(multi.id())))
        .child(Element::text(format!("Selected: {}", describe(multi_value))))
}

fn main() -> io::Result<()> {
    if let Ok(log_file) = File::create("droplist-demo.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let options = catalog();
    let mut single = Select::new("single", options.clone()).with_placeholder("Pick one...");
    let mut multi = Select::new("multi", options.clone()).with_placeholder("Pick any...");

    let mut single_value = Selection::Single(options.first().cloned());
    let mut multi_value = Selection::Multiple(Vec::new());

    let mut term = Terminal::new()?;
    let mut focus = FocusState::new();

    loop {
        let root = build_page(&single, &single_value, &multi, &multi_value, &focus);
        term.render(&root)?;

        let raw = term.poll(None)?;
        let events = focus.process_events(&raw, &root, term.layout());

        for change in single.process_events(&events, &single_value, term.layout()) {
            single_value = change.value;
        }
        for change in multi.process_events(&events, &multi_value, term.layout()) {
            multi_value = change.value;
        }

        for event in &events {
            if let Event::Key {
                target,
                key,
                modifiers,
            } = event
            {
                if modifiers.ctrl && *key == Key::Char('c') {
                    return Ok(());
                }
                if target.is_none() && matches!(key, Key::Char('q') | Key::Escape) {
                    return Ok(());
                }
            }
        }
    }
}
