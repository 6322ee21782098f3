//! Element tree construction for the select widget.

use crate::element::Element;
use crate::types::{Color, Edges, Position, Size, Style};

use super::{Select, Selection};

fn surface() -> Color {
    Color::oklch(0.25, 0.02, 250.0)
}

fn surface_focused() -> Color {
    Color::oklch(0.33, 0.04, 250.0)
}

fn highlight() -> Color {
    Color::oklch(0.45, 0.11, 250.0)
}

fn chip() -> Color {
    Color::oklch(0.35, 0.06, 210.0)
}

impl Select {
    /// Build the widget's element tree for the current frame.
    ///
    /// The returned root carries this widget's ID and is the focusable,
    /// clickable container; the clear affordance, value chips and option
    /// rows are clickable descendants, so hit testing keeps their clicks
    /// from reaching the container's toggle. The open list is an absolute
    /// overlay below the trigger row and takes no layout space.
    pub fn build(&self, value: &Selection, focused: bool) -> Element {
        let trigger = Element::row()
            .gap(1)
            .padding(Edges::symmetric(0, 1))
            .child(self.build_value(value))
            .child(
                Element::text("×")
                    .id(self.clear_id())
                    .clickable(true)
                    .style(Style::new().dim()),
            )
            .child(Element::text("│").style(Style::new().dim()))
            .child(Element::text(if self.is_open() { "▲" } else { "▼" }));

        let mut root = Element::col()
            .id(self.id())
            .focusable(true)
            .clickable(true)
            .focused(focused)
            .style(Style::new().background(surface()))
            .style_focused(Style::new().background(surface_focused()))
            .child(trigger);

        if self.is_open() {
            root = root.child(self.build_list(value));
        }

        root
    }

    fn build_value(&self, value: &Selection) -> Element {
        match value {
            Selection::Single(Some(option)) => Element::text(&option.label),
            Selection::Single(None) => self.build_placeholder(),
            Selection::Multiple(values) if values.is_empty() => self.build_placeholder(),
            Selection::Multiple(values) => {
                let chips = values
                    .iter()
                    .enumerate()
                    .map(|(index, option)| {
                        Element::text(format!("{} ×", option.label))
                            .id(self.chip_id(index))
                            .clickable(true)
                            .style(Style::new().background(chip()))
                    })
                    .collect();
                Element::row().gap(1).children(chips)
            }
        }
    }

    fn build_placeholder(&self) -> Element {
        Element::text(self.placeholder().unwrap_or_default()).style(Style::new().dim())
    }

    fn build_list(&self, value: &Selection) -> Element {
        let rows = self
            .options()
            .iter()
            .enumerate()
            .map(|(index, option)| {
                let mut style = if index == self.highlighted() {
                    Style::new().background(highlight())
                } else {
                    Style::new().background(surface())
                };
                if value.contains(option) {
                    style = style.bold();
                }
                Element::text(&option.label)
                    .id(self.option_id(index))
                    .clickable(true)
                    .width(Size::Fill)
                    .padding(Edges::symmetric(0, 1))
                    .style(style)
            })
            .collect();

        Element::col()
            .position(Position::Absolute)
            .top(1)
            .left(0)
            .style(Style::new().background(surface()))
            .children(rows)
    }
}
