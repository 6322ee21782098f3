//! Event handling for the select widget.

use crate::event::{Event, Key};
use crate::layout::LayoutResult;

use super::{Select, Selection, SelectOption};

/// Emitted when an interaction commits a new selection value.
///
/// The widget never mutates the host's value; it emits the value it wants
/// and the host decides what to do with it. One emitted change corresponds
/// to one `onChange` invocation in controlled-component terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectChange {
    /// ID of the widget that produced the change.
    pub target: String,
    /// The requested new selection value.
    pub value: Selection,
}

impl Select {
    /// Process one batch of targeted events against the host's current
    /// `value`, updating interaction state and returning requested changes.
    ///
    /// Events targeted at other elements are ignored; key events in
    /// particular only apply when the target is exactly this widget's
    /// focusable container. The `layout` is needed to resolve hover
    /// coordinates to option rows.
    pub fn process_events(
        &mut self,
        events: &[Event],
        value: &Selection,
        layout: &LayoutResult,
    ) -> Vec<SelectChange> {
        let mut changes = Vec::new();

        for event in events {
            match event {
                Event::Key {
                    target: Some(target),
                    key,
                    modifiers,
                } if *target == self.id() => {
                    if modifiers.ctrl || modifiers.alt {
                        continue;
                    }
                    self.handle_key(*key, value, &mut changes);
                }

                Event::Click {
                    target: Some(target),
                    ..
                } => {
                    self.handle_click(target, value, &mut changes);
                }

                Event::Blur { target } if *target == self.id() => {
                    log::debug!("select {} closed on blur", self.id());
                    self.close();
                }

                Event::MouseMove { x, y } if self.is_open() => {
                    self.handle_hover(*x, *y, layout);
                }

                _ => {}
            }
        }

        changes
    }

    fn handle_key(&mut self, key: Key, value: &Selection, changes: &mut Vec<SelectChange>) {
        match key {
            Key::Enter | Key::Char(' ') => {
                // Toggle, then commit against the pre-toggle state: the
                // highlighted option is selected because the list *was* open
                // when the key went down. Known quirk, kept as is.
                let was_open = self.is_open();
                self.toggle();
                if was_open {
                    // An empty catalog leaves nothing to commit.
                    if let Some(option) = self.options().get(self.highlighted()).cloned() {
                        self.push_change(&option, value, changes);
                    }
                }
            }

            Key::Escape => self.close(),

            Key::Up => {
                if self.is_open() {
                    self.highlight_up();
                } else {
                    // The press that opens the list does not also move the
                    // highlight.
                    self.open();
                }
            }

            Key::Down => {
                if self.is_open() {
                    self.highlight_down();
                } else {
                    self.open();
                }
            }

            _ => {}
        }
    }

    fn handle_click(&mut self, target: &str, value: &Selection, changes: &mut Vec<SelectChange>) {
        if target == self.id() {
            log::debug!("select {} toggled by click, open={}", self.id(), !self.is_open());
            self.toggle();
        } else if target == self.clear_id() {
            // Unconditional, and neither opens nor closes the list.
            changes.push(SelectChange {
                target: self.id().to_string(),
                value: value.cleared(),
            });
        } else if let Some(index) = self.option_index(target) {
            if let Some(option) = self.options().get(index).cloned() {
                self.push_change(&option, value, changes);
            }
            self.close();
        } else if let Some(index) = self.chip_index(target) {
            // Chips index into the selected values, not the catalog. The
            // click is contained: it removes the value without toggling the
            // list.
            if let Selection::Multiple(values) = value {
                if let Some(option) = values.get(index).cloned() {
                    self.push_change(&option, value, changes);
                }
            }
        }
    }

    fn handle_hover(&mut self, x: u16, y: u16, layout: &LayoutResult) {
        for index in 0..self.options().len() {
            if let Some(rect) = layout.get(&self.option_id(index)) {
                if rect.contains(x, y) {
                    self.set_highlighted(index);
                    return;
                }
            }
        }
    }

    fn push_change(
        &self,
        option: &SelectOption,
        value: &Selection,
        changes: &mut Vec<SelectChange>,
    ) {
        // Single mode re-selecting the current value yields no change.
        if let Some(next) = value.toggled(option) {
            log::debug!("select {} change: {:?}", self.id(), next);
            changes.push(SelectChange {
                target: self.id().to_string(),
                value: next,
            });
        }
    }
}
