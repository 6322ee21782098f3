use crossterm::event::{Event as CrosstermEvent, KeyEventKind, MouseButton as CtButton, MouseEventKind};

use crate::element::{find_element, Content, Element};
use crate::event::{Event, Key, Modifiers};
use crate::hit::{hit_test, hit_test_focusable};
use crate::layout::LayoutResult;

/// Tracks which element is currently focused and converts raw terminal
/// events into targeted [`Event`]s.
#[derive(Debug, Default)]
pub struct FocusState {
    focused: Option<String>,
}

impl FocusState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently focused element ID.
    pub fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    /// Programmatically focus an element by ID.
    /// Returns true if focus changed.
    pub fn focus(&mut self, id: &str) -> bool {
        if self.focused.as_deref() == Some(id) {
            return false;
        }
        self.focused = Some(id.to_string());
        true
    }

    /// Clear focus.
    /// Returns true if there was something focused.
    pub fn blur(&mut self) -> bool {
        self.focused.take().is_some()
    }

    /// Focus the next focusable element (Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_next(&mut self, root: &Element) -> Option<String> {
        self.focus_step(root, 1)
    }

    /// Focus the previous focusable element (Shift+Tab navigation).
    /// Returns the newly focused element ID if focus changed.
    pub fn focus_prev(&mut self, root: &Element) -> Option<String> {
        self.focus_step(root, -1)
    }

    fn focus_step(&mut self, root: &Element, step: i32) -> Option<String> {
        let focusable = collect_focusable(root);
        if focusable.is_empty() {
            return None;
        }

        let len = focusable.len() as i32;
        let new_focus = match &self.focused {
            Some(current) => match focusable.iter().position(|id| id == current) {
                Some(i) => focusable[((i as i32 + step).rem_euclid(len)) as usize].clone(),
                None => focusable[0].clone(),
            },
            None => {
                if step > 0 {
                    focusable[0].clone()
                } else {
                    focusable[focusable.len() - 1].clone()
                }
            }
        };

        if self.focused.as_ref() != Some(&new_focus) {
            log::debug!("focus moved to {new_focus}");
            self.focused = Some(new_focus.clone());
            Some(new_focus)
        } else {
            None
        }
    }

    /// Process raw crossterm events and produce high-level targeted events.
    ///
    /// Key presses are targeted at the focused element; Tab/BackTab move
    /// focus; mouse clicks focus the focusable element under the cursor and
    /// blur the previous one, while clicks landing inside the focused
    /// element's own subtree keep its focus.
    pub fn process_events(
        &mut self,
        raw: &[CrosstermEvent],
        root: &Element,
        layout: &LayoutResult,
    ) -> Vec<Event> {
        let mut events = Vec::new();

        for raw_event in raw {
            match raw_event {
                CrosstermEvent::Key(key_event) => {
                    if key_event.kind != KeyEventKind::Press {
                        continue;
                    }

                    let key: Key = key_event.code.into();
                    let modifiers: Modifiers = key_event.modifiers.into();

                    match key {
                        Key::Tab => {
                            self.shift_focus(root, 1, &mut events);
                        }
                        Key::BackTab => {
                            self.shift_focus(root, -1, &mut events);
                        }
                        _ => events.push(Event::Key {
                            target: self.focused.clone(),
                            key,
                            modifiers,
                        }),
                    }
                }

                CrosstermEvent::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::Down(button) => {
                        self.handle_mouse_down(
                            mouse.column,
                            mouse.row,
                            button,
                            root,
                            layout,
                            &mut events,
                        );
                    }
                    MouseEventKind::Moved => {
                        events.push(Event::MouseMove {
                            x: mouse.column,
                            y: mouse.row,
                        });
                    }
                    _ => {}
                },

                CrosstermEvent::Resize(width, height) => {
                    events.push(Event::Resize {
                        width: *width,
                        height: *height,
                    });
                }

                _ => {}
            }
        }

        events
    }

    fn shift_focus(&mut self, root: &Element, step: i32, events: &mut Vec<Event>) {
        let old = self.focused.clone();
        if let Some(new) = self.focus_step(root, step) {
            if let Some(old) = old {
                events.push(Event::Blur { target: old });
            }
            events.push(Event::Focus { target: new });
        }
    }

    fn handle_mouse_down(
        &mut self,
        x: u16,
        y: u16,
        button: CtButton,
        root: &Element,
        layout: &LayoutResult,
        events: &mut Vec<Event>,
    ) {
        let click_target = hit_test(layout, root, x, y);

        match hit_test_focusable(layout, root, x, y) {
            Some(new) => {
                if self.focused.as_ref() != Some(&new) {
                    if let Some(old) = self.focused.replace(new.clone()) {
                        events.push(Event::Blur { target: old });
                    }
                    log::debug!("focus moved to {new} (click)");
                    events.push(Event::Focus { target: new });
                }
            }
            None => {
                // A click on a descendant of the focused element (an option
                // row in its open list, say) keeps the focus; anything else
                // outside blurs it.
                let inside_focused = match (&self.focused, &click_target) {
                    (Some(focused), Some(target)) => is_within(root, focused, target),
                    _ => false,
                };
                if !inside_focused {
                    if let Some(old) = self.focused.take() {
                        events.push(Event::Blur { target: old });
                    }
                }
            }
        }

        events.push(Event::Click {
            target: click_target,
            x,
            y,
            button: button.into(),
        });
    }
}

/// All focusable element IDs in tree order.
pub fn collect_focusable(root: &Element) -> Vec<String> {
    let mut out = Vec::new();
    collect_focusable_into(root, &mut out);
    out
}

fn collect_focusable_into(element: &Element, out: &mut Vec<String>) {
    if element.focusable {
        out.push(element.id.clone());
    }
    if let Content::Children(children) = &element.content {
        for child in children {
            collect_focusable_into(child, out);
        }
    }
}

fn is_within(root: &Element, ancestor_id: &str, id: &str) -> bool {
    find_element(root, ancestor_id)
        .map(|el| find_element(el, id).is_some())
        .unwrap_or(false)
}
