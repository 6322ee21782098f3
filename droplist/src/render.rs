use crate::buffer::{Buffer, Cell};
use crate::element::{Content, Element};
use crate::layout::LayoutResult;
use crate::text::char_width;
use crate::types::{Position, Rgb};

/// Paint the element tree into the buffer using the computed layout.
///
/// Normal-flow content is painted first; absolute subtrees (dropdown
/// overlays) are deferred and painted afterwards so they end up on top of
/// every static sibling, not just the ones before them in the tree.
pub fn render_to_buffer(root: &Element, layout: &LayoutResult, buf: &mut Buffer) {
    let mut overlays: Vec<(&Element, Rgb, Rgb)> = Vec::new();
    render_element(
        root,
        layout,
        buf,
        Rgb::new(255, 255, 255),
        Rgb::new(0, 0, 0),
        &mut overlays,
    );

    // Overlays can nest further overlays; the queue grows while draining.
    let mut next = 0;
    while next < overlays.len() {
        let (element, fg, bg) = overlays[next];
        next += 1;
        render_element(element, layout, buf, fg, bg, &mut overlays);
    }
}

fn render_element<'a>(
    element: &'a Element,
    layout: &LayoutResult,
    buf: &mut Buffer,
    inherited_fg: Rgb,
    inherited_bg: Rgb,
    overlays: &mut Vec<(&'a Element, Rgb, Rgb)>,
) {
    let Some(rect) = layout.get(&element.id).copied() else {
        return;
    };
    if rect.is_empty() {
        return;
    }

    let style = element.effective_style();
    let fg = style.foreground.map(|c| c.to_rgb()).unwrap_or(inherited_fg);
    let bg = style.background.map(|c| c.to_rgb()).unwrap_or(inherited_bg);

    if style.background.is_some() {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                buf.set(
                    x,
                    y,
                    Cell {
                        char: ' ',
                        fg,
                        bg,
                        style: style.text_style,
                    },
                );
            }
        }
    }

    match &element.content {
        Content::None => {}

        Content::Text(text) => {
            let pad = element.padding;
            let max_width = rect.width.saturating_sub(pad.horizontal()) as usize;
            let mut x = rect.x.saturating_add(pad.left);
            let y = rect.y.saturating_add(pad.top);
            let mut used = 0;

            for ch in text.chars() {
                let w = char_width(ch).max(1);
                if used + w > max_width {
                    break;
                }
                buf.set(
                    x,
                    y,
                    Cell {
                        char: ch,
                        fg,
                        bg,
                        style: style.text_style,
                    },
                );
                x = x.saturating_add(w as u16);
                used += w;
            }
        }

        Content::Children(children) => {
            for child in children {
                if child.position == Position::Absolute {
                    overlays.push((child, fg, bg));
                } else {
                    render_element(child, layout, buf, fg, bg, overlays);
                }
            }
        }
    }
}
