use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly below `anchor`, clamped to the bottom of `bounds`
///
/// The popup keeps the anchor's left edge (plus `x_offset`) and never grows
/// past the anchor's width.
pub fn popup_below_anchor(
    anchor: Rect,
    bounds: Rect,
    width: u16,
    height: u16,
    x_offset: u16,
) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let available = bottom.saturating_sub(popup_y);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset)),
        height: height.min(available),
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}
