use ratatui::layout::Rect;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits the body into the query input line and the list below it.
pub fn split_body(body: Rect) -> (Rect, Rect) {
    let query_height = body.height.min(3);
    let query = Rect {
        height: query_height,
        ..body
    };
    let list = Rect {
        y: body.y + query_height,
        height: body.height.saturating_sub(query_height),
        ..body
    };
    (query, list)
}
