use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, split_body};
use crate::ui::theme::{
    EMPTY_TEXT, GLOBAL_BORDER, LIST_ID, LIST_TEXT, QUERY_PLACEHOLDER, QUERY_TEXT,
    SELECTED_HIGHLIGHT,
};
use crate::ui::viewmodel::ViewModel;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, view: &ViewModel) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(view), header);
    frame.render_widget(Footer::new().widget(footer), footer);

    let (query_area, list_area) = split_body(body);
    draw_query_line(frame, view, query_area);
    draw_item_list(frame, view, list_area);
}

fn draw_query_line(frame: &mut Frame<'_>, view: &ViewModel, area: Rect) {
    let line = match &view.query {
        Some(query) => Line::from(Span::styled(
            query.clone(),
            Style::default().fg(QUERY_TEXT),
        )),
        None => Line::from(Span::styled(
            "type to filter",
            Style::default()
                .fg(QUERY_PLACEHOLDER)
                .add_modifier(Modifier::ITALIC),
        )),
    };

    let widget = Paragraph::new(line).block(
        Block::default()
            .title(" Filter ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    );
    frame.render_widget(widget, area);

    // Place the terminal cursor at the end of the query text while a
    // filter is being edited.
    if let Some(query) = &view.query {
        if area.width > 2 && area.height > 2 {
            let max_x = area.width.saturating_sub(2);
            let x = area.x + 1 + (query.chars().count() as u16).min(max_x.saturating_sub(1));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

fn draw_item_list(frame: &mut Frame<'_>, view: &ViewModel, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    if view.matched == 0 {
        let empty = Paragraph::new(Line::from(Span::styled(
            "no items match",
            Style::default().fg(EMPTY_TEXT).add_modifier(Modifier::DIM),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<ListItem> = view
        .items
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:>4}  ", item.id), Style::default().fg(LIST_ID)),
                Span::styled(item.name.clone(), Style::default().fg(LIST_TEXT)),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(SELECTED_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    list_state.select(view.cursor);
    frame.render_stateful_widget(list, area, &mut list_state);
}
