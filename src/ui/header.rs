use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MATCH_COUNT};
use crate::ui::viewmodel::ViewModel;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &ViewModel) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let count_style = Style::default().fg(MATCH_COUNT);

        let line = Line::from(vec![
            Span::styled("  roster", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{}/{}", view.matched, view.total), count_style),
            Span::styled(" shown", text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
