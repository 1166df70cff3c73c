//! Case panel: prompt, data and expected deliverables

use panel_domain::Case;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct CaseWidget {
    case: &'static Case,
}

impl CaseWidget {
    pub fn new(case: &'static Case) -> Self {
        Self { case }
    }
}

impl Widget for CaseWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(self.case.prompt),
            Line::from(""),
            Line::from(Span::styled(self.case.data, Style::default().fg(Color::Yellow))),
            Line::from(""),
            Line::from(Span::styled("产出要求", heading)),
        ];
        lines.extend(
            self.case
                .deliverables
                .iter()
                .map(|item| Line::from(format!("• {}", item))),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" 📘 {} ", self.case.title))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
