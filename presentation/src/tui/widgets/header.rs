//! Header widget: case, phase and countdown at a glance

use panel_domain::{Phase, Session};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct HeaderWidget<'a> {
    session: &'a Session,
}

impl<'a> HeaderWidget<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl<'a> Widget for HeaderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phase = self.session.phase();
        let (dot, dot_color) = if self.session.timer().is_running() {
            ("◉ ", Color::Green)
        } else {
            ("○ ", Color::DarkGray)
        };
        let phase_color = match phase {
            Phase::Setup => Color::Cyan,
            Phase::Debrief => Color::Green,
            _ => Color::Yellow,
        };

        let line = Line::from(vec![
            Span::styled(dot, Style::default().fg(dot_color)),
            Span::styled(
                phase.display_name(),
                Style::default().fg(phase_color).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(self.session.timer().display(), Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled(self.session.case().title, Style::default().fg(Color::White)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 群面模拟 panel-sim ")
            .style(Style::default().fg(Color::White));

        Paragraph::new(line).block(block).render(area, buf);
    }
}
