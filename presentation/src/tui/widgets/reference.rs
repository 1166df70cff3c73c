//! Reference overlay: glossary cheat sheet and the one-minute script

use panel_domain::{GLOSSARY, ONE_MINUTE_SCRIPT};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const SCRIPT_TIP: &str = "提示：总结时请做到“结论先行 + 2–3个关键数字 + 落地动作”。";

pub struct ReferenceWidget;

impl ReferenceWidget {
    pub fn new() -> Self {
        Self
    }

    fn build_text() -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![Line::from(Span::styled("📚 术语小抄", heading)), Line::from("")];
        lines.extend(GLOSSARY.iter().map(|entry| {
            Line::from(vec![
                Span::styled(entry.term, Style::default().fg(Color::Yellow)),
                Span::raw(" — "),
                Span::raw(entry.definition),
            ])
        }));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("🗣️ 1分钟口径", heading)));
        lines.push(Line::from(""));
        lines.push(Line::from(ONE_MINUTE_SCRIPT));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            SCRIPT_TIP,
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "g 或 Esc 关闭",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Default for ReferenceWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for ReferenceWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Self::build_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Reference ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
