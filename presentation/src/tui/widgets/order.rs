//! Speaking order panel

use panel_domain::{Phase, Session};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const EMPTY_ORDER: &str = "开始后将自动生成发言顺序。";
pub const STATEMENT_HINT: &str = "提示：个人陈述阶段按顺序依次发言。";

pub struct OrderWidget<'a> {
    session: &'a Session,
}

impl<'a> OrderWidget<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl<'a> Widget for OrderWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let order = self.session.speaking_order();
        let mut lines = Vec::new();

        if order.is_empty() {
            lines.push(Line::from(Span::styled(
                EMPTY_ORDER,
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            let current = order.current_index();
            for (index, name) in order.names(self.session.roster()).into_iter().enumerate() {
                let line = if index == current {
                    Line::from(vec![
                        Span::styled("▶ ", Style::default().fg(Color::Green)),
                        Span::styled(
                            format!("{}. {}", index + 1, name),
                            Style::default()
                                .fg(Color::Green)
                                .add_modifier(Modifier::BOLD),
                        ),
                    ])
                } else {
                    Line::from(format!("  {}. {}", index + 1, name))
                };
                lines.push(line);
            }
            if self.session.phase() == Phase::Statement {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled(
                    STATEMENT_HINT,
                    Style::default().fg(Color::Yellow),
                )));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 👑 发言顺序 ")
            .title_bottom(Line::from(" h/l 上一位/下一位 ").fg(Color::DarkGray))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
