//! Setup panel: case, roster size, phase durations and names

use crate::tui::state::{SetupRow, setup_rows};
use panel_domain::Session;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct SetupWidget<'a> {
    session: &'a Session,
    selected: usize,
}

impl<'a> SetupWidget<'a> {
    pub fn new(session: &'a Session, selected: usize) -> Self {
        Self { session, selected }
    }

    fn row_line(&self, row: SetupRow, selected: bool) -> Line<'a> {
        let (label, value) = match row {
            SetupRow::Case => ("案例".to_string(), self.session.case().title.to_string()),
            SetupRow::Roster => (
                "人数".to_string(),
                format!("{} 人", self.session.roster().len()),
            ),
            SetupRow::Duration(phase) => (
                phase.display_name().to_string(),
                format!(
                    "{} 分钟",
                    self.session.durations().minutes(phase).unwrap_or_default()
                ),
            ),
            SetupRow::Participant(id) => (
                format!("#{}", id),
                self.session
                    .roster()
                    .name_of(id)
                    .unwrap_or_default()
                    .to_string(),
            ),
        };

        let marker = if selected { "▶ " } else { "  " };
        let value_style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{:<8}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(value, value_style),
        ])
    }
}

impl<'a> Widget for SetupWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = setup_rows(self.session);
        let mut lines: Vec<Line> = Vec::with_capacity(rows.len() + 2);
        for (index, row) in rows.iter().enumerate() {
            if matches!(row, SetupRow::Participant(_))
                && !matches!(rows.get(index.wrapping_sub(1)), Some(SetupRow::Participant(_)))
            {
                lines.push(Line::from(Span::styled(
                    "  参会者（Enter 改名）",
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines.push(self.row_line(*row, index == self.selected));
        }

        // Keep the selection visible on short terminals
        let inner_height = area.height.saturating_sub(2) as usize;
        let scroll = (self.selected + 2).saturating_sub(inner_height);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 📝 选择案例 & 参会信息 ")
            .title_bottom(Line::from(" j/k 选择 · +/- 调整 · s 开始 ").fg(Color::DarkGray))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::rendered_text;
    use panel_domain::{Case, PhaseDurations};

    #[test]
    fn test_setup_lists_settings_and_names() {
        let session = Session::new(
            Case::default_case(),
            3,
            PhaseDurations::new(5, 3, 12, 2),
        );
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        SetupWidget::new(&session, 1).render(area, &mut buf);

        let content = rendered_text(&buf);
        assert!(content.contains("3人"));
        assert!(content.contains("12分钟"));
        assert!(content.contains("#3同学3"));
        assert!(content.contains("▶人数"));
    }
}
