//! Scoring grid: one row per participant, one column per criterion

use panel_domain::{Criterion, Session, truncate_chars};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

/// Longest name shown in the grid before it is cut
const NAME_WIDTH: usize = 8;

pub const SCORING_LEGEND: &str = "评分维度：逻辑结构、数据敏感度、协作推进、引导能力、商业判断。";

pub struct ScoringWidget<'a> {
    session: &'a Session,
    row: usize,
    col: usize,
}

impl<'a> ScoringWidget<'a> {
    pub fn new(session: &'a Session, row: usize, col: usize) -> Self {
        Self { session, row, col }
    }
}

impl<'a> Widget for ScoringWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let heading = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let header = Row::new(
            std::iter::once(Cell::from("参与者"))
                .chain(Criterion::ALL.iter().map(|c| Cell::from(c.label())))
                .chain(std::iter::once(Cell::from("平均"))),
        )
        .style(heading);

        let scores = self.session.scores();
        let rows = self.session.roster().iter().enumerate().map(|(index, p)| {
            let mut cells = vec![Cell::from(truncate_chars(&p.name, NAME_WIDTH))];
            for (col, criterion) in Criterion::ALL.iter().enumerate() {
                let text = scores
                    .get(p.id, *criterion)
                    .map(|r| r.to_string())
                    .unwrap_or_else(|| "·".to_string());
                let style = if index == self.row && col == self.col {
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                cells.push(Cell::from(text).style(style));
            }
            let average = scores.average(p.id);
            let average_style = if average.is_rated() {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            cells.push(Cell::from(average.to_string()).style(average_style));

            let row = Row::new(cells);
            if index == self.row {
                row.style(Style::default().add_modifier(Modifier::BOLD))
            } else {
                row
            }
        });

        let widths = std::iter::once(Constraint::Min(10))
            .chain(Criterion::ALL.iter().map(|_| Constraint::Length(5)))
            .chain(std::iter::once(Constraint::Length(5)));

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" ⭐ 评分（1-5分） ")
            .title_bottom(Line::from(format!(" {} ", SCORING_LEGEND)).fg(Color::DarkGray))
            .style(Style::default().fg(Color::White));

        Table::new(rows, widths)
            .header(header)
            .block(block)
            .render(area, buf);
    }
}
