//! Notes pad

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const NOTES_PLACEHOLDER: &str = "记录亮点、反问、待定问题或下一步行动点…";
pub const NOTES_TIP: &str = "建议在总结前整理出：结论、2–3个数据点、落地动作与KPI。";

const CURSOR: char = '▏';

pub struct NotesWidget<'a> {
    text: &'a str,
    /// Byte offset of the cursor while editing
    cursor: Option<usize>,
}

impl<'a> NotesWidget<'a> {
    /// Saved notes, read-only
    pub fn saved(text: &'a str) -> Self {
        Self { text, cursor: None }
    }

    /// The edit buffer with a cursor
    pub fn editing(text: &'a str, cursor: usize) -> Self {
        Self {
            text,
            cursor: Some(cursor),
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.cursor {
            None if self.text.is_empty() => vec![Line::from(Span::styled(
                NOTES_PLACEHOLDER,
                Style::default().fg(Color::DarkGray),
            ))],
            None => self.text.lines().map(|l| Line::from(l.to_string())).collect(),
            Some(cursor) => {
                let cursor = cursor.min(self.text.len());
                let mut text = self.text.to_string();
                if text.is_char_boundary(cursor) {
                    text.insert(cursor, CURSOR);
                } else {
                    text.push(CURSOR);
                }
                text.split('\n').map(|l| Line::from(l.to_string())).collect()
            }
        }
    }
}

impl<'a> Widget for NotesWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.cursor.is_some() {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::White)
        };
        let title = if self.cursor.is_some() {
            " 📋 便签/要点 (Esc 保存) "
        } else {
            " 📋 便签/要点 (i 编辑) "
        };

        // Follow the cursor line when the pad outgrows the panel
        let lines = self.lines();
        let visible = area.height.saturating_sub(2) as usize;
        let scroll = match self.cursor {
            Some(_) => lines.len().saturating_sub(visible),
            None => 0,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .title_bottom(Line::from(format!(" {} ", NOTES_TIP)).fg(Color::DarkGray))
            .style(border);

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll as u16, 0))
            .render(area, buf);
    }
}
