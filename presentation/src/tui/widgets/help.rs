//! Help overlay widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const KEYS: &[(&str, &str)] = &[
    ("s", "Start the session (draws the speaking order)"),
    ("space / p", "Pause or resume the countdown"),
    ("n", "Next phase"),
    ("+ / -", "Setup: change the selected row. Running: ±1 minute"),
    ("R", "Reset to setup (asks first)"),
    ("h / l", "Previous / next speaker"),
    ("j / k", "Select setup row or scoring row"),
    ("Tab / S-Tab", "Select criterion"),
    ("1-5", "Rate the selected cell"),
    ("Enter", "Rename the selected participant"),
    ("c", "Next case"),
    ("r", "Draw roles"),
    ("i", "Edit notes (Esc saves)"),
    ("e", "Copy the JSON summary to the clipboard"),
    ("g", "Glossary and one-minute script"),
    ("q / Ctrl+C", "Quit"),
];

const COMMANDS: &[(&str, &str)] = &[
    (":start  :pause  :next  :reset", "Lifecycle"),
    (":time +1 | -1", "Adjust the running countdown"),
    (":case [id]", "Select or cycle the case"),
    (":roster <3-12>", "Resize the roster (names reset)"),
    (":name <id> <name>", "Rename a participant"),
    (":dur <phase> <min|+n|-n>", "Phase duration (reading, self, discussion, summary)"),
    (":rate <id> <criterion> <1-5>", "Rate (logic, data, collab, guide, business)"),
    (":speaker next|prev", "Move through the speaking order"),
    (":roles  :notes <text>  :export", "Roles, notes, clipboard"),
    (":help  :quit", ""),
];

/// Widget for rendering help overlay
pub struct HelpWidget;

impl HelpWidget {
    pub fn new() -> Self {
        Self
    }

    fn build_help_text() -> Vec<Line<'static>> {
        let heading = Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD);

        let mut lines = vec![
            Line::from(Span::styled("Keyboard Shortcuts", heading)),
            Line::from(""),
        ];
        lines.extend(KEYS.iter().map(|(key, text)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", key), Style::default().fg(Color::Yellow)),
                Span::raw(*text),
            ])
        }));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Commands", heading)));
        lines.push(Line::from(""));
        lines.extend(COMMANDS.iter().map(|(command, text)| {
            Line::from(vec![
                Span::styled(format!("{:<32}", command), Style::default().fg(Color::Green)),
                Span::raw(*text),
            ])
        }));

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press ? or ESC to close",
            Style::default().fg(Color::DarkGray),
        )));
        lines
    }
}

impl Widget for HelpWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Self::build_help_text())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .style(Style::default().fg(Color::Cyan)),
            )
            .wrap(Wrap { trim: true });

        paragraph.render(area, buf);
    }
}

impl Default for HelpWidget {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::rendered_text;

    #[test]
    fn test_help_lists_keys_and_commands() {
        let area = Rect::new(0, 0, 120, 40);
        let mut buf = Buffer::empty(area);
        HelpWidget::new().render(area, &mut buf);

        let content = rendered_text(&buf);
        assert!(content.contains("KeyboardShortcuts"));
        assert!(content.contains(":roster<3-12>"));
        assert!(content.contains("Press?orESCtoclose"));
    }
}
