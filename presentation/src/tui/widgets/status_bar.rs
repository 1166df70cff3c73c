//! Status bar widget: mode indicator, command line, key hints and flash messages

use crate::tui::mode::Mode;
use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn hints(mode: Mode) -> &'static str {
        match mode {
            Mode::Normal => "s:start  space:pause  n:next  i:notes  e:export  ::command  ?:help  q:quit",
            Mode::Insert => "Esc:save notes  Enter:newline  Ctrl+C:quit",
            Mode::Command => "Enter:execute  Esc:cancel  help:commands",
            Mode::Confirm => "Reset the session? y:yes  n:no",
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Fill background
        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let mode = self.state.mode;

        // Left: mode indicator
        let mode_span = Span::styled(
            format!(" {} ", mode.indicator()),
            Style::default()
                .fg(Color::Black)
                .bg(mode.color())
                .add_modifier(Modifier::BOLD),
        );
        let mode_width = mode_span.width() as u16;
        buf.set_line(area.x, area.y, &Line::from(mode_span), mode_width);

        // The command line takes the rest of the bar while typing
        if mode == Mode::Command {
            let line = Line::from(vec![
                Span::raw(" :"),
                Span::raw(self.state.command_input.as_str()),
                Span::styled("▏", Style::default().fg(Color::Yellow)),
            ]);
            buf.set_line(
                area.x + mode_width,
                area.y,
                &line,
                area.width.saturating_sub(mode_width),
            );
            return;
        }

        // Flash message or key hints on the right
        let right_text = match (&self.state.flash_message, mode) {
            (_, Mode::Confirm) => Self::hints(mode).to_string(),
            (Some((flash, _)), _) => flash.clone(),
            (None, _) => Self::hints(mode).to_string(),
        };
        let right_span = Span::styled(
            right_text,
            Style::default().fg(Color::White).bg(Color::DarkGray),
        );

        // Right-aligned, clipped on narrow terminals
        let right_width = right_span.width() as u16;
        let right_x = area
            .right()
            .saturating_sub(right_width + 1)
            .max(area.x + mode_width + 1);
        buf.set_line(
            right_x,
            area.y,
            &Line::from(right_span),
            area.right().saturating_sub(right_x),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::rendered_text;

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(state).render(area, &mut buf);
        rendered_text(&buf)
    }

    #[test]
    fn test_normal_mode_hints() {
        let state = TuiState::new();
        let content = render(&state);
        assert!(content.starts_with("NORMAL"));
        assert!(content.contains("?:help"));
    }

    #[test]
    fn test_flash_replaces_hints() {
        let mut state = TuiState::new();
        state.set_flash("已复制汇总到剪贴板！");
        let content = render(&state);
        assert!(content.contains("已复制汇总到剪贴板！"));
        assert!(!content.contains("?:help"));
    }

    #[test]
    fn test_command_line_is_echoed() {
        let mut state = TuiState::new();
        state.prefill_command("roster 8");
        let content = render(&state);
        assert!(content.starts_with("COMMAND"));
        assert!(content.contains(":roster8▏"));
    }

    #[test]
    fn test_confirm_prompt_wins_over_flash() {
        let mut state = TuiState::new();
        state.set_flash("something");
        state.mode = Mode::Confirm;
        assert!(render(&state).contains("Resetthesession?"));
    }
}
