//! Timer panel: countdown, run state and the phase hint line

use crate::tui::presenter::DEBRIEF_BANNER;
use panel_domain::{Phase, Session};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Remaining seconds at which the clock turns red
const LOW_TIME_SECONDS: u32 = 60;

pub struct TimerWidget<'a> {
    session: &'a Session,
}

impl<'a> TimerWidget<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    fn status_line(&self) -> Line<'static> {
        let phase = self.session.phase();
        let timer = self.session.timer();
        match phase {
            Phase::Setup => Line::from(Span::styled(
                "s 开始 · 时间到将自动进入下一阶段",
                Style::default().fg(Color::DarkGray),
            )),
            Phase::Debrief => Line::from(Span::styled(
                DEBRIEF_BANNER,
                Style::default().fg(Color::Green),
            )),
            _ => {
                let (label, color) = if timer.is_running() {
                    ("运行中", Color::Green)
                } else {
                    ("已暂停", Color::Yellow)
                };
                Line::from(vec![
                    Span::styled(label, Style::default().fg(color)),
                    Span::styled(
                        " · 空格 暂停/开始 · n 下一阶段 · +/- ±1分 · R 重置",
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            }
        }
    }
}

impl<'a> Widget for TimerWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let phase = self.session.phase();
        let timer = self.session.timer();

        let clock_color = if phase.is_timed() && timer.remaining() <= LOW_TIME_SECONDS {
            Color::Red
        } else {
            Color::Yellow
        };

        let lines = vec![
            Line::from(Span::styled(
                timer.display(),
                Style::default().fg(clock_color).add_modifier(Modifier::BOLD),
            )),
            self.status_line(),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" ⏱️ {} ", phase.display_name()))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::{compact, rendered_text};
    use panel_domain::{Case, PhaseDurations};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn render(session: &Session) -> String {
        let area = Rect::new(0, 0, 100, 6);
        let mut buf = Buffer::empty(area);
        TimerWidget::new(session).render(area, &mut buf);
        rendered_text(&buf)
    }

    #[test]
    fn test_setup_shows_reading_preview() {
        let session = Session::new(Case::default_case(), 6, PhaseDurations::default());
        let content = render(&session);
        assert!(content.contains(&session.timer().display()));
        assert!(content.contains(&compact(Phase::Setup.display_name())));
    }

    #[test]
    fn test_running_phase_shows_state() {
        let mut session = Session::new(Case::default_case(), 6, PhaseDurations::default());
        session.start(&mut StdRng::seed_from_u64(1)).unwrap();
        let content = render(&session);
        assert!(content.contains("运行中"));
        assert!(content.contains(&compact(Phase::Reading.display_name())));
    }

    #[test]
    fn test_debrief_shows_banner() {
        let mut session = Session::new(Case::default_case(), 6, PhaseDurations::default());
        session.start(&mut StdRng::seed_from_u64(1)).unwrap();
        while session.phase() != Phase::Debrief {
            session.advance();
        }
        let content = render(&session);
        assert!(content.contains("已进入复盘"));
    }
}
