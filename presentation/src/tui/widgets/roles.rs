//! Role assignment panel

use panel_domain::{Role, Session};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub const EMPTY_ROLES: &str = "按 r 随机分配主持、计时、记录、质疑等角色。";

pub struct RolesWidget<'a> {
    session: &'a Session,
}

impl<'a> RolesWidget<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

fn role_color(role: Role) -> Color {
    match role {
        Role::Leader => Color::Magenta,
        Role::Timekeeper => Color::Cyan,
        Role::Scribe => Color::Blue,
        Role::DevilsAdvocate => Color::Red,
        Role::Member => Color::DarkGray,
    }
}

impl<'a> Widget for RolesWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let roles = self.session.roles();
        let lines: Vec<Line> = if roles.is_empty() {
            vec![Line::from(Span::styled(
                EMPTY_ROLES,
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            roles
                .iter()
                .map(|(name, role)| {
                    Line::from(vec![
                        Span::raw(format!("{} ", name)),
                        Span::styled(role.label(), Style::default().fg(role_color(role))),
                    ])
                })
                .collect()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 🎭 角色分配 ")
            .title_bottom(Line::from(" r 随机 ").fg(Color::DarkGray))
            .style(Style::default().fg(Color::White));

        Paragraph::new(lines)
            .block(block)
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
        let area = Rect::new(0, 0, 60, 12);
        let mut buf = Buffer::empty(area);
        RolesWidget::new(session).render(area, &mut buf);
        rendered_text(&buf)
    }

    #[test]
    fn test_placeholder_before_draw() {
        let session = Session::new(Case::default_case(), 5, PhaseDurations::default());
        assert!(render(&session).contains(EMPTY_ROLES));
    }

    #[test]
    fn test_every_participant_listed_after_draw() {
        let mut session = Session::new(Case::default_case(), 5, PhaseDurations::default());
        session.assign_roles(&mut StdRng::seed_from_u64(3));
        let content = render(&session);
        for (name, role) in session.roles().iter() {
            assert!(content.contains(&format!("{}{}", name, compact(role.label()))));
        }
    }
}
