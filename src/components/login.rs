//! Login screen
//!
//! Full-screen username/password entry shown whenever there is no persisted
//! session.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_popup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Username,
    Password,
}

pub struct LoginComponent {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub error: Option<String>,
}

impl Default for LoginComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginComponent {
    pub fn new() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            focus: LoginField::Username,
            error: None,
        }
    }

    pub fn reset(&mut self) {
        self.username.clear();
        self.password.clear();
        self.focus = LoginField::Username;
        self.error = None;
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }

    fn active_input(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }
}

impl Component for LoginComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter => Some(Action::LoginSubmit),
            KeyCode::Esc => Some(Action::ForceQuit),
            KeyCode::Tab | KeyCode::Down | KeyCode::Up => {
                self.toggle_focus();
                None
            }
            KeyCode::Backspace => {
                self.active_input().pop();
                self.error = None;
                None
            }
            KeyCode::Char(c) => {
                self.active_input().push(c);
                self.error = None;
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(Clear, area);

        let popup_area = centered_popup(area, 52, 13);

        let field_line = |label: &str, shown: String, focused: bool| {
            let marker = if focused { "> " } else { "  " };
            let style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let value = if focused {
                format!("{}_", shown)
            } else {
                shown
            };
            Line::from(vec![
                Span::styled(format!("{}{:<10}", marker, label), style),
                Span::styled(value, Style::default().fg(Color::White)),
            ])
        };

        let masked = "•".repeat(self.password.chars().count());

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Sign in to continue",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            field_line(
                "Username",
                self.username.clone(),
                self.focus == LoginField::Username,
            ),
            field_line("Password", masked, self.focus == LoginField::Password),
            Line::from(""),
        ];

        if let Some(ref error) = self.error {
            lines.push(Line::from(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Sign in  "),
            Span::styled(
                " Tab ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Switch field  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Quit"),
        ]));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" care-tui ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

        frame.render_widget(paragraph, popup_area);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(component: &mut LoginComponent, code: KeyCode) -> Option<Action> {
        component
            .handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_typing_routes_to_the_focused_field() {
        let mut login = LoginComponent::new();
        press(&mut login, KeyCode::Char('a'));
        press(&mut login, KeyCode::Tab);
        press(&mut login, KeyCode::Char('1'));
        press(&mut login, KeyCode::Char('2'));
        press(&mut login, KeyCode::Backspace);

        assert_eq!(login.username, "a");
        assert_eq!(login.password, "1");
    }

    #[test]
    fn test_enter_requests_login() {
        let mut login = LoginComponent::new();
        assert_eq!(press(&mut login, KeyCode::Enter), Some(Action::LoginSubmit));
        assert_eq!(press(&mut login, KeyCode::Esc), Some(Action::ForceQuit));
    }
}
