//! Help dialog showing all keyboard shortcuts

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

#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

fn entry(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<12}", key),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(description.to_string()),
    ])
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ))
}

impl HelpDialog {
    fn lines() -> Vec<Line<'static>> {
        vec![
            section("Views"),
            entry("Tab / ]", "Next view"),
            entry("BackTab / [", "Previous view"),
            Line::from(""),
            section("Table"),
            entry("j/k or ↓/↑", "Move row"),
            entry("g / G", "First / last row"),
            entry("h / l", "Previous / next page"),
            entry("< / >", "First / last page"),
            entry("1..9", "Sort by column n (again to flip)"),
            entry("/", "Search (type to narrow, Esc to finish)"),
            entry("f", "Exact filters"),
            entry("c", "Clear exact filters"),
            entry("s", "Page size"),
            entry("x", "Export filtered rows to CSV"),
            entry("Enter", "Record details"),
            Line::from(""),
            section("Records"),
            entry("a", "Add record (current view)"),
            entry("t", "Assign selected issue as task"),
            entry("R", "Reload task board (tasks view)"),
            entry("m", "Compose SMS (SMS view)"),
            Line::from(""),
            section("Session"),
            entry("o", "Sign out"),
            entry("q", "Quit"),
            entry("?", "This help"),
        ]
    }
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let margin = 4;
        let overlay_area = Rect::new(
            area.x + margin,
            area.y + 2,
            area.width.saturating_sub(margin * 2),
            area.height.saturating_sub(4),
        );

        frame.render_widget(Clear, overlay_area);

        let lines = Self::lines();
        let max_scroll = lines.len().saturating_sub(1);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title(" Keyboard Reference ")
                    .title_style(
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, overlay_area);
        Ok(())
    }
}
