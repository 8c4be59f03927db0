//! Exact-filter picker
//!
//! Lists the status/priority/district style choices the active view offers.
//! Selecting one replaces any existing filter on the same field; the first
//! row clears everything.

use crate::action::Action;
use crate::component::Component;
use crate::query::FieldFilter;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct FilterDialog {
    /// (field, value) pairs offered by the active view.
    pub options: Vec<(String, String)>,
    /// Filters currently in effect (to mark active rows).
    pub active: Vec<FieldFilter>,
    pub selected_index: usize,
    pub list_state: ListState,
}

impl Default for FilterDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            options: Vec::new(),
            active: Vec::new(),
            selected_index: 0,
            list_state,
        }
    }

    pub fn set_options(&mut self, options: Vec<(String, String)>, active: &[FieldFilter]) {
        self.options = options;
        self.active = active.to_vec();
        self.selected_index = 0;
        self.list_state.select(Some(0));
    }

    /// `None` means the "clear filters" row.
    pub fn get_selected(&self) -> Option<(&str, &str)> {
        if self.selected_index == 0 {
            None
        } else {
            self.options
                .get(self.selected_index - 1)
                .map(|(f, v)| (f.as_str(), v.as_str()))
        }
    }

    fn is_active(&self, field: &str, value: &str) -> bool {
        self.active
            .iter()
            .any(|f| f.field == field && f.value == value)
    }

    fn select_next(&mut self) {
        if self.selected_index < self.options.len() {
            self.selected_index += 1;
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn select_prev(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for FilterDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('f') => Some(Action::CloseModal),
            KeyCode::Enter => match self.get_selected() {
                Some((field, value)) => Some(Action::SetFilter {
                    field: field.to_string(),
                    value: value.to_string(),
                }),
                None => Some(Action::ClearFilters),
            },
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_prev();
                Some(Action::ModalUp)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                Some(Action::ModalDown)
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup_width = 44u16.min(area.width.saturating_sub(4));
        let content_height = self.options.len() as u16 + 3;
        let popup_height = (content_height + 6)
            .min(area.height.saturating_sub(2))
            .max(10);

        let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
        let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
        let popup_area = Rect::new(x, y, popup_width, popup_height);

        frame.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(popup_area);

        let mut items: Vec<ListItem> = vec![ListItem::new(Line::from(vec![
            Span::styled(
                if self.active.is_empty() { "● " } else { "  " },
                Style::default().fg(Color::Green),
            ),
            Span::styled("Clear filters", Style::default().fg(Color::DarkGray)),
        ]))];

        for (field, value) in &self.options {
            let active = self.is_active(field, value);
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    if active { "● " } else { "  " },
                    Style::default().fg(Color::Green),
                ),
                Span::styled(
                    format!("{}: {}", field, value),
                    if active {
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::White)
                    },
                ),
            ])));
        }

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Filter ")
                    .title_style(
                        Style::default()
                            .fg(Color::Magenta)
                            .add_modifier(Modifier::BOLD),
                    )
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Blue)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(list, chunks[0], &mut self.list_state);

        let help = Paragraph::new(Line::from(vec![
            Span::styled(" Enter ", Style::default().fg(Color::Yellow)),
            Span::raw("Apply  "),
            Span::styled(" j/k ", Style::default().fg(Color::Cyan)),
            Span::raw("Navigate  "),
            Span::styled(" Esc/f ", Style::default().fg(Color::Yellow)),
            Span::raw("Cancel"),
        ]))
        .alignment(ratatui::layout::Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[1]);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_row_clears_then_options_follow() {
        let mut dialog = FilterDialog::new();
        dialog.set_options(
            vec![
                ("status".to_string(), "Open".to_string()),
                ("status".to_string(), "Resolved".to_string()),
            ],
            &[],
        );

        assert!(dialog.get_selected().is_none());
        dialog.select_next();
        assert_eq!(dialog.get_selected(), Some(("status", "Open")));
        dialog.select_next();
        dialog.select_next(); // clamped at the last row
        assert_eq!(dialog.get_selected(), Some(("status", "Resolved")));
    }
}
