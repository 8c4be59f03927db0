//! Page-size picker
//!
//! Single-choice list over the offered page sizes; the size in effect is
//! marked.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::centered_popup;
use crate::query::PAGE_SIZE_CHOICES;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

pub struct PageSizeDialog {
    pub current: usize,
    pub selected_index: usize,
    pub list_state: ListState,
}

impl Default for PageSizeDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl PageSizeDialog {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            current: PAGE_SIZE_CHOICES[0],
            selected_index: 0,
            list_state,
        }
    }

    pub fn set_current(&mut self, current: usize) {
        self.current = current;
        self.selected_index = PAGE_SIZE_CHOICES
            .iter()
            .position(|&s| s == current)
            .unwrap_or(0);
        self.list_state.select(Some(self.selected_index));
    }

    pub fn get_selected(&self) -> usize {
        PAGE_SIZE_CHOICES
            .get(self.selected_index)
            .copied()
            .unwrap_or(PAGE_SIZE_CHOICES[0])
    }

    fn select_next(&mut self) {
        if self.selected_index + 1 < PAGE_SIZE_CHOICES.len() {
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

impl Component for PageSizeDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('s') => Some(Action::CloseModal),
            KeyCode::Enter => Some(Action::SetPageSize(self.get_selected())),
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
        let popup_area = centered_popup(area, 30, PAGE_SIZE_CHOICES.len() as u16 + 4);
        frame.render_widget(Clear, popup_area);

        let items: Vec<ListItem> = PAGE_SIZE_CHOICES
            .iter()
            .map(|&size| {
                let active = size == self.current;
                ListItem::new(Line::from(vec![
                    Span::styled(
                        if active { "● " } else { "  " },
                        Style::default().fg(Color::Green),
                    ),
                    Span::styled(
                        format!("{} entries", size),
                        if active {
                            Style::default()
                                .fg(Color::Cyan)
                                .add_modifier(Modifier::BOLD)
                        } else {
                            Style::default().fg(Color::White)
                        },
                    ),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Rows per Page ")
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

        frame.render_stateful_widget(list, popup_area, &mut self.list_state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_starts_on_the_size_in_effect() {
        let mut dialog = PageSizeDialog::new();
        dialog.set_current(50);
        assert_eq!(dialog.get_selected(), 50);

        dialog.select_next();
        assert_eq!(dialog.get_selected(), 100);
        dialog.select_next();
        assert_eq!(dialog.get_selected(), 100);
    }
}
