//! Shared modal form widget
//!
//! Text inputs and left/right-cycling select fields with focus movement and
//! required-field validation. Each list view builds one of these for its
//! add-record dialog; the SMS view rebuilds it per template.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::layout::centered_popup;

#[derive(Debug, Clone)]
pub enum FieldKind {
    Text,
    Select(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct FormField {
    pub label: String,
    pub kind: FieldKind,
    pub value: String,
    pub choice: usize,
    pub required: bool,
}

impl FormField {
    pub fn text(label: &str) -> Self {
        Self {
            label: label.to_string(),
            kind: FieldKind::Text,
            value: String::new(),
            choice: 0,
            required: true,
        }
    }

    pub fn optional_text(label: &str) -> Self {
        let mut field = Self::text(label);
        field.required = false;
        field
    }

    pub fn select(label: &str, options: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            kind: FieldKind::Select(options.iter().map(|o| o.to_string()).collect()),
            value: String::new(),
            choice: 0,
            required: true,
        }
    }

    /// The field's effective value: typed text or the chosen option.
    pub fn current(&self) -> &str {
        match &self.kind {
            FieldKind::Text => &self.value,
            FieldKind::Select(options) => options
                .get(self.choice)
                .map(|s| s.as_str())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    pub title: String,
    pub fields: Vec<FormField>,
    pub focus: usize,
    pub error: Option<String>,
}

impl FormState {
    pub fn new(title: &str, fields: Vec<FormField>) -> Self {
        Self {
            title: title.to_string(),
            fields,
            focus: 0,
            error: None,
        }
    }

    pub fn next_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn prev_field(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if matches!(field.kind, FieldKind::Text) {
                field.value.push(c);
                self.error = None;
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if matches!(field.kind, FieldKind::Text) {
                field.value.pop();
                self.error = None;
            }
        }
    }

    /// Cycle the focused select field; text fields ignore it.
    pub fn cycle(&mut self, step: isize) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if let FieldKind::Select(options) = &field.kind {
                if !options.is_empty() {
                    let len = options.len() as isize;
                    let next = (field.choice as isize + step).rem_euclid(len);
                    field.choice = next as usize;
                }
            }
        }
    }

    /// Value of the field with the given label, empty when absent.
    pub fn value(&self, label: &str) -> String {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.current().to_string())
            .unwrap_or_default()
    }

    /// Required text fields must be filled in. Sets the inline error and
    /// moves focus to the first offender on failure.
    pub fn validate(&mut self) -> bool {
        for (index, field) in self.fields.iter().enumerate() {
            if field.required
                && matches!(field.kind, FieldKind::Text)
                && field.value.trim().is_empty()
            {
                self.error = Some(format!("{} is required", field.label));
                self.focus = index;
                return false;
            }
        }
        self.error = None;
        true
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let height = (self.fields.len() as u16) + 7;
        let popup_area = centered_popup(area, 64, height.max(12));
        frame.render_widget(Clear, popup_area);

        let mut lines = vec![Line::from("")];
        for (index, field) in self.fields.iter().enumerate() {
            let focused = index == self.focus;
            let marker = if focused { "> " } else { "  " };
            let label_style = if focused {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };

            let value_span = match &field.kind {
                FieldKind::Text => {
                    let shown = if focused {
                        format!("{}_", field.value)
                    } else {
                        field.value.clone()
                    };
                    Span::styled(shown, Style::default().fg(Color::White))
                }
                FieldKind::Select(_) => Span::styled(
                    format!("◀ {} ▶", field.current()),
                    Style::default().fg(Color::White),
                ),
            };

            lines.push(Line::from(vec![
                Span::styled(marker, label_style),
                Span::styled(format!("{:<16}", field.label), label_style),
                value_span,
            ]));
        }

        lines.push(Line::from(""));
        if let Some(ref error) = self.error {
            lines.push(Line::from(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red),
            )));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled(
                " Enter ",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Submit  "),
            Span::styled(
                " Tab ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Next field  "),
            Span::styled(
                " ◀/▶ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Choose  "),
            Span::styled(
                " Esc ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("Cancel"),
        ]));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", self.title))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );
        frame.render_widget(paragraph, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> FormState {
        FormState::new(
            "Add New Complaint",
            vec![
                FormField::text("ICno"),
                FormField::select("Priority", &["Low", "Medium", "High"]),
            ],
        )
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut f = form();
        f.next_field();
        assert_eq!(f.focus, 1);
        f.next_field();
        assert_eq!(f.focus, 0);
        f.prev_field();
        assert_eq!(f.focus, 1);
    }

    #[test]
    fn test_text_input_only_touches_text_fields() {
        let mut f = form();
        f.input('7');
        f.input('6');
        assert_eq!(f.value("ICno"), "76");

        f.next_field();
        f.input('x');
        assert_eq!(f.value("Priority"), "Low");
    }

    #[test]
    fn test_select_cycles_with_wraparound() {
        let mut f = form();
        f.next_field();
        f.cycle(1);
        assert_eq!(f.value("Priority"), "Medium");
        f.cycle(-2);
        assert_eq!(f.value("Priority"), "High");
    }

    #[test]
    fn test_validation_flags_empty_required_text() {
        let mut f = form();
        assert!(!f.validate());
        assert_eq!(f.error.as_deref(), Some("ICno is required"));
        assert_eq!(f.focus, 0);

        f.input('1');
        assert!(f.validate());
        assert!(f.error.is_none());
    }
}
