//! Dashboard view
//!
//! Stat tiles over the other views' collections plus a recent-complaints
//! strip. Holds no table state of its own.

use crate::model::complaint::Complaint;
use crate::model::field::TableRow;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Counts gathered from the other views at draw time.
pub struct DashboardStats {
    pub complaints_total: usize,
    pub complaints_open: usize,
    pub complaints_in_progress: usize,
    pub complaints_resolved: usize,
    pub repairs_pending: usize,
    pub tasks_open: usize,
    pub sms_delivered: usize,
    pub campaigns_active: usize,
}

fn tile(frame: &mut Frame, area: Rect, title: &str, value: String, note: &str, color: Color) {
    let lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            note.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn draw_dashboard(
    frame: &mut Frame,
    area: Rect,
    stats: &DashboardStats,
    recent: &[&Complaint],
    support_number: &str,
) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[0]);

    tile(
        frame,
        top[0],
        "Total Complaints",
        stats.complaints_total.to_string(),
        "This month",
        Color::Cyan,
    );
    tile(
        frame,
        top[1],
        "Open",
        stats.complaints_open.to_string(),
        "Requires attention",
        Color::Yellow,
    );
    tile(
        frame,
        top[2],
        "In Progress",
        stats.complaints_in_progress.to_string(),
        "Being handled",
        Color::Blue,
    );
    tile(
        frame,
        top[3],
        "Resolved",
        stats.complaints_resolved.to_string(),
        "Last 7 days",
        Color::Green,
    );

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(rows[1]);

    tile(
        frame,
        middle[0],
        "Pending Repairs",
        stats.repairs_pending.to_string(),
        "STB/STP units",
        Color::Yellow,
    );
    tile(
        frame,
        middle[1],
        "Open Tasks",
        stats.tasks_open.to_string(),
        "On the board",
        Color::Blue,
    );
    tile(
        frame,
        middle[2],
        "SMS Delivered",
        stats.sms_delivered.to_string(),
        &format!("Support line {}", support_number),
        Color::Green,
    );
    tile(
        frame,
        middle[3],
        "Active Campaigns",
        stats.campaigns_active.to_string(),
        "Running now",
        Color::Magenta,
    );

    // Recent complaints strip.
    let mut lines: Vec<Line> = Vec::new();
    for complaint in recent {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<8}", complaint.id),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!("{:<20}", complaint.user_name),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("{:<13}", complaint.status.to_string()),
                Style::default().fg(match complaint.status.name() {
                    "Open" => Color::Yellow,
                    "In Progress" => Color::Blue,
                    _ => Color::Green,
                }),
            ),
            Span::styled(
                complaint.display("created_at"),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }
    if recent.is_empty() {
        lines.push(Line::from(Span::styled(
            "No complaints on file",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Recent Complaints ")
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), rows[2]);
}
