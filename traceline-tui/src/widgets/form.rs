//! Centered modal form rendering.

use crate::forms::ActiveForm;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Center a fixed-size modal inside `area`.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

pub fn render_form(f: &mut Frame<'_>, form: &ActiveForm, area: Rect) {
    let height = (form.state.fields.len() as u16 + 4).min(area.height);
    let rect = centered_rect(60.min(area.width), height, area);

    let mut lines: Vec<Line> = form
        .state
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let label_style = if i == form.state.focused {
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default()
            };
            let cursor = if i == form.state.focused { "_" } else { "" };
            Line::from(vec![
                Span::styled(format!("{}: ", field.label), label_style),
                Span::raw(format!("{}{}", field.value, cursor)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter submit - Tab next field - Esc cancel",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .title(form.state.title.as_str())
            .borders(Borders::ALL),
    );
    f.render_widget(Clear, rect);
    f.render_widget(widget, rect);
}
