//! Login screen.

use crate::state::App;
use crate::views::helpers::centered_rect;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rect = centered_rect(44, 8, area);

    let mut lines: Vec<Line> = Vec::new();
    for (i, field) in app.login_form.fields.iter().enumerate() {
        let label_style = if i == app.login_form.focused {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        let shown = if field.label == "password" {
            "*".repeat(field.value.len())
        } else {
            field.value.clone()
        };
        let cursor = if i == app.login_form.focused { "_" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", field.label), label_style),
            Span::raw(format!("{}{}", shown, cursor)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter sign in - Tab next field",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let widget =
        Paragraph::new(lines).block(Block::default().title("Sign in").borders(Borders::ALL));
    f.render_widget(widget, rect);
}
