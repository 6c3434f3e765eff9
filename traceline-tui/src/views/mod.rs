//! View rendering dispatch.

pub mod audits;
pub mod capas;
pub mod dashboard;
pub mod documents;
pub mod helpers;
pub mod inventory;
pub mod items;
pub mod login;
pub mod nonconformances;
pub mod registers;
pub mod users;
pub mod work_orders;

use crate::nav::View;
use crate::notifications::NotificationLevel;
use crate::state::App;
use crate::widgets::render_form;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);

    match app.active_view {
        View::Login => login::render(f, app, layout[1]),
        View::Dashboard => dashboard::render(f, app, layout[1]),
        View::Documents => documents::render(f, app, layout[1]),
        View::Nonconformances => nonconformances::render(f, app, layout[1]),
        View::Capas => capas::render(f, app, layout[1]),
        View::Audits => audits::render(f, app, layout[1]),
        View::Items => items::render(f, app, layout[1]),
        View::WorkOrders => work_orders::render(f, app, layout[1]),
        View::Inventory => inventory::render(f, app, layout[1]),
        View::Users => users::render(f, app, layout[1]),
        View::Registers => registers::render(f, app, layout[1]),
    }

    render_footer(f, app, layout[2]);

    if let Some(form) = &app.form {
        render_form(f, form, layout[1]);
    }
    if let Some(confirm) = &app.confirm {
        render_confirm(f, confirm.message(), layout[1]);
    }
    if let Some(modal) = &app.modal {
        render_modal(f, &modal.title, &modal.message, layout[1]);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let user = app
        .session
        .current_user()
        .map(|u| u.username)
        .unwrap_or_else(|| "not signed in".to_string());
    let title = format!("TRACELINE | {} | {}", user, app.active_view.title());
    let block = Block::default().borders(Borders::ALL).title(Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = "j/k move - Tab switch view - h/l filter - n new - d delete - a action - ? help - q quit";
    let (text, style) = if let Some(note) = app.notifications.last() {
        let (label, color) = match note.level {
            NotificationLevel::Info => ("INFO", Color::Blue),
            NotificationLevel::Warning => ("WARN", Color::Yellow),
            NotificationLevel::Error => ("ERROR", Color::Red),
            NotificationLevel::Success => ("SUCCESS", Color::Green),
        };
        (
            format!("{}: {}", label, note.message),
            Style::default().fg(color),
        )
    } else {
        (help.to_string(), Style::default().fg(Color::DarkGray))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame<'_>, title: &str, message: &str, area: Rect) {
    let rect = helpers::centered_rect(60, 7, area);
    let widget = Paragraph::new(message.to_string())
        .block(Block::default().title(title.to_string()).borders(Borders::ALL))
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, rect);
    f.render_widget(widget, rect);
}

fn render_confirm(f: &mut Frame<'_>, message: String, area: Rect) {
    let rect = helpers::centered_rect(60, 5, area);
    let widget = Paragraph::new(message)
        .block(Block::default().title("Confirm").borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, rect);
    f.render_widget(widget, rect);
}
