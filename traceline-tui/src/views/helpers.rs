//! Shared rendering helpers for list views.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use traceline_query::QuerySnapshot;

/// Center a fixed-size rect inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(height.min(area.height)),
            Constraint::Min(0),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(width.min(area.width)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);
    horizontal[1]
}

/// Split a view area into list (left) and detail (right) panes.
pub fn two_pane(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Render a record list with loading, empty, and error states. Fetch errors
/// render inline; they never panic the draw pass.
pub fn render_record_list(
    f: &mut Frame<'_>,
    area: Rect,
    title: String,
    items: Vec<ListItem<'_>>,
    selected: Option<usize>,
    snapshot: Option<&QuerySnapshot>,
) {
    let block = Block::default().title(title).borders(Borders::ALL);

    match snapshot {
        None => {
            f.render_widget(Paragraph::new("Loading...").block(block), area);
        }
        Some(snapshot) if snapshot.is_loading() => {
            f.render_widget(Paragraph::new("Loading...").block(block), area);
        }
        Some(snapshot) if snapshot.is_error() && items.is_empty() => {
            let message = snapshot
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "fetch failed".to_string());
            let widget = Paragraph::new(format!("Failed to load: {}", message))
                .style(Style::default().fg(Color::Red))
                .block(block);
            f.render_widget(widget, area);
        }
        Some(_) if items.is_empty() => {
            f.render_widget(Paragraph::new("No records.").block(block), area);
        }
        Some(_) => {
            let mut state = ListState::default();
            state.select(selected);
            let list = List::new(items).block(block).highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            );
            f.render_stateful_widget(list, area, &mut state);
        }
    }
}

/// List title with the active status filter, e.g. `Documents [Draft]`.
pub fn filtered_title(base: &str, filter: &Option<String>) -> String {
    match filter {
        Some(status) => format!("{} [{}]", base, status),
        None => format!("{} [all]", base),
    }
}
