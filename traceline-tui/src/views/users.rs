//! User list view.

use crate::state::App;
use crate::views::helpers::{render_record_list, two_pane};
use crate::widgets::DetailPanel;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::ListItem,
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (left, right) = two_pane(area);
    let view = &app.users;

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|user| {
            let active = if user.is_active { "active" } else { "inactive" };
            ListItem::new(format!("{}  {}  [{}]", user.username, user.email, active))
        })
        .collect();

    render_record_list(
        f,
        left,
        "Users".to_string(),
        items,
        view.selected,
        view.query.as_ref().map(|q| &q.snapshot),
    );

    if let Some(user) = view.selected_row() {
        let name = match (&user.first_name, &user.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => "-".to_string(),
        };
        let panel = DetailPanel {
            title: "User",
            fields: vec![
                ("Username", user.username.clone()),
                ("Email", user.email.clone()),
                ("Name", name),
                (
                    "Department",
                    user.department.clone().unwrap_or_else(|| "-".to_string()),
                ),
                (
                    "Role",
                    user.role
                        .as_ref()
                        .map(|r| r.name.clone())
                        .unwrap_or_else(|| user.role_id.clone()),
                ),
                ("Active", user.is_active.to_string()),
                ("Created", user.created_at.to_string()),
            ],
            style: Style::default().fg(Color::Cyan),
        };
        panel.render(f, right);
    }
}
