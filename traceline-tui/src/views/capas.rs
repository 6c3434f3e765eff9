//! CAPA list view.

use crate::state::App;
use crate::views::helpers::{filtered_title, render_record_list, two_pane};
use crate::widgets::DetailPanel;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::ListItem,
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (left, right) = two_pane(area);
    let view = &app.capas;

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|capa| {
            ListItem::new(format!(
                "{}  {}  [{}] {}",
                capa.capa_number, capa.title, capa.status, capa.priority
            ))
        })
        .collect();

    render_record_list(
        f,
        left,
        filtered_title("CAPAs", &view.status_filter),
        items,
        view.selected,
        view.query.as_ref().map(|q| &q.snapshot),
    );

    if let Some(capa) = view.selected_row() {
        let panel = DetailPanel {
            title: "CAPA",
            fields: vec![
                ("Number", capa.capa_number.clone()),
                ("Title", capa.title.clone()),
                ("Type", capa.capa_type.clone().unwrap_or_else(|| "-".to_string())),
                ("Status", capa.status.clone()),
                ("Priority", capa.priority.clone()),
                ("Owner", capa.owner_id.clone()),
                (
                    "Due",
                    capa.due_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                (
                    "Root cause",
                    capa.root_cause.clone().unwrap_or_else(|| "-".to_string()),
                ),
                (
                    "Corrective action",
                    capa.corrective_action
                        .clone()
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ],
            style: Style::default().fg(Color::Magenta),
        };
        panel.render(f, right);
    }
}
