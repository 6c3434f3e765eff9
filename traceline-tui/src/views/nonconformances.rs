//! Nonconformance list view.

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
    let view = &app.nonconformances;

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|nc| {
            let severity = nc.severity.as_deref().unwrap_or("-");
            ListItem::new(format!(
                "{}  {}  [{}] {}",
                nc.nc_number, nc.title, nc.status, severity
            ))
        })
        .collect();

    render_record_list(
        f,
        left,
        filtered_title("Nonconformances", &view.status_filter),
        items,
        view.selected,
        view.query.as_ref().map(|q| &q.snapshot),
    );

    if let Some(nc) = view.selected_row() {
        let panel = DetailPanel {
            title: "Nonconformance",
            fields: vec![
                ("Number", nc.nc_number.clone()),
                ("Title", nc.title.clone()),
                ("Status", nc.status.clone()),
                ("Severity", nc.severity.clone().unwrap_or_else(|| "-".to_string())),
                ("Source", nc.source.clone().unwrap_or_else(|| "-".to_string())),
                (
                    "Lot",
                    nc.lot_number.clone().unwrap_or_else(|| "-".to_string()),
                ),
                ("Discovered", nc.discovered_date.to_string()),
                ("Description", nc.description.clone()),
            ],
            style: Style::default().fg(Color::Red),
        };
        panel.render(f, right);
    }
}
