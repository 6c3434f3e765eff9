//! Item master list view.

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
    let view = &app.items;

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|item| {
            ListItem::new(format!(
                "{}  {}  [{}] rev {}",
                item.item_code, item.description, item.status, item.item_revision
            ))
        })
        .collect();

    render_record_list(
        f,
        left,
        "Items".to_string(),
        items,
        view.selected,
        view.query.as_ref().map(|q| &q.snapshot),
    );

    if let Some(item) = view.selected_row() {
        let panel = DetailPanel {
            title: "Item",
            fields: vec![
                ("Code", item.item_code.clone()),
                ("Description", item.description.clone()),
                (
                    "Type",
                    item.item_type.clone().unwrap_or_else(|| "-".to_string()),
                ),
                ("UoM", item.unit_of_measure.clone()),
                ("Revision", item.item_revision.clone()),
                ("Status", item.status.clone()),
                (
                    "Device class",
                    item.device_class.clone().unwrap_or_else(|| "-".to_string()),
                ),
                ("UDI", item.udi.clone().unwrap_or_else(|| "-".to_string())),
            ],
            style: Style::default().fg(Color::Green),
        };
        panel.render(f, right);
    }
}
