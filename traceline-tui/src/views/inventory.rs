//! Inventory list view.

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
    let view = &app.inventory;

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|inv| {
            ListItem::new(format!(
                "{} @ {}  on hand {:.1} avail {:.1}",
                inv.item_id, inv.warehouse_location, inv.quantity_on_hand, inv.quantity_available
            ))
        })
        .collect();

    render_record_list(
        f,
        left,
        "Inventory".to_string(),
        items,
        view.selected,
        view.query.as_ref().map(|q| &q.snapshot),
    );

    if let Some(inv) = view.selected_row() {
        let panel = DetailPanel {
            title: "Inventory Record",
            fields: vec![
                ("Item", inv.item_id.clone()),
                ("Warehouse", inv.warehouse_location.clone()),
                (
                    "Bin",
                    inv.bin_location.clone().unwrap_or_else(|| "-".to_string()),
                ),
                ("On hand", format!("{:.1}", inv.quantity_on_hand)),
                ("Reserved", format!("{:.1}", inv.quantity_reserved)),
                ("Available", format!("{:.1}", inv.quantity_available)),
                ("Updated", inv.updated_at.to_string()),
            ],
            style: Style::default().fg(Color::Yellow),
        };
        panel.render(f, right);
    }
}
