//! Work order list view.

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
    let view = &app.work_orders;

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|wo| {
            ListItem::new(format!(
                "{}  [{}] {} ordered {:.0} done {:.0}",
                wo.work_order_number,
                wo.status,
                wo.priority,
                wo.quantity_ordered,
                wo.quantity_completed
            ))
        })
        .collect();

    render_record_list(
        f,
        left,
        filtered_title("Work Orders", &view.status_filter),
        items,
        view.selected,
        view.query.as_ref().map(|q| &q.snapshot),
    );

    if let Some(wo) = view.selected_row() {
        let panel = DetailPanel {
            title: "Work Order",
            fields: vec![
                ("Number", wo.work_order_number.clone()),
                ("Item", wo.item_id.clone()),
                ("Status", wo.status.clone()),
                ("Priority", wo.priority.clone()),
                ("Ordered", format!("{:.1}", wo.quantity_ordered)),
                ("Completed", format!("{:.1}", wo.quantity_completed)),
                ("Scrapped", format!("{:.1}", wo.quantity_scrapped)),
                (
                    "Lot",
                    wo.lot_number.clone().unwrap_or_else(|| "-".to_string()),
                ),
                (
                    "Started",
                    wo.start_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ],
            style: Style::default().fg(Color::Yellow),
        };
        panel.render(f, right);
    }
}
