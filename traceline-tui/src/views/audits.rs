//! Audit list view.

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
    let view = &app.audits;

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|audit| {
            ListItem::new(format!(
                "{}  {}  [{}] {}",
                audit.audit_number, audit.title, audit.status, audit.start_date
            ))
        })
        .collect();

    render_record_list(
        f,
        left,
        filtered_title("Audits", &view.status_filter),
        items,
        view.selected,
        view.query.as_ref().map(|q| &q.snapshot),
    );

    if let Some(audit) = view.selected_row() {
        let panel = DetailPanel {
            title: "Audit",
            fields: vec![
                ("Number", audit.audit_number.clone()),
                ("Title", audit.title.clone()),
                (
                    "Type",
                    audit.audit_type.clone().unwrap_or_else(|| "-".to_string()),
                ),
                ("Status", audit.status.clone()),
                ("Led by", audit.led_by.clone()),
                ("Starts", audit.start_date.to_string()),
                (
                    "Ends",
                    audit
                        .end_date
                        .map(|d| d.to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                (
                    "Department",
                    audit
                        .auditee_department
                        .clone()
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ],
            style: Style::default().fg(Color::Blue),
        };
        panel.render(f, right);
    }
}
