//! Document list view.

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
    let view = &app.documents;

    let items: Vec<ListItem> = view
        .rows()
        .iter()
        .map(|doc| {
            ListItem::new(format!(
                "{}  {}  [{}] rev {}",
                doc.doc_number, doc.title, doc.status, doc.current_revision
            ))
        })
        .collect();

    render_record_list(
        f,
        left,
        filtered_title("Documents", &view.status_filter),
        items,
        view.selected,
        view.query.as_ref().map(|q| &q.snapshot),
    );

    if let Some(doc) = view.selected_row() {
        let panel = DetailPanel {
            title: "Document",
            fields: vec![
                ("Number", doc.doc_number.clone()),
                ("Title", doc.title.clone()),
                ("Type", doc.document_type.clone()),
                ("Status", doc.status.clone()),
                ("Revision", doc.current_revision.to_string()),
                (
                    "Description",
                    doc.description.clone().unwrap_or_else(|| "-".to_string()),
                ),
                ("Created", doc.created_at.to_string()),
                ("Updated", doc.updated_at.to_string()),
            ],
            style: Style::default().fg(Color::Cyan),
        };
        panel.render(f, right);
    }
}
