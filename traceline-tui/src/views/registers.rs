//! Generic registers view for the long-tail department datasets.
//!
//! One tab per register; rows are raw JSON objects summarized from their
//! well-known fields, since every register has its own shape.

use crate::state::{App, REGISTERS};
use crate::views::helpers::{render_record_list, two_pane};
use crate::widgets::DetailPanel;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::ListItem,
    Frame,
};
use serde_json::Value;

/// Fields used as the row label, in preference order.
const LABEL_FIELDS: &[&str] = &[
    "employee_code",
    "training_no",
    "equipment_id",
    "breakdown_no",
    "customer_code",
    "inquiry_no",
    "oc_number",
    "complaint_no",
    "vendor_code",
    "po_number",
    "pr_number",
    "grn_number",
    "indent_number",
    "meeting_no",
    "car_number",
    "plan_name",
    "lot_number",
    "item_code",
    "item_name",
    "full_name",
    "customer_name",
    "vendor_name",
    "subject",
    "topic",
    "area",
    "department",
    "training_name",
    "id",
];

/// Secondary fields appended to the label when present.
const DETAIL_FIELDS: &[&str] = &["status", "result", "qc_status", "approval_status"];

fn field_string(row: &Value, name: &str) -> Option<String> {
    match row.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    }
}

/// One-line summary of a register row.
fn summarize_row(row: &Value) -> String {
    let label = LABEL_FIELDS
        .iter()
        .find_map(|name| field_string(row, name))
        .unwrap_or_else(|| "(record)".to_string());
    match DETAIL_FIELDS.iter().find_map(|name| field_string(row, name)) {
        Some(detail) => format!("{}  [{}]", label, detail),
        None => label,
    }
}

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let (left, right) = two_pane(area);
    let registers = &app.registers;
    let def = registers.current();

    let items: Vec<ListItem> = registers
        .rows()
        .iter()
        .map(|row| ListItem::new(summarize_row(row)))
        .collect();

    let title = format!(
        "{} ({}/{})",
        def.name,
        registers.tab + 1,
        REGISTERS.len()
    );
    render_record_list(
        f,
        left,
        title,
        items,
        registers.selected,
        registers.query.as_ref().map(|q| &q.snapshot),
    );

    if let Some(row) = registers.selected.and_then(|i| registers.rows().get(i)) {
        if let Value::Object(map) = row {
            let mut fields: Vec<(&str, String)> = Vec::new();
            for (name, value) in map.iter().take(14) {
                let shown = match value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null => "-".to_string(),
                    other => other.to_string(),
                };
                fields.push((name.as_str(), shown));
            }
            let panel = DetailPanel {
                title: def.name,
                fields,
                style: Style::default().fg(Color::Green),
            };
            panel.render(f, right);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn summary_prefers_register_numbers() {
        let row = json!({
            "id": "x-1",
            "grn_number": "GRN-0007",
            "status": "Pending QC",
        });
        assert_eq!(summarize_row(&row), "GRN-0007  [Pending QC]");
    }

    #[test]
    fn summary_falls_back_to_id() {
        let row = json!({ "id": "abc", "note": 7 });
        assert_eq!(summarize_row(&row), "abc");
    }

    #[test]
    fn empty_object_still_renders() {
        assert_eq!(summarize_row(&json!({})), "(record)");
    }
}
