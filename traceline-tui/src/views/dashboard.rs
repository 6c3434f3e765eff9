//! Dashboard view: backend KPIs plus department stat blocks.

use crate::state::App;
use crate::widgets::DetailPanel;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(area);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(rows[0]);

    match app.dashboard.kpis.as_ref().and_then(|q| q.value.as_ref()) {
        Some(kpis) => {
            let panel = DetailPanel {
                title: "Quality KPIs",
                fields: vec![
                    ("Open NCs", kpis.open_ncs.to_string()),
                    ("Open CAPAs", kpis.open_capas.to_string()),
                    ("Open findings", kpis.open_findings.to_string()),
                    ("Overdue trainings", kpis.overdue_trainings.to_string()),
                    ("Open work orders", kpis.open_work_orders.to_string()),
                    ("Pending inspections", kpis.pending_inspections.to_string()),
                ],
                style: Style::default().fg(Color::Cyan),
            };
            panel.render(f, columns[0]);
        }
        None => render_placeholder(f, columns[0], "Quality KPIs"),
    }

    match app.dashboard.hr_stats.as_ref().and_then(|q| q.value.as_ref()) {
        Some(stats) => {
            let panel = DetailPanel {
                title: "HR",
                fields: vec![
                    ("Employees", stats.total_employees.to_string()),
                    ("Active", stats.active_employees.to_string()),
                    ("Trainings scheduled", stats.scheduled_trainings.to_string()),
                    ("Trainings completed", stats.completed_trainings.to_string()),
                ],
                style: Style::default().fg(Color::Green),
            };
            panel.render(f, columns[1]);
        }
        None => render_placeholder(f, columns[1], "HR"),
    }

    match app
        .dashboard
        .inventory_summary
        .as_ref()
        .and_then(|q| q.value.as_ref())
    {
        Some(summary) => {
            let panel = DetailPanel {
                title: "Inventory",
                fields: vec![
                    ("Records", summary.total_records.to_string()),
                    ("On hand", format!("{:.1}", summary.total_quantity_on_hand)),
                    ("Low stock", summary.low_stock_items.to_string()),
                    ("Active lots", summary.active_lots.to_string()),
                ],
                style: Style::default().fg(Color::Yellow),
            };
            panel.render(f, columns[2]);
        }
        None => render_placeholder(f, columns[2], "Inventory"),
    }

    let hint = Paragraph::new(
        "Use Tab or digits to open a module. Lists refetch automatically after every create, \
         update, or delete.",
    )
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default().borders(Borders::ALL).title("Traceline"));
    f.render_widget(hint, rows[1]);
}

fn render_placeholder(f: &mut Frame<'_>, area: Rect, title: &str) {
    let widget =
        Paragraph::new("Loading...").block(Block::default().title(title.to_string()).borders(Borders::ALL));
    f.render_widget(widget, area);
}
