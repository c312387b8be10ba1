//! Plain-text rendering of dashboard and calculator results.

use std::fmt::Write;

use crate::cable::{AMPACITY_TABLE, AmpacityRow, CableSizing, FORMULA_CAPTION};
use crate::core::db::{BomItem, Circuit, Field};
use crate::dashboard::{DashboardView, ProjectDashboard};

pub const APP_TITLE: &str = "StudyCockpit Élec (read-only)";

/// Left-aligned text table. Rows shorter than the header are padded with blanks.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = widths
        .iter()
        .enumerate()
        .map(|(i, &w)| {
            let cell = cells.get(i).map(String::as_str).unwrap_or("");
            format!("{cell:<w$}")
        })
        .collect();
    out.push_str(line.join("  ").trim_end());
    out.push('\n');
}

/// Table of stored columns, headed by the first row's column names.
pub fn fields_table<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a [Field]>,
{
    let records: Vec<&[Field]> = records.into_iter().collect();
    let Some(first) = records.first() else {
        return "(none)\n".to_string();
    };
    let headers: Vec<&str> = first.iter().map(|f| f.name.as_str()).collect();
    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|fields| fields.iter().map(|f| f.value.to_string()).collect())
        .collect();
    table(&headers, &rows)
}

pub fn circuits_table(circuits: &[Circuit]) -> String {
    fields_table(circuits.iter().map(|c| c.fields.as_slice()))
}

pub fn bom_table(items: &[BomItem]) -> String {
    fields_table(items.iter().map(|b| b.fields.as_slice()))
}

pub fn ampacity_table(rows: &[AmpacityRow]) -> String {
    let rows: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.csa_mm2.to_string(),
                r.rated_a.to_string(),
                r.mv_per_a_m.to_string(),
            ]
        })
        .collect();
    table(&["csa_mm2", "A", "mV_A_m"], &rows)
}

pub fn dashboard(view: &DashboardView) -> String {
    match view {
        DashboardView::NoData => "No data: no database and no seed found.\n".to_string(),
        DashboardView::NoProjects => "No projects (empty seed).\n".to_string(),
        DashboardView::Project(project) => project_dashboard(project),
    }
}

fn project_dashboard(view: &ProjectDashboard) -> String {
    let mut out = String::new();
    let names: Vec<&str> = view.projects.iter().map(|p| p.name.as_str()).collect();
    let _ = writeln!(out, "Projects: {}", names.join(", "));
    let _ = writeln!(out, "Project: {} (#{})", view.selected.name, view.selected.id);
    let _ = writeln!(out);
    let _ = writeln!(out, "Circuits: {}", view.summary.circuit_count);
    let _ = writeln!(out, "BOM items: {}", view.summary.bom_item_count);
    let _ = writeln!(out, "Total power (W): {}", view.summary.total_power_display());
    let _ = writeln!(out);
    let _ = writeln!(out, "Circuits");
    out.push_str(&circuits_table(&view.circuits));
    let _ = writeln!(out);
    let _ = writeln!(out, "BOM");
    out.push_str(&bom_table(&view.bom_items));
    out
}

pub fn cable_sizing(sizing: &CableSizing) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Estimated current I: {:.1} A", sizing.current_a);
    let _ = writeln!(out, "Suggested cross-section: {} mm²", sizing.csa_mm2());
    let _ = writeln!(out, "Coefficient mV/A/m: {}", sizing.mv_per_a_m());
    let _ = writeln!(out, "ΔU % (approx.): {:.2}%", sizing.voltage_drop_pct);
    if sizing.selection.is_beyond_table() {
        let _ = writeln!(
            out,
            "Warning: current exceeds the ampacity table, largest cross-section shown."
        );
    }
    let _ = writeln!(out);
    out.push_str(&ampacity_table(AMPACITY_TABLE));
    let _ = writeln!(out);
    let _ = writeln!(out, "{FORMULA_CAPTION}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cable::{CableInputs, Phases, size_cable};
    use crate::core::db::Cell;

    fn field(name: &str, value: Cell) -> Field {
        Field {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_table_pads_columns() {
        let out = table(
            &["a", "long"],
            &[vec!["xyz".into(), "1".into()], vec!["q".into()]],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "a    long");
        assert_eq!(lines[1], "---  ----");
        assert_eq!(lines[2], "xyz  1");
        assert_eq!(lines[3], "q");
    }

    #[test]
    fn test_circuits_table_hides_ids() {
        let circuits = [Circuit {
            id: 42,
            project_id: 7,
            qty: Some(2.0),
            power_w: None,
            fields: vec![
                field("name", Cell::Text("Lighting".into())),
                field("qty", Cell::Integer(2)),
                field("power_w", Cell::Null),
            ],
        }];
        let out = circuits_table(&circuits);
        assert!(out.starts_with("name"));
        assert!(out.contains("Lighting  2"));
        assert!(!out.contains("42"));
    }

    #[test]
    fn test_bom_table_uses_stored_columns() {
        let items = [BomItem {
            id: 1,
            project_id: 1,
            fields: vec![
                field("item", Cell::Text("Breaker".into())),
                field("qty", Cell::Real(2.5)),
            ],
        }];
        let lines: Vec<String> = bom_table(&items).lines().map(String::from).collect();
        assert_eq!(lines[0], "item     qty");
        assert_eq!(lines[2], "Breaker  2.5");
        assert_eq!(bom_table(&[]), "(none)\n");
    }

    #[test]
    fn test_cable_sizing_output() {
        let sizing = size_cable(&CableInputs::new(Phases::Three)).unwrap();
        let out = cable_sizing(&sizing);
        assert!(out.contains("Estimated current I: 8.0 A"));
        assert!(out.contains("Suggested cross-section: 1.5 mm²"));
        assert!(out.contains("Coefficient mV/A/m: 29"));
        assert!(out.contains("ΔU % (approx.): 2.91%"));
        assert!(!out.contains("Warning"));
    }

    #[test]
    fn test_cable_sizing_warns_beyond_table() {
        let inputs = CableInputs {
            power_kw: 500.0,
            ..CableInputs::new(Phases::Three)
        };
        let sizing = size_cable(&inputs).unwrap();
        let out = cable_sizing(&sizing);
        assert!(out.contains("Suggested cross-section: 50 mm²"));
        assert!(out.contains(
            "Warning: current exceeds the ampacity table, largest cross-section shown."
        ));
    }

    #[test]
    fn test_empty_states() {
        assert!(dashboard(&DashboardView::NoData).starts_with("No data"));
        assert!(dashboard(&DashboardView::NoProjects).starts_with("No projects"));
    }
}
