use atlas_core::audit::AuditLog;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let render = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:w$}", cell, w = widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join("  ")
    };

    let header_row: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    println!("{}", render(&header_row));
    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    println!("{}", sep.join("  "));
    for row in rows {
        println!("{}", render(row));
    }
}

/// Renders the session audit trail newest first, the order the console
/// presents it in.
pub fn print_trail(log: &AuditLog) {
    println!("Audit trail:");
    if log.is_empty() {
        println!("  No system events recorded in the current session.");
        return;
    }
    for entry in log.iter() {
        println!(
            "  {}  {}  [{}]  {}",
            entry.id,
            entry.timestamp.format("%H:%M:%S UTC"),
            entry.status,
            entry.action_type
        );
        println!("        operator: {} ({})", entry.user, entry.role);
        if !entry.parameters.is_empty() {
            if let Ok(params) = serde_json::to_string(&entry.parameters) {
                println!("        parameters: {params}");
            }
        }
        if let Some(advisory) = &entry.advisory {
            println!("        advisory: {advisory}");
        }
    }
}
