use crate::task::ScheduledTask;

const COLUMNS: [&str; 5] = ["id", "name", "start_date", "end_date", "duration_days"];

/// Renders the schedule as a fixed-width text table, one row per task in
/// input order, dates formatted as YYYY-MM-DD.
pub fn render_schedule_table(tasks: &[ScheduledTask]) -> String {
    let rows: Vec<[String; 5]> = tasks
        .iter()
        .map(|task| {
            [
                task.id.to_string(),
                task.name.clone(),
                task.start_date.to_string(),
                task.end_date.to_string(),
                task.duration_days.to_string(),
            ]
        })
        .collect();

    // Compute column widths
    let mut widths: Vec<usize> = COLUMNS.iter().map(|name| name.len()).collect();
    for row in &rows {
        for (ci, cell) in row.iter().enumerate() {
            if cell.len() > widths[ci] {
                widths[ci] = cell.len();
            }
        }
    }

    // Build horizontal separator
    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    // Build output
    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');

    // Header
    out.push('|');
    for (ci, name) in COLUMNS.iter().enumerate() {
        out.push(' ');
        out.push_str(name);
        let pad = widths[ci] - name.len();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push(' ');
        out.push('|');
    }
    out.push('\n');
    out.push_str(&sep);
    out.push('\n');

    // Rows
    for row in &rows {
        out.push('|');
        for (ci, cell) in row.iter().enumerate() {
            out.push(' ');
            out.push_str(cell);
            let pad = widths[ci].saturating_sub(cell.len());
            if pad > 0 {
                out.push_str(&" ".repeat(pad));
            }
            out.push(' ');
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str(&sep);
    out.push('\n');
    out
}
