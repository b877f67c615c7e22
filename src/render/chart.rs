use crate::task::ScheduledTask;

const BAR_CELL: char = '█';
const TICK_INTERVAL: usize = 5;

/// Draws one horizontal bar per task, row position = sequence position,
/// bar extent [start_offset, finish_offset). Rows are labeled "id  name",
/// the x axis is ruled in elapsed days since the project start.
pub fn render_timeline(tasks: &[ScheduledTask]) -> String {
    if tasks.is_empty() {
        return String::new();
    }

    let span = tasks
        .iter()
        .map(|task| task.finish_offset)
        .max()
        .unwrap_or(0)
        .max(1) as usize;

    let labels: Vec<String> = tasks
        .iter()
        .map(|task| format!("{:>3}  {}", task.id, task.name))
        .collect();
    let label_width = labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (row_idx, task) in tasks.iter().enumerate() {
        let label = &labels[row_idx];
        out.push_str(label);
        let pad = label_width - label.chars().count();
        if pad > 0 {
            out.push_str(&" ".repeat(pad));
        }
        out.push_str("  |");

        let start = task.start_offset.max(0) as usize;
        let len = (task.finish_offset - task.start_offset).max(0) as usize;
        out.push_str(&" ".repeat(start.min(span)));
        for _ in 0..len {
            out.push(BAR_CELL);
        }
        out.push_str(&" ".repeat(span.saturating_sub(start + len)));
        out.push('|');
        out.push('\n');
    }

    // Ruler and day labels under the bar area; the bar area starts three
    // columns after the label (two spaces and the opening pipe).
    let indent = " ".repeat(label_width + 3);

    out.push_str(&indent);
    for day in 0..=span {
        out.push(if day % TICK_INTERVAL == 0 { '+' } else { '-' });
    }
    out.push('\n');

    let mut scale: Vec<char> = vec![' '; span + 1];
    let mut day = 0;
    while day <= span {
        for (offset, digit) in day.to_string().chars().enumerate() {
            let idx = day + offset;
            if idx < scale.len() {
                scale[idx] = digit;
            } else {
                scale.push(digit);
            }
        }
        day += TICK_INTERVAL;
    }
    out.push_str(&indent);
    out.extend(scale);
    out.push('\n');

    out.push_str(&indent);
    out.push_str("days since project start");
    out.push('\n');

    out
}
