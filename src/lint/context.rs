//! Source context extraction for failure display.

use std::collections::BTreeMap;

/// Default number of lines shown on each side of a failure line.
pub const DEFAULT_RADIUS: usize = 3;

/// Extract the lines surrounding `line` (1-based) from `source`.
///
/// Returns an ordered map of 1-based line number to line text covering the
/// 0-based index window `[max(0, line - radius), min(total, line - 1 + radius))`.
/// The map is empty when `line` is 0 or past the end of the source; callers
/// then render only the failure message, with no surrounding code.
pub fn context_window(source: &str, line: usize, radius: usize) -> BTreeMap<usize, String> {
    let mut window = BTreeMap::new();
    let lines: Vec<&str> = source.lines().collect();
    if line == 0 || line > lines.len() {
        return window;
    }

    let mut position = line.saturating_sub(radius);
    let max = std::cmp::min(lines.len(), line - 1 + radius);
    while position < max {
        window.insert(position + 1, lines[position].to_string());
        position += 1;
    }
    window
}
