//! Terminal presentation helpers
//!
//! String rendering only; no terminal control. Labels and glyphs match the
//! checklist's established vocabulary (questioned reads as "Needs Review").

use siteshift_model::{Status, StatusSlice};

/// Width of the rendered progress bar in cells
const BAR_WIDTH: usize = 40;

/// Shorten a URL for display by stripping the source base and trailing
/// slashes; the site root renders as `home`.
#[must_use]
pub fn display_path(url: &str, source_base: &str) -> String {
    let prefix = format!("{}/", source_base.trim_end_matches('/'));
    let path = url.strip_prefix(&prefix).unwrap_or(url);
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        "home".to_string()
    } else {
        path.to_string()
    }
}

/// Human label for a status
#[must_use]
pub fn status_label(status: Status) -> &'static str {
    match status {
        Status::Completed => "Completed",
        Status::InProgress => "In Progress",
        Status::Questioned => "Needs Review",
        Status::Pending => "Pending",
    }
}

/// Single-character marker for a status
#[must_use]
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Completed => "✓",
        Status::InProgress => "►",
        Status::Questioned => "?",
        Status::Pending => "○",
    }
}

fn bar_glyph(status: Status) -> char {
    match status {
        Status::Completed => '█',
        Status::InProgress => '▓',
        Status::Questioned => '▒',
        Status::Pending => '░',
    }
}

/// Render the four progress slices as a bar plus a legend, e.g.
///
/// ```text
/// [████▓▓░░...] Completed: 10%  In Progress: 5%  Needs Review: 0%  Pending: 85%
/// ```
#[must_use]
pub fn render_progress(slices: &[StatusSlice; 4]) -> String {
    let mut bar = String::with_capacity(BAR_WIDTH);
    for slice in slices {
        let cells = (slice.percentage / 100.0 * BAR_WIDTH as f64).round() as i64;
        for _ in 0..cells.max(0) {
            bar.push(bar_glyph(slice.status));
        }
    }

    let legend = slices
        .iter()
        .map(|slice| format!("{}: {}%", status_label(slice.status), slice.percentage.round()))
        .collect::<Vec<_>>()
        .join("  ");

    format!("[{bar}] {legend}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use siteshift_model::{aggregate_progress, TodoItem, TodoMap};

    #[test]
    fn display_path_strips_the_source_base() {
        assert_eq!(
            display_path("https://zetarmold.com/about-us/", "https://zetarmold.com"),
            "about-us"
        );
    }

    #[test]
    fn site_root_renders_as_home() {
        assert_eq!(
            display_path("https://zetarmold.com/", "https://zetarmold.com"),
            "home"
        );
    }

    #[test]
    fn foreign_urls_pass_through() {
        assert_eq!(
            display_path("https://elsewhere.org/page", "https://zetarmold.com"),
            "https://elsewhere.org/page"
        );
    }

    #[test]
    fn bare_base_without_slash_passes_through() {
        assert_eq!(
            display_path("https://zetarmold.com", "https://zetarmold.com"),
            "https://zetarmold.com"
        );
    }

    #[test]
    fn questioned_reads_as_needs_review() {
        assert_eq!(status_label(Status::Questioned), "Needs Review");
    }

    #[test]
    fn progress_render_includes_every_label() {
        let mut todos = TodoMap::new();
        todos.insert(
            "a".to_string(),
            TodoItem::new("a", Status::Completed, 0),
        );
        let rendered = render_progress(&aggregate_progress(&todos, 4));

        assert!(rendered.starts_with('['));
        assert!(rendered.contains("Completed: 25%"));
        assert!(rendered.contains("In Progress: 0%"));
        assert!(rendered.contains("Needs Review: 0%"));
        assert!(rendered.contains("Pending: 75%"));
    }
}
