use crate::BoardState;

use std::fmt::Write;

pub const HEADING: &str = "My Kanban Projects";
pub const LOADING_TEXT: &str = "Loading projects from the API...";
pub const EMPTY_TEXT: &str = "No projects created yet.";

/// Plain-text view of the board.
pub fn render(state: &BoardState) -> String {
    let mut out = String::new();

    out.push_str(HEADING);
    out.push('\n');
    out.push_str(&"=".repeat(HEADING.len()));
    out.push('\n');

    if state.loading {
        out.push_str(LOADING_TEXT);
        out.push('\n');
        return out;
    }

    if state.projects.is_empty() {
        out.push_str(EMPTY_TEXT);
        out.push('\n');
        return out;
    }

    for project in &state.projects {
        // Writing to a String cannot fail
        let _ = writeln!(out, "#{} {}", project.id, project.name);
        let _ = writeln!(out, "    {}", project.description);
    }

    out
}
