//! JavaScript rendering of [`ViewCommand`] journals.

use landing_common::{NodeId, ScrollBehavior};
use landing_view::ViewCommand;

/// JSON-encode a string so it is a valid JS string literal.
fn js_str(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".to_string())
}

fn element(node: NodeId) -> String {
    format!("document.querySelector('[data-node=\"{}\"]')", node.0)
}

/// Run `body` against `node` if it is still in the document.
fn with_element(node: NodeId, body: &str) -> String {
    format!("{{ const e = {}; if (e) {body} }}", element(node))
}

/// Render one command as a single JavaScript statement.
pub fn render_command(command: &ViewCommand) -> String {
    match command {
        ViewCommand::SetAttribute { node, name, value } => with_element(
            *node,
            &format!("e.setAttribute({}, {});", js_str(name), js_str(value)),
        ),
        ViewCommand::RemoveAttribute { node, name } => {
            with_element(*node, &format!("e.removeAttribute({});", js_str(name)))
        }
        ViewCommand::AddClass { node, class } => {
            with_element(*node, &format!("e.classList.add({});", js_str(class)))
        }
        ViewCommand::RemoveClass { node, class } => {
            with_element(*node, &format!("e.classList.remove({});", js_str(class)))
        }
        ViewCommand::SetValue { node, value } => {
            with_element(*node, &format!("e.value = {};", js_str(value)))
        }
        ViewCommand::SetText { node, text } => {
            with_element(*node, &format!("e.textContent = {};", js_str(text)))
        }
        ViewCommand::Focus { node } => with_element(*node, "e.focus();"),
        ViewCommand::Remove { node } => with_element(*node, "e.remove();"),
        ViewCommand::ScrollTo { y, behavior } => {
            let behavior = match behavior {
                ScrollBehavior::Auto => "auto",
                ScrollBehavior::Smooth => "smooth",
            };
            format!("window.scrollTo({{ top: {y}, behavior: '{behavior}' }});")
        }
        ViewCommand::Observe { targets, margin } => {
            let ids: Vec<String> = targets.iter().map(|t| t.0.to_string()).collect();
            format!(
                "window.landing.observe([{}], {});",
                ids.join(", "),
                js_str(&margin.to_css())
            )
        }
        ViewCommand::Alert { message } => format!("window.alert({});", js_str(message)),
    }
}

/// Render a journal, one statement per line. Empty for an empty journal.
pub fn render_commands(commands: &[ViewCommand]) -> String {
    commands
        .iter()
        .map(render_command)
        .collect::<Vec<_>>()
        .join("\n")
}
