//! Client-side field validation.

use std::sync::LazyLock;

use landing_common::NodeId;
use landing_view::ViewTree;
use regex::Regex;

/// Class marking a field that failed validation.
pub const ERROR_CLASS: &str = "error";

/// Something, an `@`, something, a dot, something. No whitespace anywhere.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn is_valid_email(value: &str) -> bool {
    value.is_ascii() && EMAIL_RE.is_match(value)
}

/// Whether a single field's current value is acceptable.
fn field_ok<V: ViewTree + ?Sized>(view: &V, field: NodeId) -> bool {
    let value = view.value(field);
    let value = value.trim();
    if value.is_empty() {
        return !view.has_attribute(field, "required");
    }
    if view.attribute(field, "type").as_deref() == Some("email") {
        return is_valid_email(value);
    }
    true
}

/// Check every field, flag the failures and clear flags on the rest.
///
/// Returns the failing fields in document order.
pub fn validate_fields<V: ViewTree + ?Sized>(view: &mut V, fields: &[NodeId]) -> Vec<NodeId> {
    let mut invalid = Vec::new();
    for &field in fields {
        if field_ok(&*view, field) {
            view.remove_class(field, ERROR_CLASS);
            view.remove_attribute(field, "aria-invalid");
        } else {
            view.add_class(field, ERROR_CLASS);
            view.set_attribute(field, "aria-invalid", "true");
            invalid.push(field);
        }
    }
    invalid
}
