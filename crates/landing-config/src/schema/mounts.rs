//! Names of the document mount points each controller binds to.

use serde::{Deserialize, Serialize};

/// Element ids (single elements) and class names (groups) in the page markup.
///
/// A mount point missing from the document disables only the controller
/// that needs it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MountsConfig {
    pub preloader: String,
    pub navbar: String,
    pub nav_toggle: String,
    pub nav_menu: String,
    /// Class shared by every navigation link.
    pub nav_link_class: String,
    /// Class shared by every business-type card.
    pub business_card_class: String,
    /// Hidden input mirroring the selected business type.
    pub business_type_field: String,
    pub contact_form: String,
    pub submit_button: String,
    pub success_banner: String,
    /// `name` of the honeypot input inside the contact form.
    pub honeypot_field: String,
    pub modal: String,
    pub modal_frame: String,
    /// Class shared by every element that opens the scheduling modal.
    pub modal_trigger_class: String,
    /// Class shared by every element that closes the scheduling modal.
    pub modal_close_class: String,
}

impl Default for MountsConfig {
    fn default() -> Self {
        Self {
            preloader: "preloader".into(),
            navbar: "navbar".into(),
            nav_toggle: "nav-toggle".into(),
            nav_menu: "nav-menu".into(),
            nav_link_class: "nav-link".into(),
            business_card_class: "business-card".into(),
            business_type_field: "business-type".into(),
            contact_form: "contact-form".into(),
            submit_button: "submit-btn".into(),
            success_banner: "form-success".into(),
            honeypot_field: "website".into(),
            modal: "schedule-modal".into(),
            modal_frame: "schedule-frame".into(),
            modal_trigger_class: "open-schedule".into(),
            modal_close_class: "modal-close".into(),
        }
    }
}
