//! Full configuration validation.
//!
//! Validates numeric ranges, mount names and form settings, collecting
//! every problem into a single `ConfigError`.

mod helpers;


use crate::schema::LandingConfig;
use landing_common::ConfigError;

use helpers::{validate_non_empty, validate_range};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &LandingConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_mounts(&mut errors, config);
    validate_timing(&mut errors, config);
    validate_form(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_mounts(errors: &mut Vec<String>, config: &LandingConfig) {
    let m = &config.mounts;
    for (name, value) in [
        ("mounts.preloader", &m.preloader),
        ("mounts.navbar", &m.navbar),
        ("mounts.nav_toggle", &m.nav_toggle),
        ("mounts.nav_menu", &m.nav_menu),
        ("mounts.nav_link_class", &m.nav_link_class),
        ("mounts.business_card_class", &m.business_card_class),
        ("mounts.business_type_field", &m.business_type_field),
        ("mounts.contact_form", &m.contact_form),
        ("mounts.submit_button", &m.submit_button),
        ("mounts.success_banner", &m.success_banner),
        ("mounts.honeypot_field", &m.honeypot_field),
        ("mounts.modal", &m.modal),
        ("mounts.modal_frame", &m.modal_frame),
        ("mounts.modal_trigger_class", &m.modal_trigger_class),
        ("mounts.modal_close_class", &m.modal_close_class),
    ] {
        validate_non_empty(errors, name, value);
    }
}

fn validate_timing(errors: &mut Vec<String>, config: &LandingConfig) {
    validate_range(
        errors,
        "nav.mobile_breakpoint",
        config.nav.mobile_breakpoint,
        320,
        2000,
    );
    validate_range(
        errors,
        "nav.resize_debounce_ms",
        config.nav.resize_debounce_ms,
        0,
        2000,
    );
    validate_range(errors, "sticky.threshold", config.sticky.threshold, 0, 1000);
    validate_range(errors, "sticky.throttle_ms", config.sticky.throttle_ms, 0, 1000);
    validate_range(
        errors,
        "scroll_spy.bottom_margin_percent",
        config.scroll_spy.bottom_margin_percent,
        0,
        100,
    );
    validate_range(
        errors,
        "preload.remove_delay_ms",
        config.preload.remove_delay_ms,
        0,
        5000,
    );
    validate_non_empty(errors, "preload.fade_class", &config.preload.fade_class);
}

fn validate_form(errors: &mut Vec<String>, config: &LandingConfig) {
    validate_non_empty(
        errors,
        "form.default_business_type",
        &config.form.default_business_type,
    );
    validate_non_empty(errors, "form.error_message", &config.form.error_message);
    validate_range(errors, "form.timeout_secs", config.form.timeout_secs, 1, 300);
    if let Some(endpoint) = &config.form.endpoint {
        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            errors.push(format!("form.endpoint = {endpoint} must be an http(s) URL"));
        }
    }
    validate_non_empty(errors, "modal.embed_url", &config.modal.embed_url);
}
