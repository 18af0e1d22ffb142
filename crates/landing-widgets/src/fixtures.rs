//! A representative landing page used by the controller tests.

use landing_common::NodeId;
use landing_view::{ElementSpec, MemoryDom, ViewTree};

pub(crate) const DESKTOP_WIDTH: f64 = 1280.0;
pub(crate) const MOBILE_WIDTH: f64 = 375.0;

fn nav_link(href: &str) -> ElementSpec {
    ElementSpec::new("a").class("nav-link").attr("href", href)
}

fn card(id: &str, business_type: Option<&str>) -> ElementSpec {
    let spec = ElementSpec::new("div")
        .id(id)
        .class("business-card")
        .child(ElementSpec::new("h3").text(id));
    match business_type {
        Some(t) => spec.attr("data-type", t),
        None => spec,
    }
}

fn field(tag: &str, name: &str) -> ElementSpec {
    ElementSpec::new(tag).id(name).attr("name", name)
}

pub(crate) fn landing_page(width: f64) -> MemoryDom {
    let mut dom = MemoryDom::new(width, 800.0);
    let body = dom.body();

    dom.append(body, &ElementSpec::new("div").id("preloader"));
    dom.append(
        body,
        &ElementSpec::new("nav")
            .id("navbar")
            .at(0.0, 70.0)
            .child(ElementSpec::new("button").id("nav-toggle"))
            .child(
                ElementSpec::new("ul").id("nav-menu").children([
                    nav_link("#home").id("link-home"),
                    nav_link("#services").id("link-services"),
                    nav_link("#contact")
                        .id("link-contact")
                        .child(ElementSpec::new("span").id("link-contact-label")),
                ]),
            ),
    );
    dom.append(
        body,
        &ElementSpec::new("section")
            .id("home")
            .at(0.0, 700.0)
            .child(ElementSpec::new("button").id("hero-cta").class("open-schedule"))
            .child(ElementSpec::new("a").id("bare-anchor").attr("href", "#"))
            .child(ElementSpec::new("a").id("dead-anchor").attr("href", "#pricing")),
    );
    dom.append(
        body,
        &ElementSpec::new("section")
            .id("services")
            .at(700.0, 800.0)
            .children([
                card("card-dental", Some("dental")),
                card("card-medical", Some("medical")),
                card("card-legal", Some("legal")),
                card("card-other", None),
            ]),
    );
    dom.append(
        body,
        &ElementSpec::new("section")
            .id("contact")
            .at(1500.0, 900.0)
            .child(
                ElementSpec::new("form")
                    .id("contact-form")
                    .attr("action", "https://forms.example.com/f/contact")
                    .children([
                        field("input", "name").attr("required", ""),
                        field("input", "email")
                            .attr("type", "email")
                            .attr("required", ""),
                        field("input", "phone").attr("type", "tel"),
                        field("textarea", "message").attr("required", ""),
                        ElementSpec::new("input")
                            .id("business-type")
                            .attr("type", "hidden")
                            .attr("name", "business_type"),
                        field("input", "website").attr("tabindex", "-1"),
                        ElementSpec::new("button")
                            .id("submit-btn")
                            .attr("type", "submit")
                            .text("Send message"),
                    ]),
            )
            .child(
                ElementSpec::new("div")
                    .id("form-success")
                    .attr("hidden", ""),
            ),
    );
    dom.append(
        body,
        &ElementSpec::new("div")
            .id("schedule-modal")
            .attr("aria-hidden", "true")
            .child(
                ElementSpec::new("div").id("modal-dialog").children([
                    ElementSpec::new("button").id("modal-close-btn").class("modal-close"),
                    ElementSpec::new("iframe").id("schedule-frame"),
                    ElementSpec::new("a").id("modal-faq").attr("href", "/faq"),
                ]),
            ),
    );
    dom.append(body, &ElementSpec::new("footer").id("footer").at(2400.0, 200.0));

    dom.take_commands();
    dom
}

pub(crate) fn node(dom: &MemoryDom, id: &str) -> NodeId {
    dom.by_id(id)
        .unwrap_or_else(|| panic!("fixture has no #{id}"))
}

/// Fill the contact form with values that pass validation.
pub(crate) fn fill_valid_form(dom: &mut MemoryDom) {
    for (id, value) in [
        ("name", "Dana Smith"),
        ("email", "dana@clinic.example"),
        ("message", "We would like a demo."),
    ] {
        let n = node(dom, id);
        dom.type_value(n, value);
    }
}
