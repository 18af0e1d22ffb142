//! Business-type card group backed by a hidden form field.

use landing_common::NodeId;
use landing_config::{FormConfig, MountsConfig};
use landing_view::View;
use tracing::debug;

pub const ACTIVE_CLASS: &str = "active";

/// Single-select toggle group. Exactly one card is active and the hidden
/// field always holds that card's `data-type`.
#[derive(Debug)]
pub struct OptionSelector {
    card_class: String,
    field: NodeId,
    default_type: String,
    selected: String,
}

impl OptionSelector {
    /// Bind to the cards and hidden field, then select the default.
    pub fn mount<V: View + ?Sized>(
        view: &mut V,
        mounts: &MountsConfig,
        form: &FormConfig,
    ) -> Option<Self> {
        let Some(field) = view.by_id(&mounts.business_type_field) else {
            debug!(id = %mounts.business_type_field, "business type field not found; selector disabled");
            return None;
        };
        if view.by_class(&mounts.business_card_class).is_empty() {
            debug!(class = %mounts.business_card_class, "no business cards; selector disabled");
            return None;
        }

        let mut selector = Self {
            card_class: mounts.business_card_class.clone(),
            field,
            default_type: form.default_business_type.clone(),
            selected: String::new(),
        };
        selector.reset(view);
        Some(selector)
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn select<V: View + ?Sized>(&mut self, view: &mut V, card: NodeId) {
        for other in view.by_class(&self.card_class) {
            view.remove_class(other, ACTIVE_CLASS);
        }
        view.add_class(card, ACTIVE_CLASS);

        let business_type = view
            .attribute(card, "data-type")
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| self.default_type.clone());
        view.set_value(self.field, &business_type);
        debug!(business_type = %business_type, "business type selected");
        self.selected = business_type;
    }

    /// Return to the default business type.
    pub fn reset<V: View + ?Sized>(&mut self, view: &mut V) {
        let default_card = view
            .by_class(&self.card_class)
            .into_iter()
            .find(|&c| view.attribute(c, "data-type").as_deref() == Some(self.default_type.as_str()));

        match default_card {
            Some(card) => self.select(view, card),
            None => {
                for card in view.by_class(&self.card_class) {
                    view.remove_class(card, ACTIVE_CLASS);
                }
                view.set_value(self.field, &self.default_type);
                self.selected = self.default_type.clone();
            }
        }
    }

    pub fn handle_click<V: View + ?Sized>(&mut self, view: &mut V, target: NodeId) {
        if let Some(card) = view.closest_class(target, &self.card_class) {
            self.select(view, card);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{landing_page, node, DESKTOP_WIDTH};
    use landing_view::{ElementSpec, MemoryDom, ViewTree};

    fn mounted() -> (MemoryDom, OptionSelector) {
        let mut dom = landing_page(DESKTOP_WIDTH);
        let selector =
            OptionSelector::mount(&mut dom, &MountsConfig::default(), &FormConfig::default())
                .unwrap();
        (dom, selector)
    }

    fn active_cards(dom: &MemoryDom) -> Vec<NodeId> {
        dom.by_class("business-card")
            .into_iter()
            .filter(|&c| dom.has_class(c, ACTIVE_CLASS))
            .collect()
    }

    fn field_value(dom: &MemoryDom) -> String {
        dom.value(node(dom, "business-type"))
    }

    #[test]
    fn defaults_to_dental() {
        let (dom, selector) = mounted();
        assert_eq!(selector.selected(), "dental");
        assert_eq!(field_value(&dom), "dental");
        assert_eq!(active_cards(&dom), vec![node(&dom, "card-dental")]);
    }

    #[test]
    fn exactly_one_card_active_after_any_selection_sequence() {
        let (mut dom, mut selector) = mounted();
        for id in ["card-medical", "card-legal", "card-medical", "card-dental", "card-legal"] {
            let card = node(&dom, id);
            selector.select(&mut dom, card);

            let active = active_cards(&dom);
            assert_eq!(active, vec![card]);
            assert_eq!(
                field_value(&dom),
                dom.attribute(card, "data-type").unwrap()
            );
        }
        assert_eq!(selector.selected(), "legal");
    }

    #[test]
    fn click_on_card_child_selects_card() {
        let (mut dom, mut selector) = mounted();
        let card = node(&dom, "card-medical");
        let heading = dom.descendants(card)[0];
        selector.handle_click(&mut dom, heading);
        assert_eq!(selector.selected(), "medical");
        assert_eq!(active_cards(&dom), vec![card]);
    }

    #[test]
    fn card_without_identifier_falls_back_to_default() {
        let (mut dom, mut selector) = mounted();
        let other = node(&dom, "card-other");
        selector.select(&mut dom, other);
        assert_eq!(field_value(&dom), "dental");
        assert_eq!(active_cards(&dom), vec![other]);
    }

    #[test]
    fn reset_returns_to_default() {
        let (mut dom, mut selector) = mounted();
        let legal = node(&dom, "card-legal");
        selector.select(&mut dom, legal);
        selector.reset(&mut dom);
        assert_eq!(selector.selected(), "dental");
        assert_eq!(active_cards(&dom), vec![node(&dom, "card-dental")]);
    }

    #[test]
    fn clicks_outside_cards_are_ignored() {
        let (mut dom, mut selector) = mounted();
        let footer = node(&dom, "footer");
        selector.handle_click(&mut dom, footer);
        assert_eq!(selector.selected(), "dental");
    }

    #[test]
    fn missing_field_disables_component() {
        let mut dom = MemoryDom::new(DESKTOP_WIDTH, 800.0);
        let body = dom.body();
        dom.append(
            body,
            &ElementSpec::new("div")
                .class("business-card")
                .attr("data-type", "dental"),
        );
        let selector =
            OptionSelector::mount(&mut dom, &MountsConfig::default(), &FormConfig::default());
        assert!(selector.is_none());
    }
}
