use dioxus::logger::tracing::warn;
use web_sys::{Document, Element};

use super::elements;
use crate::db::PageMarkup;
use crate::favorites::{ButtonState, FavoriteTrigger, FavoritesView, ListRow, StarGlyph};

/// A `.favorite-btn[data-video]` element.
pub struct DomFavoriteTrigger {
    element: Element,
    attr: String,
}

impl DomFavoriteTrigger {
    pub fn new(element: Element, markup: &PageMarkup) -> Self {
        Self {
            element,
            attr: markup.favorite_attr.clone(),
        }
    }
}

impl FavoriteTrigger for DomFavoriteTrigger {
    fn identity(&self) -> Option<String> {
        self.element.get_attribute(&self.attr)
    }
}

/// Star buttons plus the `#favoritesList` panel.
pub struct DomFavoritesView {
    document: Document,
    markup: PageMarkup,
}

impl DomFavoritesView {
    pub fn new(document: Document, markup: PageMarkup) -> Self {
        Self { document, markup }
    }

    fn row(&self, row: &ListRow) -> Option<Element> {
        match row {
            ListRow::Placeholder(text) => {
                let message = self.document.create_element("p").ok()?;
                message.set_text_content(Some(text));
                Some(message)
            }
            ListRow::Link { label, href } => {
                let item = self.document.create_element("li").ok()?;
                item.set_class_name(&self.markup.list_row_class);
                let link = self.document.create_element("a").ok()?;
                link.set_attribute("href", href).ok()?;
                link.set_text_content(Some(label));
                link.set_class_name(&self.markup.list_link_class);
                item.append_child(&link).ok()?;
                Some(item)
            }
        }
    }
}

impl FavoritesView for DomFavoritesView {
    type Trigger = DomFavoriteTrigger;

    fn triggers(&self) -> Vec<DomFavoriteTrigger> {
        elements(&self.document, &self.markup.favorite_trigger_selector)
            .into_iter()
            .map(|element| DomFavoriteTrigger::new(element, &self.markup))
            .collect()
    }

    fn apply_button(&mut self, trigger: &DomFavoriteTrigger, state: ButtonState) {
        let _ = trigger
            .element
            .class_list()
            .toggle_with_force(&self.markup.active_class, state.active);
        let glyph = match state.glyph {
            StarGlyph::Solid => &self.markup.solid_star_class,
            StarGlyph::Outline => &self.markup.outline_star_class,
        };
        trigger.element.set_inner_html("");
        if let Ok(icon) = self.document.create_element("i") {
            icon.set_class_name(glyph);
            let _ = trigger.element.append_child(&icon);
        }
    }

    fn replace_list(&mut self, rows: &[ListRow]) {
        let Some(list) = self
            .document
            .get_element_by_id(&self.markup.favorites_list_id)
        else {
            warn!("favorites list #{} not found", self.markup.favorites_list_id);
            return;
        };

        list.set_inner_html("");
        for row in rows.iter().filter_map(|row| self.row(row)) {
            let _ = list.append_child(&row);
        }
    }
}
