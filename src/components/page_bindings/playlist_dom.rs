use dioxus::logger::tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAudioElement, HtmlElement};

use super::elements;
use crate::db::PageMarkup;
use crate::playlist::{PlayTrigger, PlaybackDevice, PlayerSurface, TrackDescriptor, TrackSource};

/// A `.play-audio-btn` element.
pub struct DomPlayTrigger<'a> {
    element: Element,
    markup: &'a PageMarkup,
}

impl<'a> DomPlayTrigger<'a> {
    pub fn new(element: Element, markup: &'a PageMarkup) -> Self {
        Self { element, markup }
    }

    pub fn element(&self) -> &Element {
        &self.element
    }
}

impl PlayTrigger for DomPlayTrigger<'_> {
    fn collection_id(&self) -> Option<String> {
        self.element.get_attribute(&self.markup.collection_attr)
    }

    fn item_name(&self) -> Option<String> {
        self.element.get_attribute(&self.markup.item_attr)
    }
}

/// Scans the document for play triggers in document order.
pub struct DomTrackSource {
    document: Document,
    markup: PageMarkup,
}

impl DomTrackSource {
    pub fn new(document: Document, markup: PageMarkup) -> Self {
        Self { document, markup }
    }
}

impl TrackSource for DomTrackSource {
    fn scan(&self) -> Vec<TrackDescriptor> {
        elements(&self.document, &self.markup.play_trigger_selector)
            .into_iter()
            .filter_map(|element| DomPlayTrigger::new(element, &self.markup).descriptor())
            .collect()
    }
}

/// The page's `<audio>` element.
pub struct HtmlAudioDevice {
    audio: HtmlAudioElement,
}

impl HtmlAudioDevice {
    pub fn new(audio: HtmlAudioElement) -> Self {
        Self { audio }
    }
}

impl PlaybackDevice for HtmlAudioDevice {
    fn set_source(&mut self, address: &str) {
        self.audio.set_src(address);
    }

    fn load(&mut self) {
        self.audio.load();
    }

    fn play(&mut self) {
        if let Ok(promise) = self.audio.play() {
            wasm_bindgen_futures::spawn_local(async move {
                let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
            });
        }
    }

    fn pause(&mut self) {
        let _ = self.audio.pause();
    }
}

/// Title text, container visibility and the highlighted `.audio-item` row.
pub struct DomPlayerSurface {
    document: Document,
    markup: PageMarkup,
}

impl DomPlayerSurface {
    pub fn new(document: Document, markup: PageMarkup) -> Self {
        Self { document, markup }
    }

    fn container(&self) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(&self.markup.player_container_id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn row_for(&self, track: &TrackDescriptor) -> Option<Element> {
        elements(&self.document, &self.markup.play_trigger_selector)
            .into_iter()
            .map(|element| DomPlayTrigger::new(element, &self.markup))
            .find(|trigger| trigger.descriptor().as_ref() == Some(track))?
            .element()
            .closest(&self.markup.track_row_selector)
            .ok()
            .flatten()
    }
}

impl PlayerSurface for DomPlayerSurface {
    fn set_title(&mut self, title: &str) {
        match self.document.get_element_by_id(&self.markup.player_title_id) {
            Some(element) => element.set_text_content(Some(title)),
            None => warn!("player title #{} not found", self.markup.player_title_id),
        }
    }

    fn set_visible(&mut self, visible: bool) {
        let Some(container) = self.container() else {
            warn!(
                "player container #{} not found",
                self.markup.player_container_id
            );
            return;
        };
        let display = if visible { "flex" } else { "none" };
        let _ = container.style().set_property("display", display);
    }

    fn mark_active(&mut self, track: Option<&TrackDescriptor>) {
        let active = &self.markup.active_class;
        for row in elements(&self.document, &self.markup.track_row_selector) {
            let _ = row.class_list().remove_1(active);
        }
        if let Some(row) = track.and_then(|track| self.row_for(track)) {
            let _ = row.class_list().add_1(active);
        }
    }
}
