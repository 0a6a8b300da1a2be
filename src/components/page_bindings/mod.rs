//! Browser bindings: adapt the server-rendered page to the controller traits and wire the
//! delegated click listeners.

mod favorites_dom;
mod playlist_dom;

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::{debug, warn};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, Event, HtmlAudioElement, Node};

use crate::db::{BrowserStore, PageMarkup, Settings};
use crate::favorites::FavoritesRegistry;
use crate::playlist::{PlayTrigger, PlaylistController};

pub use favorites_dom::*;
pub use playlist_dom::*;

pub type PagePlaylist = PlaylistController<DomTrackSource, HtmlAudioDevice, DomPlayerSurface>;
pub type PageFavorites = FavoritesRegistry<BrowserStore, DomFavoritesView>;

/// Build both controllers for `document` and start listening. Safe to call once per page.
pub fn attach(document: &Document, settings: &Settings) {
    match get_or_create_audio_element(document, &settings.markup) {
        Some(audio) => attach_playlist(document, audio, settings),
        None => warn!("no audio element available, playlist disabled"),
    }
    attach_favorites(document, settings);
}

fn attach_playlist(document: &Document, audio: HtmlAudioElement, settings: &Settings) {
    let markup = settings.markup.clone();
    let mut controller = PlaylistController::new(
        DomTrackSource::new(document.clone(), markup.clone()),
        HtmlAudioDevice::new(audio.clone()),
        DomPlayerSurface::new(document.clone(), markup.clone()),
        settings,
    );
    controller.discover();
    let controller: Rc<RefCell<PagePlaylist>> = Rc::new(RefCell::new(controller));

    let on_click = {
        let controller = controller.clone();
        Closure::wrap(Box::new(move |event: Event| {
            let Some(button) = event_target_closest(&event, &markup.play_trigger_selector) else {
                return;
            };
            event.prevent_default();
            if let Some(track) = DomPlayTrigger::new(button, &markup).descriptor() {
                controller.borrow_mut().on_user_select(&track);
            }
        }) as Box<dyn FnMut(Event)>)
    };
    let on_ended = Closure::wrap(Box::new(move || {
        controller.borrow_mut().on_track_ended();
    }) as Box<dyn FnMut()>);

    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    let _ = audio.add_event_listener_with_callback("ended", on_ended.as_ref().unchecked_ref());
    on_click.forget();
    on_ended.forget();
    debug!("playlist controller attached");
}

fn attach_favorites(document: &Document, settings: &Settings) {
    let markup = settings.markup.clone();
    let mut registry = FavoritesRegistry::load(
        BrowserStore,
        DomFavoritesView::new(document.clone(), markup.clone()),
        settings,
    );
    registry.render();
    let registry: Rc<RefCell<PageFavorites>> = Rc::new(RefCell::new(registry));

    let on_click = Closure::wrap(Box::new(move |event: Event| {
        if let Some(button) = event_target_closest(&event, &markup.favorite_trigger_selector) {
            registry
                .borrow_mut()
                .on_user_toggle(&DomFavoriteTrigger::new(button, &markup));
        }
    }) as Box<dyn FnMut(Event)>);

    let _ = document.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
    on_click.forget();
    debug!("favorites registry attached");
}

/// Nearest ancestor-or-self of the click target matching `selector`.
fn event_target_closest(event: &Event, selector: &str) -> Option<Element> {
    let target = event.target()?;
    let element = match target.dyn_into::<Element>() {
        Ok(element) => element,
        Err(target) => target.dyn_into::<Node>().ok()?.parent_element()?,
    };
    element.closest(selector).ok().flatten()
}

pub(crate) fn elements(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(nodes) = document.query_selector_all(selector) else {
        warn!("invalid selector {selector:?}");
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Find the page's audio element, or create one inside the player container.
fn get_or_create_audio_element(document: &Document, markup: &PageMarkup) -> Option<HtmlAudioElement> {
    if let Some(existing) = document.get_element_by_id(&markup.audio_element_id) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(&markup.audio_element_id);
    audio.set_attribute("preload", "metadata").ok()?;

    let parent: Element = match document.get_element_by_id(&markup.player_container_id) {
        Some(container) => container,
        None => document.body()?.into(),
    };
    parent.append_child(&audio).ok()?;

    Some(audio)
}
