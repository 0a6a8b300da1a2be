//! Sequential playback of the tracks listed on the current page.

mod controller;
mod track;

pub use controller::*;
pub use track::*;

/// Something on the page that starts a track when clicked.
pub trait PlayTrigger {
    fn collection_id(&self) -> Option<String>;
    fn item_name(&self) -> Option<String>;

    /// Both attributes present and non-empty.
    fn descriptor(&self) -> Option<TrackDescriptor> {
        let collection_id = self.collection_id().filter(|value| !value.is_empty())?;
        let item_name = self.item_name().filter(|value| !value.is_empty())?;
        Some(TrackDescriptor::new(collection_id, item_name))
    }
}

/// Produces the ordered list of playable items currently present.
pub trait TrackSource {
    fn scan(&self) -> Vec<TrackDescriptor>;
}

/// The shared media widget. Calls are fire-and-forget.
pub trait PlaybackDevice {
    fn set_source(&mut self, address: &str);
    fn load(&mut self);
    fn play(&mut self);
    fn pause(&mut self);
}

/// The visible parts of the player: title, container and the highlighted row.
pub trait PlayerSurface {
    fn set_title(&mut self, title: &str);
    fn set_visible(&mut self, visible: bool);
    /// Clear the active marker everywhere, then set it on `track`'s row if one exists.
    fn mark_active(&mut self, track: Option<&TrackDescriptor>);
}
