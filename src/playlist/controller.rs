use dioxus::logger::tracing::debug;

use super::{Playlist, PlaybackDevice, PlayerSurface, TrackDescriptor, TrackSource};
use crate::db::Settings;

/// Drives the single page player through the discovered tracks in order.
///
/// The cursor is `None` until the first successful `play_at`. Once playback runs off the end
/// of the playlist the cursor keeps its last value and only the player is hidden.
pub struct PlaylistController<T, D, S> {
    source: T,
    device: D,
    surface: S,
    playlist: Playlist,
    current_index: Option<usize>,
    visible: bool,
    audio_root: String,
    title_extensions: Vec<String>,
}

impl<T, D, S> PlaylistController<T, D, S>
where
    T: TrackSource,
    D: PlaybackDevice,
    S: PlayerSurface,
{
    pub fn new(source: T, device: D, surface: S, settings: &Settings) -> Self {
        Self {
            source,
            device,
            surface,
            playlist: Playlist::default(),
            current_index: None,
            visible: false,
            audio_root: settings.audio_root.clone(),
            title_extensions: settings.title_extensions.clone(),
        }
    }

    /// Replace the playlist with a fresh scan of the page.
    pub fn discover(&mut self) {
        self.playlist = Playlist::new(self.source.scan());
        debug!(tracks = self.playlist.len(), "playlist discovered");
    }

    /// Start the track at `index`. Out-of-range indices are ignored.
    pub fn play_at(&mut self, index: usize) {
        let Some(track) = self.playlist.get(index).cloned() else {
            debug!(index, len = self.playlist.len(), "play_at ignored: out of range");
            return;
        };

        self.current_index = Some(index);

        let address = track.audio_address(&self.audio_root);
        debug!(index, %address, "playing track");
        self.device.set_source(&address);
        self.device.load();
        self.device.play();

        self.surface
            .set_title(&track.display_title(&self.title_extensions));
        self.set_visible(true);
        self.surface.mark_active(Some(&track));
    }

    /// A play trigger was clicked. The click is the freshness boundary for the snapshot.
    pub fn on_user_select(&mut self, track: &TrackDescriptor) {
        self.discover();
        match self.playlist.position(track) {
            Some(index) => self.play_at(index),
            None => debug!(
                collection = %track.collection_id,
                item = %track.item_name,
                "selected track not in playlist"
            ),
        }
    }

    /// The device finished the current track on its own.
    pub fn on_track_ended(&mut self) {
        let Some(index) = self.current_index else {
            return;
        };

        let next = index + 1;
        if next < self.playlist.len() {
            self.play_at(next);
        } else {
            debug!(index, "end of playlist");
            self.device.pause();
            self.set_visible(false);
        }
    }

    #[cfg(test)]
    pub(crate) fn current_index(&self) -> Option<usize> {
        self.current_index
    }

    #[cfg(test)]
    pub(crate) fn current_track(&self) -> Option<&TrackDescriptor> {
        self.current_index.and_then(|index| self.playlist.get(index))
    }

    #[cfg(test)]
    pub(crate) fn is_visible(&self) -> bool {
        self.visible
    }

    #[cfg(test)]
    pub(crate) fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    #[cfg(test)]
    pub(crate) fn device(&self) -> &D {
        &self.device
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.surface.set_visible(visible);
    }
}
