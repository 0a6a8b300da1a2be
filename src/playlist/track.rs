/// Identity of one playable item on the page.
///
/// Two descriptors are the same track when both the collection and the item name match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TrackDescriptor {
    pub collection_id: String,
    pub item_name: String,
}

impl TrackDescriptor {
    pub fn new(collection_id: impl Into<String>, item_name: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            item_name: item_name.into(),
        }
    }

    /// Playback address under `audio_root`, e.g. `/audio/acc1/song.mp3`.
    pub fn audio_address(&self, audio_root: &str) -> String {
        format!(
            "{}/{}/{}",
            audio_root.trim_end_matches('/'),
            self.collection_id,
            self.item_name
        )
    }

    /// Item name with a known audio extension removed, for the "now playing" title.
    pub fn display_title<S: AsRef<str>>(&self, extensions: &[S]) -> String {
        strip_extension(&self.item_name, extensions).to_string()
    }
}

/// Removes one trailing `.ext` (ASCII case-insensitive) when `ext` is in `extensions`.
pub fn strip_extension<'a, S: AsRef<str>>(name: &'a str, extensions: &[S]) -> &'a str {
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return name;
    };
    if extensions
        .iter()
        .any(|known| known.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
    {
        stem
    } else {
        name
    }
}

/// Snapshot of the page's playable items in document order.
///
/// Indices into a playlist are only meaningful until the next discovery replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Playlist {
    tracks: Vec<TrackDescriptor>,
}

impl Playlist {
    pub fn new(tracks: Vec<TrackDescriptor>) -> Self {
        Self { tracks }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&TrackDescriptor> {
        self.tracks.get(index)
    }

    pub fn position(&self, track: &TrackDescriptor) -> Option<usize> {
        self.tracks.iter().position(|candidate| candidate == track)
    }
}
