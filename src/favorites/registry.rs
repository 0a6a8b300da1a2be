use dioxus::logger::tracing::{debug, warn};

use super::{leading_segment, ButtonState, FavoriteSet, FavoriteTrigger, FavoritesView, ListRow};
use crate::db::{PersistentStore, Settings, StoreError};

/// Owns the favorite set and keeps the store and every view in step with it.
///
/// The set is read from the store once, in [`FavoritesRegistry::load`]. Each toggle writes the
/// whole set back before returning. A failed write is logged and the in-memory change stands,
/// so the page stays consistent with what the user clicked even if durability was lost.
pub struct FavoritesRegistry<S, V> {
    store: S,
    view: V,
    favorites: FavoriteSet,
    storage_key: String,
    video_root: String,
    empty_text: String,
}

impl<S, V> FavoritesRegistry<S, V>
where
    S: PersistentStore,
    V: FavoritesView,
{
    pub fn load(store: S, view: V, settings: &Settings) -> Self {
        let favorites = read_favorites(&store, &settings.favorites_key);
        debug!(count = favorites.len(), "favorites loaded");
        Self {
            store,
            view,
            favorites,
            storage_key: settings.favorites_key.clone(),
            video_root: settings.video_root.clone(),
            empty_text: settings.empty_favorites_text.clone(),
        }
    }

    pub fn is_favorite(&self, identity: &str) -> bool {
        self.favorites.contains(identity)
    }

    /// Flip membership of `identity` and persist the full set.
    ///
    /// Returns the new membership, or `None` when `identity` is empty.
    pub fn toggle(&mut self, identity: &str) -> Option<bool> {
        if identity.is_empty() {
            return None;
        }

        let member = self.favorites.toggle(identity);
        debug!(identity, member, "favorite toggled");
        self.persist();
        Some(member)
    }

    /// Sync every star button and rebuild the favorites panel.
    pub fn render(&mut self) {
        for trigger in self.view.triggers() {
            let member = trigger
                .identity()
                .map(|identity| self.is_favorite(&identity))
                .unwrap_or(false);
            self.view
                .apply_button(&trigger, ButtonState::for_membership(member));
        }

        let rows = self.list_rows();
        self.view.replace_list(&rows);
    }

    /// A star button was clicked.
    pub fn on_user_toggle(&mut self, trigger: &V::Trigger) {
        let Some(identity) = trigger.identity() else {
            return;
        };
        if self.toggle(&identity).is_some() {
            self.render();
        }
    }

    #[cfg(test)]
    pub(crate) fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[cfg(test)]
    pub(crate) fn view(&self) -> &V {
        &self.view
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &S {
        &self.store
    }

    fn list_rows(&self) -> Vec<ListRow> {
        if self.favorites.is_empty() {
            return vec![ListRow::Placeholder(self.empty_text.clone())];
        }

        let root = self.video_root.trim_end_matches('/');
        self.favorites
            .iter()
            .map(|identity| {
                let segment = leading_segment(identity);
                ListRow::Link {
                    label: segment.to_string(),
                    href: format!("{root}/{segment}"),
                }
            })
            .collect()
    }

    fn persist(&mut self) {
        if let Err(err) = write_favorites(&mut self.store, &self.storage_key, &self.favorites) {
            warn!("favorites not saved: {err}");
        }
    }
}

fn write_favorites<S: PersistentStore>(
    store: &mut S,
    key: &str,
    favorites: &FavoriteSet,
) -> Result<(), StoreError> {
    let json = favorites.to_json()?;
    store.set(key, &json)
}

fn read_favorites<S: PersistentStore>(store: &S, key: &str) -> FavoriteSet {
    match store.get(key) {
        Ok(Some(raw)) => FavoriteSet::from_json(&raw).unwrap_or_else(|err| {
            warn!("ignoring malformed favorites: {err}");
            FavoriteSet::default()
        }),
        Ok(None) => FavoriteSet::default(),
        Err(err) => {
            warn!("favorites unavailable: {err}");
            FavoriteSet::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::testing::MemoryStore;
    use crate::favorites::StarGlyph;
    use std::collections::BTreeMap;

    #[derive(Debug, Clone, PartialEq)]
    struct Button(Option<String>);

    impl FavoriteTrigger for Button {
        fn identity(&self) -> Option<String> {
            self.0.clone()
        }
    }

    #[derive(Debug, Default, Clone, PartialEq)]
    struct RecordingView {
        buttons: Vec<Button>,
        states: BTreeMap<usize, ButtonState>,
        rows: Vec<ListRow>,
    }

    impl RecordingView {
        fn with_buttons(ids: &[Option<&str>]) -> Self {
            Self {
                buttons: ids.iter().map(|id| Button(id.map(str::to_string))).collect(),
                ..Default::default()
            }
        }

        fn active_count(&self) -> usize {
            self.states.values().filter(|state| state.active).count()
        }

        fn state_of(&self, id: &str) -> Option<ButtonState> {
            let index = self
                .buttons
                .iter()
                .position(|button| button.0.as_deref() == Some(id))?;
            self.states.get(&index).copied()
        }
    }

    impl FavoritesView for RecordingView {
        type Trigger = Button;

        fn triggers(&self) -> Vec<Button> {
            self.buttons.clone()
        }

        fn apply_button(&mut self, trigger: &Button, state: ButtonState) {
            if let Some(index) = self.buttons.iter().position(|button| button == trigger) {
                self.states.insert(index, state);
            }
        }

        fn replace_list(&mut self, rows: &[ListRow]) {
            self.rows = rows.to_vec();
        }
    }

    fn registry(
        store: MemoryStore,
        view: RecordingView,
    ) -> FavoritesRegistry<MemoryStore, RecordingView> {
        FavoritesRegistry::load(store, view, &Settings::default())
    }

    fn placeholder() -> Vec<ListRow> {
        vec![ListRow::Placeholder("List is empty".to_string())]
    }

    #[test]
    fn empty_set_renders_single_placeholder() {
        let mut favorites = registry(
            MemoryStore::default(),
            RecordingView::with_buttons(&[Some("acc1/a.mp4"), Some("acc2/b.mp4")]),
        );
        favorites.render();

        assert_eq!(favorites.view().rows, placeholder());
        assert_eq!(favorites.view().active_count(), 0);
        assert_eq!(favorites.view().states.len(), 2);
    }

    #[test]
    fn toggle_on_empty_set_then_back() {
        let mut favorites = registry(
            MemoryStore::default(),
            RecordingView::with_buttons(&[Some("acc2/clip.mp4")]),
        );
        favorites.render();

        favorites.on_user_toggle(&Button(Some("acc2/clip.mp4".to_string())));
        assert_eq!(
            favorites.favorites().iter().collect::<Vec<_>>(),
            vec!["acc2/clip.mp4"]
        );
        assert_eq!(
            favorites.view().rows,
            vec![ListRow::Link {
                label: "acc2".to_string(),
                href: "/video/acc2".to_string(),
            }]
        );
        assert_eq!(
            favorites.view().state_of("acc2/clip.mp4"),
            Some(ButtonState {
                active: true,
                glyph: StarGlyph::Outline
            })
        );
        assert_eq!(
            favorites.store().values.get("favorites").map(String::as_str),
            Some(r#"["acc2/clip.mp4"]"#)
        );

        favorites.on_user_toggle(&Button(Some("acc2/clip.mp4".to_string())));
        assert!(favorites.favorites().is_empty());
        assert_eq!(favorites.view().rows, placeholder());
        assert_eq!(
            favorites.view().state_of("acc2/clip.mp4"),
            Some(ButtonState {
                active: false,
                glyph: StarGlyph::Solid
            })
        );
    }

    #[test]
    fn double_toggle_restores_stored_content() {
        let initial = r#"["acc1/a.mp4","acc3/c.mp4"]"#;
        let mut favorites = registry(
            MemoryStore::with("favorites", initial),
            RecordingView::default(),
        );
        let was_member = favorites.is_favorite("acc1/a.mp4");

        favorites.toggle("acc1/a.mp4");
        assert_ne!(favorites.is_favorite("acc1/a.mp4"), was_member);
        favorites.toggle("acc1/a.mp4");

        assert_eq!(favorites.is_favorite("acc1/a.mp4"), was_member);
        // Removal then re-append moves the entry to the end.
        assert_eq!(
            favorites.store().values.get("favorites").map(String::as_str),
            Some(r#"["acc3/c.mp4","acc1/a.mp4"]"#)
        );

        favorites.toggle("new/x.mp4");
        favorites.toggle("new/x.mp4");
        assert_eq!(
            favorites.store().values.get("favorites").map(String::as_str),
            Some(r#"["acc3/c.mp4","acc1/a.mp4"]"#)
        );
    }

    #[test]
    fn double_toggle_of_absent_identity_restores_exact_content() {
        let initial = r#"["acc1/a.mp4"]"#;
        let mut favorites = registry(
            MemoryStore::with("favorites", initial),
            RecordingView::default(),
        );
        favorites.toggle("acc9/z.mp4");
        favorites.toggle("acc9/z.mp4");
        assert_eq!(
            favorites.store().values.get("favorites").map(String::as_str),
            Some(initial)
        );
        assert_eq!(favorites.store().writes, 2);
    }

    #[test]
    fn render_is_idempotent() {
        let mut favorites = registry(
            MemoryStore::with("favorites", r#"["acc1/a.mp4","acc2/b.mp4"]"#),
            RecordingView::with_buttons(&[Some("acc1/a.mp4"), Some("acc3/c.mp4"), None]),
        );
        favorites.render();
        let first = favorites.view().clone();
        favorites.render();
        assert_eq!(favorites.view(), &first);

        assert_eq!(first.active_count(), 1);
        assert_eq!(first.rows.len(), 2);
    }

    #[test]
    fn stale_favorites_still_listed() {
        let mut favorites = registry(
            MemoryStore::with("favorites", r#"["gone/old.mp4"]"#),
            RecordingView::with_buttons(&[Some("acc1/a.mp4")]),
        );
        favorites.render();
        assert_eq!(
            favorites.view().rows,
            vec![ListRow::Link {
                label: "gone".to_string(),
                href: "/video/gone".to_string(),
            }]
        );
        assert_eq!(favorites.view().active_count(), 0);
    }

    #[test]
    fn empty_identity_is_rejected() {
        let mut favorites = registry(MemoryStore::default(), RecordingView::default());
        assert_eq!(favorites.toggle(""), None);
        favorites.on_user_toggle(&Button(None));
        favorites.on_user_toggle(&Button(Some(String::new())));

        assert!(favorites.favorites().is_empty());
        assert_eq!(favorites.store().writes, 0);
        assert!(favorites.view().rows.is_empty());
    }

    #[test]
    fn malformed_store_degrades_to_empty_set() {
        for raw in ["{oops", "null", r#"{"a":1}"#, "[1,2]"] {
            let favorites = registry(MemoryStore::with("favorites", raw), RecordingView::default());
            assert!(favorites.favorites().is_empty(), "{raw}");
        }
    }

    #[test]
    fn unavailable_store_keeps_toggles_in_memory() {
        let store = MemoryStore {
            broken: true,
            ..Default::default()
        };
        let mut favorites = registry(store, RecordingView::default());
        assert!(favorites.favorites().is_empty());

        assert_eq!(favorites.toggle("acc1/a.mp4"), Some(true));
        assert!(favorites.is_favorite("acc1/a.mp4"));
        assert!(favorites.store().values.is_empty());
    }

    #[test]
    fn rows_follow_insertion_order() {
        let mut favorites = registry(MemoryStore::default(), RecordingView::default());
        favorites.toggle("b/2.mp4");
        favorites.toggle("a/1.mp4");
        favorites.render();
        let labels: Vec<_> = favorites
            .view()
            .rows
            .iter()
            .map(|row| match row {
                ListRow::Link { label, .. } => label.as_str(),
                ListRow::Placeholder(text) => text.as_str(),
            })
            .collect();
        assert_eq!(labels, vec!["b", "a"]);
    }

    #[test]
    fn startup_with_blocked_storage_renders_empty_state() {
        let store = MemoryStore {
            broken: true,
            ..Default::default()
        };
        let settings = crate::db::load_settings(&store);
        assert_eq!(settings, Settings::default());

        let mut favorites = FavoritesRegistry::load(
            store,
            RecordingView::with_buttons(&[Some("acc1/a.mp4")]),
            &settings,
        );
        favorites.render();
        assert_eq!(favorites.view().rows, placeholder());
        assert_eq!(favorites.view().active_count(), 0);

        favorites.on_user_toggle(&Button(Some("acc1/a.mp4".to_string())));
        assert_eq!(favorites.view().active_count(), 1);
        assert_eq!(favorites.view().rows.len(), 1);
    }
}
