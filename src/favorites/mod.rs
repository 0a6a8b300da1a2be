//! Favorites kept in the persistent store and mirrored onto every star button and the
//! favorites panel.

mod registry;
mod set;

pub use registry::*;
pub use set::*;

/// A star button on the page.
pub trait FavoriteTrigger {
    fn identity(&self) -> Option<String>;
}

/// Which star glyph a button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StarGlyph {
    Solid,
    Outline,
}

/// Rendered state of a single star button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub active: bool,
    pub glyph: StarGlyph,
}

impl ButtonState {
    /// Members show the outline star, which removes them when clicked.
    pub fn for_membership(member: bool) -> Self {
        Self {
            active: member,
            glyph: if member {
                StarGlyph::Outline
            } else {
                StarGlyph::Solid
            },
        }
    }
}

/// One row of the favorites panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRow {
    Link { label: String, href: String },
    Placeholder(String),
}

/// Everything on the page that depends on favorite membership.
pub trait FavoritesView {
    type Trigger: FavoriteTrigger;

    fn triggers(&self) -> Vec<Self::Trigger>;
    fn apply_button(&mut self, trigger: &Self::Trigger, state: ButtonState);
    fn replace_list(&mut self, rows: &[ListRow]);
}
