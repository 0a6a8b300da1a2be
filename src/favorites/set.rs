use serde::{Deserialize, Serialize};

/// Favorite identifiers in the order they were added. No duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct FavoriteSet {
    items: Vec<String>,
}

impl FavoriteSet {
    pub fn contains(&self, identity: &str) -> bool {
        self.items.iter().any(|item| item == identity)
    }

    /// Flip membership of `identity`. Returns whether it is a member afterwards.
    pub fn toggle(&mut self, identity: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|item| item == identity) {
            self.items.remove(pos);
            false
        } else {
            self.items.push(identity.to_string());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        serde_json::from_str(raw)
    }
}

impl From<Vec<String>> for FavoriteSet {
    fn from(raw: Vec<String>) -> Self {
        let mut items: Vec<String> = Vec::with_capacity(raw.len());
        for item in raw {
            if !items.contains(&item) {
                items.push(item);
            }
        }
        Self { items }
    }
}

impl From<FavoriteSet> for Vec<String> {
    fn from(set: FavoriteSet) -> Self {
        set.items
    }
}

/// Text before the first `/`, or the whole identifier when there is none.
pub fn leading_segment(identity: &str) -> &str {
    identity.split('/').next().unwrap_or(identity)
}
