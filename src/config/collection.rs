//! Collection selector definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Name the service uses for the collection behind the heart button.
const LIKED: &str = "liked";

/// Which of the followed user's collections to mirror.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Collection {
    /// Mixes the user hearted on the web UI (default).
    #[default]
    Liked,
    /// A named collection, identified by its slug (e.g. `ipod-shuffle`).
    Named(String),
}

impl Collection {
    /// Path segment of the mix set endpoint for this collection.
    pub fn mix_set_key(&self, user_id: u64) -> String {
        match self {
            Collection::Liked => format!("liked:{}", user_id),
            Collection::Named(name) => format!("collection:{}:{}", user_id, name),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collection::Liked => write!(f, "{}", LIKED),
            Collection::Named(name) => write!(f, "{}", name),
        }
    }
}

impl From<String> for Collection {
    fn from(s: String) -> Self {
        if s.eq_ignore_ascii_case(LIKED) {
            Collection::Liked
        } else {
            Collection::Named(s)
        }
    }
}

impl From<Collection> for String {
    fn from(collection: Collection) -> Self {
        collection.to_string()
    }
}

impl FromStr for Collection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Collection::from(s.trim().to_string()))
    }
}
