//! Identifier resolution - maps a caller-supplied id string onto a stored post.
//!
//! Clients do not always send back the id exactly as it was issued (stray
//! whitespace, truncated copy-paste, upper-cased UUIDs). Resolution runs an
//! ordered list of [`MatchStrategy`] values over the posts; the first strategy
//! that finds a post wins, and within a strategy the first post in iteration
//! order wins.

use uuid::Uuid;

use crate::domain::Post;

/// One tier of the resolution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// The query parses as a UUID equal to the post id.
    ExactNative,
    /// The query equals the canonical text form of the post id.
    ExactText,
    /// The query contains, or is contained in, the canonical text id.
    Substring,
}

impl MatchStrategy {
    /// Strategies in the order they are tried.
    pub const ORDER: [Self; 3] = [Self::ExactNative, Self::ExactText, Self::Substring];

    pub fn matches(self, query: &IdQuery<'_>, post: &Post) -> bool {
        match self {
            Self::ExactNative => query.native == Some(post.id),
            Self::ExactText => post.id_string() == query.raw,
            Self::Substring => {
                let id = post.id_string();
                id.contains(query.raw) || query.raw.contains(id.as_str())
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExactNative => "exact-native",
            Self::ExactText => "exact-text",
            Self::Substring => "substring",
        }
    }
}

/// A normalized lookup key.
#[derive(Debug, Clone, Copy)]
pub struct IdQuery<'a> {
    raw: &'a str,
    native: Option<Uuid>,
}

impl<'a> IdQuery<'a> {
    /// Trim `raw` and pre-parse its native form. Blank input yields `None`:
    /// an empty string is a substring of every id and must never resolve.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        Some(Self {
            raw,
            native: Uuid::parse_str(raw).ok(),
        })
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// The query as a native id, if it is syntactically one.
    pub fn native(&self) -> Option<Uuid> {
        self.native
    }
}

/// A successful resolution.
#[derive(Debug, Clone, Copy)]
pub struct Resolved<'p> {
    pub post: &'p Post,
    pub strategy: MatchStrategy,
}

/// Resolve `query` against `posts`, trying every strategy in [`MatchStrategy::ORDER`].
pub fn resolve<'p>(query: &IdQuery<'_>, posts: &'p [Post]) -> Option<Resolved<'p>> {
    resolve_with(&MatchStrategy::ORDER, query, posts)
}

/// Resolve with an explicit strategy list.
pub fn resolve_with<'p>(
    strategies: &[MatchStrategy],
    query: &IdQuery<'_>,
    posts: &'p [Post],
) -> Option<Resolved<'p>> {
    strategies.iter().find_map(|&strategy| {
        posts
            .iter()
            .find(|post| strategy.matches(query, post))
            .map(|post| Resolved { post, strategy })
    })
}
