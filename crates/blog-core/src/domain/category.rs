use serde::{Deserialize, Serialize};

/// Category entity - a fixed label offered to clients when writing a post.
///
/// Categories are not persisted and are not enforced against
/// [`Post::category`](super::Post), which stays free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: u32,
    pub name: String,
}

impl Category {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// The built-in category list, fixed at process start.
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::new(1, "Technology"),
            Self::new(2, "Lifestyle"),
            Self::new(3, "Travel"),
        ]
    }
}
