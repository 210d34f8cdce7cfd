use serde::{Deserialize, Serialize};

/// Demo record returned by the items endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    pub description: String,
}

/// Response model for item listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub items: Vec<Item>,
}

impl Item {
    fn new(id: u32, name: &str, description: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    /// The fixed demo catalog, in id order. Never mutated at runtime.
    pub fn catalog() -> Vec<Item> {
        vec![
            Item::new(1, "Item 1", "First item"),
            Item::new(2, "Item 2", "Second item"),
            Item::new(3, "Item 3", "Third item"),
        ]
    }
}
