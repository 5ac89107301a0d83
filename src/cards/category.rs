//! Categories - named collections of card faces.
//!
//! A `Category` is the static data a deck is dealt from. Each `Item` becomes
//! one pair in the deck: its name is the pair key, its glyph is what the
//! player sees when the card is face-up.

use serde::{Deserialize, Serialize};

/// One face a pair of cards can carry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Item name. Doubles as the pair key, so it must be unique within its
    /// category.
    pub name: String,

    /// Display glyph (an emoji in the built-in categories).
    pub glyph: String,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
        }
    }
}

/// A named collection of items.
///
/// ## Example
///
/// ```
/// use memory_match::cards::Category;
///
/// let birds = Category::new("Birds")
///     .with_item("Owl", "🦉")
///     .with_item("Eagle", "🦅");
///
/// assert_eq!(birds.len(), 2);
/// assert!(birds.item("Owl").is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, as shown in the category picker.
    pub name: String,

    /// Items available to deal from.
    pub items: Vec<Item>,
}

impl Category {
    /// Create an empty category.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Add an item (builder pattern).
    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, glyph: impl Into<String>) -> Self {
        self.items.push(Item::new(name, glyph));
        self
    }

    /// Number of items, which is also the largest pair count this category
    /// can deal.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the category has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by name.
    #[must_use]
    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name == name)
    }

    /// The first item name that appears more than once, if any.
    #[must_use]
    pub fn duplicate_item(&self) -> Option<&str> {
        self.items
            .iter()
            .enumerate()
            .find(|(idx, item)| self.items[..*idx].iter().any(|prev| prev.name == item.name))
            .map(|(_, item)| item.name.as_str())
    }
}

/// The reference game's animal set.
#[must_use]
pub fn animals() -> Category {
    Category::new("Animals")
        .with_item("Dog", "🐶")
        .with_item("Cat", "🐱")
        .with_item("Monkey", "🐵")
        .with_item("Tiger", "🐯")
        .with_item("Panda", "🐼")
        .with_item("Lion", "🦁")
        .with_item("Elephant", "🐘")
        .with_item("Rabbit", "🐰")
}

/// The reference game's fruit set.
#[must_use]
pub fn fruits() -> Category {
    Category::new("Fruits")
        .with_item("Apple", "🍎")
        .with_item("Banana", "🍌")
        .with_item("Grapes", "🍇")
        .with_item("Pineapple", "🍍")
        .with_item("Orange", "🍊")
        .with_item("Watermelon", "🍉")
        .with_item("Strawberry", "🍓")
        .with_item("Cherry", "🍒")
}
