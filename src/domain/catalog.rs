//! The content catalog: categorized affirmations and quotes.
//!
//! The catalog is built once at startup and never mutated. Renderers receive
//! it explicitly (usually behind an `Arc`) instead of reaching for globals.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::ContentError;

// ============================================================================
// Built-in Content
// ============================================================================

const CONFIDENCE: &[&str] = &[
    "I believe in myself and my abilities.",
    "I radiate self-respect and inner strength.",
    "I am worthy of success and happiness.",
    "I trust myself to make the right decisions.",
    "I handle challenges with grace and confidence.",
    "I am proud of who I am becoming.",
    "My confidence grows stronger every day.",
    "I speak with clarity and conviction.",
    "I release doubt and welcome courage.",
    "I am enough just as I am.",
];

const HEALTH: &[&str] = &[
    "My body is strong, capable, and healing every day.",
    "I make healthy choices with ease and joy.",
    "I am grateful for my healthy body, mind, and spirit.",
    "I listen to my body and give it what it needs.",
    "Every cell in my body vibrates with health.",
    "I nourish my body with love and respect.",
    "I am energised, refreshed, and rejuvenated.",
    "My immune system is powerful and protective.",
    "I release stress and invite calm.",
    "I honour my body with rest and movement.",
];

const WEALTH: &[&str] = &[
    "I attract wealth and abundance effortlessly.",
    "Money flows to me from many sources.",
    "I am financially free and secure.",
    "My income is constantly increasing.",
    "I deserve to be well-compensated for my skills.",
    "Abundance surrounds me at all times.",
    "I welcome new opportunities for financial growth.",
    "I manage my money wisely and with gratitude.",
    "My wealth creates a positive impact.",
    "I release scarcity and embrace prosperity.",
];

const SPIRITUALITY: &[&str] = &[
    "I trust the universe is guiding me perfectly.",
    "I am aligned with my highest purpose.",
    "My spirit is grounded, peaceful, and full of love.",
    "I am connected to a source greater than myself.",
    "I trust the timing of my life.",
    "I listen to my inner voice with clarity.",
    "Peace flows through me like a gentle river.",
    "I am a divine being having a human experience.",
    "Gratitude is my spiritual practice.",
    "I radiate love, compassion, and understanding.",
];

const QUOTES: &[&str] = &[
    "Believe you can and you're halfway there. – Theodore Roosevelt",
    "The best way to predict the future is to create it. – Peter Drucker",
    "Do not wait for the perfect time — make the time perfect.",
    "Act as if what you do makes a difference. It does. – William James",
    "Small steps in the right direction are still steps forward.",
    "Success is not final, failure is not fatal: It is the courage to continue that counts. – Winston Churchill",
    "You miss 100% of the shots you don't take. – Wayne Gretzky",
    "The only limit to our realisation of tomorrow is our doubts of today. – Franklin D. Roosevelt",
    "Everything you’ve ever wanted is on the other side of fear. – George Addair",
    "Don’t watch the clock; do what it does. Keep going. – Sam Levenson",
    "Doubt kills more dreams than failure ever will. – Suzy Kassem",
    "Whether you think you can or you think you can’t, you’re right. – Henry Ford",
    "It always seems impossible until it’s done. – Nelson Mandela",
    "Start where you are. Use what you have. Do what you can. – Arthur Ashe",
    "Happiness is not something ready made. It comes from your own actions. – Dalai Lama",
    "The mind is everything. What you think you become. – Buddha",
    "Your life does not get better by chance, it gets better by change. – Jim Rohn",
    "You are never too old to set another goal or to dream a new dream. – C.S. Lewis",
    "Opportunities don't happen. You create them. – Chris Grosser",
    "Discipline is the bridge between goals and accomplishment. – Jim Rohn",
];

// ============================================================================
// Category
// ============================================================================

/// A named, ordered group of display items.
///
/// Order is display-relevant: the first item doubles as the category teaser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name, e.g. "Confidence".
    pub name: String,
    /// Items in insertion order.
    pub items: Vec<String>,
}

impl Category {
    /// Creates a category from anything string-like.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

// ============================================================================
// Content Catalog
// ============================================================================

/// On-disk shape of a user supplied catalog.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
    quotes: Vec<String>,
}

/// Immutable catalog of affirmations (grouped and flattened) and quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentCatalog {
    categories: Vec<Category>,
    affirmations: Vec<String>,
    quotes: Vec<String>,
}

impl ContentCatalog {
    /// Builds a catalog and derives the flattened affirmation list.
    ///
    /// Category names must be unique; later duplicates are dropped so that
    /// categories stay disjoint.
    #[must_use]
    pub fn new(categories: Vec<Category>, quotes: Vec<String>) -> Self {
        let mut unique: Vec<Category> = Vec::with_capacity(categories.len());
        for category in categories {
            if unique.iter().any(|c| c.name == category.name) {
                tracing::warn!(category = %category.name, "duplicate category dropped");
                continue;
            }
            unique.push(category);
        }

        let affirmations = unique
            .iter()
            .flat_map(|c| c.items.iter().cloned())
            .collect();

        Self {
            categories: unique,
            affirmations,
            quotes,
        }
    }

    /// The catalog shipped with the application.
    #[must_use]
    pub fn builtin() -> Self {
        let categories = [
            ("Confidence", CONFIDENCE),
            ("Health", HEALTH),
            ("Wealth", WEALTH),
            ("Spirituality", SPIRITUALITY),
        ]
        .into_iter()
        .map(|(name, items)| Category::new(name, items.iter().copied()))
        .collect();

        Self::new(categories, QUOTES.iter().map(|q| (*q).to_string()).collect())
    }

    /// Parses a catalog from JSON of the form
    /// `{"categories": [{"name": .., "items": [..]}], "quotes": [..]}`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::Parse` for malformed JSON and
    /// `ContentError::InvalidInput` when the catalog would leave the random
    /// picker with nothing to choose from.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| ContentError::parse(e.to_string()))?;
        let catalog = Self::new(file.categories, file.quotes);

        if catalog.affirmations.is_empty() {
            return Err(ContentError::invalid_input("catalog has no affirmations"));
        }
        if catalog.quotes.is_empty() {
            return Err(ContentError::invalid_input("catalog has no quotes"));
        }
        Ok(catalog)
    }

    /// Loads the catalog at `path`, or the built-in one when no path is given
    /// or the file cannot be used.
    #[must_use]
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::builtin();
        };

        let loaded = fs::read_to_string(path)
            .map_err(|e| ContentError::invalid_input(e.to_string()))
            .and_then(|content| Self::from_json_str(&content));

        match loaded {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), "loaded content catalog");
                catalog
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "content file unusable, using built-in catalog");
                Self::builtin()
            }
        }
    }

    /// Categories in display order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Looks up a category by name.
    #[cfg(test)]
    #[must_use]
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Every affirmation across all categories, in category order.
    #[must_use]
    pub fn affirmations(&self) -> &[String] {
        &self.affirmations
    }

    /// Quotes, already formatted with attribution.
    #[must_use]
    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }
}

impl Default for ContentCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ============================================================================
// Tests
// ============================================================================
