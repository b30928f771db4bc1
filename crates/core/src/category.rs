//! The closed set of question categories and the listing selector.
//!
//! Every consumer (filter predicate, badge tone, editor default) matches on
//! [`Category`] exhaustively, so adding a category is a compile-checked change.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Category of an interview question.
///
/// Serialized with the exact display labels used throughout the catalog
/// (`"System Design"`, not `"system_design"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Backend,
    Frontend,
    #[serde(rename = "System Design")]
    SystemDesign,
    #[serde(rename = "Data Structures")]
    DataStructures,
    Database,
}

/// Sentinel label meaning "no category restriction".
pub const SELECTOR_ALL: &str = "All";

impl Category {
    /// Every category, in the order the listing presents them.
    pub const ALL: [Category; 5] = [
        Self::Backend,
        Self::Frontend,
        Self::SystemDesign,
        Self::DataStructures,
        Self::Database,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Backend => "Backend",
            Self::Frontend => "Frontend",
            Self::SystemDesign => "System Design",
            Self::DataStructures => "Data Structures",
            Self::Database => "Database",
        }
    }

    /// Parse an exact, case-sensitive label.
    pub fn from_label(label: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == label)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid category '{label}'. Must be one of: {}",
                    Self::ALL.map(Self::label).join(", ")
                ))
            })
    }

    /// Colour family used for the category badge.
    pub fn badge_tone(self) -> BadgeTone {
        match self {
            Self::Backend => BadgeTone::Primary,
            Self::Frontend => BadgeTone::Accent,
            Self::SystemDesign => BadgeTone::Orange,
            Self::DataStructures => BadgeTone::Green,
            Self::Database => BadgeTone::Purple,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s)
    }
}

/// Badge colour family, one per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Primary,
    Accent,
    Orange,
    Green,
    Purple,
}

// ---------------------------------------------------------------------------
// Selector
// ---------------------------------------------------------------------------

/// Active category filter: either everything or exactly one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Only(Category),
}

impl CategorySelector {
    /// Category predicate: `All` admits everything, otherwise exact equality.
    pub fn admits(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }

    /// Parse `"All"` or an exact category label.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        if value == SELECTOR_ALL {
            Ok(Self::All)
        } else {
            Category::from_label(value).map(Self::Only)
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => SELECTOR_ALL,
            Self::Only(category) => category.label(),
        }
    }
}

impl From<Category> for CategorySelector {
    fn from(category: Category) -> Self {
        Self::Only(category)
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategorySelector {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CategorySelector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for CategorySelector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
