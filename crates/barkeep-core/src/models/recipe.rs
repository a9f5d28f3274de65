// ABOUTME: Recipe and ingredient-use models for the cocktail catalog
// ABOUTME: Lenient deserialization so absent or null collections default to empty
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Preparation difficulty of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Built in the glass, no special technique
    Easy,
    /// Shaken or stirred with a few components
    Medium,
    /// House syrups, layering, or specialist technique
    Hard,
}

impl Difficulty {
    /// All difficulties in ascending order
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Lowercase label used for display and matching
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a difficulty label is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty '{0}' (expected easy, medium or hard)")]
pub struct ParseDifficultyError(pub String);

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseDifficultyError(s.to_owned())),
        }
    }
}

/// Glass type: the catalog stores either a single glass or a list of options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Glass {
    /// A single glass name
    One(String),
    /// Several acceptable glasses
    Many(Vec<String>),
}

impl Glass {
    /// Glass names as a slice regardless of representation
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::One(name) => std::slice::from_ref(name),
            Self::Many(names) => names,
        }
    }
}

impl fmt::Display for Glass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values().join(" / "))
    }
}

/// One ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientUse {
    /// Referenced ingredient identifier (absent on hand-written free-text lines)
    #[serde(
        default,
        alias = "id",
        alias = "ingredientId",
        deserialize_with = "blank_as_none"
    )]
    pub ingredient_id: Option<String>,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Quantity as written, e.g. "50 ml"
    #[serde(default, alias = "quantity")]
    pub amount: Option<String>,
    /// Preparation notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Whether the recipe cannot be made without it
    #[serde(
        default = "essential_by_default",
        alias = "isEssential",
        deserialize_with = "essential_flag"
    )]
    pub is_essential: bool,
}

impl IngredientUse {
    /// Essential ingredient line
    pub fn essential(ingredient_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ingredient_id: Some(ingredient_id.into()),
            name: name.into(),
            amount: None,
            notes: None,
            is_essential: true,
        }
    }

    /// Garnish or substitution that never blocks availability
    pub fn optional(ingredient_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            is_essential: false,
            ..Self::essential(ingredient_id, name)
        }
    }

    /// Attach a quantity
    #[must_use]
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amount = Some(amount.into());
        self
    }
}

/// A cocktail entry in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    /// Stable identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Spirit category identifier
    #[serde(
        default,
        alias = "category",
        alias = "categoryId",
        deserialize_with = "null_as_default"
    )]
    pub category_id: String,
    /// Ingredient lines in recipe order
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<IngredientUse>,
    /// Flavor profile labels
    #[serde(
        default,
        alias = "flavor_profile",
        alias = "flavorProfile",
        deserialize_with = "null_as_default"
    )]
    pub flavors: Vec<String>,
    /// Free-form tags
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Thematic category identifiers
    #[serde(
        default,
        alias = "thematicCategories",
        deserialize_with = "null_as_default"
    )]
    pub thematic_categories: Vec<String>,
    /// Serving glass
    #[serde(default, alias = "glassType", alias = "glass_type")]
    pub glass: Option<Glass>,
    /// Preparation difficulty; unknown labels load as `None`
    #[serde(default, deserialize_with = "lenient_difficulty")]
    pub difficulty: Option<Difficulty>,
    /// Method
    #[serde(default)]
    pub instructions: Option<String>,
    /// Background story
    #[serde(default)]
    pub history: Option<String>,
}

impl Recipe {
    /// Create a recipe with only identity fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category_id: String::new(),
            ingredients: Vec::new(),
            flavors: Vec::new(),
            tags: Vec::new(),
            thematic_categories: Vec::new(),
            glass: None,
            difficulty: None,
            instructions: None,
            history: None,
        }
    }

    /// Set the spirit category
    #[must_use]
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = category_id.into();
        self
    }

    /// Append an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, ingredient: IngredientUse) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    /// Replace flavor labels
    #[must_use]
    pub fn with_flavors<I, S>(mut self, flavors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.flavors = flavors.into_iter().map(Into::into).collect();
        self
    }

    /// Replace tags
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace thematic category ids
    #[must_use]
    pub fn with_thematic<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.thematic_categories = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Set the glass
    #[must_use]
    pub fn with_glass(mut self, glass: Glass) -> Self {
        self.glass = Some(glass);
        self
    }

    /// Set the difficulty
    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Glass names, empty when the recipe has no glass
    #[must_use]
    pub fn glass_values(&self) -> &[String] {
        self.glass.as_ref().map_or(&[], Glass::values)
    }

    /// Ingredient lines that block availability when missing
    pub fn essential_ingredients(&self) -> impl Iterator<Item = &IngredientUse> {
        self.ingredients.iter().filter(|ingredient| ingredient.is_essential)
    }
}

const fn essential_by_default() -> bool {
    true
}

fn essential_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|id| !id.trim().is_empty()))
}

fn lenient_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|label| label.parse().ok()))
}
