// ABOUTME: Venue identifiers, ingredient availability rows, and curated recipe lists
// ABOUTME: Accepts both the per-venue map shape and legacy available_at_<venue> columns
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Column prefix of the legacy fixed-venue flag shape (snake case)
const LEGACY_FLAG_PREFIX: &str = "available_at_";
/// Column prefix of the legacy fixed-venue flag shape (camel case)
const LEGACY_FLAG_PREFIX_CAMEL: &str = "availableAt";

/// Opaque venue identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VenueId(String);

impl VenueId {
    /// Wrap a venue identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VenueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for VenueId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VenueId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One row of the ingredient availability table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawAvailabilityRow")]
pub struct AvailabilityRow {
    /// Ingredient identifier; rows without one are malformed and skipped
    pub ingredient_id: Option<String>,
    /// Stock flag per venue
    pub venues: BTreeMap<VenueId, bool>,
}

impl AvailabilityRow {
    /// Build a row from `(venue, in_stock)` pairs
    pub fn new<I, V>(ingredient_id: impl Into<String>, flags: I) -> Self
    where
        I: IntoIterator<Item = (V, bool)>,
        V: Into<VenueId>,
    {
        Self {
            ingredient_id: Some(ingredient_id.into()),
            venues: flags
                .into_iter()
                .map(|(venue, in_stock)| (venue.into(), in_stock))
                .collect(),
        }
    }

    /// Row with no ingredient identifier
    #[must_use]
    pub fn malformed() -> Self {
        Self {
            ingredient_id: None,
            venues: BTreeMap::new(),
        }
    }
}

/// Wire shape accepted for availability rows
#[derive(Deserialize)]
struct RawAvailabilityRow {
    #[serde(default, alias = "ingredientId")]
    ingredient_id: Option<String>,
    #[serde(default)]
    venues: Option<BTreeMap<String, bool>>,
    #[serde(flatten)]
    columns: serde_json::Map<String, serde_json::Value>,
}

impl From<RawAvailabilityRow> for AvailabilityRow {
    fn from(raw: RawAvailabilityRow) -> Self {
        let mut venues: BTreeMap<VenueId, bool> = raw
            .venues
            .unwrap_or_default()
            .into_iter()
            .map(|(venue, in_stock)| (VenueId::from(venue), in_stock))
            .collect();

        for (column, value) in raw.columns {
            let Some(in_stock) = value.as_bool() else {
                continue;
            };
            if let Some(venue) = legacy_venue_name(&column) {
                venues.entry(VenueId::from(venue)).or_insert(in_stock);
            }
        }

        Self {
            ingredient_id: raw.ingredient_id.filter(|id| !id.trim().is_empty()),
            venues,
        }
    }
}

/// Map `available_at_venue_a` or `availableAtVenueA` to `venue_a`
fn legacy_venue_name(column: &str) -> Option<String> {
    if let Some(venue) = column.strip_prefix(LEGACY_FLAG_PREFIX) {
        return (!venue.is_empty()).then(|| venue.to_owned());
    }
    let camel = column.strip_prefix(LEGACY_FLAG_PREFIX_CAMEL)?;
    if camel.is_empty() {
        return None;
    }
    let mut snake = String::with_capacity(camel.len() + 4);
    for (index, ch) in camel.chars().enumerate() {
        if ch.is_uppercase() {
            if index > 0 {
                snake.push('_');
            }
            snake.extend(ch.to_lowercase());
        } else {
            snake.push(ch);
        }
    }
    Some(snake)
}

/// Editorially selected recipes for one venue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuratedList {
    /// Venue the list belongs to
    pub venue: VenueId,
    /// Recipe identifiers in editorial order
    #[serde(default, alias = "recipeIds")]
    pub recipe_ids: Vec<String>,
}

impl CuratedList {
    /// Whether the list includes a recipe
    #[must_use]
    pub fn contains(&self, recipe_id: &str) -> bool {
        self.recipe_ids.iter().any(|id| id == recipe_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_columns_fold_into_venue_map() {
        let row: AvailabilityRow = serde_json::from_str(
            r#"{"ingredientId": "rum", "availableAtVenueA": true, "available_at_harbour": false}"#,
        )
        .unwrap();
        assert_eq!(row.ingredient_id.as_deref(), Some("rum"));
        assert_eq!(row.venues.get(&VenueId::from("venue_a")), Some(&true));
        assert_eq!(row.venues.get(&VenueId::from("harbour")), Some(&false));
    }

    #[test]
    fn test_explicit_venue_map_wins_over_legacy_column() {
        let row: AvailabilityRow = serde_json::from_str(
            r#"{"ingredient_id": "mint", "venues": {"harbour": true}, "available_at_harbour": false}"#,
        )
        .unwrap();
        assert_eq!(row.venues.get(&VenueId::from("harbour")), Some(&true));
    }

    #[test]
    fn test_missing_ingredient_id_is_kept_as_none() {
        let row: AvailabilityRow =
            serde_json::from_str(r#"{"venues": {"harbour": true}}"#).unwrap();
        assert_eq!(row.ingredient_id, None);
    }
}
