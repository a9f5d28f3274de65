// ABOUTME: Catalog source trait with JSON directory and in-memory implementations
// ABOUTME: Loads recipes, categories, availability rows and curated lists per locale
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Barkeep Contributors

use crate::cache::CacheResource;
use crate::constants::data_files;
use crate::errors::{AppError, AppResult, ErrorCode};
use crate::models::{AvailabilityRow, Category, CuratedList, Recipe};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::collections::{HashMap, HashSet};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

/// Where catalog collections come from
///
/// Each load returns the whole collection. Implementations own their
/// timeouts; callers never cancel an in-flight load.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Recipes in the given locale
    ///
    /// # Errors
    ///
    /// Returns an error when the collection cannot be fetched or decoded
    async fn load_recipes(&self, locale: &str) -> AppResult<Vec<Recipe>>;

    /// Categories in the given locale
    ///
    /// # Errors
    ///
    /// Returns an error when the collection cannot be fetched or decoded
    async fn load_categories(&self, locale: &str) -> AppResult<Vec<Category>>;

    /// Ingredient availability rows for every venue
    ///
    /// # Errors
    ///
    /// Returns an error when the collection cannot be fetched or decoded
    async fn load_availability(&self) -> AppResult<Vec<AvailabilityRow>>;

    /// Curated recipe lists for every venue
    ///
    /// # Errors
    ///
    /// Returns an error when the collection cannot be fetched or decoded
    async fn load_curated(&self) -> AppResult<Vec<CuratedList>>;
}

/// Reads catalog collections from JSON files in a directory
///
/// Localized collections prefer `<name>.<locale>.json` and fall back to
/// `<name>.json`. A missing `curated.json` means no venue has a curated list.
#[derive(Debug, Clone)]
pub struct JsonCatalogSource {
    root: PathBuf,
}

impl JsonCatalogSource {
    /// Source reading from `root`
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Data directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn file(&self, name: &str, locale: Option<&str>) -> PathBuf {
        let file_name = match locale {
            Some(locale) => format!("{name}.{locale}.{}", data_files::EXTENSION),
            None => format!("{name}.{}", data_files::EXTENSION),
        };
        self.root.join(file_name)
    }

    async fn read_optional(path: &Path) -> AppResult<Option<String>> {
        match tokio::fs::read_to_string(path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::storage(format!("Failed to read {}", path.display()))
                .with_source(e)),
        }
    }

    async fn read_localized<T: DeserializeOwned>(&self, name: &str, locale: &str) -> AppResult<Vec<T>> {
        let localized = self.file(name, Some(locale));
        if let Some(contents) = Self::read_optional(&localized).await? {
            return decode_elements(&contents, &localized);
        }
        debug!(path = %localized.display(), "No localized file, using base file");
        self.read_required(name).await
    }

    async fn read_required<T: DeserializeOwned>(&self, name: &str) -> AppResult<Vec<T>> {
        let path = self.file(name, None);
        let contents = Self::read_optional(&path).await?.ok_or_else(|| {
            AppError::not_found(format!("Catalog file {}", path.display()))
        })?;
        decode_elements(&contents, &path)
    }
}

/// Decode a JSON array, skipping elements that do not fit `T`
fn decode_elements<T: DeserializeOwned>(contents: &str, path: &Path) -> AppResult<Vec<T>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(contents).map_err(|e| {
        AppError::new(
            ErrorCode::InvalidFormat,
            format!("{} is not a JSON array", path.display()),
        )
        .with_source(e)
    })?;

    let total = raw.len();
    let decoded: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(item) => Some(item),
            Err(e) => {
                warn!(path = %path.display(), index, error = %e, "Skipping malformed catalog entry");
                None
            }
        })
        .collect();

    debug!(path = %path.display(), total, decoded = decoded.len(), "Decoded catalog file");
    Ok(decoded)
}

#[async_trait]
impl CatalogSource for JsonCatalogSource {
    async fn load_recipes(&self, locale: &str) -> AppResult<Vec<Recipe>> {
        self.read_localized(data_files::RECIPES, locale).await
    }

    async fn load_categories(&self, locale: &str) -> AppResult<Vec<Category>> {
        self.read_localized(data_files::CATEGORIES, locale).await
    }

    async fn load_availability(&self) -> AppResult<Vec<AvailabilityRow>> {
        self.read_required(data_files::AVAILABILITY).await
    }

    async fn load_curated(&self) -> AppResult<Vec<CuratedList>> {
        let path = self.file(data_files::CURATED, None);
        match Self::read_optional(&path).await? {
            Some(contents) => decode_elements(&contents, &path),
            None => Ok(Vec::new()),
        }
    }
}

/// Fixed in-memory collections for tests and demos
///
/// Counts every load per resource and can be told to fail chosen resources.
/// Clones share the counters.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogSource {
    recipes: HashMap<String, Vec<Recipe>>,
    default_recipes: Vec<Recipe>,
    categories: HashMap<String, Vec<Category>>,
    default_categories: Vec<Category>,
    availability: Vec<AvailabilityRow>,
    curated: Vec<CuratedList>,
    failing: HashSet<CacheResource>,
    loads: Arc<LoadCounters>,
}

#[derive(Debug, Default)]
struct LoadCounters {
    recipes: AtomicUsize,
    categories: AtomicUsize,
    availability: AtomicUsize,
    curated: AtomicUsize,
}

impl LoadCounters {
    const fn counter(&self, resource: CacheResource) -> &AtomicUsize {
        match resource {
            CacheResource::Recipes => &self.recipes,
            CacheResource::Categories => &self.categories,
            CacheResource::Availability => &self.availability,
            CacheResource::Curated => &self.curated,
        }
    }
}

impl StaticCatalogSource {
    /// Empty source
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recipes served for every locale without its own list
    #[must_use]
    pub fn with_recipes(mut self, recipes: Vec<Recipe>) -> Self {
        self.default_recipes = recipes;
        self
    }

    /// Recipes served for one locale
    #[must_use]
    pub fn with_localized_recipes(mut self, locale: impl Into<String>, recipes: Vec<Recipe>) -> Self {
        self.recipes.insert(locale.into(), recipes);
        self
    }

    /// Categories served for every locale without its own list
    #[must_use]
    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.default_categories = categories;
        self
    }

    /// Categories served for one locale
    #[must_use]
    pub fn with_localized_categories(
        mut self,
        locale: impl Into<String>,
        categories: Vec<Category>,
    ) -> Self {
        self.categories.insert(locale.into(), categories);
        self
    }

    /// Availability rows
    #[must_use]
    pub fn with_availability(mut self, rows: Vec<AvailabilityRow>) -> Self {
        self.availability = rows;
        self
    }

    /// Curated lists
    #[must_use]
    pub fn with_curated(mut self, curated: Vec<CuratedList>) -> Self {
        self.curated = curated;
        self
    }

    /// Make every load of `resource` fail
    #[must_use]
    pub fn failing(mut self, resource: CacheResource) -> Self {
        self.failing.insert(resource);
        self
    }

    /// Number of loads of `resource` served so far, including failed ones
    #[must_use]
    pub fn load_count(&self, resource: CacheResource) -> usize {
        self.loads.counter(resource).load(Ordering::SeqCst)
    }

    fn begin_load(&self, resource: CacheResource) -> AppResult<()> {
        self.loads.counter(resource).fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&resource) {
            return Err(AppError::new(
                ErrorCode::ExternalServiceUnavailable,
                format!("{resource} source unavailable"),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn load_recipes(&self, locale: &str) -> AppResult<Vec<Recipe>> {
        self.begin_load(CacheResource::Recipes)?;
        Ok(self
            .recipes
            .get(locale)
            .unwrap_or(&self.default_recipes)
            .clone())
    }

    async fn load_categories(&self, locale: &str) -> AppResult<Vec<Category>> {
        self.begin_load(CacheResource::Categories)?;
        Ok(self
            .categories
            .get(locale)
            .unwrap_or(&self.default_categories)
            .clone())
    }

    async fn load_availability(&self) -> AppResult<Vec<AvailabilityRow>> {
        self.begin_load(CacheResource::Availability)?;
        Ok(self.availability.clone())
    }

    async fn load_curated(&self) -> AppResult<Vec<CuratedList>> {
        self.begin_load(CacheResource::Curated)?;
        Ok(self.curated.clone())
    }
}
