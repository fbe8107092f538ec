//! Tile mutation engine.
//!
//! # Responsibility
//! - Validate add/edit/delete/move requests above the repository layer.
//! - Own the category registry used to resolve destination folders.
//!
//! # Invariants
//! - Every tile lives in exactly one collection before and after each call.
//! - A rejected request leaves the store untouched.
//! - Reordering the home collection is not allowed.
//! - Moving a tile to another folder goes through `edit`, never `move_*`.

use crate::model::category::{Category, CollectionKey, HOME_KEY};
use crate::model::tile::{Tile, TileDraft, TileId, TileValidationError};
use crate::repo::category_repo::{CategoryError, CategoryRegistry};
use crate::repo::vocab_repo::{RepoError, VocabRepository};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Color given to user-created folders when none is chosen.
pub const DEFAULT_CATEGORY_COLOR: &str = "#A3E6A3";
/// Icon given to user-created folders when none is chosen.
pub const DEFAULT_CATEGORY_ICON: &str = "folder";

/// Errors from tile mutation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VocabServiceError {
    /// Draft failed tile validation.
    Validation(TileValidationError),
    /// Destination category is not registered.
    UnknownCategory(String),
    /// Tile is not in the addressed collection.
    TileNotFound {
        collection: CollectionKey,
        id: TileId,
    },
    /// Index outside the addressed collection.
    IndexOutOfRange {
        collection: CollectionKey,
        index: usize,
        len: usize,
    },
    /// Home collection order is fixed.
    HomeReorderNotAllowed,
    /// Category creation failure.
    Category(CategoryError),
    /// Repository-level failure.
    Repo(RepoError),
}

impl Display for VocabServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::UnknownCategory(key) => write!(f, "unknown category: {key}"),
            Self::TileNotFound { collection, id } => {
                write!(f, "tile {id} not found in collection `{collection}`")
            }
            Self::IndexOutOfRange {
                collection,
                index,
                len,
            } => write!(
                f,
                "index {index} out of range for collection `{collection}` of length {len}"
            ),
            Self::HomeReorderNotAllowed => write!(f, "home tiles cannot be reordered"),
            Self::Category(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for VocabServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Category(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TileValidationError> for VocabServiceError {
    fn from(value: TileValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<CategoryError> for VocabServiceError {
    fn from(value: CategoryError) -> Self {
        Self::Category(value)
    }
}

impl From<RepoError> for VocabServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::TileNotFound { collection, id } => Self::TileNotFound { collection, id },
            RepoError::IndexOutOfRange {
                collection,
                index,
                len,
            } => Self::IndexOutOfRange {
                collection,
                index,
                len,
            },
            other => Self::Repo(other),
        }
    }
}

/// Use-case facade over the vocabulary store.
pub struct VocabService<R: VocabRepository> {
    repo: R,
    categories: CategoryRegistry,
}

impl<R: VocabRepository> VocabService<R> {
    /// Creates service with the built-in category list.
    pub fn new(repo: R) -> Self {
        Self::with_registry(repo, CategoryRegistry::new())
    }

    pub fn with_registry(repo: R, categories: CategoryRegistry) -> Self {
        Self { repo, categories }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Live tiles of `key`; empty for categories with no tiles yet.
    pub fn list(&self, key: &CollectionKey) -> &[Tile] {
        self.repo.list(key)
    }

    /// Finds the owning collection and tile for `id`.
    pub fn find(&self, id: TileId) -> Option<(CollectionKey, &Tile)> {
        self.repo.locate(id)
    }

    /// Built-in folders followed by user-created ones.
    pub fn categories(&self) -> Vec<Category> {
        self.categories.all()
    }

    /// Appends a new tile built from `draft` to the end of `key`.
    ///
    /// # Errors
    /// - `Validation` when label or say is blank after trim.
    /// - `UnknownCategory` when `key` names no registered folder.
    pub fn add(
        &mut self,
        key: &CollectionKey,
        draft: TileDraft,
    ) -> Result<TileId, VocabServiceError> {
        let result = self.try_add(key, draft);
        log_outcome("tile_add", key, &result);
        result
    }

    fn try_add(
        &mut self,
        key: &CollectionKey,
        draft: TileDraft,
    ) -> Result<TileId, VocabServiceError> {
        self.ensure_known(key)?;
        let tile = draft.into_tile()?;
        let id = tile.id;
        self.repo.append(key, tile)?;
        Ok(id)
    }

    /// Applies `draft` to tile `id` in `key`, optionally moving it to `new_key`.
    ///
    /// Same key: replaced in place with its ID and position kept.
    /// Different key: removed from `key` and appended to the end of `new_key`
    /// in one repository call.
    pub fn edit(
        &mut self,
        key: &CollectionKey,
        id: TileId,
        draft: TileDraft,
        new_key: &CollectionKey,
    ) -> Result<Tile, VocabServiceError> {
        let result = self.try_edit(key, id, draft, new_key);
        log_outcome("tile_edit", key, &result);
        result
    }

    fn try_edit(
        &mut self,
        key: &CollectionKey,
        id: TileId,
        draft: TileDraft,
        new_key: &CollectionKey,
    ) -> Result<Tile, VocabServiceError> {
        self.ensure_known(new_key)?;
        let existing = self
            .repo
            .position(key, id)
            .map(|index| &self.repo.list(key)[index])
            .ok_or_else(|| VocabServiceError::TileNotFound {
                collection: key.clone(),
                id,
            })?;
        let updated = draft.apply_to(existing)?;
        if key == new_key {
            self.repo.replace(key, updated.clone())?;
        } else {
            self.repo.relocate(key, new_key, updated.clone())?;
        }
        Ok(updated)
    }

    /// Removes tile `id` from `key` and returns it.
    pub fn delete(&mut self, key: &CollectionKey, id: TileId) -> Result<Tile, VocabServiceError> {
        let result = self.repo.remove(key, id).map_err(VocabServiceError::from);
        log_outcome("tile_delete", key, &result);
        result
    }

    /// Moves `moving_id` to the slot of `target_id` within one folder.
    pub fn move_tile(
        &mut self,
        key: &CollectionKey,
        moving_id: TileId,
        target_id: TileId,
    ) -> Result<(), VocabServiceError> {
        let not_found = |id| VocabServiceError::TileNotFound {
            collection: key.clone(),
            id,
        };
        let from = self
            .repo
            .position(key, moving_id)
            .ok_or_else(|| not_found(moving_id))?;
        let to = self
            .repo
            .position(key, target_id)
            .ok_or_else(|| not_found(target_id))?;
        self.move_by_index(key, from, to)
    }

    /// Removes the tile at `from` and inserts it at `to - 1` when moving
    /// forward, or at `to` otherwise.
    pub fn move_by_index(
        &mut self,
        key: &CollectionKey,
        from: usize,
        to: usize,
    ) -> Result<(), VocabServiceError> {
        let result = if key.is_home() {
            Err(VocabServiceError::HomeReorderNotAllowed)
        } else {
            self.repo
                .reorder(key, from, to)
                .map_err(VocabServiceError::from)
        };
        log_outcome("tile_move", key, &result);
        result
    }

    /// Registers a user folder; blank color/icon fall back to defaults.
    pub fn create_category(
        &mut self,
        name: &str,
        color: Option<&str>,
        icon: Option<&str>,
    ) -> Result<Category, VocabServiceError> {
        let color = color
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_COLOR);
        let icon = icon
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_ICON);
        match self.categories.create(name, color, icon) {
            Ok(category) => {
                info!(
                    "event=category_create module=vocab status=ok key={}",
                    category.key
                );
                Ok(category)
            }
            Err(err) => {
                warn!("event=category_create module=vocab status=error error={err}");
                Err(err.into())
            }
        }
    }

    fn ensure_known(&self, key: &CollectionKey) -> Result<(), VocabServiceError> {
        match key {
            CollectionKey::Home => Ok(()),
            CollectionKey::Category(name) if name != HOME_KEY && self.categories.contains(name) => {
                Ok(())
            }
            CollectionKey::Category(name) => Err(VocabServiceError::UnknownCategory(name.clone())),
        }
    }
}

fn log_outcome<T>(event: &str, key: &CollectionKey, result: &Result<T, VocabServiceError>) {
    match result {
        Ok(_) => info!("event={event} module=vocab status=ok collection={key}"),
        Err(err) => warn!("event={event} module=vocab status=error collection={key} error={err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{VocabService, VocabServiceError, DEFAULT_CATEGORY_COLOR};
    use crate::model::category::CollectionKey;
    use crate::model::tile::{Tile, TileDraft, TileValidationError};
    use crate::repo::vocab_repo::{InMemoryVocabRepository, VocabRepository};

    fn service_with(key: &CollectionKey, names: &[&str]) -> VocabService<InMemoryVocabRepository> {
        let mut repo = InMemoryVocabRepository::new();
        for name in names {
            repo.append(key, Tile::new(*name, *name, "#FFFFFF"))
                .expect("seed append");
        }
        VocabService::new(repo)
    }

    fn labels(service: &VocabService<InMemoryVocabRepository>, key: &CollectionKey) -> Vec<String> {
        service.list(key).iter().map(|tile| tile.label.clone()).collect()
    }

    #[test]
    fn add_appends_with_say_fallback() {
        let food = CollectionKey::category("food");
        let mut service = service_with(&food, &["apple"]);
        let id = service
            .add(&food, TileDraft::new("  grapes ", "#FFB366"))
            .expect("add should succeed");

        let added = service.list(&food).last().expect("added tile");
        assert_eq!(added.id, id);
        assert_eq!(added.label, "grapes");
        assert_eq!(added.say, "grapes");
    }

    #[test]
    fn add_rejects_blank_label_and_unknown_category() {
        let food = CollectionKey::category("food");
        let mut service = service_with(&food, &["apple"]);

        let err = service
            .add(&food, TileDraft::new("   ", "#FFB366"))
            .unwrap_err();
        assert_eq!(err, VocabServiceError::Validation(TileValidationError::EmptyLabel));

        let err = service
            .add(&CollectionKey::category("space"), TileDraft::new("moon", "#FFB366"))
            .unwrap_err();
        assert_eq!(err, VocabServiceError::UnknownCategory("space".to_string()));
        assert_eq!(service.repo().snapshot().len(), 1);
    }

    #[test]
    fn edit_in_place_keeps_position_and_id() {
        let food = CollectionKey::category("food");
        let mut service = service_with(&food, &["apple", "pear", "milk"]);
        let pear = service.list(&food)[1].clone();

        let updated = service
            .edit(&food, pear.id, TileDraft::from_tile(&pear).say("a pear"), &food)
            .expect("edit should succeed");

        assert_eq!(updated.id, pear.id);
        assert_eq!(service.list(&food)[1].say, "a pear");
        assert_eq!(labels(&service, &food), ["apple", "pear", "milk"]);
    }

    #[test]
    fn edit_with_new_category_moves_to_end() {
        let home = CollectionKey::Home;
        let food = CollectionKey::category("food");
        let mut service = service_with(&home, &["I", "apple"]);
        service
            .add(&food, TileDraft::new("milk", "#FFB366"))
            .expect("seed food");
        let apple = service.list(&home)[1].clone();

        service
            .edit(&home, apple.id, TileDraft::from_tile(&apple), &food)
            .expect("recategorize");

        assert_eq!(labels(&service, &home), ["I"]);
        assert_eq!(labels(&service, &food), ["milk", "apple"]);
        assert_eq!(service.find(apple.id).map(|(key, _)| key), Some(food));
    }

    #[test]
    fn edit_to_unknown_category_changes_nothing() {
        let home = CollectionKey::Home;
        let mut service = service_with(&home, &["I"]);
        let tile = service.list(&home)[0].clone();
        let err = service
            .edit(
                &home,
                tile.id,
                TileDraft::from_tile(&tile),
                &CollectionKey::category("nowhere"),
            )
            .unwrap_err();
        assert!(matches!(err, VocabServiceError::UnknownCategory(_)));
        assert_eq!(service.list(&home), [tile]);
    }

    #[test]
    fn move_follows_adjustment_rule_and_rejects_home() {
        let food = CollectionKey::category("food");
        let mut service = service_with(&food, &["a", "b", "c", "d", "e"]);
        let a = service.list(&food)[0].id;
        let d = service.list(&food)[3].id;
        service.move_tile(&food, a, d).expect("move forward");
        assert_eq!(labels(&service, &food), ["b", "c", "a", "d", "e"]);

        service.move_by_index(&food, 4, 1).expect("move backward");
        assert_eq!(labels(&service, &food), ["b", "e", "c", "a", "d"]);

        let mut home = service_with(&CollectionKey::Home, &["x", "y"]);
        assert_eq!(
            home.move_by_index(&CollectionKey::Home, 0, 1),
            Err(VocabServiceError::HomeReorderNotAllowed)
        );
    }

    #[test]
    fn move_out_of_range_is_typed_error() {
        let food = CollectionKey::category("food");
        let mut service = service_with(&food, &["a", "b"]);
        let err = service.move_by_index(&food, 0, 9).unwrap_err();
        assert_eq!(
            err,
            VocabServiceError::IndexOutOfRange {
                collection: food.clone(),
                index: 9,
                len: 2,
            }
        );
        assert_eq!(labels(&service, &food), ["a", "b"]);
    }

    #[test]
    fn delete_removes_and_returns_tile() {
        let food = CollectionKey::category("food");
        let mut service = service_with(&food, &["a", "b"]);
        let a = service.list(&food)[0].clone();
        assert_eq!(service.delete(&food, a.id), Ok(a.clone()));
        assert!(matches!(
            service.delete(&food, a.id),
            Err(VocabServiceError::TileNotFound { .. })
        ));
        assert_eq!(labels(&service, &food), ["b"]);
    }

    #[test]
    fn created_category_accepts_tiles() {
        let mut service = service_with(&CollectionKey::Home, &[]);
        let category = service
            .create_category("Field Trip", None, Some("  "))
            .expect("create category");
        assert_eq!(category.key, "field_trip");
        assert_eq!(category.color, DEFAULT_CATEGORY_COLOR);
        assert_eq!(category.icon, "folder");
        assert_eq!(service.categories().last(), Some(&category));

        let key = category.collection();
        assert!(service.list(&key).is_empty());
        service
            .add(&key, TileDraft::new("bus", "#FFFFFF"))
            .expect("add to new category");
        assert_eq!(labels(&service, &key), ["bus"]);
    }
}
