//! Vocabulary repository contracts and in-memory implementation.
//!
//! # Responsibility
//! - Own the home collection and the per-category tile collections.
//! - Provide primitive, all-or-nothing tile mutations by stable ID.
//!
//! # Invariants
//! - Write paths call `Tile::validate()` before mutating.
//! - A tile ID appears in at most one collection at any time.
//! - A failed call leaves every collection exactly as it was.

use crate::model::category::CollectionKey;
use crate::model::tile::{Tile, TileId, TileValidationError};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for vocabulary store operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(TileValidationError),
    TileNotFound {
        collection: CollectionKey,
        id: TileId,
    },
    DuplicateTile(TileId),
    IndexOutOfRange {
        collection: CollectionKey,
        index: usize,
        len: usize,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::TileNotFound { collection, id } => {
                write!(f, "tile {id} not found in collection `{collection}`")
            }
            Self::DuplicateTile(id) => write!(f, "tile already stored: {id}"),
            Self::IndexOutOfRange {
                collection,
                index,
                len,
            } => write!(
                f,
                "index {index} out of range for collection `{collection}` of length {len}"
            ),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TileValidationError> for RepoError {
    fn from(value: TileValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for tile collections.
pub trait VocabRepository {
    /// Live tiles of one collection; empty for unknown categories.
    fn list(&self, collection: &CollectionKey) -> &[Tile];
    /// Current index of `id` within `collection`.
    fn position(&self, collection: &CollectionKey, id: TileId) -> Option<usize>;
    /// Finds the owning collection of `id` across the whole store.
    fn locate(&self, id: TileId) -> Option<(CollectionKey, &Tile)>;
    /// Appends one new tile to the end of `collection`.
    fn append(&mut self, collection: &CollectionKey, tile: Tile) -> RepoResult<()>;
    /// Replaces the stored tile with the same ID, keeping its position.
    fn replace(&mut self, collection: &CollectionKey, tile: Tile) -> RepoResult<()>;
    /// Removes one tile and returns it.
    fn remove(&mut self, collection: &CollectionKey, id: TileId) -> RepoResult<Tile>;
    /// Removes `tile.id` from `from` and appends `tile` to the end of `to`.
    fn relocate(
        &mut self,
        from: &CollectionKey,
        to: &CollectionKey,
        tile: Tile,
    ) -> RepoResult<()>;
    /// Moves the tile at `from_index` to the adjusted `to_index`.
    fn reorder(
        &mut self,
        collection: &CollectionKey,
        from_index: usize,
        to_index: usize,
    ) -> RepoResult<()>;
    /// Every stored tile ID with its owning collection.
    fn snapshot(&self) -> Vec<(CollectionKey, TileId)>;
}

/// In-memory vocabulary store. Edits live for the session only.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVocabRepository {
    home: Vec<Tile>,
    by_category: BTreeMap<String, Vec<Tile>>,
}

impl InMemoryVocabRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from seed collections, validating every tile.
    pub fn with_seed(
        home: Vec<Tile>,
        by_category: impl IntoIterator<Item = (String, Vec<Tile>)>,
    ) -> RepoResult<Self> {
        let mut repo = Self::new();
        for tile in home {
            repo.append(&CollectionKey::Home, tile)?;
        }
        for (key, tiles) in by_category {
            let collection = CollectionKey::parse(&key);
            for tile in tiles {
                repo.append(&collection, tile)?;
            }
        }
        Ok(repo)
    }

    fn tiles(&self, collection: &CollectionKey) -> Option<&Vec<Tile>> {
        match collection {
            CollectionKey::Home => Some(&self.home),
            CollectionKey::Category(key) => self.by_category.get(key),
        }
    }

    fn tiles_mut(&mut self, collection: &CollectionKey) -> Option<&mut Vec<Tile>> {
        match collection {
            CollectionKey::Home => Some(&mut self.home),
            CollectionKey::Category(key) => self.by_category.get_mut(key),
        }
    }

    fn tiles_mut_or_insert(&mut self, collection: &CollectionKey) -> &mut Vec<Tile> {
        match collection {
            CollectionKey::Home => &mut self.home,
            CollectionKey::Category(key) => self.by_category.entry(key.clone()).or_default(),
        }
    }

    fn contains(&self, id: TileId) -> bool {
        self.locate(id).is_some()
    }
}

impl VocabRepository for InMemoryVocabRepository {
    fn list(&self, collection: &CollectionKey) -> &[Tile] {
        self.tiles(collection).map(Vec::as_slice).unwrap_or(&[])
    }

    fn position(&self, collection: &CollectionKey, id: TileId) -> Option<usize> {
        self.list(collection).iter().position(|tile| tile.id == id)
    }

    fn locate(&self, id: TileId) -> Option<(CollectionKey, &Tile)> {
        if let Some(tile) = self.home.iter().find(|tile| tile.id == id) {
            return Some((CollectionKey::Home, tile));
        }
        self.by_category.iter().find_map(|(key, tiles)| {
            tiles
                .iter()
                .find(|tile| tile.id == id)
                .map(|tile| (CollectionKey::Category(key.clone()), tile))
        })
    }

    fn append(&mut self, collection: &CollectionKey, tile: Tile) -> RepoResult<()> {
        tile.validate()?;
        if self.contains(tile.id) {
            return Err(RepoError::DuplicateTile(tile.id));
        }
        self.tiles_mut_or_insert(collection).push(tile);
        Ok(())
    }

    fn replace(&mut self, collection: &CollectionKey, tile: Tile) -> RepoResult<()> {
        tile.validate()?;
        let index = self
            .position(collection, tile.id)
            .ok_or_else(|| RepoError::TileNotFound {
                collection: collection.clone(),
                id: tile.id,
            })?;
        if let Some(tiles) = self.tiles_mut(collection) {
            tiles[index] = tile;
        }
        Ok(())
    }

    fn remove(&mut self, collection: &CollectionKey, id: TileId) -> RepoResult<Tile> {
        let index = self
            .position(collection, id)
            .ok_or_else(|| RepoError::TileNotFound {
                collection: collection.clone(),
                id,
            })?;
        self.tiles_mut(collection)
            .map(|tiles| tiles.remove(index))
            .ok_or_else(|| RepoError::TileNotFound {
                collection: collection.clone(),
                id,
            })
    }

    fn relocate(
        &mut self,
        from: &CollectionKey,
        to: &CollectionKey,
        tile: Tile,
    ) -> RepoResult<()> {
        tile.validate()?;
        if from == to {
            return self.replace(from, tile);
        }
        let index = self
            .position(from, tile.id)
            .ok_or_else(|| RepoError::TileNotFound {
                collection: from.clone(),
                id: tile.id,
            })?;
        // Every check is done; the two writes below cannot fail.
        if let Some(tiles) = self.tiles_mut(from) {
            tiles.remove(index);
        }
        self.tiles_mut_or_insert(to).push(tile);
        Ok(())
    }

    fn reorder(
        &mut self,
        collection: &CollectionKey,
        from_index: usize,
        to_index: usize,
    ) -> RepoResult<()> {
        let len = self.list(collection).len();
        for index in [from_index, to_index] {
            if index >= len {
                return Err(RepoError::IndexOutOfRange {
                    collection: collection.clone(),
                    index,
                    len,
                });
            }
        }
        if from_index == to_index {
            return Ok(());
        }
        if let Some(tiles) = self.tiles_mut(collection) {
            let moved = tiles.remove(from_index);
            tiles.insert(adjusted_insert_index(from_index, to_index), moved);
        }
        Ok(())
    }

    fn snapshot(&self) -> Vec<(CollectionKey, TileId)> {
        let home = self
            .home
            .iter()
            .map(|tile| (CollectionKey::Home, tile.id));
        let categories = self.by_category.iter().flat_map(|(key, tiles)| {
            tiles
                .iter()
                .map(move |tile| (CollectionKey::Category(key.clone()), tile.id))
        });
        home.chain(categories).collect()
    }
}

/// Insertion index after removing the tile at `from_index`.
///
/// Moving forward shifts the target left by one because the removal already
/// shifted every later tile.
pub fn adjusted_insert_index(from_index: usize, to_index: usize) -> usize {
    if from_index < to_index {
        to_index - 1
    } else {
        to_index
    }
}
