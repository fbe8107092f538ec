//! Ephemeral view state of one board session.
//!
//! Kept apart from the vocabulary store and the sentence: nothing here is
//! ever shared with other sessions.
//!
//! # Invariants
//! - Changing the active collection resets the page to 0.
//! - A reorder selection never survives a collection change.
//! - Reorder mode is only reachable from edit mode.

use crate::model::category::CollectionKey;
use crate::model::tile::TileId;
use serde::{Deserialize, Serialize};

/// What a tile tap means right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "mode")]
pub enum InteractionMode {
    /// Taps feed the sentence.
    #[default]
    Speak,
    /// Taps open the tile editor.
    Edit,
    /// Taps pick and drop tiles within the active folder.
    Reorder { selected: Option<TileId> },
}

impl InteractionMode {
    pub fn is_editing(self) -> bool {
        !matches!(self, Self::Speak)
    }

    pub fn selected(self) -> Option<TileId> {
        match self {
            Self::Reorder { selected } => selected,
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    active: CollectionKey,
    page: usize,
    mode: InteractionMode,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            active: CollectionKey::Home,
            page: 0,
            mode: InteractionMode::Speak,
        }
    }
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &CollectionKey {
        &self.active
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Switches folder. Leaves reorder mode back to plain edit mode.
    pub fn set_active(&mut self, key: CollectionKey) {
        self.active = key;
        self.page = 0;
        if matches!(self.mode, InteractionMode::Reorder { .. }) {
            self.mode = InteractionMode::Edit;
        }
    }

    /// Flips edit mode; leaving edit mode also leaves reorder mode.
    pub fn toggle_edit(&mut self) -> bool {
        self.mode = if self.mode.is_editing() {
            InteractionMode::Speak
        } else {
            InteractionMode::Edit
        };
        self.mode.is_editing()
    }

    /// Flips reorder mode. Returns `None` when reorder is unavailable.
    pub fn toggle_reorder(&mut self) -> Option<bool> {
        match self.mode {
            InteractionMode::Speak => None,
            InteractionMode::Reorder { .. } => {
                self.mode = InteractionMode::Edit;
                Some(false)
            }
            InteractionMode::Edit if self.active.is_home() => None,
            InteractionMode::Edit => {
                self.mode = InteractionMode::Reorder { selected: None };
                Some(true)
            }
        }
    }

    /// Enters reorder mode with `id` already picked up.
    pub fn begin_reorder(&mut self, id: TileId) -> bool {
        if !self.mode.is_editing() || self.active.is_home() {
            return false;
        }
        self.mode = InteractionMode::Reorder { selected: Some(id) };
        true
    }

    pub fn select(&mut self, id: Option<TileId>) {
        if let InteractionMode::Reorder { selected } = &mut self.mode {
            *selected = id;
        }
    }

    /// Drops the reorder selection if it points at `id`.
    pub fn forget(&mut self, id: TileId) {
        if self.mode.selected() == Some(id) {
            self.select(None);
        }
    }

    /// Moves one page forward, stopping at the last page.
    pub fn next_page(&mut self, total_pages: usize) -> usize {
        self.page = clamp_page(self.page.saturating_add(1), total_pages);
        self.page
    }

    pub fn previous_page(&mut self, total_pages: usize) -> usize {
        self.page = clamp_page(self.page.saturating_sub(1), total_pages);
        self.page
    }

    /// Moves `delta` pages in one step, clamped to the valid range.
    pub fn shift_page(&mut self, delta: isize, total_pages: usize) -> usize {
        let target = if delta >= 0 {
            self.page.saturating_add(delta.unsigned_abs())
        } else {
            self.page.saturating_sub(delta.unsigned_abs())
        };
        self.page = clamp_page(target, total_pages);
        self.page
    }

    /// Pulls the page back in range after the collection shrank.
    pub fn clamp(&mut self, total_pages: usize) {
        self.page = clamp_page(self.page, total_pages);
    }
}

/// `ceil(len / per_page)`; zero for an empty collection.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    len.div_ceil(per_page)
}

/// Index range of `page` within a collection of `len` tiles.
pub fn page_bounds(len: usize, per_page: usize, page: usize) -> std::ops::Range<usize> {
    let per_page = per_page.max(1);
    let start = page.saturating_mul(per_page).min(len);
    let end = start.saturating_add(per_page).min(len);
    start..end
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.min(total_pages.saturating_sub(1))
}
