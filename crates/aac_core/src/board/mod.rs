//! Board session: routes tile taps by interaction mode.
//!
//! # Responsibility
//! - Own one session's store, sentence, speaker and view state.
//! - Feed taps to the sentence in speak mode, to the editor in edit mode and
//!   to the mutation engine in reorder mode.
//! - Hold the loaded subject board; its taps share the same sentence and
//!   speaker.
//!
//! # Invariants
//! - Taps only address tiles of the active collection.
//! - A reorder selection never points at a deleted tile.
//! - The current page is kept in range after deletions.

pub mod view;

use crate::config::BoardConfig;
use crate::model::category::{Category, CollectionKey};
use crate::model::tile::{Tile, TileDraft, TileId};
use crate::packs::{load_subject_board, PackSource, SubjectBoard};
use crate::repo::vocab_repo::{InMemoryVocabRepository, RepoResult, VocabRepository};
use crate::seed::seeded_repository;
use crate::service::vocab_service::{VocabService, VocabServiceError};
use crate::speech::sentence::Sentence;
use crate::speech::speaker::{SpeechEngine, Speaker};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use view::{page_bounds, total_pages, BoardView, InteractionMode};

/// Result of one tile tap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileActivation {
    /// Tile went into the sentence; `spoken` is what was sent to speech.
    Spoken { spoken: Option<String> },
    /// Edit mode: caller should open the editor prefilled with this tile.
    OpenEditor(Tile),
    /// Reorder mode: tile picked up.
    Selected(TileId),
    /// Reorder mode: same tile tapped twice, selection dropped.
    Deselected(TileId),
    /// Reorder mode: selected tile moved into the tapped tile's slot.
    Moved { moving: TileId, target: TileId },
}

/// Errors from board session operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Tile is not part of the active collection.
    TileNotVisible(TileId),
    /// Reorder needs edit mode and a non-home folder.
    ReorderUnavailable,
    /// Subject tap before any subject board was loaded.
    SubjectNotLoaded,
    /// Mutation engine failure.
    Vocab(VocabServiceError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TileNotVisible(id) => write!(f, "tile not in active collection: {id}"),
            Self::ReorderUnavailable => {
                write!(f, "reorder requires edit mode on a category folder")
            }
            Self::SubjectNotLoaded => write!(f, "no subject board loaded"),
            Self::Vocab(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Vocab(err) => Some(err),
            _ => None,
        }
    }
}

impl From<VocabServiceError> for BoardError {
    fn from(value: VocabServiceError) -> Self {
        Self::Vocab(value)
    }
}

pub struct Board<E: SpeechEngine, R: VocabRepository = InMemoryVocabRepository> {
    vocab: VocabService<R>,
    sentence: Sentence,
    speaker: Speaker<E>,
    view: BoardView,
    config: BoardConfig,
    subject: Option<SubjectBoard>,
}

impl<E: SpeechEngine> Board<E, InMemoryVocabRepository> {
    /// Board over the bundled vocabulary.
    pub fn seeded(engine: E, config: BoardConfig) -> RepoResult<Self> {
        let repo = seeded_repository()?;
        Ok(Self::new(VocabService::new(repo), engine, config))
    }
}

impl<E: SpeechEngine, R: VocabRepository> Board<E, R> {
    pub fn new(vocab: VocabService<R>, engine: E, config: BoardConfig) -> Self {
        let speaker = Speaker::new(engine, config.speech_options());
        Self {
            vocab,
            sentence: Sentence::new(),
            speaker,
            view: BoardView::new(),
            config,
            subject: None,
        }
    }

    pub fn vocab(&self) -> &VocabService<R> {
        &self.vocab
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn speaker(&self) -> &Speaker<E> {
        &self.speaker
    }

    pub fn view(&self) -> &BoardView {
        &self.view
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn categories(&self) -> Vec<Category> {
        self.vocab.categories()
    }

    pub fn select_collection(&mut self, key: CollectionKey) {
        debug!("event=collection_select module=board status=ok collection={key}");
        self.view.set_active(key);
    }

    /// Returns whether edit mode is now on.
    pub fn toggle_edit_mode(&mut self) -> bool {
        self.view.toggle_edit()
    }

    /// Returns whether reorder mode is now on.
    pub fn toggle_reorder_mode(&mut self) -> Result<bool, BoardError> {
        self.view.toggle_reorder().ok_or(BoardError::ReorderUnavailable)
    }

    /// Long-press: enters reorder mode with `id` picked up.
    pub fn begin_reorder(&mut self, id: TileId) -> Result<(), BoardError> {
        self.visible_tile(id)?;
        if self.view.begin_reorder(id) {
            Ok(())
        } else {
            Err(BoardError::ReorderUnavailable)
        }
    }

    /// Handles a tap on tile `id` of the active collection.
    pub fn activate_tile(&mut self, id: TileId) -> Result<TileActivation, BoardError> {
        let tile = self.visible_tile(id)?.clone();
        match self.view.mode() {
            InteractionMode::Speak => Ok(self.speak_tile(&tile)),
            InteractionMode::Edit => Ok(TileActivation::OpenEditor(tile)),
            InteractionMode::Reorder { selected: None } => {
                self.view.select(Some(id));
                Ok(TileActivation::Selected(id))
            }
            InteractionMode::Reorder {
                selected: Some(current),
            } if current == id => {
                self.view.select(None);
                Ok(TileActivation::Deselected(id))
            }
            InteractionMode::Reorder {
                selected: Some(moving),
            } => {
                self.view.select(None);
                let key = self.view.active().clone();
                self.vocab.move_tile(&key, moving, id)?;
                Ok(TileActivation::Moved { moving, target: id })
            }
        }
    }

    /// Loads the board for `subject`, or the configured default when blank.
    pub fn load_subject(&mut self, source: &impl PackSource, subject: &str) -> &SubjectBoard {
        let subject = match subject.trim() {
            "" => self.config.default_subject.clone(),
            name => name.to_string(),
        };
        self.subject.insert(load_subject_board(source, &subject))
    }

    pub fn subject_board(&self) -> Option<&SubjectBoard> {
        self.subject.as_ref()
    }

    /// Handles a tap on a tile of the loaded subject board.
    ///
    /// Subject boards have no edit mode: every tap feeds the sentence.
    pub fn activate_subject_tile(&mut self, id: TileId) -> Result<TileActivation, BoardError> {
        let board = self.subject.as_ref().ok_or(BoardError::SubjectNotLoaded)?;
        let tile = board
            .find_tile(id)
            .cloned()
            .ok_or(BoardError::TileNotVisible(id))?;
        Ok(self.speak_tile(&tile))
    }

    /// Adds a tile from the editor form.
    pub fn add_tile(
        &mut self,
        key: &CollectionKey,
        draft: TileDraft,
    ) -> Result<TileId, BoardError> {
        Ok(self.vocab.add(key, draft)?)
    }

    /// Saves the editor form for tile `id` of the active collection.
    pub fn edit_tile(
        &mut self,
        id: TileId,
        draft: TileDraft,
        new_key: &CollectionKey,
    ) -> Result<Tile, BoardError> {
        let key = self.view.active().clone();
        let updated = self.vocab.edit(&key, id, draft, new_key)?;
        if &key != new_key {
            self.view.forget(id);
            self.clamp_page();
        }
        Ok(updated)
    }

    /// Deletes tile `id` from the active collection.
    pub fn delete_tile(&mut self, id: TileId) -> Result<Tile, BoardError> {
        let key = self.view.active().clone();
        let removed = self.vocab.delete(&key, id)?;
        self.view.forget(id);
        self.clamp_page();
        Ok(removed)
    }

    /// Reorders within the active collection by tile ids.
    pub fn move_tile(&mut self, moving: TileId, target: TileId) -> Result<(), BoardError> {
        let key = self.view.active().clone();
        Ok(self.vocab.move_tile(&key, moving, target)?)
    }

    pub fn create_category(
        &mut self,
        name: &str,
        color: Option<&str>,
        icon: Option<&str>,
    ) -> Result<Category, BoardError> {
        Ok(self.vocab.create_category(name, color, icon)?)
    }

    /// Speaks the whole sentence with numbers in word form.
    pub fn speak_sentence(&self) -> bool {
        self.speaker.say(&self.sentence.spoken_text())
    }

    pub fn clear_sentence(&mut self) {
        self.speaker.stop();
        self.sentence.clear();
    }

    /// Drops the last token.
    pub fn backspace(&mut self) -> Option<String> {
        self.sentence.remove_last()
    }

    /// Tiles of the current page of the active collection.
    pub fn page_tiles(&self) -> &[Tile] {
        let tiles = self.vocab.list(self.view.active());
        &tiles[page_bounds(tiles.len(), self.config.tiles_per_page, self.view.page())]
    }

    pub fn total_pages(&self) -> usize {
        total_pages(
            self.vocab.list(self.view.active()).len(),
            self.config.tiles_per_page,
        )
    }

    pub fn next_page(&mut self) -> usize {
        let total = self.total_pages();
        self.view.next_page(total)
    }

    pub fn previous_page(&mut self) -> usize {
        let total = self.total_pages();
        self.view.previous_page(total)
    }

    /// Jumps `delta` pages, clamped to the active collection.
    pub fn shift_page(&mut self, delta: isize) -> usize {
        let total = self.total_pages();
        self.view.shift_page(delta, total)
    }

    fn speak_tile(&mut self, tile: &Tile) -> TileActivation {
        let spoken = self.sentence.activate(tile, self.config.digit_policy);
        if let Some(text) = spoken.as_deref() {
            self.speaker.say(text);
        }
        TileActivation::Spoken { spoken }
    }

    fn clamp_page(&mut self) {
        let total = self.total_pages();
        self.view.clamp(total);
    }

    fn visible_tile(&self, id: TileId) -> Result<&Tile, BoardError> {
        let key = self.view.active();
        self.vocab
            .repo()
            .position(key, id)
            .map(|index| &self.vocab.list(key)[index])
            .ok_or(BoardError::TileNotVisible(id))
    }
}

#[cfg(test)]
mod tests {
    use super::{Board, BoardError, TileActivation};
    use crate::config::BoardConfig;
    use crate::model::category::CollectionKey;
    use crate::model::tile::TileDraft;
    use crate::speech::speaker::PendingUtterance;

    fn board() -> Board<PendingUtterance> {
        Board::seeded(PendingUtterance::new(), BoardConfig::default()).expect("seeded board")
    }

    fn tile_id(board: &Board<PendingUtterance>, label: &str) -> uuid::Uuid {
        board
            .vocab()
            .list(board.view().active())
            .iter()
            .find(|tile| tile.label == label)
            .map(|tile| tile.id)
            .expect("tile should exist")
    }

    #[test]
    fn speak_mode_feeds_sentence_and_speech() {
        let mut board = board();
        let want = tile_id(&board, "want");
        let activation = board.activate_tile(want).expect("tap");
        assert_eq!(
            activation,
            TileActivation::Spoken {
                spoken: Some("want".to_string())
            }
        );
        assert_eq!(board.sentence().text(), "want");
        assert_eq!(
            board.speaker().engine().take().map(|(text, _)| text),
            Some("want".to_string())
        );
    }

    #[test]
    fn edit_mode_opens_editor_without_touching_sentence() {
        let mut board = board();
        let want = tile_id(&board, "want");
        board.toggle_edit_mode();
        let activation = board.activate_tile(want).expect("tap");
        assert!(matches!(activation, TileActivation::OpenEditor(tile) if tile.id == want));
        assert!(board.sentence().is_empty());
    }

    #[test]
    fn tap_outside_active_collection_is_rejected() {
        let mut board = board();
        let want = tile_id(&board, "want");
        board.select_collection(CollectionKey::category("food"));
        assert_eq!(
            board.activate_tile(want),
            Err(BoardError::TileNotVisible(want))
        );
    }

    #[test]
    fn deleting_selected_tile_drops_selection() {
        let mut board = board();
        board.select_collection(CollectionKey::category("food"));
        board.toggle_edit_mode();
        let milk = tile_id(&board, "milk");
        board.begin_reorder(milk).expect("long press");
        board.delete_tile(milk).expect("delete");
        assert_eq!(board.view().mode().selected(), None);
    }

    #[test]
    fn recategorized_tile_leaves_active_page() {
        let mut board = board();
        board.toggle_edit_mode();
        let want = tile_id(&board, "want");
        let draft = TileDraft::new("want", "#FFB3E6");
        board
            .edit_tile(want, draft, &CollectionKey::category("actions"))
            .expect("recategorize");
        assert!(board.page_tiles().iter().all(|tile| tile.id != want));
        assert_eq!(
            board.vocab().find(want).map(|(key, _)| key),
            Some(CollectionKey::category("actions"))
        );
    }
}
