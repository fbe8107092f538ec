//! Tile domain model.
//!
//! # Responsibility
//! - Define the selectable vocabulary unit shown on the board grid.
//! - Provide the form-level draft used by add/edit flows.
//!
//! # Invariants
//! - `id` is stable and never reused for another tile.
//! - `label` and `say` are never blank on a stored tile.
//! - At most one of `icon` / `image_url` is set.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one tile, generated at creation time.
pub type TileId = Uuid;

/// Default tile background used by the add-word form.
pub const DEFAULT_TILE_COLOR: &str = "#FFB366";

/// One selectable vocabulary unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Stable handle used by edit/delete/move.
    pub id: TileId,
    /// Display text on the tile.
    pub label: String,
    /// Text handed to speech. Defaults to `label` in drafts.
    pub say: String,
    /// Background color hint, opaque to core.
    pub color: String,
    /// Icon identifier, opaque to core.
    pub icon: Option<String>,
    /// Picked or pasted image URI.
    pub image_url: Option<String>,
    /// Optional label color override for dark tiles.
    pub text_color: Option<String>,
}

impl Tile {
    /// Creates a tile with a generated stable ID and no visual.
    pub fn new(
        label: impl Into<String>,
        say: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            say: say.into(),
            color: color.into(),
            icon: None,
            image_url: None,
            text_color: None,
        }
    }

    /// Builder helper for seed data.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.set_icon(icon);
        self
    }

    /// Sets the icon and drops any image.
    pub fn set_icon(&mut self, icon: impl Into<String>) {
        self.icon = Some(icon.into());
        self.image_url = None;
    }

    /// Sets the image URI and drops any icon.
    pub fn set_image_url(&mut self, uri: impl Into<String>) {
        self.image_url = Some(uri.into());
        self.icon = None;
    }

    /// Removes both icon and image.
    pub fn clear_visual(&mut self) {
        self.icon = None;
        self.image_url = None;
    }

    /// Validates stored-tile invariants.
    pub fn validate(&self) -> Result<(), TileValidationError> {
        if self.id.is_nil() {
            return Err(TileValidationError::NilId);
        }
        if self.label.trim().is_empty() {
            return Err(TileValidationError::EmptyLabel);
        }
        if self.say.trim().is_empty() {
            return Err(TileValidationError::EmptySay);
        }
        Ok(())
    }
}

/// Form input for creating or editing a tile.
///
/// Mirrors the add/edit dialog fields. Blank optional strings are treated as
/// absent, and an image URI wins over an icon when both are filled in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TileDraft {
    pub label: String,
    pub say: Option<String>,
    pub color: String,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub text_color: Option<String>,
}

impl TileDraft {
    /// Creates a draft with label and color; `say` falls back to `label`.
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
            ..Self::default()
        }
    }

    /// Prefills a draft from an existing tile, as the edit dialog does.
    pub fn from_tile(tile: &Tile) -> Self {
        Self {
            label: tile.label.clone(),
            say: Some(tile.say.clone()),
            color: tile.color.clone(),
            icon: tile.icon.clone(),
            image_url: tile.image_url.clone(),
            text_color: tile.text_color.clone(),
        }
    }

    pub fn say(mut self, say: impl Into<String>) -> Self {
        self.say = Some(say.into());
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn image_url(mut self, uri: impl Into<String>) -> Self {
        self.image_url = Some(uri.into());
        self
    }

    /// Builds a new tile with a generated ID.
    pub fn into_tile(self) -> Result<Tile, TileValidationError> {
        self.build(Uuid::new_v4())
    }

    /// Builds the replacement for `existing`, keeping its ID.
    pub fn apply_to(self, existing: &Tile) -> Result<Tile, TileValidationError> {
        self.build(existing.id)
    }

    fn build(self, id: TileId) -> Result<Tile, TileValidationError> {
        let label = self.label.trim().to_string();
        let say = match non_blank(self.say) {
            Some(value) => value,
            None => label.clone(),
        };
        let mut tile = Tile {
            id,
            label,
            say,
            color: non_blank(Some(self.color)).unwrap_or_else(|| DEFAULT_TILE_COLOR.to_string()),
            icon: None,
            image_url: None,
            text_color: non_blank(self.text_color),
        };
        match (non_blank(self.image_url), non_blank(self.icon)) {
            (Some(uri), _) => tile.set_image_url(uri),
            (None, Some(icon)) => tile.set_icon(icon),
            (None, None) => {}
        }
        tile.validate()?;
        Ok(tile)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

/// Tile invariant violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileValidationError {
    NilId,
    EmptyLabel,
    EmptySay,
}

impl Display for TileValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "tile id must not be nil"),
            Self::EmptyLabel => write!(f, "tile label must not be blank"),
            Self::EmptySay => write!(f, "tile spoken text must not be blank"),
        }
    }
}

impl Error for TileValidationError {}

#[cfg(test)]
mod tests {
    use super::{Tile, TileDraft, TileValidationError};

    #[test]
    fn draft_say_falls_back_to_label() {
        let tile = TileDraft::new("  apple ", "#FFB366")
            .into_tile()
            .expect("draft should build");
        assert_eq!(tile.label, "apple");
        assert_eq!(tile.say, "apple");
        assert!(!tile.id.is_nil());
    }

    #[test]
    fn draft_rejects_blank_label() {
        let err = TileDraft::new("   ", "#FFFFFF").say("hello").into_tile();
        assert_eq!(err.unwrap_err(), TileValidationError::EmptyLabel);
    }

    #[test]
    fn image_wins_over_icon() {
        let tile = TileDraft::new("dog", "#FFFFFF")
            .icon("paw")
            .image_url("file:///dog.png")
            .into_tile()
            .expect("draft should build");
        assert_eq!(tile.image_url.as_deref(), Some("file:///dog.png"));
        assert_eq!(tile.icon, None);
    }

    #[test]
    fn apply_to_keeps_identity() {
        let original = Tile::new("cat", "cat", "#FFFFFF").with_icon("paw");
        let edited = TileDraft::from_tile(&original)
            .say("kitty")
            .apply_to(&original)
            .expect("edit should build");
        assert_eq!(edited.id, original.id);
        assert_eq!(edited.say, "kitty");
        assert_eq!(edited.icon.as_deref(), Some("paw"));
    }

    #[test]
    fn visual_setters_are_exclusive() {
        let mut tile = Tile::new("sun", "sun", "#FFF2CC").with_icon("sunny");
        tile.set_image_url("https://example.com/sun.png");
        assert_eq!(tile.icon, None);
        tile.set_icon("sunny");
        assert_eq!(tile.image_url, None);
        tile.clear_visual();
        assert_eq!(tile.icon, None);
        assert_eq!(tile.image_url, None);
    }
}
