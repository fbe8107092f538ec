//! Subject packs from the backend, with a bundled offline fallback.
//!
//! # Responsibility
//! - Decode pack and vocabulary item JSON payloads.
//! - Derive per-subject board categories from packs and items.
//! - Fall back to the bundled board when the backend fails.
//!
//! # Invariants
//! - Loading makes one attempt per call and never fails: errors degrade to
//!   the bundled board with `online == false`.
//! - Derived categories always hold at least one tile.

pub mod bundled;

use crate::model::pack::{Pack, VocabItem};
use crate::model::tile::{Tile, TileId};
use bundled::bundled_categories;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub use bundled::{is_math_symbol, FALLBACK_SUBJECT};

/// Category color when a pack does not define one.
pub const DEFAULT_PACK_COLOR: &str = "#D6F5D6";

/// Failure reported by a pack source.
#[derive(Debug)]
pub enum PackSourceError {
    /// Backend could not be reached or answered with an error status.
    Unavailable(String),
    /// Payload did not match the expected JSON shape.
    Decode(serde_json::Error),
}

impl Display for PackSourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "pack source unavailable: {message}"),
            Self::Decode(err) => write!(f, "invalid pack payload: {err}"),
        }
    }
}

impl Error for PackSourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Unavailable(_) => None,
        }
    }
}

impl From<serde_json::Error> for PackSourceError {
    fn from(value: serde_json::Error) -> Self {
        Self::Decode(value)
    }
}

/// Remote provider of subject packs.
pub trait PackSource {
    fn get_packs(&self) -> Result<Vec<Pack>, PackSourceError>;
    /// Items of one pack, or of every pack when `pack_id` is `None`.
    fn get_vocab_items(&self, pack_id: Option<&str>) -> Result<Vec<VocabItem>, PackSourceError>;
}

/// One tab of a subject board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardCategory {
    pub name: String,
    pub color: String,
    pub image_url: Option<String>,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectBoard {
    pub subject: String,
    pub categories: Vec<BoardCategory>,
    /// Whether the backend answered; `false` shows the offline indicator.
    pub online: bool,
}

impl SubjectBoard {
    /// First tile with `id` across all categories.
    pub fn find_tile(&self, id: TileId) -> Option<&Tile> {
        self.categories
            .iter()
            .flat_map(|category| category.tiles.iter())
            .find(|tile| tile.id == id)
    }
}

/// Pack source over payloads the host already fetched.
///
/// A missing payload counts as an unreachable backend.
#[derive(Debug, Clone, Default)]
pub struct PayloadPackSource {
    packs: Option<String>,
    items: Option<String>,
}

impl PayloadPackSource {
    pub fn new(packs: Option<String>, items: Option<String>) -> Self {
        Self { packs, items }
    }
}

impl PackSource for PayloadPackSource {
    fn get_packs(&self) -> Result<Vec<Pack>, PackSourceError> {
        match self.packs.as_deref() {
            Some(json) => decode_packs(json),
            None => Err(PackSourceError::Unavailable("no packs payload".to_string())),
        }
    }

    fn get_vocab_items(&self, pack_id: Option<&str>) -> Result<Vec<VocabItem>, PackSourceError> {
        let items = match self.items.as_deref() {
            Some(json) => decode_vocab_items(json)?,
            None => {
                return Err(PackSourceError::Unavailable(
                    "no vocab items payload".to_string(),
                ))
            }
        };
        Ok(match pack_id {
            Some(id) => items.into_iter().filter(|item| item.pack_id == id).collect(),
            None => items,
        })
    }
}

pub fn decode_packs(json: &str) -> Result<Vec<Pack>, PackSourceError> {
    Ok(serde_json::from_str(json)?)
}

pub fn decode_vocab_items(json: &str) -> Result<Vec<VocabItem>, PackSourceError> {
    Ok(serde_json::from_str(json)?)
}

/// Builds board categories for `subject` from backend records.
///
/// Packs are matched by subject case-insensitively and keep their input
/// order. Items are sorted by ascending `order`; ties keep input order.
pub fn derive_subject_categories(
    packs: &[Pack],
    items: &[VocabItem],
    subject: &str,
) -> Vec<BoardCategory> {
    let wanted = subject.trim().to_lowercase();
    packs
        .iter()
        .filter(|pack| {
            pack.subject
                .as_deref()
                .is_some_and(|value| value.trim().to_lowercase() == wanted)
        })
        .map(|pack| {
            let color = pack
                .color
                .as_deref()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(DEFAULT_PACK_COLOR);
            let mut owned: Vec<&VocabItem> =
                items.iter().filter(|item| item.pack_id == pack.id).collect();
            owned.sort_by_key(|item| item.order);
            BoardCategory {
                name: pack.name.clone(),
                color: color.to_string(),
                image_url: pack.image_url.clone(),
                tiles: owned
                    .into_iter()
                    .filter_map(|item| tile_from_item(item, color))
                    .collect(),
            }
        })
        .filter(|category| !category.tiles.is_empty())
        .collect()
}

fn tile_from_item(item: &VocabItem, color: &str) -> Option<Tile> {
    let label = item.label.trim();
    if label.is_empty() {
        return None;
    }
    let say = item
        .say
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(label);
    let mut tile = Tile::new(label, say, color);
    if let Some(id) = Uuid::parse_str(&item.id).ok().filter(|id| !id.is_nil()) {
        tile.id = id;
    }
    let image = item.image_url.as_deref().filter(|uri| !uri.trim().is_empty());
    let icon = item.icon.as_deref().filter(|icon| !icon.trim().is_empty());
    match (image, icon) {
        (Some(uri), _) => tile.set_image_url(uri),
        (None, Some(icon)) => tile.set_icon(icon),
        (None, None) => {}
    }
    Some(tile)
}

/// Loads the board for `subject` with one backend attempt.
///
/// Any source error yields the bundled board with `online == false`. A
/// reachable backend with nothing for this subject yields the bundled board
/// with `online == true`.
pub fn load_subject_board(source: &impl PackSource, subject: &str) -> SubjectBoard {
    let subject = subject.trim().to_lowercase();
    let fetched = source
        .get_packs()
        .and_then(|packs| Ok((packs, source.get_vocab_items(None)?)));

    match fetched {
        Ok((packs, items)) => {
            let categories = derive_subject_categories(&packs, &items, &subject);
            let categories = if categories.is_empty() {
                info!("event=board_load module=packs status=ok source=bundled subject={subject}");
                bundled_categories(&subject)
            } else {
                info!(
                    "event=board_load module=packs status=ok source=remote subject={subject} categories={}",
                    categories.len()
                );
                categories
            };
            SubjectBoard {
                subject,
                categories,
                online: true,
            }
        }
        Err(err) => {
            warn!("event=board_load module=packs status=offline subject={subject} error={err}");
            SubjectBoard {
                categories: bundled_categories(&subject),
                subject,
                online: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        decode_packs, decode_vocab_items, derive_subject_categories, load_subject_board,
        PackSource, PackSourceError, PayloadPackSource,
    };

    const PACKS_JSON: &str = r##"[
        {"id": "p1", "name": "Fractions", "subject": "Math", "color": "#FFFFFF"},
        {"id": "p2", "name": "Poems", "subject": "english"},
        {"id": "p3", "name": "Empty", "subject": "math"}
    ]"##;

    const ITEMS_JSON: &str = r##"[
        {"id": "i3", "pack_id": "p1", "label": "quarter", "order": 3},
        {"id": "i1", "pack_id": "p1", "label": "half", "say": "one half", "order": 1},
        {"id": "i2", "pack_id": "p2", "label": "rhyme", "icon": "musical-notes", "order": 1}
    ]"##;

    #[test]
    fn derives_sorted_tiles_for_matching_subject() {
        let packs = decode_packs(PACKS_JSON).expect("packs json");
        let items = decode_vocab_items(ITEMS_JSON).expect("items json");

        let math = derive_subject_categories(&packs, &items, "MATH");
        assert_eq!(math.len(), 1);
        assert_eq!(math[0].name, "Fractions");
        let labels: Vec<&str> = math[0].tiles.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, ["half", "quarter"]);
        assert_eq!(math[0].tiles[0].say, "one half");
        assert_eq!(math[0].tiles[1].say, "quarter");

        let english = derive_subject_categories(&packs, &items, "english");
        assert_eq!(english[0].color, "#D6F5D6");
        assert_eq!(english[0].tiles[0].icon.as_deref(), Some("musical-notes"));
    }

    #[test]
    fn payload_source_filters_items_by_pack() {
        let source = PayloadPackSource::new(
            Some(PACKS_JSON.to_string()),
            Some(ITEMS_JSON.to_string()),
        );
        let items = source.get_vocab_items(Some("p1")).expect("items");
        assert_eq!(items.len(), 2);
        let board = load_subject_board(&source, "math");
        assert!(board.online);
        let half = board.categories[0].tiles[0].id;
        assert_eq!(board.find_tile(half).map(|t| t.label.as_str()), Some("half"));
    }

    #[test]
    fn missing_payload_is_offline() {
        let source = PayloadPackSource::new(Some(PACKS_JSON.to_string()), None);
        assert!(matches!(
            source.get_vocab_items(None),
            Err(PackSourceError::Unavailable(_))
        ));
        assert!(!load_subject_board(&source, "math").online);
    }

    #[test]
    fn malformed_payload_is_decode_error() {
        let err = decode_packs(r#"{"id": 1}"#).unwrap_err();
        assert!(matches!(err, PackSourceError::Decode(_)));
    }
}
