//! FFI use-case API for the Flutter board screens.
//!
//! # Responsibility
//! - Expose one process-wide board session to Dart via FRB.
//! - Flatten core results into plain envelopes Dart can render.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Speech requests are handed to Dart through the returned `utterance`;
//!   Rust never plays audio itself.
//! - A poisoned session lock is reported as a failure envelope.

use aac_core::packs::BoardCategory;
use aac_core::{
    core_version as core_version_inner, init_logging as init_logging_inner,
    number_to_words as number_to_words_inner, ping as ping_inner, Board, BoardConfig, Category,
    CollectionKey, PayloadPackSource, PendingUtterance, Platform, Tile, TileActivation,
    TileDraft, TileId,
};
use log::warn;
use std::sync::Mutex;
use uuid::Uuid;

type Session = Board<PendingUtterance>;

static SESSION: Mutex<Option<Session>> = Mutex::new(None);

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message on failure.
/// Repeating the same `level + log_dir` is a no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Spoken English form of `value`.
#[flutter_rust_bridge::frb(sync)]
pub fn number_to_words(value: i64) -> String {
    number_to_words_inner(value)
}

/// Tile projection for Dart rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTile {
    pub id: String,
    pub label: String,
    pub say: String,
    pub color: String,
    pub icon: Option<String>,
    pub image_url: Option<String>,
    pub text_color: Option<String>,
}

impl From<&Tile> for BoardTile {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id.to_string(),
            label: tile.label.clone(),
            say: tile.say.clone(),
            color: tile.color.clone(),
            icon: tile.icon.clone(),
            image_url: tile.image_url.clone(),
            text_color: tile.text_color.clone(),
        }
    }
}

/// Folder projection for the category strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCategoryItem {
    pub key: String,
    pub label: String,
    pub icon: String,
    pub color: String,
    pub builtin: bool,
}

impl From<Category> for BoardCategoryItem {
    fn from(category: Category) -> Self {
        Self {
            key: category.key,
            label: category.label,
            icon: category.icon,
            color: category.color,
            builtin: category.builtin,
        }
    }
}

/// Generic action response envelope for edit flows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Tile ID or category key touched by the operation.
    pub target: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn success(message: impl Into<String>, target: Option<String>) -> Self {
        Self {
            ok: true,
            target,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            target: None,
            message: message.into(),
        }
    }
}

/// Result of one tile tap.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardTapResponse {
    pub ok: bool,
    /// `spoken|open_editor|selected|deselected|moved`, empty on failure.
    pub outcome: String,
    /// Sentence text after the tap.
    pub sentence: String,
    /// Text Dart should speak now, if any.
    pub utterance: Option<String>,
    pub speech_rate: f32,
    /// Tile to prefill the editor with (`open_editor` only).
    pub editor_tile: Option<BoardTile>,
    pub message: String,
}

/// Sentence bar state plus a pending utterance.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardSentenceResponse {
    pub sentence: String,
    pub utterance: Option<String>,
    pub speech_rate: f32,
}

/// One tab of the subject board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectCategoryItem {
    pub name: String,
    pub color: String,
    pub image_url: Option<String>,
    pub tiles: Vec<BoardTile>,
}

impl From<&BoardCategory> for SubjectCategoryItem {
    fn from(category: &BoardCategory) -> Self {
        Self {
            name: category.name.clone(),
            color: category.color.clone(),
            image_url: category.image_url.clone(),
            tiles: category.tiles.iter().map(BoardTile::from).collect(),
        }
    }
}

/// Loaded subject board; `online == false` shows the offline indicator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectBoardResponse {
    pub ok: bool,
    pub subject: String,
    pub online: bool,
    pub categories: Vec<SubjectCategoryItem>,
    pub message: String,
}

/// Visible page of the active collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardPageResponse {
    pub ok: bool,
    pub collection: String,
    pub page: u32,
    pub total_pages: u32,
    pub tiles: Vec<BoardTile>,
    pub message: String,
}

/// Rebuilds the session from the bundled vocabulary.
///
/// `platform` is `web|mobile` (anything else means mobile). Environment
/// overrides (`AAC_*`) apply on top of the platform defaults.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; failures come back as `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_reset(platform: String) -> BoardActionResponse {
    let platform = match platform.trim().to_ascii_lowercase().as_str() {
        "web" => Platform::Web,
        _ => Platform::Mobile,
    };
    let board = match Board::seeded(PendingUtterance::new(), BoardConfig::from_env(platform)) {
        Ok(board) => board,
        Err(err) => return BoardActionResponse::failure(format!("board_reset failed: {err}")),
    };
    match SESSION.lock() {
        Ok(mut guard) => {
            *guard = Some(board);
            BoardActionResponse::success("Board ready.", None)
        }
        Err(_) => BoardActionResponse::failure("board_reset failed: session lock poisoned"),
    }
}

/// Handles a tap on a visible tile.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; a failed tap keeps the current `sentence`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_tap(tile_id: String) -> BoardTapResponse {
    tap_response("board_tap", |board| {
        let id = parse_tile_id(&tile_id)?;
        board.activate_tile(id).map_err(|err| err.to_string())
    })
}

/// Loads the subject board into the session.
///
/// `packs_json` and `items_json` are the backend payloads the host fetched;
/// `None` means the request failed and the bundled board is used offline.
/// A blank `subject` loads the configured default subject.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; an unreachable backend is not a failure.
#[flutter_rust_bridge::frb(sync)]
pub fn subject_board_load(
    subject: String,
    packs_json: Option<String>,
    items_json: Option<String>,
) -> SubjectBoardResponse {
    let source = PayloadPackSource::new(packs_json, items_json);
    let result = with_board(|board| {
        let loaded = board.load_subject(&source, &subject);
        Ok(SubjectBoardResponse {
            ok: true,
            subject: loaded.subject.clone(),
            online: loaded.online,
            categories: loaded
                .categories
                .iter()
                .map(SubjectCategoryItem::from)
                .collect(),
            message: String::new(),
        })
    });
    result.unwrap_or_else(|message| SubjectBoardResponse {
        ok: false,
        subject: String::new(),
        online: false,
        categories: Vec::new(),
        message: format!("subject_board_load failed: {message}"),
    })
}

/// Handles a tap on a subject board tile; feeds the shared sentence.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; a failed tap keeps the current `sentence`.
#[flutter_rust_bridge::frb(sync)]
pub fn subject_board_tap(tile_id: String) -> BoardTapResponse {
    tap_response("subject_board_tap", |board| {
        let id = parse_tile_id(&tile_id)?;
        board
            .activate_subject_tile(id)
            .map_err(|err| err.to_string())
    })
}

/// Current sentence text.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; returns an empty string when the session is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn board_sentence() -> String {
    with_board(|board| Ok(board.sentence().text())).unwrap_or_default()
}

/// Requests speech for the whole sentence, numbers as words.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; Dart plays the returned `utterance`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_speak_sentence() -> BoardSentenceResponse {
    sentence_response(|board| {
        board.speak_sentence();
    })
}

/// Empties the sentence and cancels pending speech.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_clear_sentence() -> BoardSentenceResponse {
    sentence_response(|board| board.clear_sentence())
}

/// Drops the last sentence token.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn board_backspace() -> BoardSentenceResponse {
    sentence_response(|board| {
        board.backspace();
    })
}

/// Switches the active collection and returns its first page.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; failures come back as `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_select_collection(key: String) -> BoardPageResponse {
    page_response(|board| {
        board.select_collection(CollectionKey::parse(&key));
        Ok(())
    })
}

/// Moves `delta` pages (`0` re-reads the current page).
///
/// # FFI contract
/// - Sync call, non-blocking; the jump is clamped once.
/// - Never panics; failures come back as `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_page(delta: i32) -> BoardPageResponse {
    page_response(|board| {
        board.shift_page(delta as isize);
        Ok(())
    })
}

/// Flips edit mode; returns whether it is now on.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; returns `false` when the session is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_edit_mode() -> bool {
    with_board(|board| Ok(board.toggle_edit_mode())).unwrap_or(false)
}

/// Flips reorder mode on a category folder in edit mode.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; failures come back as `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_reorder_mode() -> BoardActionResponse {
    match with_board(|board| board.toggle_reorder_mode().map_err(|err| err.to_string())) {
        Ok(true) => BoardActionResponse::success("Reorder on.", None),
        Ok(false) => BoardActionResponse::success("Reorder off.", None),
        Err(message) => {
            BoardActionResponse::failure(format!("board_toggle_reorder_mode failed: {message}"))
        }
    }
}

/// Adds a tile to `collection` from editor fields.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; validation errors come back as `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add_tile(
    collection: String,
    label: String,
    say: Option<String>,
    color: String,
    icon: Option<String>,
    image_url: Option<String>,
) -> BoardActionResponse {
    let draft = build_draft(label, say, color, icon, image_url);
    let key = CollectionKey::parse(&collection);
    match with_board(|board| board.add_tile(&key, draft).map_err(|err| err.to_string())) {
        Ok(id) => BoardActionResponse::success("Tile added.", Some(id.to_string())),
        Err(message) => BoardActionResponse::failure(format!("board_add_tile failed: {message}")),
    }
}

/// Saves editor fields for a tile of the active collection.
///
/// A `new_collection` different from the active one moves the tile to the
/// end of that collection.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; a rejected edit leaves the store unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn board_edit_tile(
    tile_id: String,
    label: String,
    say: Option<String>,
    color: String,
    icon: Option<String>,
    image_url: Option<String>,
    new_collection: String,
) -> BoardActionResponse {
    let draft = build_draft(label, say, color, icon, image_url);
    let new_key = CollectionKey::parse(&new_collection);
    let result = with_board(|board| {
        let id = parse_tile_id(&tile_id)?;
        board
            .edit_tile(id, draft, &new_key)
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(tile) => BoardActionResponse::success("Tile saved.", Some(tile.id.to_string())),
        Err(message) => BoardActionResponse::failure(format!("board_edit_tile failed: {message}")),
    }
}

/// Deletes a tile of the active collection.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; stale ids come back as `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete_tile(tile_id: String) -> BoardActionResponse {
    let result = with_board(|board| {
        let id = parse_tile_id(&tile_id)?;
        board.delete_tile(id).map_err(|err| err.to_string())
    });
    match result {
        Ok(tile) => BoardActionResponse::success("Tile deleted.", Some(tile.id.to_string())),
        Err(message) => {
            BoardActionResponse::failure(format!("board_delete_tile failed: {message}"))
        }
    }
}

/// Moves `moving_id` into the slot of `target_id` in the active collection.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; failures come back as `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_move_tile(moving_id: String, target_id: String) -> BoardActionResponse {
    let result = with_board(|board| {
        let moving = parse_tile_id(&moving_id)?;
        let target = parse_tile_id(&target_id)?;
        board
            .move_tile(moving, target)
            .map_err(|err| err.to_string())?;
        Ok(moving)
    });
    match result {
        Ok(id) => BoardActionResponse::success("Tile moved.", Some(id.to_string())),
        Err(message) => BoardActionResponse::failure(format!("board_move_tile failed: {message}")),
    }
}

/// Creates a custom folder; `target` carries the derived key.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; failures come back as `ok == false`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_create_category(
    name: String,
    color: Option<String>,
    icon: Option<String>,
) -> BoardActionResponse {
    let result = with_board(|board| {
        board
            .create_category(&name, color.as_deref(), icon.as_deref())
            .map_err(|err| err.to_string())
    });
    match result {
        Ok(category) => BoardActionResponse::success("Category created.", Some(category.key)),
        Err(message) => {
            BoardActionResponse::failure(format!("board_create_category failed: {message}"))
        }
    }
}

/// Built-in folders followed by custom ones.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; returns an empty list when the session is unavailable.
#[flutter_rust_bridge::frb(sync)]
pub fn board_categories() -> Vec<BoardCategoryItem> {
    with_board(|board| {
        Ok(board
            .categories()
            .into_iter()
            .map(BoardCategoryItem::from)
            .collect())
    })
    .unwrap_or_default()
}

fn with_board<T>(f: impl FnOnce(&mut Session) -> Result<T, String>) -> Result<T, String> {
    let mut guard = SESSION.lock().map_err(|_| {
        warn!("event=session_lock module=ffi status=error reason=poisoned");
        "session lock poisoned".to_string()
    })?;
    if guard.is_none() {
        let board = Board::seeded(
            PendingUtterance::new(),
            BoardConfig::from_env(Platform::default()),
        )
        .map_err(|err| format!("board init failed: {err}"))?;
        *guard = Some(board);
    }
    match guard.as_mut() {
        Some(board) => f(board),
        None => Err("board not initialized".to_string()),
    }
}

fn tap_response(
    operation: &str,
    f: impl FnOnce(&mut Session) -> Result<TileActivation, String>,
) -> BoardTapResponse {
    let result = with_board(|board| {
        let activation = f(board)?;
        let (outcome, editor_tile) = match &activation {
            TileActivation::Spoken { .. } => ("spoken", None),
            TileActivation::OpenEditor(tile) => ("open_editor", Some(BoardTile::from(tile))),
            TileActivation::Selected(_) => ("selected", None),
            TileActivation::Deselected(_) => ("deselected", None),
            TileActivation::Moved { .. } => ("moved", None),
        };
        let (utterance, speech_rate) = drain_utterance(board);
        Ok(BoardTapResponse {
            ok: true,
            outcome: outcome.to_string(),
            sentence: board.sentence().text(),
            utterance,
            speech_rate,
            editor_tile,
            message: String::new(),
        })
    });
    result.unwrap_or_else(|message| BoardTapResponse {
        ok: false,
        outcome: String::new(),
        sentence: board_sentence(),
        utterance: None,
        speech_rate: 0.0,
        editor_tile: None,
        message: format!("{operation} failed: {message}"),
    })
}

fn drain_utterance(board: &Session) -> (Option<String>, f32) {
    match board.speaker().engine().take() {
        Some((text, rate)) => (Some(text), rate),
        None => (None, board.config().speech_rate),
    }
}

fn sentence_response(f: impl FnOnce(&mut Session)) -> BoardSentenceResponse {
    with_board(|board| {
        f(board);
        let (utterance, speech_rate) = drain_utterance(board);
        Ok(BoardSentenceResponse {
            sentence: board.sentence().text(),
            utterance,
            speech_rate,
        })
    })
    .unwrap_or_else(|_| BoardSentenceResponse {
        sentence: String::new(),
        utterance: None,
        speech_rate: 0.0,
    })
}

fn page_response(f: impl FnOnce(&mut Session) -> Result<(), String>) -> BoardPageResponse {
    let result = with_board(|board| {
        f(board)?;
        Ok(BoardPageResponse {
            ok: true,
            collection: board.view().active().to_string(),
            page: to_u32(board.view().page()),
            total_pages: to_u32(board.total_pages()),
            tiles: board.page_tiles().iter().map(BoardTile::from).collect(),
            message: String::new(),
        })
    });
    result.unwrap_or_else(|message| BoardPageResponse {
        ok: false,
        collection: String::new(),
        page: 0,
        total_pages: 0,
        tiles: Vec::new(),
        message,
    })
}

fn build_draft(
    label: String,
    say: Option<String>,
    color: String,
    icon: Option<String>,
    image_url: Option<String>,
) -> TileDraft {
    TileDraft {
        label,
        say,
        color,
        icon,
        image_url,
        text_color: None,
    }
}

fn parse_tile_id(raw: &str) -> Result<TileId, String> {
    Uuid::parse_str(raw.trim()).map_err(|err| format!("invalid tile id `{raw}`: {err}"))
}

fn to_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::{
        board_add_tile, board_backspace, board_categories, board_create_category,
        board_delete_tile, board_page, board_reset, board_select_collection, board_sentence,
        board_speak_sentence, board_tap, board_toggle_edit_mode, core_version, init_logging,
        number_to_words, ping, subject_board_load, subject_board_tap, BoardPageResponse,
        SubjectBoardResponse,
    };
    use std::sync::Mutex;

    // Tests share the process-wide session.
    static SERIAL: Mutex<()> = Mutex::new(());

    fn serial() -> std::sync::MutexGuard<'static, ()> {
        SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn tile_id(page: &BoardPageResponse, label: &str) -> String {
        page.tiles
            .iter()
            .find(|tile| tile.label == label)
            .map(|tile| tile.id.clone())
            .expect("tile should be on page")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_bad_input() {
        assert!(!init_logging("info".to_string(), String::new()).is_empty());
        assert!(!init_logging("verbose".to_string(), "/tmp/aac".to_string()).is_empty());
    }

    #[test]
    fn number_words_are_exposed() {
        assert_eq!(number_to_words(-42), "negative forty-two");
    }

    #[test]
    fn taps_build_sentence_and_hand_over_speech() {
        let _guard = serial();
        assert!(board_reset("web".to_string()).ok);
        let home = board_select_collection("home".to_string());
        assert!(home.ok, "{}", home.message);
        assert_eq!(home.tiles.len(), 18);

        let tap = board_tap(tile_id(&home, "I"));
        assert!(tap.ok, "{}", tap.message);
        assert_eq!(tap.outcome, "spoken");
        assert_eq!(tap.utterance.as_deref(), Some("I"));
        assert!((tap.speech_rate - 0.95).abs() < f32::EPSILON);

        let want = board_tap(tile_id(&home, "want"));
        assert_eq!(want.sentence, "I want");

        let spoken = board_speak_sentence();
        assert_eq!(spoken.utterance.as_deref(), Some("I want"));
        assert_eq!(board_backspace().sentence, "I");
        assert_eq!(board_sentence(), "I");
    }

    #[test]
    fn edit_flow_adds_and_deletes_tiles() {
        let _guard = serial();
        assert!(board_reset("mobile".to_string()).ok);
        let created = board_create_category("Field Trip".to_string(), None, None);
        assert!(created.ok, "{}", created.message);
        assert_eq!(created.target.as_deref(), Some("field_trip"));
        assert!(board_categories().iter().any(|c| c.key == "field_trip"));

        let added = board_add_tile(
            "field_trip".to_string(),
            "bus".to_string(),
            None,
            "#FFFFFF".to_string(),
            Some("bus".to_string()),
            None,
        );
        assert!(added.ok, "{}", added.message);

        let page = board_select_collection("field_trip".to_string());
        assert_eq!(page.tiles.len(), 1);
        assert_eq!(page.tiles[0].say, "bus");

        assert!(board_toggle_edit_mode());
        let tap = board_tap(page.tiles[0].id.clone());
        assert_eq!(tap.outcome, "open_editor");
        assert_eq!(tap.editor_tile.map(|tile| tile.label), Some("bus".to_string()));

        let deleted = board_delete_tile(page.tiles[0].id.clone());
        assert!(deleted.ok, "{}", deleted.message);
        assert!(board_page(0).tiles.is_empty());
    }

    fn subject_tile_id(board: &SubjectBoardResponse, category: &str, label: &str) -> String {
        board
            .categories
            .iter()
            .find(|c| c.name == category)
            .and_then(|c| c.tiles.iter().find(|tile| tile.label == label))
            .map(|tile| tile.id.clone())
            .expect("subject tile should exist")
    }

    #[test]
    fn subject_keypad_feeds_shared_sentence() {
        let _guard = serial();
        assert!(board_reset("mobile".to_string()).ok);
        let home = board_select_collection("home".to_string());
        board_tap(tile_id(&home, "I"));

        let math = subject_board_load("math".to_string(), None, None);
        assert!(math.ok, "{}", math.message);
        assert!(!math.online);
        assert_eq!(math.subject, "math");

        board_tap(tile_id(&home, "want"));
        subject_board_tap(subject_tile_id(&math, "Numbers", "1"));
        let tap = subject_board_tap(subject_tile_id(&math, "Numbers", "5"));
        assert!(tap.ok, "{}", tap.message);
        assert_eq!(tap.outcome, "spoken");
        assert_eq!(tap.sentence, "I want 15");
        assert_eq!(tap.utterance.as_deref(), Some("fifteen"));

        let stale = subject_board_tap(uuid::Uuid::new_v4().to_string());
        assert!(!stale.ok);
        assert_eq!(stale.sentence, "I want 15");
    }

    #[test]
    fn subject_board_reads_host_payloads() {
        let _guard = serial();
        assert!(board_reset("web".to_string()).ok);
        let packs = r#"[{"id": "p1", "name": "Verbs", "subject": "English"}]"#;
        let items = r#"[{"id": "v", "pack_id": "p1", "label": "run", "order": 1}]"#;
        let english = subject_board_load(
            String::new(),
            Some(packs.to_string()),
            Some(items.to_string()),
        );
        assert!(english.online);
        assert_eq!(english.subject, "english");
        assert_eq!(english.categories.len(), 1);
        assert_eq!(english.categories[0].tiles[0].label, "run");
    }

    #[test]
    fn stale_tap_keeps_sentence_and_huge_page_jumps_clamp() {
        let _guard = serial();
        assert!(board_reset("web".to_string()).ok);
        let home = board_select_collection("home".to_string());
        board_tap(tile_id(&home, "I"));

        let stale = board_tap(uuid::Uuid::new_v4().to_string());
        assert!(!stale.ok);
        assert_eq!(stale.sentence, "I");

        let last = board_page(i32::MAX);
        assert!(last.ok, "{}", last.message);
        assert_eq!(last.page, last.total_pages - 1);
        assert_eq!(board_page(i32::MIN).page, 0);
    }

    #[test]
    fn invalid_ids_fail_without_panicking() {
        let _guard = serial();
        assert!(board_reset("mobile".to_string()).ok);
        let tap = board_tap("not-a-uuid".to_string());
        assert!(!tap.ok);
        assert!(tap.message.contains("invalid tile id"));

        let unknown = board_add_tile(
            "space".to_string(),
            "moon".to_string(),
            None,
            "#FFFFFF".to_string(),
            None,
            None,
        );
        assert!(!unknown.ok);
        assert!(unknown.message.contains("unknown category"));
    }
}
