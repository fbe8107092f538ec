//! Bundled starting vocabulary for the home grid and built-in folders.

use crate::model::tile::Tile;
use crate::repo::vocab_repo::{InMemoryVocabRepository, RepoResult};

/// `(label, color, icon)`; spoken text equals the label.
type SeedRow = (&'static str, &'static str, Option<&'static str>);

const CORE_VOCAB: &[SeedRow] = &[
    // pronouns
    ("I", "#FFB366", Some("person")),
    ("you", "#FFB366", Some("people")),
    ("he", "#FFB366", Some("male")),
    ("she", "#FFB366", Some("female")),
    ("we", "#FFB366", Some("people-circle")),
    ("they", "#FFB366", Some("people-outline")),
    ("it", "#FFB366", None),
    ("this", "#FFB366", None),
    ("that", "#FFB366", None),
    // verbs
    ("is", "#FFB3E6", None),
    ("can", "#FFB3E6", None),
    ("will", "#FFB3E6", None),
    ("do", "#E6B3FF", Some("hand-left")),
    ("have", "#E6B3FF", Some("gift")),
    ("want", "#FFB3E6", Some("heart")),
    ("like", "#FFB3E6", Some("heart-outline")),
    ("need", "#FFB3E6", Some("alert-circle")),
    ("get", "#E6B3FF", Some("hand-right")),
    ("stop", "#FFB3E6", Some("stop-circle")),
    ("go", "#FFB3E6", Some("arrow-forward")),
    ("come", "#E6B3FF", Some("return-up-back")),
    ("take", "#E6B3FF", Some("hand-left")),
    ("see", "#FFB3E6", Some("eye")),
    ("look", "#FFB3E6", Some("search")),
    ("make", "#E6B3FF", Some("construct")),
    ("know", "#FFB3E6", Some("bulb")),
    ("think", "#FFB3E6", Some("cloud")),
    ("say", "#E6B3FF", Some("chatbox")),
    ("give", "#E6B3FF", Some("gift-outline")),
    ("eat", "#FFB3E6", Some("restaurant")),
    ("help", "#FFB3E6", Some("hand-right-outline")),
    ("play", "#E6B3FF", Some("game-controller")),
    // prepositions and places
    ("to", "#A3E6A3", Some("arrow-forward-outline")),
    ("with", "#A3E6A3", None),
    ("in", "#A3E6A3", Some("enter")),
    ("for", "#A3E6A3", None),
    ("on", "#A3E6A3", None),
    ("here", "#A3E6A3", Some("location")),
    ("there", "#A3E6A3", Some("navigate")),
    ("up", "#A3E6A3", Some("arrow-up")),
    ("out", "#A3E6A3", Some("exit")),
    ("off", "#A3E6A3", None),
    ("down", "#A3E6A3", Some("arrow-down")),
    ("now", "#99CCFF", Some("time")),
    // small words
    ("the", "#FFFFFF", None),
    ("a", "#FFFFFF", None),
    ("of", "#A3E6A3", None),
    ("and", "#333333", Some("add")),
    ("but", "#FFE0B3", None),
    ("or", "#FFD699", None),
    ("because", "#FFE0B3", None),
    // questions and modifiers
    ("what", "#FFE6B3", Some("help-circle")),
    ("where", "#FFE6B3", Some("location-outline")),
    ("who", "#FFE6B3", Some("person-outline")),
    ("not", "#FFB3B3", Some("close-circle")),
    ("more", "#99CCFF", Some("add-circle")),
    ("all done", "#99CCFF", Some("checkmark-done")),
    ("good", "#99CCFF", Some("happy")),
    ("different", "#99CCFF", None),
    ("bad", "#99CCFF", Some("sad")),
    ("all", "#99CCFF", Some("apps")),
    ("some", "#99CCFF", None),
];

const PEOPLE_VOCAB: &[SeedRow] = &[
    ("mom", "#FFB366", Some("woman")),
    ("dad", "#FFB366", Some("man")),
    ("teacher", "#FFB366", Some("school")),
    ("friend", "#FFB366", Some("people")),
    ("student", "#FFB366", Some("person")),
    ("brother", "#FFB366", Some("male")),
    ("sister", "#FFB366", Some("female")),
    ("family", "#FFB366", Some("people-circle")),
    ("classmate", "#FFB366", Some("people-outline")),
    ("helper", "#FFB366", Some("hand-right")),
    ("doctor", "#FFB366", Some("medkit")),
    ("nurse", "#FFB366", Some("medical")),
];

const THINGS_VOCAB: &[SeedRow] = &[
    ("book", "#D4A574", Some("book")),
    ("pencil", "#D4A574", Some("pencil")),
    ("paper", "#D4A574", Some("document")),
    ("computer", "#D4A574", Some("laptop")),
    ("tablet", "#D4A574", Some("tablet-portrait")),
    ("phone", "#D4A574", Some("phone-portrait")),
    ("bag", "#D4A574", Some("bag")),
    ("water bottle", "#D4A574", Some("water")),
    ("toy", "#D4A574", Some("game-controller")),
    ("ball", "#D4A574", Some("football")),
    ("chair", "#D4A574", Some("square")),
    ("table", "#D4A574", Some("grid")),
];

const FOOD_VOCAB: &[SeedRow] = &[
    ("apple", "#FFB366", Some("nutrition")),
    ("banana", "#FFB366", Some("nutrition")),
    ("sandwich", "#FFB366", Some("fast-food")),
    ("pizza", "#FFB366", Some("pizza")),
    ("water", "#FFB366", Some("water")),
    ("juice", "#FFB366", Some("wine")),
    ("milk", "#FFB366", Some("cafe")),
    ("quiet please", "#FFB3B3", Some("volume-mute")),
];

fn build(rows: &[SeedRow]) -> Vec<Tile> {
    rows.iter()
        .map(|(label, color, icon)| {
            let mut tile = Tile::new(*label, *label, *color);
            if let Some(icon) = icon {
                tile.set_icon(*icon);
            }
            if *color == "#333333" {
                tile.text_color = Some("#FFFFFF".to_string());
            }
            tile
        })
        .collect()
}

/// Fresh copy of the home collection with new tile IDs.
pub fn core_vocabulary() -> Vec<Tile> {
    build(CORE_VOCAB)
}

/// Fresh copies of the seeded category collections.
pub fn category_vocabulary() -> Vec<(String, Vec<Tile>)> {
    vec![
        ("people".to_string(), build(PEOPLE_VOCAB)),
        ("things".to_string(), build(THINGS_VOCAB)),
        ("food".to_string(), build(FOOD_VOCAB)),
    ]
}

/// Store holding the full bundled vocabulary.
pub fn seeded_repository() -> RepoResult<InMemoryVocabRepository> {
    InMemoryVocabRepository::with_seed(core_vocabulary(), category_vocabulary())
}
