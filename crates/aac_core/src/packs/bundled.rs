//! Subject boards shipped with the app, used when the backend is unreachable.

use super::BoardCategory;
use crate::model::tile::Tile;

/// Subject used when a requested subject has no bundled board.
pub const FALLBACK_SUBJECT: &str = "english";

const MATH_SYMBOLS: &[&str] = &[
    "+", "\u{2212}", "-", "\u{00D7}", "*", "\u{00F7}", "/", "=", "\u{2260}", "<", ">",
    "\u{2264}", "\u{2265}",
];

/// Whether `label` is a keypad symbol (drawn large, without a caption).
pub fn is_math_symbol(label: &str) -> bool {
    MATH_SYMBOLS.contains(&label.trim())
}

/// `(label, say, icon)`
type Row = (&'static str, &'static str, Option<&'static str>);

struct Group {
    name: &'static str,
    color: &'static str,
    rows: &'static [Row],
}

const MATH: &[Group] = &[
    Group {
        name: "Numbers",
        color: "#FFF2CC",
        rows: &[
            ("0", "zero", None),
            ("1", "one", None),
            ("2", "two", None),
            ("3", "three", None),
            ("4", "four", None),
            ("5", "five", None),
            ("6", "six", None),
            ("7", "seven", None),
            ("8", "eight", None),
            ("9", "nine", None),
        ],
    },
    Group {
        name: "Operators",
        color: "#CFE8FF",
        rows: &[
            ("+", "plus", None),
            ("\u{2212}", "minus", None),
            ("=", "equals", None),
            ("\u{00D7}", "times", None),
            ("\u{00F7}", "divide", None),
        ],
    },
    Group {
        name: "Math Words",
        color: "#E6FFE6",
        rows: &[
            ("add", "add", Some("add-circle-outline")),
            ("subtract", "subtract", Some("remove-circle-outline")),
            ("plus", "plus", Some("add-outline")),
            ("minus", "minus", Some("remove-outline")),
            ("equals", "equals", Some("git-compare-outline")),
            ("count", "count", Some("list-outline")),
            ("more", "more", Some("arrow-up-outline")),
            ("less", "less", Some("arrow-down-outline")),
            ("same", "same", Some("repeat-outline")),
            ("all", "all", Some("albums-outline")),
            ("none", "none", Some("close-circle-outline")),
            ("take away", "take away", Some("trash-outline")),
            ("share", "share", Some("share-social-outline")),
            ("group", "group", Some("people-outline")),
        ],
    },
    Group {
        name: "Shapes",
        color: "#FFE6F0",
        rows: &[
            ("circle", "circle", Some("ellipse-outline")),
            ("square", "square", Some("square-outline")),
            ("triangle", "triangle", Some("triangle-outline")),
        ],
    },
    Group {
        name: "Help",
        color: "#D6F5D6",
        rows: &[
            (
                "Repeat step",
                "Could you show me that step again?",
                Some("refresh"),
            ),
            ("Slower please", "Can you go slower?", Some("walk-outline")),
            ("I'm stuck", "I'm stuck.", Some("hand-left-outline")),
        ],
    },
    Group {
        name: "Units",
        color: "#E3D7FF",
        rows: &[
            ("cm", "centimeters", None),
            ("kg", "kilograms", None),
            ("L", "liters", None),
        ],
    },
];

const ENGLISH: &[Group] = &[
    Group {
        name: "Classroom",
        color: "#CFE8FF",
        rows: &[
            ("Can you repeat?", "Can you repeat?", Some("refresh-outline")),
            (
                "Slower please",
                "Can you speak slower please?",
                Some("speedometer-outline"),
            ),
            ("How to spell?", "How do you spell this?", Some("text-outline")),
        ],
    },
    Group {
        name: "Writing",
        color: "#FFE2B8",
        rows: &[
            ("Sentence", "This is my sentence.", Some("create-outline")),
            ("Paragraph", "This is my paragraph.", Some("document-text-outline")),
            ("I want to read", "I want to read.", Some("book-outline")),
        ],
    },
    Group {
        name: "Teacher said\u{2026}",
        color: "#E3D7FF",
        rows: &[
            ("Teacher said\u{2026}", "Teacher said", Some("person-outline")),
            ("My idea is\u{2026}", "My idea is", Some("bulb-outline")),
        ],
    },
];

const HELP: &[Group] = &[Group {
    name: "General",
    color: "#FFC7C7",
    rows: &[
        ("I need help", "I need help.", Some("help-circle-outline")),
        ("Toilet", "I need the toilet.", Some("water-outline")),
        ("Drink", "I need a drink.", Some("cafe-outline")),
    ],
}];

fn groups_for(subject: &str) -> Option<&'static [Group]> {
    match subject.trim().to_lowercase().as_str() {
        "math" => Some(MATH),
        "english" => Some(ENGLISH),
        "help" => Some(HELP),
        _ => None,
    }
}

/// Whether a bundled board exists for `subject` (case-insensitive).
pub fn has_bundled_board(subject: &str) -> bool {
    groups_for(subject).is_some()
}

/// Bundled categories for `subject`; unknown subjects get the English board.
pub fn bundled_categories(subject: &str) -> Vec<BoardCategory> {
    groups_for(subject)
        .unwrap_or(ENGLISH)
        .iter()
        .map(|group| BoardCategory {
            name: group.name.to_string(),
            color: group.color.to_string(),
            image_url: None,
            tiles: group
                .rows
                .iter()
                .map(|(label, say, icon)| {
                    let tile = Tile::new(*label, *say, group.color);
                    match icon {
                        Some(icon) => tile.with_icon(*icon),
                        None => tile,
                    }
                })
                .collect(),
        })
        .collect()
}
