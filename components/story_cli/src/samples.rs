//! Bundled sample stories and the language guide

/// A sample story shipped with the compiler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Name used with `--example`
    pub name: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Story source
    pub source: &'static str,
}

const FOREST: &str = r#"
scene: START
text: "You are in a forest."
choice: "Go left" -> WOLF
choice: "Go right" -> GRANDMA_HOUSE

scene: WOLF
text: "The wolf appears!"
choice: "Scream" -> HUNTER
choice: "Run" -> START
choice: "Surrender" -> END

scene: HUNTER
text: "The hunter accompanied you to your grandma's house."

scene: GRANDMA_HOUSE
text: "Your grandma is happy to see you."

scene: END
text: "The wolf ate you."
"#;

const JOURNEY: &str = r#"
scene: START
text: "You begin your journey alone in the forest."
choice: "Continue" -> CLEARING

scene: CLEARING
text: "You reach a clearing. It's peaceful."
choice: "Continue" -> END

scene: END
text: "You set up camp and rest for the night."
"#;

const CAVE: &str = r#"scene: START
text: "You wake up in a dark cave."
choice: "Go left" -> DRAGON
choice: "Go right" -> EXIT

scene: DRAGON
text: "A dragon appears!"
choice: "Fight" -> END
choice: "Run away" -> EXIT

scene: EXIT
text: "You found the way out."

scene: END
text: "The dragon devours you."
"#;

static SAMPLES: [Sample; 3] = [
    Sample {
        name: "forest",
        description: "Branching story with five scenes",
        source: FOREST,
    },
    Sample {
        name: "journey",
        description: "Linear story with three scenes",
        source: JOURNEY,
    },
    Sample {
        name: "cave",
        description: "Short dungeon with two endings",
        source: CAVE,
    },
];

/// Every bundled sample, in listing order
pub fn all() -> &'static [Sample] {
    &SAMPLES
}

/// Look up a bundled sample by name
pub fn find(name: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.name == name)
}

/// How to write a story, printed by `--guide`
pub const LANGUAGE_GUIDE: &str = r#"How to write your interactive story:

    Each scene must start with:
        scene: <scene_id>

    Then add the scene text:
        text: "your narrative here"

    Choices are optional, format:
        choice: "label" -> destination

Rules:

    All text must go inside double quotes ("...") on a single line
    scene_id and destination must be simple identifiers: letters, digits, _
    Every story needs a scene called START
    Every destination must be a defined scene
    Every scene must be reachable from START

Minimum example:

    scene: START
    text: "Intro"
    choice: "Go" -> END

    scene: END
    text: "The end."
"#;
