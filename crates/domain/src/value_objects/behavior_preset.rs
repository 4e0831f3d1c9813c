//! Quick classroom behavior actions with fixed stat changes.

use super::StatKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BehaviorPreset {
    /// Short stable key used on the command line.
    pub key: &'static str,
    pub label: &'static str,
    pub kind: StatKind,
    pub amount: i32,
}

pub const BEHAVIOR_PRESETS: &[BehaviorPreset] = &[
    BehaviorPreset {
        key: "complete-work",
        label: "Turned in all work",
        kind: StatKind::Xp,
        amount: 25,
    },
    BehaviorPreset {
        key: "helped-friend",
        label: "Helped a classmate / volunteered",
        kind: StatKind::Xp,
        amount: 15,
    },
    BehaviorPreset {
        key: "correct-answer",
        label: "Answered correctly",
        kind: StatKind::Gold,
        amount: 5,
    },
    BehaviorPreset {
        key: "late",
        label: "Late to class",
        kind: StatKind::Hp,
        amount: -15,
    },
    BehaviorPreset {
        key: "disruptive",
        label: "Talking over / disrupting others",
        kind: StatKind::Hp,
        amount: -10,
    },
    BehaviorPreset {
        key: "missing-homework",
        label: "Missing homework",
        kind: StatKind::Hp,
        amount: -20,
    },
];

pub fn find_preset(key: &str) -> Option<&'static BehaviorPreset> {
    BEHAVIOR_PRESETS.iter().find(|p| p.key == key)
}
