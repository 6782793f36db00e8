//! Achievement catalog

use super::{Catalog, Predicate, UnlockDef};
use crate::{CareAction, Species};

pub static ACHIEVEMENT_DEFS: [UnlockDef; 8] = [
    UnlockDef {
        id: "ach_caretaker",
        name: "Caretaker",
        description: "Performed 50 care actions",
        icon: "🧺",
        predicate: Predicate::TotalActions(50),
    },
    UnlockDef {
        id: "ach_perfect_pet",
        name: "Perfect Pet",
        description: "Evolved into Pompompurin",
        icon: "👑",
        predicate: Predicate::Reached(Species::Pompompurin),
    },
    UnlockDef {
        id: "ach_foodie",
        name: "Foodie",
        description: "Fed your pet 30 times",
        icon: "🍰",
        predicate: Predicate::ActionCount(CareAction::Feed, 30),
    },
    UnlockDef {
        id: "ach_playmate",
        name: "Playmate",
        description: "Played with your pet 25 times",
        icon: "🪀",
        predicate: Predicate::ActionCount(CareAction::Play, 25),
    },
    UnlockDef {
        id: "ach_healer",
        name: "Healer",
        description: "Gave medicine 10 times",
        icon: "💊",
        predicate: Predicate::ActionCount(CareAction::Medicate, 10),
    },
    UnlockDef {
        id: "ach_marathon",
        name: "Marathon",
        description: "Kept your pet company for two hours",
        icon: "⏱️",
        predicate: Predicate::MinTicks(7200),
    },
    UnlockDef {
        id: "ach_all_forms",
        name: "Collector",
        description: "Reached every evolved form",
        icon: "📔",
        predicate: Predicate::ReachedAll(&Species::TERMINAL),
    },
    UnlockDef {
        id: "ach_treasure_hunter",
        name: "Treasure Hunter",
        description: "Unlocked every gift",
        icon: "🗝️",
        predicate: Predicate::AllGifts,
    },
];

pub static ACHIEVEMENTS: Catalog = Catalog::achievements(&ACHIEVEMENT_DEFS);
