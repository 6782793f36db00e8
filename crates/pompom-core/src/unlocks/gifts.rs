//! Gift catalog

use super::{Catalog, Predicate, UnlockDef};
use crate::{CareAction, Species};

pub static GIFT_DEFS: [UnlockDef; 10] = [
    UnlockDef {
        id: "gift_first_meal",
        name: "First Meal",
        description: "Fed your pet for the first time",
        icon: "🍮",
        predicate: Predicate::ActionCount(CareAction::Feed, 1),
    },
    UnlockDef {
        id: "gift_playtime_joy",
        name: "Playtime Joy",
        description: "Played with your pet 3 times",
        icon: "🎾",
        predicate: Predicate::ActionCount(CareAction::Play, 3),
    },
    UnlockDef {
        id: "gift_dreams",
        name: "Sweet Dreams",
        description: "Let your pet rest 5 times",
        icon: "🌙",
        predicate: Predicate::ActionCount(CareAction::Rest, 5),
    },
    UnlockDef {
        id: "gift_health_potion",
        name: "Health Potion",
        description: "Nursed your pet back to health twice",
        icon: "🧪",
        predicate: Predicate::ActionCount(CareAction::Medicate, 2),
    },
    UnlockDef {
        id: "gift_affection",
        name: "Warm Hug",
        description: "Petted your pet 10 times",
        icon: "💛",
        predicate: Predicate::ActionCount(CareAction::Pet, 10),
    },
    UnlockDef {
        id: "gift_perfect_care",
        name: "Golden Bow",
        description: "Raised a Pompompurin",
        icon: "🎀",
        predicate: Predicate::Reached(Species::Pompompurin),
    },
    UnlockDef {
        id: "gift_resilience",
        name: "Resilience Badge",
        description: "Kept your pet going for 30 minutes",
        icon: "🛡️",
        predicate: Predicate::MinTicks(1800),
    },
    UnlockDef {
        id: "gift_milestone_100",
        name: "Centennial Cake",
        description: "Reached 100 minutes together",
        icon: "🎂",
        predicate: Predicate::MinTicks(6000),
    },
    UnlockDef {
        id: "gift_mystery",
        name: "Mystery Box",
        description: "Raised a healthy grown-up pet",
        icon: "🎁",
        predicate: Predicate::GrownWithHealthAbove(70.0),
    },
    UnlockDef {
        id: "gift_judge_evolution",
        name: "Judge's Ribbon",
        description: "Earned the judges' approval with a perfect evolution",
        icon: "🏅",
        predicate: Predicate::Reached(Species::Pompompurin),
    },
];

pub static GIFTS: Catalog = Catalog::gifts(&GIFT_DEFS);
