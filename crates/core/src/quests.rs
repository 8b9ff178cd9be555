//! The hard-coded quest table.
//!
//! Quest definitions are static; only per-character claim state lives in the
//! database. Rewards are flat credits.

use serde::Serialize;

use crate::types::Currency;

/// A quest definition with its flat reward.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestDef {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub reward_amount: i64,
    pub reward_currency: Currency,
}

/// All known quests, in display order.
pub const QUESTS: &[QuestDef] = &[
    QuestDef {
        id: "QST_FIRST_STEPS",
        name: "First Steps",
        description: "Log in and look around the village.",
        reward_amount: 50,
        reward_currency: Currency::Gold,
    },
    QuestDef {
        id: "QST_SHOPPING_SPREE",
        name: "Shopping Spree",
        description: "Buy any item from the shop.",
        reward_amount: 100,
        reward_currency: Currency::Gold,
    },
    QuestDef {
        id: "QST_MONSTER_SLAYER",
        name: "Monster Slayer",
        description: "Hunt a monster in the wilds.",
        reward_amount: 2,
        reward_currency: Currency::Gem,
    },
];

/// Look up a quest by id.
pub fn find(quest_id: &str) -> Option<&'static QuestDef> {
    QUESTS.iter().find(|q| q.id == quest_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_quest() {
        let quest = find("QST_FIRST_STEPS").expect("quest should exist");
        assert_eq!(quest.reward_amount, 50);
    }

    #[test]
    fn unknown_quest_is_none() {
        assert!(find("QST_MISSING").is_none());
    }
}
