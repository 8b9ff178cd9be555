//! The hard-coded crafting table.
//!
//! Recipes map a recipe id to a result item. Material lists are shown to the
//! client but are not consumed when crafting -- the live game runs with free
//! crafting while the economy is tuned.

use serde::Serialize;

/// One material requirement line of a recipe.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Material {
    pub item_id: &'static str,
    pub quantity: i64,
}

/// A craftable recipe definition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Recipe {
    pub id: &'static str,
    pub name: &'static str,
    pub result_item_id: &'static str,
    pub materials: &'static [Material],
}

/// All known recipes, in display order.
pub const RECIPES: &[Recipe] = &[
    Recipe {
        id: "RCP_IRON_SWORD",
        name: "Iron Sword",
        result_item_id: "WEP_IRON_SWORD",
        materials: &[
            Material { item_id: "MAT_IRON_INGOT", quantity: 3 },
            Material { item_id: "MAT_OAK_PLANK", quantity: 1 },
        ],
    },
    Recipe {
        id: "RCP_LEATHER_ARMOR",
        name: "Leather Armor",
        result_item_id: "ARM_LEATHER_CHEST",
        materials: &[Material { item_id: "MAT_LEATHER", quantity: 5 }],
    },
    Recipe {
        id: "RCP_HEALTH_POTION",
        name: "Health Potion",
        result_item_id: "CON_HEALTH_POTION",
        materials: &[
            Material { item_id: "MAT_HERB", quantity: 2 },
            Material { item_id: "MAT_VIAL", quantity: 1 },
        ],
    },
];

/// Look up a recipe by id.
pub fn find(recipe_id: &str) -> Option<&'static Recipe> {
    RECIPES.iter().find(|r| r.id == recipe_id)
}
