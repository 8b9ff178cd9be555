//! Balance arithmetic and the fixed economy constants.

use crate::types::Currency;

/// Starting gold for a freshly created character.
pub const STARTING_GOLD: i64 = 1000;
/// Starting gems for a freshly created character.
pub const STARTING_GEM: i64 = 10;

/// Flat gold credited by the daily check-in.
pub const DAILY_CHECKIN_GOLD: i64 = 100;
/// Flat gold reward per monster hunt.
pub const HUNT_GOLD: i64 = 25;
/// Flat experience reward per monster hunt.
pub const HUNT_EXP: i64 = 50;
/// Flat health restored by using a consumable item.
pub const ITEM_HEAL_AMOUNT: i64 = 20;

/// Assumed catalog price for items sold without a catalog entry.
pub const DEFAULT_ITEM_PRICE: i64 = 10;
/// Currency credited for items sold without a catalog entry.
pub const DEFAULT_ITEM_CURRENCY: Currency = Currency::Gold;

/// Maximum characters one account may own.
pub const MAX_CHARACTERS_PER_ACCOUNT: i64 = 3;

/// Rows retained in the global chat buffer.
pub const CHAT_BUFFER_CAP: i64 = 100;

/// Total cost of a purchase, or `None` when the multiplication overflows.
/// Quantity comes straight from the client, so the overflow case is real.
pub fn total_cost(unit_price: i64, quantity: i64) -> Option<i64> {
    unit_price.checked_mul(quantity)
}

/// Per-unit credit when selling an item back: half the catalog price,
/// never less than 1.
pub fn sell_unit_price(catalog_price: i64) -> i64 {
    (catalog_price / 2).max(1)
}
