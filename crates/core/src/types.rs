use serde::{Deserialize, Serialize};

/// All database primary keys are SQLite INTEGER (64-bit) rowids.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// The two spendable currencies a character carries.
///
/// Stored as lowercase text in the database and in transaction log rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Gold,
    Gem,
}

impl Currency {
    pub fn as_str(self) -> &'static str {
        match self {
            Currency::Gold => "gold",
            Currency::Gem => "gem",
        }
    }

    /// Parse a stored currency string. Unknown values fall back to gold,
    /// matching how the shop treats malformed catalog rows.
    pub fn parse_or_gold(s: &str) -> Self {
        match s {
            "gem" => Currency::Gem,
            _ => Currency::Gold,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action kinds recorded in the append-only transaction log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogAction {
    Register,
    Login,
    Buy,
    Sell,
    Craft,
    Gift,
    Checkin,
    Hunt,
    Quest,
    Mail,
}

impl LogAction {
    pub fn as_str(self) -> &'static str {
        match self {
            LogAction::Register => "register",
            LogAction::Login => "login",
            LogAction::Buy => "buy",
            LogAction::Sell => "sell",
            LogAction::Craft => "craft",
            LogAction::Gift => "gift",
            LogAction::Checkin => "checkin",
            LogAction::Hunt => "hunt",
            LogAction::Quest => "quest",
            LogAction::Mail => "mail",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_roundtrip() {
        assert_eq!(Currency::parse_or_gold("gem"), Currency::Gem);
        assert_eq!(Currency::parse_or_gold("gold"), Currency::Gold);
        assert_eq!(Currency::parse_or_gold("credits"), Currency::Gold);
        assert_eq!(Currency::Gem.as_str(), "gem");
    }

    #[test]
    fn currency_serializes_lowercase() {
        let json = serde_json::to_string(&Currency::Gold).unwrap();
        assert_eq!(json, "\"gold\"");
    }
}
