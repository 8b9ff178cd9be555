//! Domain types and pure game rules shared by the server and client crates.
//!
//! Nothing in this crate touches the network or the database; it holds the
//! error taxonomy, currency/progression arithmetic, and the static recipe and
//! quest tables that the API serves.

pub mod economy;
pub mod error;
pub mod identity;
pub mod progression;
pub mod quests;
pub mod recipes;
pub mod types;
