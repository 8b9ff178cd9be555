pub mod activity;
pub mod auth;
pub mod chat;
pub mod craft;
pub mod inventory;
pub mod leaderboard;
pub mod mail;
pub mod profile;
pub mod quest;
pub mod shop;
pub mod transactions;
