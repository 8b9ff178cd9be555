pub mod account;
pub mod catalog_item;
pub mod character;
pub mod chat;
pub mod inventory;
pub mod mail;
pub mod quest;
pub mod transaction;
