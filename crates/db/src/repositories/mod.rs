//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Single-statement methods accept any `SqliteExecutor` so handlers can run
//! them against the pool directly or inside an open transaction.

pub mod account_repo;
pub mod catalog_repo;
pub mod character_repo;
pub mod chat_repo;
pub mod inventory_repo;
pub mod mail_repo;
pub mod quest_repo;
pub mod transaction_repo;

pub use account_repo::AccountRepo;
pub use catalog_repo::CatalogRepo;
pub use character_repo::CharacterRepo;
pub use chat_repo::ChatRepo;
pub use inventory_repo::InventoryRepo;
pub use mail_repo::MailRepo;
pub use quest_repo::QuestRepo;
pub use transaction_repo::TransactionRepo;
