//! Data access layer. Each repository is a unit struct with static async
//! functions taking a pool reference.

pub mod lead_repo;
pub mod media_repo;
pub mod menu_repo;
pub mod page_repo;
pub mod product_repo;
pub mod seed;
pub mod settings_repo;

pub use lead_repo::LeadRepo;
pub use media_repo::MediaRepo;
pub use menu_repo::MenuRepo;
pub use page_repo::PageRepo;
pub use product_repo::ProductRepo;
pub use seed::{SeedReport, Seeder};
pub use settings_repo::SettingsRepo;
