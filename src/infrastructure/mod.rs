pub mod config;
pub mod container;
pub mod database;
pub mod external_services;
pub mod memory;

pub use config::{AppConfig, StoreBackend};
pub use container::AppContainer;
pub use memory::InMemoryStore;
