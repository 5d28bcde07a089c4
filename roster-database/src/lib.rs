pub mod database;
pub mod impls;
pub mod memory;
pub mod model;
pub mod store;

pub use database::{Database, MIGRATOR};
pub use memory::MemoryStore;
pub use model::player::{NewPlayer, Player, Profession, Race};
pub use store::PlayerStore;
