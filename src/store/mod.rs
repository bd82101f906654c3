pub mod file;
pub mod memory;
pub mod traits;
pub mod typed;

pub use file::{open_desk, FileStore};
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
pub use typed::{DeskStore, OPENING_BALANCE};
