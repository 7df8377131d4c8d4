//! Storage implementations - file-backed and in-memory.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::InMemoryStorage;
