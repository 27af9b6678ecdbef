pub mod atomic_writer;
pub mod json_file_storage;
pub mod memory_storage;

pub use atomic_writer::AtomicWriter;
pub use json_file_storage::JsonFileStorage;
pub use memory_storage::MemoryStorage;
