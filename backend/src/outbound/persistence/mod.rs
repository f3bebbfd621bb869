//! Domain store adapters.

mod json_file_store;
mod memory_store;

pub use json_file_store::JsonFileDomainStore;
pub use memory_store::InMemoryDomainStore;
