pub mod memory;

pub use memory::InMemoryCategoryRepository;
