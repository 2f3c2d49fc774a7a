pub mod memory;
pub mod ports;

pub use memory::InMemoryCardStore;
pub use ports::CardStore;
