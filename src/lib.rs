pub mod cli;
pub mod config;
pub mod feedback;
pub mod interaction;
pub mod links;
pub mod logging;
pub mod mode;
pub mod ordering;
pub mod signing;
pub mod store;
pub mod types;
pub mod view;
