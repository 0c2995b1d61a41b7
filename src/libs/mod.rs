pub mod config;
pub mod eth;
pub mod lookup;
pub mod writing;
