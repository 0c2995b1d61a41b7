pub mod handler;
pub mod menu;
