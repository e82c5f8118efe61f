pub mod chat;
pub mod theme;
