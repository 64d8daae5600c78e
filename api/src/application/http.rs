pub mod chat;
pub mod health;
pub mod history;
pub mod profile;
pub mod scan;
pub mod server;
pub mod session;
