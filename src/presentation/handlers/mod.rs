mod analyze;
mod chat;
mod health;

pub use analyze::analyze_handler;
pub use chat::chat_handler;
pub use health::health_handler;
