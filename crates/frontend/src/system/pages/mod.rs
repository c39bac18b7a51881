pub mod knowledge_base;
pub mod login;
pub mod settings;
