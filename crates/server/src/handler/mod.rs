pub mod chat;
pub mod static_files;
