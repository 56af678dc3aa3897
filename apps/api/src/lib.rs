pub mod config;
pub mod conversation;
pub mod errors;
pub mod insights;
pub mod llm_client;
pub mod models;
pub mod network;
pub mod post;
pub mod profile;
