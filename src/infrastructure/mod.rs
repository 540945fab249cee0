pub mod config;
pub mod export;
pub mod image;
pub mod llm_clients;
pub mod response;
