pub mod analysis;
pub mod error;
pub mod export;
pub mod lenient;
pub mod llm_config;
pub mod test_case;
pub mod upload;
