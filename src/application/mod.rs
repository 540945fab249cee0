pub mod use_cases;

pub use use_cases::ai_insights::AiInsightsUseCase;
pub use use_cases::test_generation::TestGenerationUseCase;
