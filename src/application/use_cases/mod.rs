pub mod ai_insights;
pub mod test_case_query;
pub mod test_generation;
