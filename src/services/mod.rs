pub mod adaptive_service;
pub mod behavior_service;
pub mod career_service;
pub mod llm_service;
pub mod prompt_service;
pub mod question_service;
pub mod scoring_service;
pub mod voice_service;
