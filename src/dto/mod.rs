pub mod assessment_dto;
pub mod insight_dto;
