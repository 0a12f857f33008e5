//! Ports (trait seams) between the engine and its collaborators.

pub mod analysis_repository;
pub mod conversation_repository;
pub mod quality_scorer;

pub use analysis_repository::AnalysisRepository;
pub use conversation_repository::ConversationRepository;
pub use quality_scorer::QualityScorer;
