//! Business logic: the analysis engine and its surrounding services.

pub mod aggregator;
pub mod analysis_engine;
pub mod analysis_service;
pub mod batch_runner;
pub mod detectors;
pub mod lexicons;
pub mod sentiment;

pub use analysis_engine::AnalysisEngine;
pub use analysis_service::AnalysisService;
pub use batch_runner::{BatchReport, BatchRunner};
