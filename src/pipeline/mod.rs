pub mod orchestrator;
pub mod report;

pub use orchestrator::PlaylistBuilder;
pub use report::RunReport;
