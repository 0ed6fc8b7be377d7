pub mod analytics;
pub mod error;
pub mod ingest;
pub mod invariants;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod report;

pub use error::ReportError;
pub use output::OutputFormat;
pub use pipeline::generate_report;
