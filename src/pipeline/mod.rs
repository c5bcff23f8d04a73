mod analyzer;
pub mod lifecycle;

pub use analyzer::Analyzer;
pub use lifecycle::{RequestEvent, RequestLifecycle, RequestState};
