pub mod advisor;

pub use advisor::TriageService;
