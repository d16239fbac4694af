mod tracing;
mod verification_service;

pub use verification_service::VerificationService;
