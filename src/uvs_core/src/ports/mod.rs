pub mod discovery;
pub mod identity_provider;
