pub mod config;
pub mod discovery;
pub mod http;
pub mod synapse;

pub use discovery::WellKnownDiscovery;
pub use synapse::SynapseClient;
