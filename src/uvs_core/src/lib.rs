pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    error::DomainError,
    homeserver_url::HomeserverUrl,
    open_id_token::OpenIdToken,
    room_id::RoomId,
    server_name::ServerName,
    user_id::UserId,
    verification_result::VerificationResult,
};

pub use ports::{
    discovery::{DiscoveryError, HomeserverDiscovery},
    identity_provider::{IdentityProvider, RemoteLookupError},
};
