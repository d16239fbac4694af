//! # UVS - Matrix User Verification Service
//!
//! Facade crate that re-exports the public APIs of the verification service
//! components.
//!
//! ## Structure
//!
//! - **Core domain types**: `OpenIdToken`, `UserId`, `RoomId`, `ServerName`, etc.
//! - **Ports**: `IdentityProvider`, `HomeserverDiscovery`
//! - **Use cases**: `VerifyUserUseCase`, `VerifyUserInRoomUseCase`
//! - **Adapters**: `SynapseClient`, `WellKnownDiscovery`, `Settings`
//! - **Service**: `VerificationService` - The main entry point

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use uvs_core::*;
}

pub use uvs_core::{
    DomainError, HomeserverUrl, OpenIdToken, RoomId, ServerName, UserId, VerificationResult,
};

// ============================================================================
// Ports
// ============================================================================

pub use uvs_core::{DiscoveryError, HomeserverDiscovery, IdentityProvider, RemoteLookupError};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use uvs_application::*;
}

pub use uvs_application::{
    CallerGate, HomeserverMode, HomeserverResolver, VerificationError, VerifyUserInRoomUseCase,
    VerifyUserUseCase,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use uvs_adapters::http::*;
    }

    /// Configuration
    pub mod config {
        pub use uvs_adapters::config::*;
    }
}

pub use uvs_adapters::{SynapseClient, WellKnownDiscovery, config::Settings};

// ============================================================================
// Verification Service (Main Entry Point)
// ============================================================================

pub use uvs_service::VerificationService;

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing the port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
