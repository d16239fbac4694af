use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use uvs_adapters::http::routes::{health, verify_user, verify_user_in_room};
use uvs_application::{CallerGate, HomeserverResolver, VerifyUserInRoomUseCase, VerifyUserUseCase};
use uvs_core::{HomeserverDiscovery, IdentityProvider};

use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP service answering user and room membership verification requests
pub struct VerificationService {
    router: Router,
}

impl VerificationService {
    /// Create a new VerificationService
    ///
    /// # Arguments
    /// * `gate` - Caller authentication applied to both verification routes
    /// * `resolver` - Picks the homeserver a request is answered against
    /// * `provider` - Client for the homeserver identity and membership APIs
    ///
    /// The resolver and provider are cloned into each route's state.
    pub fn new<P, D>(gate: CallerGate, resolver: HomeserverResolver<D>, provider: P) -> Self
    where
        P: IdentityProvider + Clone + 'static,
        D: HomeserverDiscovery + Clone + 'static,
    {
        let verify_user_use_case =
            VerifyUserUseCase::new(gate.clone(), resolver.clone(), provider.clone());
        let verify_user_in_room_use_case = VerifyUserInRoomUseCase::new(gate, resolver, provider);

        let router = Router::new()
            .route("/health", get(health))
            .route("/verify/user", post(verify_user::<P, D>))
            .with_state(verify_user_use_case)
            .route("/verify/user/in-room", post(verify_user_in_room::<P, D>))
            // Path used by existing widget deployments
            .route("/verify/user_in_room", post(verify_user_in_room::<P, D>))
            .with_state(verify_user_in_room_use_case);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the service into a router that can be mounted on another router
    pub fn as_router(self) -> Router {
        self.with_trace_layer().router
    }

    /// Run the verification service as a standalone server
    ///
    /// # Arguments
    /// * `listener` - TCP listener to bind the server to
    pub async fn run_standalone(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let router = self.as_router();

        tracing::info!("Verification service listening on {}", listener.local_addr()?);

        axum_server::Server::<std::net::SocketAddr>::from_listener(listener)
            .serve(router.into_make_service())
            .await
    }
}
