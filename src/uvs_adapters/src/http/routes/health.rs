/// Liveness check. Never touches the homeserver.
pub async fn health() -> &'static str {
    "👍"
}
