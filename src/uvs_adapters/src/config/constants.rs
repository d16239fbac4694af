use std::time::Duration;

pub mod env {
    pub const ENV_PREFIX: &str = "UVS";
    pub const HOMESERVER_URL_ENV_VAR: &str = "UVS_HOMESERVER_URL";
    pub const OPENID_VERIFY_ANY_HOMESERVER_ENV_VAR: &str = "UVS_OPENID_VERIFY_ANY_HOMESERVER";
    pub const AUTH_TOKEN_ENV_VAR: &str = "UVS_AUTH_TOKEN";
    pub const ACCESS_TOKEN_ENV_VAR: &str = "UVS_ACCESS_TOKEN";
    pub const DISABLE_IP_BLACKLIST_ENV_VAR: &str = "UVS_DISABLE_IP_BLACKLIST";
    pub const LISTEN_ADDRESS_ENV_VAR: &str = "UVS_LISTEN_ADDRESS";
    pub const PORT_ENV_VAR: &str = "UVS_PORT";
    pub const LOG_LEVEL_ENV_VAR: &str = "UVS_LOG_LEVEL";
    pub const REQUEST_TIMEOUT_MS_ENV_VAR: &str = "UVS_REQUEST_TIMEOUT_MS";
}

pub mod defaults {
    pub const LISTEN_ADDRESS: &str = "127.0.0.1";
    pub const PORT: u16 = 3000;
    pub const LOG_LEVEL: &str = "info";
    pub const REQUEST_TIMEOUT_MS: u64 = 10_000;
}

pub mod test {
    use std::time::Duration;

    pub const APP_ADDRESS: &str = "127.0.0.1:0";
    pub const REQUEST_TIMEOUT: Duration = Duration::from_millis(500);
}

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_millis(defaults::REQUEST_TIMEOUT_MS);
