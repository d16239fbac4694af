pub mod error;
pub mod homeserver_url;
pub mod open_id_token;
pub mod room_id;
pub mod server_name;
pub mod user_id;
pub mod verification_result;
