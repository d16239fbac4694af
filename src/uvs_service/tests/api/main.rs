mod caller_auth;
mod health;
mod multi_homeserver;
mod verify_user;
mod verify_user_in_room;
