pub mod error;
pub mod health;
pub mod verify_user;
pub mod verify_user_in_room;

pub use error::{ErrorResponse, VerifyApiError};
pub use health::health;
pub use verify_user::{VerifyUserRequest, verify_user};
pub use verify_user_in_room::{VerifyUserInRoomRequest, verify_user_in_room};
