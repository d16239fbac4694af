pub mod caller_gate;
pub mod homeserver_resolver;
pub mod use_cases;

pub use caller_gate::{CallerGate, GateError};
pub use homeserver_resolver::{HomeserverMode, HomeserverResolver, ResolveError};
pub use use_cases::{
    VerificationError,
    verify_user::{VerifyUserCommand, VerifyUserUseCase},
    verify_user_in_room::{VerifyUserInRoomCommand, VerifyUserInRoomUseCase},
};
