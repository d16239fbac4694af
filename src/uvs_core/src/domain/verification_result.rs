use serde::{Serialize, ser::SerializeStruct};

use super::user_id::UserId;

/// Outcome of a verification request.
///
/// `user_id` is present exactly when the user was verified; the constructors
/// are the only way to build a result, which keeps that invariant. The room
/// membership flag is only carried by room checks and is never `true` for an
/// unverified user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    user_id: Option<UserId>,
    room_membership: Option<bool>,
}

impl VerificationResult {
    pub fn verified(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            room_membership: None,
        }
    }

    pub fn unverified() -> Self {
        Self {
            user_id: None,
            room_membership: None,
        }
    }

    pub fn verified_in_room(user_id: UserId, is_member: bool) -> Self {
        Self {
            user_id: Some(user_id),
            room_membership: Some(is_member),
        }
    }

    pub fn unverified_in_room() -> Self {
        Self {
            user_id: None,
            room_membership: Some(false),
        }
    }

    pub fn user_verified(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn room_membership_verified(&self) -> Option<bool> {
        self.room_membership
    }

    pub fn user_id(&self) -> Option<&UserId> {
        self.user_id.as_ref()
    }
}

#[derive(Serialize)]
struct Results {
    user: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    room_membership: Option<bool>,
}

// Wire shape: {"results": {"user": bool, "room_membership"?: bool}, "user_id": string|null}
impl Serialize for VerificationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut state = serializer.serialize_struct("VerificationResult", 2)?;
        state.serialize_field(
            "results",
            &Results {
                user: self.user_verified(),
                room_membership: self.room_membership,
            },
        )?;
        state.serialize_field("user_id", &self.user_id)?;
        state.end()
    }
}
