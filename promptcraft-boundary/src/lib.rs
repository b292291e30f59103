use serde::{Deserialize, Serialize};
use thiserror::Error;

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Prompt {
    pub id         : String,
    pub created_at : i64,
    pub title      : String,
    pub text       : String,
    pub category   : Option<String>,
    pub author     : String,
    pub upvotes    : u64,
    pub downvotes  : u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Default))]
pub struct NewPrompt {
    pub title: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, Hash)
)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

/// Signed vote direction as stored by the backend (+1 / -1).
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct VoteValue(i8);

impl From<VoteDirection> for VoteValue {
    fn from(from: VoteDirection) -> Self {
        match from {
            VoteDirection::Up => Self(1),
            VoteDirection::Down => Self(-1),
        }
    }
}

#[derive(Debug, Error)]
#[error("invalid vote value: {0}")]
pub struct InvalidVoteValue(pub i8);

impl TryFrom<VoteValue> for VoteDirection {
    type Error = InvalidVoteValue;

    fn try_from(from: VoteValue) -> Result<Self, Self::Error> {
        match from.0 {
            1 => Ok(Self::Up),
            -1 => Ok(Self::Down),
            v => Err(InvalidVoteValue(v)),
        }
    }
}

/// A user's vote record on a single prompt.
///
/// At most one record exists per (user, prompt) pair; the backend enforces
/// the uniqueness constraint on upsert.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Vote {
    pub prompt: String,
    pub direction: VoteValue,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq))]
pub struct NewVote {
    pub direction: VoteValue,
}

/// Denormalized aggregate counters of a prompt.
#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct VoteCounts {
    pub up: u64,
    pub down: u64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Comment {
    pub id: String,
    pub prompt: String,
    pub author: String,
    pub created_at: i64,
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Default))]
pub struct NewComment {
    pub text: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone))]
pub struct User {
    pub email: String,
    pub email_confirmed: bool,
}

#[derive(Serialize, Deserialize, Default)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Opaque bearer token returned by a successful login.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ApiToken {
    pub token: String,
}

/// Number of submitted prompts per author, as aggregated by the backend.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ContributionCount(pub String, pub u64);

/// JSON error body of a non-2xx backend response.
#[derive(Debug, Serialize, Deserialize, Error)]
#[error("{message}")]
#[cfg_attr(feature = "extra-derive", derive(Clone, PartialEq, Eq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
