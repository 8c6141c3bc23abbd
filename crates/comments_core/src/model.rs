use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// Message used when a failure carries no text of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong";

/// A single comment as served by the `/comments` endpoint.
///
/// Unknown fields are ignored on decode. `id` and `postId` also accept
/// integers written as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
    pub email: String,
    #[serde(deserialize_with = "lenient_i64")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "postId", deserialize_with = "lenient_i64")]
    pub post_id: i64,
}

impl Comment {
    /// First character of the email, uppercased, for avatar-style display.
    pub fn avatar_initial(&self) -> Option<char> {
        self.email
            .chars()
            .next()
            .and_then(|ch| ch.to_uppercase().next())
    }
}

/// Outcome of one fetch: either the data or a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResult<T> {
    Success(T),
    Error(String),
}

impl<T> NetworkResult<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, NetworkResult::Success(_))
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            NetworkResult::Success(_) => None,
            NetworkResult::Error(message) => Some(message),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> NetworkResult<U> {
        match self {
            NetworkResult::Success(data) => NetworkResult::Success(f(data)),
            NetworkResult::Error(message) => NetworkResult::Error(message),
        }
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct LenientI64;

    impl<'de> Visitor<'de> for LenientI64 {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "an integer or a string containing an integer")
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<i64, E> {
            Ok(value)
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<i64, E> {
            i64::try_from(value).map_err(|_| E::custom(format!("integer {value} out of range")))
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<i64, E> {
            value
                .trim()
                .parse::<i64>()
                .map_err(|err| E::custom(format!("invalid integer {value:?}: {err}")))
        }
    }

    deserializer.deserialize_any(LenientI64)
}
