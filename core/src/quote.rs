use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A quote to type, with the fastest recorded completion time.
///
/// The wire format matches the persisted file: `quote`, `author`, and an
/// optional `highscore` given as integer nanoseconds. A zero best time means
/// the quote has never been completed, and is omitted when serializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    #[serde(rename = "quote")]
    pub text: String,
    pub author: String,
    #[serde(
        rename = "highscore",
        with = "duration_nanos",
        default,
        skip_serializing_if = "duration_is_zero"
    )]
    pub best_time: Duration,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
            best_time: Duration::ZERO,
        }
    }

    /// Whether a best time has ever been recorded.
    pub fn has_best_time(&self) -> bool {
        !self.best_time.is_zero()
    }
}

fn duration_is_zero(d: &Duration) -> bool {
    d.is_zero()
}

/// Serde adapter for durations stored as integer nanoseconds.
mod duration_nanos {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, ser: S) -> Result<S::Ok, S::Error> {
        ser.serialize_u64(d.as_nanos() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Duration, D::Error> {
        let nanos = u64::deserialize(de)?;
        Ok(Duration::from_nanos(nanos))
    }
}
