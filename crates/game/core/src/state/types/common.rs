use std::fmt;
use std::str::FromStr;

/// Stable identifier of a seat.
///
/// Assigned once when the game is created (`p0` .. `p5`) and never reassigned.
/// The textual form is what the persisted document stores, both as the `id`
/// field and as commander-damage map keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Identifier for the seat at `index`.
    #[inline]
    pub const fn for_seat(index: usize) -> Self {
        Self(index as u8)
    }

    /// Seat index this identifier was assigned to at creation.
    #[inline]
    pub const fn seat(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

/// Rejected textual player identifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid player id '{0}' (expected p<seat>)")]
pub struct ParsePlayerIdError(pub String);

impl FromStr for PlayerId {
    type Err = ParsePlayerIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('p')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|digits| digits.parse::<u8>().ok())
            .map(PlayerId)
            .ok_or_else(|| ParsePlayerIdError(s.to_string()))
    }
}

impl TryFrom<String> for PlayerId {
    type Error = ParsePlayerIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PlayerId> for String {
    fn from(id: PlayerId) -> Self {
        id.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_seat_ids() {
        assert_eq!("p0".parse::<PlayerId>(), Ok(PlayerId(0)));
        assert_eq!("p5".parse::<PlayerId>(), Ok(PlayerId(5)));
        assert_eq!(PlayerId(3).to_string(), "p3");
    }

    #[test]
    fn rejects_malformed_ids() {
        for raw in ["", "p", "0", "q1", "p-1", "p+1", "p1x", "p999"] {
            assert!(raw.parse::<PlayerId>().is_err(), "{raw} should not parse");
        }
    }
}
