//! Class meeting locations.
//!
//! Directory reports print the meeting place of a section in a single
//! cell. Most cells hold a facility code and a room code separated by a
//! space, but a few fixed labels stand in for sections that have no
//! physical room, and some extractions fuse the two codes together.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Width of the facility code when it is fused with the room code.
pub const FUSED_FACILITY_WIDTH: usize = 5;

/// Where a section meets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Room {
    /// Section is taught online.
    Online,
    /// Section meets somewhere off campus.
    OffCampus,
    /// No meeting place was listed.
    None,
    /// A room inside a campus facility.
    #[serde(rename_all = "camelCase")]
    Located {
        /// Facility (building) code, e.g. `"0140"` or `"SOME1"`.
        facility_code: String,
        /// Room code within the facility.
        room_code: Option<String>,
    },
}

impl Room {
    /// Builds a [`Room::Located`] from a facility and an optional room code.
    #[must_use]
    pub fn located(facility_code: impl Into<String>, room_code: Option<String>) -> Self {
        Self::Located {
            facility_code: facility_code.into(),
            room_code,
        }
    }

    /// Decodes the room cell of a directory report row.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRoomError`] if the cell holds a single fused token
    /// that is too short to contain a facility code.
    pub fn parse(text: &str) -> Result<Self, InvalidRoomError> {
        match text {
            "ONLINE" => return Ok(Self::Online),
            "OFF CAMPUS" => return Ok(Self::OffCampus),
            "" => return Ok(Self::None),
            _ => {}
        }

        let mut tokens: Vec<&str> = text.split(' ').collect();
        while tokens.len() > 1 && tokens.last().is_some_and(|t| t.is_empty()) {
            tokens.pop();
        }

        match tokens.as_slice() {
            [facility, room, ..] => Ok(Self::located(*facility, Some((*room).to_string()))),
            [fused] => Self::parse_fused(fused).ok_or_else(|| InvalidRoomError {
                value: text.to_string(),
            }),
            [] => Ok(Self::None),
        }
    }

    /// Splits a token where the facility code runs straight into the room
    /// code.
    fn parse_fused(token: &str) -> Option<Self> {
        let split_at = match token.char_indices().nth(FUSED_FACILITY_WIDTH) {
            Some((idx, _)) => idx,
            None if token.chars().count() == FUSED_FACILITY_WIDTH => token.len(),
            None => return None,
        };

        let (facility, room) = token.split_at(split_at);
        let room = (!room.is_empty()).then(|| room.to_string());

        Some(Self::located(facility, room))
    }

    /// Returns the facility code, or `None` for the sentinel rooms.
    #[must_use]
    pub fn facility_code(&self) -> Option<&str> {
        match self {
            Self::Located { facility_code, .. } => Some(facility_code),
            Self::Online | Self::OffCampus | Self::None => None,
        }
    }

    /// Returns the room code, if one was listed.
    #[must_use]
    pub fn room_code(&self) -> Option<&str> {
        match self {
            Self::Located { room_code, .. } => room_code.as_deref(),
            Self::Online | Self::OffCampus | Self::None => None,
        }
    }
}

impl FromStr for Room {
    type Err = InvalidRoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Online => f.write_str("ONLINE"),
            Self::OffCampus => f.write_str("OFF CAMPUS"),
            Self::None => f.write_str("NONE"),
            Self::Located {
                facility_code,
                room_code: Some(room_code),
            } => write!(f, "{facility_code}-{room_code}"),
            Self::Located {
                facility_code,
                room_code: None,
            } => f.write_str(facility_code),
        }
    }
}

/// Error returned when a room cell cannot be split into facility and room
/// codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRoomError {
    /// The cell text that failed to decode.
    pub value: String,
}

impl std::fmt::Display for InvalidRoomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid room '{}': fused facility code must be {FUSED_FACILITY_WIDTH} characters",
            self.value
        )
    }
}

impl std::error::Error for InvalidRoomError {}
