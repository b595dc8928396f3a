//! Rooms -- the physical inventory the front desk assigns and tracks.

use serde::{Deserialize, Serialize};

/// Room categories offered by the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomType {
    #[default]
    Queen,
    King,
    Suite,
}

impl RoomType {
    /// Return the display label for this room type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queen => "Queen",
            Self::King => "King",
            Self::Suite => "Suite",
        }
    }
}

/// Physical room states shown on the room board.
///
/// `Occupied` is entered only by completing a check-in; every other state
/// moves through committed room-status changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
    Dirty,
    Clean,
    OutOfOrder,
}

impl RoomStatus {
    /// Return the display label for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Dirty => "Dirty",
            Self::Clean => "Clean",
            Self::OutOfOrder => "OutOfOrder",
        }
    }

    /// Whether a room in this state can be handed to an arriving guest.
    pub fn is_assignable(&self) -> bool {
        matches!(self, Self::Available | Self::Clean)
    }
}

/// A physical hotel room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Stable identifier.
    pub id: String,
    /// Door number, unique across the property.
    pub number: String,
    /// Bed/size category.
    pub room_type: RoomType,
    /// Amenity tags shown on the room card.
    pub features: Vec<String>,
    /// Current physical state.
    pub status: RoomStatus,
    /// Floor the room is on.
    pub floor: u8,
    /// Standard nightly rate in cents (avoids floating-point).
    pub nightly_rate_cents: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignable_states() {
        assert!(RoomStatus::Available.is_assignable());
        assert!(RoomStatus::Clean.is_assignable());
        assert!(!RoomStatus::Occupied.is_assignable());
        assert!(!RoomStatus::Dirty.is_assignable());
        assert!(!RoomStatus::OutOfOrder.is_assignable());
    }
}
