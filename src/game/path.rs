//! Arrow paths
//!
//! A crooked arrow is aimed by listing up to five rooms. Targets are checked
//! one at a time so a bad slot can be retried on its own.

use super::error::PathError;
use crate::world::{RoomId, ROOM_COUNT};

/// Longest path a single arrow can fly
pub const MAX_PATH_LEN: usize = 5;

/// A validated list of rooms an arrow should fly through
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrowPath {
    rooms: Vec<RoomId>,
}

impl ArrowPath {
    /// Start an empty path
    pub fn new() -> Self {
        Self { rooms: Vec::with_capacity(MAX_PATH_LEN) }
    }

    /// Validate a whole path at once
    pub fn from_rooms(rooms: &[RoomId]) -> Result<Self, PathError> {
        check_length(rooms.len())?;
        let mut path = Self::new();
        for &room in rooms {
            path.push(room)?;
        }
        Ok(path)
    }

    /// Append the next target.
    ///
    /// A target may not repeat the one two steps back, which would just
    /// bounce the arrow between two rooms.
    pub fn push(&mut self, room: RoomId) -> Result<(), PathError> {
        if self.rooms.len() >= MAX_PATH_LEN {
            return Err(PathError::Length { len: self.rooms.len() + 1, max: MAX_PATH_LEN });
        }
        if room >= ROOM_COUNT {
            return Err(PathError::NoSuchRoom(room));
        }
        let len = self.rooms.len();
        if len >= 2 && self.rooms[len - 2] == room {
            return Err(PathError::TooCrooked);
        }
        self.rooms.push(room);
        Ok(())
    }

    pub fn rooms(&self) -> &[RoomId] {
        &self.rooms
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Check a requested path length (1..=5)
pub fn check_length(len: usize) -> Result<(), PathError> {
    if (1..=MAX_PATH_LEN).contains(&len) {
        Ok(())
    } else {
        Err(PathError::Length { len, max: MAX_PATH_LEN })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_bounds() {
        assert!(check_length(0).is_err());
        assert!(check_length(1).is_ok());
        assert!(check_length(5).is_ok());
        assert_eq!(check_length(6), Err(PathError::Length { len: 6, max: 5 }));
        assert!(ArrowPath::from_rooms(&[]).is_err());
        assert!(ArrowPath::from_rooms(&[1, 2, 3, 4, 5, 6]).is_err());
    }

    #[test]
    fn test_too_crooked_only_rejects_that_slot() {
        let mut path = ArrowPath::new();
        path.push(1).unwrap();
        path.push(2).unwrap();
        assert_eq!(path.push(1), Err(PathError::TooCrooked));
        assert_eq!(path.rooms(), &[1, 2]);
        path.push(3).unwrap();
        assert_eq!(path.rooms(), &[1, 2, 3]);
    }

    #[test]
    fn test_immediate_repeat_is_allowed() {
        // Only the room two steps back is forbidden
        assert!(ArrowPath::from_rooms(&[4, 4]).is_ok());
    }

    #[test]
    fn test_out_of_range_target() {
        assert_eq!(ArrowPath::from_rooms(&[3, 20]), Err(PathError::NoSuchRoom(20)));
    }

    #[test]
    fn test_full_path_refuses_more() {
        let mut path = ArrowPath::from_rooms(&[1, 2, 3, 4, 5]).unwrap();
        assert!(matches!(path.push(6), Err(PathError::Length { .. })));
        assert_eq!(path.len(), 5);
    }
}
