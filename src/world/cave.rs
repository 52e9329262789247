//! Cave topology
//!
//! The fixed 20-room cave. Rooms sit on the vertices of a dodecahedron and
//! every room has exactly three tunnels.

/// Index of a room in the cave (0..ROOM_COUNT)
pub type RoomId = usize;

/// Number of rooms in the cave
pub const ROOM_COUNT: usize = 20;

/// Number of tunnels leaving every room
pub const TUNNELS_PER_ROOM: usize = 3;

/// Dodecahedron adjacency, one row per room
const DODECAHEDRON: [[RoomId; TUNNELS_PER_ROOM]; ROOM_COUNT] = [
    [1, 4, 7],    // 0
    [0, 2, 9],    // 1
    [1, 3, 11],   // 2
    [2, 4, 13],   // 3
    [0, 3, 5],    // 4
    [4, 6, 14],   // 5
    [5, 7, 16],   // 6
    [0, 6, 8],    // 7
    [7, 9, 17],   // 8
    [1, 8, 10],   // 9
    [9, 11, 18],  // 10
    [2, 10, 12],  // 11
    [11, 13, 19], // 12
    [3, 12, 14],  // 13
    [5, 13, 15],  // 14
    [14, 16, 19], // 15
    [6, 15, 17],  // 16
    [8, 16, 18],  // 17
    [10, 17, 19], // 18
    [12, 15, 18], // 19
];

/// The immutable cave graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cave {
    tunnels: &'static [[RoomId; TUNNELS_PER_ROOM]; ROOM_COUNT],
}

impl Cave {
    /// Build the standard dodecahedral cave
    pub fn new() -> Self {
        Self { tunnels: &DODECAHEDRON }
    }

    /// Neighbours of a room, in stable order.
    ///
    /// `room` must already be validated with [`Cave::contains`].
    #[inline]
    pub fn neighbors(&self, room: RoomId) -> [RoomId; TUNNELS_PER_ROOM] {
        self.tunnels[room]
    }

    /// Check whether a tunnel connects `from` to `to`
    pub fn is_adjacent(&self, from: RoomId, to: RoomId) -> bool {
        self.contains(from) && self.tunnels[from].contains(&to)
    }

    /// Check if a room number exists in this cave
    #[inline]
    pub fn contains(&self, room: RoomId) -> bool {
        room < ROOM_COUNT
    }

    /// Iterate over every room number
    pub fn rooms(&self) -> impl Iterator<Item = RoomId> {
        0..ROOM_COUNT
    }
}

impl Default for Cave {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_room_has_three_distinct_tunnels() {
        let cave = Cave::new();
        for room in cave.rooms() {
            let [a, b, c] = cave.neighbors(room);
            assert!(a != b && b != c && a != c, "room {} has duplicate tunnels", room);
            assert!(!cave.neighbors(room).contains(&room), "room {} tunnels to itself", room);
            assert!(cave.neighbors(room).iter().all(|&n| cave.contains(n)));
        }
    }

    #[test]
    fn test_adjacency_is_symmetric() {
        let cave = Cave::new();
        for room in cave.rooms() {
            for neighbor in cave.neighbors(room) {
                assert!(
                    cave.is_adjacent(neighbor, room),
                    "{} -> {} has no way back",
                    room,
                    neighbor
                );
            }
        }
    }

    #[test]
    fn test_room_zero() {
        let cave = Cave::new();
        assert_eq!(cave.neighbors(0), [1, 4, 7]);
        assert!(!cave.is_adjacent(0, 2));
        assert!(!cave.is_adjacent(25, 0));
    }

    #[test]
    fn test_cave_is_connected() {
        let cave = Cave::new();
        let mut visited = [false; ROOM_COUNT];
        let mut stack = vec![0];

        while let Some(room) = stack.pop() {
            if visited[room] {
                continue;
            }
            visited[room] = true;
            stack.extend(cave.neighbors(room).iter().filter(|&&n| !visited[n]));
        }

        assert!(visited.iter().all(|&v| v), "some rooms are unreachable");
    }

    #[test]
    fn test_edge_count_matches_dodecahedron() {
        let cave = Cave::new();
        let endpoints: usize = cave.rooms().map(|r| cave.neighbors(r).len()).sum();
        // 20 vertices, 30 edges
        assert_eq!(endpoints / 2, 30);
    }
}
