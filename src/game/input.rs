//! Held-key tracking and the movement vocabulary.

use std::collections::HashSet;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            _ => None,
        }
    }
}

/// Single characters fold to lowercase so a press of `a` and a release of
/// `A` (shift changed mid-hold) refer to the same key.
fn normalize(key: &str) -> String {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_lowercase().collect(),
        _ => key.to_string(),
    }
}

#[derive(Default, Debug, Clone)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    /// Returns true when the key was not already held.
    pub fn press(&mut self, key: &str) -> bool {
        self.held.insert(normalize(key))
    }

    /// Returns true when the key was held.
    pub fn release(&mut self, key: &str) -> bool {
        self.held.remove(&normalize(key))
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(&normalize(key))
    }

    fn direction_held(&self, dir: Direction) -> bool {
        self.held.iter().any(|k| Direction::from_key(k) == Some(dir))
    }

    /// Unit steering vector; each axis is in {-1, 0, 1} and opposing keys
    /// cancel.
    pub fn direction(&self) -> (f64, f64) {
        let axis = |neg: Direction, pos: Direction| -> f64 {
            let n = if self.direction_held(neg) { 1.0 } else { 0.0 };
            let p = if self.direction_held(pos) { 1.0 } else { 0.0 };
            p - n
        };
        (axis(Direction::Left, Direction::Right), axis(Direction::Up, Direction::Down))
    }
}
