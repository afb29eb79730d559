// Watches keystrokes for a fixed sequence. Used to flip the particles to
// random rainbow colors.

use std::collections::VecDeque;

pub const RAINBOW_CODE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

pub struct KeySequence {
    code: &'static [&'static str],
    recent: VecDeque<String>,
}

impl KeySequence {
    pub fn new(code: &'static [&'static str]) -> Self {
        KeySequence {
            code,
            recent: VecDeque::with_capacity(code.len() + 1),
        }
    }

    pub fn rainbow() -> Self {
        KeySequence::new(&RAINBOW_CODE)
    }

    // Feed one KeyboardEvent.key value. Returns true when the last keys typed
    // spell the whole code; the buffer starts over afterwards.
    pub fn push(&mut self, key: &str) -> bool {
        // "B" with shift or caps lock still counts
        let key = if key.chars().count() == 1 {
            key.to_lowercase()
        } else {
            key.to_string()
        };
        self.recent.push_back(key);
        if self.recent.len() > self.code.len() {
            self.recent.pop_front();
        }

        let matched = self.recent.len() == self.code.len()
            && self.recent.iter().zip(self.code.iter()).all(|(a, b)| a == b);
        if matched {
            self.recent.clear();
        }
        matched
    }
}
