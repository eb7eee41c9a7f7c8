//! Transient message region.
//!
//! At most one message is visible and at most one clear deadline is
//! pending. Showing a new message replaces both.

use std::time::{Duration, Instant};

/// A message line that clears itself after a fixed delay.
#[derive(Clone, Debug)]
pub struct MessageBoard {
    text: Option<String>,
    deadline: Option<Instant>,
    timeout: Duration,
}

impl MessageBoard {
    pub fn new(timeout: Duration) -> Self {
        Self {
            text: None,
            deadline: None,
            timeout,
        }
    }

    /// Show `text` until `now + timeout`, cancelling any pending clear.
    pub fn show(&mut self, text: impl Into<String>, now: Instant) {
        self.text = Some(text.into());
        self.deadline = Some(now + self.timeout);
    }

    /// Clear the message and its deadline immediately.
    pub fn clear(&mut self) {
        self.text = None;
        self.deadline = None;
    }

    /// Clear the message if its deadline has passed. Returns true if it did.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.clear();
                true
            }
            _ => false,
        }
    }

    /// The visible message, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// When the visible message will be cleared.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(1200);

    #[test]
    fn test_show_and_expire() {
        let start = Instant::now();
        let mut board = MessageBoard::new(TIMEOUT);

        board.show("Invalid selection", start);
        assert_eq!(board.current(), Some("Invalid selection"));
        assert_eq!(board.deadline(), Some(start + TIMEOUT));

        assert!(!board.tick(start + Duration::from_millis(1199)));
        assert_eq!(board.current(), Some("Invalid selection"));

        assert!(board.tick(start + TIMEOUT));
        assert_eq!(board.current(), None);
        assert_eq!(board.deadline(), None);
    }

    #[test]
    fn test_new_message_replaces_deadline() {
        let start = Instant::now();
        let mut board = MessageBoard::new(TIMEOUT);

        board.show("Invalid selection", start);
        let later = start + Duration::from_millis(1000);
        board.show("You win!", later);

        // The first deadline no longer applies.
        assert!(!board.tick(start + TIMEOUT));
        assert_eq!(board.current(), Some("You win!"));
        assert!(board.tick(later + TIMEOUT));
    }

    #[test]
    fn test_clear_is_immediate() {
        let start = Instant::now();
        let mut board = MessageBoard::new(TIMEOUT);

        board.show("Do you forfeit?", start);
        board.clear();

        assert_eq!(board.current(), None);
        assert!(!board.tick(start + TIMEOUT));
    }
}
