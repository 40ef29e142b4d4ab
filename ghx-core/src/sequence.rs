//! # Request Sequencing
//!
//! Requests are never cancelled, so several may resolve out of order. Each
//! issued request gets a monotonically increasing [`Ticket`]; only the result
//! carrying the most recent ticket may be written into a screen's state.

/// Identifies one issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
  pub const fn value(self) -> u64 {
    self.0
  }
}

/// Issues tickets and remembers the latest one
#[derive(Debug, Default)]
pub struct RequestSequence {
  latest: u64,
}

impl RequestSequence {
  pub const fn new() -> Self {
    Self { latest: 0 }
  }

  /// Issue a ticket for a new request, superseding every earlier one
  pub const fn issue(&mut self) -> Ticket {
    self.latest += 1;
    Ticket(self.latest)
  }

  /// Whether `ticket` belongs to the most recently issued request
  pub const fn is_current(&self, ticket: Ticket) -> bool {
    ticket.0 == self.latest
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_tickets_increase() {
    let mut sequence = RequestSequence::new();
    let first = sequence.issue();
    let second = sequence.issue();

    assert!(second > first);
    assert_eq!(second.value(), first.value() + 1);
  }

  #[test]
  fn test_only_latest_is_current() {
    let mut sequence = RequestSequence::new();
    let first = sequence.issue();
    assert!(sequence.is_current(first));

    let second = sequence.issue();
    assert!(!sequence.is_current(first));
    assert!(sequence.is_current(second));
  }

  #[test]
  fn test_fresh_sequence_accepts_nothing_from_another() {
    let mut other = RequestSequence::new();
    let foreign = other.issue();
    other.issue();

    let sequence = RequestSequence::new();
    assert!(!sequence.is_current(foreign));
  }
}
