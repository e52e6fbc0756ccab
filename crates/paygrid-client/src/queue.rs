//! Offline queue: a FIFO of payments that failed to reach the gateway.
//!
//! Modeled as an explicit state machine over {Idle, Draining, CoolingDown}
//! driven by `tokio::time`, so tests can run it under a paused clock. Only
//! the head is retried, preserving per-client send order; enqueueing is a
//! promise of eventual submission, not of commit.

use paygrid_proto::pb::paygrid::v1::Transaction;
use std::collections::VecDeque;
use tokio::time::{Duration, Instant};

/// Retry posture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueState {
    /// Nothing pending.
    Idle,
    /// Pending entries exist and the next flush may send immediately.
    Draining,
    /// The last attempt failed; sends wait out the cooldown.
    CoolingDown,
}

/// One queued payment and how often it has been attempted.
#[derive(Debug, Clone)]
pub struct QueuedPayment {
    pub transaction: Transaction,
    pub attempts: u32,
}

pub const DEFAULT_COOLDOWN: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

#[derive(Debug)]
pub struct OfflineQueue {
    pending: VecDeque<QueuedPayment>,
    state: QueueState,
    cooldown: Duration,
    max_attempts: u32,
    cooling_since: Option<Instant>,
}

impl Default for OfflineQueue {
    fn default() -> Self {
        Self::new(DEFAULT_COOLDOWN, DEFAULT_MAX_ATTEMPTS)
    }
}

impl OfflineQueue {
    pub fn new(cooldown: Duration, max_attempts: u32) -> Self {
        Self {
            pending: VecDeque::new(),
            state: QueueState::Idle,
            cooldown,
            max_attempts,
            cooling_since: None,
        }
    }

    pub fn state(&self) -> QueueState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Appends behind everything already queued.
    pub fn push(&mut self, transaction: Transaction) {
        self.pending.push_back(QueuedPayment {
            transaction,
            attempts: 0,
        });
        if self.state == QueueState::Idle {
            self.state = QueueState::Draining;
        }
    }

    pub fn head(&self) -> Option<&QueuedPayment> {
        self.pending.front()
    }

    pub fn pop_head(&mut self) -> Option<QueuedPayment> {
        let head = self.pending.pop_front();
        if self.pending.is_empty() && self.state == QueueState::Draining {
            self.state = QueueState::Idle;
        }
        head
    }

    /// Marks a failed attempt on the head without reordering.
    pub fn bump_head_attempts(&mut self) -> u32 {
        match self.pending.front_mut() {
            Some(head) => {
                head.attempts += 1;
                head.attempts
            }
            None => 0,
        }
    }

    /// Enters cooldown after a transport failure.
    pub fn note_failure(&mut self) {
        self.state = QueueState::CoolingDown;
        self.cooling_since = Some(Instant::now());
    }

    /// Leaves cooldown after a successful send.
    pub fn note_success(&mut self) {
        self.cooling_since = None;
        self.state = if self.pending.is_empty() {
            QueueState::Idle
        } else {
            QueueState::Draining
        };
    }

    /// Whether a send may be attempted now.
    pub fn ready(&self) -> bool {
        match self.state {
            QueueState::Idle | QueueState::Draining => true,
            QueueState::CoolingDown => self
                .cooling_since
                .map(|since| since.elapsed() >= self.cooldown)
                .unwrap_or(true),
        }
    }

    /// Time left before the next attempt is allowed; zero when ready.
    pub fn remaining_cooldown(&self) -> Duration {
        match (self.state, self.cooling_since) {
            (QueueState::CoolingDown, Some(since)) => {
                self.cooldown.saturating_sub(since.elapsed())
            }
            _ => Duration::ZERO,
        }
    }
}
