//! Two-key theme chord: hold the mode key, then press `l` or `d`.

use tracing::debug;

use super::keys::{Key, KeyEvent, KeyPhase};
use crate::entities::theme::Theme;

/// A pending chord that has not resolved within this window is dropped.
pub const CHORD_TIMEOUT_MS: u64 = 1500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChordState {
    #[default]
    Idle,
    /// Mode key is down and no second key has arrived yet.
    Pending { since_ms: u64 },
    /// Resolved at least once; stays armed until the mode key is released.
    Held,
}

/// What the chord machine did with one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChordOutcome {
    /// Not chord related; single-key handling may proceed.
    PassThrough,
    Started,
    Resolved(Theme),
    /// Swallowed while the chord is active.
    Suppressed,
    Released,
}

#[derive(Debug, Clone, Default)]
pub struct ChordMachine {
    state: ChordState,
}

fn is_mode_key(key: &Key) -> bool {
    key.is_char('t') || key.is_char('T')
}

impl ChordMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChordState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state != ChordState::Idle
    }

    /// Drops a pending chord that outlived [`CHORD_TIMEOUT_MS`].
    pub fn expire(&mut self, now_ms: u64) {
        if let ChordState::Pending { since_ms } = self.state {
            if now_ms.saturating_sub(since_ms) >= CHORD_TIMEOUT_MS {
                debug!(since_ms, now_ms, "Theme chord timed out");
                self.state = ChordState::Idle;
            }
        }
    }

    pub fn on_event(&mut self, event: &KeyEvent) -> ChordOutcome {
        self.expire(event.timestamp_ms);

        match (event.phase, self.state) {
            (KeyPhase::Up, ChordState::Idle) => ChordOutcome::PassThrough,
            (KeyPhase::Up, _) if is_mode_key(&event.key) => {
                self.state = ChordState::Idle;
                ChordOutcome::Released
            }
            (KeyPhase::Up, _) => ChordOutcome::Suppressed,
            (KeyPhase::Down, ChordState::Idle) if is_mode_key(&event.key) => {
                self.state = ChordState::Pending { since_ms: event.timestamp_ms };
                ChordOutcome::Started
            }
            (KeyPhase::Down, ChordState::Idle) => ChordOutcome::PassThrough,
            (KeyPhase::Down, _) => match &event.key {
                Key::Char('l') => {
                    self.state = ChordState::Held;
                    ChordOutcome::Resolved(Theme::Light)
                }
                Key::Char('d') => {
                    self.state = ChordState::Held;
                    ChordOutcome::Resolved(Theme::Dark)
                }
                _ => ChordOutcome::Suppressed,
            },
        }
    }
}
