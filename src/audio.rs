//! Audio cues
//!
//! The game announces outcomes to a cue player and never waits on it or looks
//! at whether playback worked.

use std::io::{self, Write};
use tracing::trace;

/// Sound events fired by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Correct,
    Wrong,
    Hint,
}

/// Sink for audio cues
pub trait CuePlayer {
    fn play(&mut self, cue: Cue);
}

/// Plays nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl CuePlayer for Silent {
    fn play(&mut self, cue: Cue) {
        trace!(?cue, "cue muted");
    }
}

/// Rings the terminal bell on stderr
#[derive(Debug, Clone, Copy)]
pub struct TerminalBell {
    enabled: bool,
}

impl TerminalBell {
    #[must_use]
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl CuePlayer for TerminalBell {
    fn play(&mut self, cue: Cue) {
        trace!(?cue, enabled = self.enabled, "cue");
        if !self.enabled {
            return;
        }

        // Two rings for a win
        let rings = if cue == Cue::Correct { "\x07\x07" } else { "\x07" };
        let mut stderr = io::stderr();
        let _ = stderr.write_all(rings.as_bytes()).and_then(|()| stderr.flush());
    }
}

impl<P: CuePlayer + ?Sized> CuePlayer for Box<P> {
    fn play(&mut self, cue: Cue) {
        (**self).play(cue);
    }
}
