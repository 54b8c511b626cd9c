//! The hero typewriter: an explicit finite-state machine cycling through a
//! fixed list of phrases, driven by a single rescheduled timer.
//!
//! One `tick()` corresponds to one timer expiry; `delay()` reports how long
//! the next timer must wait given the current phase. The owning view keeps
//! the timer alive only while it is mounted, so teardown cancels the
//! pending tick implicitly.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Appending one character per tick until the phrase is fully shown.
    Typing,
    /// Full phrase on screen, waiting out the hold delay.
    Holding,
    /// Removing one character per tick until nothing is left.
    Deleting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    pub type_delay: Duration,
    pub delete_delay: Duration,
    pub hold_delay: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(100),
            delete_delay: Duration::from_millis(50),
            hold_delay: Duration::from_millis(2000),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    config: TypewriterConfig,
    current: usize,
    /// Characters of the current phrase on screen. Always counts a prefix.
    shown: usize,
    phase: Phase,
}

impl Typewriter {
    pub fn new<I, S>(phrases: I, config: TypewriterConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            config,
            current: 0,
            shown: 0,
            phase: Phase::Typing,
        }
    }

    fn phrase(&self) -> &str {
        self.phrases.get(self.current).map(String::as_str).unwrap_or("")
    }

    fn phrase_chars(&self) -> usize {
        self.phrase().chars().count()
    }

    /// The text currently on screen. A prefix of the current phrase.
    pub fn text(&self) -> &str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(i, _)| i)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// How long the driving timer must wait before the next `tick()`.
    pub fn delay(&self) -> Duration {
        match self.phase {
            Phase::Typing => self.config.type_delay,
            Phase::Holding => self.config.hold_delay,
            Phase::Deleting => self.config.delete_delay,
        }
    }

    /// Advance the machine by one timer expiry.
    pub fn tick(&mut self) {
        if self.phrases.is_empty() {
            return;
        }
        match self.phase {
            Phase::Typing => {
                if self.shown < self.phrase_chars() {
                    self.shown += 1;
                }
                if self.shown >= self.phrase_chars() {
                    self.phase = Phase::Holding;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                }
                if self.shown == 0 {
                    self.current = (self.current + 1) % self.phrases.len();
                    self.phase = Phase::Typing;
                }
            }
        }
    }
}
