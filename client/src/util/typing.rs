//! Character-by-character reveal of generated text.
//!
//! DESIGN
//! ======
//! Modeled as an explicit state machine {Idle, Revealing(position), Done}
//! so a reveal can be restarted against new text at any point: `start`
//! returns to position 0 and the abandoned reveal never resumes. The
//! stepping logic is pure; a cancellable timer loop in the owning component
//! drives it one tick at a time on the UI thread.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

/// Fixed reveal cadence: one character exposed per tick.
pub const REVEAL_TICK_MS: u32 = 30;

/// Phase of a reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Idle,
    Revealing,
    Done,
}

/// Progressive left-to-right reveal over the characters of one text.
/// Char-indexed, not byte-indexed, so multibyte text never splits.
#[derive(Clone, Debug, Default)]
pub struct TypingReveal {
    chars: Vec<char>,
    position: usize,
}

impl TypingReveal {
    /// Reveal nothing; `advance` is a no-op until `start`.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// Begin revealing `text` from its first character, abandoning any
    /// reveal in progress.
    #[must_use]
    pub fn start(text: &str) -> Self {
        Self { chars: text.chars().collect(), position: 0 }
    }

    /// Expose one more character. Returns `true` while more remain.
    pub fn advance(&mut self) -> bool {
        if self.position < self.chars.len() {
            self.position += 1;
        }
        self.position < self.chars.len()
    }

    /// The currently exposed prefix.
    #[must_use]
    pub fn visible(&self) -> String {
        self.chars[..self.position].iter().collect()
    }

    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        if self.chars.is_empty() {
            RevealPhase::Idle
        } else if self.position < self.chars.len() {
            RevealPhase::Revealing
        } else {
            RevealPhase::Done
        }
    }

    /// `true` once nothing remains hidden (including the idle state).
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.position >= self.chars.len()
    }
}

/// Start revealing `text` into `reveal`, cancelling any reveal already
/// running. Each started reveal bumps `generation`; a loop that wakes up
/// under a newer generation exits without touching the state.
#[cfg(feature = "hydrate")]
pub fn start_reveal(
    reveal: leptos::prelude::RwSignal<TypingReveal>,
    generation: leptos::prelude::RwSignal<u64>,
    text: String,
) {
    use leptos::prelude::{GetUntracked, Set, Update};

    let my_generation = generation.get_untracked() + 1;
    generation.set(my_generation);
    reveal.set(TypingReveal::start(&text));

    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(REVEAL_TICK_MS).await;
            let Some(current) = generation.try_get_untracked() else {
                return;
            };
            if current != my_generation {
                return;
            }
            let more = reveal.try_update(TypingReveal::advance).unwrap_or(false);
            if !more {
                return;
            }
        }
    });
}
