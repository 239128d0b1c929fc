use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    #[error("typewriter needs at least one phrase")]
    NoPhrases,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterTimings {
    pub type_delay: Duration,
    pub full_pause: Duration,
    pub delete_delay: Duration,
}

impl Default for TypewriterTimings {
    fn default() -> Self {
        Self {
            type_delay: Duration::from_millis(80),
            full_pause: Duration::from_millis(1800),
            delete_delay: Duration::from_millis(40),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedFull,
    Deleting,
    PausedEmpty,
}

/// Position of the typewriter within its phrase list.
///
/// `cursor` counts chars, not bytes, and never exceeds the current phrase's length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TypewriterState {
    phrase_index: usize,
    cursor: usize,
    deleting: bool,
}

impl TypewriterState {
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn deleting(&self) -> bool {
        self.deleting
    }
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    timings: TypewriterTimings,
    state: TypewriterState,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, timings: TypewriterTimings) -> Result<Self, TypewriterError> {
        if phrases.is_empty() {
            return Err(TypewriterError::NoPhrases);
        }
        Ok(Self {
            phrases,
            timings,
            state: TypewriterState::default(),
        })
    }

    pub fn state(&self) -> TypewriterState {
        self.state
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    fn phrase_len(&self, index: usize) -> usize {
        self.phrases[index].chars().count()
    }

    pub fn phase_of(&self, state: TypewriterState) -> Phase {
        let full = state.cursor == self.phrase_len(state.phrase_index);
        match (state.deleting, full, state.cursor == 0) {
            (false, false, _) => Phase::Typing,
            (false, true, _) => Phase::PausedFull,
            (true, _, false) => Phase::Deleting,
            (true, _, true) => Phase::PausedEmpty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase_of(self.state)
    }

    /// How long to wait before stepping out of `state`.
    pub fn delay_for(&self, state: TypewriterState) -> Duration {
        match self.phase_of(state) {
            Phase::Typing => self.timings.type_delay,
            Phase::PausedFull => self.timings.full_pause,
            Phase::Deleting | Phase::PausedEmpty => self.timings.delete_delay,
        }
    }

    /// Pure transition: the state after one step, and the delay before the step after that.
    ///
    /// `PausedEmpty` is never returned; it rolls straight over into typing the next phrase.
    pub fn transition(&self, state: TypewriterState) -> (TypewriterState, Duration) {
        let mut next = match self.phase_of(state) {
            Phase::Typing => TypewriterState {
                cursor: state.cursor + 1,
                ..state
            },
            Phase::PausedFull => TypewriterState {
                deleting: true,
                ..state
            },
            Phase::Deleting => TypewriterState {
                cursor: state.cursor - 1,
                ..state
            },
            Phase::PausedEmpty => state,
        };
        if self.phase_of(next) == Phase::PausedEmpty {
            next = TypewriterState {
                phrase_index: (next.phrase_index + 1) % self.phrases.len(),
                cursor: 0,
                deleting: false,
            };
        }
        (next, self.delay_for(next))
    }

    /// Advance one step and return the delay until the next one.
    pub fn step(&mut self) -> Duration {
        let previous = self.state.phrase_index;
        let (next, delay) = self.transition(self.state);
        self.state = next;
        if next.phrase_index != previous {
            log::debug!("typewriter moved to phrase {}", next.phrase_index);
        }
        delay
    }

    /// Delay before the first step out of the current state.
    pub fn pending_delay(&self) -> Duration {
        self.delay_for(self.state)
    }

    pub fn typed_text(&self) -> String {
        self.phrases[self.state.phrase_index]
            .chars()
            .take(self.state.cursor)
            .collect()
    }
}
