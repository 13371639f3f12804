use std::time::Instant;

/// Where a typing session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Still accepting keystrokes.
    Running,
    /// The buffer matched the target exactly.
    Completed,
    /// The user bailed out; no completion side effects.
    Cancelled,
}

/// A keystroke, already normalized by the terminal driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keystroke {
    /// Esc or Ctrl+C.
    Cancel,
    Backspace,
    Char(char),
}

/// One run of the typing loop against a single target quote.
///
/// Holds the accumulating input buffer and the start instant. The session
/// only mutates its own state; rendering and persistence live with the
/// caller.
#[derive(Debug)]
pub struct Session {
    target: String,
    input: String,
    status: SessionStatus,
    started: Instant,
}

impl Session {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            input: String::new(),
            status: SessionStatus::Running,
            started: Instant::now(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn started(&self) -> Instant {
        self.started
    }

    /// Feed one keystroke through the state machine.
    ///
    /// Ignored once the session has left `Running`.
    pub fn apply(&mut self, key: Keystroke) -> SessionStatus {
        if self.status != SessionStatus::Running {
            return self.status;
        }

        match key {
            Keystroke::Cancel => self.status = SessionStatus::Cancelled,
            Keystroke::Backspace => {
                self.input.pop();
            }
            Keystroke::Char(c) => {
                self.input.push(c);
            }
        }

        // completion is checked after every mutation, so erasing a trailing
        // typo from an otherwise perfect buffer also finishes the session
        if self.status == SessionStatus::Running && self.input == self.target {
            self.status = SessionStatus::Completed;
        }

        self.status
    }

    /// Byte length of the longest common prefix of buffer and target.
    ///
    /// Always lands on a char boundary of both strings.
    pub fn matched_prefix(&self) -> usize {
        matched_prefix(&self.input, &self.target)
    }
}

/// Longest common prefix of two strings, as a byte offset on a char boundary.
pub fn matched_prefix(input: &str, target: &str) -> usize {
    input
        .char_indices()
        .zip(target.chars())
        .find(|((_, a), b)| a != b)
        .map(|((i, _), _)| i)
        .unwrap_or_else(|| input.len().min(target.len()))
}
