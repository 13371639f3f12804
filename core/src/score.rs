use crate::Quote;
use std::time::Duration;

/// What happened to a quote's best time after a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// No best time existed; `elapsed` is now the record.
    FirstTime,
    /// `elapsed` beat (or tied) the record, which has been replaced.
    NewBest { previous: Duration },
    /// The record stands.
    NotBeaten { best: Duration },
}

impl ScoreOutcome {
    /// Whether the quote was mutated and the store should be persisted.
    pub fn should_persist(&self) -> bool {
        !matches!(self, ScoreOutcome::NotBeaten { .. })
    }
}

/// Compare `elapsed` against the quote's best time and update it if beaten.
///
/// Matching the elapsed time exactly counts as a new best. Persisting the
/// store afterwards is the caller's job.
pub fn record_time(quote: &mut Quote, elapsed: Duration) -> ScoreOutcome {
    if !quote.has_best_time() {
        quote.best_time = elapsed;
        return ScoreOutcome::FirstTime;
    }

    if elapsed > quote.best_time {
        return ScoreOutcome::NotBeaten {
            best: quote.best_time,
        };
    }

    let previous = quote.best_time;
    quote.best_time = elapsed;
    ScoreOutcome::NewBest { previous }
}
