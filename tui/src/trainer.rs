//! The typing session loop: raw keystrokes in, colorized diff out.

use crate::render::{self, fmt_duration};
use crate::terminal::{read_keystroke, RawModeGuard};
use color_eyre::eyre::{eyre, Result};
use std::io::Write;
use std::path::Path;
use typetrial_core::{record_time, QuoteStore, ScoreOutcome, Session, SessionStatus};

/// Run one typing session against the quote at `id`, or a random one.
///
/// On completion the elapsed time is compared against the quote's best and
/// the store is saved back to `path` when the record changes.
pub fn run(store: &mut QuoteStore, path: &Path, id: Option<usize>) -> Result<()> {
    let id = match id {
        Some(id) => id,
        None => store
            .random_index()
            .ok_or_else(|| eyre!("no quotes found in {}", path.display()))?,
    };
    let quote = store
        .get(id)
        .ok_or_else(|| eyre!("no quote with id {id} (store has {})", store.len()))?;

    let mut session = Session::new(quote.text.clone());
    let mut stdout = std::io::stdout();

    let status = {
        let _raw = RawModeGuard::acquire()?;
        render::redraw_line(&mut stdout, session.input(), session.target())?;

        loop {
            let key = read_keystroke()?;
            match session.apply(key) {
                SessionStatus::Running => {
                    render::redraw_line(&mut stdout, session.input(), session.target())?;
                }
                status => {
                    render::redraw_line(&mut stdout, session.input(), session.target())?;
                    break status;
                }
            }
        }
        // raw mode released here, before any multi-line output
    };

    writeln!(stdout)?;
    if status == SessionStatus::Cancelled {
        return Ok(());
    }

    let elapsed = session.started().elapsed();
    writeln!(stdout, "Well done!")?;
    writeln!(stdout, "You took: {}", fmt_duration(elapsed))?;

    let quote = store
        .get_mut(id)
        .ok_or_else(|| eyre!("quote {id} vanished mid-session"))?;

    let outcome = record_time(quote, elapsed);
    match outcome {
        ScoreOutcome::FirstTime => {
            writeln!(
                stdout,
                "This was your first time, setting best time to: {}",
                fmt_duration(elapsed)
            )?;
        }
        ScoreOutcome::NewBest { previous } => {
            writeln!(
                stdout,
                "New best time! Previous best was: {}",
                fmt_duration(previous)
            )?;
        }
        ScoreOutcome::NotBeaten { best } => {
            writeln!(stdout, "Your best time is: {}", fmt_duration(best))?;
        }
    }

    if outcome.should_persist() {
        store.save(path)?;
    }

    Ok(())
}
