pub mod quote;
pub mod score;
pub mod session;
pub mod store;

pub use quote::Quote;
pub use score::{record_time, ScoreOutcome};
pub use session::{matched_prefix, Keystroke, Session, SessionStatus};
pub use store::{QuoteStore, StoreError};
