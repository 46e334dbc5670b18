//! The terminal session.
//!
//! A terminal owns a transcript of rendered lines, exactly one live prompt,
//! and the command history used for Up/Down recall. Submitting the prompt
//! walks one cycle of:
//!
//! ```text
//! AwaitingInput ──submit──▶ Executing ──▶ Rendered ──▶ AwaitingInput
//! ```
//!
//! Closing the terminal drops all of this; files live in the store.

mod session;
mod transcript;

pub use session::{PROMPT, Phase, Submission, Terminal};
pub use transcript::{Line, LineStyle, classify};
