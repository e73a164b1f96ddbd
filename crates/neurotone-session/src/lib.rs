//! Neurotone Interaction Session
//!
//! A small conversational state machine that maps the sentiment of user
//! text to a target brainwave band and an influence score. Its output is
//! the sole driver of which waveform the signal core synthesizes next.
//!
//! # Overview
//!
//! Each conversation owns one [`AgentSession`]. Per turn, the orchestrator
//! classifies the user's text with [`sentiment::classify`], advances the
//! session with the caller's clock, and reads the resulting state's target
//! band:
//!
//! ```
//! use chrono::Utc;
//! use neurotone_session::{sentiment, AgentSession};
//! use neurotone_signal::SignalConfig;
//!
//! let mut session = AgentSession::new(SignalConfig::default(), Utc::now());
//! let (state, influence) = session.advance(sentiment::classify("sounds great"), Utc::now());
//! let band = state.target_band();
//! # let _ = (band, influence);
//! ```
//!
//! Influence decays linearly to zero over five idle minutes, so a session
//! left alone always drifts back toward a clean slate.
//!
//! # Concurrency
//!
//! `advance` mutates session state and must be serialized per session by
//! the orchestrator (one session, one exclusive execution context). The
//! classifier and every lookup are pure.

pub mod sentiment;
pub mod session;
pub mod state;

// Re-export main types at crate root
pub use sentiment::{classify, SentimentClass};
pub use session::{AgentSession, SessionMetrics, SessionRecord};
pub use state::InteractionState;
