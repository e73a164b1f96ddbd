//! Per-conversation session state and the advance step.
//!
//! An [`AgentSession`] is owned by exactly one orchestrating context and
//! mutated only through [`AgentSession::advance`]. Timestamps are supplied
//! by the caller; the core never reads an ambient clock, which keeps the
//! decay arithmetic testable.

use chrono::{DateTime, Utc};
use neurotone_signal::{BrainwaveBand, SignalConfig};
use serde::Serialize;

use crate::sentiment::SentimentClass;
use crate::state::InteractionState;

/// Influence decays linearly to zero over this many seconds.
const DECAY_SECONDS: f64 = 300.0;

/// Per-turn influence adjustment for positive/negative sentiment.
const INFLUENCE_STEP: f64 = 0.1;

/// One recorded conversation turn. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionRecord {
    /// When the turn was advanced.
    pub timestamp: DateTime<Utc>,
    /// State after the turn.
    pub state: InteractionState,
    /// Influence level after the turn.
    pub influence_level: f64,
    /// Sentiment that produced the transition, when known.
    pub sentiment: Option<SentimentClass>,
}

/// Aggregate metrics over a session's recorded turns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionMetrics {
    pub total_turns: usize,
    pub current_state: InteractionState,
    pub influence_level: f64,
    pub duration_seconds: f64,
}

/// Mutable state of one conversation.
///
/// Not safe for concurrent `advance` calls on the same session; the
/// orchestrator serializes turns per session.
#[derive(Debug, Clone)]
pub struct AgentSession {
    config: SignalConfig,
    state: InteractionState,
    influence_level: f64,
    last_update: DateTime<Utc>,
    history: Vec<SessionRecord>,
}

impl AgentSession {
    /// Creates a session in the neutral state with zero influence.
    pub fn new(config: SignalConfig, now: DateTime<Utc>) -> Self {
        Self {
            config,
            state: InteractionState::Neutral,
            influence_level: 0.0,
            last_update: now,
            history: Vec::new(),
        }
    }

    /// The signal configuration this session synthesizes with.
    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Current influence level in [0, 1].
    pub fn influence_level(&self) -> f64 {
        self.influence_level
    }

    /// Recorded turns, oldest first.
    pub fn history(&self) -> &[SessionRecord] {
        &self.history
    }

    /// Advances the session by one turn.
    ///
    /// First applies time decay: influence is scaled by
    /// `max(0, 1 - elapsed/300)`, with a `now` earlier than the last
    /// update counting as zero elapsed time. Then applies the sentiment
    /// adjustment, appends a record, and returns the new state and
    /// influence level.
    pub fn advance(
        &mut self,
        sentiment: SentimentClass,
        now: DateTime<Utc>,
    ) -> (InteractionState, f64) {
        let elapsed_ms = (now - self.last_update).num_milliseconds().max(0);
        let elapsed = elapsed_ms as f64 / 1000.0;
        self.influence_level *= (1.0 - elapsed / DECAY_SECONDS).max(0.0);

        match sentiment {
            SentimentClass::Positive => {
                self.influence_level = (self.influence_level + INFLUENCE_STEP).min(1.0);
                self.state = InteractionState::Influenced;
            }
            SentimentClass::Negative => {
                self.influence_level = (self.influence_level - INFLUENCE_STEP).max(0.0);
                self.state = InteractionState::Resistant;
            }
            SentimentClass::Neutral => {
                self.state = InteractionState::Engaged;
            }
            // No transition rule is defined for uncertain input; it
            // decays influence and leaves the state alone.
            SentimentClass::Uncertain => {}
        }

        self.last_update = now;
        self.history.push(SessionRecord {
            timestamp: now,
            state: self.state,
            influence_level: self.influence_level,
            sentiment: Some(sentiment),
        });

        tracing::debug!(
            state = ?self.state,
            influence_level = self.influence_level,
            ?sentiment,
            "session advanced"
        );

        (self.state, self.influence_level)
    }

    /// Band to synthesize toward in the current state.
    pub fn target_band(&self) -> BrainwaveBand {
        self.state.target_band()
    }

    /// Metrics over the recorded turns.
    ///
    /// Duration is measured from the first record to `now`, or zero for
    /// an empty log.
    pub fn metrics(&self, now: DateTime<Utc>) -> SessionMetrics {
        let duration_seconds = self
            .history
            .first()
            .map(|record| ((now - record.timestamp).num_milliseconds().max(0)) as f64 / 1000.0)
            .unwrap_or(0.0);

        SessionMetrics {
            total_turns: self.history.len(),
            current_state: self.state,
            influence_level: self.influence_level,
            duration_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::classify;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn test_session() -> AgentSession {
        AgentSession::new(SignalConfig::default(), t0())
    }

    #[test]
    fn test_new_session_is_neutral() {
        let session = test_session();
        assert_eq!(session.state(), InteractionState::Neutral);
        assert_eq!(session.influence_level(), 0.0);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_positive_turn_builds_influence() {
        let mut session = test_session();
        let (state, level) = session.advance(SentimentClass::Positive, t0());
        assert_eq!(state, InteractionState::Influenced);
        assert!((level - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_influence_saturates_at_one() {
        let mut session = test_session();
        for _ in 0..15 {
            session.advance(SentimentClass::Positive, t0());
        }
        assert_eq!(session.influence_level(), 1.0);
    }

    #[test]
    fn test_negative_turn_floors_at_zero() {
        let mut session = test_session();
        let (state, level) = session.advance(SentimentClass::Negative, t0());
        assert_eq!(state, InteractionState::Resistant);
        assert_eq!(level, 0.0);
    }

    #[test]
    fn test_classified_turn_trace() {
        // "great" / "no" / "hmm" from zero influence with negligible
        // elapsed time between turns.
        let mut session = test_session();
        let now = t0();

        let (s1, l1) = session.advance(classify("great"), now);
        let (s2, l2) = session.advance(classify("no"), now);
        let (s3, l3) = session.advance(classify("hmm"), now);

        assert_eq!(
            (s1, s2, s3),
            (
                InteractionState::Influenced,
                InteractionState::Resistant,
                InteractionState::Engaged,
            )
        );
        assert!((l1 - 0.1).abs() < 1e-12);
        assert_eq!(l2, 0.0);
        assert_eq!(l3, 0.0);
    }

    #[test]
    fn test_uncertain_leaves_state_untouched() {
        let mut session = test_session();
        session.advance(SentimentClass::Positive, t0());
        let (state, level) = session.advance(SentimentClass::Uncertain, t0());
        assert_eq!(state, InteractionState::Influenced);
        assert!((level - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_decay_boundary_zeroes_influence() {
        let mut session = test_session();
        for _ in 0..5 {
            session.advance(SentimentClass::Positive, t0());
        }
        assert!((session.influence_level() - 0.5).abs() < 1e-12);

        // Exactly the full decay window, neutral sentiment: decay factor
        // is max(0, 1 - 300/300) = 0.
        let later = t0() + chrono::Duration::seconds(300);
        let (state, level) = session.advance(SentimentClass::Neutral, later);
        assert_eq!(state, InteractionState::Engaged);
        assert_eq!(level, 0.0);
    }

    #[test]
    fn test_partial_decay() {
        let mut session = test_session();
        session.advance(SentimentClass::Positive, t0());

        // Half the window at uncertain sentiment: 0.1 * 0.5 = 0.05.
        let later = t0() + chrono::Duration::seconds(150);
        let (_, level) = session.advance(SentimentClass::Uncertain, later);
        assert!((level - 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_clock_regression_counts_as_zero_elapsed() {
        let mut session = test_session();
        session.advance(SentimentClass::Positive, t0());

        let earlier = t0() - chrono::Duration::seconds(600);
        let (_, level) = session.advance(SentimentClass::Uncertain, earlier);
        assert!((level - 0.1).abs() < 1e-12, "negative elapsed must not decay, got {level}");
    }

    #[test]
    fn test_metrics_empty_session() {
        let session = test_session();
        let metrics = session.metrics(t0() + chrono::Duration::seconds(60));
        assert_eq!(metrics.total_turns, 0);
        assert_eq!(metrics.duration_seconds, 0.0);
        assert_eq!(metrics.current_state, InteractionState::Neutral);
    }

    #[test]
    fn test_metrics_duration_from_first_turn() {
        let mut session = test_session();
        session.advance(SentimentClass::Neutral, t0());
        session.advance(
            SentimentClass::Positive,
            t0() + chrono::Duration::seconds(30),
        );

        let metrics = session.metrics(t0() + chrono::Duration::seconds(90));
        assert_eq!(metrics.total_turns, 2);
        assert!((metrics.duration_seconds - 90.0).abs() < 1e-9);
        assert_eq!(metrics.current_state, InteractionState::Influenced);
    }

    #[test]
    fn test_target_band_follows_state() {
        let mut session = test_session();
        assert_eq!(session.target_band(), BrainwaveBand::Alpha);
        session.advance(SentimentClass::Positive, t0());
        assert_eq!(session.target_band(), BrainwaveBand::Theta);
        session.advance(SentimentClass::Negative, t0());
        assert_eq!(session.target_band(), BrainwaveBand::Alpha);
    }

    #[test]
    fn test_records_carry_sentiment() {
        let mut session = test_session();
        session.advance(SentimentClass::Positive, t0());
        let record = &session.history()[0];
        assert_eq!(record.sentiment, Some(SentimentClass::Positive));
        assert_eq!(record.state, InteractionState::Influenced);
    }

    #[test]
    fn test_record_serialization_shape() {
        let mut session = test_session();
        session.advance(SentimentClass::Negative, t0());
        let json = serde_json::to_value(&session.history()[0]).unwrap();
        assert_eq!(json["state"], "RESISTANT");
        assert_eq!(json["sentiment"], "NEGATIVE");
    }
}
