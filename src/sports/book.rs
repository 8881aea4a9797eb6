//! Event registry for sports betting

use super::pricing::{recalculate_fair_odds, true_probability};
use crate::config::{
    validate_bet_outcome, validate_event, validate_sports, BetOutcome, EventConfig, SportsConfig,
};
use crate::diagnostics::{default_sink, reported, SharedSink};
use crate::error::{BettingError, Result};
use crate::settlement::{settle_sports_bet, sports_expected_value, SportsSettlement, StakePolicy};
use ahash::AHashMap;
use rand::Rng;

/// Sports events keyed by id, in registration order
pub struct SportsBook {
    policy: StakePolicy,
    events: Vec<EventConfig>,
    index: AHashMap<String, usize>,
    sink: SharedSink,
}

impl std::fmt::Debug for SportsBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SportsBook")
            .field("policy", &self.policy)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl Default for SportsBook {
    fn default() -> Self {
        Self::empty(SportsConfig::default().default_stake)
    }
}

impl SportsBook {
    /// Build a book from configuration, rejecting duplicate ids
    pub fn new(config: SportsConfig) -> Result<Self> {
        validate_sports(&config)?;

        let index = config
            .events
            .iter()
            .enumerate()
            .map(|(i, event)| (event.id.clone(), i))
            .collect();

        Ok(Self {
            policy: StakePolicy::new(config.default_stake),
            events: config.events,
            index,
            sink: default_sink(),
        })
    }

    pub fn empty(default_stake: f64) -> Self {
        Self {
            policy: StakePolicy::new(default_stake),
            events: Vec::new(),
            index: AHashMap::new(),
            sink: default_sink(),
        }
    }

    /// Route failure diagnostics to `sink` instead of `tracing`
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn default_stake(&self) -> f64 {
        self.policy.default_stake
    }

    pub fn set_default_stake(&mut self, stake: f64) {
        self.policy = StakePolicy::new(stake);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events(&self) -> &[EventConfig] {
        &self.events
    }

    pub fn event(&self, event_id: &str) -> Option<&EventConfig> {
        self.index.get(event_id).map(|&i| &self.events[i])
    }

    fn event_mut(&mut self, event_id: &str) -> Option<&mut EventConfig> {
        let i = *self.index.get(event_id)?;
        Some(&mut self.events[i])
    }

    fn require_event(&self, event_id: &str) -> Result<&EventConfig> {
        self.event(event_id)
            .ok_or_else(|| BettingError::EventNotFound(event_id.to_string()))
    }

    /// Register a new event; fails if the id is already taken
    pub fn add_event(&mut self, event: EventConfig) -> Result<()> {
        let result = self.try_add_event(event);
        reported(self.sink.as_ref(), "sports.add_event", result)
    }

    fn try_add_event(&mut self, event: EventConfig) -> Result<()> {
        if self.index.contains_key(&event.id) {
            return Err(BettingError::DuplicateEvent(event.id));
        }
        validate_event(&event)?;

        self.index.insert(event.id.clone(), self.events.len());
        self.events.push(event);
        Ok(())
    }

    /// Register or replace an event, returning the replaced one
    pub fn upsert_event(&mut self, event: EventConfig) -> Result<Option<EventConfig>> {
        let result = validate_event(&event).map(|()| match self.index.get(&event.id) {
            Some(&i) => Some(std::mem::replace(&mut self.events[i], event)),
            None => {
                self.index.insert(event.id.clone(), self.events.len());
                self.events.push(event);
                None
            }
        });
        reported(self.sink.as_ref(), "sports.upsert_event", result)
    }

    /// Replace an outcome with the same id, or append it
    pub fn set_outcome(&mut self, event_id: &str, outcome: BetOutcome) -> Result<()> {
        let result = match self.event_mut(event_id) {
            Some(event) => validate_bet_outcome(&event.id, &outcome).map(|()| {
                match event.outcome_mut(&outcome.id) {
                    Some(existing) => *existing = outcome,
                    None => event.outcomes.push(outcome),
                }
            }),
            None => Err(BettingError::EventNotFound(event_id.to_string())),
        };
        reported(self.sink.as_ref(), "sports.set_outcome", result)
    }

    /// Reprice one event from its true weights
    ///
    /// On failure the event's odds are left as they were.
    pub fn recalculate_odds(&mut self, event_id: &str) -> Result<()> {
        let result = match self.event_mut(event_id) {
            Some(event) => recalculate_fair_odds(event),
            None => Err(BettingError::EventNotFound(event_id.to_string())),
        };
        reported(self.sink.as_ref(), "sports.recalculate_odds", result)
    }

    /// Reprice every event, returning how many were repriced
    pub fn recalculate_all_odds(&mut self) -> usize {
        let mut repriced = 0;
        for event in &mut self.events {
            match recalculate_fair_odds(event) {
                Ok(()) => repriced += 1,
                Err(err) => self.sink.report("sports.recalculate_all_odds", &err),
            }
        }
        repriced
    }

    /// Current quoted odds for an outcome
    pub fn quoted_odds(&self, event_id: &str, outcome_id: &str) -> Option<f64> {
        self.event(event_id)?
            .outcome(outcome_id)
            .map(|o| o.decimal_odds)
    }

    /// True win probability for an outcome
    pub fn true_probability(&self, event_id: &str, outcome_id: &str) -> Option<f64> {
        true_probability(self.event(event_id)?, outcome_id)
    }

    /// Simulate `event_id` and settle a stake on `chosen_outcome_id`
    pub fn settle<R>(
        &self,
        event_id: &str,
        chosen_outcome_id: &str,
        stake: f64,
        rng: &mut R,
    ) -> Result<SportsSettlement>
    where
        R: Rng + ?Sized,
    {
        let result = self.require_event(event_id).and_then(|event| {
            settle_sports_bet(event, chosen_outcome_id, stake, self.policy, rng)
        });
        reported(self.sink.as_ref(), "sports.settle", result)
    }

    /// Expected net result of a stake on an outcome at its quoted odds
    pub fn expected_value(&self, event_id: &str, outcome_id: &str, stake: f64) -> Result<f64> {
        let result = self
            .require_event(event_id)
            .and_then(|event| sports_expected_value(event, outcome_id, stake, self.policy));
        reported(self.sink.as_ref(), "sports.expected_value", result)
    }
}
