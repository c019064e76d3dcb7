use parking_lot::Mutex;
use std::fmt;

use super::watch::Listeners;
use crate::errors::CoreError;
use crate::models::range::{DateRange, RangeSelection};

pub use crate::models::view::PanelStatus;

/// Why a fetch was not issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The range picker holds fewer or more than two dates.
    IncompleteRange,
    /// Two dates, but the start is after the end.
    ReversedRange,
    /// The triggering input did not change.
    Unchanged,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SkipReason::IncompleteRange => "incomplete range",
            SkipReason::ReversedRange => "start date after end date",
            SkipReason::Unchanged => "input unchanged",
        };
        f.write_str(s)
    }
}

/// The range a panel may fetch for, or why the selection cannot be used.
pub fn usable_range(selection: &RangeSelection) -> Result<DateRange, SkipReason> {
    match selection.as_range() {
        Some(range) => Ok(range),
        None if selection.is_complete() => Err(SkipReason::ReversedRange),
        None => Err(SkipReason::IncompleteRange),
    }
}

/// Result of one fetch cycle. Failures are values here, never panics or
/// propagated errors: the panel keeps showing its last good value.
#[derive(Debug)]
pub enum FetchOutcome {
    /// No request was sent; nothing changed.
    Skipped(SkipReason),
    /// The response replaced the displayed value.
    Applied,
    /// The response arrived after a newer one had been applied; dropped.
    Stale,
    /// The request or the transform failed; displayed value retained.
    Failed(CoreError),
}

impl FetchOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, FetchOutcome::Applied)
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, FetchOutcome::Skipped(_))
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, FetchOutcome::Stale)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FetchOutcome::Failed(_))
    }

    /// Whether a request actually went out for this cycle.
    pub fn was_requested(&self) -> bool {
        !self.is_skipped()
    }
}

/// Proof that a request was started on a panel. Consumed by `complete`.
#[derive(Debug)]
#[must_use = "a started fetch must be completed to leave the Fetching state"]
pub struct FetchTicket {
    seq: u64,
}

impl FetchTicket {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

struct PanelState<T> {
    value: T,
    issued: u64,
    applied: u64,
    in_flight: usize,
}

/// Display state of one panel plus request fencing.
///
/// Every request gets a strictly increasing sequence number. A response is
/// applied only if it is newer than the one currently displayed, so a slow
/// early request can never overwrite a later selection.
pub struct Panel<T> {
    name: &'static str,
    state: Mutex<PanelState<T>>,
    listeners: Listeners<T>,
}

impl<T: Clone> Panel<T> {
    pub fn new(name: &'static str, initial: T) -> Self {
        Self {
            name,
            state: Mutex::new(PanelState {
                value: initial,
                issued: 0,
                applied: 0,
                in_flight: 0,
            }),
            listeners: Listeners::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Currently displayed value.
    pub fn value(&self) -> T {
        self.state.lock().value.clone()
    }

    pub fn status(&self) -> PanelStatus {
        let state = self.state.lock();
        Self::status_of(&state)
    }

    /// Sequence number of the result on screen (0 = none yet).
    pub fn applied_seq(&self) -> u64 {
        self.state.lock().applied
    }

    /// Called with the new value every time a response is applied.
    pub fn subscribe(&self, f: impl Fn(&T) + Send + Sync + 'static) {
        self.listeners.subscribe(f);
    }

    /// Register an outgoing request.
    pub fn begin(&self) -> FetchTicket {
        let mut state = self.state.lock();
        state.issued += 1;
        state.in_flight += 1;
        FetchTicket { seq: state.issued }
    }

    /// Settle a request started with `begin`.
    pub fn complete(&self, ticket: FetchTicket, result: Result<T, CoreError>) -> FetchOutcome {
        let applied = {
            let mut state = self.state.lock();
            state.in_flight = state.in_flight.saturating_sub(1);
            match result {
                Err(e) => return FetchOutcome::Failed(e),
                Ok(_) if ticket.seq <= state.applied => {
                    tracing::warn!(
                        panel = self.name,
                        seq = ticket.seq,
                        displayed = state.applied,
                        "discarding stale response"
                    );
                    return FetchOutcome::Stale;
                }
                Ok(value) => {
                    state.value = value.clone();
                    state.applied = ticket.seq;
                    value
                }
            }
        };
        self.listeners.notify(&applied);
        FetchOutcome::Applied
    }

    fn status_of(state: &PanelState<T>) -> PanelStatus {
        if state.in_flight > 0 {
            PanelStatus::Fetching
        } else if state.applied > 0 {
            PanelStatus::Displayed
        } else {
            PanelStatus::Idle
        }
    }
}
