//! Debounced Commit
//!
//! Cancellable scheduled task for search input. Each new input supersedes
//! the pending one; a timer only commits if its ticket is still current.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Handle for one scheduled commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self { generation: 0, pending: None }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending value and start a new quiet period
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Drop the pending value; outstanding tickets become stale
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    /// Timer expiry. Yields the value only for the latest ticket, once.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 == self.generation {
            self.pending.take()
        } else {
            None
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Schedule `value` on `state` and commit it through `on_commit` after
/// `delay_ms` of quiet.
pub fn debounce_commit<T>(state: StoredValue<Debouncer<T>>, value: T, delay_ms: u32, on_commit: Callback<T>)
where
    T: Send + Sync + 'static,
{
    let Some(ticket) = state.try_update_value(|d| d.schedule(value)) else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(delay_ms).await;
        if let Some(value) = state.try_update_value(|d| d.fire(ticket)).flatten() {
            on_commit.run(value);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_commits() {
        let mut d = Debouncer::new();
        let t = d.schedule("w".to_string());
        assert!(d.is_pending());
        assert_eq!(d.fire(t), Some("w".to_string()));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_new_input_supersedes_pending() {
        let mut d = Debouncer::new();
        let first = d.schedule("w");
        let second = d.schedule("wi");
        let third = d.schedule("wid");

        assert_eq!(d.fire(first), None);
        assert_eq!(d.fire(second), None);
        assert_eq!(d.fire(third), Some("wid"));
    }

    #[test]
    fn test_cancel_prevents_stale_commit() {
        let mut d = Debouncer::new();
        let t = d.schedule("gadget");
        d.cancel();
        assert!(!d.is_pending());
        assert_eq!(d.fire(t), None);
    }

    #[test]
    fn test_fire_is_single_shot() {
        let mut d = Debouncer::new();
        let t = d.schedule(1);
        assert_eq!(d.fire(t), Some(1));
        assert_eq!(d.fire(t), None);
    }
}
