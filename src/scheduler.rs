use std::time::Duration;

/// Identifies one scheduled action so it can be cancelled before it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Pending<A> {
    handle: TimerHandle,
    due: Duration,
    action: A,
}

/// Virtual-time queue of deferred actions.
///
/// Time only moves when [`Scheduler::advance`] is called, which makes
/// cancellation exact: an action that was cancelled can never be returned.
#[derive(Debug)]
pub struct Scheduler<A> {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    pub fn schedule(&mut self, delay: Duration, action: A) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(Pending {
            handle,
            due: self.now + delay,
            action,
        });
        handle
    }

    /// Returns true if the handle was still pending
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.pending.len();
        self.pending.retain(|p| p.handle != handle);
        self.pending.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Move virtual time forward and hand back every action that came due,
    /// earliest first (ties keep scheduling order).
    pub fn advance(&mut self, dt: Duration) -> Vec<(TimerHandle, A)> {
        self.now += dt;
        let now = self.now;

        let (mut due, rest): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|p| p.due <= now);
        self.pending = rest;

        due.sort_by_key(|p| (p.due, p.handle.0));
        due.into_iter().map(|p| (p.handle, p.action)).collect()
    }
}
