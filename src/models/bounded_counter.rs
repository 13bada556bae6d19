//! Integer value kept inside an inclusive `[min, max]` range.
//!
//! Two notification channels are exposed:
//! - refresh: fired whenever value or bounds change (presentation re-render),
//! - commit: fired only when `increment`/`decrement` actually move the value.
//!
//! `set_value` never produces a commit; it is the programmatic path.

pub const DEFAULT_VALUE: i64 = 0;
pub const DEFAULT_MIN_VALUE: i64 = 0;
pub const DEFAULT_MAX_VALUE: i64 = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
    Increment,
    Decrement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CounterState {
    pub value: i64,
    pub min_value: i64,
    pub max_value: i64,
    pub can_increment: bool,
    pub can_decrement: bool,
}

/// A value change committed by a bounded step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commit {
    pub previous: i64,
    pub value: i64,
    pub step: Step,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type RefreshListener = Box<dyn FnMut(&CounterState)>;
type CommitListener = Box<dyn FnMut(&Commit)>;

pub struct BoundedCounter {
    value: i64,
    min_value: i64,
    max_value: i64,
    next_listener: u64,
    refresh_listeners: Vec<(ListenerId, RefreshListener)>,
    commit_listeners: Vec<(ListenerId, CommitListener)>,
}

impl BoundedCounter {
    pub fn new() -> Self {
        Self::with_bounds(DEFAULT_VALUE, DEFAULT_MIN_VALUE, DEFAULT_MAX_VALUE)
    }

    /// Bounds are applied first; `value` is clamped into them.
    pub fn with_bounds(value: i64, min_value: i64, max_value: i64) -> Self {
        Self {
            value: clamp(value, min_value, max_value),
            min_value,
            max_value,
            next_listener: 0,
            refresh_listeners: Vec::new(),
            commit_listeners: Vec::new(),
        }
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn min_value(&self) -> i64 {
        self.min_value
    }

    pub fn max_value(&self) -> i64 {
        self.max_value
    }

    pub fn can_increment(&self) -> bool {
        self.value < self.max_value
    }

    pub fn can_decrement(&self) -> bool {
        self.value > self.min_value
    }

    pub fn state(&self) -> CounterState {
        CounterState {
            value: self.value,
            min_value: self.min_value,
            max_value: self.max_value,
            can_increment: self.can_increment(),
            can_decrement: self.can_decrement(),
        }
    }

    pub fn set_value(&mut self, value: i64) {
        let before = self.state();
        self.store(value);
        self.notify_refresh(before);
    }

    pub fn set_min_value(&mut self, min_value: i64) {
        let before = self.state();
        self.min_value = min_value;
        if self.value < min_value {
            self.store(min_value);
        }
        self.notify_refresh(before);
    }

    pub fn set_max_value(&mut self, max_value: i64) {
        let before = self.state();
        self.max_value = max_value;
        if self.value > max_value {
            self.store(max_value);
        }
        self.notify_refresh(before);
    }

    pub fn increment(&mut self) -> Option<Commit> {
        let next = self.value.checked_add(1)?;
        if next > self.max_value {
            return None;
        }
        Some(self.commit(next, Step::Increment))
    }

    pub fn decrement(&mut self) -> Option<Commit> {
        let next = self.value.checked_sub(1)?;
        if next < self.min_value {
            return None;
        }
        Some(self.commit(next, Step::Decrement))
    }

    pub fn step(&mut self, step: Step) -> Option<Commit> {
        match step {
            Step::Increment => self.increment(),
            Step::Decrement => self.decrement(),
        }
    }

    pub fn on_refresh(&mut self, listener: impl FnMut(&CounterState) + 'static) -> ListenerId {
        let id = self.next_id();
        self.refresh_listeners.push((id, Box::new(listener)));
        id
    }

    pub fn on_commit(&mut self, listener: impl FnMut(&Commit) + 'static) -> ListenerId {
        let id = self.next_id();
        self.commit_listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if no listener with that id was registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.refresh_listeners.len() + self.commit_listeners.len();
        self.refresh_listeners.retain(|(lid, _)| *lid != id);
        self.commit_listeners.retain(|(lid, _)| *lid != id);
        before != self.refresh_listeners.len() + self.commit_listeners.len()
    }

    fn next_id(&mut self) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener = self.next_listener.wrapping_add(1);
        id
    }

    fn store(&mut self, value: i64) {
        self.value = clamp(value, self.min_value, self.max_value);
    }

    fn commit(&mut self, next: i64, step: Step) -> Commit {
        let before = self.state();
        let previous = self.value;
        self.store(next);
        self.notify_refresh(before);

        let commit = Commit {
            previous,
            value: self.value,
            step,
        };
        for (_, listener) in self.commit_listeners.iter_mut() {
            listener(&commit);
        }
        commit
    }

    fn notify_refresh(&mut self, before: CounterState) {
        let state = self.state();
        if state == before {
            return;
        }
        for (_, listener) in self.refresh_listeners.iter_mut() {
            listener(&state);
        }
    }
}

impl Default for BoundedCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BoundedCounter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundedCounter")
            .field("value", &self.value)
            .field("min_value", &self.min_value)
            .field("max_value", &self.max_value)
            .field("refresh_listeners", &self.refresh_listeners.len())
            .field("commit_listeners", &self.commit_listeners.len())
            .finish()
    }
}

/// Lower bound wins when `min > max`, so the result is always `min` then.
pub fn clamp(value: i64, min_value: i64, max_value: i64) -> i64 {
    value.min(max_value).max(min_value)
}

#[cfg(test)]
#[path = "../../tests/unit/models/bounded_counter.rs"]
mod tests;
