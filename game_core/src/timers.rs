//! Cooperative timer queue.
//!
//! The host advances the queue with wall-clock deltas; due tasks are handed back
//! one at a time in due order so the session runs them serially.

/// Every callback the session ever schedules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Per-frame update of all entities
    Frame,
    /// One step of the upward velocity ramp
    ThrustUp,
    /// One step of the downward velocity ramp
    ThrustDown,
    /// End of the immortality window
    BecomeMortal,
    /// Visibility toggle while immortal
    Blink,
    /// Clear the centre banner
    ClearBanner,
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    task: Task,
    due: f64,
    interval: Option<f64>,
    order: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Timers {
    now: f64,
    pending: Vec<Timer>,
    next_order: u64,
}

impl Timers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current clock time in seconds
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Run `task` once after `delay` seconds, replacing any pending schedule
    pub fn schedule_once(&mut self, task: Task, delay: f32) {
        self.insert(task, delay as f64, None);
    }

    /// Run `task` every `interval` seconds, replacing any pending schedule
    pub fn schedule_interval(&mut self, task: Task, interval: f32) {
        assert!(interval > 0.0, "interval must be positive: {interval}");
        self.insert(task, interval as f64, Some(interval as f64));
    }

    pub fn unschedule(&mut self, task: Task) {
        self.pending.retain(|timer| timer.task != task);
    }

    pub fn is_scheduled(&self, task: Task) -> bool {
        self.pending.iter().any(|timer| timer.task == task)
    }

    /// Cancel everything
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop the earliest task due at or before `until`, moving the clock to its due time.
    /// Interval tasks are re-armed before being returned.
    pub fn pop_due(&mut self, until: f64) -> Option<Task> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.due <= until)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.order.cmp(&b.order)))
            .map(|(index, _)| index)?;

        let timer = self.pending[index];
        self.now = self.now.max(timer.due);

        match timer.interval {
            Some(interval) => {
                let order = self.bump_order();
                let slot = &mut self.pending[index];
                slot.due += interval;
                slot.order = order;
            }
            None => {
                self.pending.swap_remove(index);
            }
        }
        Some(timer.task)
    }

    /// Move the clock forward once all due tasks have run
    pub fn settle(&mut self, until: f64) {
        self.now = self.now.max(until);
    }

    fn insert(&mut self, task: Task, delay: f64, interval: Option<f64>) {
        self.unschedule(task);
        let order = self.bump_order();
        self.pending.push(Timer {
            task,
            due: self.now + delay,
            interval,
            order,
        });
    }

    fn bump_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(timers: &mut Timers, until: f64) -> Vec<Task> {
        let mut fired = Vec::new();
        while let Some(task) = timers.pop_due(until) {
            fired.push(task);
        }
        timers.settle(until);
        fired
    }

    #[test]
    fn test_once_fires_once() {
        let mut timers = Timers::new();
        timers.schedule_once(Task::BecomeMortal, 3.0);

        assert!(drain(&mut timers, 2.9).is_empty());
        assert_eq!(drain(&mut timers, 3.1), vec![Task::BecomeMortal]);
        assert!(drain(&mut timers, 10.0).is_empty());
        assert!(!timers.is_scheduled(Task::BecomeMortal));
    }

    #[test]
    fn test_interval_repeats() {
        let mut timers = Timers::new();
        timers.schedule_interval(Task::Blink, 0.1);

        let fired = drain(&mut timers, 0.55);
        assert_eq!(fired.len(), 5);
        assert!(timers.is_scheduled(Task::Blink));
    }

    #[test]
    fn test_due_order_with_ties_in_schedule_order() {
        let mut timers = Timers::new();
        timers.schedule_once(Task::ClearBanner, 0.5);
        timers.schedule_once(Task::BecomeMortal, 0.2);
        timers.schedule_once(Task::ThrustDown, 0.5);

        assert_eq!(
            drain(&mut timers, 1.0),
            vec![Task::BecomeMortal, Task::ClearBanner, Task::ThrustDown]
        );
    }

    #[test]
    fn test_clock_moves_to_due_time() {
        let mut timers = Timers::new();
        timers.schedule_once(Task::ClearBanner, 0.25);
        assert_eq!(timers.pop_due(1.0), Some(Task::ClearBanner));
        assert_eq!(timers.now(), 0.25);
        timers.settle(1.0);
        assert_eq!(timers.now(), 1.0);
    }

    #[test]
    fn test_rescheduling_replaces() {
        let mut timers = Timers::new();
        timers.schedule_interval(Task::ThrustUp, 0.1);
        timers.schedule_interval(Task::ThrustUp, 0.1);
        assert_eq!(timers.len(), 1);
    }

    #[test]
    fn test_unschedule_cancels() {
        let mut timers = Timers::new();
        timers.schedule_interval(Task::ThrustUp, 0.1);
        timers.schedule_interval(Task::Frame, 0.1);
        timers.unschedule(Task::ThrustUp);

        assert_eq!(drain(&mut timers, 0.15), vec![Task::Frame]);
    }

    #[test]
    fn test_clear_cancels_everything() {
        let mut timers = Timers::new();
        timers.schedule_interval(Task::Frame, 0.1);
        timers.schedule_once(Task::BecomeMortal, 3.0);
        timers.clear();

        assert!(timers.is_empty());
        assert!(drain(&mut timers, 100.0).is_empty());
    }

    #[test]
    #[should_panic(expected = "interval")]
    fn test_zero_interval_panics() {
        Timers::new().schedule_interval(Task::Frame, 0.0);
    }
}
