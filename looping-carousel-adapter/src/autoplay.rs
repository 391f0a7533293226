/// Deadline model of a recurring autoplay timer.
///
/// The adapter polls it with its clock. Suspension is a cancel/re-arm pair: [`Self::cancel`]
/// drops the pending deadline entirely and [`Self::arm`] always starts a full, fresh interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoplayTimer {
    interval_ms: u64,
    due_ms: Option<u64>,
}

impl AutoplayTimer {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            due_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Changes the interval. A pending deadline is left alone; re-arm to apply it.
    pub fn set_interval_ms(&mut self, interval_ms: u64) {
        self.interval_ms = interval_ms.max(1);
    }

    pub fn is_armed(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    pub fn arm(&mut self, now_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    /// Returns `true` when the timer fired.
    ///
    /// Fires at most once per call. If the adapter polled late enough to miss whole intervals,
    /// the missed ticks are dropped and the next deadline is a full interval from `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let next = due.saturating_add(self.interval_ms);
        self.due_ms = Some(if next > now_ms {
            next
        } else {
            now_ms.saturating_add(self.interval_ms)
        });
        true
    }
}
