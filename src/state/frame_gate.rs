use std::cell::Cell;

/// Single-flight flag in front of `requestAnimationFrame`.
///
/// Scroll and resize fire many times per frame; only the first event after a
/// frame ran gets to schedule the next one.
#[derive(Default, Debug)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    /// `true` when the caller should request a frame.
    pub fn try_schedule(&self) -> bool {
        !self.pending.replace(true)
    }

    /// Called at the start of the frame callback, or when scheduling failed.
    pub fn complete(&self) {
        self.pending.set(false);
    }

    /// Runs `request` if no frame is pending. A failed request reopens the
    /// gate so the next event can try again.
    pub fn request<E>(&self, request: impl FnOnce() -> Result<i32, E>) -> Option<i32> {
        if !self.try_schedule() {
            return None;
        }
        match request() {
            Ok(id) => Some(id),
            Err(_) => {
                self.complete();
                None
            }
        }
    }
}

#[cfg(test)]
impl FrameGate {
    fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_schedules_once() {
        let gate = FrameGate::default();
        assert!(gate.try_schedule());
        assert!(!gate.try_schedule());
        assert!(!gate.try_schedule());
        assert!(gate.is_pending());
    }

    #[test]
    fn completing_reopens_the_gate() {
        let gate = FrameGate::default();
        assert!(gate.try_schedule());
        gate.complete();
        assert!(!gate.is_pending());
        assert!(gate.try_schedule());
    }

    #[test]
    fn request_runs_once_per_frame() {
        let gate = FrameGate::default();
        let calls = Cell::new(0);
        let req = || {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(7)
        };
        assert_eq!(gate.request(req), Some(7));
        assert_eq!(gate.request(req), None);
        assert_eq!(calls.get(), 1);
        gate.complete();
        assert_eq!(gate.request(req), Some(7));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn failed_request_reopens_the_gate() {
        let gate = FrameGate::default();
        assert_eq!(gate.request(|| Err("no frame")), None);
        assert!(!gate.is_pending());
        assert_eq!(gate.request(|| Ok::<_, ()>(1)), Some(1));
    }
}
