use crate::camera::CameraState;

/// Frame counters consumed by the compute pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCounters {
    /// Ticks since startup, never reset
    pub total_frame_count: u64,
    /// Ticks since the accumulation buffer was last cleared
    pub frames_since_last_move: u32,
}

impl FrameCounters {
    fn advance(&mut self, reset: bool) {
        self.total_frame_count += 1;
        self.frames_since_last_move = if reset {
            0
        } else {
            self.frames_since_last_move.saturating_add(1)
        };
    }
}

/// Outcome of one tick of the gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    /// Clear the accumulation buffer before this tick's dispatch
    pub reset: bool,
    pub counters: FrameCounters,
}

impl TickReport {
    /// Samples blended into the image after this tick's dispatch
    pub fn sample_count(&self) -> u32 {
        self.counters.frames_since_last_move.saturating_add(1)
    }
}

/// Decides when accumulated samples are stale.
///
/// Holds the previous tick's camera and the frame counters. Call
/// [`advance`](Self::advance) exactly once per tick, after the controller
/// has run.
#[derive(Debug, Clone, Default)]
pub struct AccumulationGate {
    previous: Option<CameraState>,
    counters: FrameCounters,
    pending_reset: bool,
}

impl AccumulationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when `current` differs from the retained snapshot in any field.
    /// Only then is the snapshot replaced.
    pub fn should_reset(&mut self, current: &CameraState) -> bool {
        match &self.previous {
            Some(previous) if previous.same_as(current) => false,
            _ => {
                self.previous = Some(*current);
                true
            }
        }
    }

    /// Run the reset decision and update the frame counters for this tick
    pub fn advance(&mut self, current: &CameraState) -> TickReport {
        let moved = self.should_reset(current);
        let reset = moved || std::mem::take(&mut self.pending_reset);

        self.counters.advance(reset);
        if reset {
            log::debug!(
                "Accumulation reset at frame {} ({})",
                self.counters.total_frame_count,
                if moved { "camera moved" } else { "invalidated" }
            );
        }

        TickReport {
            reset,
            counters: self.counters,
        }
    }

    /// Force a reset on the next tick without touching the camera snapshot,
    /// e.g. after the accumulation buffer is reallocated
    pub fn invalidate(&mut self) {
        self.pending_reset = true;
    }

    pub fn counters(&self) -> &FrameCounters {
        &self.counters
    }

    pub fn previous(&self) -> Option<&CameraState> {
        self.previous.as_ref()
    }
}
