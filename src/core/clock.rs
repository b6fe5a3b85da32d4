use std::time::Instant;

/// Tick clock - yields the time step between render loop iterations
#[derive(Debug, Default)]
pub struct Clock {
    last_tick: Option<Instant>,
}

impl Clock {
    pub fn new() -> Self {
        Self { last_tick: None }
    }

    /// Seconds since the previous tick; the first tick yields 0.0
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = self
            .last_tick
            .map(|last| now.duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        delta
    }

    /// Forget the previous tick so the next one yields 0.0
    pub fn reset(&mut self) {
        self.last_tick = None;
    }
}
