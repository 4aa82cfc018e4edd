use web_time::Instant;

/// Seconds since the engine started, frozen at zero while animation is off.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    start: Instant,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationClock {
    /// Start the clock now.
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    /// Start the clock at a given instant.
    #[must_use]
    pub fn starting_at(start: Instant) -> Self {
        Self { start }
    }

    /// Clock reading at `now`: zero when `animate` is off, otherwise the
    /// seconds elapsed since start.
    #[must_use]
    pub fn read(&self, now: Instant, animate: bool) -> f32 {
        if animate {
            now.saturating_duration_since(self.start).as_secs_f32()
        } else {
            0.0
        }
    }
}
