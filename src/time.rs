use std::time::{Duration, Instant};

/// Time elapsed since the previous frame. Zero on the first frame.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeltaTime(pub Duration);

impl DeltaTime {
    pub fn seconds(&self) -> f32 {
        self.0.as_secs_f32()
    }
}

/// Time elapsed since the render loop started.
#[derive(Debug, Default, Clone, Copy)]
pub struct Uptime(pub Duration);

impl Uptime {
    pub fn seconds(&self) -> f32 {
        self.0.as_secs_f32()
    }
}

pub struct Stopwatch {
    start: Option<Instant>,
    elapsed: Duration,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self {
            start: None,
            elapsed: Duration::ZERO,
        }
    }

    pub fn start_new() -> Self {
        let mut sw = Self::new();
        sw.start();

        sw
    }

    pub fn start(&mut self) {
        self.start = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.elapsed = self.elapsed();
        self.start = None;
    }

    /// Returns the time elapsed so far and starts measuring again from now.
    pub fn restart(&mut self) -> Duration {
        self.elapsed = self.elapsed();
        self.start = Some(Instant::now());
        self.elapsed
    }

    pub fn elapsed(&self) -> Duration {
        match self.start {
            Some(start) => start.elapsed(),
            None => self.elapsed,
        }
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

/// Produces the per-frame [`DeltaTime`] and [`Uptime`] pair.
pub struct FrameClock {
    frame: Stopwatch,
    uptime: Stopwatch,
    first_tick: bool,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            frame: Stopwatch::start_new(),
            uptime: Stopwatch::start_new(),
            first_tick: true,
        }
    }

    /// Advances the clock by one frame.
    pub fn tick(&mut self) -> (DeltaTime, Uptime) {
        let delta = self.frame.restart();
        let delta = if self.first_tick {
            self.first_tick = false;
            Duration::ZERO
        } else {
            delta
        };

        (DeltaTime(delta), Uptime(self.uptime.elapsed()))
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
