//! Frame-driven ambience scheduling: decides how many rockets to send up
//! each tick. Replaces ad-hoc timer choreography with an accumulator the
//! host ticks once per frame.

/// How the launcher releases rockets.
#[derive(Debug, Clone)]
pub enum LaunchMode {
    /// Launch continuously at a fixed rate.
    Continuous,
    /// Launch in volleys.
    Volley,
}

#[derive(Debug, Clone)]
pub struct Launcher {
    /// Whether the launcher is actively scheduling.
    pub active: bool,
    pub mode: LaunchMode,
    /// Launches per second (Continuous mode).
    pub rate: f32,
    /// Rockets per volley (Volley mode).
    pub volley_count: u32,
    /// Seconds between volleys (0 = one-shot).
    pub volley_interval: f32,
    /// Internal accumulator for continuous launching.
    accumulator: f32,
    /// Internal timer for volley intervals.
    volley_timer: f32,
    /// Whether the first volley has fired (for one-shot volleys).
    volley_fired: bool,
}

impl Default for Launcher {
    fn default() -> Self {
        Self {
            active: true,
            mode: LaunchMode::Continuous,
            rate: 1.5,
            volley_count: 4,
            volley_interval: 0.0,
            accumulator: 0.0,
            volley_timer: 0.0,
            volley_fired: false,
        }
    }
}

impl Launcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: LaunchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_rate(mut self, rate: f32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_volley_count(mut self, count: u32) -> Self {
        self.volley_count = count;
        self
    }

    pub fn with_volley_interval(mut self, interval: f32) -> Self {
        self.volley_interval = interval;
        self
    }

    /// Advance the launcher by `dt` seconds. Returns the number of rockets
    /// to launch this frame.
    pub fn tick(&mut self, dt: f32) -> usize {
        if !self.active {
            return 0;
        }

        match self.mode {
            LaunchMode::Continuous => {
                self.accumulator += self.rate * dt;
                let count = self.accumulator as usize;
                self.accumulator -= count as f32;
                count
            }
            LaunchMode::Volley => {
                if self.volley_interval <= 0.0 {
                    // One-shot volley
                    if !self.volley_fired {
                        self.volley_fired = true;
                        self.volley_count as usize
                    } else {
                        0
                    }
                } else {
                    self.volley_timer += dt;
                    if self.volley_timer >= self.volley_interval {
                        self.volley_timer -= self.volley_interval;
                        self.volley_count as usize
                    } else {
                        0
                    }
                }
            }
        }
    }
}
