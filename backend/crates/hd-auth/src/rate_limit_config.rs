/// Login throttling settings
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum login attempts per username per window
    pub max_attempts: u32,
    /// Window duration in seconds
    pub window_secs: u64,
}

