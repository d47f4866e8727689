pub const SITE_NAME: &str = "CyberShield";
pub const TAGLINE: &str = "Protecting your digital assets with cutting-edge cybersecurity solutions.";

/// How long stat counters take to count up from zero.
pub const COUNTER_DURATION_MS: u32 = 2_000;

/// Cadence of the testimonial carousel autoplay.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Simulated latency of the newsletter subscribe call.
pub const SUBSCRIBE_DELAY_MS: u32 = 1_000;

/// How long the subscribe success notice stays on screen.
pub const SUCCESS_NOTICE_MS: u32 = 5_000;
