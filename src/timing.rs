//! Parsing of `time` command output.
//!
//! The experiment scripts wrap each tool run in the shell's `time` builtin,
//! which leaves lines like `user\t1m2.345s` behind. This module turns those
//! into durations and renders the CPU time (`user + sys`) as `H:MM:SS`.

use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;

lazy_static! {
    // `<m>m<s>s` or `<h>h<m>m<s>s`
    static ref DURATION: Regex =
        Regex::new(r"^(?:(?P<h>\d+)h)?(?P<m>\d+)m(?P<s>\d+)(?:\.(?P<frac>\d+))?s$").unwrap();
}

/// Why a `time` capture could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingError {
    /// The raw text that was rejected
    pub fragment: String,
    pub reason: String,
}

impl TimingError {
    fn new(fragment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }
}

/// Durations reported by one `time` invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionTimes {
    pub real: Option<Duration>,
    pub user: Duration,
    pub sys: Duration,
}

impl ExecutionTimes {
    /// Parse the text of a `time` capture.
    ///
    /// Only lines whose first tab-separated field is `real`, `user` or `sys`
    /// are considered; anything else is ignored. `user + sys` must fit in
    /// a `Duration`.
    pub fn parse(content: &str) -> Result<Self, TimingError> {
        let mut real = None;
        let mut user = None;
        let mut sys = None;

        for line in content.lines() {
            let line = line.trim();
            let Some((label, value)) = line.split_once('\t') else {
                continue;
            };

            let slot = match label.trim() {
                "real" => &mut real,
                "user" => &mut user,
                "sys" => &mut sys,
                _ => continue,
            };

            let duration = parse_duration(value.trim())
                .ok_or_else(|| TimingError::new(line, format!("malformed {} duration", label.trim())))?;
            *slot = Some(duration);
        }

        let user = user.ok_or_else(|| TimingError::new(excerpt(content), "missing 'user' line"))?;
        let sys = sys.ok_or_else(|| TimingError::new(excerpt(content), "missing 'sys' line"))?;

        if user.checked_add(sys).is_none() {
            return Err(TimingError::new(excerpt(content), "user + sys time overflows"));
        }

        Ok(Self { real, user, sys })
    }

    /// CPU time spent by the tool, saturating at `Duration::MAX`.
    pub fn cpu(&self) -> Duration {
        self.user.saturating_add(self.sys)
    }
}

/// Parse a `time` duration such as `0m1.500s` or `1h2m3s`.
///
/// Fractional seconds are kept to microsecond precision; extra digits are
/// dropped.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let caps = DURATION.captures(s)?;

    let hours: u64 = match caps.name("h") {
        Some(h) => h.as_str().parse().ok()?,
        None => 0,
    };
    let minutes: u64 = caps["m"].parse().ok()?;
    let seconds: u64 = caps["s"].parse().ok()?;

    let micros = match caps.name("frac") {
        Some(frac) => {
            let digits: String = frac.as_str().chars().chain(std::iter::repeat('0')).take(6).collect();
            digits.parse::<u32>().ok()?
        }
        None => 0,
    };

    let whole = hours.checked_mul(3600)?.checked_add(minutes.checked_mul(60)?)?.checked_add(seconds)?;
    Some(Duration::new(whole, micros * 1000))
}

/// Render a duration as `H:MM:SS`, with `.ffffff` appended when there
/// are fractional seconds. Hours are not wrapped into days.
pub fn format_duration(d: Duration) -> String {
    let total = d.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    let micros = d.subsec_micros();

    if micros == 0 {
        format!("{}:{:02}:{:02}", hours, minutes, seconds)
    } else {
        format!("{}:{:02}:{:02}.{:06}", hours, minutes, seconds, micros)
    }
}

fn excerpt(content: &str) -> String {
    const MAX: usize = 80;
    let trimmed = content.trim();
    match trimmed.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &trimmed[..idx]),
        None => trimmed.to_string(),
    }
}
