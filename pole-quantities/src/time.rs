use chrono::TimeDelta;

quantity!(Hours, "h", 1);

impl From<TimeDelta> for Hours {
    fn from(time_delta: TimeDelta) -> Self {
        Self(time_delta.as_seconds_f64() / 3600.0)
    }
}

impl Hours {
    /// Whole-second time delta, truncated like the host clock.
    #[expect(clippy::cast_possible_truncation)]
    pub fn to_time_delta(self) -> TimeDelta {
        TimeDelta::seconds((self.0 * 3600.0) as i64)
    }
}
