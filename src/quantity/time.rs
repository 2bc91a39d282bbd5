use chrono::TimeDelta;

quantity!(Hours, "h");

impl From<TimeDelta> for Hours {
    fn from(time_delta: TimeDelta) -> Self {
        Self(time_delta.as_seconds_f64() / 3600.0)
    }
}

impl From<Hours> for TimeDelta {
    fn from(hours: Hours) -> Self {
        #[expect(clippy::cast_possible_truncation)]
        let nanoseconds = (hours.0 * 3_600_000_000_000.0).round() as i64;
        Self::nanoseconds(nanoseconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_time_delta() {
        assert_eq!(Hours::from(TimeDelta::minutes(90)), Hours(1.5));
    }

    #[test]
    fn into_time_delta() {
        assert_eq!(TimeDelta::from(Hours(0.5)), TimeDelta::minutes(30));
    }
}
