use chrono::{DateTime, Days, Months, NaiveDate, SecondsFormat, Utc};
use serde_json::{json, Value};

/// How far back a window reaches when the caller gives no start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultSpan {
    Days(u64),
    Months(u32),
}

impl DefaultSpan {
    fn before(self, end: DateTime<Utc>) -> DateTime<Utc> {
        let start = match self {
            DefaultSpan::Days(days) => end.checked_sub_days(Days::new(days)),
            DefaultSpan::Months(months) => end.checked_sub_months(Months::new(months)),
        };
        start.unwrap_or(end)
    }
}

/// Reporting window sent upstream as `dateRange`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Bounds are `YYYY-MM-DD` at midnight UTC. A missing or malformed bound
    /// falls back to its default without failing the request.
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        span: DefaultSpan,
        now: DateTime<Utc>,
    ) -> Self {
        let default_start = span.before(now);

        Self {
            start: start.and_then(parse_day).unwrap_or(default_start),
            end: end.and_then(parse_day).unwrap_or(now),
        }
    }

    pub fn to_variables(&self) -> Value {
        json!({
            "dateRange": {
                "start": self.start.to_rfc3339_opts(SecondsFormat::Secs, true),
                "end": self.end.to_rfc3339_opts(SecondsFormat::Secs, true),
            }
        })
    }
}

fn parse_day(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 30, 0).unwrap()
    }

    #[test]
    fn defaults_to_thirty_days() {
        let window = DateWindow::resolve(None, None, DefaultSpan::Days(30), now());

        assert_eq!(window.end, now());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 9, 16, 12, 30, 0).unwrap());
    }

    #[test]
    fn three_month_span() {
        let window = DateWindow::resolve(None, None, DefaultSpan::Months(3), now());
        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 7, 16, 12, 30, 0).unwrap());
    }

    #[test]
    fn explicit_dates_are_midnight_utc() {
        let window = DateWindow::resolve(
            Some("2026-01-01"),
            Some("2026-03-31"),
            DefaultSpan::Days(30),
            now(),
        );

        assert_eq!(
            window.to_variables(),
            json!({
                "dateRange": {
                    "start": "2026-01-01T00:00:00Z",
                    "end": "2026-03-31T00:00:00Z"
                }
            })
        );
    }

    #[test]
    fn malformed_bound_falls_back_alone() {
        let window = DateWindow::resolve(
            Some("01/02/2026"),
            Some("2026-02-01"),
            DefaultSpan::Days(30),
            now(),
        );

        assert_eq!(window.start, Utc.with_ymd_and_hms(2026, 9, 16, 12, 30, 0).unwrap());
        assert_eq!(window.end, Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap());
    }
}
