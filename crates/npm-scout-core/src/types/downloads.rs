//! Download statistics types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fixed download-statistics window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DownloadPeriod {
    LastDay,
    LastWeek,
    #[default]
    LastMonth,
    LastYear,
}

impl DownloadPeriod {
    /// Wire name used in the downloads API path
    pub fn as_str(&self) -> &'static str {
        match self {
            DownloadPeriod::LastDay => "last-day",
            DownloadPeriod::LastWeek => "last-week",
            DownloadPeriod::LastMonth => "last-month",
            DownloadPeriod::LastYear => "last-year",
        }
    }
}

impl fmt::Display for DownloadPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Downloads on a single day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyDownloads {
    pub day: String,
    pub downloads: u64,
}

/// Download totals for one package over one period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadStats {
    pub package: String,
    /// Human-readable window, `"{start} to {end}"`
    pub period: String,
    pub total: u64,
    /// Daily series in source order
    pub daily: Vec<DailyDownloads>,
}

impl DownloadStats {
    /// Build stats from a daily series; the total is the exact sum
    pub fn from_daily(package: String, start: &str, end: &str, daily: Vec<DailyDownloads>) -> Self {
        let total = daily.iter().map(|d| d.downloads).sum();
        Self {
            package,
            period: format!("{} to {}", start, end),
            total,
            daily,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_wire_names() {
        assert_eq!(DownloadPeriod::LastDay.as_str(), "last-day");
        assert_eq!(DownloadPeriod::LastYear.to_string(), "last-year");
        assert_eq!(DownloadPeriod::default(), DownloadPeriod::LastMonth);
    }

    #[test]
    fn test_period_serde_uses_kebab_case() {
        let json = serde_json::to_string(&DownloadPeriod::LastWeek).unwrap();
        assert_eq!(json, "\"last-week\"");
        let parsed: DownloadPeriod = serde_json::from_str("\"last-year\"").unwrap();
        assert_eq!(parsed, DownloadPeriod::LastYear);
    }

    #[test]
    fn test_stats_total_is_sum_of_daily() {
        let stats = DownloadStats::from_daily(
            "express".to_string(),
            "2026-01-01",
            "2026-01-31",
            vec![
                DailyDownloads { day: "2026-01-01".to_string(), downloads: 100_000 },
                DailyDownloads { day: "2026-01-02".to_string(), downloads: 120_000 },
            ],
        );
        assert_eq!(stats.total, 220_000);
        assert_eq!(stats.period, "2026-01-01 to 2026-01-31");
        assert_eq!(stats.daily[0].day, "2026-01-01");
    }
}
