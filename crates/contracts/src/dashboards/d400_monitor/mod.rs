//! Live monitoring metrics served by `GET /monitor/:metric`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MonitorMetric {
    OnlineSubscribers,
    OfflineSubscribers,
    Bandwidth,
    OpenTickets,
    PendingJobOrders,
}

impl MonitorMetric {
    pub fn all() -> [MonitorMetric; 5] {
        [
            MonitorMetric::OnlineSubscribers,
            MonitorMetric::OfflineSubscribers,
            MonitorMetric::Bandwidth,
            MonitorMetric::OpenTickets,
            MonitorMetric::PendingJobOrders,
        ]
    }

    /// Path segment after `/monitor/`.
    pub fn path(&self) -> &'static str {
        match self {
            MonitorMetric::OnlineSubscribers => "online-subscribers",
            MonitorMetric::OfflineSubscribers => "offline-subscribers",
            MonitorMetric::Bandwidth => "bandwidth",
            MonitorMetric::OpenTickets => "open-tickets",
            MonitorMetric::PendingJobOrders => "pending-job-orders",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MonitorMetric::OnlineSubscribers => "Online Subscribers",
            MonitorMetric::OfflineSubscribers => "Offline Subscribers",
            MonitorMetric::Bandwidth => "Bandwidth",
            MonitorMetric::OpenTickets => "Open Tickets",
            MonitorMetric::PendingJobOrders => "Pending Job Orders",
        }
    }

    /// Whether a rising value is good news (drives the trend colour).
    pub fn higher_is_better(&self) -> bool {
        matches!(
            self,
            MonitorMetric::OnlineSubscribers | MonitorMetric::Bandwidth
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    pub timestamp: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorSnapshot {
    pub value: f64,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub series: Vec<MetricPoint>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl MonitorSnapshot {
    /// Direction of the last two points of the series.
    pub fn trend(&self) -> Trend {
        let n = self.series.len();
        if n < 2 {
            return Trend::Flat;
        }
        let (prev, last) = (self.series[n - 2].value, self.series[n - 1].value);
        if (last - prev).abs() < f64::EPSILON {
            Trend::Flat
        } else if last > prev {
            Trend::Up
        } else {
            Trend::Down
        }
    }

    pub fn formatted_value(&self) -> String {
        let value = if self.value.fract() == 0.0 {
            format!("{:.0}", self.value)
        } else {
            format!("{:.2}", self.value)
        };
        match self.unit.as_deref().map(str::trim) {
            Some(unit) if !unit.is_empty() => format!("{} {}", value, unit),
            _ => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(value: f64) -> MetricPoint {
        MetricPoint {
            timestamp: "2026-10-19T08:00:00Z".into(),
            value,
        }
    }

    #[test]
    fn test_trend() {
        let mut snap = MonitorSnapshot {
            value: 10.0,
            unit: None,
            series: vec![point(4.0)],
            updated_at: None,
        };
        assert_eq!(snap.trend(), Trend::Flat);
        snap.series.push(point(6.0));
        assert_eq!(snap.trend(), Trend::Up);
        snap.series.push(point(1.0));
        assert_eq!(snap.trend(), Trend::Down);
    }

    #[test]
    fn test_formatted_value() {
        let snap = MonitorSnapshot {
            value: 812.456,
            unit: Some("Mbps".into()),
            series: vec![],
            updated_at: None,
        };
        assert_eq!(snap.formatted_value(), "812.46 Mbps");
        let snap = MonitorSnapshot {
            value: 1520.0,
            unit: None,
            series: vec![],
            updated_at: None,
        };
        assert_eq!(snap.formatted_value(), "1520");
    }

    #[test]
    fn test_paths_unique() {
        let mut paths: Vec<&str> = MonitorMetric::all().iter().map(|m| m.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), MonitorMetric::all().len());
    }
}
