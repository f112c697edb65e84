//! Live monitoring dashboard.
//!
//! Every metric polls its own endpoint; a slow or failing metric never
//! blocks the others.

use super::api;
use crate::config::config;
use crate::shared::components::{MetricCard, PageHeader};
use crate::shared::mounted::MountGuard;
use crate::shared::polling::{effective_interval, spawn_poll};
use contracts::dashboards::d400_monitor::{MetricPoint, MonitorMetric, MonitorSnapshot};
use leptos::prelude::*;

const SPARK_WIDTH: f64 = 160.0;
const SPARK_HEIGHT: f64 = 40.0;

/// SVG polyline points for a series scaled into `width` x `height`.
pub fn sparkline_points(series: &[MetricPoint], width: f64, height: f64) -> String {
    if series.len() < 2 {
        return String::new();
    }
    let (min, max) = series
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });
    let span = if max - min > f64::EPSILON { max - min } else { 1.0 };
    let step = width / (series.len() - 1) as f64;
    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = i as f64 * step;
            let y = height - (p.value - min) / span * height;
            format!("{:.1},{:.1}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Clone, Copy)]
struct MetricSlot {
    metric: MonitorMetric,
    snapshot: RwSignal<Option<MonitorSnapshot>>,
    error: RwSignal<Option<String>>,
}

impl MetricSlot {
    fn new(metric: MonitorMetric) -> Self {
        Self {
            metric,
            snapshot: RwSignal::new(None),
            error: RwSignal::new(None),
        }
    }

    fn start(self, interval_ms: u32, guard: MountGuard) {
        let tick_guard = guard.clone();
        spawn_poll(interval_ms, guard, move || {
            let guard = tick_guard.clone();
            async move {
                let result = api::fetch_snapshot(self.metric).await;
                if !guard.is_mounted() {
                    return;
                }
                match result {
                    Ok(snapshot) => {
                        self.snapshot.set(Some(snapshot));
                        self.error.set(None);
                    }
                    // keep the last value visible next to the error
                    Err(e) => self.error.set(Some(e.to_string())),
                }
            }
        });
    }
}

#[component]
fn Sparkline(#[prop(into)] snapshot: Signal<Option<MonitorSnapshot>>) -> impl IntoView {
    let points = move || {
        snapshot.with(|s| {
            s.as_ref()
                .map(|s| sparkline_points(&s.series, SPARK_WIDTH, SPARK_HEIGHT))
                .unwrap_or_default()
        })
    };
    view! {
        <svg
            class="sparkline"
            viewBox=format!("0 0 {} {}", SPARK_WIDTH, SPARK_HEIGHT)
            preserveAspectRatio="none"
        >
            <polyline points=points fill="none" stroke="currentColor" stroke-width="1.5" />
        </svg>
    }
}

#[component]
pub fn MonitorDashboard() -> impl IntoView {
    let guard = MountGuard::new();
    let interval_ms = effective_interval(config().monitor_poll_ms);
    let slots: Vec<MetricSlot> = MonitorMetric::all().into_iter().map(MetricSlot::new).collect();
    for slot in &slots {
        slot.start(interval_ms, guard.clone());
    }
    leptos::logging::log!("monitor dashboard polling every {} ms", interval_ms);

    view! {
        <div class="page">
            <PageHeader
                title="Live Monitor"
                subtitle=format!("Refreshes every {} s", interval_ms / 1000)
            />

            <div class="metric-grid">
                {slots.into_iter().map(|slot| view! {
                    <div class="metric-grid__cell">
                        <MetricCard
                            metric=slot.metric
                            snapshot=slot.snapshot
                            error=slot.error
                        />
                        <Sparkline snapshot=slot.snapshot />
                    </div>
                }).collect_view()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<MetricPoint> {
        values
            .iter()
            .map(|v| MetricPoint {
                timestamp: String::new(),
                value: *v,
            })
            .collect()
    }

    #[test]
    fn test_sparkline_scales_into_box() {
        assert_eq!(
            sparkline_points(&series(&[0.0, 5.0, 10.0]), 100.0, 10.0),
            "0.0,10.0 50.0,5.0 100.0,0.0"
        );
    }

    #[test]
    fn test_sparkline_flat_and_short_series() {
        assert_eq!(sparkline_points(&series(&[3.0]), 100.0, 10.0), "");
        assert_eq!(
            sparkline_points(&series(&[2.0, 2.0]), 100.0, 10.0),
            "0.0,10.0 100.0,10.0"
        );
    }
}
