use crate::shared::icons::icon;
use contracts::dashboards::d400_monitor::{MonitorMetric, MonitorSnapshot, Trend};
use leptos::prelude::*;

/// CSS modifier for a trend, taking into account whether growth is good.
pub fn trend_class(metric: MonitorMetric, trend: Trend) -> &'static str {
    match (trend, metric.higher_is_better()) {
        (Trend::Flat, _) => "metric-card__trend metric-card__trend--flat",
        (Trend::Up, true) | (Trend::Down, false) => "metric-card__trend metric-card__trend--good",
        _ => "metric-card__trend metric-card__trend--bad",
    }
}

#[component]
pub fn MetricCard(
    metric: MonitorMetric,
    /// Latest snapshot (None = not loaded yet)
    #[prop(into)]
    snapshot: Signal<Option<MonitorSnapshot>>,
    /// Error of the last poll, shown under the value
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    let value = move || {
        snapshot
            .get()
            .map(|s| s.formatted_value())
            .unwrap_or_else(|| "-".to_string())
    };

    let trend_view = move || {
        snapshot.get().map(|s| {
            let trend = s.trend();
            let icon_name = match trend {
                Trend::Up => "trend-up",
                Trend::Down => "trend-down",
                Trend::Flat => "activity",
            };
            view! { <span class=trend_class(metric, trend)>{icon(icon_name)}</span> }
        })
    };

    let updated = move || {
        snapshot
            .get()
            .and_then(|s| s.updated_at)
            .map(|at| format!("Updated {}", crate::shared::date_utils::format_datetime(&at)))
    };

    view! {
        <div class=move || if error.get().is_some() { "metric-card metric-card--error" } else { "metric-card" }>
            <div class="metric-card__icon">{icon("activity")}</div>
            <div class="metric-card__content">
                <div class="metric-card__label">{metric.title()}</div>
                <div class="metric-card__value">
                    {value}
                    {trend_view}
                </div>
                <div class="metric-card__subtitle">
                    {move || error.get().or_else(updated).unwrap_or_default()}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_class_respects_direction() {
        let good_up = MonitorMetric::all()
            .into_iter()
            .find(|m| m.higher_is_better())
            .unwrap();
        assert!(trend_class(good_up, Trend::Up).ends_with("--good"));
        assert!(trend_class(good_up, Trend::Down).ends_with("--bad"));
        assert!(trend_class(good_up, Trend::Flat).ends_with("--flat"));
    }
}
