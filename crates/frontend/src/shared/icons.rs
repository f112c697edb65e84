use leptos::prelude::*;

/// Stroke paths (24x24 viewBox) for every icon the portal uses.
fn icon_paths(name: &str) -> &'static [&'static str] {
    match name {
        "plus" => &["M12 5v14", "M5 12h14"],
        "refresh" => &["M21 12a9 9 0 1 1-3-6.7L21 8", "M21 3v5h-5"],
        "delete" => &["M3 6h18", "M8 6V4h8v2", "M19 6l-1 14H6L5 6"],
        "edit" => &["M12 20h9", "M16.5 3.5a2.1 2.1 0 0 1 3 3L7 19l-4 1 1-4Z"],
        "save" => &["M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z", "M17 21v-8H7v8", "M7 3v5h8"],
        "cancel" | "x" => &["M18 6 6 18", "M6 6l12 12"],
        "bell" => &["M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9", "M10.3 21a1.9 1.9 0 0 0 3.4 0"],
        "search" => &["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "M21 21l-4.3-4.3"],
        "chevrons-left" => &["M11 17l-5-5 5-5", "M18 17l-5-5 5-5"],
        "chevron-left" => &["M15 18l-6-6 6-6"],
        "chevron-right" => &["M9 18l6-6-6-6"],
        "chevrons-right" => &["M13 17l5-5-5-5", "M6 17l5-5-5-5"],
        "chevron-down" => &["M6 9l6 6 6-6"],
        "sun" => &["M12 17a5 5 0 1 0 0-10 5 5 0 0 0 0 10z", "M12 1v2", "M12 21v2", "M4.2 4.2l1.4 1.4", "M18.4 18.4l1.4 1.4", "M1 12h2", "M21 12h2"],
        "moon" => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"],
        "palette" => &["M12 22a10 10 0 1 1 10-10c0 2.8-2.2 4-4 4h-2a2 2 0 0 0-1 3.7A1.7 1.7 0 0 1 12 22z"],
        "grip" => &["M9 5h.01", "M9 12h.01", "M9 19h.01", "M15 5h.01", "M15 12h.01", "M15 19h.01"],
        "key" => &["M21 2l-2 2", "M15.5 7.5l3 3L22 7l-3-3", "M11.4 12.6a5.5 5.5 0 1 1-7.8 7.8 5.5 5.5 0 0 1 7.8-7.8z", "M11.4 12.6L19 5"],
        "receipt" => &["M4 2v20l3-2 3 2 2-2 2 2 3-2 3 2V2l-3 2-3-2-2 2-2-2-3 2z", "M8 8h8", "M8 12h8"],
        "package" => &["M21 16V8l-9-5-9 5v8l9 5z", "M3.3 7L12 12l8.7-5", "M12 22V12"],
        "mail" => &["M4 4h16v16H4z", "M22 6l-10 7L2 6"],
        "message" => &["M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z"],
        "map-pin" => &["M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z", "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z"],
        "network" => &["M9 2h6v6H9z", "M2 16h6v6H2z", "M16 16h6v6h-6z", "M5 16v-4h14v4", "M12 12V8"],
        "list" => &["M8 6h13", "M8 12h13", "M8 18h13", "M3 6h.01", "M3 12h.01", "M3 18h.01"],
        "history" => &["M3 12a9 9 0 1 0 3-6.7L3 8", "M3 3v5h5", "M12 7v5l4 2"],
        "user" => &["M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2", "M12 11a4 4 0 1 0 0-8 4 4 0 0 0 0 8z"],
        "activity" => &["M22 12h-4l-3 9L9 3l-3 9H2"],
        "trend-up" => &["M23 6l-9.5 9.5-5-5L1 18", "M17 6h6v6"],
        "trend-down" => &["M23 18l-9.5-9.5-5 5L1 6", "M17 18h6v-6"],
        "panel-left-close" => &["M3 3h18v18H3z", "M9 3v18", "M16 15l-3-3 3-3"],
        "panel-left-open" => &["M3 3h18v18H3z", "M9 3v18", "M14 9l3 3-3 3"],
        _ => &["M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z", "M12 8v4l3 3"],
    }
}

pub fn icon(name: &str) -> AnyView {
    let paths = icon_paths(name);
    view! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">
            {paths.iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
    .into_any()
}
