//! Fixed-interval polling for screens that refresh in the background.

use crate::shared::mounted::MountGuard;
use gloo_timers::future::TimeoutFuture;
use std::future::Future;
use wasm_bindgen_futures::spawn_local;

const MIN_INTERVAL_MS: u32 = 1_000;

pub fn effective_interval(interval_ms: u32) -> u32 {
    interval_ms.max(MIN_INTERVAL_MS)
}

/// Run `tick` now and then every `interval_ms` until `guard` unmounts.
///
/// Each tick is awaited before the next sleep, so results never overlap;
/// every tick simply overwrites what the previous one stored.
pub fn spawn_poll<F, Fut>(interval_ms: u32, guard: MountGuard, mut tick: F)
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let interval = effective_interval(interval_ms);
    spawn_local(async move {
        while guard.is_mounted() {
            tick().await;
            TimeoutFuture::new(interval).await;
        }
        log::debug!("polling stopped ({} ms)", interval);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_interval() {
        assert_eq!(effective_interval(0), MIN_INTERVAL_MS);
        assert_eq!(effective_interval(30_000), 30_000);
    }
}
