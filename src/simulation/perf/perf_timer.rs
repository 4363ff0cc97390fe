/// Stopwatch behind the session's perf metrics.
///
/// A generation on a large board takes well under a millisecond, so the
/// browser side reads `performance.now()` and only falls back to the
/// millisecond `Date.now()` when no `Performance` object exists.
#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

#[cfg(target_arch = "wasm32")]
fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

impl PerfTimer {
    /// `None` while perf metrics are off, so a disabled session pays nothing
    pub(crate) fn start_if(enabled: bool) -> Option<Self> {
        if !enabled {
            return None;
        }
        #[cfg(target_arch = "wasm32")]
        {
            Some(PerfTimer { start_ms: now_ms() })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Some(PerfTimer { start: std::time::Instant::now() })
        }
    }

    /// Run `f`, timing it only when `enabled`.
    pub(crate) fn measure<T>(enabled: bool, f: impl FnOnce() -> T) -> (T, Option<f64>) {
        let timer = Self::start_if(enabled);
        let value = f();
        (value, timer.map(|t| t.elapsed_ms()))
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            now_ms() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}
