use dioxus::prelude::*;

/// Re-arms a fixed-interval refresh of `resource` for the lifetime of the
/// calling component and cancels it on unmount. All dashboard widgets share
/// this one timer path instead of each rolling their own.
///
/// Deliberately dumb, matching the page's needs: no backoff, no dedup and no
/// cancellation of in-flight requests, so a slow response can race the next
/// tick and simply loses.
pub fn use_polling<T: 'static>(resource: Resource<T>, interval_ms: u32) {
    #[cfg(feature = "web")]
    {
        use dioxus::logger::tracing::info;
        use gloo_timers::callback::Interval;

        // Keep the handle so we can cancel it on unmount
        let interval_handle: Signal<Option<Interval>> = use_signal(|| None);

        use_drop({
            let mut interval_handle = interval_handle.clone();
            move || {
                if let Some(h) = interval_handle.write().take() {
                    h.cancel();
                }
            }
        });

        use_effect({
            let mut interval_handle = interval_handle.clone();
            move || {
                let mut resource = resource.clone();
                if let Some(prev) = interval_handle.write().take() {
                    prev.cancel();
                }
                info!("[polling] refreshing every {} ms", interval_ms);
                let handle = Interval::new(interval_ms, move || {
                    resource.restart();
                });
                interval_handle.set(Some(handle));
            }
        });
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (resource, interval_ms);
    }
}
