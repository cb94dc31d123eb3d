use yew::{Callback, MouseEvent};

/// Click handler running a device request in the background.
///
/// `deps` is cloned on every click so the spawned future owns the handles it
/// updates.
pub fn device_action<Deps, F, Fut>(
    action: &'static str,
    deps: Deps,
    run: F,
) -> Callback<MouseEvent>
where
    Deps: Clone + 'static,
    F: Fn(Deps) -> Fut + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    Callback::from(move |_: MouseEvent| {
        tracing::debug!("Starting {action}");
        wasm_bindgen_futures::spawn_local(run(deps.clone()));
    })
}
