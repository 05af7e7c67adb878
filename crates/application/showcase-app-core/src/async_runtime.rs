use anyhow::Result;
use std::future::Future;
use std::sync::OnceLock;
use tokio::task::JoinHandle;

static RUNTIME: OnceLock<std::result::Result<tokio::runtime::Runtime, String>> = OnceLock::new();

pub(crate) fn runtime() -> Result<&'static tokio::runtime::Runtime> {
    match RUNTIME.get_or_init(|| tokio::runtime::Runtime::new().map_err(|e| e.to_string())) {
        Ok(rt) => Ok(rt),
        Err(message) => Err(anyhow::anyhow!(message.clone())),
    }
}

/// Spawns on the caller's runtime when there is one, else on the shared
/// fallback runtime.
pub(crate) fn spawn<F>(fut: F) -> Result<JoinHandle<()>>
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => Ok(handle.spawn(fut)),
        Err(_) => Ok(runtime()?.spawn(fut)),
    }
}
