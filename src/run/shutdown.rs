//! Interrupt handling.

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Cancels `cancel` on the first Ctrl-C.
///
/// The caller should abort the returned handle once the run is over.
pub fn spawn_interrupt_listener(cancel: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                log::warn!("Interrupt received, discarding in-flight domains");
                cancel.cancel();
            }
            Err(e) => log::warn!("Failed to listen for interrupt signal: {e}"),
        }
    })
}
