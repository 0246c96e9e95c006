//! Server-side implementations of the Trident SDK capability handlers.
//!
//! Linking this crate is enough for [`trident_sdk::Handlers::open`] to resolve
//! channels and windows. Bridges built without discovery can call [`install`].

mod channels;
mod windows;

use std::sync::Arc;

pub use channels::{MAX_CHANNEL_NAME, ServerChannels};
use trident_sdk::{AccessBridge, BridgeError, Channels, Windows, provide_capability};
pub use windows::ServerWindows;

provide_capability!(Channels, || Arc::new(ServerChannels::new()));
provide_capability!(Windows, || Arc::new(ServerWindows::new()));

/// Registers this crate's providers on `bridge`.
pub fn install(bridge: &AccessBridge) -> Result<(), BridgeError> {
	bridge.register::<Channels, _>(env!("CARGO_PKG_NAME"), || Arc::new(ServerChannels::new()))?;
	bridge.register::<Windows, _>(env!("CARGO_PKG_NAME"), || Arc::new(ServerWindows::new()))?;
	Ok(())
}
