//! Handler registry and access bridge for the Trident server SDK.
//!
//! [`Handlers`] is the one place subsystem handlers are obtained from. Handlers
//! this crate can build itself are owned eagerly; capability handlers whose
//! implementation lives in another crate are resolved through the
//! [`AccessBridge`], which constructs each one on first demand and caches it.
//!
//! Implementation crates publish providers with [`provide_capability!`] and
//! are picked up by [`AccessBridge::open`] without this crate linking them.

pub mod bridge;
pub mod capability;
mod error;
pub mod registry;

pub use bridge::{AccessBridge, BridgeOptions, CapabilityProvider, CapabilityState, ErasedHandle};
pub use capability::{
	Capability, CapabilityKind, ChannelError, ChannelHandler, ChannelId, Channels, WindowError, WindowHandler, WindowId, WindowInfo, Windows,
};
pub use error::{BridgeError, Result};
pub use registry::{
	ChatHandler, CommandHandler, EventHandler, HandlerKind, Handlers, Ownership, PluginHandler, TransactionHandler,
};

#[doc(hidden)]
pub mod __private {
	pub use inventory;
}
