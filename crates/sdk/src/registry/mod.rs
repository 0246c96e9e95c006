//! Handler registry façade.
//!
//! [`Handlers`] is the single context through which subsystem handlers are
//! obtained. Eager handlers are owned here; capability handlers are forwarded
//! to the [`AccessBridge`], which owns their cache. Pass the context explicitly,
//! typically as `Arc<Handlers>`.

mod kind;
mod services;

use std::sync::Arc;

pub use kind::{HandlerKind, Ownership};
pub use services::{ChatHandler, CommandHandler, EventHandler, PluginHandler, TransactionHandler};
use tracing::debug;

use crate::{AccessBridge, ChannelHandler, Channels, Result, WindowHandler, Windows};

/// Registry of every subsystem handler.
#[derive(Debug)]
pub struct Handlers {
	bridge: AccessBridge,
	events: EventHandler,
	plugins: PluginHandler,
	commands: CommandHandler,
	chat: ChatHandler,
	transactions: TransactionHandler,
}

impl Handlers {
	/// Builds the registry over a bridge with link-time discovery.
	pub fn open() -> Self {
		Self::with_bridge(AccessBridge::open())
	}

	/// Builds the registry over an already configured bridge.
	pub fn with_bridge(bridge: AccessBridge) -> Self {
		let handlers = Self {
			bridge,
			events: EventHandler::create(),
			plugins: PluginHandler::new(),
			commands: CommandHandler::new(),
			chat: ChatHandler::new(),
			transactions: TransactionHandler::new(),
		};
		debug!(bridge = ?handlers.bridge, "handler registry initialized");
		handlers
	}

	pub fn for_events(&self) -> &EventHandler {
		&self.events
	}

	pub fn for_plugins(&self) -> &PluginHandler {
		&self.plugins
	}

	pub fn for_commands(&self) -> &CommandHandler {
		&self.commands
	}

	pub fn for_chat(&self) -> &ChatHandler {
		&self.chat
	}

	pub fn for_transactions(&self) -> &TransactionHandler {
		&self.transactions
	}

	/// Channel handler, resolved through the bridge.
	pub fn for_channels(&self) -> Result<Arc<dyn ChannelHandler>> {
		self.bridge.demand::<Channels>()
	}

	/// Window handler, resolved through the bridge.
	pub fn for_windows(&self) -> Result<Arc<dyn WindowHandler>> {
		self.bridge.demand::<Windows>()
	}

	/// Bridge backing the capability handlers, for registering providers.
	pub fn bridge(&self) -> &AccessBridge {
		&self.bridge
	}

	/// Whether `kind` can be obtained without an unresolved failure.
	pub fn is_available(&self, kind: HandlerKind) -> bool {
		match kind.ownership() {
			Ownership::Eager => true,
			Ownership::Bridged(cap) => self.bridge.is_registered(cap),
		}
	}
}
