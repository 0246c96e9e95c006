//! Handlers owned directly by [`Handlers`](super::Handlers).
//!
//! These are constructed once when the registry is built. Subsystem behaviour
//! (event dispatch, plugin loading, command execution) is layered on elsewhere.

use super::HandlerKind;

/// Event subsystem handler.
#[derive(Debug)]
pub struct EventHandler {
	kind: HandlerKind,
}

impl EventHandler {
	pub fn create() -> Self {
		Self { kind: HandlerKind::Events }
	}

	pub fn kind(&self) -> HandlerKind {
		self.kind
	}
}

impl Default for EventHandler {
	fn default() -> Self {
		Self::create()
	}
}

/// Plugin subsystem handler.
#[derive(Debug)]
pub struct PluginHandler {
	kind: HandlerKind,
}

impl PluginHandler {
	pub fn new() -> Self {
		Self { kind: HandlerKind::Plugins }
	}

	pub fn kind(&self) -> HandlerKind {
		self.kind
	}
}

impl Default for PluginHandler {
	fn default() -> Self {
		Self::new()
	}
}

/// Command subsystem handler.
#[derive(Debug)]
pub struct CommandHandler {
	kind: HandlerKind,
}

impl CommandHandler {
	pub fn new() -> Self {
		Self { kind: HandlerKind::Commands }
	}

	pub fn kind(&self) -> HandlerKind {
		self.kind
	}
}

impl Default for CommandHandler {
	fn default() -> Self {
		Self::new()
	}
}

/// Chat service handler.
#[derive(Debug)]
pub struct ChatHandler {
	kind: HandlerKind,
}

impl ChatHandler {
	pub fn new() -> Self {
		Self { kind: HandlerKind::Chat }
	}

	pub fn kind(&self) -> HandlerKind {
		self.kind
	}
}

impl Default for ChatHandler {
	fn default() -> Self {
		Self::new()
	}
}

/// Transaction service handler.
#[derive(Debug)]
pub struct TransactionHandler {
	kind: HandlerKind,
}

impl TransactionHandler {
	pub fn new() -> Self {
		Self { kind: HandlerKind::Transactions }
	}

	pub fn kind(&self) -> HandlerKind {
		self.kind
	}
}

impl Default for TransactionHandler {
	fn default() -> Self {
		Self::new()
	}
}
