//! Capability contracts resolved through the [`AccessBridge`](crate::AccessBridge).
//!
//! A capability is a handler kind whose implementation lives outside this crate.
//! Callers depend on the trait object named by [`Capability::Handle`], never on the
//! concrete type that a linked implementation crate supplies.

use core::fmt;

use thiserror::Error;

/// Closed set of handler kinds resolved at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CapabilityKind {
	/// Plugin message channels.
	Channel,
	/// Server-side UI windows.
	Window,
}

impl CapabilityKind {
	/// Number of capability kinds.
	pub const COUNT: usize = 2;

	/// All capability kinds, in slot order.
	pub const ALL: [Self; Self::COUNT] = [Self::Channel, Self::Window];

	/// Returns the dense slot index for this kind.
	pub const fn index(self) -> usize {
		match self {
			Self::Channel => 0,
			Self::Window => 1,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Channel => "channel",
			Self::Window => "window",
		}
	}
}

impl fmt::Display for CapabilityKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Static binding between a capability kind and the contract its handler fulfils.
///
/// Implemented by zero-sized markers ([`Channels`], [`Windows`]) so that
/// [`AccessBridge::demand`](crate::AccessBridge::demand) returns a typed handle
/// without the caller naming the implementation.
pub trait Capability: 'static {
	/// Slot this capability occupies in the bridge.
	const KIND: CapabilityKind;

	/// Contract handed out to callers, usually a trait object.
	type Handle: ?Sized + Send + Sync + 'static;
}

/// Marker for the channel handler capability.
#[derive(Debug, Clone, Copy)]
pub enum Channels {}

impl Capability for Channels {
	const KIND: CapabilityKind = CapabilityKind::Channel;
	type Handle = dyn ChannelHandler;
}

/// Marker for the window handler capability.
#[derive(Debug, Clone, Copy)]
pub enum Windows {}

impl Capability for Windows {
	const KIND: CapabilityKind = CapabilityKind::Window;
	type Handle = dyn WindowHandler;
}

/// Identifier assigned to a registered plugin channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChannelId(pub u32);

/// Channel registration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
	#[error("invalid channel name {name:?}")]
	InvalidName { name: String },
	#[error("channel {name:?} is already registered as {id:?}")]
	AlreadyRegistered { name: String, id: ChannelId },
	#[error("channel ids exhausted")]
	Exhausted,
}

/// Registry of named plugin message channels.
pub trait ChannelHandler: Send + Sync {
	/// Registers a channel name and returns its id.
	fn register(&self, name: &str) -> Result<ChannelId, ChannelError>;

	/// Removes a channel. Returns false if it was not registered.
	fn unregister(&self, name: &str) -> bool;

	fn is_registered(&self, name: &str) -> bool;

	/// Registered channel names, sorted.
	fn channels(&self) -> Vec<String>;
}

/// Identifier of an open window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub u32);

/// Snapshot of an open window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowInfo {
	pub id: WindowId,
	pub title: String,
	pub slots: u16,
}

/// Window table failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WindowError {
	#[error("window ids exhausted")]
	Exhausted,
}

/// Table of server-side UI windows.
pub trait WindowHandler: Send + Sync {
	/// Opens a window and returns its id.
	fn open(&self, title: &str, slots: u16) -> Result<WindowId, WindowError>;

	fn window(&self, id: WindowId) -> Option<WindowInfo>;

	/// Closes a window. Returns false if it was not open.
	fn close(&self, id: WindowId) -> bool;

	/// Open windows ordered by id.
	fn windows(&self) -> Vec<WindowInfo>;
}
