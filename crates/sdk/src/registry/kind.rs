use core::fmt;

use crate::CapabilityKind;

/// Who constructs and owns a handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
	/// Built eagerly by the registry.
	Eager,
	/// Resolved lazily through the access bridge.
	Bridged(CapabilityKind),
}

/// Every handler kind reachable through [`Handlers`](super::Handlers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandlerKind {
	Events,
	Plugins,
	Commands,
	Chat,
	Transactions,
	Channels,
	Windows,
}

impl HandlerKind {
	pub const ALL: [Self; 7] = [
		Self::Events,
		Self::Plugins,
		Self::Commands,
		Self::Chat,
		Self::Transactions,
		Self::Channels,
		Self::Windows,
	];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Events => "events",
			Self::Plugins => "plugins",
			Self::Commands => "commands",
			Self::Chat => "chat",
			Self::Transactions => "transactions",
			Self::Channels => "channels",
			Self::Windows => "windows",
		}
	}

	pub const fn ownership(self) -> Ownership {
		match self {
			Self::Channels => Ownership::Bridged(CapabilityKind::Channel),
			Self::Windows => Ownership::Bridged(CapabilityKind::Window),
			_ => Ownership::Eager,
		}
	}

	/// Capability backing this kind, if bridged.
	pub const fn capability(self) -> Option<CapabilityKind> {
		match self.ownership() {
			Ownership::Bridged(kind) => Some(kind),
			Ownership::Eager => None,
		}
	}
}

impl fmt::Display for HandlerKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
