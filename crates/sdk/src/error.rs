use crate::CapabilityKind;

/// Access bridge failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
	/// No provider is registered for the requested capability.
	#[error("capability unresolved: no provider registered for {kind}")]
	Unresolved { kind: CapabilityKind },

	/// A provider is already registered for this capability.
	#[error("duplicate provider for {kind}: existing={existing} new={new}")]
	DuplicateProvider {
		kind: CapabilityKind,
		existing: &'static str,
		new: &'static str,
	},

	/// The provider produced a handle of the wrong type.
	#[error("provider {provider} produced a mismatched handle for {kind}")]
	HandleMismatch { kind: CapabilityKind, provider: &'static str },
}

impl BridgeError {
	/// Capability the failure refers to.
	pub const fn kind(&self) -> CapabilityKind {
		match self {
			Self::Unresolved { kind } | Self::DuplicateProvider { kind, .. } | Self::HandleMismatch { kind, .. } => *kind,
		}
	}
}

pub type Result<T, E = BridgeError> = std::result::Result<T, E>;
