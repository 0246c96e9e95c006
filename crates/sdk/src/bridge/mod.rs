//! Runtime resolution of capabilities to their single live implementation.
//!
//! Each [`CapabilityKind`] owns one slot holding two write-once cells: the
//! registered provider and the resolved instance. A slot only moves forward
//! through [`CapabilityState`], so a resolved handle is never replaced.

mod provider;

use core::fmt;
use std::sync::{Arc, OnceLock};

pub use provider::{CapabilityProvider, ErasedHandle, linked_providers};
use tracing::{debug, warn};

use crate::{BridgeError, Capability, CapabilityKind, Result};

/// Resolution progress of one capability slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityState {
	/// No provider; demands fail with [`BridgeError::Unresolved`].
	Unregistered,
	/// Provider known, nothing constructed yet.
	Registered,
	/// Instance constructed and cached.
	Resolved,
}

/// Construction options for [`AccessBridge`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BridgeOptions {
	/// Register every [`CapabilityProvider`] linked into the binary.
	pub discover_linked: bool,
}

impl Default for BridgeOptions {
	fn default() -> Self {
		Self { discover_linked: true }
	}
}

impl BridgeOptions {
	pub fn discover_linked(mut self, enabled: bool) -> Self {
		self.discover_linked = enabled;
		self
	}
}

type Factory = Box<dyn Fn() -> ErasedHandle + Send + Sync>;

struct Binding {
	source: &'static str,
	construct: Factory,
}

#[derive(Default)]
struct Slot {
	binding: OnceLock<Binding>,
	instance: OnceLock<ErasedHandle>,
}

impl Slot {
	fn state(&self) -> CapabilityState {
		if self.instance.get().is_some() {
			CapabilityState::Resolved
		} else if self.binding.get().is_some() {
			CapabilityState::Registered
		} else {
			CapabilityState::Unregistered
		}
	}
}

/// Resolves capability kinds to lazily constructed, shared handler instances.
///
/// The first successful [`demand`](Self::demand) for a kind invokes its provider
/// exactly once, even when several threads race; every caller then receives a
/// clone of the same `Arc`.
pub struct AccessBridge {
	slots: [Slot; CapabilityKind::COUNT],
}

impl Default for AccessBridge {
	fn default() -> Self {
		Self::new()
	}
}

impl AccessBridge {
	/// Creates an empty bridge without link-time discovery.
	pub fn new() -> Self {
		Self {
			slots: Default::default(),
		}
	}

	/// Creates a bridge and registers every linked provider.
	pub fn open() -> Self {
		Self::with_options(BridgeOptions::default())
	}

	pub fn with_options(options: BridgeOptions) -> Self {
		let bridge = Self::new();
		if options.discover_linked {
			for provider in linked_providers() {
				if let Err(err) = bridge.register_provider(provider) {
					warn!(kind = %provider.kind, source = provider.source, %err, "rejected linked capability provider");
				}
			}
		}
		bridge
	}

	/// Registers a runtime factory for capability `C`.
	///
	/// The factory must not demand `C` itself.
	pub fn register<C, F>(&self, source: &'static str, factory: F) -> Result<()>
	where
		C: Capability,
		F: Fn() -> Arc<C::Handle> + Send + Sync + 'static,
	{
		self.bind(
			C::KIND,
			Binding {
				source,
				construct: Box::new(move || Box::new(factory()) as ErasedHandle),
			},
		)
	}

	/// Registers a static provider.
	pub fn register_provider(&self, provider: &'static CapabilityProvider) -> Result<()> {
		self.bind(
			provider.kind,
			Binding {
				source: provider.source,
				construct: Box::new(provider.construct),
			},
		)
	}

	fn bind(&self, kind: CapabilityKind, binding: Binding) -> Result<()> {
		let new = binding.source;
		let cell = &self.slot(kind).binding;
		cell.set(binding).map_err(|_| BridgeError::DuplicateProvider {
			kind,
			existing: cell.get().map_or("unknown", |b| b.source),
			new,
		})?;
		debug!(kind = %kind, source = new, "registered capability provider");
		Ok(())
	}

	/// Returns the live handle for `C`, constructing it on first demand.
	///
	/// Fails with [`BridgeError::Unresolved`] while no provider is registered.
	/// The failure is not cached; a later registration makes the next demand succeed.
	pub fn demand<C: Capability>(&self) -> Result<Arc<C::Handle>> {
		let kind = C::KIND;
		let slot = self.slot(kind);

		let erased = match slot.instance.get() {
			Some(erased) => erased,
			None => {
				let Some(binding) = slot.binding.get() else {
					debug!(kind = %kind, "capability unresolved");
					return Err(BridgeError::Unresolved { kind });
				};
				slot.instance.get_or_init(|| {
					let handle = (binding.construct)();
					debug!(kind = %kind, source = binding.source, "resolved capability");
					handle
				})
			}
		};

		erased.downcast_ref::<Arc<C::Handle>>().cloned().ok_or_else(|| BridgeError::HandleMismatch {
			kind,
			provider: slot.binding.get().map_or("unknown", |b| b.source),
		})
	}

	pub fn state(&self, kind: CapabilityKind) -> CapabilityState {
		self.slot(kind).state()
	}

	pub fn is_registered(&self, kind: CapabilityKind) -> bool {
		self.state(kind) != CapabilityState::Unregistered
	}

	pub fn is_resolved(&self, kind: CapabilityKind) -> bool {
		self.state(kind) == CapabilityState::Resolved
	}

	/// Crate or label that registered the provider for `kind`.
	pub fn provider_source(&self, kind: CapabilityKind) -> Option<&'static str> {
		self.slot(kind).binding.get().map(|b| b.source)
	}

	fn slot(&self, kind: CapabilityKind) -> &Slot {
		&self.slots[kind.index()]
	}
}

impl fmt::Debug for AccessBridge {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut map = f.debug_map();
		for kind in CapabilityKind::ALL {
			map.entry(&kind, &(self.state(kind), self.provider_source(kind)));
		}
		map.finish()
	}
}
