//! Link-time capability providers collected via `inventory`.

use std::any::Any;

use crate::CapabilityKind;

/// Type-erased handle produced by a provider.
///
/// Always holds an `Arc<C::Handle>` for the provider's capability `C`.
pub type ErasedHandle = Box<dyn Any + Send + Sync>;

/// Static registration entry binding a capability kind to a constructor.
///
/// Build these with [`provide_capability!`](crate::provide_capability) so the
/// constructor is checked against the capability's handle type.
#[derive(Debug)]
pub struct CapabilityProvider {
	/// Capability slot this provider fills.
	pub kind: CapabilityKind,
	/// Crate that supplied the implementation.
	pub source: &'static str,
	/// Constructor, invoked at most once per bridge.
	pub construct: fn() -> ErasedHandle,
}

inventory::collect!(CapabilityProvider);

/// Iterates every provider linked into the current binary, in collection order.
///
/// Includes providers that [`AccessBridge::open`](crate::AccessBridge::open)
/// rejected because an earlier one claimed the same kind.
pub fn linked_providers() -> impl Iterator<Item = &'static CapabilityProvider> {
	inventory::iter::<CapabilityProvider>.into_iter()
}

/// Publishes a capability implementation for discovery by [`AccessBridge::open`].
///
/// The factory returns an `Arc` of the implementing type, which is coerced to
/// the capability's handle.
///
/// ```ignore
/// provide_capability!(Channels, || Arc::new(ServerChannels::new()));
/// ```
///
/// [`AccessBridge::open`]: crate::AccessBridge::open
#[macro_export]
macro_rules! provide_capability {
	($cap:ty, $factory:expr $(,)?) => {
		const _: () = {
			fn construct() -> $crate::ErasedHandle {
				let handle: ::std::sync::Arc<<$cap as $crate::Capability>::Handle> = ($factory)();
				::std::boxed::Box::new(handle)
			}

			$crate::__private::inventory::submit! {
				$crate::CapabilityProvider {
					kind: <$cap as $crate::Capability>::KIND,
					source: env!("CARGO_PKG_NAME"),
					construct,
				}
			}
		};
	};
}
