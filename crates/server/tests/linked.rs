//! Resolution of the server handlers through the SDK registry.

use std::sync::Arc;

use pretty_assertions::assert_eq;
use trident_sdk::bridge::linked_providers;
use trident_sdk::{AccessBridge, BridgeError, BridgeOptions, CapabilityKind, CapabilityState, HandlerKind, Handlers};
use trident_server::install;

fn init_tracing() {
	let _ = tracing_subscriber::fmt::try_init();
}

#[test]
fn open_discovers_linked_providers() {
	init_tracing();
	let handlers = Handlers::open();

	for kind in HandlerKind::ALL {
		assert!(handlers.is_available(kind), "{kind} should be available");
	}
	assert_eq!(handlers.bridge().provider_source(CapabilityKind::Channel), Some("trident-server"));
	assert_eq!(handlers.bridge().provider_source(CapabilityKind::Window), Some("trident-server"));

	let channels = handlers.for_channels().unwrap();
	let windows = handlers.for_windows().unwrap();
	assert!(Arc::ptr_eq(&channels, &handlers.for_channels().unwrap()));
	assert!(Arc::ptr_eq(&windows, &handlers.for_windows().unwrap()));
}

#[test]
fn disabled_discovery_ignores_linked_providers() {
	init_tracing();
	assert!(linked_providers().any(|p| p.kind == CapabilityKind::Channel));
	assert!(linked_providers().any(|p| p.kind == CapabilityKind::Window));

	let bridge = AccessBridge::with_options(BridgeOptions::default().discover_linked(false));

	for kind in CapabilityKind::ALL {
		assert_eq!(bridge.state(kind), CapabilityState::Unregistered);
	}
	assert_eq!(
		Handlers::with_bridge(bridge).for_channels().err(),
		Some(BridgeError::Unresolved {
			kind: CapabilityKind::Channel
		})
	);
}

#[test]
fn install_registers_on_plain_bridge() {
	init_tracing();
	let bridge = AccessBridge::with_options(BridgeOptions::default().discover_linked(false));
	install(&bridge).unwrap();

	for kind in CapabilityKind::ALL {
		assert_eq!(bridge.state(kind), CapabilityState::Registered);
	}

	let handlers = Handlers::with_bridge(bridge);
	let id = handlers.for_windows().unwrap().open("Crafting", 10).unwrap();
	assert_eq!(handlers.for_windows().unwrap().window(id).map(|w| w.slots), Some(10));
}

#[test]
fn install_twice_is_rejected() {
	let bridge = AccessBridge::new();
	install(&bridge).unwrap();

	assert_eq!(
		install(&bridge),
		Err(BridgeError::DuplicateProvider {
			kind: CapabilityKind::Channel,
			existing: "trident-server",
			new: "trident-server",
		})
	);
}

#[test]
fn state_is_shared_between_accessor_calls() {
	init_tracing();
	let handlers = Handlers::with_bridge(AccessBridge::new());
	install(handlers.bridge()).unwrap();

	handlers.for_channels().unwrap().register("trident:sync").unwrap();

	assert_eq!(handlers.for_channels().unwrap().channels(), vec!["trident:sync".to_string()]);
	assert_eq!(handlers.bridge().state(CapabilityKind::Channel), CapabilityState::Resolved);
	assert_eq!(handlers.bridge().state(CapabilityKind::Window), CapabilityState::Registered);
}
