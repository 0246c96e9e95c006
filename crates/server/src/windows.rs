//! Open window table.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::debug;
use trident_sdk::{WindowError, WindowHandler, WindowId, WindowInfo};

/// Server implementation of [`WindowHandler`].
///
/// Ids are never reused, even after a window is closed. Once `u32::MAX` has
/// been issued, further opens fail with [`WindowError::Exhausted`].
#[derive(Debug, Default)]
pub struct ServerWindows {
	open: RwLock<BTreeMap<WindowId, WindowInfo>>,
	/// Widened so the counter can step past `u32::MAX` without wrapping.
	next_id: AtomicU64,
}

impl ServerWindows {
	pub fn new() -> Self {
		Self::default()
	}

	#[cfg(test)]
	fn starting_at(next_id: u32) -> Self {
		Self {
			open: RwLock::default(),
			next_id: AtomicU64::new(u64::from(next_id)),
		}
	}
}

impl WindowHandler for ServerWindows {
	fn open(&self, title: &str, slots: u16) -> Result<WindowId, WindowError> {
		let next = self
			.next_id
			.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| (n <= u64::from(u32::MAX)).then_some(n + 1))
			.map_err(|_| WindowError::Exhausted)?;
		let id = WindowId(u32::try_from(next).map_err(|_| WindowError::Exhausted)?);
		let info = WindowInfo {
			id,
			title: title.to_owned(),
			slots,
		};
		self.open.write().insert(id, info);
		debug!(id = id.0, title, slots, "opened window");
		Ok(id)
	}

	fn window(&self, id: WindowId) -> Option<WindowInfo> {
		self.open.read().get(&id).cloned()
	}

	fn close(&self, id: WindowId) -> bool {
		self.open.write().remove(&id).is_some()
	}

	fn windows(&self) -> Vec<WindowInfo> {
		self.open.read().values().cloned().collect()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn open_and_close() {
		let windows = ServerWindows::new();
		let chest = windows.open("Chest", 27).unwrap();
		let furnace = windows.open("Furnace", 3).unwrap();

		assert_eq!(
			windows.window(chest),
			Some(WindowInfo {
				id: chest,
				title: "Chest".into(),
				slots: 27
			})
		);
		assert!(windows.close(chest));
		assert!(!windows.close(chest));
		assert_eq!(windows.windows().iter().map(|w| w.id).collect::<Vec<_>>(), vec![furnace]);
	}

	#[test]
	fn ids_are_not_reused() {
		let windows = ServerWindows::new();
		let first = windows.open("A", 9).unwrap();
		windows.close(first);
		assert_eq!(windows.open("B", 9), Ok(WindowId(first.0 + 1)));
	}

	#[test]
	fn last_id_is_issued_once() {
		let windows = ServerWindows::starting_at(u32::MAX);
		let last = windows.open("Last", 9).unwrap();
		assert_eq!(last, WindowId(u32::MAX));
		assert_eq!(windows.open("Over", 9), Err(WindowError::Exhausted));
		assert!(windows.close(last));
		assert_eq!(windows.open("Over", 9), Err(WindowError::Exhausted));
		assert!(windows.windows().is_empty());
	}
}
