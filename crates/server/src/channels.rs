//! Plugin message channel table.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::debug;
use trident_sdk::{ChannelError, ChannelHandler, ChannelId};

/// Longest accepted channel name, in bytes.
pub const MAX_CHANNEL_NAME: usize = 32;

#[derive(Debug)]
struct ChannelTable {
	by_name: BTreeMap<String, ChannelId>,
	/// `None` once every id has been handed out.
	next_id: Option<u32>,
}

impl Default for ChannelTable {
	fn default() -> Self {
		Self {
			by_name: BTreeMap::new(),
			next_id: Some(0),
		}
	}
}

/// Server implementation of [`ChannelHandler`].
#[derive(Debug, Default)]
pub struct ServerChannels {
	table: RwLock<ChannelTable>,
}

impl ServerChannels {
	pub fn new() -> Self {
		Self::default()
	}

	#[cfg(test)]
	fn starting_at(next_id: u32) -> Self {
		let channels = Self::new();
		channels.table.write().next_id = Some(next_id);
		channels
	}
}

fn valid_name(name: &str) -> bool {
	!name.is_empty() && name.len() <= MAX_CHANNEL_NAME && !name.chars().any(char::is_whitespace)
}

impl ChannelHandler for ServerChannels {
	fn register(&self, name: &str) -> Result<ChannelId, ChannelError> {
		if !valid_name(name) {
			return Err(ChannelError::InvalidName { name: name.to_owned() });
		}

		let mut table = self.table.write();
		if let Some(&id) = table.by_name.get(name) {
			return Err(ChannelError::AlreadyRegistered { name: name.to_owned(), id });
		}

		let id = ChannelId(table.next_id.ok_or(ChannelError::Exhausted)?);
		table.next_id = id.0.checked_add(1);
		table.by_name.insert(name.to_owned(), id);
		debug!(channel = name, id = id.0, "registered plugin channel");
		Ok(id)
	}

	fn unregister(&self, name: &str) -> bool {
		self.table.write().by_name.remove(name).is_some()
	}

	fn is_registered(&self, name: &str) -> bool {
		self.table.read().by_name.contains_key(name)
	}

	fn channels(&self) -> Vec<String> {
		self.table.read().by_name.keys().cloned().collect()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn ids_are_sequential() {
		let channels = ServerChannels::new();
		assert_eq!(channels.register("trident:a"), Ok(ChannelId(0)));
		assert_eq!(channels.register("trident:b"), Ok(ChannelId(1)));
		assert_eq!(channels.channels(), vec!["trident:a".to_string(), "trident:b".to_string()]);
	}

	#[test]
	fn rejects_duplicates() {
		let channels = ServerChannels::new();
		let id = channels.register("trident:a").unwrap();
		assert_eq!(
			channels.register("trident:a"),
			Err(ChannelError::AlreadyRegistered {
				name: "trident:a".into(),
				id
			})
		);
	}

	#[test]
	fn rejects_malformed_names() {
		let channels = ServerChannels::new();
		let long = "x".repeat(MAX_CHANNEL_NAME + 1);
		for name in ["", "has space", long.as_str()] {
			assert_eq!(channels.register(name), Err(ChannelError::InvalidName { name: name.to_owned() }));
		}
		assert!(channels.channels().is_empty());
	}

	#[test]
	fn last_id_is_issued_once() {
		let channels = ServerChannels::starting_at(u32::MAX);
		assert_eq!(channels.register("trident:last"), Ok(ChannelId(u32::MAX)));
		assert_eq!(channels.register("trident:over"), Err(ChannelError::Exhausted));
		assert!(channels.unregister("trident:last"));
		assert_eq!(channels.register("trident:last"), Err(ChannelError::Exhausted));
	}

	#[test]
	fn unregister_frees_name() {
		let channels = ServerChannels::new();
		channels.register("trident:a").unwrap();
		assert!(channels.unregister("trident:a"));
		assert!(!channels.unregister("trident:a"));
		assert!(!channels.is_registered("trident:a"));
		assert_eq!(channels.register("trident:a"), Ok(ChannelId(1)));
	}
}
