//! Flag bits carried in the instance field.

/// Flags that chat SteamIDs set in their instance field.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstanceFlag {
	/// A matchmaking lobby.
	MmsLobby = 0x20000,

	/// A lobby chat room.
	Lobby = 0x40000,

	/// A clan chat room.
	Clan = 0x80000,
}

impl InstanceFlag {
	/// Returns the raw flag bit.
	pub const fn bit(self) -> u32 {
		self as u32
	}

	/// Returns whether this flag is set in the given instance value.
	pub const fn is_set(self, instance: u32) -> bool {
		instance & (self as u32) != 0
	}
}
