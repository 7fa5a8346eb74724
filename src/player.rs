//! The player record produced by the status parser.

use steam_id::SteamId;

use crate::duration::parse_duration;

/// One entry of a server `status` dump.
///
/// Constructed once per successfully parsed line and immutable afterwards;
/// [`parse_status()`] replaces the whole sequence on every load rather than
/// mutating records in place.
///
/// [`parse_status()`]: crate::parse_status
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Player {
	/// The server-session-scoped user id, used for ordering.
	pub user_id: u32,

	/// The player name as displayed.
	pub name: String,

	/// The decoded Steam identifier.
	pub steam_id: SteamId,

	/// The connection duration exactly as displayed.
	pub connected_raw: String,

	/// The connection duration in seconds, or -1 when the raw text could not
	/// be parsed.
	pub connected_seconds: i64,
}

impl Player {
	/// Builds a player record from the raw tokens of a status line.
	///
	/// The identifier text goes through [`SteamId::decode()`], so a malformed
	/// token yields [`SteamId::INVALID`] rather than a failure.
	pub fn new(
		user_id: u32,
		name: impl Into<String>,
		steam_id: &str,
		connected: impl Into<String>,
	) -> Self {
		let connected_raw = connected.into();
		let connected_seconds = parse_duration(&connected_raw);

		Self {
			user_id,
			name: name.into(),
			steam_id: SteamId::decode(steam_id),
			connected_raw,
			connected_seconds,
		}
	}

	/// Returns the console command that starts a vote to kick this player.
	pub fn kick_command(&self) -> String {
		format!("callvote kick {}", self.user_id)
	}
}
