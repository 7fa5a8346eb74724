//! Role classification of a Steam account.

use std::str::FromStr;

use crate::TYPE_SHIFT;

/// The type of account a SteamID belongs to.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AccountType {
	/// Not a real account.
	Invalid = 0,

	/// A single user account.
	Individual = 1,

	/// A multiseat (e.g. cybercafe) account.
	Multiseat = 2,

	/// A game server account.
	GameServer = 3,

	/// An anonymous game server account.
	AnonGameServer = 4,

	/// A pending account.
	Pending = 5,

	/// A content server.
	ContentServer = 6,

	/// A Steam group.
	Clan = 7,

	/// A chat room.
	Chat = 8,

	/// Fake id for a local console account (PSN on PS3, Live on 360, etc.).
	ConsoleUser = 9,

	/// An anonymous user account.
	AnonUser = 10,

	/// Upper bound marker, not a real type.
	Max = 11,
}

/// Error type for conversions into [`AccountType`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown account type")]
pub struct UnknownAccountType;

impl AccountType {
	/// Extracts the account type bits from a packed 64-bit SteamID.
	///
	/// Bit patterns without a known meaning fold to [`AccountType::Invalid`].
	pub const fn from_bits(bits: u64) -> Self {
		match (bits >> TYPE_SHIFT) & 0xF {
			1 => Self::Individual,
			2 => Self::Multiseat,
			3 => Self::GameServer,
			4 => Self::AnonGameServer,
			5 => Self::Pending,
			6 => Self::ContentServer,
			7 => Self::Clan,
			8 => Self::Chat,
			9 => Self::ConsoleUser,
			10 => Self::AnonUser,
			11 => Self::Max,
			_ => Self::Invalid,
		}
	}

	/// Returns the Steam3 type character for this account type.
	///
	/// Chat ids refine the base `T` into `L` or `c` from their instance flag
	/// bits, see [`SteamId::as_steam3()`]. Types without a character of
	/// their own render as `I`.
	///
	/// [`SteamId::as_steam3()`]: crate::SteamId::as_steam3
	pub const fn type_char(&self) -> char {
		match self {
			Self::Invalid | Self::ConsoleUser | Self::Max => 'I',
			Self::Individual => 'U',
			Self::Multiseat => 'M',
			Self::GameServer => 'G',
			Self::AnonGameServer => 'A',
			Self::Pending => 'P',
			Self::ContentServer => 'C',
			Self::Clan => 'g',
			Self::Chat => 'T',
			Self::AnonUser => 'a',
		}
	}

	/// Looks up the account type for a Steam3 type character.
	///
	/// This is the reverse of [`AccountType::type_char()`], with the chat
	/// variants `T`, `L` and `c` all mapping to [`AccountType::Chat`].
	pub const fn from_type_char(type_char: char) -> Option<Self> {
		match type_char {
			'I' => Some(Self::Invalid),
			'U' => Some(Self::Individual),
			'M' => Some(Self::Multiseat),
			'G' => Some(Self::GameServer),
			'A' => Some(Self::AnonGameServer),
			'P' => Some(Self::Pending),
			'C' => Some(Self::ContentServer),
			'g' => Some(Self::Clan),
			'T' | 'L' | 'c' => Some(Self::Chat),
			'a' => Some(Self::AnonUser),
			_ => None,
		}
	}
}

impl From<AccountType> for u8 {
	fn from(account_type: AccountType) -> Self {
		account_type as u8
	}
}

impl TryFrom<u8> for AccountType {
	type Error = UnknownAccountType;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Self::Invalid),
			1 => Ok(Self::Individual),
			2 => Ok(Self::Multiseat),
			3 => Ok(Self::GameServer),
			4 => Ok(Self::AnonGameServer),
			5 => Ok(Self::Pending),
			6 => Ok(Self::ContentServer),
			7 => Ok(Self::Clan),
			8 => Ok(Self::Chat),
			9 => Ok(Self::ConsoleUser),
			10 => Ok(Self::AnonUser),
			11 => Ok(Self::Max),
			_ => Err(UnknownAccountType),
		}
	}
}

impl FromStr for AccountType {
	type Err = UnknownAccountType;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"invalid" | "Invalid" => Ok(Self::Invalid),
			"individual" | "Individual" => Ok(Self::Individual),
			"multiseat" | "Multiseat" => Ok(Self::Multiseat),
			"gameserver" | "GameServer" => Ok(Self::GameServer),
			"anongameserver" | "AnonGameServer" => Ok(Self::AnonGameServer),
			"pending" | "Pending" => Ok(Self::Pending),
			"contentserver" | "ContentServer" => Ok(Self::ContentServer),
			"clan" | "Clan" => Ok(Self::Clan),
			"chat" | "Chat" => Ok(Self::Chat),
			"consoleuser" | "ConsoleUser" => Ok(Self::ConsoleUser),
			"anonuser" | "AnonUser" => Ok(Self::AnonUser),
			"max" | "Max" => Ok(Self::Max),
			_ => Err(UnknownAccountType),
		}
	}
}
