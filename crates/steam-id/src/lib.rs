// This crate is part of the tf2-status project.
//
// Copyright (C) 2026  tf2-status developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see https://www.gnu.org/licenses.

//! Bit-exact encoding and decoding of [SteamID]s.
//!
//! A SteamID is a packed 64-bit integer identifying a Steam account. This
//! crate models it as [`SteamId`], an immutable wrapper around that one
//! integer; every other view of it (account id, instance, [`AccountType`],
//! [`Universe`], the `STEAM_X:Y:Z` "Steam2" text form, the `[C:U:ID]`
//! "Steam3" text form) is a pure function of the packed value.
//!
//! [SteamID]: https://developer.valvesoftware.com/wiki/SteamID

#[macro_use]
extern crate thiserror;

use std::borrow::Borrow;
use std::str::FromStr;
use std::{fmt, ops};

mod account_type;
mod errors;
mod instance;
mod universe;

#[cfg(feature = "serde")]
mod serde_impls;

#[cfg(feature = "rand")]
mod rand_impls;

pub use self::account_type::{AccountType, UnknownAccountType};
pub use self::errors::{
	InstanceOutOfRange, ParseSteam2Error, ParseSteam3Error, ParseSteamIdError,
};
pub use self::instance::InstanceFlag;
pub use self::universe::{UnknownUniverse, Universe};

/// Mask for the account id bits, bits `[0, 32)`.
const ACCOUNT_ID_MASK: u64 = 0xFFFF_FFFF;

/// Mask for the instance bits after shifting, bits `[32, 52)`.
const INSTANCE_MASK: u64 = 0xF_FFFF;

/// Offset of the instance bits.
const INSTANCE_SHIFT: u64 = 32;

/// Offset of the account type bits, bits `[52, 56)`.
const TYPE_SHIFT: u64 = 52;

/// Offset of the universe bits, bits `[56, 64)`.
const UNIVERSE_SHIFT: u64 = 56;

/// A [SteamID].
///
/// The packed 64-bit value is the single source of truth; all accessors are
/// pure bit extractions and repeated calls always produce identical results.
///
/// [SteamID]: https://developer.valvesoftware.com/wiki/SteamID
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SteamId(u64);

impl SteamId {
	/// The invalid SteamID, with every field zeroed.
	///
	/// Malformed textual input decodes to this value rather than an error;
	/// check [`SteamId::is_valid()`] before trusting a decoded id.
	pub const INVALID: Self = Self(0);

	/// The largest value the instance field can hold (20 bits).
	pub const MAX_INSTANCE: u32 = 0xF_FFFF;

	/// Returns the account id, bits `[0, 32)`.
	pub const fn account_id(&self) -> u32 {
		(self.0 & ACCOUNT_ID_MASK) as u32
	}

	/// Returns the instance, bits `[32, 52)`.
	pub const fn instance(&self) -> u32 {
		((self.0 >> INSTANCE_SHIFT) & INSTANCE_MASK) as u32
	}

	/// Returns the account type, bits `[52, 56)`.
	pub const fn account_type(&self) -> AccountType {
		AccountType::from_bits(self.0)
	}

	/// Returns the universe, bits `[56, 64)`.
	pub const fn universe(&self) -> Universe {
		Universe::from_bits(self.0)
	}

	/// Returns the packed 64-bit representation.
	pub const fn as_u64(&self) -> u64 {
		self.0
	}

	/// Packs the fields without validating the instance.
	const fn pack(
		account_id: u32,
		account_type: AccountType,
		universe: Universe,
		instance: u32,
	) -> Self {
		Self(
			((universe as u64) << UNIVERSE_SHIFT)
				| ((account_type as u64) << TYPE_SHIFT)
				| ((instance as u64) << INSTANCE_SHIFT)
				| (account_id as u64),
		)
	}

	/// Constructs a [`SteamId`] from its individual fields.
	///
	/// This is the one fallible constructor: the instance field is 20 bits
	/// wide, so values above [`SteamId::MAX_INSTANCE`] are rejected.
	pub const fn from_parts(
		account_id: u32,
		account_type: AccountType,
		universe: Universe,
		instance: u32,
	) -> Result<Self, InstanceOutOfRange> {
		if instance > Self::MAX_INSTANCE {
			return Err(InstanceOutOfRange { instance });
		}

		Ok(Self::pack(account_id, account_type, universe, instance))
	}

	/// Constructs a [`SteamId`] from a bare account id.
	///
	/// The remaining fields are synthesized as [`AccountType::Individual`],
	/// [`Universe::Public`] and instance 1.
	pub const fn from_account_id(account_id: u32) -> Self {
		Self::pack(account_id, AccountType::Individual, Universe::Public, 1)
	}

	/// Constructs a [`SteamId`] from a numeric value.
	///
	/// Values below 2^32 are interpreted as bare account ids (see
	/// [`SteamId::from_account_id()`]); anything else is taken as an
	/// already-packed id and returned unchanged, without field validation.
	/// Zero yields [`SteamId::INVALID`].
	pub const fn from_u64(value: u64) -> Self {
		if value == 0 {
			Self::INVALID
		} else if value <= (u32::MAX as u64) {
			Self::from_account_id(value as u32)
		} else {
			Self(value)
		}
	}

	/// Decodes any of the textual or numeric SteamID representations.
	///
	/// The input may be a decimal number (bare account id or packed 64-bit
	/// value), a Steam2 string (`STEAM_X:Y:Z`) or a Steam3 string
	/// (`[U:1:XXXXXXXX]`). Input matching none of these yields
	/// [`SteamId::INVALID`] instead of an error.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::SteamId;
	///
	/// assert!(SteamId::decode("[U:1:322356345]").is_valid());
	/// assert!(SteamId::decode("STEAM_1:1:161178172").is_valid());
	/// assert!(!SteamId::decode("not a steamid").is_valid());
	/// ```
	pub fn decode(value: &str) -> Self {
		if !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit()) {
			return match value.parse::<u64>() {
				Ok(numeric) => Self::from_u64(numeric),
				Err(_) => Self::INVALID,
			};
		}

		if let Ok(steam_id) = Self::parse_steam2(value) {
			return steam_id;
		}

		if let Ok(steam_id) = Self::parse_steam3(value) {
			return steam_id;
		}

		Self::INVALID
	}

	/// Parses a [`SteamId`] in the Steam2 format of `STEAM_X:Y:Z`.
	///
	/// A universe of 0 is coerced to [`Universe::Public`]; games before the
	/// Orange Box incorrectly wrote 0 for public accounts.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::SteamId;
	///
	/// let steam_id = SteamId::parse_steam2("STEAM_1:1:161178172");
	///
	/// assert!(steam_id.is_ok());
	/// ```
	pub fn parse_steam2(value: &str) -> Result<Self, ParseSteam2Error<'_>> {
		let value = value
			.strip_prefix("STEAM_")
			.ok_or(ParseSteam2Error::MissingPrefix)?;

		let mut segments = value.splitn(3, ':');

		let universe = match segments.next() {
			Some("") | None => return Err(ParseSteam2Error::MissingUniverse),
			Some(digits) => match digits.parse::<u8>() {
				Ok(0) => Universe::Public,
				Ok(numeric) => Universe::try_from(numeric)
					.map_err(|_| ParseSteam2Error::InvalidUniverse { actual: digits })?,
				Err(_) => return Err(ParseSteam2Error::InvalidUniverse { actual: digits }),
			},
		};

		let y = match segments.next() {
			Some("0") => 0_u64,
			Some("1") => 1_u64,
			Some("") | None => return Err(ParseSteam2Error::MissingY),
			Some(actual) => return Err(ParseSteam2Error::InvalidY { actual }),
		};

		let z = segments
			.next()
			.filter(|segment| !segment.is_empty())
			.ok_or(ParseSteam2Error::MissingAccountNumber)?;

		let z = z
			.parse::<u64>()
			.map_err(|source| ParseSteam2Error::InvalidAccountNumber { actual: z, source })?;

		// The account id is `(Z << 1) | Y` and has to fit in 32 bits.
		if z > u64::from(u32::MAX >> 1) {
			return Err(ParseSteam2Error::OutOfRange);
		}

		let account_id = ((z << 1) | y) as u32;

		Ok(Self::pack(account_id, AccountType::Individual, universe, 1))
	}

	/// Parses a [`SteamId`] in the Steam3 format of `[C:U:ID]` with an
	/// optional `:INSTANCE` suffix.
	///
	/// The instance defaults depend on the type character: `g` and `T` force
	/// 0, `L` and `c` select the lobby and clan chat flags, and everything
	/// else falls back to 1 for individual and game server accounts or 0
	/// otherwise.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::SteamId;
	///
	/// let steam_id = SteamId::parse_steam3("[U:1:322356345]");
	///
	/// assert!(steam_id.is_ok());
	/// ```
	pub fn parse_steam3(value: &str) -> Result<Self, ParseSteam3Error<'_>> {
		let inner = value
			.strip_prefix('[')
			.and_then(|rest| rest.strip_suffix(']'))
			.ok_or(ParseSteam3Error::MissingBrackets)?;

		let mut segments = inner.splitn(4, ':');

		let type_segment = segments.next().ok_or(ParseSteam3Error::MissingAccountType)?;
		let type_char = {
			let mut chars = type_segment.chars();
			match (chars.next(), chars.next()) {
				// lowercase `i` is the one accepted case-insensitive alias
				(Some('i'), None) => 'I',
				(Some(first), None) => first,
				_ => {
					return Err(ParseSteam3Error::InvalidAccountType {
						actual: type_segment,
					});
				}
			}
		};

		let account_type =
			AccountType::from_type_char(type_char).ok_or(ParseSteam3Error::InvalidAccountType {
				actual: type_segment,
			})?;

		let universe = match segments.next() {
			None => return Err(ParseSteam3Error::MissingUniverse),
			Some("0") => Universe::Invalid,
			Some("1") => Universe::Public,
			Some("2") => Universe::Beta,
			Some("3") => Universe::Internal,
			Some("4") => Universe::Dev,
			Some(actual) => return Err(ParseSteam3Error::InvalidUniverse { actual }),
		};

		let id_segment = segments.next().ok_or(ParseSteam3Error::MissingAccountId)?;

		if id_segment.is_empty()
			|| id_segment.len() > 10
			|| !id_segment.bytes().all(|byte| byte.is_ascii_digit())
		{
			return Err(ParseSteam3Error::InvalidAccountId { actual: id_segment });
		}

		let account_id = id_segment
			.parse::<u32>()
			.map_err(|_| ParseSteam3Error::AccountIdOutOfRange { actual: id_segment })?;

		let explicit_instance = match segments.next() {
			None => None,
			Some(segment) => Some(segment.parse::<u32>().map_err(|source| {
				ParseSteam3Error::InvalidInstance {
					actual: segment,
					source,
				}
			})?),
		};

		let instance = match type_char {
			// `g` and `T` carry no instance, even with an explicit suffix
			'g' | 'T' => 0,
			'L' if explicit_instance.is_none() => InstanceFlag::Lobby.bit(),
			'c' if explicit_instance.is_none() => InstanceFlag::Clan.bit(),
			_ => match explicit_instance {
				Some(instance) => instance,
				None => match account_type {
					AccountType::Individual | AccountType::GameServer => 1,
					_ => 0,
				},
			},
		};

		Ok(Self::from_parts(account_id, account_type, universe, instance)?)
	}

	/// Renders the Steam2 representation, e.g. `STEAM_1:0:1234`.
	pub fn as_steam2(&self) -> String {
		format!("{self}")
	}

	/// Renders the Steam2 representation with the universe digit forced to
	/// 0, the form used by GoldSrc and Orange Box era games.
	pub fn as_steam2_legacy(&self) -> String {
		format!(
			"STEAM_0:{}:{}",
			self.account_id() % 2,
			self.account_id() >> 1
		)
	}

	/// Renders the Steam3 representation, e.g. `[U:1:1234]`.
	///
	/// Individual accounts with the default instance of 1 omit the instance
	/// suffix; anonymous game servers and multiseat accounts always include
	/// it. Chat ids pick their type character (`c`, `L` or `T`) from the
	/// instance flag bits and never append a numeric instance.
	pub fn as_steam3(&self) -> String {
		let account_type = self.account_type();
		let instance = self.instance();

		let type_char = match account_type {
			AccountType::Chat if InstanceFlag::Clan.is_set(instance) => 'c',
			AccountType::Chat if InstanceFlag::Lobby.is_set(instance) => 'L',
			other => other.type_char(),
		};

		let instance_suffix = match account_type {
			AccountType::AnonGameServer | AccountType::Multiseat => Some(instance),
			AccountType::Individual if instance != 1 => Some(instance),
			_ => None,
		};

		let universe = self.universe() as u8;
		let account_id = self.account_id();

		match instance_suffix {
			Some(instance) => format!("[{type_char}:{universe}:{account_id}:{instance}]"),
			None => format!("[{type_char}:{universe}:{account_id}]"),
		}
	}

	/// Returns the Steam community profile URL.
	///
	/// Only individual and clan accounts have one; everything else has no
	/// URL, which is not an error.
	pub fn community_url(&self) -> Option<String> {
		match self.account_type() {
			AccountType::Individual => {
				Some(format!("https://steamcommunity.com/profiles/{}", self.0))
			}
			AccountType::Clan => Some(format!("https://steamcommunity.com/gid/{}", self.0)),
			_ => None,
		}
	}

	/// Checks whether this SteamID is structurally valid.
	///
	/// # Examples
	///
	/// ```
	/// use steam_id::SteamId;
	///
	/// assert!(!SteamId::INVALID.is_valid());
	/// assert!(SteamId::from_account_id(322356345).is_valid());
	/// ```
	pub const fn is_valid(&self) -> bool {
		let account_type = self.account_type();
		let universe = self.universe();

		if matches!(account_type, AccountType::Invalid | AccountType::Max) {
			return false;
		}

		if matches!(universe, Universe::Invalid | Universe::Max) {
			return false;
		}

		match account_type {
			AccountType::Individual => self.account_id() != 0 && self.instance() <= 4,
			AccountType::Clan => self.account_id() != 0 && self.instance() == 0,
			AccountType::GameServer => self.account_id() != 0,
			AccountType::AnonGameServer => self.account_id() != 0 || self.instance() != 0,
			_ => true,
		}
	}
}

impl fmt::Debug for SteamId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			return f
				.debug_struct("SteamId")
				.field("account_id", &self.account_id())
				.field("account_type", &self.account_type())
				.field("universe", &self.universe())
				.field("instance", &self.instance())
				.finish();
		}

		write!(f, "\"{self}\"")
	}
}

impl fmt::Display for SteamId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if f.alternate() {
			f.write_str(&self.as_steam3())
		} else {
			write!(
				f,
				"STEAM_{}:{}:{}",
				self.universe() as u8,
				self.account_id() % 2,
				self.account_id() >> 1
			)
		}
	}
}

impl Borrow<u64> for SteamId {
	fn borrow(&self) -> &u64 {
		&self.0
	}
}

impl AsRef<u64> for SteamId {
	fn as_ref(&self) -> &u64 {
		self.borrow()
	}
}

impl ops::Deref for SteamId {
	type Target = u64;

	fn deref(&self) -> &Self::Target {
		self.borrow()
	}
}

impl From<SteamId> for u64 {
	fn from(steam_id: SteamId) -> Self {
		steam_id.as_u64()
	}
}

impl From<u64> for SteamId {
	fn from(value: u64) -> Self {
		Self::from_u64(value)
	}
}

impl From<u32> for SteamId {
	fn from(account_id: u32) -> Self {
		Self::from_account_id(account_id)
	}
}

impl FromStr for SteamId {
	type Err = ParseSteamIdError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		if value.bytes().all(|byte| byte.is_ascii_digit()) && !value.is_empty() {
			return match value.parse::<u64>() {
				Ok(0) => Err(ParseSteamIdError::IsZero),
				Ok(numeric) => Ok(Self::from_u64(numeric)),
				Err(_) => Err(ParseSteamIdError::UnrecognizedFormat),
			};
		}

		if let Ok(steam_id) = Self::parse_steam2(value) {
			return Ok(steam_id);
		}

		if let Ok(steam_id) = Self::parse_steam3(value) {
			return Ok(steam_id);
		}

		Err(ParseSteamIdError::UnrecognizedFormat)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	// STEAM_1:1:161178172 / [U:1:322356345]
	const ALPHAKEKS: SteamId = SteamId::from_account_id(322356345);
	const ALPHAKEKS_RAW: u64 = 76561198282622073_u64;

	#[test]
	fn bit_extraction_works() {
		assert_eq!(ALPHAKEKS.account_id(), 322356345_u32);
		assert_eq!(ALPHAKEKS.instance(), 1_u32);
		assert_eq!(ALPHAKEKS.account_type(), AccountType::Individual);
		assert_eq!(ALPHAKEKS.universe(), Universe::Public);
		assert_eq!(ALPHAKEKS.as_u64(), ALPHAKEKS_RAW);
	}

	#[test]
	fn decode_bare_account_id() {
		let steam_id = SteamId::decode("12345");

		assert_eq!(steam_id.account_id(), 12345_u32);
		assert_eq!(steam_id.account_type(), AccountType::Individual);
		assert_eq!(steam_id.universe(), Universe::Public);
		assert_eq!(steam_id.instance(), 1_u32);
	}

	#[test]
	fn decode_packed_u64() {
		assert_eq!(SteamId::decode("76561198282622073"), ALPHAKEKS);
		assert_eq!(SteamId::from_u64(ALPHAKEKS_RAW), ALPHAKEKS);
	}

	#[test]
	fn decode_garbage_is_invalid() {
		assert_eq!(SteamId::decode(""), SteamId::INVALID);
		assert_eq!(SteamId::decode("0"), SteamId::INVALID);
		assert_eq!(SteamId::decode("foobar"), SteamId::INVALID);
		assert_eq!(SteamId::decode("STEAM_1:2:4"), SteamId::INVALID);
		assert_eq!(SteamId::decode("[Z:1:4]"), SteamId::INVALID);
		// 2^64, overflows the packed representation
		assert_eq!(SteamId::decode("18446744073709551616"), SteamId::INVALID);
	}

	#[test]
	fn parse_steam2_works() {
		assert_eq!(SteamId::parse_steam2("STEAM_1:1:161178172"), Ok(ALPHAKEKS));
	}

	#[test]
	fn parse_steam2_coerces_universe_zero() {
		let steam_id = SteamId::decode("STEAM_0:0:4");

		assert_eq!(steam_id.universe(), Universe::Public);
		assert_eq!(steam_id.account_id(), 8_u32);
		assert_eq!(steam_id.as_steam2(), "STEAM_1:0:4");
		assert_eq!(steam_id.as_steam2_legacy(), "STEAM_0:0:4");
	}

	#[test]
	fn parse_steam2_rejects_malformed_input() {
		assert!(matches!(
			SteamId::parse_steam2("1:1:161178172"),
			Err(ParseSteam2Error::MissingPrefix),
		));

		assert!(matches!(
			SteamId::parse_steam2("STEAM_:1:161178172"),
			Err(ParseSteam2Error::MissingUniverse),
		));

		assert!(matches!(
			SteamId::parse_steam2("STEAM_5:1:161178172"),
			Err(ParseSteam2Error::InvalidUniverse { actual: "5" }),
		));

		assert!(matches!(
			SteamId::parse_steam2("STEAM_1:3:161178172"),
			Err(ParseSteam2Error::InvalidY { actual: "3" }),
		));

		assert!(matches!(
			SteamId::parse_steam2("STEAM_1:0:"),
			Err(ParseSteam2Error::MissingAccountNumber),
		));

		assert!(matches!(
			SteamId::parse_steam2("STEAM_1:0:foobar"),
			Err(ParseSteam2Error::InvalidAccountNumber { actual: "foobar", .. }),
		));

		assert!(matches!(
			SteamId::parse_steam2("STEAM_1:0:99999999999"),
			Err(ParseSteam2Error::OutOfRange),
		));
	}

	#[test]
	fn parse_steam3_individual() {
		let steam_id = SteamId::decode("[U:1:322356345]");

		assert_eq!(steam_id, ALPHAKEKS);
		assert_eq!(steam_id.as_steam3(), "[U:1:322356345]");
	}

	#[test]
	fn parse_steam3_clan() {
		// from the reference docs: [g:1:4] is clan number 4
		let steam_id = SteamId::decode("[g:1:4]");

		assert_eq!(steam_id.as_u64(), 103582791429521412_u64);
		assert_eq!(steam_id.account_type(), AccountType::Clan);
		assert_eq!(steam_id.instance(), 0_u32);
		assert_eq!(steam_id.as_steam3(), "[g:1:4]");
	}

	#[test]
	fn parse_steam3_game_servers() {
		let game_server = SteamId::decode("[G:1:31]");

		assert_eq!(game_server.account_type(), AccountType::GameServer);
		assert_eq!(game_server.instance(), 1_u32);
		assert_eq!(game_server.as_steam3(), "[G:1:31]");

		let anonymous = SteamId::decode("[A:1:123:7]");

		assert_eq!(anonymous.account_type(), AccountType::AnonGameServer);
		assert_eq!(anonymous.instance(), 7_u32);
		assert_eq!(anonymous.as_steam3(), "[A:1:123:7]");
	}

	#[test]
	fn parse_steam3_chat_kinds() {
		let plain = SteamId::decode("[T:1:50]");

		assert_eq!(plain.account_type(), AccountType::Chat);
		assert_eq!(plain.instance(), 0_u32);
		assert_eq!(plain.as_steam3(), "[T:1:50]");

		let lobby = SteamId::decode("[L:1:50]");

		assert_eq!(lobby.account_type(), AccountType::Chat);
		assert_eq!(lobby.instance(), InstanceFlag::Lobby.bit());
		assert_eq!(lobby.as_steam3(), "[L:1:50]");

		let clan = SteamId::decode("[c:1:50]");

		assert_eq!(clan.account_type(), AccountType::Chat);
		assert_eq!(clan.instance(), InstanceFlag::Clan.bit());
		assert_eq!(clan.as_steam3(), "[c:1:50]");
	}

	#[test]
	fn parse_steam3_lowercase_i_alias() {
		let steam_id = SteamId::decode("[i:1:4]");

		assert_eq!(steam_id.account_type(), AccountType::Invalid);
		assert_eq!(steam_id.account_id(), 4_u32);
	}

	#[test]
	fn parse_steam3_rejects_malformed_input() {
		assert!(matches!(
			SteamId::parse_steam3("U:1:4"),
			Err(ParseSteam3Error::MissingBrackets),
		));

		assert!(matches!(
			SteamId::parse_steam3("[UU:1:4]"),
			Err(ParseSteam3Error::InvalidAccountType { actual: "UU" }),
		));

		assert!(matches!(
			SteamId::parse_steam3("[U:5:4]"),
			Err(ParseSteam3Error::InvalidUniverse { actual: "5" }),
		));

		assert!(matches!(
			SteamId::parse_steam3("[U:1:12345678901]"),
			Err(ParseSteam3Error::InvalidAccountId { actual: "12345678901" }),
		));

		assert!(matches!(
			SteamId::parse_steam3("[U:1:4294967296]"),
			Err(ParseSteam3Error::AccountIdOutOfRange { actual: "4294967296" }),
		));

		assert!(matches!(
			SteamId::parse_steam3("[U:1:4:abc]"),
			Err(ParseSteam3Error::InvalidInstance { actual: "abc", .. }),
		));
	}

	#[test]
	fn steam3_round_trips() {
		for text in ["[U:1:322356345]", "[g:1:4]", "[G:1:31]", "[A:1:123:7]", "[M:2:99:3]", "[T:1:50]", "[L:1:50]", "[c:1:50]"] {
			let steam_id = SteamId::decode(text);

			assert_eq!(SteamId::decode(&steam_id.as_steam3()), steam_id, "{text}");
		}
	}

	#[test]
	fn steam2_round_trips() {
		let steam_id = SteamId::decode("STEAM_1:1:161178172");

		assert_eq!(SteamId::decode(&steam_id.as_steam2()), steam_id);
	}

	#[test]
	fn packed_round_trips() {
		assert_eq!(SteamId::from_u64(ALPHAKEKS.as_u64()), ALPHAKEKS);
	}

	#[test]
	fn individual_instance_suffix() {
		let steam_id = SteamId::from_parts(1234, AccountType::Individual, Universe::Public, 2)
			.expect("instance fits in 20 bits");

		assert_eq!(steam_id.as_steam3(), "[U:1:1234:2]");
	}

	#[test]
	fn from_parts_rejects_oversized_instance() {
		assert_eq!(
			SteamId::from_parts(1234, AccountType::Individual, Universe::Public, 0x10_0000),
			Err(InstanceOutOfRange { instance: 0x10_0000 }),
		);
	}

	#[test]
	fn community_url_works() {
		assert_eq!(
			ALPHAKEKS.community_url().as_deref(),
			Some("https://steamcommunity.com/profiles/76561198282622073"),
		);

		let clan = SteamId::decode("[g:1:4]");

		assert_eq!(
			clan.community_url().as_deref(),
			Some("https://steamcommunity.com/gid/103582791429521412"),
		);

		let chat = SteamId::decode("[T:1:50]");

		assert_eq!(chat.community_url(), None);
	}

	#[test]
	fn is_valid_works() {
		assert!(ALPHAKEKS.is_valid());
		assert!(!SteamId::INVALID.is_valid());

		// type >= Max
		let max_type = SteamId::from_parts(1, AccountType::Max, Universe::Public, 0)
			.expect("instance fits in 20 bits");
		assert!(!max_type.is_valid());

		// universe >= Max
		let max_universe = SteamId::from_parts(1, AccountType::Individual, Universe::Max, 1)
			.expect("instance fits in 20 bits");
		assert!(!max_universe.is_valid());

		// individual accounts require a nonzero id and instance <= 4
		let individual = SteamId::from_parts(1, AccountType::Individual, Universe::Public, 5)
			.expect("instance fits in 20 bits");
		assert!(!individual.is_valid());

		// clans require instance 0
		let clan = SteamId::from_parts(4, AccountType::Clan, Universe::Public, 1)
			.expect("instance fits in 20 bits");
		assert!(!clan.is_valid());

		// anonymous game servers require id or instance to be nonzero
		let anon = SteamId::from_parts(0, AccountType::AnonGameServer, Universe::Public, 0)
			.expect("instance fits in 20 bits");
		assert!(!anon.is_valid());

		let anon = SteamId::from_parts(0, AccountType::AnonGameServer, Universe::Public, 1)
			.expect("instance fits in 20 bits");
		assert!(anon.is_valid());
	}

	#[test]
	fn from_str_is_strict() {
		assert_eq!("76561198282622073".parse::<SteamId>(), Ok(ALPHAKEKS));
		assert_eq!("[U:1:322356345]".parse::<SteamId>(), Ok(ALPHAKEKS));

		assert_eq!("0".parse::<SteamId>(), Err(ParseSteamIdError::IsZero));
		assert_eq!(
			"foobar".parse::<SteamId>(),
			Err(ParseSteamIdError::UnrecognizedFormat),
		);
	}

	#[test]
	fn display_works() {
		assert_eq!(format!("{ALPHAKEKS}"), "STEAM_1:1:161178172");
		assert_eq!(format!("{ALPHAKEKS:#}"), "[U:1:322356345]");
	}
}
