//! Error types for the fallible conversions.
//!
//! [`SteamId::decode()`] never returns any of these; it maps every failure
//! to [`SteamId::INVALID`]. The strict parsers and the explicit field
//! constructor do.
//!
//! [`SteamId::decode()`]: crate::SteamId::decode
//! [`SteamId::INVALID`]: crate::SteamId::INVALID

use std::num::ParseIntError;

/// Error returned from [`SteamId::from_parts()`] when the instance does not
/// fit into its 20 bits.
///
/// [`SteamId::from_parts()`]: crate::SteamId::from_parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("instance `{instance}` does not fit in 20 bits")]
pub struct InstanceOutOfRange {
	/// The rejected instance value.
	pub instance: u32,
}

/// Errors returned from [`SteamId::parse_steam2()`].
///
/// [`SteamId::parse_steam2()`]: crate::SteamId::parse_steam2
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSteam2Error<'a> {
	/// Steam2 ids all start with `STEAM_`.
	#[error("missing `STEAM_` prefix")]
	MissingPrefix,

	/// The X segment in `STEAM_X:Y:Z` was missing.
	#[error("missing universe segment")]
	MissingUniverse,

	/// The X segment in `STEAM_X:Y:Z` was not a known universe.
	#[error("universe segment should be a digit but is `{actual}`")]
	InvalidUniverse {
		/// The actual value.
		actual: &'a str,
	},

	/// The Y segment in `STEAM_X:Y:Z` was missing.
	#[error("missing Y segment")]
	MissingY,

	/// The Y segment in `STEAM_X:Y:Z` was not 0 or 1.
	#[error("Y segment should be 0 or 1 but is `{actual}`")]
	InvalidY {
		/// The actual value.
		actual: &'a str,
	},

	/// The Z segment in `STEAM_X:Y:Z` was missing.
	#[error("missing account number segment")]
	MissingAccountNumber,

	/// The Z segment in `STEAM_X:Y:Z` was not a valid integer.
	#[error("invalid account number segment: `{actual}`")]
	InvalidAccountNumber {
		/// The actual value.
		actual: &'a str,

		/// The source error we got from trying to parse the segment.
		source: ParseIntError,
	},

	/// The resulting account id would not fit in 32 bits.
	#[error("account number is out of range")]
	OutOfRange,
}

/// Errors returned from [`SteamId::parse_steam3()`].
///
/// [`SteamId::parse_steam3()`]: crate::SteamId::parse_steam3
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSteam3Error<'a> {
	/// Steam3 ids are enclosed in `[]` brackets.
	#[error("missing `[]` brackets")]
	MissingBrackets,

	/// The type character in `[C:U:ID]` was missing.
	#[error("missing account type segment")]
	MissingAccountType,

	/// The type character in `[C:U:ID]` was not part of the known table.
	#[error("unknown account type character: `{actual}`")]
	InvalidAccountType {
		/// The actual value.
		actual: &'a str,
	},

	/// The universe digit in `[C:U:ID]` was missing.
	#[error("missing universe segment")]
	MissingUniverse,

	/// The universe digit in `[C:U:ID]` was not 0-4.
	#[error("universe segment should be a digit 0-4 but is `{actual}`")]
	InvalidUniverse {
		/// The actual value.
		actual: &'a str,
	},

	/// The id segment in `[C:U:ID]` was missing.
	#[error("missing account id segment")]
	MissingAccountId,

	/// The id segment in `[C:U:ID]` was not 1-10 decimal digits.
	#[error("account id segment should be 1-10 digits but is `{actual}`")]
	InvalidAccountId {
		/// The actual value.
		actual: &'a str,
	},

	/// The id segment in `[C:U:ID]` did not fit in 32 bits.
	#[error("account id `{actual}` does not fit in 32 bits")]
	AccountIdOutOfRange {
		/// The actual value.
		actual: &'a str,
	},

	/// The instance suffix was not a valid integer.
	#[error("invalid instance segment: `{actual}`")]
	InvalidInstance {
		/// The actual value.
		actual: &'a str,

		/// The source error we got from trying to parse the segment.
		source: ParseIntError,
	},

	/// The instance suffix did not fit in 20 bits.
	#[error(transparent)]
	InstanceOutOfRange(#[from] InstanceOutOfRange),
}

/// Errors returned by [`SteamId`]'s [`FromStr`] implementation.
///
/// [`SteamId`]: crate::SteamId
/// [`FromStr`]: std::str::FromStr
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseSteamIdError {
	/// The input was numeric but zero.
	#[error("SteamID is zero")]
	IsZero,

	/// The input did not match any known format.
	#[error("unrecognized SteamID format")]
	UnrecognizedFormat,
}
