//! Top-level partition of Steam's identifier space.

use std::str::FromStr;

use crate::UNIVERSE_SHIFT;

/// The universe a SteamID belongs to.
///
/// See: <https://developer.valvesoftware.com/wiki/SteamID#Universes_Available_for_Steam_Accounts>
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Universe {
	/// Not a real universe.
	Invalid = 0,

	/// The production Steam universe.
	Public = 1,

	/// The beta universe.
	Beta = 2,

	/// Valve-internal.
	Internal = 3,

	/// Developer universe.
	Dev = 4,

	/// Upper bound marker, not a real universe.
	Max = 6,
}

/// Error type for conversions into [`Universe`].
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown universe")]
pub struct UnknownUniverse;

impl Universe {
	/// Extracts the universe bits from a packed 64-bit SteamID.
	///
	/// Bit patterns without a known meaning fold to [`Universe::Invalid`].
	pub const fn from_bits(bits: u64) -> Self {
		match bits >> UNIVERSE_SHIFT {
			1 => Self::Public,
			2 => Self::Beta,
			3 => Self::Internal,
			4 => Self::Dev,
			6 => Self::Max,
			_ => Self::Invalid,
		}
	}
}

impl From<Universe> for u8 {
	fn from(universe: Universe) -> Self {
		universe as u8
	}
}

impl TryFrom<u8> for Universe {
	type Error = UnknownUniverse;

	fn try_from(value: u8) -> Result<Self, Self::Error> {
		match value {
			0 => Ok(Self::Invalid),
			1 => Ok(Self::Public),
			2 => Ok(Self::Beta),
			3 => Ok(Self::Internal),
			4 => Ok(Self::Dev),
			6 => Ok(Self::Max),
			_ => Err(UnknownUniverse),
		}
	}
}

impl FromStr for Universe {
	type Err = UnknownUniverse;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"invalid" | "Invalid" => Ok(Self::Invalid),
			"public" | "Public" => Ok(Self::Public),
			"beta" | "Beta" => Ok(Self::Beta),
			"internal" | "Internal" => Ok(Self::Internal),
			"dev" | "Dev" => Ok(Self::Dev),
			"max" | "Max" => Ok(Self::Max),
			_ => Err(UnknownUniverse),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_bits_folds_unknown_patterns() {
		// universe 5 ("RC") does not exist anymore
		assert_eq!(Universe::from_bits(5_u64 << 56), Universe::Invalid);
		assert_eq!(Universe::from_bits(7_u64 << 56), Universe::Invalid);
		assert_eq!(Universe::from_bits(1_u64 << 56), Universe::Public);
	}

	#[test]
	fn from_str_accepts_names() {
		assert_eq!("Public".parse::<Universe>(), Ok(Universe::Public));
		assert_eq!("dev".parse::<Universe>(), Ok(Universe::Dev));
		assert_eq!("bogus".parse::<Universe>(), Err(UnknownUniverse));
	}
}
