//! [`serde`] support for [`SteamId`].

use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::SteamId;

/// By default [`SteamId`] serializes in the Steam2 format.
///
/// If you require a different format, use the
/// `#[serde(serialize_with = "…")]` attribute with one of the
/// `SteamId::serialize_*` functions.
impl Serialize for SteamId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.serialize_steam2(serializer)
	}
}

/// The [`Deserialize`] implementation is a best-effort attempt covering
/// integers and every textual format [`SteamId::decode()`] accepts.
impl<'de> Deserialize<'de> for SteamId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		struct CatchallVisitor;

		impl de::Visitor<'_> for CatchallVisitor {
			type Value = SteamId;

			fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
				fmt.write_str("a SteamID")
			}

			fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				if value == 0 {
					return Err(E::invalid_value(de::Unexpected::Unsigned(0), &self));
				}

				Ok(SteamId::from_u64(value))
			}

			fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
			where
				E: de::Error,
			{
				value.parse::<SteamId>().map_err(E::custom)
			}
		}

		deserializer.deserialize_any(CatchallVisitor)
	}
}

impl SteamId {
	/// Serializes using the Steam2 format.
	pub fn serialize_steam2<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		format_args!("{self}").serialize(serializer)
	}

	/// Serializes using the Steam3 format.
	pub fn serialize_steam3<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		format_args!("{self:#}").serialize(serializer)
	}

	/// Serializes using the packed 64-bit format.
	pub fn serialize_u64<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		self.as_u64().serialize(serializer)
	}

	/// Serializes using a stringified version of the packed 64-bit format.
	pub fn serialize_u64_stringified<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		format_args!("{}", self.as_u64()).serialize(serializer)
	}
}
