//! [`rand`] support for [`SteamId`].

use rand::Rng;
use rand::distributions::{Distribution, Standard};

use crate::SteamId;

impl Distribution<SteamId> for Standard {
	fn sample<R>(&self, rng: &mut R) -> SteamId
	where
		R: Rng + ?Sized,
	{
		SteamId::from_account_id(rng.gen_range(1..=u32::MAX))
	}
}
