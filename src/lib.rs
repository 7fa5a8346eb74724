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

//! Structured parsing for TF2 server console `status` output.
//!
//! The `status` command of a Team Fortress 2 server prints one `#`-prefixed
//! line per connected player. [`parse_status()`] turns that raw text into an
//! ordered sequence of [`Player`] records, each carrying a decoded
//! [`SteamId`] and connection duration. Presentation concerns (tables,
//! clipboard, column configuration) are left to consumers.
//!
//! Everything in here is pure and stateless: identical input always produces
//! identical output, and no call performs I/O or touches shared state.

pub mod duration;
pub mod player;
pub mod status;

#[doc(inline)]
pub use duration::parse_duration;
#[doc(inline)]
pub use player::Player;
#[doc(inline)]
pub use status::parse_status;

pub use steam_id::{self, SteamId};
