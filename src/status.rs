//! The `status` console output parser.
//!
//! Player lines look like this:
//!
//! ```text
//! #     33 "alice"             [U:1:11111]         05:13       62    0 active
//! ```
//!
//! i.e. `# <userid> "<name>" <steamid> <connected> [ping loss state]`, where
//! the name may contain any character, including further `"` quotes.

use crate::player::Player;

/// Parses the verbatim output of a server console `status` command.
///
/// Lines that do not match the player line pattern are skipped, as are bot
/// entries (bots carry no Steam identifier); a malformed line never aborts
/// the whole parse. The result is sorted ascending by user id, with ties
/// keeping their input order.
///
/// # Examples
///
/// ```
/// use tf2_status::parse_status;
///
/// let players = parse_status("#  3 \"alice\" [U:1:11111] 05:13 62 0 active\n#  1 \"bob\" BOT active\n");
///
/// assert_eq!(players.len(), 1);
/// assert_eq!(players[0].name, "alice");
/// ```
pub fn parse_status(input: &str) -> Vec<Player> {
	let mut players = input.lines().filter_map(parse_line).collect::<Vec<_>>();

	// stable sort, ties keep their input order
	players.sort_by_key(|player| player.user_id);

	players
}

/// Parses a single line, returning [`None`] for anything that is not a
/// player entry.
fn parse_line(line: &str) -> Option<Player> {
	if !line.starts_with('#') {
		return None;
	}

	let Some((user_id, name, steam_id, connected)) = match_line(line) else {
		tracing::debug!(line, "skipping unparsable status line");
		return None;
	};

	// Bots have no Steam identifier and are excluded, not an error.
	if steam_id == "BOT" {
		tracing::trace!(user_id, name, "skipping bot entry");
		return None;
	}

	Some(Player::new(user_id, name, steam_id, connected))
}

/// Matches `^#\s+<userid>\s+"<name>"\s+<steamid>\s+<other>$` and extracts
/// the first whitespace-delimited token of `other` as the connected
/// duration. Trailing tokens (ping, loss, state) are discarded.
fn match_line(line: &str) -> Option<(u32, &str, &str, &str)> {
	let rest = strip_whitespace(line.strip_prefix('#')?)?;

	let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
	let user_id = rest[..digits].parse::<u32>().ok()?;

	let rest = strip_whitespace(&rest[digits..])?;
	let body = rest.strip_prefix('"')?;

	let (name, steam_id, connected) = split_quoted(body)?;

	Some((user_id, name, steam_id, connected))
}

/// Splits `<name>" <steamid> <other>` at the closing quote.
///
/// The name is captured greedily: of all quotes in the line, the rightmost
/// one that still leaves a well-formed tail wins, so names containing `"`
/// survive intact.
fn split_quoted(body: &str) -> Option<(&str, &str, &str)> {
	let mut end = body.len();

	while let Some(close) = body[..end].rfind('"') {
		if close > 0 {
			if let Some((steam_id, connected)) = match_tail(&body[close + 1..]) {
				return Some((&body[..close], steam_id, connected));
			}
		}

		end = close;
	}

	None
}

/// Matches `^\s+<steamid>\s+<other>$` after the closing quote and extracts
/// the first token of `other`.
fn match_tail(tail: &str) -> Option<(&str, &str)> {
	let tail = strip_whitespace(tail)?;
	let split = tail.find(char::is_whitespace)?;
	let (steam_id, other) = tail.split_at(split);

	// `other` starts at the separating whitespace; the pattern requires at
	// least one further character after it.
	let mut chars = other.chars();
	chars.next();
	chars.next()?;

	Some((steam_id, other.split_whitespace().next().unwrap_or("")))
}

/// Strips at least one leading whitespace character, or fails.
fn strip_whitespace(value: &str) -> Option<&str> {
	let trimmed = value.trim_start();

	(trimmed.len() < value.len()).then_some(trimmed)
}
