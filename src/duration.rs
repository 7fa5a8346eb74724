//! Connection duration parsing.

/// Sentinel for durations that could not be parsed.
///
/// Callers treat this as "unknown duration", it is never an error.
pub const UNKNOWN_DURATION: i64 = -1;

/// Parses a colon-separated duration into total seconds.
///
/// The input must consist of 1-3 all-digit groups, interpreted right to left
/// as seconds, minutes and hours. Anything else (empty groups, non-digits,
/// more than three groups, overflow) yields [`UNKNOWN_DURATION`].
///
/// # Examples
///
/// ```
/// use tf2_status::parse_duration;
///
/// assert_eq!(parse_duration("1:02:03"), 3723);
/// assert_eq!(parse_duration("02:03"), 123);
/// assert_eq!(parse_duration("5"), 5);
/// assert_eq!(parse_duration("abc"), -1);
/// ```
pub fn parse_duration(value: &str) -> i64 {
	let mut total = 0_i64;
	let mut groups = 0_u32;

	for group in value.split(':') {
		if groups == 3 || group.is_empty() || !group.bytes().all(|byte| byte.is_ascii_digit()) {
			return UNKNOWN_DURATION;
		}

		let Ok(seconds) = group.parse::<i64>() else {
			return UNKNOWN_DURATION;
		};

		total = match total.checked_mul(60).and_then(|total| total.checked_add(seconds)) {
			Some(total) => total,
			None => return UNKNOWN_DURATION,
		};

		groups += 1;
	}

	total
}
