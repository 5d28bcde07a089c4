/// Parse an externally supplied player identifier.
///
/// Accepts anything `i64::from_str` accepts (an optional leading `+` included)
/// as long as the value is strictly positive. Surrounding whitespace is not
/// trimmed: `" 5"` is not an identifier.
pub fn parse_player_id(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|id| *id > 0)
}
