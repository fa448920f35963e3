//! Display helpers

/// Leading characters kept by [`truncate_address`]
pub const TRUNCATE_PREFIX: usize = 6;

/// Trailing characters kept by [`truncate_address`]
pub const TRUNCATE_SUFFIX: usize = 5;

/// Shorten an address or hash to `0x1234…abcde`
///
/// Values too short to benefit are returned unchanged.
pub fn truncate_address(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= TRUNCATE_PREFIX + TRUNCATE_SUFFIX {
        return value.to_string();
    }

    let head: String = chars[..TRUNCATE_PREFIX].iter().collect();
    let tail: String = chars[chars.len() - TRUNCATE_SUFFIX..].iter().collect();
    format!("{}…{}", head, tail)
}
