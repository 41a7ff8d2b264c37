/// Placeholder run inserted between the visible head and tail of a secret.
pub const MASK_FILL: &str = "************";

const HEAD_LEN: usize = 3;
const TAIL_LEN: usize = 4;

/// Display-safe form of a credential: first 3 chars, 12 `*`, last 4 chars.
///
/// Keys shorter than 7 chars are not special-cased, so head and tail overlap.
/// Slicing is by `char`, never by byte.
pub fn mask_secret(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = raw.chars().collect();
    let head: String = chars.iter().take(HEAD_LEN).collect();
    let tail: String = chars[chars.len().saturating_sub(TAIL_LEN)..].iter().collect();

    format!("{head}{MASK_FILL}{tail}")
}

/// Same as [`mask_secret`], for a key that may not be set at all.
pub fn mask_optional(raw: Option<&str>) -> String {
    raw.map(mask_secret).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_missing() {
        assert_eq!(mask_secret(""), "");
        assert_eq!(mask_optional(None), "");
        assert_eq!(mask_optional(Some("")), "");
    }

    #[test]
    fn test_regular_key() {
        assert_eq!(mask_secret("sk-abc123xyz789"), "sk-************z789");
        assert_eq!(mask_optional(Some("sk-abc123xyz789")), "sk-************z789");
    }

    #[test]
    fn test_head_and_tail_for_keys_of_seven_or_more() {
        for key in ["abcdefg", "0123456789", "sk-proj-XXXXXXXXXXXXXXXXXXXXXXXXXXXXXXXX1234"] {
            let masked = mask_secret(key);
            let expected = format!("{}{}{}", &key[..3], "*".repeat(12), &key[key.len() - 4..]);
            assert_eq!(masked, expected);
        }
    }

    #[test]
    fn test_short_keys_overlap() {
        assert_eq!(mask_secret("abcde"), "abc************bcde");
        assert_eq!(mask_secret("ab"), "ab************ab");
    }

    #[test]
    fn test_multibyte_does_not_panic() {
        assert_eq!(mask_secret("密钥ab"), "密钥a************密钥ab");
        assert_eq!(mask_secret("ключ-12345678"), "клю************5678");
    }
}
