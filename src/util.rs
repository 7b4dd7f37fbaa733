use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// Same set as JS encodeURIComponent: everything except alphanumerics and
// - _ . ! ~ * ' ( ) gets percent-encoded.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_query_component(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Browse link pre-filled with a title search, e.g. `/browse?q=Red%20Wallet`.
pub fn browse_search_url(title: &str) -> String {
    format!("/browse?q={}", encode_query_component(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_are_percent_encoded() {
        assert_eq!(browse_search_url("Red Wallet"), "/browse?q=Red%20Wallet");
    }

    #[test]
    fn reserved_characters_cannot_split_the_query() {
        assert_eq!(
            encode_query_component("bag & keys?x=1#frag"),
            "bag%20%26%20keys%3Fx%3D1%23frag"
        );
    }

    #[test]
    fn unreserved_marks_pass_through() {
        assert_eq!(
            encode_query_component("it's-a_B4g.(new)!~*"),
            "it's-a_B4g.(new)!~*"
        );
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(encode_query_component("clé"), "cl%C3%A9");
    }
}
