// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Cookie header parsing.

/// Return the value of `name` from a `Cookie` header such as `a=1; csrftoken=xyz`.
///
/// Surrounding double quotes are stripped. Empty values count as absent.
pub fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().trim_matches('"'))
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::cookie_value;

    #[test]
    fn finds_named_cookie_among_others() {
        let header = "sessionid=s3cr3t; csrftoken=abc123; theme=dark";
        assert_eq!(cookie_value(header, "csrftoken"), Some("abc123"));
        assert_eq!(cookie_value(header, "sessionid"), Some("s3cr3t"));
    }

    #[test]
    fn does_not_match_on_prefix() {
        assert_eq!(cookie_value("xcsrftoken=nope", "csrftoken"), None);
    }

    #[test]
    fn strips_quotes_and_ignores_empty_values() {
        assert_eq!(cookie_value("csrftoken=\"q\"", "csrftoken"), Some("q"));
        assert_eq!(cookie_value("csrftoken=", "csrftoken"), None);
        assert_eq!(cookie_value("", "csrftoken"), None);
    }
}
