/// Decodes `%XX` escapes and `+` as space. A `%` not followed by two hex
/// digits is kept literally; invalid UTF-8 is replaced, not rejected.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut rest = bytes;
    while let Some((&b, tail)) = rest.split_first() {
        let escaped = match b {
            b'%' => tail.get(..2)
                .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                .and_then(|hex| std::str::from_utf8(hex).ok())
                .and_then(|hex| u8::from_str_radix(hex, 16).ok()),
            _ => None,
        };
        match (b, escaped) {
            (_, Some(decoded)) => {
                out.push(decoded);
                rest = &tail[2..];
            }
            (b'+', None) => {
                out.push(b' ');
                rest = tail;
            }
            (other, None) => {
                out.push(other);
                rest = tail;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parses `key=value&key2=value2` into a `Vec` of `(key, value)` pairs.
/// Empty segments (e.g. from a trailing `&`) are skipped.
pub fn parse_query(query: &str) -> Vec<(String, String)> {
    query.split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let mut it = pair.splitn(2, '=');
            let k = it.next().unwrap_or("");
            let v = it.next().unwrap_or("");
            (url_decode(k), url_decode(v))
        })
        .collect()
}

/// Looks up a key in parsed query pairs, returning the first value found.
pub fn query_get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

/// Splits a request URL into its path and (possibly empty) query string.
pub fn split_url(url: &str) -> (&str, &str) {
    match url.find('?') {
        Some(pos) => (&url[..pos], &url[pos + 1..]),
        None      => (url, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_and_plus() {
        assert_eq!(url_decode("a+b%2Dc"), "a b-c");
        assert_eq!(url_decode("%2"), "%2");
        assert_eq!(url_decode("100%"), "100%");
        assert_eq!(url_decode("%zz1"), "%zz1");
        assert_eq!(url_decode("%+1"), "% 1");
    }

    #[test]
    fn decodes_multibyte_utf8() {
        assert_eq!(url_decode("%C3%A9t%C3%A9"), "été");
    }

    #[test]
    fn parses_pairs_and_skips_empty_segments() {
        let pairs = parse_query("slope=-1.5&&flag&x=%31");
        assert_eq!(query_get(&pairs, "slope"), Some("-1.5"));
        assert_eq!(query_get(&pairs, "flag"), Some(""));
        assert_eq!(query_get(&pairs, "x"), Some("1"));
        assert_eq!(query_get(&pairs, "missing"), None);
    }

    #[test]
    fn splits_url() {
        assert_eq!(split_url("/api/snapshot?slope=2"), ("/api/snapshot", "slope=2"));
        assert_eq!(split_url("/api/curve"), ("/api/curve", ""));
    }
}
