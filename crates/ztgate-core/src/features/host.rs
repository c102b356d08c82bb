//! Hostname extraction and classification.

/// Hostname of `url`, or `None` when the string has no authority component.
///
/// The `url` crate normalises the host (lowercase, IDNA, canonical IPv4), so
/// obfuscated numeric forms such as `http://0x7f.1/` yield `127.0.0.1`.
/// Input it rejects (out-of-range octets, bad ports, spaces in the host) falls
/// back to [`lenient_authority_host`].
pub fn hostname_of(url: &str) -> Option<String> {
    match url::Url::parse(url) {
        Ok(parsed) => parsed
            .host_str()
            .filter(|h| !h.is_empty())
            .map(str::to_string),
        Err(_) => lenient_authority_host(url),
    }
}

/// Host from a raw `scheme://authority...` string without validating it.
///
/// The authority ends at the first `/`, `?` or `#`; userinfo (up to the last
/// `@`) and any `:port` are removed and the result is lowercased.
pub fn lenient_authority_host(url: &str) -> Option<String> {
    let (scheme, rest) = url.split_once("://")?;
    if !is_scheme(scheme) {
        return None;
    }

    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, after)| after);

    let host = if host_port.starts_with('[') {
        // Bracketed IPv6 literal: keep the brackets, drop the port.
        match host_port.find(']') {
            Some(close) => &host_port[..=close],
            None => host_port,
        }
    } else {
        host_port.split(':').next().unwrap_or_default()
    };

    let host = host.trim();
    if host.is_empty() {
        None
    } else {
        Some(host.to_lowercase())
    }
}

fn is_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// True when `host` is exactly four non-empty all-digit labels separated by dots.
pub fn is_dotted_quad(host: &str) -> bool {
    let mut labels = 0;
    for label in host.split('.') {
        if label.is_empty() || !label.bytes().all(|b| b.is_ascii_digit()) {
            return false;
        }
        labels += 1;
    }
    labels == 4
}
