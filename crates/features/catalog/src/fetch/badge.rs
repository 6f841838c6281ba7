//! Fallback letter badges for sites that expose no icon.
//!
//! The badge is a circular SVG carrying the first letter of the site's
//! registrable host label (first digit for IP-address hosts). Derivation is
//! deterministic per host, so re-creating an entry reuses the same file.

const BADGE_SIZE: u32 = 64;
const BADGE_FILL: &str = "#496d89";

/// Picks the badge letter for a host name.
#[must_use]
pub fn letter_for_host(host: &str) -> char {
    // IP address hosts use their first digit.
    if !host.is_empty() && host.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return host.chars().next().unwrap_or('U');
    }

    let host = host.strip_prefix("www.").unwrap_or(host);
    let labels: Vec<&str> = host.split('.').filter(|label| !label.is_empty()).collect();

    // "docs.example.com" -> "example"; single-label hosts use themselves.
    let label = if labels.len() >= 2 {
        labels[labels.len() - 2]
    } else {
        labels.first().copied().unwrap_or("")
    };

    label
        .chars()
        .find(char::is_ascii_alphanumeric)
        .map_or('U', |c| c.to_ascii_uppercase())
}

/// Renders the circular badge for a letter.
#[must_use]
pub fn render_badge_svg(letter: char) -> String {
    let center = BADGE_SIZE / 2;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{BADGE_SIZE}" height="{BADGE_SIZE}" viewBox="0 0 {BADGE_SIZE} {BADGE_SIZE}">
  <circle cx="{center}" cy="{center}" r="{center}" fill="{BADGE_FILL}"/>
  <text x="{center}" y="{center}" fill="#ffffff" font-family="sans-serif" font-size="40" font-weight="500" text-anchor="middle" dominant-baseline="central">{letter}</text>
</svg>
"#
    )
}

/// Filesystem name for a host's badge, with unsafe characters replaced.
#[must_use]
pub fn badge_filename(host: &str) -> String {
    let sanitized: String = host
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();
    format!("{sanitized}_default.svg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_hosts_use_the_registrable_label() {
        assert_eq!(letter_for_host("example.com"), 'E');
        assert_eq!(letter_for_host("docs.example.com"), 'E');
        assert_eq!(letter_for_host("www.example.com"), 'E');
        assert_eq!(letter_for_host("localhost"), 'L');
    }

    #[test]
    fn ip_hosts_use_their_first_digit() {
        assert_eq!(letter_for_host("192.168.0.1"), '1');
        assert_eq!(letter_for_host("8.8.8.8"), '8');
    }

    #[test]
    fn degenerate_hosts_fall_back_to_u() {
        assert_eq!(letter_for_host(""), 'U');
        assert_eq!(letter_for_host("..."), 'U');
    }

    #[test]
    fn badge_is_deterministic_and_contains_the_letter() {
        let a = render_badge_svg('E');
        let b = render_badge_svg('E');
        assert_eq!(a, b);
        assert!(a.contains(">E</text>"));
        assert!(a.contains("<circle"));
    }

    #[test]
    fn filenames_are_sanitized() {
        assert_eq!(badge_filename("example.com"), "example.com_default.svg");
        assert_eq!(badge_filename("host:8080"), "host_8080_default.svg");
        assert_eq!(badge_filename("a/b\\c"), "a_b_c_default.svg");
    }
}
