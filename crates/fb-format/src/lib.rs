//! # fb-format
//!
//! Stateless helpers shared by the client's views: link sniffing (images,
//! videos, magnet links) and compact vote/subscriber counts.

use once_cell::sync::Lazy;
use regex::Regex;

static IMAGE_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^(?:https?:)?//[^"'\s]+\.(?:jpg|jpeg|gif|png|svg|webp|avif)(?:[?#][^"'\s]*)?$"#)
        .expect("image pattern compiles")
});

static VIDEO_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)^(?:https?:)?//[^"'\s]+\.(?:mp4|webm|mov)(?:[?#][^"'\s]*)?$"#)
        .expect("video pattern compiles")
});

static MAGNET_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^magnet:\?xt=urn:btih:[0-9a-fA-F]{40,}.*$").expect("magnet pattern compiles")
});

static WEB_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^https?://[^\s/$.?#][^\s]*$").expect("url pattern compiles")
});

/// Whether `url` points at an image the client can inline.
pub fn is_image(url: &str) -> bool {
    IMAGE_URL.is_match(url)
}

/// Whether `url` points at a video the client can embed.
pub fn is_video(url: &str) -> bool {
    VIDEO_URL.is_match(url)
}

/// Whether `text` is a BitTorrent magnet link with an info hash.
pub fn is_magnet_link(text: &str) -> bool {
    MAGNET_LINK.is_match(text)
}

/// Whether `text` is an absolute http(s) URL.
pub fn is_valid_url(text: &str) -> bool {
    WEB_URL.is_match(text)
}

const SI_UNITS: [(i64, &str); 4] = [
    (1_000_000_000_000, "T"),
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// Compact count for scores and subscriber numbers: `1200` -> `"1.2K"`.
///
/// One decimal at most, truncated rather than rounded so a count never
/// reads as the next unit up.
pub fn num_to_si(n: i64) -> String {
    let sign = if n < 0 { "-" } else { "" };
    let abs = n.unsigned_abs();

    for (unit, suffix) in SI_UNITS {
        let unit = unit as u64;
        if abs >= unit {
            let whole = abs / unit;
            let tenth = (abs % unit) * 10 / unit;
            return if tenth == 0 || whole >= 100 {
                format!("{sign}{whole}{suffix}")
            } else {
                format!("{sign}{whole}.{tenth}{suffix}")
            };
        }
    }

    n.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_links() {
        assert!(is_image("https://img.example.org/pictrs/image/abc.png"));
        assert!(is_image("http://example.org/a/b.JPEG"));
        assert!(is_image("//cdn.example.org/x.webp?format=webp&thumbnail=256"));
        assert!(!is_image("https://example.org/page.html"));
        assert!(!is_image("https://example.org/png"));
        assert!(!is_image("not a url.png"));
    }

    #[test]
    fn test_video_links() {
        assert!(is_video("https://v.example.org/clip.mp4"));
        assert!(is_video("https://v.example.org/clip.WebM#t=10"));
        assert!(!is_video("https://v.example.org/clip.mp4.html"));
    }

    #[test]
    fn test_magnet_links() {
        let hash = "c9e15763f722f23e98a29decdfae341b98d53056";
        assert!(is_magnet_link(&format!("magnet:?xt=urn:btih:{hash}&dn=debian")));
        assert!(!is_magnet_link("magnet:?xt=urn:btih:tooshort"));
        assert!(!is_magnet_link(&format!("see magnet:?xt=urn:btih:{hash}")));
    }

    #[test]
    fn test_urls() {
        assert!(is_valid_url("https://lemmy.example/c/rust"));
        assert!(is_valid_url("HTTP://example.org"));
        assert!(!is_valid_url("ftp://example.org"));
        assert!(!is_valid_url("https://"));
        assert!(!is_valid_url("https://exa mple.org"));
    }

    #[test]
    fn test_num_to_si() {
        assert_eq!(num_to_si(0), "0");
        assert_eq!(num_to_si(999), "999");
        assert_eq!(num_to_si(1_000), "1K");
        assert_eq!(num_to_si(1_250), "1.2K");
        assert_eq!(num_to_si(999_999), "999K");
        assert_eq!(num_to_si(3_000_000), "3M");
        assert_eq!(num_to_si(45_600_000_000), "45.6B");
        assert_eq!(num_to_si(-1_500), "-1.5K");
    }
}
