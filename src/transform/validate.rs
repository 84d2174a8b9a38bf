use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Accepted link shapes: youtube.com/watch?v=, youtube.com/v/,
    // youtube.com/embed/ and youtu.be/, each followed by an 11-character
    // video id. Anything after the id must be introduced by '?', '&'
    // or '#', so a 12-character id never matches.
    static ref YOUTUBE_URL: Regex = Regex::new(
        r"^(https?://)?(www\.)?(youtube\.com/(watch\?v=|v/|embed/)|youtu\.be/)[A-Za-z0-9_-]{11}([?&#].*)?$"
    )
    .expect("youtube url pattern");
    static ref VIDEO_ID: Regex = Regex::new(
        r"(?:youtu\.be/|youtube\.com/(?:watch\?v=|v/|embed/))([A-Za-z0-9_-]{11})"
    )
    .expect("video id pattern");
}

/// Whether `url` is a well-formed YouTube video link. The empty string
/// is not.
pub fn is_valid_youtube_url(url: &str) -> bool {
    YOUTUBE_URL.is_match(url)
}

/// The 11-character video id of a YouTube link, when there is one.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_usual_link_shapes() {
        for url in [
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "http://youtube.com/watch?v=dQw4w9WgXcQ",
            "youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgXcQ",
            "https://www.youtube.com/embed/dQw4w9WgXcQ",
            "https://www.youtube.com/v/dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ?t=42",
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123",
            "https://youtu.be/dQw4w9WgXcQ#start",
        ] {
            assert!(is_valid_youtube_url(url), "should accept {url}");
        }
    }

    #[test]
    fn rejects_everything_else() {
        for url in [
            "",
            "not a url",
            "https://vimeo.com/12345",
            "https://www.youtube.com/",
            "https://www.youtube.com/watch?v=short",
            // 12-character id
            "https://youtu.be/dQw4w9WgXcQQ",
            "https://youtu.be/dQw4w9WgXc",
            "ftp://youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtube.com/playlist?list=PL123",
        ] {
            assert!(!is_valid_youtube_url(url), "should reject {url}");
        }
    }

    #[test]
    fn extracts_the_exact_id() {
        assert_eq!(
            extract_video_id("https://youtu.be/dQw4w9WgXcQ"),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            extract_video_id("https://www.youtube.com/watch?v=aBcD3fGh1jK&list=x"),
            Some("aBcD3fGh1jK")
        );
        assert_eq!(
            extract_video_id("youtube.com/embed/0123456789_"),
            Some("0123456789_")
        );
        assert_eq!(extract_video_id("https://example.com/x"), None);
        assert_eq!(extract_video_id(""), None);
    }
}
