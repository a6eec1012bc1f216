use serde::{Deserialize, Serialize};

/// A playable entry in the queue. `file` is the identity key; `name` is
/// display-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Track {
    pub file: String,
    pub name: String,
}

impl Track {
    pub fn new(file: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            name: name.into(),
        }
    }
}

/// Wire shape of a folder's `info.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderInfo {
    pub title: String,
    pub image: String,
    #[serde(default)]
    pub description: String,
}

/// One catalog card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FolderDescriptor {
    pub key: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
}

impl FolderDescriptor {
    pub fn from_info(key: impl Into<String>, info: FolderInfo) -> Self {
        Self {
            key: key.into(),
            title: info.title,
            description: info.description,
            image_url: info.image,
        }
    }
}

/// Display name for a listing href: last path segment, percent-decoded,
/// without the audio extension or any `[...]` annotations.
pub fn derive_track_name(href: &str, extension: &str) -> String {
    let segment = href.rsplit('/').next().unwrap_or(href);
    let decoded = urlencoding::decode_binary(segment.as_bytes());
    let decoded = String::from_utf8_lossy(&decoded);

    let without_ext = match decoded.find(extension) {
        Some(pos) if !extension.is_empty() => {
            format!("{}{}", &decoded[..pos], &decoded[pos + extension.len()..])
        }
        _ => decoded.to_string(),
    };

    strip_bracketed(&without_ext).trim().to_string()
}

/// Removes every `[...]` span. An unmatched `[` is kept verbatim.
fn strip_bracketed(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(open) = rest.find('[') {
        match rest[open..].find(']') {
            Some(close) => {
                out.push_str(&rest[..open]);
                rest = &rest[open + close + 1..];
            }
            None => break,
        }
    }

    out.push_str(rest);
    out
}

/// `M:SS`, minutes unpadded. Non-finite or negative input reads as zero.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() && seconds > 0.0 {
        seconds
    } else {
        0.0
    };
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{}:{:02}", mins, secs)
}

pub fn time_label(current: f64, duration: f64) -> String {
    format!("{} / {}", format_time(current), format_time(duration))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_time_pads_seconds_only() {
        assert_eq!(format_time(65.0), "1:05");
        assert_eq!(format_time(5.0), "0:05");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(600.9), "10:00");
        assert_eq!(format_time(59.99), "0:59");
    }

    #[test]
    fn format_time_treats_unknown_duration_as_zero() {
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
        assert_eq!(format_time(-3.0), "0:00");
    }

    #[test]
    fn time_label_joins_both_positions() {
        assert_eq!(time_label(5.0, 185.0), "0:05 / 3:05");
    }

    #[test]
    fn derives_name_without_extension_or_annotations() {
        assert_eq!(derive_track_name("Song [Remix].mp3", ".mp3"), "Song");
        assert_eq!(
            derive_track_name("/songs/copy/Tum%20Hi%20Ho%20[128kbps].mp3", ".mp3"),
            "Tum Hi Ho"
        );
        assert_eq!(
            derive_track_name("[Intro] Kesariya [Official] Audio.mp3", ".mp3"),
            "Kesariya  Audio"
        );
    }

    #[test]
    fn unmatched_bracket_is_kept() {
        assert_eq!(derive_track_name("Live [Part 1.mp3", ".mp3"), "Live [Part 1");
    }

    #[test]
    fn invalid_percent_escapes_do_not_fail() {
        assert_eq!(derive_track_name("bad%FFname.mp3", ".mp3"), "bad\u{FFFD}name");
    }

    #[test]
    fn folder_info_description_is_optional() {
        let info: FolderInfo =
            serde_json::from_str(r#"{"title":"Chill","image":"cover.jpg"}"#).unwrap();
        let card = FolderDescriptor::from_info("copy", info);
        assert_eq!(card.key, "copy");
        assert_eq!(card.title, "Chill");
        assert_eq!(card.image_url, "cover.jpg");
        assert!(card.description.is_empty());
    }

    #[test]
    fn folder_info_requires_title() {
        let parsed = serde_json::from_str::<FolderInfo>(r#"{"image":"cover.jpg"}"#);
        assert!(parsed.is_err());
    }
}
