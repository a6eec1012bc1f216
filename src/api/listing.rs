//! Directory listing parsing.
//!
//! Static file servers answer `GET /songs/{folder}/` with an HTML index whose
//! anchors point at the files. We walk the DOM in document order and keep the
//! anchors that name audio files.

use crate::api::models::{derive_track_name, Track};
use crate::error::LoadError;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::collections::HashSet;

/// Extracts the playable tracks from a listing page.
///
/// `listing_url` is the URL the page was fetched from; relative hrefs are
/// resolved against it so `Track::file` can be handed straight to the media
/// element.
pub fn parse_listing(
    html: &str,
    listing_url: &str,
    extension: &str,
) -> Result<Vec<Track>, LoadError> {
    let dom = parse_document(RcDom::default(), Default::default())
        .from_utf8()
        .read_from(&mut html.as_bytes())
        .map_err(|e| LoadError::Listing(e.to_string()))?;

    let mut hrefs = Vec::new();
    collect_hrefs(&dom.document, &mut hrefs);

    let mut seen = HashSet::new();
    let tracks = hrefs
        .into_iter()
        .filter(|href| href.ends_with(extension))
        .filter_map(|href| {
            let file = resolve_href(&href, listing_url);
            if !seen.insert(file.clone()) {
                return None;
            }
            Some(Track {
                name: derive_track_name(&href, extension),
                file,
            })
        })
        .collect();

    Ok(tracks)
}

fn collect_hrefs(handle: &Handle, out: &mut Vec<String>) {
    if let NodeData::Element { name, attrs, .. } = &handle.data {
        if name.local.as_ref() == "a" {
            let href = attrs
                .borrow()
                .iter()
                .find(|a| a.name.local.as_ref() == "href")
                .map(|a| a.value.to_string());
            if let Some(href) = href.filter(|h| !h.trim().is_empty()) {
                out.push(href.trim().to_string());
            }
        }
    }

    for child in handle.children.borrow().iter() {
        collect_hrefs(child, out);
    }
}

fn resolve_href(href: &str, listing_url: &str) -> String {
    if href.contains("://") || href.starts_with("//") {
        return href.to_string();
    }

    if href.starts_with('/') {
        return format!("{}{}", origin_of(listing_url), href);
    }

    let href = href.trim_start_matches("./");
    if listing_url.ends_with('/') {
        format!("{listing_url}{href}")
    } else {
        format!("{listing_url}/{href}")
    }
}

/// `scheme://host[:port]` of an absolute URL, empty for a bare path.
fn origin_of(url: &str) -> &str {
    let Some(scheme_end) = url.find("://") else {
        return "";
    };
    let host_start = scheme_end + 3;
    match url[host_start..].find('/') {
        Some(path_start) => &url[..host_start + path_start],
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = r#"<!DOCTYPE html>
<html>
<head><title>Index of /songs/copy/</title></head>
<body>
  <h1>Index of /songs/copy/</h1>
  <ul>
    <li><a href="../">../</a></li>
    <li><a href="info.json">info.json</a></li>
    <li><a href="cover.jpg">cover.jpg</a></li>
    <li><a href="Tum%20Hi%20Ho%20[320kbps].mp3">Tum Hi Ho [320kbps].mp3</a></li>
    <li><a href="/songs/copy/Kesariya.mp3">Kesariya.mp3</a></li>
    <li><a href="Notes.mp3.txt">Notes.mp3.txt</a></li>
    <li><a href="Apna%20Bana%20Le.mp3">Apna Bana Le.mp3</a></li>
  </ul>
</body>
</html>"#;

    #[test]
    fn keeps_audio_entries_in_document_order() {
        let tracks = parse_listing(LISTING, "/songs/copy/", ".mp3").unwrap();
        let names: Vec<&str> = tracks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Tum Hi Ho", "Kesariya", "Apna Bana Le"]);
    }

    #[test]
    fn resolves_relative_hrefs_against_listing() {
        let tracks = parse_listing(LISTING, "/songs/copy/", ".mp3").unwrap();
        assert_eq!(tracks[0].file, "/songs/copy/Tum%20Hi%20Ho%20[320kbps].mp3");
        assert_eq!(tracks[1].file, "/songs/copy/Kesariya.mp3");
    }

    #[test]
    fn root_relative_hrefs_take_the_listing_origin() {
        let tracks =
            parse_listing(LISTING, "http://127.0.0.1:5500/songs/copy/", ".mp3").unwrap();
        assert_eq!(tracks[1].file, "http://127.0.0.1:5500/songs/copy/Kesariya.mp3");
        assert_eq!(
            tracks[2].file,
            "http://127.0.0.1:5500/songs/copy/Apna%20Bana%20Le.mp3"
        );
    }

    #[test]
    fn duplicate_files_are_listed_once() {
        let html = r#"<a href="a.mp3"><img src="icon.png"></a><a href="a.mp3">a.mp3</a><a href="b.mp3">b</a>"#;
        let tracks = parse_listing(html, "/songs/x/", ".mp3").unwrap();
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].name, "a");
        assert_eq!(tracks[1].name, "b");
    }

    #[test]
    fn page_without_audio_yields_empty_queue() {
        let tracks = parse_listing("<html><body>Not found</body></html>", "/songs/x/", ".mp3")
            .unwrap();
        assert!(tracks.is_empty());
    }

    #[test]
    fn origin_handles_bare_hosts_and_paths() {
        assert_eq!(origin_of("http://host:1/a/b"), "http://host:1");
        assert_eq!(origin_of("https://host"), "https://host");
        assert_eq!(origin_of("/songs/x/"), "");
    }
}
