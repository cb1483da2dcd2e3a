/// Pull the 11-character video id out of an arbitrary URL string.
///
/// Accepts watch-page URLs (`?v=<id>`), short links (`youtu.be/<id>`), and
/// embed/shorts paths. The id must be exactly 11 characters from
/// `[A-Za-z0-9_-]`; a longer run is rejected by the right boundary rather
/// than truncated to its first 11 characters.
pub fn extract_video_id(url: &str) -> Option<String> {
    let re = regex::Regex::new(r"(?:v=|/)([A-Za-z0-9_-]{11})(?:[^A-Za-z0-9_-]|$)")
        .expect("valid regex");
    re.captures(url).map(|caps| caps[1].to_string())
}
