//! Visible-photo filtering
//!
//! Pure selection over the library: never mutates photos, preserves order.

use crate::Photo;

/// Derive the visible photo subset from album selection and search text.
///
/// A photo is included iff it matches both criteria:
/// - album: `album_id` is `None` or empty, or equals the photo's album id
/// - search: `search` is empty, or the lowercase title or any lowercase tag
///   contains the lowercase search term
pub fn filter_photos<'a>(
    photos: &'a [Photo],
    album_id: Option<&str>,
    search: &str,
) -> Vec<&'a Photo> {
    let album_id = album_id.filter(|id| !id.is_empty());
    let needle = search.to_lowercase();

    photos
        .iter()
        .filter(|photo| matches_album(photo, album_id) && matches_search(photo, &needle))
        .collect()
}

fn matches_album(photo: &Photo, album_id: Option<&str>) -> bool {
    match album_id {
        None => true,
        Some(id) => photo.album_id.as_deref() == Some(id),
    }
}

/// `needle` must already be lowercased
fn matches_search(photo: &Photo, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    photo.title.to_lowercase().contains(needle)
        || photo.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str, title: &str, tags: &[&str], album: Option<&str>) -> Photo {
        Photo {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            url: format!("img/{id}.jpg"),
            thumbnail: format!("thumbs/{id}.jpg"),
            album_id: album.map(|a| a.to_string()),
        }
    }

    fn sample() -> Vec<Photo> {
        vec![
            photo("a", "Sunset", &["beach"], Some("x")),
            photo("b", "Mountain", &["hike"], Some("y")),
        ]
    }

    fn ids(result: &[&Photo]) -> Vec<String> {
        result.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn album_selection_excludes_other_albums() {
        let photos = sample();
        assert_eq!(ids(&filter_photos(&photos, Some("x"), "")), vec!["a"]);
    }

    #[test]
    fn search_matches_tags() {
        let photos = sample();
        assert_eq!(ids(&filter_photos(&photos, None, "beach")), vec!["a"]);
    }

    #[test]
    fn search_with_no_match_yields_empty() {
        let photos = sample();
        assert!(filter_photos(&photos, None, "zzz").is_empty());
    }

    #[test]
    fn no_criteria_returns_all_in_order() {
        let photos = sample();
        assert_eq!(ids(&filter_photos(&photos, None, "")), vec!["a", "b"]);
        // An empty album id means no album criterion
        assert_eq!(ids(&filter_photos(&photos, Some(""), "")), vec!["a", "b"]);
    }

    #[test]
    fn search_is_case_insensitive_and_substring() {
        let photos = sample();
        assert_eq!(ids(&filter_photos(&photos, None, "SUN")), vec!["a"]);
        assert_eq!(ids(&filter_photos(&photos, None, "ike")), vec!["b"]);
    }

    #[test]
    fn album_and_search_compose_as_and() {
        let photos = sample();
        // "a" matches the album but not the search
        assert!(filter_photos(&photos, Some("x"), "hike").is_empty());
        assert_eq!(ids(&filter_photos(&photos, Some("y"), "hike")), vec!["b"]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let photos = sample();
        let first = ids(&filter_photos(&photos, Some("x"), "beach"));
        let second = ids(&filter_photos(&photos, Some("x"), "beach"));
        assert_eq!(first, second);
    }

    #[test]
    fn result_preserves_relative_order() {
        let mut photos = sample();
        photos.push(photo("c", "Sunrise", &["beach"], Some("x")));

        let result = ids(&filter_photos(&photos, None, "s"));
        assert_eq!(result, vec!["a", "c"]);
    }
}
