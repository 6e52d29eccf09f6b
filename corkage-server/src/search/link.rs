//! Link generation for search results.
//!
//! The detail page receives everything it shows through its query string,
//! and the "open in map" button hands the address to Kakao Map's search.

use url::form_urlencoded;

use super::place::PlaceSummary;

/// Kakao Map search page base.
const KAKAO_MAP_SEARCH_URL: &str = "https://map.kakao.com/link/search/";

/// Path of the restaurant detail page.
const DETAILS_PATH: &str = "/details";

/// Detail page link for a search result.
///
/// The query carries the name, address, phone, two-decimal distance, both
/// travel times and the category, form-encoded in that order.
pub fn details_link(summary: &PlaceSummary) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("place_name", &summary.place.name)
        .append_pair("address_name", &summary.place.address)
        .append_pair("phone", &summary.place.phone)
        .append_pair("distance", &summary.distance_label())
        .append_pair("walking_time", &summary.walking_time)
        .append_pair("driving_time", &summary.driving_time)
        .append_pair("category_name", &summary.place.category_name)
        .finish();

    format!("{DETAILS_PATH}?{query}")
}

/// Kakao Map search link for an address.
///
/// Spaces are encoded as `%20`, which Kakao Map expects in the path.
///
/// ```
/// use corkage_server::search::kakao_map_search_link;
///
/// assert_eq!(
///     kakao_map_search_link("서울 성북구"),
///     "https://map.kakao.com/link/search/%EC%84%9C%EC%9A%B8%20%EC%84%B1%EB%B6%81%EA%B5%AC"
/// );
/// ```
pub fn kakao_map_search_link(address: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(address.as_bytes())
        .collect::<String>()
        .replace('+', "%20");
    format!("{KAKAO_MAP_SEARCH_URL}{encoded}")
}
