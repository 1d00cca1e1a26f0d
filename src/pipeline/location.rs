/// Derives a city name from a sanitized location string.
///
/// Locations arrive as "City, Region" or bare labels ("Remote", "Toronto").
/// The text before the first comma is taken as the city; a bare label is
/// returned unchanged; an empty location maps to "Unknown".
pub fn extract_city(location: &str) -> String {
    let location = location.trim();
    if location.is_empty() {
        return "Unknown".to_string();
    }
    match location.split_once(',') {
        Some((city, _)) => city.trim().to_string(),
        None => location.to_string(),
    }
}
