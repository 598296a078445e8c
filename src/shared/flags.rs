//! Flag emoji helpers.
//!
//! Country flags travel as regional-indicator emoji pairs (e.g. "🇵🇹"). Views
//! render them as images from the flag CDN, keyed by the lowercase country code.

use crate::shared::constants::{FLAG_CDN_BASE_URL, REGIONAL_INDICATOR_OFFSET};
use crate::shared::validation::COUNTRY_CODE_REGEX;

const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;
const REGIONAL_INDICATOR_Z: u32 = 0x1F1FF;

/// Convert a two-letter country code into its flag emoji
///
/// Returns None if the code is not two ASCII letters
pub fn country_code_to_emoji(country_code: &str) -> Option<String> {
    if !COUNTRY_CODE_REGEX.is_match(country_code) {
        return None;
    }

    country_code
        .to_ascii_uppercase()
        .chars()
        .map(|c| char::from_u32(c as u32 + REGIONAL_INDICATOR_OFFSET))
        .collect()
}

/// Convert a flag emoji back into a lowercase country code
pub fn emoji_to_country_code(emoji: &str) -> Option<String> {
    let code = emoji
        .chars()
        .map(|c| {
            let point = c as u32;
            if (REGIONAL_INDICATOR_A..=REGIONAL_INDICATOR_Z).contains(&point) {
                char::from_u32(point - REGIONAL_INDICATOR_OFFSET).map(|c| c.to_ascii_lowercase())
            } else {
                None
            }
        })
        .collect::<Option<String>>()?;

    (code.len() == 2).then_some(code)
}

/// Image URL for a flag emoji, or None if the emoji is not a flag
pub fn flag_image_url(emoji: &str) -> Option<String> {
    emoji_to_country_code(emoji).map(|code| format!("{}/{}.png", FLAG_CDN_BASE_URL, code))
}
