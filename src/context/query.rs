//! Query string decoding.

use std::collections::HashMap;

use url::form_urlencoded;

/// Query parameters: each key maps to its values in order of appearance.
pub type QueryParams = HashMap<String, Vec<String>>;

/// Decode an `application/x-www-form-urlencoded` query string.
///
/// `+` decodes to a space and percent escapes are resolved. Pairs with a blank
/// value (`flag`, `empty=`) are dropped; repeated keys accumulate.
pub fn parse_query(query: &str) -> QueryParams {
    let mut params = QueryParams::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if value.is_empty() {
            continue;
        }
        params
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }

    params
}
