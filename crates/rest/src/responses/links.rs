//! Bundle navigation links for search results.

use onecare_persistence::types::{COUNT_PARAM, OFFSET_PARAM, Pagination};

/// Builds the `self`, `next` and `previous` links of a searchset page.
///
/// The filter parameters are carried over verbatim; `_count` and `_offset`
/// are rewritten for each page. `next` is present only when more matches
/// follow, `previous` only when the page does not start at zero. Paging
/// values are caller-supplied, so an offset or count near `usize::MAX` must
/// not overflow.
pub fn search_links(
    base_url: &str,
    resource_type: &str,
    pairs: &[(String, String)],
    pagination: Pagination,
    total: usize,
) -> Vec<(&'static str, String)> {
    let Pagination { count, offset } = pagination;
    let mut links = vec![("self", page_url(base_url, resource_type, pairs, count, offset))];

    let next_offset = offset.checked_add(count).filter(|next| *next < total);
    if let Some(next_offset) = next_offset.filter(|_| count > 0) {
        links.push((
            "next",
            page_url(base_url, resource_type, pairs, count, next_offset),
        ));
    }
    if offset > 0 {
        links.push((
            "previous",
            page_url(
                base_url,
                resource_type,
                pairs,
                count,
                offset.saturating_sub(count),
            ),
        ));
    }
    links
}

fn page_url(
    base_url: &str,
    resource_type: &str,
    pairs: &[(String, String)],
    count: usize,
    offset: usize,
) -> String {
    let mut query = url::form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        if name != COUNT_PARAM && name != OFFSET_PARAM && !value.is_empty() {
            query.append_pair(name, value);
        }
    }
    query.append_pair(COUNT_PARAM, &count.to_string());
    query.append_pair(OFFSET_PARAM, &offset.to_string());

    format!("{}/{}?{}", base_url, resource_type, query.finish())
}
