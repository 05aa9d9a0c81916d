//! Upstream filter-query construction for release searches

/// Fixed page size of the legacy listing protocol
pub const PAGE_SIZE: u32 = 10;

/// Release statuses included in every search
const STATUS_FILTER: &str = "allowed,forbidden,allowedzxart,recovered,unknown";

/// Release formats the legacy client can load
const FORMAT_FILTER: &str = "tzx,sna,tap,trd,scl";

/// Build the path-segment query for a release search.
///
/// The upstream API has no wildcard syntax in the search position, so every
/// `*` in the term becomes a plain space. Pagination is a fixed 10 records
/// per page; `page` is already coerced to a non-negative value by the
/// caller. Total: always produces a query string.
pub fn search_filter(term: &str, page: u32) -> String {
    let term = term.replace('*', " ");
    let offset = u64::from(page) * u64::from(PAGE_SIZE);

    format!(
        "api/export:zxRelease/start:{offset}/limit:{PAGE_SIZE}/order:title,desc/\
         filter:zxProdAjaxSearch={term};\
         zxProdStatus={STATUS_FILTER};\
         zxReleaseFormat={FORMAT_FILTER}/\
         preset:zxdb"
    )
}

/// Build the path-segment query for a single-release lookup by id.
pub fn lookup_filter(release_id: u64) -> String {
    format!("api/export:zxRelease/filter:zxReleaseId={release_id}/preset:zxdb")
}
