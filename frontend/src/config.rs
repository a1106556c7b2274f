pub const BUILT_WITH: &str = "Built with Rust & Yew";

/// Images in the catalog may be absolute URLs or paths inside the bundle.
pub fn get_asset_url(path: &str) -> String {
    if path.starts_with("http") || path.starts_with('/') {
        path.to_string()
    } else {
        format!("/static/{}", path)
    }
}
