use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
}

include!(concat!(env!("OUT_DIR"), "/sitemap_generated.rs"));

pub fn routes() -> &'static [RouteInfo] {
    ROUTES
}
