pub mod api_routes;
pub mod page_routes;
