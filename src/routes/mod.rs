pub mod promotion_routes;
