pub mod promotion_service;
