pub mod order_service;
pub mod product_service;
pub mod seed_service;
