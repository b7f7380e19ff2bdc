use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    models::{CartItem, CustomerInfo, Order, Product, ProductVariant},
    routes::{meta, orders, products, seed},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        meta::root,
        meta::hello,
        meta::test_database,
        products::list_products,
        products::get_product,
        products::create_product,
        orders::create_order,
        seed::seed_products,
    ),
    components(
        schemas(
            Product,
            ProductVariant,
            Order,
            CartItem,
            CustomerInfo,
            meta::RootResponse,
            meta::MessageResponse,
            meta::DiagnosticsResponse,
            seed::SeedResponse,
        )
    ),
    tags(
        (name = "Meta", description = "Service banner and diagnostics"),
        (name = "Products", description = "Product endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Seed", description = "Sample data seeding"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
