use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductVariant {
    pub size: Option<String>,
    pub color: Option<String>,
    pub sku: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Product {
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub price: f64,
    pub category: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_brand")]
    pub brand: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CartItem {
    /// Hex id of the referenced product; checked against the product
    /// collection at order-creation time, not here.
    pub product_id: String,
    #[validate(range(min = 1, message = "must be greater than or equal to 1"))]
    pub quantity: i32,
    pub size: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CustomerInfo {
    pub name: String,
    #[validate(email(message = "is not a valid email address"))]
    pub email: String,
    pub address: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct Order {
    #[validate(nested)]
    pub items: Vec<CartItem>,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub subtotal: f64,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub shipping: f64,
    #[validate(range(min = 0.0, message = "must be greater than or equal to 0"))]
    pub total: f64,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[validate(nested)]
    pub customer: CustomerInfo,
}

fn default_brand() -> String {
    "Vistro".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_status() -> String {
    "pending".to_string()
}
