use mongodb::bson::doc;

use crate::{
    error::AppResult,
    models::{Product, ProductVariant},
    routes::seed::SeedResponse,
    state::AppState,
    store::collections,
};

fn sized_variants(color: &str, sku_prefix: &str, stock: i32) -> Vec<ProductVariant> {
    ["S", "M", "L", "XL"]
        .iter()
        .map(|size| ProductVariant {
            size: Some((*size).to_string()),
            color: Some(color.to_string()),
            sku: Some(format!("{sku_prefix}-{size}")),
            stock,
        })
        .collect()
}

pub fn sample_products() -> Vec<Product> {
    vec![
        Product {
            title: "Vistro Classic Tee".to_string(),
            description: Some("Soft cotton tee with minimalist Vistro logo.".to_string()),
            price: 28.0,
            category: "T-Shirts".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1520975916090-3105956dac38?q=80&w=1200"
                    .to_string(),
            ],
            brand: "Vistro".to_string(),
            tags: vec!["tee".to_string(), "classic".to_string(), "logo".to_string()],
            variants: sized_variants("Black", "VT-TEE-BLK", 50),
            featured: true,
        },
        Product {
            title: "Vistro Cozy Hoodie".to_string(),
            description: Some("Premium fleece hoodie built for comfort.".to_string()),
            price: 64.0,
            category: "Hoodies".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1516826957135-700dedea698c?q=80&w=1200"
                    .to_string(),
            ],
            brand: "Vistro".to_string(),
            tags: vec!["hoodie".to_string(), "fleece".to_string(), "cozy".to_string()],
            variants: sized_variants("Heather Gray", "VT-HDY-GRY", 30),
            featured: true,
        },
        Product {
            title: "Vistro Performance Joggers".to_string(),
            description: Some("Stretch joggers for all-day movement.".to_string()),
            price: 54.0,
            category: "Bottoms".to_string(),
            images: vec![
                "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=1200"
                    .to_string(),
            ],
            brand: "Vistro".to_string(),
            tags: vec!["joggers".to_string(), "athleisure".to_string()],
            variants: sized_variants("Charcoal", "VT-JGR-CHR", 40),
            featured: false,
        },
    ]
}

/// Idempotent: a non-empty product collection short-circuits with the
/// existing count and inserts nothing.
pub async fn seed_products(state: &AppState) -> AppResult<SeedResponse> {
    let store = state.store.gateway()?;

    let existing = store.count(collections::PRODUCT, doc! {}).await?;
    if existing > 0 {
        return Ok(SeedResponse::already_seeded(existing));
    }

    let mut inserted = Vec::new();
    for product in sample_products() {
        let id = store.insert(collections::PRODUCT, &product).await?;
        inserted.push(id.to_string());
    }

    tracing::info!(count = inserted.len(), "sample products seeded");
    Ok(SeedResponse::seeded(inserted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn sample_catalog_is_valid() {
        let products = sample_products();
        assert_eq!(products.len(), 3);
        for product in &products {
            product.validate().unwrap();
            assert_eq!(product.brand, "Vistro");
            assert_eq!(product.variants.len(), 4);
        }
    }

    #[test]
    fn sample_catalog_has_featured_and_plain_products() {
        let products = sample_products();
        assert_eq!(products.iter().filter(|p| p.featured).count(), 2);
        assert_eq!(products.iter().filter(|p| !p.featured).count(), 1);
    }
}
