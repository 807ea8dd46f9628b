//! Entity enrichment: joining products with their categories and owners.

use std::collections::HashMap;

use stocklist_model::{
    Category, CategoryId, EnrichedProduct, Product, User, UserId,
};

use crate::error::{CatalogError, Result};

/// Join each product with its category and the category's owner.
///
/// Output order follows input product order. Fails on the first dangling
/// reference instead of skipping the record; the source collections are
/// static, so a missing id is a configuration defect.
pub fn enrich_products(
    products: &[Product],
    categories: &[Category],
    users: &[User],
) -> Result<Vec<EnrichedProduct>> {
    let categories_by_id: HashMap<CategoryId, &Category> = categories
        .iter()
        .map(|category| (category.id, category))
        .collect();
    let users_by_id: HashMap<UserId, &User> =
        users.iter().map(|user| (user.id, user)).collect();

    let mut enriched = Vec::with_capacity(products.len());
    for product in products {
        let category = categories_by_id
            .get(&product.category_id)
            .copied()
            .ok_or(CatalogError::UnknownCategory {
                product_id: product.id,
                category_id: product.category_id,
            })?;
        let owner = users_by_id.get(&category.owner_id).copied().ok_or(
            CatalogError::UnknownOwner {
                category_id: category.id,
                owner_id: category.owner_id,
            },
        )?;

        enriched.push(EnrichedProduct::from_parts(
            product,
            category.clone(),
            owner.clone(),
        ));
    }

    tracing::debug!(products = enriched.len(), "enriched product catalog");

    Ok(enriched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocklist_model::{ProductId, Sex};

    fn user(id: u32, name: &str) -> User {
        User {
            id: UserId(id),
            name: name.to_string(),
            sex: Sex::Male,
        }
    }

    fn category(id: u32, title: &str, owner: u32) -> Category {
        Category {
            id: CategoryId(id),
            title: title.to_string(),
            icon: "📦".to_string(),
            owner_id: UserId(owner),
        }
    }

    fn product(id: u32, name: &str, category: u32) -> Product {
        Product {
            id: ProductId(id),
            name: name.to_string(),
            category_id: CategoryId(category),
        }
    }

    #[test]
    fn joins_category_and_transitive_owner() {
        let users = vec![user(1, "Roma")];
        let categories = vec![category(1, "Grocery", 1)];
        let products = vec![product(1, "Milk", 1)];

        let enriched = enrich_products(&products, &categories, &users)
            .expect("referentially intact input");

        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].id, ProductId(1));
        assert_eq!(enriched[0].category.title, "Grocery");
        assert_eq!(enriched[0].owner.name, "Roma");
    }

    #[test]
    fn preserves_product_order() {
        let users = vec![user(1, "Roma")];
        let categories = vec![category(1, "Grocery", 1)];
        let products = vec![
            product(3, "Garlic", 1),
            product(1, "Milk", 1),
            product(2, "Bread", 1),
        ];

        let enriched = enrich_products(&products, &categories, &users)
            .expect("referentially intact input");

        let ids: Vec<u32> = enriched.iter().map(|p| p.id.as_u32()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn dangling_category_is_a_typed_fault() {
        let users = vec![user(1, "Roma")];
        let categories = vec![category(1, "Grocery", 1)];
        let products = vec![product(7, "Milk", 9)];

        let err = enrich_products(&products, &categories, &users)
            .expect_err("category 9 does not exist");

        match err {
            CatalogError::UnknownCategory {
                product_id,
                category_id,
            } => {
                assert_eq!(product_id, ProductId(7));
                assert_eq!(category_id, CategoryId(9));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn dangling_owner_is_a_typed_fault() {
        let users = vec![user(1, "Roma")];
        let categories = vec![category(2, "Drinks", 5)];
        let products = vec![product(1, "Milk", 2)];

        let err = enrich_products(&products, &categories, &users)
            .expect_err("owner 5 does not exist");

        match err {
            CatalogError::UnknownOwner {
                category_id,
                owner_id,
            } => {
                assert_eq!(category_id, CategoryId(2));
                assert_eq!(owner_id, UserId(5));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_products_enrich_to_empty() {
        let enriched = enrich_products(&[], &[], &[]).expect("nothing to join");
        assert!(enriched.is_empty());
    }
}
