//! Demo catalog with a small, referentially intact dataset.
//!
//! Used by documentation and tests; real deployments load their own
//! collections through [`crate::Dataset`] or hand them straight to
//! [`Catalog::build`].

use stocklist_model::{
    Category, CategoryId, Product, ProductId, Sex, User, UserId,
};

use crate::catalog::Catalog;
use crate::error::Result;

/// Sample users owning the demo categories.
pub fn users() -> Vec<User> {
    vec![
        User {
            id: UserId(1),
            name: "Roma".to_string(),
            sex: Sex::Male,
        },
        User {
            id: UserId(2),
            name: "Anna".to_string(),
            sex: Sex::Female,
        },
        User {
            id: UserId(3),
            name: "Max".to_string(),
            sex: Sex::Male,
        },
        User {
            id: UserId(4),
            name: "John".to_string(),
            sex: Sex::Male,
        },
    ]
}

/// Sample categories; each owned by one of the demo users.
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId(1),
            title: "Grocery".to_string(),
            icon: "🍞".to_string(),
            owner_id: UserId(2),
        },
        Category {
            id: CategoryId(2),
            title: "Drinks".to_string(),
            icon: "🍷".to_string(),
            owner_id: UserId(1),
        },
        Category {
            id: CategoryId(3),
            title: "Fruits".to_string(),
            icon: "🍏".to_string(),
            owner_id: UserId(2),
        },
        Category {
            id: CategoryId(4),
            title: "Electronics".to_string(),
            icon: "💻".to_string(),
            owner_id: UserId(3),
        },
        Category {
            id: CategoryId(5),
            title: "Clothes".to_string(),
            icon: "👚".to_string(),
            owner_id: UserId(4),
        },
    ]
}

/// Sample products spread across the demo categories.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId(1),
            name: "Milk".to_string(),
            category_id: CategoryId(2),
        },
        Product {
            id: ProductId(2),
            name: "Bread".to_string(),
            category_id: CategoryId(1),
        },
        Product {
            id: ProductId(3),
            name: "Garlic".to_string(),
            category_id: CategoryId(1),
        },
        Product {
            id: ProductId(4),
            name: "Cheese".to_string(),
            category_id: CategoryId(1),
        },
        Product {
            id: ProductId(5),
            name: "Apple".to_string(),
            category_id: CategoryId(3),
        },
        Product {
            id: ProductId(6),
            name: "Banana".to_string(),
            category_id: CategoryId(3),
        },
        Product {
            id: ProductId(7),
            name: "Orange".to_string(),
            category_id: CategoryId(3),
        },
        Product {
            id: ProductId(8),
            name: "Phone".to_string(),
            category_id: CategoryId(4),
        },
        Product {
            id: ProductId(9),
            name: "Laptop".to_string(),
            category_id: CategoryId(4),
        },
        Product {
            id: ProductId(10),
            name: "Monitor".to_string(),
            category_id: CategoryId(4),
        },
        Product {
            id: ProductId(11),
            name: "T-shirt".to_string(),
            category_id: CategoryId(5),
        },
        Product {
            id: ProductId(12),
            name: "Jeans".to_string(),
            category_id: CategoryId(5),
        },
    ]
}

/// Build the demo catalog.
pub fn catalog() -> Result<Catalog> {
    Catalog::build(users(), categories(), products())
}
