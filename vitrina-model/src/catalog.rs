//! Featured products (`/data/products_featured.json`) and categories
//! (`/data/categories.json`).

use serde::{Deserialize, Serialize};

use crate::item::CarouselItem;

/// Content that can be flagged for the home page.
pub trait Featured {
    fn is_featured(&self) -> bool;
}

/// Keep only the featured entries, preserving order.
pub fn featured<T: Featured + Clone>(items: &[T]) -> Vec<T> {
    items.iter().filter(|item| item.is_featured()).cloned().collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub image: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: f32,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub link: String,
}

fn default_in_stock() -> bool {
    true
}

impl Featured for Product {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl CarouselItem for Product {
    fn key(&self) -> &str {
        &self.id
    }

    fn link(&self) -> Option<&str> {
        Some(self.link.as_str())
    }

    fn label(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub link: String,
    #[serde(default)]
    pub featured: bool,
}

impl Featured for Category {
    fn is_featured(&self) -> bool {
        self.featured
    }
}

impl CarouselItem for Category {
    fn key(&self) -> &str {
        &self.id
    }

    fn link(&self) -> Option<&str> {
        Some(self.link.as_str())
    }

    fn label(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_decode_camel_case_and_filter_featured() {
        let raw = r#"[
            { "id": "p1", "name": "Marcopolo Luxury", "category": "Decorative",
              "description": "Efect metalic", "price": "189 lei",
              "image": "/images/p1.jpg", "featured": true, "rating": 4.8,
              "inStock": false, "link": "/produse/p1" },
            { "id": "p2", "name": "Stucco Veneziano", "category": "Decorative",
              "description": "Clasic", "price": "240 lei",
              "image": "/images/p2.jpg", "link": "/produse/p2" }
        ]"#;
        let products: Vec<Product> = serde_json::from_str(raw).unwrap();
        assert!(!products[0].in_stock);
        assert!(products[1].in_stock);

        let shown = featured(&products);
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].label(), "Marcopolo Luxury");
    }

    #[test]
    fn categories_default_to_not_featured() {
        let raw = r#"{ "id": "c1", "title": "Interior", "description": "",
                      "image": "/i.jpg", "link": "/interior" }"#;
        let category: Category = serde_json::from_str(raw).unwrap();
        assert!(!category.is_featured());
        assert_eq!(category.link(), Some("/interior"));
    }
}
