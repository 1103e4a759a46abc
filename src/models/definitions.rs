/*
 * Responsibility
 * - データモデル定義 (collection 名は型名の小文字)
 * - 追加したら models::catalog() にも登録する
 */
use crate::define_model;

define_model! {
    /// Users collection
    pub struct User {
        /// Full name
        pub name: String,
        /// Email address
        pub email: String,
        /// Postal address
        pub address: String,
        /// Age in years
        pub age: Option<u32> = None,
        /// Whether the user is active
        pub is_active: bool = true,
    }
}

define_model! {
    /// Products collection
    pub struct Product {
        /// Product title
        pub title: String,
        /// Product description
        pub description: Option<String> = None,
        /// Price in dollars
        pub price: f64,
        /// Product category
        pub category: String,
        /// Whether the product is in stock
        pub in_stock: bool = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Model;

    #[test]
    fn user_fields() {
        let schema = User::schema();
        assert_eq!(schema.collection, "user");
        assert_eq!(schema.fields.len(), 5);

        let is_active = &schema.fields[4];
        assert_eq!(is_active.name, "is_active");
        assert!(!is_active.required);
        assert_eq!(is_active.default, Some(serde_json::json!(true)));
        assert_eq!(
            is_active.description.as_deref(),
            Some("Whether the user is active")
        );
    }

    #[test]
    fn product_required_fields() {
        let required: Vec<_> = Product::fields()
            .into_iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();
        assert_eq!(required, ["title", "price", "category"]);
    }
}
