//! Product catalog models: products, categories and suppliers

use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, ProductId, SupplierId};

/// A product sold on order lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(alias = "ProductID", alias = "productId", alias = "id")]
    pub product_id: ProductId,

    #[serde(alias = "ProductName", alias = "productName")]
    pub product_name: String,

    #[serde(alias = "CategoryID", alias = "categoryId")]
    pub category_id: CategoryId,

    #[serde(alias = "SupplierID", alias = "supplierId")]
    pub supplier_id: SupplierId,
}

impl Product {
    pub fn new(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        category_id: impl Into<CategoryId>,
        supplier_id: impl Into<SupplierId>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            category_id: category_id.into(),
            supplier_id: supplier_id.into(),
        }
    }
}

/// A product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(alias = "CategoryID", alias = "categoryId", alias = "id")]
    pub category_id: CategoryId,

    #[serde(alias = "CategoryName", alias = "categoryName", alias = "name")]
    pub category_name: String,
}

impl Category {
    pub fn new(category_id: impl Into<CategoryId>, category_name: impl Into<String>) -> Self {
        Self {
            category_id: category_id.into(),
            category_name: category_name.into(),
        }
    }
}

/// A product supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    #[serde(alias = "SupplierID", alias = "supplierId", alias = "id")]
    pub supplier_id: SupplierId,

    #[serde(alias = "CompanyName", alias = "companyName")]
    pub company_name: String,

    #[serde(alias = "Country", default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl Supplier {
    pub fn new(supplier_id: impl Into<SupplierId>, company_name: impl Into<String>) -> Self {
        Self {
            supplier_id: supplier_id.into(),
            company_name: company_name.into(),
            country: None,
        }
    }
}
