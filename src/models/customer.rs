//! Customer model

use serde::{Deserialize, Serialize};

use super::ids::CustomerId;

/// A customer company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(alias = "CustomerID", alias = "customerId", alias = "id")]
    pub customer_id: CustomerId,

    #[serde(alias = "CompanyName", alias = "companyName")]
    pub company_name: String,

    #[serde(alias = "Country", default)]
    pub country: String,
}

impl Customer {
    pub fn new(
        customer_id: impl Into<CustomerId>,
        company_name: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            company_name: company_name.into(),
            country: country.into(),
        }
    }
}

impl From<String> for CustomerId {
    fn from(code: String) -> Self {
        CustomerId::new(code)
    }
}
