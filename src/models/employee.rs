//! Employee and shipper models

use serde::{Deserialize, Serialize};

use super::ids::{EmployeeId, ShipperId};

/// A sales employee who handles orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(alias = "EmployeeID", alias = "employeeId", alias = "id")]
    pub employee_id: EmployeeId,

    #[serde(alias = "FirstName", alias = "firstName")]
    pub first_name: String,

    #[serde(alias = "LastName", alias = "lastName")]
    pub last_name: String,

    #[serde(alias = "Title", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Employee {
    pub fn new(
        employee_id: impl Into<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            title: None,
        }
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A shipping company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipper {
    #[serde(alias = "ShipperID", alias = "shipperId", alias = "id")]
    pub shipper_id: ShipperId,

    #[serde(alias = "CompanyName", alias = "companyName")]
    pub company_name: String,
}

impl Shipper {
    pub fn new(shipper_id: impl Into<ShipperId>, company_name: impl Into<String>) -> Self {
        Self {
            shipper_id: shipper_id.into(),
            company_name: company_name.into(),
        }
    }
}
