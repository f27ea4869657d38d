//! Order and order line models
//!
//! Order lines carry the raw pricing facts; every report aggregates
//! [`OrderLine::revenue`] over some grouping of orders.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::ids::{CustomerId, EmployeeId, OrderId, ProductId, ShipperId};
use super::money::Money;

/// A customer order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    #[serde(alias = "OrderID", alias = "orderId", alias = "id")]
    pub order_id: OrderId,

    #[serde(alias = "CustomerID", alias = "customerId")]
    pub customer_id: CustomerId,

    #[serde(alias = "EmployeeID", alias = "employeeId")]
    pub employee_id: EmployeeId,

    #[serde(alias = "ShipVia", alias = "shipVia", alias = "shipper_id")]
    pub ship_via: ShipperId,

    #[serde(
        alias = "OrderDate",
        alias = "orderDate",
        deserialize_with = "deserialize_order_date"
    )]
    pub order_date: NaiveDate,
}

impl Order {
    pub fn new(
        order_id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        employee_id: impl Into<EmployeeId>,
        ship_via: impl Into<ShipperId>,
        order_date: NaiveDate,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            customer_id: customer_id.into(),
            employee_id: employee_id.into(),
            ship_via: ship_via.into(),
            order_date,
        }
    }
}

/// One product line within an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(alias = "OrderID", alias = "orderId")]
    pub order_id: OrderId,

    #[serde(alias = "ProductID", alias = "productId")]
    pub product_id: ProductId,

    #[serde(alias = "UnitPrice", alias = "unitPrice")]
    pub unit_price: Money,

    #[serde(alias = "Quantity")]
    pub quantity: u32,

    /// Fraction between 0 and 1; absent or empty means no discount
    #[serde(alias = "Discount", default, deserialize_with = "deserialize_discount")]
    pub discount: Decimal,
}

impl OrderLine {
    pub fn new(
        order_id: impl Into<OrderId>,
        product_id: impl Into<ProductId>,
        unit_price: Money,
        quantity: u32,
        discount: Decimal,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            product_id: product_id.into(),
            unit_price,
            quantity,
            discount,
        }
    }

    /// unit_price × quantity × (1 − discount)
    ///
    /// Saturates at the bounds of `Decimal` instead of overflowing.
    pub fn revenue(&self) -> Money {
        let factor = Decimal::from(self.quantity)
            .saturating_mul(Decimal::ONE.saturating_sub(self.discount));
        Money::new(self.unit_price.amount().saturating_mul(factor))
    }
}

/// Parse an order date from `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS` or an
/// ISO-8601 timestamp. Only the date part is kept.
pub fn parse_order_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.trim().split([' ', 'T']).next().unwrap_or_default();
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

fn deserialize_order_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_order_date(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid order date: {}", raw)))
}

/// Discount as a decimal; an empty CSV field is zero
fn deserialize_discount<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDiscount {
        Number(Decimal),
        Text(String),
    }

    match Option::<RawDiscount>::deserialize(deserializer)? {
        None => Ok(Decimal::ZERO),
        Some(RawDiscount::Number(value)) => Ok(value),
        Some(RawDiscount::Text(text)) if text.trim().is_empty() => Ok(Decimal::ZERO),
        Some(RawDiscount::Text(text)) => text
            .trim()
            .parse::<Decimal>()
            .map_err(|_| serde::de::Error::custom(format!("invalid discount: {}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_line_revenue() {
        let line = OrderLine::new(10248, 11, Money::new(dec!(14.00)), 12, dec!(0));
        assert_eq!(line.revenue(), Money::new(dec!(168)));

        let discounted = OrderLine::new(10250, 51, Money::new(dec!(42.40)), 35, dec!(0.15));
        assert_eq!(discounted.revenue(), Money::new(dec!(1261.40)));
    }

    #[test]
    fn test_parse_order_date_formats() {
        let expected = NaiveDate::from_ymd_opt(1996, 7, 4);
        assert_eq!(parse_order_date("1996-07-04"), expected);
        assert_eq!(parse_order_date("1996-07-04 00:00:00"), expected);
        assert_eq!(parse_order_date("1996-07-04T00:00:00Z"), expected);
        assert_eq!(parse_order_date("1996-7-4"), expected);
        assert_eq!(parse_order_date("1996-7-4 00:00:00"), expected);
        assert_eq!(parse_order_date("1996-7-4T08:30:00"), expected);
        assert_eq!(parse_order_date("07/04/1996"), None);
        assert_eq!(parse_order_date(""), None);
    }

    #[test]
    fn test_deserialize_order() {
        let json = r#"{
            "OrderID": 10248,
            "CustomerID": "VINET",
            "EmployeeID": 5,
            "ShipVia": 3,
            "OrderDate": "1996-07-04 00:00:00"
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, OrderId::new(10248));
        assert_eq!(order.ship_via, ShipperId::new(3));
        assert_eq!(order.order_date, NaiveDate::from_ymd_opt(1996, 7, 4).unwrap());
    }

    #[test]
    fn test_deserialize_line_without_discount() {
        let json = r#"{"order_id": 1, "product_id": 2, "unit_price": 9.5, "quantity": 2}"#;
        let line: OrderLine = serde_json::from_str(json).unwrap();
        assert_eq!(line.discount, Decimal::ZERO);
        assert_eq!(line.revenue(), Money::new(dec!(19)));
    }

    #[test]
    fn test_revenue_saturates_instead_of_overflowing() {
        let line = OrderLine::new(1, 1, Money::new(Decimal::MAX), 2, dec!(0));
        assert_eq!(line.revenue(), Money::new(Decimal::MAX));
    }

    #[test]
    fn test_deserialize_discount_forms() {
        let as_string = r#"{"order_id": 1, "product_id": 2, "unit_price": 10, "quantity": 1, "discount": "0.25"}"#;
        let line: OrderLine = serde_json::from_str(as_string).unwrap();
        assert_eq!(line.discount, dec!(0.25));

        let null = r#"{"order_id": 1, "product_id": 2, "unit_price": 10, "quantity": 1, "discount": null}"#;
        let line: OrderLine = serde_json::from_str(null).unwrap();
        assert_eq!(line.discount, Decimal::ZERO);

        let bad = r#"{"order_id": 1, "product_id": 2, "unit_price": 10, "quantity": 1, "discount": "lots"}"#;
        assert!(serde_json::from_str::<OrderLine>(bad).is_err());
    }
}
