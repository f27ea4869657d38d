//! Category Leaders Report
//!
//! For each category, the product with the highest revenue and the
//! employee who handled the most orders containing that product.
//!
//! Tie rules: equal product revenue goes to the lowest product id; equal
//! employee order counts go to the lowest employee id.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::revenue::{index_by, join_lines, top_entry};
use super::{Cell, Column, ColumnKind, Report, ReportKind, ReportOptions, ReportTable};
use crate::error::NorthwindResult;
use crate::models::{CategoryId, EmployeeId, Money, OrderId, ProductId};
use crate::storage::{Dataset, MissingTable};

const COLUMNS: [Column; 6] = [
    Column::new("category_name", "Category", ColumnKind::Text),
    Column::new("product_id", "Product ID", ColumnKind::Integer),
    Column::new("product_name", "Top Product", ColumnKind::Text),
    Column::new("product_revenue", "Revenue", ColumnKind::Money),
    Column::new("employee_name", "Top Employee", ColumnKind::Text),
    Column::new("employee_orders", "Orders", ColumnKind::Integer),
];

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLeaderRow {
    pub category_id: CategoryId,
    pub category_name: String,
    pub product_id: ProductId,
    pub product_name: String,
    pub product_revenue: Money,
    /// `None` when none of the product's orders has a known employee
    pub employee_id: Option<EmployeeId>,
    pub employee_name: Option<String>,
    /// Distinct orders of the product handled by that employee
    pub employee_orders: usize,
}

#[derive(Debug, Clone)]
pub struct CategoryLeadersReport {
    /// Ordered by category name, then category id
    pub rows: Vec<CategoryLeaderRow>,
}

impl CategoryLeadersReport {
    fn build(dataset: &Dataset) -> Result<Self, MissingTable> {
        let categories = dataset.categories()?;
        let products = index_by(dataset.products()?, |p| p.product_id);
        let employees = index_by(dataset.employees()?, |e| e.employee_id);
        let facts = join_lines(dataset.orders()?, dataset.order_details()?);

        let mut product_revenue: BTreeMap<ProductId, Money> = BTreeMap::new();
        let mut product_orders: HashMap<ProductId, BTreeMap<EmployeeId, BTreeSet<OrderId>>> =
            HashMap::new();
        for fact in &facts {
            let product_id = fact.line.product_id;
            if !products.contains_key(&product_id) {
                continue;
            }
            *product_revenue.entry(product_id).or_default() += fact.revenue;
            if employees.contains_key(&fact.order.employee_id) {
                product_orders
                    .entry(product_id)
                    .or_default()
                    .entry(fact.order.employee_id)
                    .or_default()
                    .insert(fact.order.order_id);
            }
        }

        // Top product per category
        let mut leaders: BTreeMap<CategoryId, (ProductId, Money)> = BTreeMap::new();
        for (product_id, revenue) in product_revenue {
            let Some(product) = products.get(&product_id) else {
                continue;
            };
            let candidate = (product_id, revenue);
            let best = match leaders.remove(&product.category_id) {
                Some(current) => top_entry([current, candidate]),
                None => Some(candidate),
            };
            if let Some(best) = best {
                leaders.insert(product.category_id, best);
            }
        }

        let mut rows: Vec<CategoryLeaderRow> = categories
            .iter()
            .filter_map(|category| {
                let (product_id, product_revenue) = *leaders.get(&category.category_id)?;
                let product = products.get(&product_id)?;

                let top_employee = product_orders.get(&product_id).and_then(|by_employee| {
                    top_entry(
                        by_employee
                            .iter()
                            .map(|(employee_id, orders)| (*employee_id, orders.len())),
                    )
                });
                let (employee_id, employee_orders) = match top_employee {
                    Some((id, count)) => (Some(id), count),
                    None => (None, 0),
                };

                Some(CategoryLeaderRow {
                    category_id: category.category_id,
                    category_name: category.category_name.clone(),
                    product_id,
                    product_name: product.product_name.clone(),
                    product_revenue,
                    employee_id,
                    employee_name: employee_id
                        .and_then(|id| employees.get(&id))
                        .map(|e| e.full_name()),
                    employee_orders,
                })
            })
            .collect();

        rows.sort_by(|a, b| {
            a.category_name
                .cmp(&b.category_name)
                .then_with(|| a.category_id.cmp(&b.category_id))
        });

        Ok(Self { rows })
    }
}

impl Report for CategoryLeadersReport {
    const KIND: ReportKind = ReportKind::CategoryLeaders;

    fn generate(dataset: &Dataset, _options: &ReportOptions) -> NorthwindResult<Self> {
        Self::build(dataset).map_err(|e| e.in_report(Self::KIND.name()))
    }

    fn to_table(&self) -> ReportTable {
        let mut table = ReportTable::new(Self::KIND, &COLUMNS);
        for row in &self.rows {
            table.push_row(vec![
                Cell::text(&row.category_name),
                Cell::Integer(i64::from(row.product_id.get())),
                Cell::text(&row.product_name),
                Cell::Money(row.product_revenue),
                Cell::opt_text(row.employee_name.as_ref()),
                Cell::count(row.employee_orders),
            ]);
        }
        table
    }
}
