use crate::errors::{CostingError, RunError};
use crate::report::Report;
use log::{info, warn};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::time::Duration;

const UNKNOWN_SALE: &str = "Unknown";

/// A PriceCatalogue maps product names to unit prices. Prices are kept as the
/// raw JSON values they were loaded as and are only coerced to numbers when a
/// line item references them.
#[derive(Debug, Default)]
pub struct PriceCatalogue {
    prices: Map<String, Value>,
}

impl PriceCatalogue {
    pub fn product_count(&self) -> usize {
        self.prices.len()
    }

    /// Look up the unit price of a product.
    ///
    /// Numbers are used as-is, numeric strings (surrounding whitespace
    /// allowed) are parsed and booleans count as 1 or 0. Any other
    /// representation is reported as an invalid price.
    pub fn price_of(&self, product: &str) -> Result<f64, CostingError> {
        let price = match self.prices.get(product) {
            Some(price) => price,
            None => {
                return Err(CostingError::ProductNotFound {
                    product: product.to_string(),
                })
            }
        };

        let coerced = match price {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        };

        coerced.ok_or_else(|| CostingError::InvalidPrice {
            product: product.to_string(),
        })
    }
}

impl TryFrom<Value> for PriceCatalogue {
    type Error = RunError;

    /// Only a top-level JSON object can act as a catalogue.
    fn try_from(document: Value) -> Result<Self, Self::Error> {
        match document {
            Value::Object(prices) => Ok(Self { prices }),
            _ => Err(RunError::InvalidCatalogueShape),
        }
    }
}

/// A single sale from the sales record. Both fields are optional; an absent
/// or null `items` list is treated as empty.
#[derive(Debug, Default, Deserialize)]
pub struct Sale {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    items: Option<Vec<Value>>,
}

/// One line of a sale. Items that are not JSON objects are read as an item
/// with neither a product nor a quantity.
#[derive(Debug, Default, Deserialize)]
pub struct LineItem {
    #[serde(default)]
    product: Option<Value>,
    #[serde(default)]
    quantity: Option<Value>,
}

/// The cost of a single sale together with the advisory errors raised by its
/// line items, in item order.
#[derive(Debug, Default, PartialEq)]
pub struct SaleCost {
    pub total: f64,
    pub errors: Vec<CostingError>,
}

impl Sale {
    /// Project a sales-record entry onto a Sale. Returns None when the entry
    /// is not an object or its `items` field is not a list.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }

        Sale::deserialize(value).ok()
    }

    /// The identifier used in error messages.
    pub fn label(&self) -> String {
        match &self.id {
            None | Some(Value::Null) => UNKNOWN_SALE.to_string(),
            Some(id) => display_value(id),
        }
    }

    /// Compute the total cost of this sale against the catalogue.
    ///
    /// Invalid line items never stop the computation: each one records a
    /// single error, contributes nothing to the total, and processing moves on
    /// to the next item.
    pub fn cost(&self, catalogue: &PriceCatalogue) -> SaleCost {
        let mut result = SaleCost::default();

        for item in self.items.iter().flatten() {
            match self.cost_item(&LineItem::from_value(item), catalogue) {
                Ok(cost) => result.total += cost,
                Err(err) => result.errors.push(err),
            }
        }

        result
    }

    fn cost_item(&self, item: &LineItem, catalogue: &PriceCatalogue) -> Result<f64, CostingError> {
        let (product, quantity) = match (truthy(&item.product), truthy(&item.quantity)) {
            (Some(product), Some(quantity)) => (product, quantity),
            _ => return Err(CostingError::InvalidItem { sale: self.label() }),
        };

        // Catalogue keys are strings, so any other product value is unknown.
        let price = match product {
            Value::String(name) => catalogue.price_of(name)?,
            other => {
                return Err(CostingError::ProductNotFound {
                    product: display_value(other),
                })
            }
        };

        let quantity = match quantity {
            Value::Number(n) => n.as_f64(),
            Value::Bool(true) => Some(1.0),
            _ => None,
        }
        .ok_or_else(|| CostingError::InvalidQuantity {
            product: display_value(product),
            sale: self.label(),
        })?;

        Ok(price * quantity)
    }
}

impl LineItem {
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }

        LineItem::deserialize(value).unwrap_or_default()
    }
}

/// Returns the value when it is present and truthy: not null, false, zero, an
/// empty string or an empty collection.
fn truthy(value: &Option<Value>) -> Option<&Value> {
    value.as_ref().filter(|value| match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// A SalesLedger folds an ordered list of sales into a grand total and a flat
/// list of advisory errors, preserving sale order and then item order.
#[derive(Debug, Default)]
pub struct SalesLedger {
    sales: usize,
    total_cost: f64,
    errors: Vec<CostingError>,
}

impl SalesLedger {
    /// Cost every sale in `sales`, in order.
    pub fn compute(catalogue: &PriceCatalogue, sales: &[Value]) -> Self {
        let mut ledger = SalesLedger::default();

        for sale in sales {
            ledger.process_sale(catalogue, sale);
        }

        info!(
            "costed {} sales against {} catalogue entries: total={:.2} errors={}",
            ledger.sales,
            catalogue.product_count(),
            ledger.total_cost,
            ledger.errors.len()
        );

        ledger
    }

    /// Process a single sales-record entry and merge its cost and errors into
    /// the ledger.
    pub fn process_sale(&mut self, catalogue: &PriceCatalogue, sale: &Value) {
        self.sales += 1;

        let cost = match Sale::from_value(sale) {
            Some(sale) => sale.cost(catalogue),
            None => SaleCost {
                total: 0.0,
                errors: vec![CostingError::InvalidSale {
                    position: self.sales,
                }],
            },
        };

        for err in cost.errors.iter() {
            warn!("{}", err);
        }

        self.total_cost += cost.total;
        self.errors.extend(cost.errors);
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn errors(&self) -> &[CostingError] {
        &self.errors
    }

    /// Build the report for this ledger. The execution time is measured by the
    /// caller since it spans document loading as well.
    pub fn generate_report(&self, execution_time: Duration) -> Report {
        Report {
            total_cost: self.total_cost,
            execution_time,
            errors: self.errors.iter().map(ToString::to_string).collect(),
        }
    }
}
