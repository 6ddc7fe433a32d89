//! Roster data as served by the dashboard backend.
//!
//! All balances are carried in minor currency units (cents) end-to-end;
//! the display layer divides by 100 exactly once, when formatting.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

/// One customer as returned by `/api/customers/json`.
///
/// The record list is read-only to the view layer; edits happen server-side
/// and arrive here only through a wholesale roster reload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerRecord {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    /// Outstanding balance in cents. Missing or malformed values coerce to 0.
    #[serde(default, deserialize_with = "de_cents")]
    pub balance_cents: i64,
    #[serde(default)]
    pub last_visit_at: Option<NaiveDate>,
}

impl CustomerRecord {
    /// Days since the last recorded visit, relative to `today`.
    /// `None` when the customer was never visited.
    pub fn days_since_visit(&self, today: NaiveDate) -> Option<i64> {
        self.last_visit_at
            .map(|d| today.signed_duration_since(d).num_days())
    }
}

/// One entry of the area panel, as returned by `/calendar/customers_by_area`.
#[derive(Debug, Clone, Deserialize)]
pub struct AreaCustomer {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "de_cents")]
    pub balance_cents: i64,
    /// Days since last contact; absent when the backend reports none.
    #[serde(default)]
    pub days_since: Option<i64>,
}

/// One named area with its customers, in backend-supplied customer order.
#[derive(Debug, Clone)]
pub struct AreaGroup {
    pub name: String,
    pub customers: Vec<AreaCustomer>,
}

impl AreaGroup {
    /// Sum of the outstanding balances in this area.
    pub fn total_cents(&self) -> i64 {
        self.customers.iter().map(|c| c.balance_cents).sum()
    }
}

/// Orders decoded area groups the way the panel presents them:
/// largest group first, ties broken by area name ascending.
pub fn order_area_groups(groups: BTreeMap<String, Vec<AreaCustomer>>) -> Vec<AreaGroup> {
    // BTreeMap iteration is already name-ascending; a stable sort on
    // descending size keeps that order within equal-sized groups.
    let mut ordered: Vec<AreaGroup> = groups
        .into_iter()
        .map(|(name, customers)| AreaGroup { name, customers })
        .collect();
    ordered.sort_by(|a, b| b.customers.len().cmp(&a.customers.len()));
    ordered
}

/// Accepts an integer, float, numeric string, or null balance and coerces
/// anything unusable to 0, mirroring the backend's own lenient handling.
fn de_cents<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_cents(&value))
}

fn coerce_cents(value: &serde_json::Value) -> i64 {
    match value {
        serde_json::Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        serde_json::Value::String(s) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_customer(id: i64, name: &str) -> AreaCustomer {
        AreaCustomer {
            id,
            name: name.to_string(),
            address: None,
            balance_cents: 0,
            days_since: None,
        }
    }

    #[test]
    fn customer_decodes_from_api_payload() {
        let json = r#"{
            "id": 7,
            "name": "Maple Corner Store",
            "phone": "555-0100",
            "address": "12 Maple St",
            "balance_cents": 4250,
            "last_visit_at": "2026-07-30"
        }"#;
        let c: CustomerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(c.id, 7);
        assert_eq!(c.balance_cents, 4250);
        assert_eq!(c.email, None);
        assert_eq!(
            c.last_visit_at,
            Some(NaiveDate::from_ymd_opt(2026, 7, 30).unwrap())
        );
    }

    #[test]
    fn malformed_balance_coerces_to_zero() {
        let c: CustomerRecord =
            serde_json::from_str(r#"{"id": 1, "name": "A", "balance_cents": "n/a"}"#).unwrap();
        assert_eq!(c.balance_cents, 0);

        let c: CustomerRecord =
            serde_json::from_str(r#"{"id": 1, "name": "A", "balance_cents": null}"#).unwrap();
        assert_eq!(c.balance_cents, 0);

        let c: CustomerRecord = serde_json::from_str(r#"{"id": 1, "name": "A"}"#).unwrap();
        assert_eq!(c.balance_cents, 0);
    }

    #[test]
    fn string_balance_parses_when_numeric() {
        let c: CustomerRecord =
            serde_json::from_str(r#"{"id": 1, "name": "A", "balance_cents": "1500"}"#).unwrap();
        assert_eq!(c.balance_cents, 1500);
    }

    #[test]
    fn area_groups_order_by_size_then_name() {
        let mut map = BTreeMap::new();
        map.insert("Westside".to_string(), vec![area_customer(1, "a")]);
        map.insert(
            "Downtown".to_string(),
            vec![area_customer(2, "b"), area_customer(3, "c")],
        );
        map.insert("Eastside".to_string(), vec![area_customer(4, "d")]);

        let ordered = order_area_groups(map);
        let names: Vec<&str> = ordered.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Downtown", "Eastside", "Westside"]);
    }

    #[test]
    fn days_since_visit_relative_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let c = CustomerRecord {
            last_visit_at: Some(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()),
            ..CustomerRecord::default()
        };
        assert_eq!(c.days_since_visit(today), Some(6));

        let never = CustomerRecord::default();
        assert_eq!(never.days_since_visit(today), None);
    }
}
