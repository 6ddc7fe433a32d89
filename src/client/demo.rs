//! Embedded demo data source for offline use and development.

use chrono::NaiveDate;
use tracing::info;

use crate::model::{AreaCustomer, AreaGroup, CustomerRecord};

use super::{ApiError, CustomerSource};

/// Serves a fixed, deterministic roster without a backend.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoSource;

impl DemoSource {
    pub fn new() -> Self {
        Self
    }
}

fn customer(
    id: i64,
    name: &str,
    phone: Option<&str>,
    email: Option<&str>,
    address: Option<&str>,
    notes: Option<&str>,
    balance_cents: i64,
    last_visit: Option<(i32, u32, u32)>,
) -> CustomerRecord {
    CustomerRecord {
        id,
        name: name.to_string(),
        phone: phone.map(str::to_string),
        email: email.map(str::to_string),
        address: address.map(str::to_string),
        notes: notes.map(str::to_string),
        balance_cents,
        last_visit_at: last_visit.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
    }
}

fn sample_roster() -> Vec<CustomerRecord> {
    vec![
        customer(
            1,
            "Maple Corner Store",
            Some("555-0100"),
            Some("maple@example.com"),
            Some("12 Maple St"),
            Some("Prefers morning deliveries"),
            4_250,
            Some((2026, 7, 30)),
        ),
        customer(
            2,
            "Oak Street Sweets",
            Some("555-0101"),
            None,
            Some("48 Oak St"),
            None,
            0,
            Some((2026, 8, 2)),
        ),
        customer(
            3,
            "Birchwood Diner",
            Some("555-0102"),
            Some("orders@birchwood.example"),
            Some("7 Birchwood Ave"),
            Some("Gate code 4412"),
            15_800,
            Some((2026, 6, 18)),
        ),
        customer(
            4,
            "Pinehill Grocery",
            None,
            None,
            Some("230 Pinehill Rd"),
            None,
            1_200,
            None,
        ),
        customer(
            5,
            "Cedar Lane Kiosk",
            Some("555-0104"),
            None,
            Some("3 Cedar Ln"),
            Some("Closed Mondays"),
            -500,
            Some((2026, 8, 5)),
        ),
        customer(
            6,
            "Willow Market",
            Some("555-0105"),
            Some("hello@willow.example"),
            None,
            None,
            9_999,
            Some((2026, 7, 12)),
        ),
        customer(
            7,
            "Elm Plaza Newsstand",
            None,
            None,
            Some("1 Elm Plaza"),
            None,
            2_000,
            Some((2026, 7, 25)),
        ),
    ]
}

fn area_entry(record: &CustomerRecord, days_since: Option<i64>) -> AreaCustomer {
    AreaCustomer {
        id: record.id,
        name: record.name.clone(),
        address: record.address.clone(),
        balance_cents: record.balance_cents,
        days_since,
    }
}

impl CustomerSource for DemoSource {
    fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, ApiError> {
        Ok(sample_roster())
    }

    fn fetch_customers_by_area(&self) -> Result<Vec<AreaGroup>, ApiError> {
        let roster = sample_roster();
        // Largest group first, ties by name, matching the backend contract.
        Ok(vec![
            AreaGroup {
                name: "Downtown".to_string(),
                customers: vec![
                    area_entry(&roster[0], Some(8)),
                    area_entry(&roster[2], Some(50)),
                    area_entry(&roster[6], Some(13)),
                ],
            },
            AreaGroup {
                name: "Northside".to_string(),
                customers: vec![area_entry(&roster[3], None), area_entry(&roster[5], Some(26))],
            },
        ])
    }

    fn quick_add(&self, customer_id: i64, date: NaiveDate) -> Result<(), ApiError> {
        info!(customer_id, %date, "demo quick-add (not persisted)");
        Ok(())
    }

    fn label(&self) -> String {
        "demo data".to_string()
    }
}
