//! HTTP implementation of [`CustomerSource`] against the dashboard API.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::NaiveDate;
use tracing::{debug, info};

use crate::model::{AreaCustomer, AreaGroup, CustomerRecord, order_area_groups};

use super::{ApiError, CustomerSource};

/// Request timeout for every call. One slow endpoint must not wedge the UI
/// for longer than this.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Talks to the dashboard backend over HTTP.
pub struct HttpSource {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Creates a source for `base_url` (scheme + host, trailing slash optional).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Http(e.to_string()))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ApiError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        response.json().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl CustomerSource for HttpSource {
    fn fetch_customers(&self) -> Result<Vec<CustomerRecord>, ApiError> {
        let customers: Vec<CustomerRecord> = self.get_json("/api/customers/json")?;
        info!(count = customers.len(), "fetched customer roster");
        Ok(customers)
    }

    fn fetch_customers_by_area(&self) -> Result<Vec<AreaGroup>, ApiError> {
        let grouped: BTreeMap<String, Vec<AreaCustomer>> =
            self.get_json("/calendar/customers_by_area")?;
        info!(areas = grouped.len(), "fetched area groups");
        Ok(order_area_groups(grouped))
    }

    fn quick_add(&self, customer_id: i64, date: NaiveDate) -> Result<(), ApiError> {
        let url = self.url("/route/add");
        debug!(%url, customer_id, %date, "POST");
        let response = self
            .client
            .post(&url)
            .form(&[
                ("customer_id", customer_id.to_string()),
                ("date", date.format("%Y-%m-%d").to_string()),
            ])
            .send()
            .map_err(|e| ApiError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }
        info!(customer_id, %date, "customer added to route");
        Ok(())
    }

    fn label(&self) -> String {
        self.base_url.clone()
    }
}
