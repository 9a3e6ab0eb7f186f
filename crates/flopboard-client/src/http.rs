//! reqwest-backed implementation of the awards API.

use std::time::Duration;

use async_trait::async_trait;
use flopboard_types::{IntervalBuckets, WinnersPage, WinnersQuery};
use reqwest::{Client, Request};

use crate::error::Result;
use crate::WinnersApi;

const INTERVALS_PROJECTION: &str = "max-min-win-interval-for-producers";

/// HTTP client for the awards API.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    /// Build a client with a request timeout against the given base URL.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn movies_url(&self) -> String {
        format!("{}/movies", self.base_url)
    }

    fn winners_request(&self, query: &WinnersQuery) -> Result<Request> {
        let mut params: Vec<(&str, String)> = vec![
            ("page", query.page.to_string()),
            ("pageSize", query.page_size.to_string()),
            ("winner", query.winner.to_string()),
        ];
        // An empty year means "no year filter" and is omitted entirely.
        if !query.year.is_empty() {
            params.push(("year", query.year.clone()));
        }
        let request = self.client.get(self.movies_url()).query(&params).build()?;
        Ok(request)
    }

    fn intervals_request(&self) -> Result<Request> {
        let request = self
            .client
            .get(self.movies_url())
            .query(&[("projection", INTERVALS_PROJECTION)])
            .build()?;
        Ok(request)
    }
}

#[async_trait]
impl WinnersApi for HttpApi {
    async fn winners_by_year(&self, query: &WinnersQuery) -> Result<WinnersPage> {
        let request = self.winners_request(query)?;
        let response = self.client.execute(request).await?.error_for_status()?;
        Ok(response.json::<WinnersPage>().await?)
    }

    async fn producer_intervals(&self) -> Result<IntervalBuckets> {
        let request = self.intervals_request()?;
        let response = self.client.execute(request).await?.error_for_status()?;
        Ok(response.json::<IntervalBuckets>().await?)
    }
}
