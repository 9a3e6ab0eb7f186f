//! Scripted in-memory implementation of the remote data port.

use std::collections::VecDeque;
use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use flopboard_client::{Error, Result, WinnersApi};
use flopboard_types::{IntervalBuckets, WinnersPage, WinnersQuery};

type Scripted<T> = VecDeque<std::result::Result<T, String>>;

/// Replays queued outcomes in order and records every winners query.
///
/// An exhausted queue fails the call, so a test that forgets to script a
/// response fails loudly instead of hanging on a default.
#[derive(Default)]
pub struct FakeApi {
    winners: Mutex<Scripted<WinnersPage>>,
    intervals: Mutex<Scripted<IntervalBuckets>>,
    queries: Mutex<Vec<WinnersQuery>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue_winners(&self, page: WinnersPage) {
        self.winners.lock().unwrap().push_back(Ok(page));
    }

    pub fn enqueue_winners_failure(&self, message: impl Into<String>) {
        self.winners.lock().unwrap().push_back(Err(message.into()));
    }

    pub fn enqueue_intervals(&self, buckets: IntervalBuckets) {
        self.intervals.lock().unwrap().push_back(Ok(buckets));
    }

    pub fn enqueue_intervals_failure(&self, message: impl Into<String>) {
        self.intervals.lock().unwrap().push_back(Err(message.into()));
    }

    /// Every winners query received, in call order.
    pub fn recorded_queries(&self) -> Vec<WinnersQuery> {
        self.queries.lock().unwrap().clone()
    }

    fn pop<T>(queue: &Mutex<Scripted<T>>, what: &str) -> Result<T> {
        match queue.lock().unwrap().pop_front() {
            Some(Ok(value)) => Ok(value),
            Some(Err(message)) => Err(Error::Internal(anyhow!("{message}"))),
            None => Err(Error::Internal(anyhow!("no scripted {what} response left"))),
        }
    }
}

#[async_trait]
impl WinnersApi for FakeApi {
    async fn winners_by_year(&self, query: &WinnersQuery) -> Result<WinnersPage> {
        self.queries.lock().unwrap().push(query.clone());
        Self::pop(&self.winners, "winners")
    }

    async fn producer_intervals(&self) -> Result<IntervalBuckets> {
        Self::pop(&self.intervals, "intervals")
    }
}
