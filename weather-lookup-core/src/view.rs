//! State behind the lookup card: query, loading flag, error and last result.
//!
//! ```text
//! Idle --submit--> Loading --ok--> Success
//!                          --err-> Failed
//! any  --clear---> Idle
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{QueryError, QueryExecutor, QueryInput, WeatherResult};

/// What a failed query does to the result from an earlier success.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaleResultPolicy {
    /// Keep showing the previous result next to the error.
    #[default]
    Retain,
    /// Drop the previous result.
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    Success,
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub present: bool,
    pub message: String,
}

impl ErrorState {
    fn set(&mut self, err: &QueryError) {
        self.present = true;
        self.message = err.message();
    }

    fn reset(&mut self) {
        self.present = false;
        self.message.clear();
    }
}

#[derive(Debug, Default)]
pub struct WeatherView {
    query: QueryInput,
    loading: bool,
    error: ErrorState,
    result: Option<WeatherResult>,
    fetched_at: Option<DateTime<Utc>>,
    on_error: StaleResultPolicy,
}

impl WeatherView {
    pub fn new(on_error: StaleResultPolicy) -> Self {
        Self { on_error, ..Self::default() }
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query.set_query(text);
    }

    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> &ErrorState {
        &self.error
    }

    pub fn result(&self) -> Option<&WeatherResult> {
        self.result.as_ref()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if self.error.present {
            Phase::Failed
        } else if self.result.is_some() {
            Phase::Success
        } else {
            Phase::Idle
        }
    }

    /// Enter `Loading`: clears the previous error and returns the query to run.
    pub fn begin_submit(&mut self) -> String {
        self.error.reset();
        self.loading = true;
        self.query.as_str().to_string()
    }

    /// Leave `Loading` with the outcome of the attempt.
    pub fn settle(&mut self, outcome: Result<WeatherResult, QueryError>) {
        self.loading = false;

        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.fetched_at = Some(Utc::now());
            }
            Err(err) => {
                self.error.set(&err);
                if self.on_error == StaleResultPolicy::Clear {
                    self.result = None;
                    self.fetched_at = None;
                }
            }
        }
    }

    /// Run one query to completion. The `&mut` borrow rules out a second
    /// submit while this one is in flight.
    pub async fn submit(&mut self, executor: &QueryExecutor) -> Phase {
        let query = self.begin_submit();
        let outcome = executor.execute(&query).await;
        self.settle(outcome);
        self.phase()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.result = None;
        self.fetched_at = None;
        self.error.reset();
    }
}
