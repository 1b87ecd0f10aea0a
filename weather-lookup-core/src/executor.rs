use crate::{QueryError, WeatherProvider, WeatherResult};

/// Validates a query and runs it against a provider.
#[derive(Debug)]
pub struct QueryExecutor {
    provider: Box<dyn WeatherProvider>,
}

impl QueryExecutor {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Blank queries fail with [`QueryError::EmptyInput`] without touching the network.
    pub async fn execute(&self, query: &str) -> Result<WeatherResult, QueryError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(QueryError::EmptyInput);
        }

        let outcome = self.provider.current(query).await;
        if let Err(err) = &outcome {
            log::warn!("Lookup for {query:?} failed: {err}");
        }
        outcome
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    };

    /// Provider that replays a canned outcome and records what it was asked.
    #[derive(Debug, Clone)]
    pub(crate) struct FakeProvider {
        outcome: Result<WeatherResult, QueryError>,
        pub calls: Arc<AtomicUsize>,
        pub queries: Arc<Mutex<Vec<String>>>,
    }

    impl FakeProvider {
        pub(crate) fn new(outcome: Result<WeatherResult, QueryError>) -> Self {
            Self {
                outcome,
                calls: Arc::new(AtomicUsize::new(0)),
                queries: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl WeatherProvider for FakeProvider {
        async fn current(&self, query: &str) -> Result<WeatherResult, QueryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.queries.lock().unwrap().push(query.to_string());
            self.outcome.clone()
        }
    }

    pub(crate) fn london() -> WeatherResult {
        WeatherResult {
            city: "London".into(),
            country: "UK".into(),
            temperature_celsius: Some(15.0),
            condition_code: Some(1000),
            icon_url: "//x/icon.png".into(),
            condition_text: "Sunny".into(),
        }
    }

    #[tokio::test]
    async fn blank_queries_never_reach_provider() {
        let fake = FakeProvider::new(Ok(london()));
        let calls = fake.calls.clone();
        let exec = QueryExecutor::new(Box::new(fake));

        for q in ["", " ", "\t\n  "] {
            assert_eq!(exec.execute(q).await, Err(QueryError::EmptyInput));
        }
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn valid_query_makes_exactly_one_call_with_trimmed_text() {
        let fake = FakeProvider::new(Ok(london()));
        let calls = fake.calls.clone();
        let queries = fake.queries.clone();
        let exec = QueryExecutor::new(Box::new(fake));

        let result = exec.execute("  London ").await.expect("success");

        assert_eq!(result, london());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*queries.lock().unwrap(), vec!["London".to_string()]);
    }

    #[tokio::test]
    async fn provider_errors_pass_through() {
        let fake = FakeProvider::new(Err(QueryError::RemoteError("API key is invalid.".into())));
        let exec = QueryExecutor::new(Box::new(fake));

        let err = exec.execute("London").await.unwrap_err();
        assert_eq!(err.message(), "API key is invalid.");
    }
}
