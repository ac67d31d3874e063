use async_trait::async_trait;
use linktracer_application::ports::{AnswerRecord, DnsExchanger};
use linktracer_application::QueryContext;
use linktracer_domain::{DnsQuery, ExchangeError, RecordType};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

/// Scripted exchanger: answers per (server, record type), failing servers,
/// per-type delays that either honor the context or ignore it, and record
/// types whose exchange panics.
#[derive(Default)]
pub struct MockExchanger {
    answers: HashMap<(String, RecordType), Vec<AnswerRecord>>,
    failing: HashSet<String>,
    delays: HashMap<RecordType, Duration>,
    ignore_context: bool,
    panics: HashSet<RecordType>,
    calls: Mutex<Vec<(String, RecordType)>>,
}

impl MockExchanger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_answer(mut self, server: &str, record_type: RecordType, records: Vec<AnswerRecord>) -> Self {
        self.answers.insert((server.to_string(), record_type), records);
        self
    }

    pub fn failing(mut self, server: &str) -> Self {
        self.failing.insert(server.to_string());
        self
    }

    pub fn with_delay(mut self, record_type: RecordType, delay: Duration) -> Self {
        self.delays.insert(record_type, delay);
        self
    }

    /// Exchanges for `record_type` panic, killing the task that made them.
    pub fn panicking_on(mut self, record_type: RecordType) -> Self {
        self.panics.insert(record_type);
        self
    }

    /// Delays run to completion even when the context is done.
    pub fn ignoring_context(mut self) -> Self {
        self.ignore_context = true;
        self
    }

    pub fn calls(&self) -> Vec<(String, RecordType)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn servers_called_for(&self, record_type: RecordType) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|(_, rt)| *rt == record_type)
            .map(|(server, _)| server)
            .collect()
    }
}

#[async_trait]
impl DnsExchanger for MockExchanger {
    async fn exchange(
        &self,
        ctx: &QueryContext,
        query: &DnsQuery,
        server: &str,
    ) -> Result<Vec<AnswerRecord>, ExchangeError> {
        self.calls
            .lock()
            .unwrap()
            .push((server.to_string(), query.record_type));

        if self.panics.contains(&query.record_type) {
            panic!("scripted exchanger failure for {}", query.record_type);
        }

        if let Some(delay) = self.delays.get(&query.record_type).copied() {
            if self.ignore_context {
                tokio::time::sleep(delay).await;
            } else {
                tokio::select! {
                    err = ctx.done() => return Err(ExchangeError::Aborted(err)),
                    _ = tokio::time::sleep(delay) => {}
                }
            }
        } else if let Some(err) = ctx.err() {
            return Err(ExchangeError::Aborted(err));
        }

        if self.failing.contains(server) {
            return Err(ExchangeError::Io {
                server: server.to_string(),
                message: "connection refused".to_string(),
            });
        }

        Ok(self
            .answers
            .get(&(server.to_string(), query.record_type))
            .cloned()
            .unwrap_or_default())
    }
}
