use linktracer_domain::QueryError;
use std::time::Duration;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Cancellation and deadline shared by every task of one analysis call.
///
/// Cloning is cheap and every clone observes the same token and deadline.
#[derive(Debug, Clone)]
pub struct QueryContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl QueryContext {
    /// A context that is never canceled and has no deadline.
    pub fn background() -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: None,
        }
    }

    /// A context whose deadline is `now + timeout`.
    ///
    /// A timeout too large to represent as an instant means no deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => Self::with_deadline(deadline),
            None => Self::background(),
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// The reason this context is done, if it already is.
    pub fn err(&self) -> Option<QueryError> {
        if self.token.is_cancelled() {
            return Some(QueryError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(QueryError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Resolves once the context is canceled or its deadline passes.
    pub async fn done(&self) -> QueryError {
        if let Some(err) = self.err() {
            return err;
        }

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.token.cancelled() => QueryError::Canceled,
                    _ = tokio::time::sleep_until(deadline) => QueryError::DeadlineExceeded,
                }
            }
            None => {
                self.token.cancelled().await;
                QueryError::Canceled
            }
        }
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self::background()
    }
}
