//! Retrying transient API failures.
//!
//! The mobile API intermittently answers with a technical error record
//! (`errmsg` plus a non-zero `opstatus`) that succeeds when the identical
//! request is reissued. Business rejections are never retried.

use std::future::Future;

use tracing::warn;

use super::types::ApiEnvelope;

/// Default number of additional attempts after the first.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Bounded retry of transient responses, without backoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Additional attempts after the first one.
    pub max_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32) -> Self {
        Self { max_retries }
    }

    /// Run `attempt` until it yields a non-transient response or the retry
    /// budget is spent.
    ///
    /// The last response is returned as-is, so callers must still inspect it
    /// for an error message. Errors from `attempt` abort immediately.
    pub async fn run<R, E, F, Fut>(&self, mut attempt: F) -> Result<R, E>
    where
        R: ApiEnvelope,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<R, E>>,
    {
        let mut response = attempt().await?;
        let mut retries = 0;

        while response.is_transient() && retries < self.max_retries {
            retries += 1;
            warn!(
                attempt = retries + 1,
                max_attempts = self.max_retries + 1,
                errmsg = response.status().error_message().unwrap_or_default(),
                "transient API failure, retrying"
            );
            response = attempt().await?;
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::southwest::types::ApiStatus;

    #[derive(Debug, PartialEq)]
    struct Reply {
        status: ApiStatus,
        attempt: u32,
    }

    impl ApiEnvelope for Reply {
        fn status(&self) -> &ApiStatus {
            &self.status
        }
    }

    fn transient(attempt: u32) -> Reply {
        Reply {
            status: ApiStatus {
                errmsg: Some("Backend timeout".into()),
                opstatus: Some(8009),
                ..ApiStatus::default()
            },
            attempt,
        }
    }

    fn ok(attempt: u32) -> Reply {
        Reply {
            status: ApiStatus::default(),
            attempt,
        }
    }

    #[tokio::test]
    async fn exhausts_eleven_attempts_and_returns_last_response() {
        let mut calls = 0;
        let reply = RetryPolicy::default()
            .run(|| {
                calls += 1;
                let n = calls;
                async move { Ok::<_, ()>(transient(n)) }
            })
            .await
            .unwrap();

        assert_eq!(calls, 11);
        assert_eq!(reply, transient(11));
    }

    #[tokio::test]
    async fn returns_first_non_transient_response() {
        let mut calls = 0;
        let reply = RetryPolicy::default()
            .run(|| {
                calls += 1;
                let n = calls;
                async move { Ok::<_, ()>(if n < 4 { transient(n) } else { ok(n) }) }
            })
            .await
            .unwrap();

        assert_eq!(calls, 4);
        assert_eq!(reply.attempt, 4);
        assert!(!reply.is_transient());
    }

    #[tokio::test]
    async fn success_on_tenth_retry() {
        let mut calls = 0;
        let reply = RetryPolicy::default()
            .run(|| {
                calls += 1;
                let n = calls;
                async move { Ok::<_, ()>(if n < 11 { transient(n) } else { ok(n) }) }
            })
            .await
            .unwrap();

        assert_eq!(calls, 11);
        assert!(!reply.is_transient());
    }

    #[tokio::test]
    async fn business_errors_are_not_retried() {
        let mut calls = 0;
        let reply = RetryPolicy::default()
            .run(|| {
                calls += 1;
                async move {
                    Ok::<_, ()>(Reply {
                        status: ApiStatus {
                            http_status_code: Some("NOT_FOUND".into()),
                            message: Some("no such reservation".into()),
                            ..ApiStatus::default()
                        },
                        attempt: 1,
                    })
                }
            })
            .await
            .unwrap();

        assert_eq!(calls, 1);
        assert_eq!(reply.status.status_code(), Some("NOT_FOUND"));
    }

    #[tokio::test]
    async fn errors_abort_without_retry() {
        let mut calls = 0;
        let result: Result<Reply, &str> = RetryPolicy::default()
            .run(|| {
                calls += 1;
                async move { Err("connection reset") }
            })
            .await;

        assert_eq!(calls, 1);
        assert_eq!(result.unwrap_err(), "connection reset");
    }

    #[tokio::test]
    async fn zero_retries_makes_one_attempt() {
        let mut calls = 0;
        let reply = RetryPolicy::new(0)
            .run(|| {
                calls += 1;
                let n = calls;
                async move { Ok::<_, ()>(transient(n)) }
            })
            .await
            .unwrap();

        assert_eq!(calls, 1);
        assert!(reply.is_transient());
    }
}
