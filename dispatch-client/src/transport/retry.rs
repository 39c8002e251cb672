//! Single-retry policy shared by transports.

use std::future::Future;
use std::time::Duration;

use log::debug;

use super::TransportError;

/// Run `attempt`, and if it fails with a retryable error, wait `backoff` and
/// run it once more. The second outcome is returned as is.
pub(crate) async fn retry_once<T, F, Fut>(
    backoff: Duration,
    mut attempt: F,
) -> Result<T, TransportError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, TransportError>>,
{
    match attempt().await {
        Err(first) if first.is_retryable() => {
            debug!("{first}; retrying once in {}ms", backoff.as_millis());
            tokio::time::sleep(backoff).await;
            attempt().await
        }
        outcome => outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;
    use rstest::rstest;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn network_error() -> TransportError {
        TransportError::Network {
            method: Method::Get,
            url: "http://localhost:8080/cabs/".to_owned(),
            message: "connection refused".to_owned(),
        }
    }

    fn run<T>(future: impl Future<Output = T>) -> T {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("runtime should build")
            .block_on(future)
    }

    #[rstest]
    fn success_is_not_retried() {
        let calls = AtomicUsize::new(0);

        let outcome = run(retry_once(Duration::ZERO, || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, TransportError>(7) }
        }));

        assert_eq!(outcome, Ok(7));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn one_failure_is_recovered_by_the_retry() {
        let calls = AtomicUsize::new(0);

        let outcome = run(retry_once(Duration::ZERO, || {
            let call = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if call == 0 {
                    Err(network_error())
                } else {
                    Ok(call)
                }
            }
        }));

        assert_eq!(outcome, Ok(1));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn two_failures_surface_without_a_third_attempt() {
        let calls = AtomicUsize::new(0);

        let outcome = run(retry_once(Duration::from_millis(5), || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err::<(), _>(network_error()) }
        }));

        assert_eq!(outcome, Err(network_error()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn non_retryable_failures_surface_immediately() {
        let calls = AtomicUsize::new(0);
        let error = TransportError::Request {
            method: Method::Post,
            url: "http://localhost:8080/orders/".to_owned(),
            message: "invalid header value".to_owned(),
        };

        let outcome = run(retry_once(Duration::ZERO, || {
            calls.fetch_add(1, Ordering::SeqCst);
            let error = error.clone();
            async move { Err::<(), _>(error) }
        }));

        assert_eq!(outcome, Err(error));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
