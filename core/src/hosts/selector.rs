//! Parallel liveness probing of candidate hosts.

use std::time::{Duration, Instant};

use tokio::net::TcpStream;
use tokio::time::timeout;
use url::Url;

use crate::errors::NetworkError;
use crate::hosts::directory::HostDescriptor;

/// Maximum number of candidates probed concurrently in one tournament.
pub const MAX_CANDIDATES: usize = 25;
/// Per-host TCP dial timeout.
const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
/// Port probed for liveness (paste services are always reached over TLS).
const PROBE_PORT: u16 = 443;

/// Dials `host`'s hostname on `port` and reports whether it connected,
/// and how long the attempt took. Never returns a negative duration:
/// elapsed time is always measured forward from `Instant::now()` at the
/// start of the dial to completion, unlike a naive
/// `start - Instant::now()` which would go backwards.
async fn probe(base_url: &str, port: u16) -> Option<(String, Duration)> {
    let parsed = Url::parse(base_url).ok()?;
    let hostname = parsed.host_str()?.to_string();

    let start = Instant::now();
    let dial = timeout(PROBE_TIMEOUT, TcpStream::connect((hostname.as_str(), port))).await;
    match dial {
        Ok(Ok(_stream)) => Some((base_url.to_string(), start.elapsed())),
        _ => None,
    }
}

/// Races up to [`MAX_CANDIDATES`] hosts on port 443 and returns the one
/// with the globally smallest successful connect time.
///
/// Waits for every probe to finish (or time out) before deciding a
/// winner: a fast failure never preempts a slightly slower success.
pub async fn find_fastest(hosts: &[HostDescriptor]) -> Result<HostDescriptor, NetworkError> {
    find_fastest_on_port(hosts, PROBE_PORT).await
}

/// Same as [`find_fastest`] but against an arbitrary port, so tests can
/// race against local listeners without binding the privileged port
/// 443.
async fn find_fastest_on_port(
    hosts: &[HostDescriptor],
    port: u16,
) -> Result<HostDescriptor, NetworkError> {
    let candidates: Vec<&HostDescriptor> = hosts.iter().take(MAX_CANDIDATES).collect();
    let candidate_count = candidates.len();
    tracing::debug!(candidate_count, port, "racing hosts for liveness");

    let probes = candidates
        .iter()
        .map(|h| probe(&h.base_url, port))
        .collect::<Vec<_>>();
    let results = join_all_spawned(probes).await;

    let winner = results
        .into_iter()
        .flatten()
        .min_by_key(|(_, elapsed)| *elapsed);

    match winner {
        Some((url, elapsed)) => {
            tracing::info!(host = %url, ?elapsed, "selected fastest host");
            candidates
                .into_iter()
                .find(|h| h.base_url == url)
                .cloned()
                .ok_or(NetworkError::NoLiveHost { candidates: candidate_count })
        }
        None => {
            tracing::warn!(candidate_count, "no candidate host answered the probe");
            Err(NetworkError::NoLiveHost { candidates: candidate_count })
        }
    }
}

/// Small local stand-in for `futures::future::join_all` so the crate
/// does not need a direct dependency on the `futures` umbrella crate
/// for a single call site. Spawns each future as its own task so probes
/// genuinely run concurrently rather than sequentially polled.
async fn join_all_spawned<F, T>(futures: Vec<F>) -> Vec<T>
where
    F: std::future::Future<Output = T> + Send + 'static,
    T: Send + 'static,
{
    let handles: Vec<_> = futures.into_iter().map(tokio::spawn).collect();
    let mut out = Vec::with_capacity(handles.len());
    for handle in handles {
        if let Ok(value) = handle.await {
            out.push(value);
        }
    }
    out
}
