//! Headless replay of a host session.
//!
//! Input is one IPC message per line. A line may carry an `at_ms` field,
//! the time in milliseconds since the start of the replay at which it is
//! handled; timers (preloader fade, resize debounce, scroll throttle) run
//! against that clock. Unstamped lines use the wall clock. The clock never
//! runs backwards.

use std::io::Write;
use std::path::Path;
use std::time::{Duration, Instant};

use landing_bridge::{BridgeSession, HostMessage, HostReply};
use landing_common::{BridgeError, LandingError};
use landing_view::Snapshot;
use landing_widgets::FormTransport;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

/// Per-run counters, logged at the end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReplayStats {
    pub handled: usize,
    pub rejected: usize,
    /// Form requests that completed and produced their own reply line.
    pub settled: usize,
}

/// Replay time: `at_ms` offsets from the start, clamped to be monotonic.
#[derive(Debug, Clone, Copy)]
struct ReplayClock {
    start: Instant,
    last: Instant,
}

impl ReplayClock {
    fn new(start: Instant) -> Self {
        Self { start, last: start }
    }

    fn at(&mut self, offset_ms: Option<u64>) -> Instant {
        let candidate = match offset_ms {
            Some(ms) => self.start + Duration::from_millis(ms),
            None => Instant::now(),
        };
        self.last = self.last.max(candidate);
        self.last
    }
}

fn line_offset(line: &str) -> Option<u64> {
    serde_json::from_str::<serde_json::Value>(line)
        .ok()?
        .get("at_ms")?
        .as_u64()
}

/// Read a document snapshot from a JSON file.
pub fn read_snapshot(path: &Path) -> Result<Snapshot, LandingError> {
    let raw = std::fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .map_err(|e| BridgeError::Snapshot(format!("{}: {e}", path.display())))?;
    Ok(snapshot)
}

/// Mount `snapshot` and write its reply.
pub async fn mount<T, W>(
    session: &mut BridgeSession<T>,
    snapshot: Snapshot,
    out: &mut W,
) -> Result<(), LandingError>
where
    T: FormTransport + Clone + 'static,
    W: Write,
{
    let reply = session
        .apply(HostMessage::Snapshot(snapshot), Instant::now())
        .await?;
    writeln!(out, "{}", reply_json(&reply))?;
    Ok(())
}

/// Feed every line of `input` to the session, writing one JSON line per
/// message. A rejected message produces an `{"error": ...}` line and the
/// replay continues.
///
/// A form request never stalls the replay: later lines are handled while it
/// is on the network, and its settled state is written as an extra line as
/// soon as it completes. At end of input the replay waits for it.
pub async fn run<T, R, W>(
    session: &mut BridgeSession<T>,
    input: R,
    out: &mut W,
) -> Result<ReplayStats, LandingError>
where
    T: FormTransport + Clone + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    run_from(session, input, out, Instant::now()).await
}

async fn run_from<T, R, W>(
    session: &mut BridgeSession<T>,
    input: R,
    out: &mut W,
    start: Instant,
) -> Result<ReplayStats, LandingError>
where
    T: FormTransport + Clone + 'static,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut stats = ReplayStats::default();
    let mut clock = ReplayClock::new(start);
    let mut lines = input.lines();

    loop {
        let pending = session.submission_pending();
        tokio::select! {
            Some(reply) = session.settle(), if pending => {
                stats.settled += 1;
                writeln!(out, "{}", reply_json(&reply))?;
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                let now = clock.at(line_offset(line));
                match session.handle_at(line, now).await {
                    Ok(reply) => {
                        stats.handled += 1;
                        debug!(commands = reply.commands.len(), "message handled");
                        writeln!(out, "{}", reply_json(&reply))?;
                    }
                    Err(e) => {
                        stats.rejected += 1;
                        warn!(error = %e, "message rejected");
                        writeln!(out, "{}", serde_json::json!({ "error": e.to_string() }))?;
                    }
                }
            }
        }
    }

    if let Some(reply) = session.settle().await {
        stats.settled += 1;
        writeln!(out, "{}", reply_json(&reply))?;
    }
    Ok(stats)
}

fn reply_json(reply: &HostReply) -> String {
    serde_json::to_string(reply).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("failed to serialize reply: {e}") }).to_string()
    })
}
