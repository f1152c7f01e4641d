//! Parallel execution of one command across many repositories
//!
//! Every repository gets its own tokio task. Tasks share a permit pool sized to
//! the worker limit (or to the repository count when unbounded) and, under
//! fail-fast, a cancellation signal. Results come back tagged with their
//! repository index, so storage order never depends on completion order.

use futures::stream::{FuturesUnordered, StreamExt};
use indicatif::ProgressBar;
use std::sync::Arc;
use tokio::sync::{watch, Semaphore};
use tracing::{debug, info, warn};

use super::discovery::Repository;
use crate::git::{CommandRunner, ExecutionResult};

/// How the executor schedules work
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutorOptions {
    /// Maximum simultaneous commands, 0 for no cap
    pub workers: usize,
    /// Cancel remaining work after the first failure
    pub fail_fast: bool,
}

impl ExecutorOptions {
    pub fn new(workers: usize, fail_fast: bool) -> Self {
        Self { workers, fail_fast }
    }

    /// Size of the permit pool for `total` repositories
    pub fn permit_count(&self, total: usize) -> usize {
        let permits = if self.workers == 0 { total } else { self.workers };
        permits.clamp(1, Semaphore::MAX_PERMITS)
    }
}

/// Results of a parallel run, one slot per input repository
#[derive(Debug, Default)]
pub struct Execution {
    /// `results[i]` belongs to the i-th input repository. A slot is `None`
    /// only when fail-fast cancelled that repository before it finished.
    pub results: Vec<Option<ExecutionResult>>,
    /// True when fail-fast stopped the run early
    pub aborted: bool,
}

impl Execution {
    /// Completed results in input order
    pub fn completed(&self) -> impl Iterator<Item = &ExecutionResult> {
        self.results.iter().flatten()
    }

    /// Number of slots left empty by cancellation
    pub fn skipped(&self) -> usize {
        self.results.iter().filter(|slot| slot.is_none()).count()
    }
}

/// Shared fail-fast state: a broadcast flag plus the permit pool it closes
#[derive(Clone)]
struct Cancellation {
    signal: Arc<watch::Sender<bool>>,
    semaphore: Arc<Semaphore>,
}

impl Cancellation {
    fn new(semaphore: Arc<Semaphore>) -> Self {
        let (signal, _) = watch::channel(false);
        Self {
            signal: Arc::new(signal),
            semaphore,
        }
    }

    fn is_cancelled(&self) -> bool {
        *self.signal.borrow()
    }

    /// Wakes every in-flight task and fails every pending permit acquisition
    fn cancel(&self) {
        self.signal.send_replace(true);
        self.semaphore.close();
    }

    /// Resolves once the run is cancelled
    async fn cancelled(&self) {
        let mut receiver = self.signal.subscribe();
        loop {
            let cancelled = *receiver.borrow_and_update();
            if cancelled {
                return;
            }
            if receiver.changed().await.is_err() {
                return futures::future::pending().await;
            }
        }
    }
}

/// Runs the command in one repository, or returns `None` if cancelled first
async fn run_slot<R>(
    runner: Arc<R>,
    repo: &Repository,
    args: &[String],
    cancellation: &Cancellation,
    fail_fast: bool,
) -> Option<ExecutionResult>
where
    R: CommandRunner + ?Sized,
{
    // A closed pool means fail-fast already fired
    let _permit = cancellation.semaphore.acquire().await.ok()?;
    if cancellation.is_cancelled() {
        return None;
    }

    let result = tokio::select! {
        result = runner.run(repo, args) => result,
        () = cancellation.cancelled() => {
            debug!(repo = %repo.name, "cancelled in flight");
            return None;
        }
    };

    if fail_fast && !result.success {
        info!(repo = %repo.name, "failure with fail-fast, cancelling remaining repositories");
        cancellation.cancel();
    }

    Some(result)
}

/// Runs `args` in every repository and collects the results in input order
///
/// At most `options.workers` commands run at once (all of them when it is 0).
/// With `options.fail_fast`, the first failure cancels the run: queued
/// repositories are skipped, in-flight commands are killed, and
/// [`Execution::aborted`] is set. `progress` advances once per finished
/// repository.
pub async fn execute_in_parallel<R>(
    runner: Arc<R>,
    repositories: &[Repository],
    args: &[String],
    options: ExecutorOptions,
    progress: &ProgressBar,
) -> Execution
where
    R: CommandRunner + ?Sized + 'static,
{
    let total = repositories.len();
    let semaphore = Arc::new(Semaphore::new(options.permit_count(total)));
    let cancellation = Cancellation::new(Arc::clone(&semaphore));
    let args: Arc<[String]> = args.into();

    debug!(
        total,
        permits = options.permit_count(total),
        fail_fast = options.fail_fast,
        "starting"
    );

    let mut tasks = FuturesUnordered::new();
    for (index, repo) in repositories.iter().cloned().enumerate() {
        let runner = Arc::clone(&runner);
        let args = Arc::clone(&args);
        let cancellation = cancellation.clone();
        let fail_fast = options.fail_fast;

        tasks.push(tokio::spawn(async move {
            let slot = run_slot(runner, &repo, &args, &cancellation, fail_fast).await;
            (index, slot)
        }));
    }

    let mut results: Vec<Option<ExecutionResult>> =
        std::iter::repeat_with(|| None).take(total).collect();
    while let Some(joined) = tasks.next().await {
        match joined {
            Ok((index, Some(result))) => {
                progress.inc(1);
                progress.set_message(result.name.clone());
                results[index] = Some(result);
            }
            Ok((_, None)) => {}
            Err(e) => warn!("repository task panicked: {e}"),
        }
    }

    Execution {
        results,
        aborted: cancellation.is_cancelled(),
    }
}
