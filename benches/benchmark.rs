use async_trait::async_trait;
use criterion::{criterion_group, criterion_main, Criterion};
use git_multi::core::{
    execute_in_parallel, find_repos_from_path, ExclusionSet, ExecutorOptions, Repository,
};
use git_multi::git::{CommandRunner, ExecutionResult};
use indicatif::ProgressBar;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

fn setup_many_repos(count: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    for i in 0..count {
        // Spread repositories over groups and add noise the walker has to skip
        let group = root.join(format!("group-{}", i % 10));
        fs::create_dir_all(group.join(format!("repo-{}", i)).join(".git")).unwrap();
        fs::create_dir_all(group.join("node_modules").join(format!("dep-{}", i))).unwrap();
    }

    temp_dir
}

/// Returns immediately so only scheduling overhead is measured
struct NoopRunner;

#[async_trait]
impl CommandRunner for NoopRunner {
    async fn run(&self, repo: &Repository, _args: &[String]) -> ExecutionResult {
        ExecutionResult::succeeded(repo, "")
    }
}

fn bench_discovery(c: &mut Criterion) {
    let count = 100;
    let temp_dir = setup_many_repos(count);
    let path = temp_dir.path().to_path_buf();
    let excludes = ExclusionSet::with_defaults();

    c.bench_function("discovery_100_repos", |b| {
        b.iter(|| find_repos_from_path(&path, &excludes).unwrap())
    });
}

fn bench_executor(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repos: Vec<Repository> = (0..200)
        .map(|i| Repository::new(format!("repo-{i}"), format!("/repos/repo-{i}")))
        .collect();
    let args = vec!["status".to_string()];
    let runner = Arc::new(NoopRunner);
    let progress = ProgressBar::hidden();

    for workers in [0, 8] {
        c.bench_function(&format!("executor_200_repos_workers_{workers}"), |b| {
            b.to_async(&rt).iter(|| {
                execute_in_parallel(
                    Arc::clone(&runner),
                    &repos,
                    &args,
                    ExecutorOptions::new(workers, false),
                    &progress,
                )
            })
        });
    }
}

criterion_group!(benches, bench_discovery, bench_executor);
criterion_main!(benches);
