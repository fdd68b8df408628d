use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use itertools::Itertools;

use crate::downloader::{DownloadOutcome, Downloader, FileDownloader, ImageTask};

/// Outcomes of a batch, in the order the tasks were submitted.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<DownloadOutcome>,
}

impl BatchReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.is_saved()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn failed_ids(&self) -> Vec<i64> {
        self.outcomes
            .iter()
            .filter(|outcome| !outcome.is_saved())
            .map(DownloadOutcome::id)
            .collect()
    }
}

/// Runs every task on a pool of `workers` threads and waits for all of them.
///
/// Workers pull from a shared queue, so a task that blocks only holds up its
/// own worker. A pool size of zero is treated as one.
pub fn run_all<T>(downloader: &Downloader<T>, tasks: Vec<ImageTask>, workers: usize) -> BatchReport
where
    T: FileDownloader,
{
    let workers = workers.max(1).min(tasks.len());

    let (task_sender, task_receiver) = unbounded();
    let (outcome_sender, outcome_receiver) = unbounded();

    for job in tasks.into_iter().enumerate() {
        if task_sender.send(job).is_err() {
            break;
        }
    }
    drop(task_sender);

    tracing::debug!(workers, "starting download pool");

    thread::scope(|scope| {
        for _ in 0..workers {
            let tasks = task_receiver.clone();
            let outcomes = outcome_sender.clone();

            scope.spawn(move || worker_loop(downloader, tasks, outcomes));
        }
    });
    drop(outcome_sender);

    let outcomes = outcome_receiver
        .iter()
        .sorted_by_key(|(index, _)| *index)
        .map(|(_, outcome)| outcome)
        .collect();

    BatchReport { outcomes }
}

fn worker_loop<T>(
    downloader: &Downloader<T>,
    tasks: Receiver<(usize, ImageTask)>,
    outcomes: Sender<(usize, DownloadOutcome)>,
) where
    T: FileDownloader,
{
    for (index, task) in tasks.iter() {
        let outcome = downloader.download_one(&task);

        if outcomes.send((index, outcome)).is_err() {
            break;
        }
    }
}
