// src/runner.rs
//! Batch resolution over a small pool of worker threads.
//!
//! Workers pull record indices off a shared counter and send results back
//! over a channel; the caller's thread is the only receiver and puts
//! results back in input order.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::thread;

use log::debug;

use crate::progress::Progress;
use crate::resolver::{Resolver, TeamInput, TeamMatches};
use crate::venue::VenueRecord;

/// Run `work` over `items` on up to `workers` threads. `label` names an
/// item for progress reporting.
fn fan_out<T, R, W, L>(
    items: &[T],
    workers: usize,
    work: W,
    label: L,
    mut progress: Option<&mut dyn Progress>,
) -> Vec<R>
where
    T: Sync,
    R: Send,
    W: Fn(&T) -> R + Sync,
    L: Fn(&T) -> &str,
{
    let workers = workers.min(items.len()).max(1);
    if let Some(p) = progress.as_deref_mut() {
        p.begin(items.len());
        p.log(&format!("Resolving {} records on {workers} workers...", items.len()));
    }

    let counter = AtomicUsize::new(0);
    let mut slots: Vec<Option<R>> = std::iter::repeat_with(|| None).take(items.len()).collect();

    thread::scope(|scope| {
        let (tx, rx) = mpsc::channel::<(usize, R)>();

        for _ in 0..workers {
            let tx = tx.clone();
            let (counter, work) = (&counter, &work);
            scope.spawn(move || loop {
                let i = counter.fetch_add(1, Ordering::Relaxed);
                if i >= items.len() {
                    break;
                }
                if tx.send((i, work(&items[i]))).is_err() {
                    break;
                }
            });
        }
        drop(tx); // main thread is sole receiver now

        for (i, result) in rx {
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(label(&items[i]));
            }
            slots[i] = Some(result);
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    debug!("fan_out: {} items on {workers} workers", items.len());
    slots.into_iter().flatten().collect()
}

/// Resolve state and codes for every venue; returns the filled records.
pub fn resolve_venues(
    resolver: &Resolver,
    venues: Vec<VenueRecord>,
    progress: Option<&mut dyn Progress>,
) -> Vec<VenueRecord> {
    fan_out(
        &venues,
        resolver.options().workers,
        |v| {
            let mut v = v.clone();
            resolver.resolve_venue(&mut v);
            v
        },
        |v| v.name.as_str(),
        progress,
    )
}

/// Scan every team's passages for mentions of `candidates`.
pub fn resolve_teams(
    resolver: &Resolver,
    teams: &[TeamInput],
    candidates: &[String],
    progress: Option<&mut dyn Progress>,
) -> Vec<TeamMatches> {
    fan_out(
        teams,
        resolver.options().workers,
        |t| resolver.match_passages(t, candidates),
        |t| t.name.as_str(),
        progress,
    )
}
