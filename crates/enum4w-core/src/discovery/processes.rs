//! Process rankings via `/proc`, with `ps` as a fallback.

use chrono::{DateTime, Local, Utc};
use procfs::prelude::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use super::users::parse_passwd;
use crate::config::ScanConfig;
use crate::error::{EnumError, Result};
use crate::exec::run_shell;
use crate::types::{ProcessOrder, ProcessRow, ProcessSource, ProcessTable};

/// System values shared by every row of one snapshot.
struct SnapshotContext<'a> {
    users: &'a HashMap<u32, String>,
    ticks_per_sec: u64,
    boot_time_secs: u64,
    now_secs: u64,
    page_size: u64,
    mem_total: u64,
}

/// Read every process from `/proc`.
///
/// `users` maps UIDs to names; unknown UIDs are shown numerically.
/// Processes that vanish or cannot be read mid-scan are skipped.
///
/// # Errors
///
/// Returns `EnumError::Procfs` if `/proc` itself cannot be read.
pub fn snapshot_processes(users: &HashMap<u32, String>) -> Result<Vec<ProcessRow>> {
    let ctx = SnapshotContext {
        users,
        ticks_per_sec: procfs::ticks_per_second(),
        boot_time_secs: procfs::boot_time_secs().map_err(|e| EnumError::Procfs(e.to_string()))?,
        now_secs: std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
        page_size: procfs::page_size(),
        mem_total: procfs::Meminfo::current()
            .map_err(|e| EnumError::Procfs(e.to_string()))?
            .mem_total,
    };

    let all_procs =
        procfs::process::all_processes().map_err(|e| EnumError::Procfs(e.to_string()))?;

    let mut rows = Vec::new();
    for entry in all_procs {
        let proc = match entry {
            Ok(p) => p,
            Err(e) => {
                debug!(error = %e, "skipping inaccessible process");
                continue;
            }
        };

        match collect_row(&proc, &ctx) {
            Ok(row) => rows.push(row),
            Err(e) => debug!(error = %e, "skipping process"),
        }
    }

    Ok(rows)
}

/// Build one `ps aux`-style row.
#[allow(clippy::cast_precision_loss)]
fn collect_row(proc: &procfs::process::Process, ctx: &SnapshotContext<'_>) -> Result<ProcessRow> {
    let stat = proc.stat().map_err(|e| EnumError::Procfs(e.to_string()))?;

    let user = proc.uid().map_or_else(
        |_| String::from("?"),
        |uid| {
            ctx.users
                .get(&uid)
                .cloned()
                .unwrap_or_else(|| uid.to_string())
        },
    );

    let ticks = ctx.ticks_per_sec.max(1);
    let cpu_secs = (stat.utime + stat.stime) as f64 / ticks as f64;
    let start_secs = ctx.boot_time_secs + stat.starttime / ticks;
    let elapsed = ctx.now_secs.saturating_sub(start_secs);
    let cpu_percent = if elapsed > 0 {
        cpu_secs / elapsed as f64 * 100.0
    } else {
        0.0
    };

    let rss_bytes = stat.rss * ctx.page_size;
    let mem_percent = if ctx.mem_total > 0 {
        rss_bytes as f64 / ctx.mem_total as f64 * 100.0
    } else {
        0.0
    };

    let cmdline = proc.cmdline().unwrap_or_default();
    let command = if cmdline.is_empty() {
        format!("[{}]", stat.comm)
    } else {
        cmdline.join(" ")
    };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let cpu_time_secs = cpu_secs as u64;

    Ok(ProcessRow {
        user,
        pid: stat.pid,
        cpu_percent,
        mem_percent,
        vsz_kib: stat.vsize / 1024,
        rss_kib: rss_bytes / 1024,
        state: stat.state,
        start: format_start(start_secs, ctx.now_secs),
        cpu_time_secs,
        command,
    })
}

/// `HH:MM` for processes started today, `MonDD` otherwise.
fn format_start(start_secs: u64, now_secs: u64) -> String {
    let to_local = |secs: u64| {
        i64::try_from(secs)
            .ok()
            .and_then(|s| DateTime::<Utc>::from_timestamp(s, 0))
            .map(|d| d.with_timezone(&Local))
    };
    match (to_local(start_secs), to_local(now_secs)) {
        (Some(start), Some(now)) if start.date_naive() == now.date_naive() => {
            start.format("%H:%M").to_string()
        }
        (Some(start), Some(_)) => start.format("%b%d").to_string(),
        _ => String::from("?"),
    }
}

/// Cumulative CPU time as `M:SS`.
fn format_cpu_time(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Column header matching `format_row`.
#[must_use]
pub fn header_line() -> String {
    format!(
        "{:<10} {:>7} {:>4} {:>4} {:>8} {:>7} {:<4} {:>5} {:>6} {}",
        "USER", "PID", "%CPU", "%MEM", "VSZ", "RSS", "STAT", "START", "TIME", "COMMAND"
    )
}

/// Render a row in `ps aux` layout.
#[must_use]
pub fn format_row(row: &ProcessRow) -> String {
    format!(
        "{:<10} {:>7} {:>4.1} {:>4.1} {:>8} {:>7} {:<4} {:>5} {:>6} {}",
        row.user,
        row.pid,
        row.cpu_percent,
        row.mem_percent,
        row.vsz_kib,
        row.rss_kib,
        row.state,
        row.start,
        format_cpu_time(row.cpu_time_secs),
        row.command
    )
}

/// Sort rows best-first for `order` and keep the top `limit`.
#[must_use]
pub fn rank_processes(mut rows: Vec<ProcessRow>, order: ProcessOrder, limit: usize) -> Vec<ProcessRow> {
    match order {
        ProcessOrder::Memory => {
            rows.sort_by(|a, b| b.rss_kib.cmp(&a.rss_kib).then(a.pid.cmp(&b.pid)));
        }
        ProcessOrder::Cpu => {
            rows.sort_by(|a, b| {
                b.cpu_percent
                    .total_cmp(&a.cpu_percent)
                    .then(a.pid.cmp(&b.pid))
            });
        }
    }
    rows.truncate(limit);
    rows
}

/// Split `ps` output into its header and the first `limit` body lines.
#[must_use]
pub fn split_ps_output(text: &str, limit: usize) -> Option<(String, Vec<String>)> {
    let mut lines = text.lines();
    let header = lines.next()?.trim_end().to_string();
    let body = lines.take(limit).map(str::to_string).collect();
    Some((header, body))
}

/// UID to name map from the account database; empty when unreadable.
///
/// Built once per run and shared by every process ranking.
pub async fn uid_names(passwd_path: &Path) -> HashMap<u32, String> {
    match tokio::fs::read_to_string(passwd_path).await {
        Ok(text) => parse_passwd(&text)
            .into_iter()
            .filter_map(|e| e.uid.map(|uid| (uid, e.name)))
            .collect(),
        Err(e) => {
            debug!(error = %e, "showing numeric UIDs");
            HashMap::new()
        }
    }
}

async fn ps_table(order: ProcessOrder, limit: usize) -> ProcessTable {
    let command = format!("ps aux --sort={}", order.ps_sort_key());
    let text = match run_shell(&command).await {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "cannot run ps");
            String::new()
        }
    };
    let (header, lines) = split_ps_output(&text, limit).unwrap_or_default();
    ProcessTable {
        header,
        lines,
        source: ProcessSource::Ps,
    }
}

/// Top processes for `order`, read from `/proc` or, failing that, from `ps`.
///
/// `users` is the map from `uid_names`.
pub async fn top_process_table(
    order: ProcessOrder,
    users: &HashMap<u32, String>,
    config: &ScanConfig,
) -> ProcessTable {
    match snapshot_processes(users) {
        Ok(rows) if !rows.is_empty() => ProcessTable {
            header: header_line(),
            lines: rank_processes(rows, order, config.top_processes)
                .iter()
                .map(format_row)
                .collect(),
            source: ProcessSource::Procfs,
        },
        Ok(_) => {
            debug!("no processes in /proc, falling back to ps");
            ps_table(order, config.top_processes).await
        }
        Err(e) => {
            warn!(error = %e, "falling back to ps");
            ps_table(order, config.top_processes).await
        }
    }
}
