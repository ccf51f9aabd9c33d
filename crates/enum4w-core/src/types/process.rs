//! Process listing types.

/// Ranking key for the process tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOrder {
    /// Resident memory, highest first
    Memory,
    /// CPU percentage, highest first
    Cpu,
}

impl ProcessOrder {
    /// `ps --sort` key for this ranking.
    #[must_use]
    pub const fn ps_sort_key(self) -> &'static str {
        match self {
            Self::Memory => "-rss",
            Self::Cpu => "-pcpu",
        }
    }
}

/// One running process, in the shape of a `ps aux` row.
#[derive(Debug, Clone)]
pub struct ProcessRow {
    /// Owner name (or numeric UID when unknown)
    pub user: String,
    /// Process ID
    pub pid: i32,
    /// Lifetime CPU usage in percent
    pub cpu_percent: f64,
    /// Share of physical memory in percent
    pub mem_percent: f64,
    /// Virtual size in KiB
    pub vsz_kib: u64,
    /// Resident set size in KiB
    pub rss_kib: u64,
    /// Single-letter state from `/proc/<pid>/stat`
    pub state: char,
    /// Start time, `HH:MM` today or `MonDD` otherwise
    pub start: String,
    /// Cumulative CPU time in seconds
    pub cpu_time_secs: u64,
    /// Full command line, or `[comm]` for kernel threads
    pub command: String,
}

/// Where a process table came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessSource {
    /// Read from `/proc`
    Procfs,
    /// Parsed from `ps aux`
    Ps,
}

/// A rendered process ranking: one header row and the top rows.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    /// Column header line
    pub header: String,
    /// Body lines, best ranked first
    pub lines: Vec<String>,
    /// Data source
    pub source: ProcessSource,
}
