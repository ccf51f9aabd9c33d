//! `Top 10 processes by ...` sections.

use colored::Colorize;
use enum4w_core::discovery::top_process_table;
use enum4w_core::{ProcessOrder, ProcessTable};
use std::collections::HashMap;
use tracing::debug;

use super::Context;
use crate::output;

/// Print one ranking. `users` is the UID map built once per run.
pub async fn execute(ctx: &Context, order: ProcessOrder, users: &HashMap<u32, String>) {
    let label = match order {
        ProcessOrder::Cpu => "CPU",
        ProcessOrder::Memory => "MEM",
    };
    output::section(&format!(
        "Top {} processes by {label} usage: ",
        ctx.config.top_processes
    ));

    let table = top_process_table(order, users, &ctx.config).await;
    debug!(source = ?table.source, rows = table.lines.len(), "process table ready");

    println!("{}", render(&table, ctx.config.line_budget));
}

/// Header as-is, then every body line cut to `budget` and marked, in green.
fn render(table: &ProcessTable, budget: usize) -> String {
    let body: Vec<String> = table
        .lines
        .iter()
        .map(|line| output::truncate_line(line, budget))
        .collect();
    format!("{}\n{}", table.header, body.join("\n").green())
}

#[cfg(test)]
mod tests {
    use super::*;
    use enum4w_core::ProcessSource;

    #[test]
    fn test_header_uncut_body_marked() {
        colored::control::set_override(false);
        let table = ProcessTable {
            header: String::from("USER       PID %CPU %MEM COMMAND"),
            lines: vec![
                String::from("root         1  0.0  0.1 /sbin/init splash"),
                String::from("bob        812  4.2  1.0 sh"),
            ],
            source: ProcessSource::Ps,
        };

        let text = render(&table, 20);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "USER       PID %CPU %MEM COMMAND",
                "root         1  0.0  ...",
                "bob        812  4.2  ...",
            ]
        );
    }

    #[test]
    fn test_short_line_still_gets_marker() {
        colored::control::set_override(false);
        let table = ProcessTable {
            header: String::from("USER PID"),
            lines: vec![String::from("root 1")],
            source: ProcessSource::Procfs,
        };
        assert_eq!(render(&table, 120), "USER PID\nroot 1 ...");
    }
}
