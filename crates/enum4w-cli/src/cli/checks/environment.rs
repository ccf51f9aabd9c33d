//! `Root file analysis` section.

use colored::Colorize;
use enum4w_core::environment::detect_environment;
use enum4w_core::EnvironmentFacts;

use super::Context;
use crate::output;

pub fn execute(ctx: &Context) -> EnvironmentFacts {
    output::section("Root file analysis");

    let facts = detect_environment(&ctx.config.root_dir);
    println!("{}", render(&facts));
    facts
}

/// One green line per inference, or `None`.
fn render(facts: &EnvironmentFacts) -> String {
    let inferences = facts.inferences();
    if inferences.is_empty() {
        return String::from("None");
    }
    inferences
        .iter()
        .map(|i| i.green().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
