// src/utils/log.rs

//! Console report output.
//!
//! Diagnostics go through the `log` facade. This module prints the listings
//! a person reads (rosters, subject blocks, summaries), one timestamped line
//! each, gated by the same level names `RUST_LOG` accepts.

use std::sync::OnceLock;

use ::log::{Level, LevelFilter};
use chrono::Local;

/// Width of the rule drawn around section headers.
const RULE_WIDTH: usize = 60;

static THRESHOLD: OnceLock<LevelFilter> = OnceLock::new();

/// Set the report threshold from a level name such as `info` or `debug`.
/// Unknown names fall back to `info`. Only the first call takes effect.
pub fn init(level: &str) {
    let _ = THRESHOLD.set(parse_threshold(level));
}

fn parse_threshold(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::Info)
}

fn enabled(level: Level) -> bool {
    level <= THRESHOLD.get().copied().unwrap_or(LevelFilter::Info)
}

fn line(level: Level, body: &str) -> String {
    format!("{} {:<5} {}", Local::now().format("%H:%M:%S"), level, body)
}

fn emit(level: Level, body: &str) {
    if !enabled(level) {
        return;
    }
    match level {
        Level::Error | Level::Warn => eprintln!("{}", line(level, body)),
        _ => println!("{}", line(level, body)),
    }
}

pub fn info(message: &str) {
    emit(Level::Info, message);
}

pub fn warn(message: &str) {
    emit(Level::Warn, message);
}

pub fn error(message: &str) {
    emit(Level::Error, message);
}

/// Print an outcome line regardless of the threshold.
pub fn success(message: &str) {
    println!("{}", line(Level::Info, message));
}

/// Section title between two rules.
pub fn header(title: &str) {
    let rule = "─".repeat(RULE_WIDTH);
    emit(Level::Info, &rule);
    emit(Level::Info, title);
    emit(Level::Info, &rule);
}

/// Indented list entry under the last header.
pub fn sub_item(message: &str) {
    emit(Level::Info, &format!("  · {message}"));
}

/// Key/value block with the keys padded to a common width.
pub fn summary(title: &str, items: &[(&str, String)]) {
    if !enabled(Level::Info) {
        return;
    }
    println!();
    for body in summary_lines(title, items) {
        emit(Level::Info, &body);
    }
}

fn summary_lines(title: &str, items: &[(&str, String)]) -> Vec<String> {
    let width = items
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    std::iter::once(format!("{title}:"))
        .chain(
            items
                .iter()
                .map(|(key, value)| format!("  {key:<width$}  {value}")),
        )
        .collect()
}
