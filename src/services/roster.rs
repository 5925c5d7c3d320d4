// src/services/roster.rs

//! Login roster extraction.

use std::collections::HashMap;

use crate::models::{Row, UserRecord};

/// Column holding the staff identifier.
pub const MASP_COLUMN: &str = "MASP";

/// Column holding the teacher's name.
pub const NAME_COLUMN: &str = "NOME";

/// Turn roster rows into users, keeping rows where both MASP and NOME are
/// non-blank. Order is preserved and duplicates are kept.
pub fn extract_users(rows: &[Row]) -> Vec<UserRecord> {
    rows.iter()
        .filter_map(|row| {
            let masp = row.get_trimmed(MASP_COLUMN)?;
            let name = row.get_trimmed(NAME_COLUMN)?;
            Some(UserRecord::new(masp, name))
        })
        .collect()
}

/// Look up a user by MASP. The first matching row wins.
///
/// When the roster lists the MASP more than once the result depends on row
/// order, so the ambiguity is logged instead of resolved.
pub fn find_user<'a>(users: &'a [UserRecord], masp: &str) -> Option<&'a UserRecord> {
    let masp = masp.trim();
    let mut matches = users.iter().filter(|user| user.masp == masp);
    let first = matches.next()?;

    let extra = matches.count();
    if extra > 0 {
        log::warn!(
            "MASP {} appears {} times in the roster; using the first entry ({})",
            masp,
            extra + 1,
            first.name
        );
    }

    Some(first)
}

/// MASP values listed more than once, with their row counts, in first-seen
/// order.
pub fn duplicate_masps(users: &[UserRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for user in users {
        *counts.entry(user.masp.as_str()).or_default() += 1;
    }

    let mut duplicates = Vec::new();
    for user in users {
        if let Some(count) = counts.remove(user.masp.as_str()) {
            if count > 1 {
                duplicates.push((user.masp.clone(), count));
            }
        }
    }
    duplicates
}
