//! Text rendering of user records.

use std::io::{self, Write};

use rolodex_models::User;

use crate::cli::OutputFormat;

/// Full record, as printed after add/get/update/delete.
pub fn user_card(user: &User) -> String {
    format!(
        "id={}, name={}, phone={}, city={}, created_at={}",
        user.id,
        user.name,
        user.phone,
        user.city,
        user.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
}

/// Writes `users` one per line in the requested format.
pub fn write_users<W: Write>(out: &mut W, users: &[User], format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            for user in users {
                writeln!(out, "{}", user)?;
            }
        }
        OutputFormat::Brief => {
            for user in users {
                writeln!(out, "{}\t{}", user.id, user.name)?;
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(users).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
    }
    Ok(())
}
