pub mod about;
pub mod analyze;
pub mod auth;
pub mod chat;
pub mod init;

use console::style;

/// Print a user-facing failure inline, the way the original interface
/// rendered error strings in place of analysis output. Callers continue
/// afterwards; no failure here is fatal to the process.
pub(crate) fn print_error_banner(message: &str) {
    println!("{}", style(message).red().bold());
}
