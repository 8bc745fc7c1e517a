//SPDX-License-Identifier: MIT OR Apache-2.0

//! # sevlog procedural macros
//!
//! This crate generates the logging call sites for
//! [sevlog](https://crates.io/crates/sevlog).  Each macro transforms a format
//! string with key-value pairs into calls against sevlog's `Formatter`,
//! bracketed by the matching `*_pre`/`*_post` functions:
//!
//! ```ignore
//! // This macro call:
//! // sevlog::log_info!("startup", "listening on {port}", port = 8080);
//!
//! // Expands to approximately:
//! // {
//! //     let mut record = sevlog::hidden::info_pre("startup");
//! //     let mut formatter = sevlog::hidden::Formatter::new(&mut record);
//! //     formatter.write_literal("listening on ");
//! //     formatter.write_val(8080);
//! //     sevlog::hidden::info_post(record);
//! // }
//! ```
//!
//! The format string is validated at expansion time: it must be a string
//! literal, every `{key}` placeholder needs a matching `key = expr`
//! argument, and `{{`/`}}` escape literal braces.  Getting any of that wrong
//! is a compile error, not a runtime surprise.
//!
//! `log_debug!` differs in one respect: its expansion is wrapped in a check
//! of the process-wide debug flag, so before `sevlog::enable_debug()` a call
//! site evaluates nothing but one atomic load.

use proc_macro::TokenStream;
use std::collections::VecDeque;

mod log;
mod parser;

/// Logs at error severity.
///
/// # Syntax
/// ```ignore
/// sevlog::log_error!(tag, "format string with {keys}", key = value, ...);
/// ```
///
/// The tag (usually the calling function's name) is prepended to the message
/// as `"tag: "`.
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # let logger = Arc::new(sevlog::InMemoryLogger::new());
/// # sevlog::install_logger(logger.clone());
/// # sevlog::start();
/// sevlog::log_error!("read_config", "missing file {name}", name = "app.toml");
/// # assert!(logger.drain_logs().contains("read_config: missing file app.toml"));
/// # sevlog::deinit().unwrap();
/// ```
#[proc_macro]
pub fn log_error(input: TokenStream) -> TokenStream {
    log::expand(input, "error", false)
}

/// Logs at info severity.
///
/// # Syntax
/// ```ignore
/// sevlog::log_info!(tag, "format string with {keys}", key = value, ...);
/// ```
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # let logger = Arc::new(sevlog::InMemoryLogger::new());
/// # sevlog::install_logger(logger.clone());
/// # sevlog::start();
/// sevlog::log_info!("startup", "listening on {port}", port = 8080);
/// # assert!(logger.drain_logs().contains("startup: listening on 8080"));
/// # sevlog::deinit().unwrap();
/// ```
#[proc_macro]
pub fn log_info(input: TokenStream) -> TokenStream {
    log::expand(input, "info", false)
}

/// Logs at warning severity.
///
/// # Syntax
/// ```ignore
/// sevlog::log_warning!(tag, "format string with {keys}", key = value, ...);
/// ```
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # let logger = Arc::new(sevlog::InMemoryLogger::new());
/// # sevlog::install_logger(logger.clone());
/// # sevlog::start();
/// sevlog::log_warning!("worker", "queue depth {depth}", depth = 512);
/// # assert!(logger.drain_logs().contains("worker: queue depth 512"));
/// # sevlog::deinit().unwrap();
/// ```
#[proc_macro]
pub fn log_warning(input: TokenStream) -> TokenStream {
    log::expand(input, "warning", false)
}

/// Logs at debug severity, gated on the process-wide debug flag.
///
/// Before `sevlog::enable_debug()` has been called, a `log_debug!` call site
/// returns immediately without formatting anything or evaluating its value
/// expressions.  An empty tag (`""`) adds no prefix, unlike the other three
/// macros, which always prepend the tag.
///
/// # Syntax
/// ```ignore
/// sevlog::log_debug!(tag, "format string with {keys}", key = value, ...);
/// ```
///
/// # Examples
/// ```
/// # use std::sync::Arc;
/// # let logger = Arc::new(sevlog::InMemoryLogger::new());
/// # sevlog::install_logger(logger.clone());
/// # sevlog::start();
/// sevlog::log_debug!("parser", "token {t}", t = "ident");   // silent: debug is off
/// sevlog::enable_debug();
/// sevlog::log_debug!("parser", "token {t}", t = "ident");
/// # let logs = logger.drain_logs();
/// # assert_eq!(logs.matches("parser: token ident").count(), 1);
/// # sevlog::deinit().unwrap();
/// ```
#[proc_macro]
pub fn log_debug(input: TokenStream) -> TokenStream {
    log::expand(input, "debug", true)
}

/// Low-level macro generating formatter calls from a format string.
///
/// This is the expansion engine the logging macros share, exposed for
/// advanced use.  It writes to any object with `write_literal`/`write_val`
/// methods.
///
/// # Syntax
/// ```ignore
/// lformat!(formatter_ident, "format string with {keys}", key1 = value1, ...);
/// ```
///
/// # Examples
/// ```
/// # struct Collector(String);
/// # impl Collector {
/// #   fn write_literal(&mut self, s: &str) { self.0.push_str(s); }
/// #   fn write_val<V: std::fmt::Display>(&mut self, v: V) { self.0.push_str(&v.to_string()); }
/// # }
/// # let mut out = Collector(String::new());
/// use sevlog_proc::lformat;
/// lformat!(out, "Hello, {world}!", world = 23);
/// # assert_eq!(out.0, "Hello, 23!");
/// ```
///
/// # Error Cases
///
/// Missing formatter identifier:
/// ```compile_fail
/// use sevlog_proc::lformat;
/// lformat!(23);
/// ```
///
/// Missing key in format string:
/// ```compile_fail
/// # struct Collector;
/// # impl Collector {
/// #   fn write_literal(&mut self, s: &str) {}
/// #   fn write_val<V: std::fmt::Display>(&mut self, v: V) {}
/// # }
/// # let mut out = Collector;
/// use sevlog_proc::lformat;
/// lformat!(out, "Hello {missing}!", provided = 123);
/// ```
#[proc_macro]
pub fn lformat(input: TokenStream) -> TokenStream {
    let mut collect: VecDeque<_> = input.into_iter().collect();

    //get formatter ident
    let formatter_ident = match collect.pop_front() {
        Some(proc_macro::TokenTree::Ident(i)) => i,
        _ => {
            return r#"compile_error!("lformat!() must be called with a formatter ident")"#
                .parse()
                .unwrap();
        }
    };
    //eat comma
    match collect.pop_front() {
        Some(proc_macro::TokenTree::Punct(p)) if p.as_char() == ',' => {}
        _ => {
            return r#"compile_error!("expected ','")"#.parse().unwrap();
        }
    }

    parser::lformat_impl(&mut collect, &formatter_ident.to_string())
}
