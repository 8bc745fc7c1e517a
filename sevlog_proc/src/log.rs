//SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared expansion for the four severity macros.

use crate::parser::{lformat_impl, parse_tag};
use proc_macro::{TokenStream, TokenTree};
use std::collections::VecDeque;

/// Expands `log_X!(tag, "fmt {k}", k = v, ...)` into the pre / formatter /
/// post sequence for `severity` (one of `error`, `info`, `warning`, `debug`).
///
/// With `debug_guard`, the whole expansion is wrapped in a check of the
/// process-wide debug flag so a disabled call formats nothing and evaluates
/// none of the value expressions.
pub fn expand(input: TokenStream, severity: &str, debug_guard: bool) -> TokenStream {
    let mut input: VecDeque<TokenTree> = input.into_iter().collect();
    let tag = match parse_tag(&mut input) {
        Ok(tag) => tag,
        Err(e) => return e,
    };
    let body = lformat_impl(&mut input, "formatter");

    let core = format!(
        r#"
        let mut record = sevlog::hidden::{severity}_pre({tag});
        let mut formatter = sevlog::hidden::Formatter::new(&mut record);
        {body}
        sevlog::hidden::{severity}_post(record);
        "#
    );
    let src = if debug_guard {
        format!(
            r#"
            {{
                if sevlog::hidden::debug_logging_enabled() {{
                    {core}
                }}
            }}
            "#
        )
    } else {
        format!("{{ {core} }}")
    };
    src.parse().unwrap()
}
