//SPDX-License-Identifier: MIT OR Apache-2.0

//! Token-stream parsing shared by the logging macros.
//!
//! No syn, no quote: the grammar here is small enough that hand-walking the
//! token trees is less machinery than a full parser stack, and it keeps this
//! crate dependency-free.

use proc_macro::{TokenStream, TokenTree};
use std::collections::{HashMap, VecDeque};

fn compile_error(message: &str) -> TokenStream {
    format!("compile_error!(\"{message}\")").parse().unwrap()
}

/// Parses the leading tag expression, consuming the trailing ','.
///
/// The tag is any expression, usually a string literal naming the calling
/// function or component.  Returns the expression as source text.
pub fn parse_tag(input: &mut VecDeque<TokenTree>) -> Result<String, TokenStream> {
    if input.is_empty() {
        return Err(compile_error(
            "expected a tag expression followed by a format string",
        ));
    }
    let mut tag = String::new();
    loop {
        match input.pop_front() {
            Some(TokenTree::Punct(p)) => {
                if p.as_char() == ',' {
                    if tag.is_empty() {
                        return Err(compile_error("expected a tag expression before ','"));
                    }
                    return Ok(tag);
                }
                tag.push_str(&p.to_string());
            }
            Some(TokenTree::Ident(i)) => {
                tag.push_str(&i.to_string());
            }
            Some(TokenTree::Literal(l)) => {
                tag.push_str(&l.to_string());
            }
            Some(TokenTree::Group(g)) => {
                tag.push_str(&g.to_string());
            }
            None => {
                return Err(compile_error(
                    "expected a format string after the tag expression",
                ));
            }
        }
    }
}

/// Parses a key from the stream, consuming tokens until '='.
fn parse_key(input: &mut VecDeque<TokenTree>) -> Option<String> {
    //go until we get a =.
    let mut key = String::new();
    loop {
        match input.pop_front() {
            Some(TokenTree::Punct(p)) => {
                if p.as_char() == '=' {
                    return Some(key);
                }
                return Some("".to_string());
            }
            Some(TokenTree::Ident(i)) => {
                key.push_str(&i.to_string());
            }
            Some(TokenTree::Literal(l)) => {
                key.push_str(&l.to_string());
            }
            Some(TokenTree::Group(g)) => {
                key.push_str(&g.to_string());
            }
            None => {
                return None;
            }
        }
    }
}

/// Parses a value expression, consuming tokens until ',' or end of stream.
///
/// The value is reassembled as source text, which handles arbitrary
/// expressions (method calls, references, literals) without needing to
/// understand them.
fn parse_value(input: &mut VecDeque<TokenTree>) -> String {
    //go until we get a , or end.
    let mut value = String::new();
    loop {
        match input.pop_front() {
            Some(TokenTree::Punct(p)) => {
                if p.as_char() == ',' {
                    return value;
                }
                value.push_str(&p.to_string());
            }
            Some(TokenTree::Ident(i)) => {
                value.push_str(&i.to_string());
            }
            Some(TokenTree::Literal(l)) => {
                value.push_str(&l.to_string());
            }
            Some(TokenTree::Group(g)) => {
                value.push_str(&g.to_string());
            }
            None => {
                return value;
            }
        }
    }
}

/// Builds the key/value map from the tokens after the format string.
fn build_kvs(input: &mut VecDeque<TokenTree>) -> Result<HashMap<String, String>, TokenStream> {
    let mut kvs = HashMap::new();
    if input.is_empty() {
        return Ok(kvs);
    }
    //first extract the comma.
    match input.pop_front() {
        Some(TokenTree::Punct(p)) if p.as_char() == ',' => {}
        _ => {
            return Err(compile_error("expected ',' after the format string"));
        }
    }
    loop {
        let key = match parse_key(input) {
            Some(k) => k,
            None => {
                return Ok(kvs);
            }
        };
        let value = parse_value(input);
        kvs.insert(key, value);
    }
}

/// Transforms `"format {key} string", key = expr, ...` into a sequence of
/// `formatter.write_literal(..)` / `formatter.write_val(..)` calls.
///
/// `{{` and `}}` escape literal braces.  Every `{key}` placeholder must have
/// a matching `key = expr` argument; a missing key, an unclosed brace, or a
/// stray `}` is a compile error; this is where the format string gets its
/// compile-time checking.
pub fn lformat_impl(input: &mut VecDeque<TokenTree>, formatter: &str) -> TokenStream {
    let format_string = match input.pop_front() {
        Some(TokenTree::Literal(l)) => {
            let out = l.to_string();
            if !out.starts_with('"') || !out.ends_with('"') {
                return compile_error("the format string must be a string literal");
            }
            out[1..out.len() - 1].to_string()
        }
        _ => {
            return compile_error("the format string must be a string literal");
        }
    };

    let kvs = match build_kvs(input) {
        Ok(kvs) => kvs,
        Err(e) => return e,
    };

    let mut source = String::new();
    let mut literal = String::new();
    let flush = |source: &mut String, literal: &mut String| {
        if !literal.is_empty() {
            source.push_str(formatter);
            source.push_str(".write_literal(\"");
            source.push_str(literal);
            source.push_str("\");\n");
            literal.clear();
        }
    };

    let chars: Vec<char> = format_string.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '{' if chars.get(i + 1) == Some(&'{') => {
                literal.push('{');
                i += 2;
            }
            '}' if chars.get(i + 1) == Some(&'}') => {
                literal.push('}');
                i += 2;
            }
            '{' => {
                flush(&mut source, &mut literal);
                i += 1;
                let mut key = String::new();
                while i < chars.len() && chars[i] != '}' {
                    key.push(chars[i]);
                    i += 1;
                }
                if i == chars.len() {
                    return compile_error("unclosed '{' in format string");
                }
                i += 1;
                let value = match kvs.get(&key) {
                    Some(v) => v,
                    None => {
                        return compile_error(&format!("key {key} not found"));
                    }
                };
                source.push_str(formatter);
                source.push_str(".write_val(");
                source.push_str(value);
                source.push_str(");\n");
            }
            '}' => {
                return compile_error("unmatched '}' in format string; use '}}' for a literal");
            }
            c => {
                literal.push(c);
                i += 1;
            }
        }
    }
    flush(&mut source, &mut literal);
    source.parse().unwrap()
}
