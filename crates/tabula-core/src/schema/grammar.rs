//! Lexical helpers for the catalog type grammar:
//!
//! ```text
//! type := primitive | array<type> | struct<name:type,...> | map<type,type>
//! ```

/// Splits `s` at commas that are not nested inside `<...>` or `(...)`.
///
/// Each fragment is trimmed. The result always has at least one element; a
/// string without top-level commas comes back whole. Unbalanced brackets are
/// not reported here: a stray closing bracket never drives the depth below
/// zero.
///
/// ```
/// # use tabula_core::split_top_level;
/// assert_eq!(
///     split_top_level("a:int,b:array<struct<x:int,y:string>>,c:float"),
///     ["a:int", "b:array<struct<x:int,y:string>>", "c:float"],
/// );
/// ```
pub fn split_top_level(s: &str) -> Vec<&str> {
    let mut fragments = vec![];
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                fragments.push(s[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }

    fragments.push(s[start..].trim());
    fragments
}

/// Splits a type descriptor into its lowercased base type and the content of
/// its outer angle brackets.
///
/// Only the first `<` and a single trailing `>` are considered; the content is
/// returned as written, so nested field names keep their case.
///
/// ```
/// # use tabula_core::parse_type_descriptor;
/// assert_eq!(parse_type_descriptor("STRING"), ("string".to_string(), ""));
/// assert_eq!(parse_type_descriptor("array<string>"), ("array".to_string(), "string"));
/// ```
pub fn parse_type_descriptor(type_str: &str) -> (String, &str) {
    let type_str = type_str.trim();

    match type_str.split_once('<') {
        None => (type_str.to_lowercase(), ""),
        Some((base, rest)) => {
            let content = rest.strip_suffix('>').unwrap_or(rest);
            (base.trim().to_lowercase(), content.trim())
        }
    }
}

/// Checks that every `<` and `(` in `s` is closed, in order, by the matching
/// bracket.
pub(super) fn check_brackets(s: &str) -> Result<(), &'static str> {
    let mut stack = vec![];

    for c in s.chars() {
        match c {
            '<' | '(' => stack.push(c),
            '>' => {
                if stack.pop() != Some('<') {
                    return Err("unexpected '>'");
                }
            }
            ')' => {
                if stack.pop() != Some('(') {
                    return Err("unexpected ')'");
                }
            }
            _ => {}
        }
    }

    match stack.last() {
        None => Ok(()),
        Some('<') => Err("unclosed '<'"),
        Some(_) => Err("unclosed '('"),
    }
}
