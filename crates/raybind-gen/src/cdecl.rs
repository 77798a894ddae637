//! Hand-written parser for the narrow declaration shape raylib headers use.
//!
//! Recognizes single-line exported declarations of the form
//! `RLAPI ReturnType Name(type [*] name, ...);`. Does NOT handle general C
//! syntax: macros, struct definitions, comments, variadics, and multi-line
//! signatures are skipped by the scanner rather than parsed. The source
//! headers are known to keep every declaration on one line.

use crate::error::{GenError, Result};

/// Export markers that introduce a generatable declaration.
const EXPORT_MARKERS: &[&str] = &["RLAPI", "RAYGUIAPI"];

/// A declaration extracted from header text, parameters still raw.
///
/// Parameter text is kept unparsed here so that malformed tokens in
/// functions outside the allow-list can never abort a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDecl {
    /// Return type identifier (always a bare identifier in the source headers).
    pub return_type: String,
    /// Function name.
    pub name: String,
    /// Raw parameter list text between the parentheses.
    pub params: String,
}

/// A classified function parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CParam {
    /// Bare type name, `const`/`unsigned` qualifiers stripped.
    pub type_name: String,
    /// Whether the parameter is a pointer.
    pub is_pointer: bool,
    /// Parameter name.
    pub name: String,
}

/// Scan concatenated header text for exported declarations, in order.
///
/// Lines that do not match the expected shape are skipped silently; this is
/// a deliberate narrowing, not an error path.
pub fn scan(header_text: &str) -> Vec<RawDecl> {
    header_text.lines().filter_map(parse_line).collect()
}

/// Try to parse one line as an exported declaration.
///
/// The export marker must sit at line start. Anything after the terminating
/// `;` (typically a trailing comment) is ignored.
fn parse_line(line: &str) -> Option<RawDecl> {
    let rest = EXPORT_MARKERS.iter().find_map(|m| strip_marker(line, m))?;

    let (return_type, rest) = take_ident(rest)?;
    let (name, rest) = take_ident(rest)?;

    let rest = rest.trim_start().strip_prefix('(')?;
    let close = rest.find(')')?;
    let params = rest[..close].trim();

    let tail = rest[close + 1..].trim_start();
    if !tail.starts_with(';') {
        return None;
    }

    // Anything the parameter grammar can never produce (function pointers,
    // `...`) disqualifies the line here, so the classifier only ever sees
    // plausible comma-separated tokens.
    if !params
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '*' || c == ',' || c == ' ')
    {
        return None;
    }

    Some(RawDecl {
        return_type,
        name,
        params: params.to_string(),
    })
}

/// Strip an export marker anchored at line start, requiring a following
/// whitespace so `RLAPIX` never matches.
fn strip_marker<'a>(line: &'a str, marker: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(marker)?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}

/// Consume one leading identifier, skipping leading whitespace.
fn take_ident(s: &str) -> Option<(String, &str)> {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some((s[..end].to_string(), &s[end..]))
}

/// Split raw parameter-list text into classified parameters.
///
/// The literal `void` list (and an empty list) mean "no parameters".
pub fn parse_params(params: &str) -> Result<Vec<CParam>> {
    let params = params.trim();
    if params.is_empty() || params == "void" {
        return Ok(Vec::new());
    }
    params.split(',').map(parse_param).collect()
}

/// Decompose one `[const|unsigned] type [*] name` token.
///
/// Qualifiers are tolerated but dropped: the type registry keys only on the
/// bare type name. Pointer-ness is a distinct binary attribute.
fn parse_param(token: &str) -> Result<CParam> {
    let malformed = || GenError::MalformedParameter {
        fragment: token.trim().to_string(),
    };

    let mut type_name: Option<&str> = None;
    let mut is_pointer = false;
    let mut name: Option<&str> = None;

    for word in tokenize(token) {
        match word {
            "const" | "unsigned" => {}
            "*" => {
                if is_pointer || name.is_some() {
                    return Err(malformed());
                }
                is_pointer = true;
            }
            ident => {
                if !is_ident(ident) {
                    return Err(malformed());
                }
                if type_name.is_none() {
                    type_name = Some(ident);
                } else if name.is_none() {
                    name = Some(ident);
                } else {
                    return Err(malformed());
                }
            }
        }
    }

    match (type_name, name) {
        (Some(t), Some(n)) => Ok(CParam {
            type_name: t.to_string(),
            is_pointer,
            name: n.to_string(),
        }),
        _ => Err(malformed()),
    }
}

/// Split a parameter token on whitespace, keeping `*` as its own token.
fn tokenize(s: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for part in s.split_whitespace() {
        let mut remaining = part;
        while let Some(star) = remaining.find('*') {
            if star > 0 {
                tokens.push(&remaining[..star]);
            }
            tokens.push("*");
            remaining = &remaining[star + 1..];
        }
        if !remaining.is_empty() {
            tokens.push(remaining);
        }
    }
    tokens
}

fn is_ident(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
