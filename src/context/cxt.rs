//! Burmeister `.cxt` reader and writer.
//!
//! Layout: `B`, a name line (usually blank), the object count, the attribute
//! count, a blank line, one line per object name, one line per attribute
//! name, then one row per object with `X` for incidence and `.` otherwise.

use std::collections::BTreeSet;

use crate::error::{ContextError, ContextResult};

use super::FormalContext;

/// Parse a Burmeister context.
pub fn read_cxt(content: &str) -> ContextResult<FormalContext> {
    let lines: Vec<&str> = content.lines().map(|l| l.trim_end_matches('\r')).collect();
    let line = |i: usize| -> ContextResult<&str> {
        lines.get(i).copied().ok_or_else(|| ContextError::Parse {
            line: i + 1,
            message: "unexpected end of file".into(),
        })
    };
    let count = |i: usize| -> ContextResult<usize> {
        let raw = line(i)?;
        raw.trim().parse().map_err(|_| ContextError::Parse {
            line: i + 1,
            message: format!("expected a count, found {raw:?}"),
        })
    };

    if line(0)?.trim() != "B" {
        return Err(ContextError::Parse {
            line: 1,
            message: "missing `B` header".into(),
        });
    }
    let n_objects = count(2)?;
    let n_attributes = count(3)?;

    let names_start: usize = 5;
    let attrs_start = section_end(names_start, n_objects, 3)?;
    let rows_start = section_end(attrs_start, n_attributes, 4)?;
    let rows_end = section_end(rows_start, n_objects, 3)?;
    if rows_end > lines.len() {
        return Err(ContextError::Parse {
            line: lines.len() + 1,
            message: format!("unexpected end of file, the counts call for {rows_end} lines"),
        });
    }

    let object_names = (names_start..attrs_start)
        .map(|i| line(i).map(str::to_string))
        .collect::<ContextResult<Vec<_>>>()?;
    let attribute_names = (attrs_start..rows_start)
        .map(|i| line(i).map(str::to_string))
        .collect::<ContextResult<Vec<_>>>()?;

    let mut incidence = Vec::with_capacity(n_objects);
    for i in rows_start..rows_end {
        let row = line(i)?.trim();
        if row.chars().count() != n_attributes {
            return Err(ContextError::Parse {
                line: i + 1,
                message: format!("expected {n_attributes} cells, found {}", row.chars().count()),
            });
        }
        let mut attrs = BTreeSet::new();
        for (m, cell) in row.chars().enumerate() {
            match cell {
                'X' | 'x' => {
                    attrs.insert(m);
                }
                '.' => {}
                other => {
                    return Err(ContextError::Parse {
                        line: i + 1,
                        message: format!("unexpected cell {other:?}"),
                    });
                }
            }
        }
        incidence.push(attrs);
    }

    FormalContext::new(object_names, attribute_names, incidence)
}

/// First line after a section of `count` lines starting at `start`.
/// `count_line` is the 1-based line the count was read from.
fn section_end(start: usize, count: usize, count_line: usize) -> ContextResult<usize> {
    start.checked_add(count).ok_or_else(|| ContextError::Parse {
        line: count_line,
        message: format!("count {count} is too large"),
    })
}

/// Render a context in Burmeister format.
pub fn write_cxt(context: &FormalContext) -> String {
    let mut out = String::new();
    out.push_str(&format!("B\n\n{}\n{}\n\n", context.n_objects(), context.n_attributes()));
    for name in context.object_names().iter().chain(context.attribute_names()) {
        out.push_str(name);
        out.push('\n');
    }
    for row in &context.incidence {
        for m in 0..context.n_attributes() {
            out.push(if row.contains(&m) { 'X' } else { '.' });
        }
        out.push('\n');
    }
    out
}
