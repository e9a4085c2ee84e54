//! Table extractor.
//!
//! Scans the document line by line and replaces every table block (header
//! row, separator row, data rows) with a stash token holding the generated
//! `<table>`. Cell text is inserted as-is: it is neither re-escaped nor
//! interpreted as markdown by later stages.

use crate::stash::Stash;

/// One parsed row of a table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TableRow {
    pub is_header: bool,
    /// Trimmed cell text in column order. Column counts are not validated.
    pub cells: Vec<String>,
}

/// Replace table blocks in `input` with block tokens.
///
/// Lines that are not part of a table pass through unchanged and in order.
pub(crate) fn extract_tables(input: &str, stash: &mut Stash) -> String {
    let lines: Vec<&str> = input.lines().collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());
    let mut idx = 0;

    while let Some(&line) = lines.get(idx) {
        let starts_table =
            is_row_line(line) && lines.get(idx + 1).is_some_and(|next| is_separator_line(next));
        if !starts_table {
            out.push(line.to_owned());
            idx += 1;
            continue;
        }

        let mut rows = vec![parse_row(line, true)];
        // Skip header and separator
        idx += 2;
        while let Some(&row) = lines.get(idx).filter(|row| is_row_line(row)) {
            rows.push(parse_row(row, false));
            idx += 1;
        }
        out.push(stash.block(render_table(&rows)));
    }

    out.join("\n")
}

/// A row line starts and ends with `|` once trimmed.
fn is_row_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('|') && trimmed.ends_with('|')
}

/// Any line holding both `-` and `|` is a separator. Its contents,
/// alignment markers included, are not interpreted.
fn is_separator_line(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.contains('-') && trimmed.contains('|')
}

/// Strip the outer pipes, split on `|` and trim every cell.
fn parse_row(line: &str, is_header: bool) -> TableRow {
    let mut s = line.trim();
    if let Some(stripped) = s.strip_prefix('|') {
        s = stripped;
    }
    if let Some(stripped) = s.strip_suffix('|') {
        s = stripped;
    }
    TableRow {
        is_header,
        cells: s.split('|').map(|cell| cell.trim().to_owned()).collect(),
    }
}

fn render_table(rows: &[TableRow]) -> String {
    let mut out = String::from("<table>\n");
    let (header, body): (Vec<&TableRow>, Vec<&TableRow>) =
        rows.iter().partition(|row| row.is_header);

    out.push_str("<thead>\n");
    for row in header {
        push_row(&mut out, row);
    }
    out.push_str("</thead>\n<tbody>\n");
    for row in body {
        push_row(&mut out, row);
    }
    out.push_str("</tbody>\n</table>");
    out
}

fn push_row(out: &mut String, row: &TableRow) {
    let tag = if row.is_header { "th" } else { "td" };
    out.push_str("<tr>");
    for cell in &row.cells {
        out.push('<');
        out.push_str(tag);
        out.push('>');
        out.push_str(cell);
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
    }
    out.push_str("</tr>\n");
}
