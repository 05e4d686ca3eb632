use std::{
    fmt::Write as _,
    io::{self, Write},
};

use log::debug;

use crate::types::ReportEntry;

/// Characters that are not printed as-is: format characters, separators
/// other than ASCII space, private use areas and noncharacters.
const NON_PRINTABLE: &[(char, char)] = &[
    ('\u{00a0}', '\u{00a0}'),
    ('\u{00ad}', '\u{00ad}'),
    ('\u{0600}', '\u{0605}'),
    ('\u{061c}', '\u{061c}'),
    ('\u{06dd}', '\u{06dd}'),
    ('\u{070f}', '\u{070f}'),
    ('\u{0890}', '\u{0891}'),
    ('\u{08e2}', '\u{08e2}'),
    ('\u{1680}', '\u{1680}'),
    ('\u{180e}', '\u{180e}'),
    ('\u{2000}', '\u{200f}'),
    ('\u{2028}', '\u{202f}'),
    ('\u{205f}', '\u{2064}'),
    ('\u{2066}', '\u{206f}'),
    ('\u{3000}', '\u{3000}'),
    ('\u{e000}', '\u{f8ff}'),
    ('\u{fdd0}', '\u{fdef}'),
    ('\u{feff}', '\u{feff}'),
    ('\u{fff9}', '\u{fffb}'),
    ('\u{110bd}', '\u{110bd}'),
    ('\u{110cd}', '\u{110cd}'),
    ('\u{13430}', '\u{1343f}'),
    ('\u{1bca0}', '\u{1bca3}'),
    ('\u{1d173}', '\u{1d17a}'),
    ('\u{e0001}', '\u{e0001}'),
    ('\u{e0020}', '\u{e007f}'),
    ('\u{f0000}', '\u{10ffff}'),
];

fn is_printable(c: char) -> bool {
    if c.is_control() {
        return false;
    }
    let cp = c as u32;
    if cp & 0xfffe == 0xfffe {
        return false;
    }
    !NON_PRINTABLE.iter().any(|&(lo, hi)| (lo..=hi).contains(&c))
}

/// Double-quote `s` the way Go's `%q` verb does: printable characters are
/// kept, `"` and `\` are backslashed, C0 controls and DEL become `\xNN` and
/// other non-printables `\uNNNN` or `\UNNNNNNNN`.
pub(crate) fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' | '\\' => {
                out.push('\\');
                out.push(c);
            }
            _ if is_printable(c) => out.push(c),
            '\u{7}' => out.push_str("\\a"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            _ => {
                let cp = c as u32;
                // Writing to a String cannot fail
                let _ = if cp < 0x20 || cp == 0x7f {
                    write!(out, "\\x{:02x}", cp)
                } else if cp < 0x10000 {
                    write!(out, "\\u{:04x}", cp)
                } else {
                    write!(out, "\\U{:08x}", cp)
                };
            }
        }
    }
    out.push('"');
    out
}

/// Write one line per entry: the count padded to two columns, a tab, then
/// the signature as a quoted string literal.
pub fn print_report<W: Write>(writer: &mut W, entries: &[ReportEntry]) -> io::Result<()> {
    debug!("Printing report for {} entries", entries.len());
    for entry in entries {
        writeln!(writer, "{:>2}\t{}", entry.count, quote(entry.signature.as_str()))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn print_json_report<W: Write>(writer: &mut W, entries: &[ReportEntry]) -> io::Result<()> {
    debug!("Printing JSON report for {} entries", entries.len());
    serde_json::to_writer_pretty(&mut *writer, entries)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
