use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::checksum;
use crate::userlist::UserList;

/// Relative path of the generated artifact. The consuming build expects the
/// header exactly here; the directory is assumed to pre-exist.
pub const OUTPUT_PATH: &str = "include/usernames.inc";

const HEADER_PREAMBLE: &str = "\
#pragma once

#include \"util/types.h\"

#include <string>
#include <unordered_map>

namespace banana {

";

/// Generate the header and write it to [`OUTPUT_PATH`], overwriting any
/// previous artifact.
pub fn generate(list: &UserList) -> Result<()> {
    let output_path = Path::new(OUTPUT_PATH);
    let output_file = File::create(output_path)
        .with_context(|| format!("failed to create output file '{}'", output_path.display()))?;
    let mut output = BufWriter::new(output_file);

    write_header(&mut output, list)
        .with_context(|| format!("failed to write output file '{}'", output_path.display()))?;
    output
        .flush()
        .with_context(|| format!("failed to flush output file '{}'", output_path.display()))?;

    info!(
        "Wrote {} ELink and {} SLink table entries to {}",
        list.elink.len(),
        list.slink.len(),
        output_path.display()
    );
    Ok(())
}

/// Stream the full header, both tables, to the given sink.
pub fn write_header(out: &mut impl Write, list: &UserList) -> std::io::Result<()> {
    out.write_all(HEADER_PREAMBLE.as_bytes())?;
    write_table(out, "sELinkUserNames", &list.elink)?;
    out.write_all(b"\n")?;
    write_table(out, "sSLinkUserNames", &list.slink)?;
    out.write_all(b"\n} // namespace banana")
}

/// Write one checksum-to-name table as a C++ map literal.
fn write_table(out: &mut impl Write, table_name: &str, names: &[String]) -> std::io::Result<()> {
    writeln!(
        out,
        "const static inline std::unordered_map<u32, std::string_view> {table_name} = {{"
    )?;
    for name in names {
        // The checksum is keyed on the raw name; only the emitted literal
        // gets escaped.
        writeln!(
            out,
            "    {{{:#010x}, \"{}\"}},",
            checksum::calculate(name.as_bytes()),
            escape(name)
        )?;
    }
    writeln!(out, "}};")
}

/// Escape a name for emission inside a C++ string literal.
fn escape(name: &str) -> String {
    if !name.contains(['"', '\\']) {
        return name.to_string();
    }
    let mut escaped = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if c == '"' || c == '\\' {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::userlist::UserList;

    fn render(list: &UserList) -> String {
        let mut out = Vec::new();
        write_header(&mut out, list).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_lists_emit_empty_tables() {
        let rendered = render(&UserList::default());
        assert_eq!(
            rendered,
            "#pragma once\n\
             \n\
             #include \"util/types.h\"\n\
             \n\
             #include <string>\n\
             #include <unordered_map>\n\
             \n\
             namespace banana {\n\
             \n\
             const static inline std::unordered_map<u32, std::string_view> sELinkUserNames = {\n\
             };\n\
             \n\
             const static inline std::unordered_map<u32, std::string_view> sSLinkUserNames = {\n\
             };\n\
             \n\
             } // namespace banana"
        );
    }

    #[test]
    fn entries_are_keyed_by_crc32_and_hex_formatted() {
        let list = UserList {
            elink: vec!["alice".to_string()],
            slink: vec!["bob".to_string()],
        };
        let rendered = render(&list);
        assert!(rendered.contains("    {0x278ebc47, \"alice\"},\n"));
        assert!(rendered.contains("    {0xf5cbb140, \"bob\"},\n"));
    }

    #[test]
    fn hex_keys_are_zero_padded_to_eight_digits() {
        // CRC-32 of the empty string is 0.
        let list = UserList {
            elink: vec![String::new()],
            slink: Vec::new(),
        };
        assert!(render(&list).contains("    {0x00000000, \"\"},\n"));
    }

    #[test]
    fn elink_table_precedes_slink_table() {
        let rendered = render(&UserList::default());
        let elink = rendered.find("sELinkUserNames").unwrap();
        let slink = rendered.find("sSLinkUserNames").unwrap();
        assert!(elink < slink);
    }

    #[test]
    fn entries_preserve_input_order() {
        let list = UserList {
            elink: vec!["zeta".to_string(), "alpha".to_string()],
            slink: Vec::new(),
        };
        let rendered = render(&list);
        assert!(rendered.find("\"zeta\"").unwrap() < rendered.find("\"alpha\"").unwrap());
    }

    #[test]
    fn emitted_key_parses_back_to_the_checksum() {
        let list = UserList {
            elink: vec!["charlie".to_string()],
            slink: Vec::new(),
        };
        let rendered = render(&list);
        let line = rendered
            .lines()
            .find(|line| line.contains("charlie"))
            .unwrap();
        let hex = &line[line.find("0x").unwrap() + 2..][..8];
        assert_eq!(
            u32::from_str_radix(hex, 16).unwrap(),
            checksum::calculate(b"charlie")
        );
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let list = UserList {
            elink: vec![r#"we"ird\name"#.to_string()],
            slink: Vec::new(),
        };
        assert!(render(&list).contains(r#""we\"ird\\name""#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let list = UserList {
            elink: vec!["alice".to_string(), "bob".to_string()],
            slink: vec!["charlie".to_string()],
        };
        assert_eq!(render(&list), render(&list));
    }
}
