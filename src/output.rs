//! Record format of the snapshot file.
//!
//! Every packed file becomes one record:
//!
//! ```text
//! ================================================================================
//! File: ./src/main.rs
//! ================================================================================
//! <content>
//!
//! ```
//!
//! The content is copied byte for byte and followed by two newlines.

use std::io::{self, Write};
use std::path::Path;

/// Width of the `=` delimiter lines.
pub const DELIMITER_WIDTH: usize = 80;

/// Formats a single record into a string.
pub fn format_record(path: &Path, content: &str) -> String {
    let delimiter = "=".repeat(DELIMITER_WIDTH);
    let mut out = String::with_capacity(content.len() + 2 * DELIMITER_WIDTH + 64);
    out.push_str(&delimiter);
    out.push('\n');
    out.push_str(&format!("File: {}\n", path.display()));
    out.push_str(&delimiter);
    out.push('\n');
    out.push_str(content);
    out.push_str("\n\n");
    out
}

/// Appends a record to `writer`.
pub fn write_record<W: Write>(writer: &mut W, path: &Path, content: &str) -> io::Result<()> {
    writer.write_all(format_record(path, content).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_layout() {
        let record = format_record(Path::new("./a.txt"), "hello");
        let line = "=".repeat(80);
        assert_eq!(record, format!("{line}\nFile: ./a.txt\n{line}\nhello\n\n"));
    }

    #[test]
    fn content_is_not_normalized() {
        let record = format_record(Path::new("./crlf.txt"), "a\r\nb\n");
        assert!(record.contains("\nFile: ./crlf.txt\n"));
        assert!(record.ends_with("a\r\nb\n\n\n"));
    }

    #[test]
    fn write_appends() {
        let mut buf = Vec::new();
        write_record(&mut buf, Path::new("./x"), "1").unwrap();
        write_record(&mut buf, Path::new("./y"), "2").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.matches("File: ").count(), 2);
        assert!(text.find("./x").unwrap() < text.find("./y").unwrap());
    }
}
