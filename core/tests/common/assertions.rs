// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Helpers for inspecting rendered calendar documents.

/// One `VEVENT` block as unfolded content lines.
#[derive(Debug, Clone)]
pub struct EventBlock {
    pub lines: Vec<String>,
}

impl EventBlock {
    /// Value of the first property named `name`, parameters excluded.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.lines.iter().find_map(|line| {
            let rest = line.strip_prefix(name)?;
            if rest.starts_with(':') || rest.starts_with(';') {
                rest.split_once(':').map(|(_, value)| value)
            } else {
                None
            }
        })
    }

    /// The full content line of the first property named `name`.
    pub fn line(&self, name: &str) -> Option<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .find(|line| line.starts_with(&format!("{name}:")) || line.starts_with(&format!("{name};")))
    }

    /// Property names in order of appearance.
    pub fn names(&self) -> Vec<&str> {
        self.lines
            .iter()
            .filter_map(|line| line.split([':', ';']).next())
            .collect()
    }
}

/// Split a document into its events, unfolding continuation lines.
pub fn event_blocks(document: &str) -> Vec<EventBlock> {
    let unfolded = document.replace("\r\n ", "").replace("\r\n\t", "");
    let mut blocks = Vec::new();
    let mut current: Option<Vec<String>> = None;
    for line in unfolded.split("\r\n") {
        match line {
            "BEGIN:VEVENT" => current = Some(Vec::new()),
            "END:VEVENT" => {
                if let Some(lines) = current.take() {
                    blocks.push(EventBlock { lines });
                }
            }
            _ => {
                if let Some(lines) = current.as_mut() {
                    lines.push(line.to_owned());
                }
            }
        }
    }
    blocks
}

/// Asserts that the document is framed as a calendar with CRLF line endings.
///
/// # Panics
///
/// Panics if the header, footer or line endings are wrong.
pub fn assert_well_formed(document: &str) {
    assert!(
        document.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"),
        "Unexpected header: {document}"
    );
    assert!(
        document.ends_with("END:VCALENDAR\r\n"),
        "Unexpected footer: {document}"
    );
    assert!(
        !document.replace("\r\n", "").contains('\n'),
        "Bare LF in document"
    );
}
