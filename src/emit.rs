use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use tracing::info;

use crate::error::ExtractError;
use crate::parser::Action;

const HEADER: &str = "# Anki-Connect Actions\n# This file has been processed to add delimiters for easy CLI processing\n\n";
const INDEX_STATUS: &str = "unprocessed";

/// JSON index element. Field order is the serialized key order.
#[derive(Debug, Serialize)]
pub struct IndexEntry<'a> {
    pub action: &'a str,
    pub index: usize,
    pub status: &'static str,
}

/// Paths of the two files written by [`write_outputs`].
#[derive(Debug)]
pub struct Outputs {
    pub text: PathBuf,
    pub index: PathBuf,
}

/// Render the delimited listing: header, then one block per action.
pub fn render_text(actions: &[Action]) -> String {
    let mut out = String::from(HEADER);
    for action in actions {
        out.push_str(&format!(
            "<<ACTION_START>>\naction_name: {}\ndescription: {}\n",
            action.name, action.description
        ));
        if let Some(request) = &action.sample_request {
            out.push_str(&format!("sample_request: \n{}\n", request));
        }
        out.push_str("<<ACTION_END>>\n\n");
    }
    out
}

/// Two-space pretty printing with every string char outside `' '..='~'`
/// written as a lowercase `\uXXXX` escape (surrogate pairs above U+FFFF).
struct AsciiPrettyFormatter<'a>(PrettyFormatter<'a>);

impl Formatter for AsciiPrettyFormatter<'_> {
    fn begin_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_array(writer)
    }

    fn end_array<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object(writer)
    }

    fn end_object<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.0.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.0.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if (' '..='~').contains(&c) {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

pub fn render_index(actions: &[Action]) -> serde_json::Result<String> {
    let entries: Vec<IndexEntry<'_>> = actions
        .iter()
        .map(|a| IndexEntry {
            action: &a.name,
            index: a.ordinal,
            status: INDEX_STATUS,
        })
        .collect();

    let mut buf = Vec::new();
    let formatter = AsciiPrettyFormatter(PrettyFormatter::with_indent(b"  "));
    entries.serialize(&mut serde_json::Serializer::with_formatter(&mut buf, formatter))?;
    // Every byte written above is ASCII.
    Ok(buf.into_iter().map(char::from).collect())
}

/// `out.txt` → `out_index.json`, next to the text output.
///
/// Leading dots never start an extension, so `..txt` keeps its whole name.
pub fn index_path(output: &Path) -> PathBuf {
    let mut name: OsString = match output.file_name().and_then(|n| n.to_str()) {
        Some(name) => strip_extension(name).into(),
        None => output.file_stem().unwrap_or_default().to_os_string(),
    };
    name.push("_index.json");
    output.with_file_name(name)
}

fn strip_extension(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) if !name[..dot].trim_start_matches('.').is_empty() => &name[..dot],
        _ => name,
    }
}

/// Write the text listing, then the JSON index. Not atomic: a failed index
/// write leaves the text file in place.
pub fn write_outputs(actions: &[Action], output: &Path) -> Result<Outputs, ExtractError> {
    write_file(output, &render_text(actions))?;
    println!(
        "Processed {} actions and saved to {}",
        actions.len(),
        output.display()
    );

    let index = index_path(output);
    let json = render_index(actions).map_err(|e| ExtractError::OutputWrite {
        path: index.clone(),
        source: e.into(),
    })?;
    write_file(&index, &json)?;
    println!(
        "Created JSON index with {} actions at {}",
        actions.len(),
        index.display()
    );

    info!(text = %output.display(), index = %index.display(), "outputs written");
    Ok(Outputs {
        text: output.to_path_buf(),
        index,
    })
}

fn write_file(path: &Path, contents: &str) -> Result<(), ExtractError> {
    fs::write(path, contents).map_err(|source| ExtractError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ──
