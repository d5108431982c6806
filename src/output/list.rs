//! The listing pipeline: working set, filter, sort, reverse, render

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::Node;

use super::config::ListOptions;
use super::format::{format_size, format_time};

/// Formatter for one listing run.
///
/// Holds the immutable options and turns a resolved node into output:
/// `format` builds the plain text, `print` writes to stdout and may
/// color directory names. Both walk the same pipeline: build the
/// working set (the node's children, or the node itself for a file),
/// apply the kind filter, stable-sort by modification time if asked,
/// reverse if asked, then skip hidden entries per-entry while emitting.
pub struct ListFormatter {
    options: ListOptions,
    use_color: bool,
}

impl ListFormatter {
    pub fn new(options: ListOptions) -> Self {
        Self {
            options,
            use_color: false,
        }
    }

    /// Enable colored directory names in `print`. `format` stays plain.
    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    /// Select and order the entries to emit. Hidden entries are still
    /// present here; they are skipped at render time so they never
    /// shift the order of visible ones.
    fn working_set<'a>(&self, node: &'a Node) -> Vec<&'a Node> {
        let mut entries: Vec<&Node> = match node.children() {
            Some(children) => children.iter().collect(),
            None => vec![node],
        };

        if let Some(filter) = self.options.filter {
            entries.retain(|entry| filter.matches(entry));
        }
        if self.options.sort_by_time {
            entries.sort_by_key(|entry| entry.time_modified());
        }
        if self.options.reverse_order {
            entries.reverse();
        }

        entries
    }

    fn is_visible(&self, entry: &Node) -> bool {
        self.options.show_hidden || !entry.is_hidden()
    }

    /// One long-format line, without the trailing name or newline.
    fn detail_fields(&self, entry: &Node) -> String {
        let size_field = if self.options.human_readable {
            format_size(entry.size())
        } else {
            entry.size().to_string()
        };
        format!(
            "{} {} {} ",
            entry.permissions(),
            size_field,
            format_time(entry.time_modified())
        )
    }

    /// Render the listing as plain text.
    ///
    /// Names mode joins visible names with single spaces and no
    /// trailing newline; an all-hidden or empty directory yields an
    /// empty string. Long mode emits one newline-terminated line per
    /// visible entry.
    pub fn format(&self, node: &Node) -> String {
        let mut output = String::new();
        let mut first = true;

        for entry in self.working_set(node) {
            if !self.is_visible(entry) {
                continue;
            }
            if self.options.long_format {
                output.push_str(&self.detail_fields(entry));
                output.push_str(entry.name());
                output.push('\n');
            } else {
                if !first {
                    output.push(' ');
                }
                output.push_str(entry.name());
                first = false;
            }
        }

        output
    }

    /// Render to stdout, coloring directory names blue/bold when color
    /// is enabled. An empty listing prints nothing, not a blank line.
    pub fn print(&self, node: &Node) -> io::Result<()> {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        let mut emitted = false;

        for entry in self.working_set(node) {
            if !self.is_visible(entry) {
                continue;
            }
            if self.options.long_format {
                write!(stdout, "{}", self.detail_fields(entry))?;
                self.write_name(&mut stdout, entry)?;
                writeln!(stdout)?;
            } else {
                if emitted {
                    write!(stdout, " ")?;
                }
                self.write_name(&mut stdout, entry)?;
            }
            emitted = true;
        }

        if emitted && !self.options.long_format {
            writeln!(stdout)?;
        }
        Ok(())
    }

    fn write_name(&self, stdout: &mut StandardStream, entry: &Node) -> io::Result<()> {
        if entry.is_dir() {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            write!(stdout, "{}", entry.name())?;
            stdout.reset()?;
        } else {
            write!(stdout, "{}", entry.name())?;
        }
        Ok(())
    }
}
