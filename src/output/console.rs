//! Console output formatter
//!
//! One line per file: a right-aligned human size, then the path relative to
//! the scan root with the searched prefix highlighted. A summary line follows.

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::index::IndexStats;
use crate::record::FileRef;
use crate::scan::format_size;

use super::config::OutputConfig;
use super::display_path;

const SIZE_WIDTH: usize = 7;

pub struct ConsoleFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl ConsoleFormatter<StandardStream> {
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), config)
    }
}

impl<W: WriteColor> ConsoleFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_files(&mut self, root: &Path, files: &[FileRef]) -> io::Result<()> {
        for file in files {
            self.write_file(root, file)?;
        }
        Ok(())
    }

    fn write_file(&mut self, root: &Path, file: &FileRef) -> io::Result<()> {
        if self.config.show_size {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.out, "{:>width$}", format_size(file.size()), width = SIZE_WIDTH)?;
            self.out.reset()?;
            write!(self.out, "  ")?;
        }

        let path = display_path(root, file);
        let name = file.name();
        let dir = path.strip_suffix(name).unwrap_or("");
        write!(self.out, "{}", dir)?;

        let matched = self.matched_len(name);
        if matched > 0 {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)).set_bold(true))?;
            write!(self.out, "{}", &name[..matched])?;
            self.out.reset()?;
        }
        self.out
            .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        write!(self.out, "{}", &name[matched..])?;
        self.out.reset()?;
        writeln!(self.out)
    }

    /// Length of the highlighted part of `name`; names are ASCII, so byte
    /// offsets are character boundaries.
    fn matched_len(&self, name: &str) -> usize {
        match &self.config.highlight_prefix {
            Some(prefix) if name.len() >= prefix.len() && name.is_char_boundary(prefix.len()) => {
                if name[..prefix.len()].eq_ignore_ascii_case(prefix) {
                    prefix.len()
                } else {
                    0
                }
            }
            _ => 0,
        }
    }

    pub fn finish(&mut self, matched: usize, stats: &IndexStats) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} of {} files, {} distinct sizes",
            matched, stats.files, stats.distinct_sizes
        )?;
        self.out.flush()
    }
}
