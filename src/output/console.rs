//! Preview printing to the terminal

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::DirectoryGroups;

use super::config::OutputConfig;
use super::tree::{TreeLineKind, tree_lines};

/// Print the directory tree for `--preview`, coloured when enabled.
pub fn print_preview(root: &Path, groups: &DirectoryGroups, config: &OutputConfig) -> io::Result<()> {
    let choice = if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    write_preview(&mut stdout, root, groups)
}

/// Write the preview to any colour-capable writer.
pub fn write_preview<W: WriteColor>(
    out: &mut W,
    root: &Path,
    groups: &DirectoryGroups,
) -> io::Result<()> {
    writeln!(out, "Previewing structure for: {}", root.display())?;
    writeln!(out)?;

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    let mut dir_color = ColorSpec::new();
    dir_color.set_fg(Some(Color::Blue)).set_bold(true);

    for line in tree_lines(groups) {
        write!(out, "{}", line.indent())?;
        match line.kind {
            TreeLineKind::Header => out.set_color(&bold)?,
            TreeLineKind::Dir => out.set_color(&dir_color)?,
            TreeLineKind::File => out.reset()?,
        }
        write!(out, "{}", line.name)?;
        out.reset()?;
        writeln!(out)?;
    }

    writeln!(out)?;
    writeln!(out, "Found {} code files", groups.file_count())?;
    Ok(())
}
