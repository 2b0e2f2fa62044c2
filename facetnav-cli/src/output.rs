use crate::cli::OutputFormat;
use crate::context::NodeEntity;
use crate::error::CliResult;
use colored::Colorize;
use facetnav_stats::LevelInfo;

/// Render navigation levels for display.
pub fn format_levels(levels: &[LevelInfo<NodeEntity>], format: OutputFormat) -> CliResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(levels)?),
        OutputFormat::Tree => Ok(format_tree(levels)),
    }
}

/// Print levels to stdout.
pub fn print_levels(levels: &[LevelInfo<NodeEntity>], format: OutputFormat) -> CliResult<()> {
    let text = format_levels(levels, format)?;
    println!("{}", text.trim_end());
    Ok(())
}

/// One line per node, indented two spaces per depth:
///
/// ```text
/// Electronics (1) [items: 3, children: 2]
///   Phones (2) [items: 2, children: 1] *
/// ```
///
/// `*` marks the requested node.
fn format_tree(levels: &[LevelInfo<NodeEntity>]) -> String {
    let mut out = String::new();
    for level in levels {
        write_level(&mut out, level, 0);
    }
    out
}

fn write_level(out: &mut String, level: &LevelInfo<NodeEntity>, depth: usize) {
    let name = level.entity.display_name();
    let name = if level.requested {
        name.bold().to_string()
    } else {
        name
    };
    out.push_str(&format!(
        "{:indent$}{} ({})",
        "",
        name,
        level.entity.id.as_u32(),
        indent = depth * 2
    ));

    let mut stats = Vec::with_capacity(2);
    if let Some(n) = level.cardinality {
        stats.push(format!("items: {n}"));
    }
    if let Some(n) = level.children_count {
        stats.push(format!("children: {n}"));
    }
    if !stats.is_empty() {
        out.push_str(&format!(" {}", format!("[{}]", stats.join(", ")).dimmed()));
    }
    if level.requested {
        out.push_str(&format!(" {}", "*".green().bold()));
    }
    out.push('\n');

    for child in &level.children {
        write_level(out, child, depth + 1);
    }
}
