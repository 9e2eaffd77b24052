//! Plain-text table output
//!
//! Column layout shared by the commands that print tables.

/// Print a header row followed by a separator line
///
/// # Arguments
/// * `label_col` - Name of the left-aligned first column
/// * `label_width` - Width of the first column
/// * `columns` - Right-aligned columns as `(name, width)`
pub(crate) fn print_header(label_col: &str, label_width: usize, columns: &[(&str, usize)]) {
    let mut line = format!("  {label_col:<label_width$}");
    let mut total_width = label_width;
    for (name, width) in columns {
        line.push_str(&format!(" {name:>width$}"));
        total_width += width + 1;
    }
    println!("{line}");
    println!("  {}", "-".repeat(total_width));
}

/// Print a section title underlined with `=`
pub(crate) fn print_title(title: &str) {
    println!("{title}");
    println!("{}", "=".repeat(title.chars().count()));
}

/// Format a percentage delta with an explicit sign
pub(crate) fn signed_pct(value: f64) -> String {
    format!("{value:+.2}%")
}
