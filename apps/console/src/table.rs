//! # Table Rendering
//!
//! Boxed text tables with centred cells:
//!
//! ```text
//! +----+--------+---------------+
//! | ID |  Name  |  Description  |
//! +----+--------+---------------+
//! | 7  | pantry | Kitchen shelf |
//! +----+--------+---------------+
//! ```
//!
//! Column widths use display width, so accented or wide characters line up.

use unicode_width::UnicodeWidthStr;

/// Renders `headers` and `rows` as a boxed table, without a trailing newline.
///
/// Short rows are padded with empty cells; cells beyond the header count are
/// dropped.
pub fn render_table<H: AsRef<str>>(headers: &[H], rows: &[Vec<String>]) -> String {
    let columns = headers.len();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.as_ref().width()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.width());
        }
    }

    let border = border_line(&widths);
    let mut lines = Vec::with_capacity(rows.len() + 4);

    lines.push(border.clone());
    lines.push(row_line(headers.iter().map(|h| h.as_ref()), &widths));
    lines.push(border.clone());

    for row in rows {
        let cells = row
            .iter()
            .map(String::as_str)
            .chain(std::iter::repeat(""))
            .take(columns);
        lines.push(row_line(cells, &widths));
    }

    if !rows.is_empty() {
        lines.push(border);
    }

    lines.join("\n")
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

fn row_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.zip(widths) {
        line.push(' ');
        line.push_str(&center(cell, *width));
        line.push_str(" |");
    }
    line
}

/// Centres `text` in `width` columns; odd padding goes to the right.
fn center(text: &str, width: usize) -> String {
    let excess = width.saturating_sub(text.width());
    let left = excess / 2;
    let right = excess - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_inventory_table() {
        let table = render_table(
            &["ID", "Name", "Description"],
            &[vec![
                "7".to_string(),
                "pantry".to_string(),
                "Kitchen shelf".to_string(),
            ]],
        );

        let expected = [
            "+----+--------+---------------+",
            "| ID |  Name  |  Description  |",
            "+----+--------+---------------+",
            "| 7  | pantry | Kitchen shelf |",
            "+----+--------+---------------+",
        ]
        .join("\n");

        assert_eq!(table, expected);
    }

    #[test]
    fn test_empty_table_shows_header_only() {
        let table = render_table(&["ID", "Inventory ID", "Item", "Count"], &[]);
        let expected = [
            "+----+--------------+------+-------+",
            "| ID | Inventory ID | Item | Count |",
            "+----+--------------+------+-------+",
        ]
        .join("\n");

        assert_eq!(table, expected);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let table = render_table(&["A", "B"], &[vec!["x".to_string()]]);
        assert!(table.contains("| x |   |"));
    }

    #[test]
    fn test_wide_characters_align() {
        let table = render_table(&["Name"], &[vec!["café".to_string()], vec!["日本".to_string()]]);
        for line in table.lines() {
            assert_eq!(line.width(), "+------+".len());
        }
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 5), " ab  ");
        assert_eq!(center("abc", 2), "abc");
    }
}
