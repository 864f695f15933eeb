//! Grid table rendering on top of `prettytable`.
//!
//! ```text
//! +----------+---------------------+
//! | Position | Average Performance |
//! +==========+=====================+
//! | Backend  |                 4.5 |
//! +----------+---------------------+
//! ```

use prettytable::{format, Cell, Row, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

impl Align {
    fn style_spec(self) -> &'static str {
        match self {
            Align::Left => "l",
            Align::Right => "r",
        }
    }
}

/// Render headers and rows as a grid. Headers are left-aligned; body cells
/// use `aligns`, defaulting to left for missing entries.
pub fn render_grid(headers: &[&str], aligns: &[Align], rows: &[Vec<String>]) -> String {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_DEFAULT);
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));

    for row in rows {
        let cells = row
            .iter()
            .enumerate()
            .map(|(i, value)| {
                let align = aligns.get(i).copied().unwrap_or(Align::Left);
                Cell::new(value).style_spec(align.style_spec())
            })
            .collect();
        table.add_row(Row::new(cells));
    }

    table.to_string().trim_end().to_string()
}
