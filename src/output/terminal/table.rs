use itertools::Itertools;

/// Breaks `text` on spaces so that lines stay within `width` characters.
/// Words longer than `width` are kept whole and existing line breaks are preserved.
pub fn wordwrap(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| wrap_line(line, width))
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    for word in line.split(' ') {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_owned()));
        }
    }
    lines.push(current);
    lines.join("\n")
}

#[derive(Debug, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: Vec<S>) -> Self {
        Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0; self.column_count()];
        for row in std::iter::once(&self.headers).chain(self.rows.iter()) {
            for (column, cell) in row.iter().enumerate() {
                let width = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                widths[column] = widths[column].max(width);
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let separator = format!(
            "+{}+",
            widths.iter().map(|w| "-".repeat(w + 2)).join("+")
        );

        let mut output = vec![separator.clone()];
        output.extend(render_row(&self.headers, &widths));
        output.push(separator.clone());
        for row in &self.rows {
            output.extend(render_row(row, &widths));
        }
        output.push(separator);
        output.join("\n")
    }
}

fn render_row(row: &[String], widths: &[usize]) -> Vec<String> {
    let cells: Vec<Vec<&str>> = widths
        .iter()
        .enumerate()
        .map(|(column, _)| {
            row.get(column)
                .map(|cell| cell.lines().collect())
                .unwrap_or_default()
        })
        .collect();
    let height = cells.iter().map(Vec::len).max().unwrap_or(0).max(1);

    (0..height)
        .map(|line| {
            let content = cells
                .iter()
                .zip(widths)
                .map(|(cell, width)| {
                    let text = cell.get(line).copied().unwrap_or("");
                    let padding = width - text.chars().count();
                    format!(" {}{} ", text, " ".repeat(padding))
                })
                .join("|");
            format!("|{}|", content)
        })
        .collect()
}
