use crate::core::messages;
use crate::domain::model::{Customer, EditBuffer};

const TABLE_HEADERS: [&str; 3] = ["Id", "Nombre", "Apellidos"];

pub const BUTTON_LEGEND: &str = "[guardar] [buscar] [actualizar] [eliminar] [listar] [limpiar]";

fn field_line(label: &str, value: &str, invalid: bool) -> String {
    let marker = if invalid { "(!)" } else { "   " };
    format!("{} {:<27}: {}", marker, label, value)
}

/// Renders the three input fields with their validation feedback.
pub fn render_form(buffer: &EditBuffer) -> String {
    let mut lines = vec![
        field_line("Identificación a Buscar", &buffer.search_id, false),
        field_line("Nombre", &buffer.name, buffer.errors.name),
    ];
    if buffer.errors.name {
        lines.push(format!("    {}", messages::NAME_REQUIRED));
    }
    lines.push(field_line("Apellidos", &buffer.surname, buffer.errors.surname));
    if buffer.errors.surname {
        lines.push(format!("    {}", messages::SURNAME_REQUIRED));
    }
    lines.push(String::new());
    lines.push(BUTTON_LEGEND.to_string());
    lines.join("\n")
}

fn pad(cell: &str, width: usize) -> String {
    let fill = width.saturating_sub(cell.chars().count());
    format!("{}{}", cell, " ".repeat(fill))
}

/// Renders the customer table; columns are as wide as their widest cell.
pub fn render_table(customers: &[Customer]) -> String {
    let rows: Vec<[&str; 3]> = customers
        .iter()
        .map(|c| [c.id.as_str(), c.name.as_str(), c.surname.as_str()])
        .collect();

    let mut widths = TABLE_HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 3]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| pad(cell, width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let separator = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut lines = vec![format_row(TABLE_HEADERS), separator];
    lines.extend(rows.into_iter().map(format_row));
    lines.join("\n")
}

/// The whole page: form, a rule, then the table.
pub fn render_page(buffer: &EditBuffer, customers: &[Customer]) -> String {
    format!(
        "{}\n{}\n{}",
        render_form(buffer),
        "=".repeat(60),
        render_table(customers)
    )
}
