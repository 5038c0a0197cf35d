//! Terminal rendering of products and list summaries.

use catalog_model::Product;
use catalog_query::PriceRange;
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use crate::config::TableStyle;

pub const EMPTY_CATALOG: &str = "The catalog is empty. Add a product with `catalog add`.";
pub const NO_MATCHES: &str = "Nothing matched your query. Try changing the filters.";

const CURRENCY: &str = "₽";

/// Line printed above the product table.
pub fn found_line(count: usize) -> String {
    format!("Found products: {count}")
}

pub fn product_table(products: &[Product], style: TableStyle) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Description"),
        header_cell("Price"),
        header_cell("Status"),
        header_cell("Image"),
    ]);
    apply_table_style(&mut table, style);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for product in products {
        table.add_row(vec![
            dim_cell(product.id),
            Cell::new(&product.name).add_attribute(Attribute::Bold),
            Cell::new(&product.description),
            Cell::new(format_price(product.price)),
            availability_cell(product.available),
            image_cell(product),
        ]);
    }
    table
}

/// Two-column view of a single product.
pub fn product_detail(product: &Product, style: TableStyle) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table, style);
    table.add_row(vec![header_cell("ID"), Cell::new(product.id)]);
    table.add_row(vec![
        header_cell("Name"),
        Cell::new(&product.name).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        header_cell("Description"),
        Cell::new(&product.description),
    ]);
    table.add_row(vec![
        header_cell("Price"),
        Cell::new(format_price(product.price)),
    ]);
    table.add_row(vec![
        header_cell("Status"),
        availability_cell(product.available),
    ]);
    table.add_row(vec![header_cell("Image"), image_cell(product)]);
    table
}

pub fn bounds_line(bounds: &PriceRange) -> String {
    format!(
        "Price range: {} to {}",
        format_price(bounds.min),
        format_price(bounds.max)
    )
}

pub fn availability_label(available: bool) -> &'static str {
    if available { "In stock" } else { "Out of stock" }
}

/// Price with space-grouped thousands and the currency sign.
pub fn format_price(price: f64) -> String {
    let text = format!("{price:.2}");
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let (sign, digits) = whole
        .strip_prefix('-')
        .map_or(("", whole), |digits| ("-", digits));

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(ch);
    }

    let fraction = fraction.trim_end_matches('0');
    if fraction.is_empty() {
        format!("{sign}{grouped} {CURRENCY}")
    } else {
        format!("{sign}{grouped}.{fraction} {CURRENCY}")
    }
}

fn apply_table_style(table: &mut Table, style: TableStyle) {
    match style {
        TableStyle::Full => {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS)
                .apply_modifier(UTF8_SOLID_INNER_BORDERS);
        }
        TableStyle::Condensed => {
            table
                .load_preset(UTF8_FULL_CONDENSED)
                .apply_modifier(UTF8_ROUND_CORNERS);
        }
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 6 {
        table.set_constraints(vec![
            ColumnConstraint::LowerBoundary(Width::Fixed(4)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(10)),
            ColumnConstraint::LowerBoundary(Width::Fixed(12)),
            ColumnConstraint::UpperBoundary(Width::Percentage(25)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn availability_cell(available: bool) -> Cell {
    let cell = Cell::new(availability_label(available));
    if available {
        cell.fg(Color::Green)
    } else {
        cell.fg(Color::Red)
    }
}

fn image_cell(product: &Product) -> Cell {
    if product.has_image() {
        Cell::new(&product.image_url)
    } else {
        dim_cell("-")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
