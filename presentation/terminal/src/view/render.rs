use business::domain::cart::summary::{CartLine, CartSummary};
use console::style;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Style},
};

use super::likes::Likes;

pub const TITLE: &str = "Shopping Cart";
const EMPTY: &str = "Your cart is empty.";

#[derive(Tabled)]
struct CartRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Product")]
    name: String,
    #[tabled(rename = "Like")]
    like: &'static str,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Image")]
    image: String,
}

impl CartRow {
    fn new(position: usize, line: &CartLine, liked: bool) -> Self {
        Self {
            position,
            id: line.product_id.to_string(),
            name: line.name.clone(),
            like: if liked { "♥" } else { "♡" },
            quantity: line.quantity,
            price: format_price(line.line_total),
            image: line.image_ref.clone().unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// Two-decimal price as shown to the user, e.g. `12.46 $`.
pub fn format_price(amount: f64) -> String {
    format!("{:.2} $", amount)
}

/// Renders the cart header, one table row per entry and the totals footer.
/// An empty cart collapses to a single notice.
pub fn render_cart(summary: &CartSummary, likes: &Likes) -> String {
    let header = format!("{}   [remove-all]", style(TITLE).bold().cyan());

    if summary.is_empty() {
        return format!("{}\n{}\n", header, style(EMPTY).dim());
    }

    let rows: Vec<CartRow> = summary
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| CartRow::new(i + 1, line, likes.is_liked(&line.product_id)))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    format!(
        "{}\n{}\n{}\n{}\n",
        header,
        table,
        style(format!("Total Items: {}", summary.total_items)).bold(),
        style(format!("Total Price: {}", format_price(summary.total_price)))
            .bold()
            .green()
    )
}

#[cfg(test)]
mod tests {
    use business::domain::shared::value_objects::ProductId;

    use super::*;

    fn line(id: u64, name: &str, unit_price: f64, quantity: u32) -> CartLine {
        CartLine {
            product_id: ProductId::from(id),
            name: name.to_string(),
            image_ref: None,
            unit_price,
            quantity,
            line_total: unit_price * f64::from(quantity),
        }
    }

    fn row<'a>(text: &'a str, name: &str) -> &'a str {
        text.lines().find(|l| l.contains(name)).unwrap()
    }

    #[test]
    fn should_format_price_with_two_decimals() {
        assert_eq!(format_price(12.46), "12.46 $");
        assert_eq!(format_price(8.970000000000001), "8.97 $");
        assert_eq!(format_price(0.0), "0.00 $");
    }

    #[test]
    fn should_render_lines_and_totals() {
        let summary = CartSummary {
            lines: vec![line(1, "orange juice", 2.99, 3), line(3, "grape juice", 3.99, 1)],
            total_items: 4,
            total_price: 2.99 * 3.0 + 3.99,
        };
        let mut likes = Likes::default();
        likes.toggle(&ProductId::from(3u64));

        let text = render_cart(&summary, &likes);

        assert!(text.lines().next().unwrap().contains(TITLE));
        assert!(text.contains("Product"));
        let orange = row(&text, "orange juice");
        assert!(orange.contains("♡"));
        assert!(orange.contains("8.97 $"));
        let grape = row(&text, "grape juice");
        assert!(grape.contains("♥"));
        assert!(text.find("orange juice") < text.find("grape juice"));
        assert!(text.contains("Total Items: 4"));
        assert!(text.contains("Total Price: 12.96 $"));
    }

    #[test]
    fn should_show_image_reference_when_present() {
        let mut with_image = line(2, "apple juice", 3.49, 1);
        with_image.image_ref = Some("apple.jpg".to_string());
        let summary = CartSummary {
            lines: vec![with_image, line(1, "orange juice", 2.99, 1)],
            total_items: 2,
            total_price: 6.48,
        };

        let text = render_cart(&summary, &Likes::default());

        assert!(row(&text, "apple juice").contains("apple.jpg"));
        assert!(row(&text, "orange juice").contains(" - "));
    }

    #[test]
    fn should_collapse_empty_cart() {
        let summary = CartSummary {
            lines: Vec::new(),
            total_items: 0,
            total_price: 0.0,
        };

        let text = render_cart(&summary, &Likes::default());

        assert!(text.contains(EMPTY));
        assert!(!text.contains("Product"));
        assert!(!text.contains("Total Price"));
    }
}
