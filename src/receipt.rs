//! Plain-text order summary

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Color, Style, object::{Columns, Rows}},
};
use thiserror::Error;

use crate::checkout::Order;

/// Errors that can occur while writing an order summary.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// The output sink refused the write.
    #[error("IO error")]
    IO,
}

/// Render the order as a table followed by a subtotal/delivery/total footer.
///
/// # Errors
///
/// Returns [`ReceiptError::IO`] when writing to `out` fails.
pub fn write_to(mut out: impl io::Write, order: &Order) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["Título", "Tipo", "Cant.", "Precio"]);

    for line in &order.lines {
        builder.push_record([
            line.title.clone(),
            line.kind.to_string(),
            line.quantity.to_string(),
            format!("${}", line.price),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..4), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)?;

    writeln!(out, " Subtotal: ${}", order.subtotal).map_err(|_err| ReceiptError::IO)?;
    writeln!(out, " Entrega:  ${}", order.delivery_fee).map_err(|_err| ReceiptError::IO)?;
    writeln!(out, " Total:    ${}", order.total).map_err(|_err| ReceiptError::IO)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        cart::{Cart, CartCommand, CartItem, MediaKind},
        checkout::assemble_order,
        config::PriceConfig,
    };

    use super::*;

    #[test]
    fn write_to_renders_lines_and_totals() -> TestResult {
        let mut cart = Cart::new();
        cart.dispatch(CartCommand::Add(CartItem::new(
            "m1",
            "Some Movie",
            MediaKind::Movie,
        )));

        let order = assemble_order(&cart, &PriceConfig::default(), 150)?;

        let mut out = Vec::new();
        write_to(&mut out, &order)?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Some Movie"), "missing line item: {rendered}");
        assert!(rendered.contains("Subtotal: $80"), "missing subtotal: {rendered}");
        assert!(rendered.contains("Total:    $230"), "missing total: {rendered}");

        Ok(())
    }

    #[test]
    fn write_to_errors_on_failing_sink() -> TestResult {
        struct FailingSink;

        impl io::Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let order = assemble_order(&Cart::new(), &PriceConfig::default(), 0)?;

        let result = write_to(FailingSink, &order);

        assert!(matches!(result, Err(ReceiptError::IO)), "expected IO error");

        Ok(())
    }
}
