//! Storefront Demo
//!
//! Seeds a storefront from a YAML fixture, fills a cart with a movie and a
//! three-season series, optionally switches everything to bank transfer, and
//! prints the assembled order.
//!
//! Run with: `cargo run --example storefront`

use anyhow::{Result, anyhow};
use clap::Parser;
use smallvec::smallvec;

use taquilla::{
    cart::{CartCommand, CartItem, MediaKind, PaymentMethod},
    checkout::{CustomerInfo, Order, OrderSink},
    fixtures::Seed,
    receipt,
    session::Storefront,
    utils::DemoArgs,
};

/// Prints submitted orders instead of forwarding them anywhere.
#[derive(Debug)]
struct StdoutSink;

#[expect(clippy::print_stdout, reason = "Demo code")]
impl OrderSink for StdoutSink {
    fn submit(&mut self, customer: &CustomerInfo, order: &Order) {
        println!(
            "Pedido de {} ({}) -> {}, {}",
            customer.name, customer.phone, customer.delivery_zone, customer.address
        );
        println!("{} línea(s), total ${}", order.lines.len(), order.total);
    }
}

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Demo code")]
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let seed = Seed::from_path(&args.seed)?;
    let mut store = Storefront::with_seed(seed);

    store.cart_dispatch(CartCommand::Add(CartItem::new(
        "tt0111161",
        "Cadena Perpetua",
        MediaKind::Movie,
    )));
    store.cart_dispatch(CartCommand::Add(CartItem::new(
        "tv-1396",
        "Breaking Bad",
        MediaKind::Tv,
    )));
    store.cart_dispatch(CartCommand::SetSeasons {
        id: "tv-1396".to_string(),
        seasons: smallvec![1, 2, 3],
    });

    if args.transfer {
        for id in ["tt0111161", "tv-1396"] {
            store.cart_dispatch(CartCommand::SetPayment {
                id: id.to_string(),
                payment: PaymentMethod::Transfer,
            });
        }
    }

    let zone = match args.zone {
        Some(name) => name,
        None => store
            .zones()
            .iter()
            .find(|zone| zone.active)
            .map(|zone| zone.name.clone())
            .ok_or(anyhow!("seed has no active delivery zones"))?,
    };

    let customer = CustomerInfo {
        name: "Ana".to_string(),
        phone: "+53 5555 5555".to_string(),
        address: "Calle 4 #123".to_string(),
        delivery_zone: zone,
    };

    let mut sink = StdoutSink;
    let order = store.place_order(&customer, &mut sink)?;

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    receipt::write_to(&mut handle, &order)?;

    println!(
        "\nEfectivo: ${}  Transferencia: ${}",
        store.total_by_payment(PaymentMethod::Cash)?,
        store.total_by_payment(PaymentMethod::Transfer)?
    );

    Ok(())
}
