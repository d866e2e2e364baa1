use std::path::PathBuf;

use clap::{Args, Subcommand};
use shop::carts::CartUuid;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Price a cart of fixture products
    Quote(QuoteArgs),
}

#[derive(Debug, Args)]
struct QuoteArgs {
    /// Path to the YAML catalog fixture
    #[arg(long, env = "CATALOG_FIXTURE")]
    fixture: PathBuf,

    /// Fixture name, optionally with a quantity (`name=2`); repeatable
    #[arg(long = "item", required = true)]
    items: Vec<String>,
}

pub(crate) async fn run(command: CartCommand) -> Result<(), String> {
    match command.command {
        CartSubcommand::Quote(args) => quote(args).await,
    }
}

fn parse_item(item: &str) -> Result<(&str, u32), String> {
    match item.split_once('=') {
        None => Ok((item.trim(), 1)),
        Some((name, quantity)) => quantity
            .trim()
            .parse()
            .map(|quantity| (name.trim(), quantity))
            .map_err(|error| format!("invalid quantity in {item:?}: {error}")),
    }
}

async fn quote(args: QuoteArgs) -> Result<(), String> {
    let (ctx, refs) = super::load(&args.fixture).await?;

    let cart = ctx
        .carts
        .create_cart(CartUuid::new())
        .await
        .map_err(|error| format!("failed to create cart: {error}"))?
        .uuid;

    for item in &args.items {
        let (name, quantity) = parse_item(item)?;

        let product = refs
            .get(name)
            .copied()
            .ok_or_else(|| format!("unknown fixture: {name}"))?;

        ctx.carts
            .add_item(cart, product, quantity)
            .await
            .map_err(|error| format!("failed to add {name}: {error}"))?;
    }

    let snapshot = ctx
        .carts
        .get_cart(cart)
        .await
        .map_err(|error| format!("failed to read cart: {error}"))?;

    for view in &snapshot.items {
        let label = view
            .product
            .as_ref()
            .map_or_else(|| view.item.product().to_string(), |product| product.display_name());

        println!("{}\t{label}", view.item.quantity());
    }

    println!("total_price: {}", snapshot.totals.price);
    println!("total_weight: {}", snapshot.totals.weight);

    Ok(())
}
