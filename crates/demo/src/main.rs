use anyhow::Context;
use catalog_products::ProductFactory;

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    // The concrete product type never appears here.
    let lettuce = ProductFactory::try_create_product(3.99, "Lettuce")
        .context("failed to build catalog entry")?;
    tracing::info!(name = %lettuce.name(), "catalog ready");

    println!("My grocery store catalog");
    println!("{lettuce}");
    Ok(())
}
