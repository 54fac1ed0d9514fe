///! Check out a few tools from the standard catalog and print their receipts.
///! Run with `RUST_LOG=debug` (or `trace`) to see the engine's log output.

use rentql::{PricingEngine, ToolCatalog};

fn main() {
    pretty_env_logger::init();

    let engine = PricingEngine::new(ToolCatalog::standard());
    let requests = [
        ("LADW", "7/2/20", 3, 10.0),
        ("CHNS", "9/3/20", 7, 50.0),
        ("JAKR", "9/3/15", 5, 0.0),
        ("JAKR", "9/3/15", 5, 101.0),
    ];
    for (tool_code, checkout_date, days, discount) in &requests {
        match engine.checkout_tool(tool_code, checkout_date, *days, *discount) {
            Ok(agreement) => println!("{}\n", agreement.receipt()),
            Err(err) => println!("Checkout of {} failed: {}\n", tool_code, err),
        }
    }
}
