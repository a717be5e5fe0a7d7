mod domain;
mod frameworks;
mod interface_adapters;

use frameworks::cli;

#[tokio::main]
async fn main() {
    cli::run().await;
}
