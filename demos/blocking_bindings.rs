//! Prints every notification binding tagged `vip`, using the blocking client.
//!
//! Run with: `cargo run --example blocking_bindings -- <service sid>`

use callwire::rest::notify::binding::ReadBindingOptions;
use callwire::{ClientBuilder, Error};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("callwire=info")
        .init();

    let service_sid = std::env::args()
        .nth(1)
        .ok_or("usage: blocking_bindings <service sid>")?;

    let client = ClientBuilder::from_env().build_blocking()?;

    for binding in client.read(&ReadBindingOptions::new(service_sid).tag("vip").page_size(100))? {
        match binding {
            Ok(binding) => println!(
                "{:?} {:?} {:?}",
                binding.identity, binding.binding_type, binding.address
            ),
            Err(Error::Api { status, message, .. }) => {
                eprintln!("API error {}: {}", status, message);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
