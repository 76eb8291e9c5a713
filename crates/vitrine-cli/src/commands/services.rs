use anyhow::Result;

use vitrine_core::catalog;

pub fn run() -> Result<()> {
    let services = catalog();
    println!("Services ({}):\n", services.len());

    for service in services {
        println!("  {} - {}", service.id, service.title);
        println!("    Icon: {}", service.icon);
    }

    Ok(())
}
