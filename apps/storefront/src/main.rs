//! Demo binary: drives the storefront controller from stdin, rendering
//! into an in-memory page and printing the regions after every command.

use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, warn};

use bloms_core::catalog;
use bloms_storefront::page::regions;
use bloms_storefront::notify::SystemClock;
use bloms_storefront::{init_tracing, storage_path, MemoryPage, Storefront};
use bloms_store::{CartStore, Storage, StorageConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config = match storage_path() {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            StorageConfig::new(path)
        }
        None => {
            warn!("No data directory available, cart will not persist");
            StorageConfig::in_memory()
        }
    };

    let storage = Storage::new(config).await?;
    let store = CartStore::new(storage.clone());
    let mut storefront =
        Storefront::new(store, MemoryPage::storefront(), SystemClock::new()).await?;

    let product = catalog::featured();
    println!("Berry Bloms — {} ({})", product.name, product.price().format_cop());
    println!("Commands: add | remove | qty <n> | checkout | show | quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        let (command, arg) = line.split_once(' ').unwrap_or((line, ""));

        let result = match command {
            "add" => storefront.add_to_cart().await,
            "remove" => storefront.remove_item(product.id).await,
            "qty" => storefront.set_quantity(product.id, arg).await,
            "checkout" => {
                storefront.checkout();
                Ok(())
            }
            "show" => Ok(()),
            "quit" | "exit" => break,
            "" => continue,
            other => {
                println!("Unknown command: {other}");
                continue;
            }
        };

        if let Err(e) = result {
            error!(error = %e, "Command failed");
            continue;
        }

        storefront.tick();
        print_page(&mut storefront);
    }

    storage.close().await;
    Ok(())
}

/// Dumps the visible regions and any pending alerts to the terminal.
fn print_page(storefront: &mut Storefront<MemoryPage, SystemClock>) {
    let page = storefront.page();

    if page.is_visible(regions::CART_BADGE) {
        println!("🛒 ({})", page.content(regions::CART_BADGE).unwrap_or(""));
    } else {
        println!("🛒");
    }

    if let Some(body) = page.content(regions::CART_BODY) {
        println!("{body}");
    }

    if page.is_visible(regions::CART_BREAKDOWN) {
        println!(
            "  Subtotal  {}\n  IVA (19%) {}\n  Envío     {}\n  Total     {}",
            page.content(regions::CART_SUBTOTAL).unwrap_or(""),
            page.content(regions::CART_IVA).unwrap_or(""),
            page.content(regions::CART_SHIPPING).unwrap_or(""),
            page.content(regions::CART_TOTAL).unwrap_or(""),
        );
    }

    if let Some(toasts) = page.content(regions::NOTIFICATIONS) {
        if !toasts.is_empty() {
            println!("{toasts}");
        }
    }

    for alert in storefront.page_mut().take_alerts() {
        println!("--- alert ---\n{alert}\n-------------");
    }
}
