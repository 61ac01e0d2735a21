//! Shop economy: exchanging gold for catalog items.

use crate::catalog::CatalogEntry;
use crate::game_state::GameState;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("not enough gold: need {price}, have {gold}")]
    InsufficientGold { price: u32, gold: u32 },
}

/// Buys one item: deducts the price and appends a fresh snapshot of the
/// catalog entry to the inventory. On insufficient gold the state is
/// unchanged; the failure is a transient user-facing warning, never fatal.
pub fn purchase(state: &mut GameState, entry: &CatalogEntry) -> Result<(), ShopError> {
    if state.gold < entry.price {
        return Err(ShopError::InsufficientGold {
            price: entry.price,
            gold: state.gold,
        });
    }
    state.gold -= entry.price;
    state.inventory.push(entry.to_item());
    tracing::debug!(item = entry.name, price = entry.price, "purchase");
    Ok(())
}
