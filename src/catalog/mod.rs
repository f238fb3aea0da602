//! Simulated tea catalog: item representation, fixed-capacity batches, and
//! the canonical assortment delivered by a fetch.
pub mod batch;
pub mod item;

use batch::CatalogBatch;
use item::CatalogItem;

/// Maximum number of items a single [`CatalogBatch`] can carry.
///
/// Sized with headroom above the canonical assortment so a firmware-side
/// producer can append its own entries before handing the batch to a
/// consumer, while keeping the batch cheap to move through a channel.
pub const MAX_BATCH_ITEMS: usize = 16;

/// The canonical assortment, in the order it is always delivered.
pub const CANONICAL_ASSORTMENT: [CatalogItem; 6] = [
    CatalogItem::new("Black Tea", 1),
    CatalogItem::new("Green Tea", 2),
    CatalogItem::new("White Tea", 3),
    CatalogItem::new("Oolong Tea", 4),
    CatalogItem::new("Honey Lemon Tea", 5),
    CatalogItem::new("Chamomile Tea", 6),
];

/// Build a fresh batch holding the canonical assortment.
///
/// Every call returns a new, caller-owned batch; nothing is shared between
/// invocations, so repeated fetches always observe exactly six items.
pub fn canonical_batch() -> CatalogBatch {
    let mut batch = CatalogBatch::new();
    for item in CANONICAL_ASSORTMENT {
        // The assortment is smaller than MAX_BATCH_ITEMS, so this cannot fail.
        batch
            .push(item)
            .expect("canonical assortment must fit in an empty batch");
    }
    batch
}
