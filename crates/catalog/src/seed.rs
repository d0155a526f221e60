//! Items every fresh catalog starts with.

use crate::{Item, ItemName, ProduceCode, UnitPrice};

const SEED: [(&str, &str, u64); 4] = [
    ("A12T-4GH7-QPL9-3N4M", "Lettuce", 341),
    ("E5T6-9UI3-TH15-QR88", "Peach", 299),
    ("TQ4C-VV6T-75ZX-1RMR", "Gala Apple", 359),
    ("YRT6-72AS-K736-L4AR", "Green Pepper", 79),
];

/// The default produce: Lettuce, Peach, Gala Apple and Green Pepper.
pub fn seed_items() -> Vec<Item> {
    SEED.iter()
        .map(|(code, name, cents)| {
            Item::new(
                ProduceCode::new_unchecked(code),
                ItemName::new_unchecked(name),
                UnitPrice::from_cents(*cents),
            )
        })
        .collect()
}
