//! Shop item catalog — plain const tables, no database.
//!
//! Item ids are stable strings referenced from pet inventories and save
//! snapshots.

use crate::pet::EquipSlot;

/// What buying an item gives the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Wearable, bound to one equip slot.
    Accessory(EquipSlot),
    /// Scenery behind the pet.
    Background,
}

/// One purchasable item.
#[derive(Debug, Clone, Copy)]
pub struct CatalogItem {
    pub id: &'static str,
    pub price: i64,
    pub kind: ItemKind,
}

/// Everything the shop sells.
pub const ITEMS: &[CatalogItem] = &[
    CatalogItem {
        id: "top-hat",
        price: 50,
        kind: ItemKind::Accessory(EquipSlot::Head),
    },
    CatalogItem {
        id: "party-hat",
        price: 30,
        kind: ItemKind::Accessory(EquipSlot::Head),
    },
    CatalogItem {
        id: "bow-tie",
        price: 25,
        kind: ItemKind::Accessory(EquipSlot::Body),
    },
    CatalogItem {
        id: "knit-sweater",
        price: 60,
        kind: ItemKind::Accessory(EquipSlot::Body),
    },
    CatalogItem {
        id: "sneakers",
        price: 40,
        kind: ItemKind::Accessory(EquipSlot::Legs),
    },
    CatalogItem {
        id: "rain-boots",
        price: 35,
        kind: ItemKind::Accessory(EquipSlot::Legs),
    },
    CatalogItem {
        id: "bg-meadow",
        price: 80,
        kind: ItemKind::Background,
    },
    CatalogItem {
        id: "bg-beach",
        price: 80,
        kind: ItemKind::Background,
    },
    CatalogItem {
        id: "bg-night-sky",
        price: 120,
        kind: ItemKind::Background,
    },
];

/// Look up an item by id.
pub fn find(id: &str) -> Option<&'static CatalogItem> {
    ITEMS.iter().find(|item| item.id == id)
}
