//! Loot, potions, and the shop.

pub mod shop;

pub use shop::*;
