//! The journey items used as memory game symbols.

use crate::games::memory::Symbol;

/// A memory game item: a symbol plus how the board renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryItem {
    /// The engine-level symbol.
    pub symbol: Symbol,
    /// Item name.
    pub name: &'static str,
    /// Emoji shown on the tile face.
    pub emoji: &'static str,
}

/// The standard eight-pair board.
pub const MEMORY_ITEMS: &[MemoryItem] = &[
    MemoryItem { symbol: Symbol::new(1), name: "Waterhole", emoji: "\u{1F4A7}" },
    MemoryItem { symbol: Symbol::new(2), name: "Tree", emoji: "\u{1F333}" },
    MemoryItem { symbol: Symbol::new(3), name: "Mountain", emoji: "\u{26F0}\u{FE0F}" },
    MemoryItem { symbol: Symbol::new(4), name: "Elephant", emoji: "\u{1F418}" },
    MemoryItem { symbol: Symbol::new(5), name: "Grass", emoji: "\u{1F33F}" },
    MemoryItem { symbol: Symbol::new(6), name: "Sun", emoji: "\u{2600}\u{FE0F}" },
    MemoryItem { symbol: Symbol::new(7), name: "Moon", emoji: "\u{1F319}" },
    MemoryItem { symbol: Symbol::new(8), name: "Star", emoji: "\u{2B50}" },
];

/// The symbols for a standard board, in catalogue order.
pub fn standard_symbols() -> Vec<Symbol> {
    MEMORY_ITEMS.iter().map(|item| item.symbol).collect()
}

/// Looks up the display item for a symbol.
pub fn item_for(symbol: Symbol) -> Option<&'static MemoryItem> {
    MEMORY_ITEMS.iter().find(|item| item.symbol == symbol)
}
