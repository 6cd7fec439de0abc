//! Inspirational quotes shown on the home screen.

use rand::Rng;
use rand::seq::IndexedRandom;

/// One quote with attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quote {
    /// The quote.
    pub text: &'static str,
    /// Who said it.
    pub author: &'static str,
}

/// All quotes.
pub const QUOTES: &[Quote] = &[
    Quote {
        text: "The elephant is the only wild animal with a memory that does not forget an offense, and once recollection is awakened there is no escape for the person who injured him.",
        author: "Sir Samuel White Baker",
    },
    Quote {
        text: "Nature's great masterpiece, an elephant - the only harmless great thing.",
        author: "John Donne",
    },
    Quote {
        text: "In the wild, an elephant herd is led by a matriarch, and when she dies, the family can fall apart.",
        author: "Mark Shand",
    },
    Quote {
        text: "The question is, are we happy to suppose that our grandchildren may never be able to see an elephant except in a picture book?",
        author: "David Attenborough",
    },
];

/// Picks a quote at random.
pub fn random_quote<R: Rng + ?Sized>(rng: &mut R) -> &'static Quote {
    QUOTES.choose(rng).expect("quote list is non-empty")
}
