//! Field expert profiles shown on the guides screen.

/// One expert guide profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guide {
    /// Stable guide id.
    pub id: u32,
    /// Guide's name.
    pub name: &'static str,
    /// Area of expertise.
    pub expertise: &'static str,
    /// Short biography.
    pub bio: &'static str,
}

/// All guide profiles.
pub const GUIDES: &[Guide] = &[
    Guide {
        id: 1,
        name: "Dr. Anya Sharma",
        expertise: "Behavioral Ecology",
        bio: "Dr. Anya Sharma has spent over 20 years studying elephant social structures in the Serengeti. Her work focuses on communication and problem-solving within herds. She is a lead researcher at the Global Elephant Institute and a passionate advocate for habitat preservation.",
    },
    Guide {
        id: 2,
        name: "Juma Kalama",
        expertise: "Anti-Poaching & Tracking",
        bio: "A former ranger with Kenya Wildlife Service, Juma is an expert in field tracking and anti-poaching tactics. He now trains new rangers and leads conservation-focused safari expeditions, sharing his deep knowledge of the bush and its inhabitants.",
    },
    Guide {
        id: 3,
        name: "Elena Petrova",
        expertise: "Conservation Photography",
        bio: "Elena is an award-winning photographer whose images have been featured in National Geographic and BBC Wildlife. She uses her craft to tell compelling stories about conservation challenges and successes, believing that powerful imagery can inspire action.",
    },
];

/// Looks up a guide profile by id.
pub fn guide_by_id(id: u32) -> Option<&'static Guide> {
    GUIDES.iter().find(|g| g.id == id)
}
