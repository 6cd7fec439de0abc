//! Short stories for the stories screen.

/// One short story.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Story {
    /// Stable story id.
    pub id: u32,
    /// Story title.
    pub title: &'static str,
    /// Full story text.
    pub body: &'static str,
}

/// All short stories.
pub const STORIES: &[Story] = &[
    Story {
        id: 1,
        title: "The Whispering Giant",
        body: "In the heart of the savanna, where the acacia trees paint silhouettes against the crimson sunset, lived an old elephant named Tembo. He was known as the \"Whispering Giant\" not for his voice, but for the stories the wind seemed to share through his massive, rustling ears. It was said he carried the memory of every season, every drought, and every celebration the land had ever known.",
    },
    Story {
        id: 2,
        title: "The Moon-Watcher",
        body: "Among a herd known for their strength, there was a young bull named Kael. While others practiced sparring, Kael was fascinated by the moon. One year, during a terrible drought, the waterholes turned to dust. But Kael, remembering the moon's pull on the water in the pool, felt a subtle pull in the earth itself. He led them over a dry ridge to a hidden spring, a place where the groundwater was closest to the surface, a secret only the moon had told him.",
    },
    Story {
        id: 3,
        title: "The Smallest Trumpet",
        body: "A newborn calf named Isha could not trumpet. Her calls were small squeaks, lost in the noise of the herd. One day, a pack of hyenas separated her from her mother. Instead of trying to roar, Isha let out her tiny, unique squeak. It was a sound so unusual that her mother heard it instantly, cutting through the chaos. Isha learned that even the smallest voice can be powerful when it is your own.",
    },
    Story {
        id: 4,
        title: "Why Elephants Have Wrinkles",
        body: "In the beginning, elephants had smooth, grey skin. But they carried the worries of the world. Every time a creature was in trouble, the elephants would grieve, and a new wrinkle would appear on their skin. Over millennia, their skin became a map of memories, a history of every hardship the land had ever faced. Their wrinkles are not a sign of age, but a testament to their endless compassion.",
    },
];

/// Looks up a story by id.
pub fn story_by_id(id: u32) -> Option<&'static Story> {
    STORIES.iter().find(|s| s.id == id)
}
