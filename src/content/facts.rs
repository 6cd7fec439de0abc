//! Elephant fact catalogue.

use serde::{Deserialize, Serialize};

/// Broad topic a fact belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FactCategory {
    /// Anatomy and physiology.
    Biology,
    /// Social and individual behavior.
    Behavior,
    /// Threats and protection.
    Conservation,
    /// Elephants in human culture.
    Culture,
}

/// One elephant fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fact {
    /// Stable fact id.
    pub id: u32,
    /// The fact itself.
    pub text: &'static str,
    /// Topic.
    pub category: FactCategory,
}

/// All known facts.
pub const FACTS: &[Fact] = &[
    Fact {
        id: 1,
        text: "Elephants are the largest land mammals on Earth. African elephants can weigh up to 6,350 kg (14,000 lb) and reach 3.96 meters (13 ft) at the shoulder.",
        category: FactCategory::Biology,
    },
    Fact {
        id: 2,
        text: "An elephant's trunk contains over 40,000 muscles and can be used for breathing, lifting water, grasping objects, and producing sound. It's essentially a fusion of the nose and upper lip.",
        category: FactCategory::Biology,
    },
    Fact {
        id: 3,
        text: "Elephants have the longest gestation period of any mammal - almost 22 months from conception to birth.",
        category: FactCategory::Biology,
    },
    Fact {
        id: 4,
        text: "Elephants can use their trunks to produce sounds as low as 5 hertz, which are too low for humans to hear. These 'infrasounds' can travel several kilometers and are used to communicate with other elephants.",
        category: FactCategory::Biology,
    },
    Fact {
        id: 5,
        text: "Elephants are known for their exceptional memory. They can remember migration routes, water sources, and even recognize other elephants they haven't seen for decades.",
        category: FactCategory::Behavior,
    },
    Fact {
        id: 6,
        text: "Elephant herds are led by a matriarch, usually the oldest and largest female, who guides the family to food and water using knowledge passed down over generations.",
        category: FactCategory::Behavior,
    },
    Fact {
        id: 7,
        text: "Fewer than 420,000 African elephants remain in the wild, down from millions a century ago, largely due to poaching and habitat loss.",
        category: FactCategory::Conservation,
    },
    Fact {
        id: 8,
        text: "Elephants appear in art, religion, and folklore across Africa and Asia; Ganesha, the elephant-headed deity, is one of the most widely worshipped figures in Hinduism.",
        category: FactCategory::Culture,
    },
];

/// Looks up a fact by id.
pub fn fact_by_id(id: u32) -> Option<&'static Fact> {
    FACTS.iter().find(|f| f.id == id)
}
