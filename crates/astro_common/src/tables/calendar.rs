//! Calendar event templates and weekly forecast texts.

pub static ENERGY_LEVELS: [&str; 3] = ["High", "Medium", "Low"];

pub static WEEKLY_PREDICTIONS: [&str; 8] = [
    "This week brings opportunities for growth and learning",
    "Focus on communication and relationships",
    "Financial decisions should be made carefully",
    "Health and wellness will be important",
    "Creative ideas flourish when shared with trusted friends",
    "Patience with family matters pays off by the weekend",
    "A good week to finish lingering tasks before starting new ones",
    "Rest and reflection restore your momentum midweek",
];

pub static LUCKY_DAYS: [&str; 3] = ["Monday", "Wednesday", "Friday"];

pub static CHALLENGING_DAYS: [&str; 2] = ["Tuesday", "Thursday"];

/// (title, description, significance) for planetary events.
pub static PLANETARY_EVENTS: [(&str, &str, &str); 5] = [
    (
        "Mercury Retrograde",
        "Mercury begins its retrograde motion",
        "Review, revise, and reflect on communication matters",
    ),
    (
        "Venus Trine Jupiter",
        "Venus forms a harmonious trine with Jupiter",
        "Favourable for love, generosity and financial growth",
    ),
    (
        "Mars Square Saturn",
        "Mars meets resistance from Saturn",
        "Channel frustration into disciplined, steady effort",
    ),
    (
        "Jupiter Sextile Sun",
        "Jupiter supports the Sun's expression",
        "Confidence and optimism open new doors",
    ),
    (
        "Saturn Stations Direct",
        "Saturn resumes forward motion",
        "Long-delayed plans begin to move again",
    ),
];

pub const NEW_MOON_DESCRIPTION: &str = "A powerful new moon for setting intentions and goals";
pub const NEW_MOON_SIGNIFICANCE: &str = "Excellent time for planning and planting new seeds";
pub const FULL_MOON_DESCRIPTION: &str = "The full moon illuminates what has grown since the new moon";
pub const FULL_MOON_SIGNIFICANCE: &str = "Time for release, gratitude and completion";

/// Short theme for the sign the sun is entering.
pub fn ingress_significance(sign_index: usize) -> &'static str {
    const THEMES: [&str; 12] = [
        "Time for courage, initiative and fresh starts",
        "Time for stability, comfort and steady growth",
        "Time for curiosity, conversation and learning",
        "Time for home, family and emotional care",
        "Time for creativity, play and self-expression",
        "Time for health, order and useful service",
        "Time for balance, partnership and diplomacy",
        "Time for depth, transformation and focus",
        "Time for adventure, study and optimism",
        "Time for ambition, structure and long-term goals",
        "Time for innovation, community, and humanitarian efforts",
        "Time for compassion, dreams and spiritual rest",
    ];
    THEMES[sign_index % 12]
}
