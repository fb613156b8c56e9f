//! Sign-pair compatibility matrix and tier texts.

use crate::records::MatchLevel;
use crate::zodiac::Sign;

/// Row and column order follow `Sign::ALL`.
static MATRIX: [[u8; 12]; 12] = [
    // Ari Tau Gem Can Leo Vir Lib Sco Sag Cap Aqu Pis
    [70, 60, 85, 50, 90, 65, 75, 55, 95, 45, 80, 40],
    [60, 85, 50, 90, 65, 95, 75, 80, 40, 90, 45, 85],
    [85, 50, 80, 65, 75, 70, 95, 60, 85, 55, 90, 70],
    [50, 90, 65, 85, 60, 80, 70, 95, 45, 75, 40, 90],
    [90, 65, 75, 60, 85, 55, 80, 70, 95, 50, 75, 65],
    [65, 95, 70, 80, 55, 85, 75, 85, 50, 90, 70, 80],
    [75, 75, 95, 70, 80, 75, 85, 65, 80, 70, 90, 75],
    [55, 80, 60, 95, 70, 85, 65, 90, 60, 85, 55, 95],
    [95, 40, 85, 45, 95, 50, 80, 60, 85, 65, 85, 70],
    [45, 90, 55, 75, 50, 90, 70, 85, 65, 85, 75, 80],
    [80, 45, 90, 40, 75, 70, 90, 55, 85, 75, 85, 65],
    [40, 85, 70, 90, 65, 80, 75, 95, 70, 80, 65, 85],
];

pub fn score(a: Sign, b: Sign) -> u8 {
    MATRIX[a.index()][b.index()]
}

pub fn messages(level: MatchLevel) -> &'static [&'static str; 4] {
    match level {
        MatchLevel::High => &HIGH_MESSAGES,
        MatchLevel::Medium => &MEDIUM_MESSAGES,
        MatchLevel::Low => &LOW_MESSAGES,
    }
}

pub fn tips(level: MatchLevel) -> &'static [&'static str; 5] {
    match level {
        MatchLevel::High => &HIGH_TIPS,
        MatchLevel::Medium => &MEDIUM_TIPS,
        MatchLevel::Low => &LOW_TIPS,
    }
}

pub fn love_text(a: Sign, b: Sign, score: u8, message: &str) -> String {
    format!("{} and {} have a {}% love compatibility. {}", a, b, score, message)
}

pub fn friendship_text(a: Sign, b: Sign, level: MatchLevel) -> String {
    format!(
        "As friends, {} and {} can build a {} level of trust and understanding.",
        a,
        b,
        level.as_str()
    )
}

pub fn business_text(a: Sign, b: Sign, level: MatchLevel) -> String {
    format!(
        "In business partnerships, {} and {} can achieve {} success through collaboration.",
        a,
        b,
        level.as_str()
    )
}

static HIGH_MESSAGES: [&str; 4] = [
    "Excellent compatibility! This is a match made in the stars.",
    "High compatibility indicates a strong potential for a harmonious relationship.",
    "The stars align perfectly for this combination.",
    "This pairing has great potential for long-term success.",
];

static MEDIUM_MESSAGES: [&str; 4] = [
    "Good compatibility with room for growth and understanding.",
    "This combination can work well with mutual effort and communication.",
    "Moderate compatibility suggests a balanced relationship dynamic.",
    "With patience and understanding, this can be a rewarding partnership.",
];

static LOW_MESSAGES: [&str; 4] = [
    "Challenging compatibility that may require extra effort and understanding.",
    "This combination may face some obstacles but can grow stronger through challenges.",
    "Lower compatibility suggests the need for open communication and compromise.",
    "While challenging, this pairing can teach valuable life lessons.",
];

static HIGH_TIPS: [&str; 5] = [
    "Communicate openly and honestly",
    "Support each other's goals and dreams",
    "Celebrate your differences and similarities",
    "Maintain trust and loyalty",
    "Continue to grow together",
];

static MEDIUM_TIPS: [&str; 5] = [
    "Focus on effective communication",
    "Be patient with each other's differences",
    "Find common ground and shared interests",
    "Practice active listening",
    "Work on building trust gradually",
];

static LOW_TIPS: [&str; 5] = [
    "Practice patience and understanding",
    "Focus on open and honest communication",
    "Respect each other's boundaries",
    "Seek professional guidance if needed",
    "Remember that challenges can lead to growth",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrix_lookups() {
        assert_eq!(score(Sign::Aries, Sign::Leo), 90);
        assert_eq!(score(Sign::Aries, Sign::Sagittarius), 95);
        assert_eq!(score(Sign::Pisces, Sign::Aries), 40);
        assert_eq!(score(Sign::Libra, Sign::Gemini), 95);
    }

    #[test]
    fn test_texts() {
        assert_eq!(
            friendship_text(Sign::Aries, Sign::Leo, MatchLevel::High),
            "As friends, Aries and Leo can build a high level of trust and understanding."
        );
        assert!(love_text(Sign::Aries, Sign::Leo, 90, "Great.").starts_with("Aries and Leo have a 90%"));
    }
}
