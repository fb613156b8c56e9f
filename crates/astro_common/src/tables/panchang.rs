//! Hindu calendar tables.

/// Thirty lunar days. Names repeat across the two fortnights; position
/// 15 is Purnima and position 30 is Amavasya.
pub static TITHIS: [&str; 30] = [
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami", "Shashthi", "Saptami",
    "Ashtami", "Navami", "Dashami", "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi",
    "Purnima", "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami", "Shashthi",
    "Saptami", "Ashtami", "Navami", "Dashami", "Ekadashi", "Dwadashi", "Trayodashi",
    "Chaturdashi", "Amavasya",
];

pub static NAKSHATRAS: [&str; 27] = [
    "Ashwini", "Bharani", "Krittika", "Rohini", "Mrigashira", "Ardra", "Punarvasu", "Pushya",
    "Ashlesha", "Magha", "Purva Phalguni", "Uttara Phalguni", "Hasta", "Chitra", "Swati",
    "Vishakha", "Anuradha", "Jyeshtha", "Mula", "Purva Ashadha", "Uttara Ashadha", "Shravana",
    "Dhanishta", "Shatabhisha", "Purva Bhadrapada", "Uttara Bhadrapada", "Revati",
];

pub static YOGAS: [&str; 27] = [
    "Vishkumbha", "Priti", "Ayushman", "Saubhagya", "Shobhana", "Atiganda", "Sukarman",
    "Dhriti", "Shula", "Ganda", "Vriddhi", "Dhruva", "Vyaghata", "Harshana", "Vajra", "Siddhi",
    "Vyatipata", "Variyan", "Parigha", "Shiva", "Siddha", "Sadhya", "Shubha", "Shukla",
    "Brahma", "Indra", "Vaidhriti",
];

pub static KARANAS: [&str; 10] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Garija", "Vanija", "Vishti", "Shakuni",
    "Chatushpada", "Naga",
];

pub static DAILY_WISDOMS: [&str; 15] = [
    "Today is auspicious for starting new ventures. Trust in the divine timing.",
    "Focus on spiritual practices and meditation for inner peace.",
    "Charity and helping others will bring positive karma today.",
    "Maintain harmony in relationships and avoid conflicts.",
    "Study and learning will be particularly rewarding today.",
    "Express gratitude for all blessings in your life today.",
    "Practice patience and understanding in all interactions.",
    "Today is perfect for self-reflection and inner growth.",
    "Connect with nature to find balance and tranquility.",
    "Share your knowledge and wisdom with others today.",
    "Embrace change with courage and optimism.",
    "Focus on family and strengthen your bonds today.",
    "Financial decisions made today will be favorable.",
    "Health and wellness should be your priority today.",
    "Creative pursuits will bring joy and fulfillment.",
];

pub static AUSPICIOUS_SLOTS: [&str; 6] = [
    "06:00 - 08:00 (Brahma Muhurta)",
    "09:00 - 11:00 (Abhijit Muhurta)",
    "15:00 - 17:00 (Godhuli Kaal)",
    "18:00 - 20:00 (Nishita Kaal)",
    "21:00 - 23:00 (Ardha Ratri)",
    "03:00 - 05:00 (Usha Kaal)",
];

pub static INAUSPICIOUS_SLOTS: [&str; 6] = [
    "12:00 - 13:00 (Rahu Kaal)",
    "16:00 - 17:30 (Yamaganda)",
    "18:00 - 19:30 (Gulika Kaal)",
    "14:00 - 15:30 (Kantaka)",
    "10:00 - 11:30 (Bhadra)",
    "08:00 - 09:30 (Vishti)",
];

pub const DEFAULT_TITHI_SIGNIFICANCE: &str =
    "Auspicious for spiritual practices and positive activities.";

pub const DEFAULT_NAKSHATRA_SIGNIFICANCE: &str =
    "Favorable for general activities and personal growth.";

pub fn tithi_significance(tithi: &str) -> &'static str {
    match tithi {
        "Pratipada" => "Auspicious for new beginnings, starting projects, and spiritual practices.",
        "Dwitiya" => "Good for education, learning, and intellectual pursuits.",
        "Tritiya" => "Favorable for creative activities, arts, and entertainment.",
        "Chaturthi" => "Ideal for spiritual practices, meditation, and inner reflection.",
        "Panchami" => "Excellent for travel, communication, and social activities.",
        "Shashthi" => "Good for health-related activities, exercise, and wellness.",
        "Saptami" => "Auspicious for relationships, partnerships, and harmony.",
        "Ashtami" => "Powerful for spiritual practices, fasting, and devotion.",
        "Navami" => "Favorable for courage, strength, and overcoming obstacles.",
        "Dashami" => "Good for success, achievement, and goal completion.",
        "Ekadashi" => "Highly auspicious for fasting, spiritual practices, and purification.",
        "Dwadashi" => "Favorable for charity, helping others, and community service.",
        "Trayodashi" => "Good for learning, knowledge acquisition, and wisdom.",
        "Chaturdashi" => "Ideal for meditation, introspection, and spiritual growth.",
        "Purnima" => "Perfect for celebrations, gratitude, and abundance.",
        "Amavasya" => "Powerful for new beginnings, letting go, and transformation.",
        _ => DEFAULT_TITHI_SIGNIFICANCE,
    }
}

pub fn nakshatra_significance(nakshatra: &str) -> &'static str {
    match nakshatra {
        "Ashwini" => "Symbolizes speed, energy, and new beginnings. Good for starting new ventures.",
        "Bharani" => "Represents creativity and artistic pursuits. Favorable for arts and crafts.",
        "Krittika" => "Associated with fire and purification. Good for spiritual practices.",
        "Rohini" => "Symbolizes growth and abundance. Auspicious for prosperity and fertility.",
        "Mrigashira" => "Represents curiosity and exploration. Good for learning and travel.",
        "Ardra" => "Associated with transformation and change. Good for personal growth.",
        "Punarvasu" => "Symbolizes renewal and restoration. Favorable for healing and recovery.",
        "Pushya" => "Represents nourishment and care. Good for family and relationships.",
        "Ashlesha" => "Associated with wisdom and knowledge. Good for education and learning.",
        "Magha" => "Symbolizes authority and leadership. Favorable for career advancement.",
        "Purva Phalguni" => "Represents joy and celebration. Good for social activities.",
        "Uttara Phalguni" => "Symbolizes partnership and harmony. Good for relationships.",
        "Hasta" => "Associated with skill and craftsmanship. Good for creative work.",
        "Chitra" => "Represents beauty and artistry. Favorable for artistic pursuits.",
        "Swati" => "Symbolizes independence and freedom. Good for personal development.",
        "Vishakha" => "Associated with determination and success. Good for achieving goals.",
        "Anuradha" => "Represents friendship and loyalty. Good for building relationships.",
        "Jyeshtha" => "Symbolizes wisdom and experience. Good for learning from elders.",
        "Mula" => "Associated with roots and foundation. Good for establishing stability.",
        "Purva Ashadha" => "Represents victory and success. Favorable for competitions.",
        "Uttara Ashadha" => "Symbolizes achievement and accomplishment. Good for goal setting.",
        "Shravana" => "Associated with listening and learning. Good for education.",
        "Dhanishta" => "Represents wealth and prosperity. Favorable for financial matters.",
        "Shatabhisha" => "Symbolizes healing and medicine. Good for health-related activities.",
        "Purva Bhadrapada" => "Associated with spirituality and devotion. Good for religious activities.",
        "Uttara Bhadrapada" => "Represents humanitarian work. Good for charity and service.",
        "Revati" => "Symbolizes completion and fulfillment. Good for finishing projects.",
        _ => DEFAULT_NAKSHATRA_SIGNIFICANCE,
    }
}

/// Canonical table entry matching `name` case-insensitively.
pub fn canonical(table: &'static [&'static str], name: &str) -> Option<&'static str> {
    let wanted = name.trim();
    table.iter().copied().find(|t| t.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tithi_layout() {
        assert_eq!(TITHIS[14], "Purnima");
        assert_eq!(TITHIS[29], "Amavasya");
        assert_eq!(TITHIS[0], TITHIS[15]);
    }

    #[test]
    fn test_significance_defaults() {
        assert!(tithi_significance("Ekadashi").contains("fasting"));
        assert_eq!(tithi_significance("Unknown"), DEFAULT_TITHI_SIGNIFICANCE);
        assert_eq!(nakshatra_significance("Unknown"), DEFAULT_NAKSHATRA_SIGNIFICANCE);
    }

    #[test]
    fn test_canonical_lookup() {
        assert_eq!(canonical(&NAKSHATRAS, "purva phalguni"), Some("Purva Phalguni"));
        assert_eq!(canonical(&KARANAS, "Kimstughna"), None);
    }
}
