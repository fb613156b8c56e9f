//! Sign profiles, traditional sign pairings and the twelve houses.

use crate::records::ZodiacProfile;
use crate::zodiac::{Element, Sign};

pub static PROFILES: [ZodiacProfile; 12] = [
    ZodiacProfile {
        id: "aries",
        name: "Aries",
        symbol: "♈",
        element: Element::Fire,
        ruling_planet: "Mars",
        dates: "March 21 - April 19",
        traits: &["Courageous", "Energetic", "Willful", "Pioneering", "Independent"],
        description: "Aries is the first sign of the zodiac, and those born under this sign are bold and ambitious. They are natural leaders who are always ready for action.",
        lucky_colors: &["Red", "Orange", "Crimson"],
        lucky_numbers: &[1, 9, 17],
    },
    ZodiacProfile {
        id: "taurus",
        name: "Taurus",
        symbol: "♉",
        element: Element::Earth,
        ruling_planet: "Venus",
        dates: "April 20 - May 20",
        traits: &["Patient", "Reliable", "Devoted", "Persistent", "Practical"],
        description: "Taurus is known for being reliable, practical, ambitious and sensual. They have an eye for beauty and love to be surrounded by love and material pleasures.",
        lucky_colors: &["Green", "Pink", "Brown"],
        lucky_numbers: &[2, 6, 15],
    },
    ZodiacProfile {
        id: "gemini",
        name: "Gemini",
        symbol: "♊",
        element: Element::Air,
        ruling_planet: "Mercury",
        dates: "May 21 - June 20",
        traits: &["Adaptable", "Versatile", "Communicative", "Witty", "Intellectual"],
        description: "Gemini is versatile, expressive, and quick-witted. They are excellent communicators and can adapt to any situation.",
        lucky_colors: &["Yellow", "Light Blue", "Orange"],
        lucky_numbers: &[3, 5, 12],
    },
    ZodiacProfile {
        id: "cancer",
        name: "Cancer",
        symbol: "♋",
        element: Element::Water,
        ruling_planet: "Moon",
        dates: "June 21 - July 22",
        traits: &["Nurturing", "Protective", "Intuitive", "Emotional", "Sympathetic"],
        description: "Cancer is deeply intuitive and sentimental. They are very emotional and sensitive, and care deeply about matters of the family.",
        lucky_colors: &["Silver", "White", "Pearl"],
        lucky_numbers: &[2, 7, 11],
    },
    ZodiacProfile {
        id: "leo",
        name: "Leo",
        symbol: "♌",
        element: Element::Fire,
        ruling_planet: "Sun",
        dates: "July 23 - August 22",
        traits: &["Creative", "Passionate", "Generous", "Warm-hearted", "Cheerful"],
        description: "Leo is dramatic, creative, self-confident, born to lead and born to entertain. They are natural leaders and have a strong sense of self.",
        lucky_colors: &["Gold", "Orange", "Yellow"],
        lucky_numbers: &[1, 5, 9],
    },
    ZodiacProfile {
        id: "virgo",
        name: "Virgo",
        symbol: "♍",
        element: Element::Earth,
        ruling_planet: "Mercury",
        dates: "August 23 - September 22",
        traits: &["Analytical", "Kind", "Hardworking", "Practical", "Modest"],
        description: "Virgo is analytical, kind, hardworking and practical. They are perfectionists and pay attention to every detail.",
        lucky_colors: &["Green", "Brown", "Navy Blue"],
        lucky_numbers: &[4, 6, 8],
    },
    ZodiacProfile {
        id: "libra",
        name: "Libra",
        symbol: "♎",
        element: Element::Air,
        ruling_planet: "Venus",
        dates: "September 23 - October 22",
        traits: &["Diplomatic", "Gracious", "Fair-minded", "Social", "Peaceful"],
        description: "Libra is peaceful, fair, and they hate being alone. Partnership is very important for them, as their mirror and someone to grow with.",
        lucky_colors: &["Pink", "Light Blue", "Lavender"],
        lucky_numbers: &[2, 6, 7],
    },
    ZodiacProfile {
        id: "scorpio",
        name: "Scorpio",
        symbol: "♏",
        element: Element::Water,
        ruling_planet: "Pluto",
        dates: "October 23 - November 21",
        traits: &["Passionate", "Determined", "Magnetic", "Mysterious", "Strategic"],
        description: "Scorpio is passionate and assertive. They are determined and decisive, and will research until they find out the truth.",
        lucky_colors: &["Deep Red", "Black", "Maroon"],
        lucky_numbers: &[4, 8, 11],
    },
    ZodiacProfile {
        id: "sagittarius",
        name: "Sagittarius",
        symbol: "♐",
        element: Element::Fire,
        ruling_planet: "Jupiter",
        dates: "November 22 - December 21",
        traits: &["Optimistic", "Adventurous", "Independent", "Honest", "Philosophical"],
        description: "Sagittarius is optimistic, loves freedom, and exploration. They are enthusiastic, extroverted, and always ready for an adventure.",
        lucky_colors: &["Purple", "Blue", "Indigo"],
        lucky_numbers: &[3, 9, 12],
    },
    ZodiacProfile {
        id: "capricorn",
        name: "Capricorn",
        symbol: "♑",
        element: Element::Earth,
        ruling_planet: "Saturn",
        dates: "December 22 - January 19",
        traits: &["Responsible", "Disciplined", "Self-controlled", "Ambitious", "Patient"],
        description: "Capricorn is responsible and disciplined, masters of self-control and have the ability to lead, with solid organizational skills.",
        lucky_colors: &["Dark Green", "Brown", "Gray"],
        lucky_numbers: &[1, 4, 8],
    },
    ZodiacProfile {
        id: "aquarius",
        name: "Aquarius",
        symbol: "♒",
        element: Element::Air,
        ruling_planet: "Uranus",
        dates: "January 20 - February 18",
        traits: &["Progressive", "Original", "Independent", "Humanitarian", "Intellectual"],
        description: "Aquarius is deep, imaginative, and uncompromising in their dedication to making the world a better place.",
        lucky_colors: &["Electric Blue", "Turquoise", "Silver"],
        lucky_numbers: &[2, 5, 7],
    },
    ZodiacProfile {
        id: "pisces",
        name: "Pisces",
        symbol: "♓",
        element: Element::Water,
        ruling_planet: "Neptune",
        dates: "February 19 - March 20",
        traits: &["Compassionate", "Artistic", "Intuitive", "Gentle", "Musical"],
        description: "Pisces is intuitive, artistic, and deeply feeling. They are the most spiritual of all signs and have a deep connection to the universe.",
        lucky_colors: &["Sea Green", "Lavender", "Aqua"],
        lucky_numbers: &[3, 7, 9],
    },
];

/// Profile for a sign. `PROFILES` is indexed in wheel order.
pub fn profile(sign: Sign) -> &'static ZodiacProfile {
    &PROFILES[sign.index()]
}

/// Profile by lowercase id or sign name.
pub fn find_profile(id: &str) -> Option<&'static ZodiacProfile> {
    Sign::parse(id).map(profile)
}

/// Traditionally harmonious signs, strongest first.
pub fn compatible_signs(sign: Sign) -> [Sign; 3] {
    use Sign::*;
    match sign {
        Aries => [Leo, Sagittarius, Gemini],
        Taurus => [Virgo, Capricorn, Cancer],
        Gemini => [Libra, Aquarius, Aries],
        Cancer => [Scorpio, Pisces, Taurus],
        Leo => [Aries, Sagittarius, Gemini],
        Virgo => [Taurus, Capricorn, Cancer],
        Libra => [Gemini, Aquarius, Leo],
        Scorpio => [Cancer, Pisces, Virgo],
        Sagittarius => [Aries, Leo, Libra],
        Capricorn => [Taurus, Virgo, Scorpio],
        Aquarius => [Gemini, Libra, Sagittarius],
        Pisces => [Cancer, Scorpio, Capricorn],
    }
}

/// (name, life area) for houses 1..=12.
pub static HOUSES: [(&str, &str); 12] = [
    ("Ascendant", "Self, personality, appearance"),
    ("Wealth", "Finances, family, speech"),
    ("Siblings", "Communication, courage, short journeys"),
    ("Mother", "Home, property, vehicles"),
    ("Children", "Intelligence, creativity, romance"),
    ("Enemies", "Health, service, obstacles"),
    ("Spouse", "Partnership, marriage, business"),
    ("Longevity", "Mystery, research, sudden events"),
    ("Dharma", "Religion, guru, higher learning"),
    ("Career", "Profession, authority, reputation"),
    ("Income", "Gains, friends, elder siblings"),
    ("Moksha", "Expenses, foreign travel, liberation"),
];

/// Name and area of a house numbered 1..=12.
pub fn house(number: u8) -> (&'static str, &'static str) {
    HOUSES[(number.clamp(1, 12) - 1) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_align_with_sign_order() {
        for sign in Sign::ALL {
            let p = profile(sign);
            assert_eq!(p.name, sign.name());
            assert_eq!(p.element, sign.element());
            assert_eq!(p.traits.len(), 5);
        }
    }

    #[test]
    fn test_find_profile_by_id() {
        assert_eq!(find_profile("leo").map(|p| p.ruling_planet), Some("Sun"));
        assert!(find_profile("dragon").is_none());
    }

    #[test]
    fn test_house_lookup() {
        assert_eq!(house(1).0, "Ascendant");
        assert_eq!(house(12).0, "Moksha");
    }
}
