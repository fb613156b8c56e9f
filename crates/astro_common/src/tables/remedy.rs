//! Built-in remedy catalogue: planetary gemstones, sign remedies and general remedies.

use crate::records::{Gemstone, RemedyCategory, RemedyRecord};
use crate::zodiac::Planet;

pub struct StaticGemstone {
    pub name: &'static str,
    pub planet: Planet,
    pub color: &'static str,
    pub finger: &'static str,
    pub day: &'static str,
    pub benefits: &'static str,
    pub price: &'static str,
    pub alternatives: &'static str,
    pub mantra: &'static str,
}

impl StaticGemstone {
    fn to_record(&self) -> Gemstone {
        Gemstone {
            name: self.name.to_string(),
            planet: self.planet,
            color: self.color.to_string(),
            finger: self.finger.to_string(),
            day: self.day.to_string(),
            benefits: self.benefits.to_string(),
            price: self.price.to_string(),
            alternatives: self.alternatives.to_string(),
            mantra: self.mantra.to_string(),
        }
    }
}

pub struct StaticRemedy {
    pub id: &'static str,
    pub name: &'static str,
    pub category: RemedyCategory,
    pub description: &'static str,
    pub solutions: &'static [&'static str],
    pub gemstones: &'static [StaticGemstone],
    pub mantras: &'static [&'static str],
}

impl StaticRemedy {
    pub fn to_record(&self) -> RemedyRecord {
        RemedyRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
            description: self.description.to_string(),
            solutions: self.solutions.iter().map(|s| s.to_string()).collect(),
            gemstones: self.gemstones.iter().map(StaticGemstone::to_record).collect(),
            mantras: self.mantras.iter().map(|m| m.to_string()).collect(),
        }
    }
}

pub static REMEDIES: [StaticRemedy; 14] = [
    StaticRemedy {
        id: "ruby-manik",
        name: "Ruby (Manik)",
        category: RemedyCategory::PlanetaryGemstones,
        description: "Gemstone for the Sun",
        solutions: &["Wear on the ring finger", "Set in gold", "Wear first on a Sunday morning"],
        gemstones: &[StaticGemstone {
            name: "Ruby",
            planet: Planet::Sun,
            color: "Red",
            finger: "Ring finger",
            day: "Sunday",
            benefits: "Leadership, authority, father, government, success",
            price: "High",
            alternatives: "Red coral, garnet",
            mantra: "ॐ ह्रां ह्रीं ह्रौं सः सूर्याय नमः",
        }],
        mantras: &["Surya Mantra"],
    },
    StaticRemedy {
        id: "pearl-moti",
        name: "Pearl (Moti)",
        category: RemedyCategory::PlanetaryGemstones,
        description: "Gemstone for the Moon",
        solutions: &["Wear on the little finger", "Set in silver", "Wear first on a Monday morning"],
        gemstones: &[StaticGemstone {
            name: "Pearl",
            planet: Planet::Moon,
            color: "White",
            finger: "Little finger",
            day: "Monday",
            benefits: "Mind, emotions, mother, peace, intuition",
            price: "High",
            alternatives: "White coral, moonstone",
            mantra: "ॐ श्रां श्रीं श्रौं सः चन्द्राय नमः",
        }],
        mantras: &["Chandra Mantra"],
    },
    StaticRemedy {
        id: "red-coral-moonga",
        name: "Red Coral (Moonga)",
        category: RemedyCategory::PlanetaryGemstones,
        description: "Gemstone for Mars",
        solutions: &["Wear on the ring finger", "Set in gold or copper", "Wear first on a Tuesday morning"],
        gemstones: &[StaticGemstone {
            name: "Red Coral",
            planet: Planet::Mars,
            color: "Red",
            finger: "Ring finger",
            day: "Tuesday",
            benefits: "Courage, energy, brother, property, strength",
            price: "Medium",
            alternatives: "Ruby, garnet",
            mantra: "ॐ क्रां क्रीं क्रौं सः भौमाय नमः",
        }],
        mantras: &["Mangal Mantra"],
    },
    StaticRemedy {
        id: "emerald-panna",
        name: "Emerald (Panna)",
        category: RemedyCategory::PlanetaryGemstones,
        description: "Gemstone for Mercury",
        solutions: &["Wear on the little finger", "Set in gold", "Wear first on a Wednesday morning"],
        gemstones: &[StaticGemstone {
            name: "Emerald",
            planet: Planet::Mercury,
            color: "Green",
            finger: "Little finger",
            day: "Wednesday",
            benefits: "Communication, business, intelligence, speech",
            price: "High",
            alternatives: "Green jade, peridot",
            mantra: "ॐ बुं बुधाय नमः",
        }],
        mantras: &["Budh Mantra"],
    },
    StaticRemedy {
        id: "yellow-sapphire-pukhraj",
        name: "Yellow Sapphire (Pukhraj)",
        category: RemedyCategory::PlanetaryGemstones,
        description: "Gemstone for Jupiter",
        solutions: &["Wear on the index finger", "Set in gold", "Wear first on a Thursday morning"],
        gemstones: &[StaticGemstone {
            name: "Yellow Sapphire",
            planet: Planet::Jupiter,
            color: "Yellow",
            finger: "Index finger",
            day: "Thursday",
            benefits: "Wisdom, children, guru, spirituality, wealth",
            price: "Very High",
            alternatives: "Yellow topaz, citrine",
            mantra: "ॐ ग्रां ग्रीं ग्रौं सः गुरवे नमः",
        }],
        mantras: &["Guru Mantra"],
    },
    StaticRemedy {
        id: "diamond-heera",
        name: "Diamond (Heera)",
        category: RemedyCategory::PlanetaryGemstones,
        description: "Gemstone for Venus",
        solutions: &["Wear on the middle finger", "Set in platinum or silver", "Wear first on a Friday morning"],
        gemstones: &[StaticGemstone {
            name: "Diamond",
            planet: Planet::Venus,
            color: "White/Colorless",
            finger: "Middle finger",
            day: "Friday",
            benefits: "Love, beauty, luxury, wife, arts",
            price: "Very High",
            alternatives: "White sapphire, zircon",
            mantra: "ॐ श्रीं शुक्राय नमः",
        }],
        mantras: &["Shukra Mantra"],
    },
    StaticRemedy {
        id: "blue-sapphire-neelam",
        name: "Blue Sapphire (Neelam)",
        category: RemedyCategory::PlanetaryGemstones,
        description: "Gemstone for Saturn",
        solutions: &["Wear on the middle finger", "Set in silver or iron", "Trial-wear for three days before committing"],
        gemstones: &[StaticGemstone {
            name: "Blue Sapphire",
            planet: Planet::Saturn,
            color: "Blue",
            finger: "Middle finger",
            day: "Saturday",
            benefits: "Discipline, karma, lessons, patience",
            price: "Very High",
            alternatives: "Blue topaz, amethyst",
            mantra: "ॐ श्रां श्रीं श्रौं सः शनैश्चराय नमः",
        }],
        mantras: &["Shani Mantra"],
    },
    StaticRemedy {
        id: "aries-remedies",
        name: "Aries Remedies",
        category: RemedyCategory::ZodiacRemedies,
        description: "Remedies for Aries, ruled by Mars. Deity: Lord Hanuman. Gemstone: Red Coral.",
        solutions: &[
            "Chant Hanuman Chalisa daily",
            "Donate red items on Tuesday",
            "Fast on Tuesday",
            "Visit Hanuman temple",
            "Wear red clothes on Tuesday",
        ],
        gemstones: &[],
        mantras: &["Hanuman Chalisa", "Mangal Mantra"],
    },
    StaticRemedy {
        id: "taurus-remedies",
        name: "Taurus Remedies",
        category: RemedyCategory::ZodiacRemedies,
        description: "Remedies for Taurus, ruled by Venus. Deity: Goddess Lakshmi. Gemstone: Diamond.",
        solutions: &[
            "Chant Lakshmi mantras",
            "Donate white items on Friday",
            "Fast on Friday",
            "Visit Lakshmi temple",
            "Wear white clothes on Friday",
        ],
        gemstones: &[],
        mantras: &["Lakshmi Mantra", "Shukra Mantra"],
    },
    StaticRemedy {
        id: "gemini-remedies",
        name: "Gemini Remedies",
        category: RemedyCategory::ZodiacRemedies,
        description: "Remedies for Gemini, ruled by Mercury. Deity: Lord Ganesha. Gemstone: Emerald.",
        solutions: &[
            "Chant Ganesh mantras",
            "Donate green items on Wednesday",
            "Fast on Wednesday",
            "Visit Ganesh temple",
            "Wear green clothes on Wednesday",
        ],
        gemstones: &[],
        mantras: &["Ganesh Mantra", "Budh Mantra"],
    },
    StaticRemedy {
        id: "career-problems",
        name: "Career Problems",
        category: RemedyCategory::GeneralRemedies,
        description: "Remedies for career and professional challenges",
        solutions: &[
            "Chant Gayatri Mantra 108 times daily",
            "Donate books to students",
            "Fast on Thursday",
            "Visit Saraswati temple",
            "Wear yellow clothes on Thursday",
        ],
        gemstones: &[],
        mantras: &["Gayatri Mantra", "Saraswati Mantra"],
    },
    StaticRemedy {
        id: "health-issues",
        name: "Health Issues",
        category: RemedyCategory::GeneralRemedies,
        description: "Remedies for health and wellness",
        solutions: &[
            "Chant Mahamrityunjaya Mantra",
            "Donate medicines to poor",
            "Fast on Monday",
            "Visit Shiva temple",
            "Wear white clothes on Monday",
        ],
        gemstones: &[],
        mantras: &["Mahamrityunjaya Mantra"],
    },
    StaticRemedy {
        id: "financial-problems",
        name: "Financial Problems",
        category: RemedyCategory::GeneralRemedies,
        description: "Remedies for money and prosperity",
        solutions: &[
            "Chant Lakshmi mantras",
            "Donate food to poor",
            "Fast on Friday",
            "Visit Lakshmi temple",
            "Wear yellow clothes on Friday",
        ],
        gemstones: &[],
        mantras: &["Lakshmi Mantra", "Prosperity Mantra"],
    },
    StaticRemedy {
        id: "relationship-issues",
        name: "Relationship Issues",
        category: RemedyCategory::GeneralRemedies,
        description: "Remedies for love, marriage and partnership",
        solutions: &[
            "Chant Venus mantras",
            "Donate sweets to couples",
            "Fast on Friday",
            "Visit Venus temple",
            "Wear pink clothes on Friday",
        ],
        gemstones: &[],
        mantras: &["Shukra Mantra"],
    },
];

pub fn list(category: Option<RemedyCategory>) -> Vec<RemedyRecord> {
    REMEDIES
        .iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .map(StaticRemedy::to_record)
        .collect()
}

pub fn find(id: &str) -> Option<RemedyRecord> {
    REMEDIES
        .iter()
        .find(|r| r.id.eq_ignore_ascii_case(id.trim()))
        .map(StaticRemedy::to_record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_populated() {
        assert_eq!(list(Some(RemedyCategory::PlanetaryGemstones)).len(), 7);
        assert_eq!(list(Some(RemedyCategory::ZodiacRemedies)).len(), 3);
        assert_eq!(list(Some(RemedyCategory::GeneralRemedies)).len(), 4);
    }

    #[test]
    fn test_bounds_hold_for_catalogue() {
        for r in REMEDIES.iter() {
            assert_eq!(r.id, crate::coerce::slug(r.name));
            assert!(r.solutions.len() <= 6);
            assert!(r.gemstones.len() <= 3);
            assert!(r.mantras.len() <= 5);
        }
        assert_eq!(
            find("ruby-manik").map(|r| r.gemstones[0].planet),
            Some(Planet::Sun)
        );
    }
}
