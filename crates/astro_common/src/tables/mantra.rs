//! Built-in mantra catalogue.

use crate::records::{MantraCategory, MantraRecord};

pub struct StaticMantra {
    pub id: &'static str,
    pub name: &'static str,
    pub sanskrit: &'static str,
    pub transliteration: &'static str,
    pub meaning: &'static str,
    pub benefits: &'static [&'static str],
    pub best_time: &'static str,
    pub repetitions: u32,
    pub category: MantraCategory,
}

impl StaticMantra {
    pub fn to_record(&self) -> MantraRecord {
        MantraRecord {
            id: self.id.to_string(),
            name: self.name.to_string(),
            sanskrit: self.sanskrit.to_string(),
            transliteration: self.transliteration.to_string(),
            meaning: self.meaning.to_string(),
            benefits: self.benefits.iter().map(|b| b.to_string()).collect(),
            best_time: self.best_time.to_string(),
            repetitions: self.repetitions,
            category: self.category,
        }
    }
}

pub static MANTRAS: [StaticMantra; 9] = [
    StaticMantra {
        id: "gayatri-mantra",
        name: "Gayatri Mantra",
        sanskrit: "ॐ भूर्भुवः स्वः तत्सवितुर्वरेण्यं भर्गो देवस्य धीमहि धियो यो नः प्रचोदयात्",
        transliteration: "Om Bhur Bhuvah Svah Tat Savitur Varenyam Bhargo Devasya Dhimahi Dhiyo Yo Nah Pracodayat",
        meaning: "We meditate on the divine light of the sun, may it illuminate our intellect",
        benefits: &["Enhances intelligence", "Removes obstacles", "Brings peace of mind"],
        best_time: "Sunrise",
        repetitions: 108,
        category: MantraCategory::Planetary,
    },
    StaticMantra {
        id: "mahamrityunjaya-mantra",
        name: "Mahamrityunjaya Mantra",
        sanskrit: "ॐ त्र्यम्बकं यजामहे सुगन्धिं पुष्टिवर्धनम् उर्वारुकमिव बन्धनान् मृत्योर्मुक्षीय मामृतात्",
        transliteration: "Om Tryambakam Yajamahe Sugandhim Pushtivardhanam Urvarukamiva Bandhanan Mrityormukshiya Maamritat",
        meaning: "Prayer to Lord Shiva for liberation from death",
        benefits: &["Healing and recovery", "Longevity", "Protection from accidents"],
        best_time: "Early morning or evening",
        repetitions: 108,
        category: MantraCategory::Healing,
    },
    StaticMantra {
        id: "ganesh-mantra",
        name: "Ganesh Mantra",
        sanskrit: "ॐ गं गणपतये नमः",
        transliteration: "Om Gam Ganapataye Namah",
        meaning: "Salutations to Lord Ganesha",
        benefits: &["Removes obstacles", "Brings success in new ventures"],
        best_time: "Morning",
        repetitions: 108,
        category: MantraCategory::Planetary,
    },
    StaticMantra {
        id: "aries-mars-mantra",
        name: "Aries - Mars Mantra",
        sanskrit: "ॐ क्रां क्रीं क्रौं सः भौमाय नमः",
        transliteration: "Om Kram Krim Kraum Sah Bhaumaya Namah",
        meaning: "Prayer to Mars for courage and energy",
        benefits: &["Increases courage", "Physical strength", "Leadership"],
        best_time: "Tuesday morning",
        repetitions: 108,
        category: MantraCategory::ZodiacSpecific,
    },
    StaticMantra {
        id: "taurus-venus-mantra",
        name: "Taurus - Venus Mantra",
        sanskrit: "ॐ श्रीं शुक्राय नमः",
        transliteration: "Om Shrim Shukraya Namah",
        meaning: "Prayer to Venus for love and beauty",
        benefits: &["Enhances love life", "Artistic talents", "Material comforts"],
        best_time: "Friday morning",
        repetitions: 108,
        category: MantraCategory::ZodiacSpecific,
    },
    StaticMantra {
        id: "gemini-mercury-mantra",
        name: "Gemini - Mercury Mantra",
        sanskrit: "ॐ बुं बुधाय नमः",
        transliteration: "Om Bum Budhaya Namah",
        meaning: "Prayer to Mercury for intelligence",
        benefits: &["Improves communication", "Business success", "Learning"],
        best_time: "Wednesday morning",
        repetitions: 108,
        category: MantraCategory::ZodiacSpecific,
    },
    StaticMantra {
        id: "om-namah-shivaya",
        name: "Om Namah Shivaya",
        sanskrit: "ॐ नमः शिवाय",
        transliteration: "Om Namah Shivaya",
        meaning: "I bow to Shiva",
        benefits: &["Physical and mental healing", "Inner peace", "Removes negative energy"],
        best_time: "Any time",
        repetitions: 108,
        category: MantraCategory::Healing,
    },
    StaticMantra {
        id: "peace-mantra",
        name: "Peace Mantra",
        sanskrit: "ॐ शान्तिः शान्तिः शान्तिः",
        transliteration: "Om Shantih Shantih Shantih",
        meaning: "Peace, peace, peace",
        benefits: &["Inner peace", "Stress relief", "Harmony"],
        best_time: "Evening",
        repetitions: 21,
        category: MantraCategory::Healing,
    },
    StaticMantra {
        id: "prosperity-mantra",
        name: "Prosperity Mantra",
        sanskrit: "ॐ श्री महालक्ष्म्यै नमः",
        transliteration: "Om Shri Mahalakshmyai Namah",
        meaning: "Salutations to Goddess Lakshmi",
        benefits: &["Wealth", "Prosperity", "Abundance"],
        best_time: "Friday morning",
        repetitions: 108,
        category: MantraCategory::Planetary,
    },
];

/// Catalogue entries, optionally restricted to one category.
pub fn list(category: Option<MantraCategory>) -> Vec<MantraRecord> {
    MANTRAS
        .iter()
        .filter(|m| category.map_or(true, |c| m.category == c))
        .map(StaticMantra::to_record)
        .collect()
}

pub fn find(id: &str) -> Option<MantraRecord> {
    MANTRAS
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(id.trim()))
        .map(StaticMantra::to_record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_entries() {
        for category in MantraCategory::ALL {
            assert!(!list(Some(category)).is_empty(), "{:?}", category);
        }
        assert_eq!(list(None).len(), MANTRAS.len());
    }

    #[test]
    fn test_ids_match_slugs() {
        for m in MANTRAS.iter() {
            assert_eq!(m.id, crate::coerce::slug(m.name));
        }
        assert_eq!(find("peace-mantra").map(|m| m.repetitions), Some(21));
        assert!(find("missing").is_none());
    }
}
