//! The Major Arcana deck.

use crate::records::TarotCard;

const MAJOR: &str = "Major Arcana";

macro_rules! card {
    ($id:expr, $name:expr, $meaning:expr, $reversed:expr, $image:expr) => {
        TarotCard {
            id: $id,
            name: $name,
            meaning: $meaning,
            reversed: $reversed,
            image: $image,
            suit: MAJOR,
        }
    };
}

pub static DECK: [TarotCard; 22] = [
    card!("1", "The Fool", "New beginnings, innocence, spontaneity", "Recklessness, risk-taking, naivety", "🃏"),
    card!("2", "The Magician", "Manifestation, resourcefulness, power", "Manipulation, poor planning, untapped talents", "🔮"),
    card!("3", "The High Priestess", "Intuition, sacred knowledge, divine feminine", "Secrets, disconnected from intuition, withdrawal", "🌙"),
    card!("4", "The Empress", "Femininity, beauty, nature, abundance", "Creative block, dependence on others, emptiness", "👑"),
    card!("5", "The Emperor", "Authority, establishment, structure, father figure", "Domination, excessive control, rigidity", "⚔️"),
    card!("6", "The Hierophant", "Tradition, conformity, spiritual wisdom", "Rebellion, subversiveness, new approaches", "📜"),
    card!("7", "The Lovers", "Love, harmony, relationships, choices", "Disharmony, imbalance, misalignment of values", "💕"),
    card!("8", "The Chariot", "Control, willpower, determination, success", "Lack of control and direction, aggression", "🏛️"),
    card!("9", "Strength", "Inner strength, courage, persuasion, influence", "Self doubt, low energy, raw emotion", "🦁"),
    card!("10", "The Hermit", "Soul-searching, introspection, solitude", "Isolation, loneliness, withdrawal", "🧙"),
    card!("11", "Wheel of Fortune", "Good luck, karma, life cycles, destiny", "Bad luck, resistance to change, breaking cycles", "🎡"),
    card!("12", "Justice", "Fairness, truth, cause and effect, law", "Unfairness, lack of accountability, dishonesty", "⚖️"),
    card!("13", "The Hanged Man", "Surrender, letting go, new perspectives", "Delays, resistance, stalling", "🙃"),
    card!("14", "Death", "Endings, change, transformation, transition", "Resistance to change, inability to move on", "💀"),
    card!("15", "Temperance", "Balance, moderation, patience, purpose", "Imbalance, excess, lack of long-term vision", "🏺"),
    card!("16", "The Devil", "Shadow self, attachment, restriction", "Releasing limiting beliefs, detachment", "😈"),
    card!("17", "The Tower", "Sudden change, upheaval, revelation", "Avoiding disaster, fear of change", "🗼"),
    card!("18", "The Star", "Hope, faith, renewal, serenity", "Lack of faith, despair, disconnection", "⭐"),
    card!("19", "The Moon", "Illusion, fear, anxiety, subconscious", "Release of fear, repressed emotion, clarity", "🌕"),
    card!("20", "The Sun", "Positivity, warmth, success, vitality", "Inner child, feeling down, overly optimistic", "☀️"),
    card!("21", "Judgement", "Judgement, rebirth, inner calling, absolution", "Self-doubt, inner critic, ignoring the call", "📯"),
    card!("22", "The World", "Completion, integration, accomplishment, travel", "Seeking personal closure, short-cuts, delays", "🌍"),
];

pub const READING_MESSAGE: &str =
    "Trust your intuition and use this guidance to navigate your path forward.";

pub const READING_INTERPRETATION: &str =
    "Your reading reveals insights about your past experiences, current present situation, and future possibilities.";

/// Deck card by name, case-insensitive.
pub fn find(name: &str) -> Option<&'static TarotCard> {
    let wanted = name.trim();
    DECK.iter().find(|c| c.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_deck_is_unique() {
        let names: HashSet<_> = DECK.iter().map(|c| c.name).collect();
        let ids: HashSet<_> = DECK.iter().map(|c| c.id).collect();
        assert_eq!(names.len(), 22);
        assert_eq!(ids.len(), 22);
    }

    #[test]
    fn test_find_card() {
        assert_eq!(find("the tower").map(|c| c.id), Some("17"));
        assert!(find("Ace of Cups").is_none());
    }
}
