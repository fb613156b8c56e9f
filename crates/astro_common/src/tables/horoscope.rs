//! Canned daily horoscope texts.

use crate::zodiac::Sign;

pub fn predictions(sign: Sign) -> &'static [&'static str; 3] {
    &PREDICTIONS[sign.index()]
}

static PREDICTIONS: [[&str; 3]; 12] = [
    [
        "Today brings fiery energy and determination. Your leadership qualities will shine through. Take bold steps towards your goals.",
        "Mars energy empowers you to take action. Be bold in your decisions. Physical activity will bring good results.",
        "Your natural courage and enthusiasm will help you overcome challenges. Trust your instincts.",
    ],
    [
        "Venus blesses you with harmony in relationships. Express your feelings openly. Financial gains are possible.",
        "Your practical nature will help you make wise decisions today. Focus on stability and growth.",
        "Patience and persistence will lead to success. Trust in your abilities.",
    ],
    [
        "Mercury's influence brings clarity to your thoughts. Communication will be key today. Trust your intuition.",
        "Your curiosity and adaptability will open new doors. Embrace change and learning.",
        "Social interactions will be particularly rewarding today. Share your ideas freely.",
    ],
    [
        "The Moon's energy enhances your emotional intelligence. Trust your feelings and intuition.",
        "Your nurturing nature will bring positive energy to those around you. Focus on family and home.",
        "Emotional connections will be strengthened today. Express your care and concern.",
    ],
    [
        "The Sun's energy makes you the center of attention. Your charisma will attract opportunities.",
        "Your natural leadership will be recognized today. Take charge of situations with confidence.",
        "Creative projects will flourish under your guidance. Express yourself boldly.",
    ],
    [
        "Your attention to detail will be your greatest asset today. Focus on organization and efficiency.",
        "Analytical thinking will help you solve complex problems. Trust your logical mind.",
        "Service to others will bring you satisfaction and recognition.",
    ],
    [
        "Venus brings balance and harmony to your relationships. Focus on fairness and cooperation.",
        "Your diplomatic nature will help resolve conflicts. Seek balance in all areas.",
        "Social connections will be particularly rewarding today.",
    ],
    [
        "Your intuitive powers are heightened today. Trust your gut feelings and insights.",
        "Transformation and change are in the air. Embrace new beginnings.",
        "Your determination will help you achieve your goals. Stay focused and persistent.",
    ],
    [
        "Jupiter's influence brings optimism and expansion. New opportunities are on the horizon.",
        "Your adventurous spirit will lead you to exciting discoveries. Embrace new experiences.",
        "Philosophical insights will guide your decisions today. Trust your wisdom.",
    ],
    [
        "Saturn's energy brings discipline and structure. Your hard work will pay off.",
        "Your ambition and determination will lead to success. Stay focused on your goals.",
        "Practical decisions will bring long-term benefits. Trust your judgment.",
    ],
    [
        "Uranus brings innovation and originality to your thinking. Embrace your unique perspective.",
        "Your humanitarian nature will inspire others today. Focus on community and friendship.",
        "Progressive ideas will lead to positive change. Share your vision with others.",
    ],
    [
        "Neptune enhances your spiritual awareness and creativity. Trust your dreams and intuition.",
        "Your compassionate nature will touch the lives of others. Focus on healing and empathy.",
        "Artistic and spiritual pursuits will bring fulfillment today.",
    ],
];

pub static LOVE: [&str; 5] = [
    "Romantic opportunities may arise today. Open your heart to new possibilities.",
    "Communication with your partner will strengthen your bond.",
    "Single? Keep your eyes open for someone special.",
    "Express your feelings openly and honestly.",
    "Past relationships may bring valuable lessons today.",
];

pub static CAREER: [&str; 5] = [
    "New opportunities may present themselves at work.",
    "Your skills and talents will be recognized by superiors.",
    "Collaboration with colleagues will lead to success.",
    "Consider taking on new responsibilities or projects.",
    "Networking will open doors to future opportunities.",
];

pub static FINANCE: [&str; 5] = [
    "Financial decisions should be made carefully today.",
    "Unexpected income or opportunities may arise.",
    "Investments made today could be profitable.",
    "Avoid impulsive spending and focus on saving.",
    "Financial planning will bring long-term benefits.",
];

pub static HEALTH: [&str; 5] = [
    "Focus on maintaining a balanced diet and exercise routine.",
    "Mental health and stress management are important today.",
    "Consider trying new wellness practices or activities.",
    "Rest and relaxation will help restore your energy.",
    "Preventive health measures will be beneficial.",
];

pub static LUCKY_COLORS: [&str; 10] = [
    "Red", "Blue", "Green", "Yellow", "Purple", "Orange", "Pink", "Gold", "Silver", "White",
];

/// Ruling-planet influence line for a sign.
pub fn planetary_influence(ruler: &str) -> String {
    format!("{} shapes the tone of the day", ruler)
}
