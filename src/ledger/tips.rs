use rand::Rng;

pub static TIPS: [&str; 8] = [
    "🥩 Focus on fatty cuts for energy",
    "💧 Add salt to your water for electrolytes",
    "🔥 Cook with animal fats only",
    "🕒 Eat when hungry, don't force meals",
    "🔁 Rotate protein sources regularly",
    "🍳 Include eggs for choline",
    "🐟 Eat fish 2-3 times per week",
    "❤️ Consider organ meats for nutrients",
];

/// Uniform pick. Calls are independent, so repeats are expected.
pub fn pick_tip<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TIPS[rng.gen_range(0..TIPS.len())]
}
