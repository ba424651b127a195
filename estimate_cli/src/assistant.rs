//! # FAQ Assistant
//!
//! Keyword-matched responder for common construction questions. A static
//! ordered list of (keyword set, canned answer) pairs; the first pair
//! with a case-insensitive substring hit wins. Unmatched questions get a
//! pseudo-random pick from a fixed default-reply set - the RNG seed is
//! injectable so tests are deterministic.
//!
//! No state, no learning, and no coupling to the estimation engine.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Ordered knowledge base: first matching keyword set wins.
const KNOWLEDGE_BASE: &[(&[&str], &str)] = &[
    (
        &["slab", "ceiling", "concrete pour"],
        "For a ceiling you need the length, width, and thickness. Use the ceiling \
         calculator to get cement, sand, aggregate, water, and steel quantities.",
    ),
    (
        &["steel", "rebar", "reinforcement"],
        "Steel depends on the slab system: a normal slab takes about 80 kg/m², a flat \
         slab 120 kg/m², and a beam-and-slab system 150 kg/m². Rod counts assume 12 m \
         bars at 7.4 kg each.",
    ),
    (
        &["brick", "block", "wall", "masonry"],
        "Pick the unit type first: red brick lays about 55 units/m², cement and hollow \
         blocks about 12.5 units/m². The wall calculator adds 5% waste and the mortar \
         take-off for you.",
    ),
    (
        &["mortar", "joint"],
        "Mortar uses roughly 300 kg of cement and 1.2 m³ of sand per cubic meter of \
         mix - a 1:4 cement-to-sand ratio. The calculators figure the mortar volume \
         from the wall dimensions.",
    ),
    (
        &["plaster", "render", "finishing coat"],
        "Cement render takes about 250 kg of cement and 1.3 m³ of sand per cubic \
         meter; the usual coat is 1.5 to 2 cm thick. Gypsum render replaces both with \
         a bagged additive.",
    ),
    (
        &["tile", "ceramic", "marble", "floor"],
        "Divide the floor area by the area of one tile and add 5-15% for cuts and \
         breakage. A 60x60 tile covers 0.36 m², about 2.8 pieces per square meter.",
    ),
    (
        &["price", "cost", "budget", "how much"],
        "Prices vary by region and season. The calculators give rough estimates based \
         on current average market prices; treat them as a planning aid, not a quote.",
    ),
    (
        &["advice", "tips", "guidance"],
        "Useful rules of thumb: allow 5-10% extra for waste, buy from suppliers you \
         trust, check cement and steel quality on delivery, and consult an engineer \
         for anything structural.",
    ),
    (
        &["quality", "standard", "specification"],
        "Look for Portland cement grade 42.5, high-tensile reinforcement steel, and \
         clean salt-free sand. Materials should match the applicable national \
         standards.",
    ),
    (
        &["hello", "hi", "good morning", "good evening"],
        "Hello! I'm the estimation assistant. Ask me about slabs, walls, render, \
         tiles, or material prices.",
    ),
    (
        &["thank", "thanks"],
        "You're welcome! If you have any other questions about material quantities, \
         just ask.",
    ),
    (
        &["help", "what can you do"],
        "I can answer common questions about ceilings, masonry, render, flooring, and \
         linear elements - or point you at the right calculator.",
    ),
];

/// Fallback replies for unmatched questions.
const DEFAULT_REPLIES: [&str; 3] = [
    "Sorry, I didn't quite catch that. You can ask me about ceilings, bricks, render, \
     or tiles.",
    "I'm here to help with construction estimates. Try asking about the materials \
     your project needs.",
    "I can help you estimate building materials. What kind of calculation are you \
     looking for?",
];

/// Keyword FAQ responder with seedable fallback selection.
pub struct Assistant {
    rng: StdRng,
}

impl Assistant {
    /// Create an assistant with an entropy-seeded RNG.
    pub fn new() -> Self {
        Assistant {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an assistant with a fixed seed (deterministic fallbacks).
    pub fn with_seed(seed: u64) -> Self {
        Assistant {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Answer a free-text question.
    ///
    /// Returns the canned answer of the first keyword set with a
    /// case-insensitive substring match, else a pseudo-random default.
    pub fn reply(&mut self, message: &str) -> &'static str {
        let lower = message.to_lowercase();

        for (keywords, response) in KNOWLEDGE_BASE {
            if keywords.iter().any(|k| lower.contains(k)) {
                return response;
            }
        }

        DEFAULT_REPLIES[self.rng.gen_range(0..DEFAULT_REPLIES.len())]
    }
}

impl Default for Assistant {
    fn default() -> Self {
        Assistant::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let mut assistant = Assistant::with_seed(0);
        let reply = assistant.reply("How much STEEL do I need?");
        assert!(reply.contains("80 kg/m²"));
    }

    #[test]
    fn test_first_match_wins() {
        let mut assistant = Assistant::with_seed(0);
        // The message hits both the slab entry and the steel entry;
        // the earlier slab entry answers
        let reply = assistant.reply("how much steel for my slab?");
        assert!(reply.contains("ceiling calculator"));
    }

    #[test]
    fn test_unmatched_gets_default_reply() {
        let mut assistant = Assistant::with_seed(42);
        let reply = assistant.reply("completely unrelated question");
        assert!(DEFAULT_REPLIES.contains(&reply));
    }

    #[test]
    fn test_seeded_fallback_is_deterministic() {
        let mut a = Assistant::with_seed(7);
        let mut b = Assistant::with_seed(7);
        for _ in 0..10 {
            assert_eq!(a.reply("xyzzy"), b.reply("xyzzy"));
        }
    }
}
