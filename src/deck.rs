//! The fixed 52-card deck.
//!
//! Ids are the strings `"1"` through `"52"`. The table is compiled in and
//! never changes at runtime.

use serde::Serialize;

/// One card: an id, a short title, and the text the model reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
}

/// Number of cards in the deck.
pub const DECK_SIZE: usize = 52;

/// Look up a card by id. `None` for anything outside `"1"..="52"`.
pub fn get(id: &str) -> Option<&'static Card> {
    CARDS.iter().find(|card| card.id == id)
}

/// Every card id, in deck order.
pub fn all_ids() -> impl ExactSizeIterator<Item = &'static str> {
    CARDS.iter().map(|card| card.id)
}

/// Every card, in deck order.
pub fn cards() -> &'static [Card] {
    CARDS
}

const CARDS: &[Card] = &[
    Card {
        id: "1",
        title: "First Step",
        content: "Every journey begins with a single step. Lace up your boots and take that first leap toward growth. Whether it’s a new project or personal goal, progress starts now. Embrace the adventure and plant the seeds of success!",
    },
    Card {
        id: "2",
        title: "Be Water",
        content: "Flexibility is the ultimate strength. Inspired by Bruce Lee’s wisdom, the idea is to adapt like water—shaping yourself to challenges. Flow through obstacles, nourish your creativity, and let resilience carry you forward.",
    },
    Card {
        id: "3",
        title: "NOW",
        content: "The past is gone, and the future is unknown. Embrace the present moment and measure where you are now. Your power lies in the here and now—seize the day!",
    },
    Card {
        id: "4",
        title: "Five Constant Virtues",
        content: "Align your life with wisdom, integrity, and compassion. Much like tending to a garden, personal growth requires care and nurturing. Cultivate these virtues daily and watch your life bloom with purpose and harmony.",
    },
    Card {
        id: "5",
        title: "Ying Yang",
        content: "Balance lies in embracing opposites. The ebb and flow, the light and dark—all are essential parts of life’s journey. Harness the power of balance to move forward and thrive in every aspect of your life.",
    },
    Card {
        id: "6",
        title: "Sharpen the Saw",
        content: "A dull tool leads nowhere. Invest in sharpening your skills and strengthening your mind. With consistent effort, cut through challenges and achieve more than ever before. Stay sharp and ready!",
    },
    Card {
        id: "7",
        title: "PEACE Method",
        content: "Climb life’s ladder one step at a time. Avoid shortcuts or stepping on others along the way. Build peace in your relationships and goals by balancing patience with determination.",
    },
    Card {
        id: "8",
        title: "Enneagram",
        content: "Dig deep into your personality and motivations. Rake through the leaves of your mind to uncover hidden truths. Self-awareness is the key to unlocking your full potential and living authentically.",
    },
    Card {
        id: "9",
        title: "Ten Factors of Life",
        content: "Unlock life’s mysteries by gaining wisdom. Gain clarity and direction as you uncover what truly matters. A life guided by understanding and purpose is one of fulfillment and growth.",
    },
    Card {
        id: "10",
        title: "21-Day Glasses",
        content: "Seeing clearly sometimes means facing the truth, even when it’s uncomfortable. Shift your perspective and embrace the clarity that comes with honest self-reflection. Growth begins with an honest view of yourself.",
    },
    Card {
        id: "11",
        title: "Fightless Win",
        content: "Victory doesn’t always mean conflict. By staying calm, composed, and confident, success becomes attainable without unnecessary battles. Let others panic while you maintain focus and achieve your goals with grace.",
    },
    Card {
        id: "12",
        title: "Growth Mindset",
        content: "Getting your hands dirty is the first step to success. Challenges are opportunities to grow, and every failure becomes a lesson. With a growth mindset, you’ll turn obstacles into stepping stones for greatness.",
    },
    Card {
        id: "13",
        title: "Learn Earn Return",
        content: "Plant seeds of wisdom and reap the rewards of good karma. Invest in yourself, grow your knowledge, and give back to others. True success is measured by the positive impact you leave behind.",
    },
    Card {
        id: "14",
        title: "Habit Contract",
        content: "Smooth out the rough edges of your daily routines. Transform unproductive habits into polished, productive behaviors through commitment and focus. Consistency is the key to turning small changes into big results.",
    },
    Card {
        id: "15",
        title: "Do the Hard Things First",
        content: "Tackle the tough tasks first, just like using the strongest tool in a Swiss knife. Facing challenges head-on makes the rest of the day feel lighter. Start strong and finish stronger!",
    },
    Card {
        id: "16",
        title: "➕➖✖️➗",
        content: "Find the perfect fit for every problem. Like a wrench tightening loose bolts, precision and the right strategies ensure success. Adjust, refine, and make everything fit perfectly.",
    },
    Card {
        id: "17",
        title: "5W1H",
        content: "Get a firm grip on success by asking the right questions. Like a clamp holding everything securely in place, Who, What, When, Where, Why, and How strengthen your understanding and keep your plans steady and on track.",
    },
    Card {
        id: "18",
        title: "6 Persuasive Leadership",
        content: "Leadership isn’t one-size-fits-all. With six approaches to persuasion, explore how to adapt and inspire effectively. Use the right tools for each situation to motivate your team and drive results.",
    },
    Card {
        id: "19",
        title: "7 Drucker Principles",
        content: "Manage with precision and lead with purpose. The principles of Peter Drucker guide you to tighten your approach to management and unlock the full potential of your team.",
    },
    Card {
        id: "20",
        title: "80/20",
        content: "Focus on the vital 20% that drives 80% of results. Prioritize what matters most and find balance in a world of distractions. Alignment with key priorities leads to transformative progress.",
    },
    Card {
        id: "21",
        title: "SWOT",
        content: "Apply pressure where it matters most to make an impact. Identifying strengths, weaknesses, opportunities, and threats helps carve out a path to success with precision and confidence.",
    },
    Card {
        id: "22",
        title: "Weekly Goal",
        content: "Planning is the foundation of progress. Setting achievable weekly goals ensures consistency and alignment with long-term visions. Like measuring twice to cut once, small steps lead to big wins.",
    },
    Card {
        id: "23",
        title: "Due Diligence Checklist",
        content: "Preparation prevents mistakes. Double-check details and ensure you’re hitting the mark with precision. A solid foundation leads to stronger results and fewer missteps along the way.",
    },
    Card {
        id: "24",
        title: "SWIFT Conversation",
        content: "Effective communication sharpens relationships. Delivering the right message at the right time ensures clarity and impact. One well-placed idea can inspire and energize your audience.",
    },
    Card {
        id: "25",
        title: "4Q Leadership",
        content: "Shine a light for others to follow. Leading with clarity and purpose ensures that your team moves forward with confidence. Illuminate the path without overwhelming or blinding yourself or others.",
    },
    Card {
        id: "26",
        title: "OKR",
        content: "Clear objectives lead to impactful results. Setting focused goals aligns efforts and prevents chaos. Precision and purpose ensure that every step contributes to meaningful outcomes.",
    },
    Card {
        id: "27",
        title: "Never Stop Creating",
        content: "Creativity has no limits. A sponge absorbs inspiration from everywhere, reminding you to keep creating and finding joy in the process. It’s not about competition but about letting your imagination flow freely.",
    },
    Card {
        id: "28",
        title: "Life Experience Map",
        content: "Every journey in life holds value. Chopsticks carefully pick up lessons from the past, helping you savor moments that shape who you are. Use these experiences to build a meaningful and enriched future.",
    },
    Card {
        id: "29",
        title: "We Rhyme We Kool",
        content: "Laughter is the secret ingredient to healing. A cooking pot blends diverse flavors, just as humor and joy bring people together. Create connections that nourish the soul and brighten your day.",
    },
    Card {
        id: "30",
        title: "Vocab of the Day",
        content: "Expanding your vocabulary sharpens communication. A cheese grater refines ingredients, just as enriching your lexicon refines how you express yourself. Words have power—choose them wisely and creatively.",
    },
    Card {
        id: "31",
        title: "Koolers Story",
        content: "Every voice matters, and every story deserves to be shared. An apron protects the storyteller, symbolizing the value of celebrating unique experiences. Together, these voices weave a rich and inspiring tapestry.",
    },
    Card {
        id: "32",
        title: "Weekly Kool News",
        content: "Collaboration fuels co-creation. A cutting board prepares ingredients for something extraordinary, just as sharing updates and ideas builds something greater, week by week.",
    },
    Card {
        id: "33",
        title: "Book Club",
        content: "Knowledge and growth are everywhere. A notebook and pen symbolize the value of capturing wisdom, diving into books, and fueling curiosity. Learning unlocks new perspectives and infinite possibilities.",
    },
    Card {
        id: "34",
        title: "Advisory Board",
        content: "Guidance leads to wisdom. A kitchen scale ensures balance, much like the wisdom of mentors and advisors helps weigh options and make informed decisions. Good advice is a recipe for success.",
    },
    Card {
        id: "35",
        title: "5 Kool Tenets",
        content: "Life is measured by your values. A set of measuring cups helps find the perfect mix, reminding you to prioritize what matters and create a purposeful, fulfilling life.",
    },
    Card {
        id: "36",
        title: "Purpose Statement",
        content: "Together, we can create a sustainable future. A water bottle sustains you on the journey, just as a clear purpose energizes and inspires meaningful, impactful actions.",
    },
    Card {
        id: "37",
        title: "Wellness Boosters",
        content: "Protect your body, mind, and soul with small, consistent actions that nourish well-being. A set of cutlery represents habits that strengthen overall health and lead to lasting vitality.",
    },
    Card {
        id: "38",
        title: "Kool Foundation",
        content: "Care is at the heart of every endeavor. A fry pan serves loved ones, symbolizing the importance of nurturing relationships and projects that matter most. Build a foundation of support and compassion.",
    },
    Card {
        id: "39",
        title: "KoolBook",
        content: "Documenting knowledge creates a legacy. A recipe book preserves culinary secrets, much like capturing experiences and insights inspires and guides future generations. Share your story—it’s a gift.",
    },
    Card {
        id: "40",
        title: "25 Bullets Writing",
        content: "Aim before you write. A set of 25 colorful pencils organizes thoughts and ideas, creating something vibrant and impactful. Intentional writing leads to clarity and creativity.",
    },
    Card {
        id: "41",
        title: "Innovation Day",
        content: "Innovation can happen anywhere with anyone. Paper clips hold ideas together, inspiring connections between minds and concepts to spark breakthroughs. Collaboration is the catalyst for new possibilities.",
    },
    Card {
        id: "42",
        title: "4P Presentation",
        content: "Deliver your pitch with precision and impact. A pin hits its target, just as a well-crafted presentation leaves a lasting impression. Clear, captivating communication drives success.",
    },
    Card {
        id: "43",
        title: "5 Branding Discipline",
        content: "Highlight your brand’s purpose. Highlighter pens emphasize key points, showing the importance of focusing on identity and values. Stand out by staying true to your vision.",
    },
    Card {
        id: "44",
        title: "Lean Canvas",
        content: "Design lean and adapt quickly. A paint canvas offers a space to sketch bold ideas, refine them, and bring them to life with agility and focus.",
    },
    Card {
        id: "45",
        title: "Emotion by Design",
        content: "Create a legacy, not just a memory. A stapler connects ideas seamlessly, reminding you to design with intention and evoke emotions that build deeper connections.",
    },
    Card {
        id: "46",
        title: "Visual Thinking",
        content: "A picture speaks a thousand words. A camera captures moments, encouraging you to visualize thoughts and communicate them effectively. Transform complex ideas into clear, memorable visuals.",
    },
    Card {
        id: "47",
        title: "4A Feedback",
        content: "Feedback is essential for growth. An eraser refines a sketch, symbolizing actionable, appreciative, and effective exchanges. Decide what to keep or discard, and grow through constructive feedback.",
    },
    Card {
        id: "48",
        title: "Prompt Engineering",
        content: "Let brilliance emerge from the fusion of mind and machine. An iPad blends technology and creativity, opening doors to innovative solutions and unlocking your full potential.",
    },
    Card {
        id: "49",
        title: "Social Ecosystem Map",
        content: "Connections are the foundation of a thriving future. A drawing compass maps relationships, helping to visualize networks and build a stronger, more connected community.",
    },
    Card {
        id: "50",
        title: "Design Thinking",
        content: "Empathy drives innovation. Post-it Notes capture ideas, showing how understanding people’s needs fosters creative solutions. Start with care, and let creativity flourish.",
    },
    Card {
        id: "51",
        title: "KoolLab",
        content: "Ideas are boundless. A computer mouse navigates endless possibilities, encouraging you to explore, experiment, and innovate in a space where creativity knows no limits.",
    },
    Card {
        id: "52",
        title: "Disruptive Innovation Business",
        content: "Disruption can pave the way for progress. A blank sheet of A4 paper represents challenging the status quo and reimagining the way things are done. Bold ideas drive transformation.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn deck_has_52_unique_ids() {
        let ids: HashSet<&str> = all_ids().collect();
        assert_eq!(all_ids().len(), DECK_SIZE);
        assert_eq!(ids.len(), DECK_SIZE);
    }

    #[test]
    fn ids_run_from_1_to_52() {
        for n in 1..=DECK_SIZE {
            assert!(get(&n.to_string()).is_some(), "missing card {n}");
        }
    }

    #[test]
    fn every_card_has_title_and_content() {
        for id in all_ids() {
            let card = get(id).unwrap();
            assert_eq!(card.id, id);
            assert!(!card.title.trim().is_empty(), "card {id} has no title");
            assert!(!card.content.trim().is_empty(), "card {id} has no content");
        }
    }

    #[test]
    fn first_card_is_first_step() {
        let card = get("1").unwrap();
        assert_eq!(card.title, "First Step");
        assert!(card.content.starts_with("Every journey begins"));
    }

    #[test]
    fn last_card() {
        assert_eq!(get("52").unwrap().title, "Disruptive Innovation Business");
    }

    #[test]
    fn unknown_ids_are_none() {
        assert!(get("0").is_none());
        assert!(get("53").is_none());
        assert!(get("").is_none());
        assert!(get(" 1").is_none());
    }

    #[test]
    fn cards_matches_all_ids() {
        let from_cards: Vec<&str> = cards().iter().map(|c| c.id).collect();
        let from_ids: Vec<&str> = all_ids().collect();
        assert_eq!(from_cards, from_ids);
    }
}
