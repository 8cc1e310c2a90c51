use crate::deck::Card;
use crate::reading::{ANSWER_MARKER, TAKEAWAY_MARKER};

const TASK: &str = "Provide a brief takeaway (1-2 sentences) summarizing the card's theme, followed by 'Answer to question:' and an answer to the question based on the card.";
const RULES: &[&str] = &[
    "Keep both concise and strip all markup styling: no markdown, no bold, no headings, no bullet symbols.",
    "If the card is not directly related to the question, still make up an insight that suits it, in the same tone. Never refuse.",
    "If the user asks in Chinese, reply in Chinese as written in Hong Kong Cantonese (zh-HK).",
];

/// System instruction for the text model: the card, the output contract, and
/// the question echoed after the two markers.
pub fn build_card_prompt(card: &Card, question: &str) -> String {
    let rules = RULES.join(" ");
    format!(
        "{title}\n{content}\n\n{task} {rules}\n\n{takeaway}\n{answer} {question}",
        title = card.title,
        content = card.content,
        task = TASK,
        rules = rules,
        takeaway = TAKEAWAY_MARKER,
        answer = ANSWER_MARKER,
        question = question,
    )
}
