// src/generation/prompt.rs

pub const SYSTEM_INSTRUCTION: &str = "You are a fun trivia question generator. \
You generate only valid JSON with a trivia question having one question, 4 multiple-choice \
options labeled A, B, C, D, one correct answer letter, and a short trivia explanation about \
the correct answer. IMPORTANT: Create engaging questions in Indonesian language suitable for \
students of all levels. AVOID programming, technical computer science questions, and overly \
specialized topics. Ensure variety by rotating through different categories with each \
question - never stick to the same topic for consecutive questions. Mix fun facts, academic \
knowledge, pop culture, science, history, arts, sports, and general knowledge. Always include \
a brief, interesting trivia fact about the correct answer.";

/// Prompt de una ronda. El timestamp evita que el modelo repita la misma pregunta.
pub fn question_prompt(category: &str, timestamp: u64) -> String {
    format!(
        r#"Create a fun, unique trivia question in Indonesian language with 4 choices where only one is correct. Make it suitable for students of all ages.

Use this category for the current question: {category}

The question should be fun, educational, and refreshing - avoid being too nationalistic or repetitive. Don't overuse "Indonesia" in the question.

Current timestamp: {timestamp}.
Avoid making the question repeated or similar to the one from the previous timestamp.

Return ONLY a JSON with this structure:
{{
    "question": "Pertanyaan menarik?",
    "options": {{
        "A": "Pilihan pertama",
        "B": "Pilihan kedua",
        "C": "Pilihan ketiga",
        "D": "Pilihan keempat"
    }},
    "correct": "A",
    "trivia": "Fakta menarik tentang jawaban yang benar."
}}
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_category_and_timestamp() {
        let prompt = question_prompt("Sejarah", 1_700_000_000);
        assert!(prompt.contains("category for the current question: Sejarah"));
        assert!(prompt.contains("Current timestamp: 1700000000."));
        assert!(prompt.contains(r#""correct": "A""#));
    }
}
