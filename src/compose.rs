//! Prompt composition.
//!
//! Merges retrieved context and the user's topic into a single instruction
//! string. Deterministic: identical inputs produce byte-identical output.
//! Context is capped at `max_context_chars` (the head is kept — hits arrive
//! nearest-first, so the best matches survive truncation).

/// Build the retrieval-augmented instruction for the analysis stage.
pub fn compose_prompt(topic: &str, context: &str, max_context_chars: usize) -> String {
    let context = truncate_chars(context, max_context_chars);
    format!(
        "Use the following admissions information to answer the question.\n\n\
         Context:\n{}\n\nQuestion: {}",
        context, topic
    )
}

/// Cut `s` to at most `max` characters without splitting a code point.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((byte_offset, _)) => &s[..byte_offset],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_identical_output() {
        let a = compose_prompt("biaya pendaftaran", "Pendaftaran dibuka bulan Mei.", 4000);
        let b = compose_prompt("biaya pendaftaran", "Pendaftaran dibuka bulan Mei.", 4000);
        assert_eq!(a, b);
    }

    #[test]
    fn context_precedes_question() {
        let prompt = compose_prompt("where is the campus", "Singaraja, Bali.", 4000);
        let ctx_pos = prompt.find("Singaraja").unwrap();
        let q_pos = prompt.find("Question: where is the campus").unwrap();
        assert!(ctx_pos < q_pos);
    }

    #[test]
    fn oversized_context_is_truncated_keeping_the_head() {
        let context = format!("HEAD {}", "x".repeat(10_000));
        let prompt = compose_prompt("topic", &context, 100);
        assert!(prompt.contains("HEAD"));
        // 100 context chars + fixed template text; nowhere near 10k.
        assert!(prompt.len() < 300);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let context = "é".repeat(500);
        let prompt = compose_prompt("topic", &context, 100);
        assert!(prompt.contains(&"é".repeat(100)));
        assert!(!prompt.contains(&"é".repeat(101)));
    }
}
