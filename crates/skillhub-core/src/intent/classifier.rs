//! Message-to-intent scoring

use super::types::{Intent, IntentPattern};

/// Greetings and farewells that mark a message as small talk when nothing
/// in the pattern table fires.
const SMALLTALK: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "thanks",
    "thank you",
    "bye",
    "goodbye",
    "good morning",
    "good night",
    "how are you",
    "你好",
    "您好",
    "谢谢",
    "再见",
    "早上好",
    "晚上好",
    "晚安",
    "嗨",
    "辛苦了",
];

/// Longest message (in chars) still eligible for the small-talk fallback.
const SMALLTALK_MAX_CHARS: usize = 12;

/// Classify a message into its primary intent
///
/// Each table row contributes `matching-pattern-count * weight` to its
/// intent's aggregate score. The strictly highest aggregate wins; on a tie
/// the intent whose row appears earlier in the table wins. When nothing
/// scores, a greeting lexicon decides between `Chat` and `Unknown`.
pub fn classify_intent(message: &str, table: &[IntentPattern]) -> Intent {
    // (intent, aggregate score, first table position)
    let mut scores: Vec<(Intent, i32, usize)> = Vec::new();

    for (position, row) in table.iter().enumerate() {
        let hits = row.patterns.iter().filter(|re| re.is_match(message)).count() as i32;
        if hits == 0 {
            continue;
        }
        let contribution = hits * row.weight;
        match scores.iter_mut().find(|(intent, _, _)| *intent == row.intent) {
            Some((_, score, _)) => *score += contribution,
            None => scores.push((row.intent, contribution, position)),
        }
    }

    let winner = scores
        .into_iter()
        .filter(|(_, score, _)| *score > 0)
        // max_by favors later elements on ties, so compare position in
        // reverse to keep first-registered-wins semantics
        .max_by(|a, b| a.1.cmp(&b.1).then(b.2.cmp(&a.2)));

    match winner {
        Some((intent, _, _)) => intent,
        None if is_smalltalk(message) => Intent::Chat,
        None => Intent::Unknown,
    }
}

fn is_smalltalk(message: &str) -> bool {
    let trimmed = message.trim().to_lowercase();
    if trimmed.is_empty() {
        return false;
    }
    if SMALLTALK.contains(&trimmed.as_str()) {
        return true;
    }
    if trimmed.chars().count() > SMALLTALK_MAX_CHARS {
        return false;
    }
    // Short messages: Chinese entries match as substrings, English entries
    // as whole word tokens
    SMALLTALK.iter().any(|entry| {
        if entry.is_ascii() {
            trimmed
                .split(|c: char| !c.is_ascii_alphanumeric())
                .any(|token| token == *entry)
        } else {
            trimmed.contains(entry)
        }
    })
}
