//! Request language detection
//!
//! Responses are phrased in the language the user wrote in. Detection is a
//! character-class ratio over the message: CJK ideographs against Latin
//! letters, with everything else ignored.

use serde::{Deserialize, Serialize};

/// Detected input language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Chinese
    Zh,
    /// English (also the default for scripts we do not recognize)
    En,
}

impl Locale {
    /// Wire representation of the locale
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CJK share above which a message is treated as Chinese. Strictly greater
/// than, so a message at exactly 30% CJK still reads as English.
const CJK_RATIO_THRESHOLD: f64 = 0.3;

/// Detect the language of a message
///
/// Counts CJK ideographs (the unified block, extension A, and the
/// compatibility block) against ASCII letters. Digits, punctuation, and
/// other scripts do not vote. An empty or letterless message is English.
pub fn detect_language(text: &str) -> Locale {
    let mut cjk = 0usize;
    let mut latin = 0usize;

    for ch in text.chars() {
        match ch {
            '\u{4E00}'..='\u{9FFF}' | '\u{3400}'..='\u{4DBF}' | '\u{F900}'..='\u{FAFF}' => cjk += 1,
            'A'..='Z' | 'a'..='z' => latin += 1,
            _ => {}
        }
    }

    if cjk == 0 && latin == 0 {
        return Locale::En;
    }

    let ratio = cjk as f64 / (cjk + latin) as f64;
    if ratio > CJK_RATIO_THRESHOLD {
        Locale::Zh
    } else {
        Locale::En
    }
}
