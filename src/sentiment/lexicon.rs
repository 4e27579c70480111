//! Word-list sentiment classifier.
//!
//! Counts hits against small Spanish and English polarity lexicons. The word
//! sets are compiled on first use and shared for the rest of the process.

use super::{ClassifierError, SentimentClassifier};
use crate::models::{SentimentLabel, SentimentResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::{debug, info};

const POSITIVE_WORDS: &[&str] = &[
    // es
    "aprobó", "aprobada", "aprobado", "acuerdo", "avance", "avances", "beneficio",
    "beneficios", "crecimiento", "crece", "mejora", "mejoras", "mejoró", "éxito",
    "logro", "logros", "inversión", "apoyo", "transparencia", "récord", "recupera",
    "recuperación", "solución", "esperanza", "inaugura", "inauguró", "amplía",
    "gana", "ganó", "positivo", "histórico", "celebra", "derechos", "acceso",
    // en
    "good", "great", "success", "growth", "improve", "improved", "improvement",
    "agreement", "approved", "benefit", "win", "wins", "hope", "record", "progress",
    "positive", "support", "recovery",
];

const NEGATIVE_WORDS: &[&str] = &[
    // es
    "corrupción", "corrupto", "corruptos", "fraude", "denuncia", "denuncian",
    "escándalo", "crisis", "caída", "cae", "pobreza", "inflación", "desempleo",
    "despidos", "recorte", "recortes", "ajuste", "deuda", "violencia", "muerte",
    "muertos", "protesta", "protestas", "conflicto", "rechazo", "rechaza",
    "investigación", "imputado", "procesado", "detenido", "opacidad", "irregularidades",
    "sobreprecios", "malversación", "falta", "déficit", "grave", "peor", "negativo",
    // en
    "bad", "corruption", "fraud", "scandal", "crisis", "fall", "poverty", "inflation",
    "unemployment", "cuts", "debt", "violence", "death", "protest", "conflict",
    "failure", "worse", "negative",
];

struct Lexicon {
    positive: HashSet<&'static str>,
    negative: HashSet<&'static str>,
}

static LEXICON: Lazy<Lexicon> = Lazy::new(|| {
    let lexicon = Lexicon {
        positive: POSITIVE_WORDS.iter().copied().collect(),
        negative: NEGATIVE_WORDS.iter().copied().collect(),
    };
    info!(
        positive = lexicon.positive.len(),
        negative = lexicon.negative.len(),
        "Loaded sentiment lexicon"
    );
    lexicon
});

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{L}+").unwrap());

#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    /// Create the classifier and load the word sets.
    pub fn new() -> Self {
        let _ = Lazy::force(&LEXICON);
        Self
    }

    fn score(text: &str) -> SentimentResult {
        let lowered = text.to_lowercase();
        let (mut pos, mut neg) = (0usize, 0usize);
        for word in WORD.find_iter(&lowered).map(|m| m.as_str()) {
            if LEXICON.positive.contains(word) {
                pos += 1;
            }
            if LEXICON.negative.contains(word) {
                neg += 1;
            }
        }

        let label = if neg > pos {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Positive
        };
        let hits = pos + neg;
        let score = if hits == 0 {
            0.5
        } else {
            0.5 + pos.abs_diff(neg) as f32 / (2 * hits) as f32
        };
        debug!(pos, neg, %label, score, "Scored text");
        SentimentResult { label, score }
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn name(&self) -> &str {
        "lexicon"
    }

    async fn classify(&self, text: &str) -> Result<SentimentResult, ClassifierError> {
        Ok(Self::score(text))
    }
}
