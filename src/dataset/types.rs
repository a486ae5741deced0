//! Corpus record types

/// One labeled email from the corpus.
///
/// Immutable once loaded; the evaluator only ever reads it. `sender` and
/// `urls` ride along from the corpus but carry no classification signal.
#[derive(Debug, Clone)]
pub struct EmailRecord {
    pub sender: String,
    pub subject: String,
    pub body: String,
    /// `true` = phishing, `false` = legitimate.
    pub is_phishing: bool,
    pub urls: String,
}

impl EmailRecord {
    /// Subject and body joined the way the classifier consumes them.
    pub fn text(&self) -> String {
        format!("{} {}", self.subject, self.body)
    }
}
