//! Experimental text-classification advisory.
//!
//! The advisory sends the selected symptom labels to an off-the-shelf text
//! classifier and maps the returned label to a fixed phrase. The mapping has
//! no clinical validity. Its output is display text only and is never fed
//! into [`crate::score`] or [`crate::match_guidelines`].
//!
//! Classifier failures never propagate: [`advise`] logs them and returns
//! [`Advisory::unavailable`].

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;
use std::time::Duration;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use ddx_model::SymptomSet;

use crate::error::AdvisoryError;

/// Phrase shown when the classifier could not be reached or understood.
pub const UNAVAILABLE_PHRASE: &str = "Экспериментальная ИИ-оценка недоступна";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

static LABEL_PHRASES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    map.insert(
        "POSITIVE",
        "Благоприятная картина, вероятна вирусная этиология",
    );
    map.insert(
        "NEGATIVE",
        "Выраженная симптоматика, рассмотрите бактериальную этиологию",
    );
    map.insert("NEUTRAL", "Неспецифическая клиническая картина");

    // Three-class sentiment models report positional labels
    map.insert(
        "LABEL_0",
        "Выраженная симптоматика, рассмотрите бактериальную этиологию",
    );
    map.insert("LABEL_1", "Неспецифическая клиническая картина");
    map.insert(
        "LABEL_2",
        "Благоприятная картина, вероятна вирусная этиология",
    );
    map
});

/// One label returned by a classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// Model confidence in `0.0..=1.0`.
    pub score: f32,
}

/// A black-box text classifier.
pub trait TextClassifier {
    fn classify(&self, text: &str) -> Result<Classification, AdvisoryError>;
}

/// Advisory text attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub phrase: String,
    pub classification: Option<Classification>,
}

impl Advisory {
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            phrase: UNAVAILABLE_PHRASE.to_string(),
            classification: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.classification.is_some()
    }
}

/// Map a classifier label to its advisory phrase.
pub fn label_phrase(label: &str) -> Cow<'static, str> {
    let normalized = label.trim().to_ascii_uppercase();
    match LABEL_PHRASES.get(normalized.as_str()) {
        Some(phrase) => Cow::Borrowed(*phrase),
        None => Cow::Owned(format!("Неизвестная метка модели: {}", label.trim())),
    }
}

/// Text sent to the classifier for a symptom selection.
pub fn classifier_input(symptoms: &SymptomSet) -> String {
    let labels: Vec<&str> = symptoms.iter().map(|symptom| symptom.label()).collect();
    format!("Симптомы пациента: {}", labels.join(", "))
}

/// Run the classifier and translate its answer, degrading to the
/// placeholder on any failure.
pub fn advise<C>(classifier: &C, symptoms: &SymptomSet) -> Advisory
where
    C: TextClassifier + ?Sized,
{
    let text = classifier_input(symptoms);
    match classifier.classify(&text) {
        Ok(classification) => {
            debug!(
                label = %classification.label,
                score = classification.score,
                "advisory classification received"
            );
            Advisory {
                phrase: label_phrase(&classification.label).into_owned(),
                classification: Some(classification),
            }
        }
        Err(error) => {
            warn!(%error, "advisory classifier failed; using placeholder");
            Advisory::unavailable()
        }
    }
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

/// Hosted inference endpoints return either a flat list of labels or a list
/// per input.
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batched(Vec<Vec<Classification>>),
    Single(Vec<Classification>),
}

impl InferenceResponse {
    fn best(self) -> Option<Classification> {
        let labels = match self {
            Self::Batched(batches) => batches.into_iter().next().unwrap_or_default(),
            Self::Single(labels) => labels,
        };
        labels
            .into_iter()
            .max_by(|a, b| a.score.total_cmp(&b.score))
    }
}

/// Classifier backed by an HTTP inference endpoint.
pub struct HttpClassifier {
    client: Client,
    endpoint: String,
    token: Option<String>,
}

impl HttpClassifier {
    /// Create a classifier for `endpoint`, sending `token` as a bearer token
    /// when present.
    pub fn new(
        endpoint: impl Into<String>,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, AdvisoryError> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .user_agent(concat!("ddx/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl TextClassifier for HttpClassifier {
    fn classify(&self, text: &str) -> Result<Classification, AdvisoryError> {
        debug!(endpoint = %self.endpoint, "requesting advisory classification");
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&InferenceRequest { inputs: text });
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(AdvisoryError::Status(status.as_u16()));
        }
        let body: InferenceResponse = response
            .json()
            .map_err(|err| AdvisoryError::Decode(err.to_string()))?;
        body.best().ok_or(AdvisoryError::EmptyResponse)
    }
}
