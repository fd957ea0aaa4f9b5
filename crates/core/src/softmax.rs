//! Temperature-scaled softmax over a small table of labeled scores.
//!
//! Everything here is pure: no I/O, no interior state. The same entries and
//! temperature always produce the same [`Distribution`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInput;

/// A labeled raw score (a logit, in the sampling demo).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreEntry {
    label: String,
    score: f64,
}

impl ScoreEntry {
    pub fn new(label: impl Into<String>, score: f64) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// Non-empty ordered list of entries with unique, non-empty labels and finite
/// scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ScoreEntry>", into = "Vec<ScoreEntry>")]
pub struct ScoreTable {
    entries: Vec<ScoreEntry>,
}

impl ScoreTable {
    pub fn new(entries: Vec<ScoreEntry>) -> Result<Self, InvalidInput> {
        if entries.is_empty() {
            return Err(InvalidInput::EmptyEntries);
        }

        let mut seen: HashSet<&str> = HashSet::with_capacity(entries.len());
        for e in &entries {
            if e.label.trim().is_empty() {
                return Err(InvalidInput::EmptyLabel);
            }
            if !e.score.is_finite() {
                return Err(InvalidInput::NonFiniteScore {
                    label: e.label.clone(),
                    score: e.score,
                });
            }
            if !seen.insert(e.label.as_str()) {
                return Err(InvalidInput::DuplicateLabel(e.label.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The five logits shown on the temperature sampling page.
    pub fn sampling_demo() -> Self {
        Self {
            entries: vec![
                ScoreEntry::new("deterministic", 4.0),
                ScoreEntry::new("focused", 3.5),
                ScoreEntry::new("creative", 2.0),
                ScoreEntry::new("surprising", 1.5),
                ScoreEntry::new("random", 0.5),
            ],
        }
    }

    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn distribution(&self, temperature: f64) -> Result<Distribution, InvalidInput> {
        compute_distribution(&self.entries, temperature)
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::sampling_demo()
    }
}

impl TryFrom<Vec<ScoreEntry>> for ScoreTable {
    type Error = InvalidInput;

    fn try_from(entries: Vec<ScoreEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<ScoreTable> for Vec<ScoreEntry> {
    fn from(table: ScoreTable) -> Self {
        table.entries
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Probability {
    pub label: String,
    pub probability: f64,
}

/// Softmax output, in the same order as the input entries.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    items: Vec<Probability>,
}

impl Distribution {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Probability> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Probability] {
        &self.items
    }

    pub fn probabilities(&self) -> Vec<f64> {
        self.items.iter().map(|p| p.probability).collect()
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.probability)
    }

    /// First entry with the highest probability.
    pub fn most_likely(&self) -> Option<&Probability> {
        let mut best: Option<&Probability> = None;
        for p in &self.items {
            match best {
                Some(b) if b.probability >= p.probability => {}
                _ => best = Some(p),
            }
        }
        best
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(|p| p.probability).sum()
    }
}

impl<'a> IntoIterator for &'a Distribution {
    type Item = &'a Probability;
    type IntoIter = std::slice::Iter<'a, Probability>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Temperature-scaled softmax over raw scores.
///
/// The max score is subtracted before dividing by the temperature. That is
/// the same value as `score / t - max / t` but stays finite for tiny `t`.
pub fn softmax(scores: &[f64], temperature: f64) -> Result<Vec<f64>, InvalidInput> {
    if scores.is_empty() {
        return Err(InvalidInput::EmptyEntries);
    }
    check_temperature(temperature)?;

    let max_score = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let mut exps: Vec<f64> = Vec::with_capacity(scores.len());
    let mut total = 0.0f64;
    for &s in scores {
        let e = ((s - max_score) / temperature).exp();
        total += e;
        exps.push(e);
    }

    // The max entry contributes exp(0) = 1, so total >= 1.
    for e in exps.iter_mut() {
        *e /= total;
    }
    Ok(exps)
}

/// Compute the probability distribution for `entries` at `temperature`.
///
/// Fails on an empty slice, on a temperature that is not a finite positive
/// number, and on non-finite scores. Nothing is clamped.
pub fn compute_distribution(
    entries: &[ScoreEntry],
    temperature: f64,
) -> Result<Distribution, InvalidInput> {
    if entries.is_empty() {
        return Err(InvalidInput::EmptyEntries);
    }
    check_temperature(temperature)?;
    if let Some(e) = entries.iter().find(|e| !e.score.is_finite()) {
        return Err(InvalidInput::NonFiniteScore {
            label: e.label.clone(),
            score: e.score,
        });
    }

    let scores: Vec<f64> = entries.iter().map(|e| e.score).collect();
    let probs = softmax(&scores, temperature)?;

    let items = entries
        .iter()
        .zip(probs)
        .map(|(e, probability)| Probability {
            label: e.label.clone(),
            probability,
        })
        .collect();
    Ok(Distribution { items })
}

fn check_temperature(temperature: f64) -> Result<(), InvalidInput> {
    if temperature.is_finite() && temperature > 0.0 {
        Ok(())
    } else {
        Err(InvalidInput::NonPositiveTemperature(temperature))
    }
}
