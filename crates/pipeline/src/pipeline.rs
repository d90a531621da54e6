//! Pipeline orchestrator
//!
//! Runs normalize → tokenize → filter stopwords → stem → score for every
//! review and assembles one [`ResultRecord`] per review, index-aligned with
//! the input.
//!
//! Reviews are independent, so a batch can be fanned out over the rayon
//! pool; indexed collection keeps output order equal to input order. Each
//! review runs behind an unwind boundary: under [`FailurePolicy::Isolate`] a
//! failing review becomes a degraded record, under
//! [`FailurePolicy::FailFast`] the lowest-indexed failure aborts the batch.

use crate::config::{FailurePolicy, PipelineConfig};
use crate::report::BatchReport;
use crate::resources::Resources;
use rayon::prelude::*;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, warn};
use ulasan_core::{Error, Result, ResultRecord, Stage};
use ulasan_sentiment::label_for;
use ulasan_text::{clean_text, tokenize};

/// A review that failed inside a stage
#[derive(Debug, Clone, PartialEq)]
struct ReviewFailure {
    index: usize,
    stage: Stage,
    reason: String,
}

impl From<ReviewFailure> for Error {
    fn from(f: ReviewFailure) -> Self {
        Error::StageFailure {
            index: f.index,
            stage: f.stage,
            reason: f.reason,
        }
    }
}

/// Review preprocessing pipeline
///
/// Cheap to clone; resources are shared behind `Arc`s.
#[derive(Debug, Clone)]
pub struct Pipeline {
    resources: Resources,
    policy: FailurePolicy,
    parallel: bool,
    top_words: usize,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Resources::builtin())
    }
}

impl Pipeline {
    /// Pipeline over the given resources, isolating failures, in parallel
    pub fn new(resources: Resources) -> Self {
        Self {
            resources,
            policy: FailurePolicy::Isolate,
            parallel: true,
            top_words: crate::config::DEFAULT_TOP_WORDS,
        }
    }

    /// Pipeline configured from `ulasan.toml` values.
    ///
    /// # Errors
    ///
    /// Returns a config error for invalid values and a resource error for
    /// unreadable resource files.
    pub fn from_config(config: &PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            resources: Resources::from_config(config)?,
            policy: config.failure_policy()?,
            parallel: config.parallel,
            top_words: config.top_words,
        })
    }

    /// Builder: set the failure policy
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builder: enable or disable parallel batches
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builder: set the word-frequency table size for reports
    pub fn with_top_words(mut self, top_words: usize) -> Self {
        self.top_words = top_words;
        self
    }

    /// Shared resources
    pub fn resources(&self) -> &Resources {
        &self.resources
    }

    /// Active failure policy
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Process one review with no failure isolation.
    ///
    /// # Example
    ///
    /// ```
    /// use ulasan_pipeline::Pipeline;
    ///
    /// let record = Pipeline::default().process_review("Pengiriman cepat!");
    /// assert_eq!(record.final_text, "kirim cepat");
    /// ```
    pub fn process_review(&self, review: &str) -> ResultRecord {
        let mut stage = Stage::Normalize;
        self.run_stages(review, &mut stage)
    }

    /// `stage` is updated before each step so a failure can be attributed
    fn run_stages(&self, review: &str, stage: &mut Stage) -> ResultRecord {
        *stage = Stage::Normalize;
        let cleaned = clean_text(review);

        *stage = Stage::Tokenize;
        let tokens = tokenize(&cleaned);

        *stage = Stage::FilterStopwords;
        let filtered = self.resources.stopwords.filter(&tokens);

        *stage = Stage::Stem;
        let stemmed = self.resources.stemmer.stem_all(&filtered);
        let final_text = stemmed.join(" ");

        *stage = Stage::Score;
        let sentiment_score = self.resources.scorer.score(&final_text);
        let sentiment_label = label_for(sentiment_score);

        ResultRecord {
            original: review.to_string(),
            cleaned,
            tokens,
            filtered,
            stemmed,
            final_text,
            sentiment_score,
            sentiment_label,
            failure: None,
        }
    }

    fn process_isolated(&self, index: usize, review: &str) -> std::result::Result<ResultRecord, ReviewFailure> {
        let mut stage = Stage::Normalize;
        panic::catch_unwind(AssertUnwindSafe(|| self.run_stages(review, &mut stage))).map_err(|payload| {
            ReviewFailure {
                index,
                stage,
                reason: panic_message(payload.as_ref()),
            }
        })
    }

    /// Preprocess a batch of reviews.
    ///
    /// Output is index-aligned with `reviews`. An empty batch yields an
    /// empty vector.
    ///
    /// # Errors
    ///
    /// Only under [`FailurePolicy::FailFast`]: the failure of the
    /// lowest-indexed failing review, as [`Error::StageFailure`].
    pub fn preprocess_reviews<S>(&self, reviews: &[S]) -> Result<Vec<ResultRecord>>
    where
        S: AsRef<str> + Sync,
    {
        let outcomes: Vec<_> = if self.parallel {
            reviews
                .par_iter()
                .enumerate()
                .map(|(i, review)| self.process_isolated(i, review.as_ref()))
                .collect()
        } else {
            let mut outcomes = Vec::with_capacity(reviews.len());
            for (i, review) in reviews.iter().enumerate() {
                let outcome = self.process_isolated(i, review.as_ref());
                let failed = outcome.is_err();
                outcomes.push(outcome);
                if failed && self.policy == FailurePolicy::FailFast {
                    break;
                }
            }
            outcomes
        };

        let mut records = Vec::with_capacity(outcomes.len());
        let mut degraded = 0usize;
        for (outcome, review) in outcomes.into_iter().zip(reviews) {
            match outcome {
                Ok(record) => records.push(record),
                Err(failure) => match self.policy {
                    FailurePolicy::FailFast => {
                        warn!(
                            target: "ulasan::pipeline",
                            index = failure.index,
                            stage = %failure.stage,
                            reason = %failure.reason,
                            "Review failed, aborting batch"
                        );
                        return Err(failure.into());
                    }
                    FailurePolicy::Isolate => {
                        warn!(
                            target: "ulasan::pipeline",
                            index = failure.index,
                            stage = %failure.stage,
                            reason = %failure.reason,
                            "Review failed, recording degraded result"
                        );
                        degraded += 1;
                        let reason = format!("{} failed: {}", failure.stage, failure.reason);
                        records.push(ResultRecord::degraded(review.as_ref(), reason));
                    }
                },
            }
        }

        debug!(
            target: "ulasan::pipeline",
            reviews = records.len(),
            degraded,
            parallel = self.parallel,
            "Preprocessed batch"
        );

        Ok(records)
    }

    /// Preprocess a batch and compute every statistic over it.
    ///
    /// # Errors
    ///
    /// Same as [`Pipeline::preprocess_reviews`].
    pub fn report<S>(&self, reviews: &[S]) -> Result<BatchReport>
    where
        S: AsRef<str> + Sync,
    {
        let records = self.preprocess_reviews(reviews)?;
        Ok(BatchReport::from_records(records, self.top_words))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
