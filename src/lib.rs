#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Readability and sentiment metrics for documents.
//!
//! Raw text flows through a fixed pipeline:
//!
//! 1. [`segment`] splits it into sentences and words
//! 2. [`filter_words`] keeps alphabetic, non-stopword tokens
//! 3. [`MetricsCalculator`] scores the result against shared [`Resources`]
//!    (two sentiment [`Lexicon`]s and a [`SyllableTable`])
//!
//! ## Example
//!
//! ```
//! use layered_metrics::{Lexicon, MetricsCalculator, Resources, SyllableTable};
//!
//! let resources = Resources::new(
//!     Lexicon::from_words(["good", "great"]),
//!     Lexicon::from_words(["bad"]),
//!     SyllableTable::from_entries(vec![("beautiful", 3)]),
//! );
//! let calculator = MetricsCalculator::new(&resources);
//!
//! let metrics = calculator.analyze("We had a good, beautiful quarter.").unwrap();
//! assert_eq!(metrics.positive_score, 1);
//! assert_eq!(metrics.complex_word_count, 1);
//! assert_eq!(metrics.personal_pronouns, 1);
//! ```
//!
//! Degenerate documents are reported through [`MetricsError`] instead of
//! producing undefined ratios.

mod display;
mod errors;
mod lexicon;
mod metrics;
mod resources;
mod row;
mod syllables;

pub mod pronouns;
pub mod token_filter;
pub mod tokenizer;

pub use display::MetricsTableDisplay;
pub use errors::{MetricsError, MetricsResult};
pub use lexicon::Lexicon;
pub use metrics::{
    DocumentMetrics, MetricsCalculator, COMPLEX_WORD_SYLLABLES, FOG_SCALE, SENTIMENT_EPSILON,
};
pub use pronouns::count_personal_pronouns;
pub use resources::{ResourcePaths, Resources};
pub use row::MetricsRow;
pub use syllables::{SyllableTable, FALLBACK_SYLLABLES};
pub use token_filter::filter_words;
pub use tokenizer::{segment, TokenSet};
