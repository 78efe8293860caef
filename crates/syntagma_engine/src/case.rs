//! Cases and the declaration-ordered match expression.
//!
//! A [`Case`] pairs a pattern with the binding action fired when the pattern
//! matches. A [`MatchExpression`] is the fluent entry point: an ordered list
//! of filter, guard, and case directives, validated at declaration time and
//! evaluated in order against a fresh [`MatchContext`] per sentence.

use std::fmt;

use syntagma_foundation::{Error, ErrorContext, Result, TagSet};
use syntagma_graph::Sentence;

use crate::bind::{BindingAction, Matched};
use crate::context::MatchContext;
use crate::pattern::Pattern;

/// An immutable (pattern, binding action) pair.
pub struct Case {
    pattern: Pattern,
    action: BindingAction,
}

impl Case {
    /// Creates a case from an already-validated pattern and its action.
    #[must_use]
    pub fn new<F>(pattern: Pattern, action: F) -> Self
    where
        F: Fn(&mut Sentence, &Matched) -> Result<()> + Send + Sync + 'static,
    {
        Self {
            pattern,
            action: Box::new(action),
        }
    }

    /// Returns the structural template this case matches.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Invokes the bound action with the given captures.
    ///
    /// # Errors
    /// Propagates the action's error.
    pub fn fire(&self, sentence: &mut Sentence, matched: &Matched) -> Result<()> {
        (self.action)(sentence, matched)
    }
}

impl fmt::Debug for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Case")
            .field("pattern", &self.pattern)
            .finish_non_exhaustive()
    }
}

/// A guard condition evaluated against the sentence at dispatch time.
pub type GuardPredicate = Box<dyn Fn(&Sentence) -> bool + Send + Sync>;

/// One step of a match expression, evaluated in declaration order.
enum Directive {
    FilterOnce(TagSet),
    FilterAll(TagSet),
    When(GuardPredicate),
    Case(Case),
    TryCase(Case),
}

/// Outcome of evaluating one match expression over one sentence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Outcome of the most recent dispatch in the chain.
    pub accepted: bool,
    /// How many cases fired. Several cases may fire across one sentence in
    /// one pass as consumption exposes successive spans.
    pub fired: usize,
}

/// An ordered, reusable sequence of filter/guard/case directives.
///
/// One expression can serve many sentences: `run` creates a fresh
/// [`MatchContext`] per call, so parallel per-sentence workers may share an
/// expression behind a reference.
#[derive(Default)]
pub struct MatchExpression {
    directives: Vec<Directive>,
}

impl MatchExpression {
    /// Creates an empty expression.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of declared directives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.directives.len()
    }

    /// Returns true if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }

    /// Declares an exclusion filter for the next executed check only.
    #[must_use]
    pub fn filter_once(mut self, tags: TagSet) -> Self {
        self.directives.push(Directive::FilterOnce(tags));
        self
    }

    /// Declares an exclusion filter active for the rest of the chain.
    #[must_use]
    pub fn filter_all(mut self, tags: TagSet) -> Self {
        self.directives.push(Directive::FilterAll(tags));
        self
    }

    /// Declares a guard over the next case: it is attempted only if the
    /// predicate holds at dispatch time and nothing has been accepted yet.
    #[must_use]
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&Sentence) -> bool + Send + Sync + 'static,
    {
        self.directives.push(Directive::When(Box::new(predicate)));
        self
    }

    /// Declares a consuming case: on success the matched prefix is removed
    /// from the view before the next directive runs.
    #[must_use]
    pub fn case<F>(mut self, pattern: Pattern, action: F) -> Self
    where
        F: Fn(&mut Sentence, &Matched) -> Result<()> + Send + Sync + 'static,
    {
        self.directives.push(Directive::Case(Case::new(pattern, action)));
        self
    }

    /// Declares a non-consuming ("try this interpretation") case.
    #[must_use]
    pub fn try_case<F>(mut self, pattern: Pattern, action: F) -> Self
    where
        F: Fn(&mut Sentence, &Matched) -> Result<()> + Send + Sync + 'static,
    {
        self.directives
            .push(Directive::TryCase(Case::new(pattern, action)));
        self
    }

    /// Evaluates the directives in declaration order against a fresh
    /// context over `sentence`.
    ///
    /// Every declared directive always runs (guard gating aside);
    /// non-matches are quiet and the chain proceeds.
    ///
    /// # Errors
    /// Propagates errors raised by binding actions, tagged with the index
    /// of the case whose action failed.
    pub fn run(&self, sentence: &mut Sentence) -> Result<MatchReport> {
        let mut ctx = MatchContext::new(sentence);
        let mut fired = 0;
        let mut case_index = 0;

        for directive in &self.directives {
            match directive {
                Directive::FilterOnce(tags) => {
                    ctx.filter_once(tags.clone());
                }
                Directive::FilterAll(tags) => {
                    ctx.filter_all(tags.clone());
                }
                Directive::When(predicate) => {
                    let condition = predicate(ctx.sentence());
                    ctx.when(condition);
                }
                Directive::Case(case) => {
                    if ctx.dispatch(case).map_err(|e| Self::at_case(e, case_index))? {
                        fired += 1;
                    }
                    case_index += 1;
                }
                Directive::TryCase(case) => {
                    if ctx
                        .try_dispatch(case)
                        .map_err(|e| Self::at_case(e, case_index))?
                    {
                        fired += 1;
                    }
                    case_index += 1;
                }
            }
        }

        Ok(MatchReport {
            accepted: ctx.accepted(),
            fired,
        })
    }

    fn at_case(error: Error, case_index: usize) -> Error {
        error.with_context(ErrorContext::new().with_case(case_index))
    }
}

impl fmt::Debug for MatchExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self
            .directives
            .iter()
            .map(|d| match d {
                Directive::FilterOnce(_) => "filter_once",
                Directive::FilterAll(_) => "filter_all",
                Directive::When(_) => "when",
                Directive::Case(_) => "case",
                Directive::TryCase(_) => "try_case",
            })
            .collect();
        f.debug_struct("MatchExpression")
            .field("directives", &names)
            .finish()
    }
}
