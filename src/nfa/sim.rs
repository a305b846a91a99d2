//! Lockstep simulation of a built automaton

use super::{Nfa, State, StateId};
use std::mem;

/// A match in progress, borrowing a compiled [`Nfa`]
///
/// Input arrives through [`feed`], possibly in pieces, and [`is_match`]
/// reports whether everything fed so far is a word of the pattern's
/// language — acceptance is judged on the full input, with nothing left
/// over and nothing skipped.
///
/// The matcher tracks a *frontier*: every state the automaton could occupy
/// given the input consumed so far, closed under ε-transitions. Each input
/// character advances the whole frontier at once, so the running time is
/// `O(states)` per character no matter how many alternatives the pattern
/// holds open.
///
/// [`feed`]: Self::feed
/// [`is_match`]: Self::is_match
pub struct Matcher<'nfa> {
    nfa: &'nfa Nfa,
    /// Characters consumed so far, offset by one — doubles as the
    /// generation stamp for frontier deduplication.
    seen: usize,
    /// The current frontier. Holds only literal and terminal states;
    /// splits are expanded away on insertion.
    frontier: Vec<StateId>,
    /// `last_added[s]` is the value of `seen` when state `s` last joined
    /// the frontier. Comparing against the current stamp keeps every state
    /// in the frontier at most once per step, which is what bounds the
    /// frontier and breaks ε-cycles during expansion.
    last_added: Vec<usize>,
}

impl<'nfa> Matcher<'nfa> {
    pub(super) fn new(nfa: &'nfa Nfa) -> Self {
        let mut matcher = Matcher {
            nfa,
            seen: 1,
            frontier: Vec::new(),
            last_added: vec![0; nfa.states.len()],
        };
        matcher.add(nfa.head);
        matcher
    }

    /// Feeds a string into the match, returning `self` for chaining.
    pub fn feed(&mut self, input: &str) -> &mut Self {
        for ch in input.chars() {
            self.step(ch);
        }
        self
    }

    /// Returns whether the input consumed so far is accepted in full.
    pub fn is_match(&self) -> bool {
        self.frontier.contains(&self.nfa.terminal)
    }

    /// Advances the frontier across one input character. Entries whose
    /// literal matches move to their successors; the rest drop out.
    fn step(&mut self, ch: char) {
        // bump the stamp first so the outgoing frontier never collides
        // with the one being built
        self.seen += 1;
        for id in mem::take(&mut self.frontier) {
            if let State::Literal { symbol, next: Some(next) } = self.nfa.states.as_slice()[id] {
                if symbol == ch {
                    self.add(next);
                }
            }
        }
    }

    /// Inserts `id` and everything ε-reachable from it into the frontier,
    /// skipping states already added this step.
    fn add(&mut self, id: StateId) {
        let mut pending = vec![id];
        while let Some(id) = pending.pop() {
            if mem::replace(&mut self.last_added[id.0], self.seen) == self.seen {
                continue;
            }
            match self.nfa.states.as_slice()[id] {
                State::Literal { .. } | State::Terminal => self.frontier.push(id),
                // splits are expanded here rather than stored, so stepping
                // never sees one. An unset branch cannot survive a finished
                // build; if one did appear it would simply be a dead end.
                State::Split { primary, secondary } => {
                    pending.extend(primary);
                    pending.extend(secondary);
                }
            }
        }
    }
}
