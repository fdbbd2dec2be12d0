//! Proof search.
//!
//! Goal-directed search over the natural-deduction rules. Starting from the
//! target proposition, each rule either decomposes the goal (introductions)
//! or consumes something reachable from the assumptions in scope
//! (eliminations), recursively producing the subproofs the rule needs.
//!
//! The search runs under iterative deepening: proof trees of depth 1, then
//! 2, and so on up to the configured cap, so the shallowest proof is found
//! first and an unprovable goal terminates with `None` instead of diverging.
//! The cap exists because a search that reaches it is almost certainly
//! chasing a non-theorem.
//!
//! Two guards keep the search from wasting depth: a repeated
//! (goal, scope) pair on the current search path fails immediately, and
//! double-negation elimination is never applied to the subgoal it just
//! created (`¬¬g` via `¬E` would otherwise beget `¬¬¬¬g`). A total
//! node-count cap bounds the time spent on a hopeless goal regardless of
//! the depth setting.

use crate::core::proof::{Proof, Rule};
use crate::core::prop::Prop;

/// Total search nodes visited before the prover gives up outright. Keeps a
/// hopeless non-theorem from eating minutes of CPU at a generous depth cap.
const MAX_NODES: usize = 1_000_000;

/// Find a proof of `goal` from no premises, trying proof depths up to
/// `max_depth`. Returns `None` when the goal cannot be proved within the
/// cap, either because it is not a theorem or because its shortest proof
/// is deeper than the cap.
pub fn prove(goal: &Prop, max_depth: usize) -> Option<Proof> {
    let mut search = Search::default();
    (1..=max_depth).find_map(|depth| {
        search.prove(goal, &mut Vec::new(), depth, true)
    })
}

#[derive(Default)]
struct Search {
    /// (goal, scope size) pairs on the current recursion path.
    path: Vec<(Prop, usize)>,
    /// Nodes visited across all deepening rounds.
    nodes: usize,
}

impl Search {
    fn prove(
        &mut self,
        goal: &Prop,
        assumptions: &mut Vec<Prop>,
        depth: usize,
        allow_double_negation: bool,
    ) -> Option<Proof> {
        if depth == 0 || self.nodes >= MAX_NODES {
            return None;
        }
        self.nodes += 1;

        if assumptions.iter().any(|known| known == goal) {
            return Some(Proof::reiterate(goal.clone()));
        }

        let state = (goal.clone(), assumptions.len());
        if self.path.contains(&state) {
            return None;
        }
        self.path.push(state);
        let found = self.attempt(goal, assumptions, depth - 1, allow_double_negation);
        self.path.pop();
        found
    }

    fn attempt(
        &mut self,
        goal: &Prop,
        assumptions: &mut Vec<Prop>,
        depth: usize,
        allow_double_negation: bool,
    ) -> Option<Proof> {
        let accessible = accessible(assumptions);

        // Eliminations: consume something reachable from the scope.
        for known in &accessible {
            match known {
                Prop::And(l, r) if **l == *goal || **r == *goal => {
                    if let Some(conj) = self.prove(known, assumptions, depth, true) {
                        return Some(Proof::new(goal.clone(), Rule::AndElim, vec![conj]));
                    }
                }
                Prop::Implies(l, r) if **r == *goal => {
                    if let Some(imp) = self.prove(known, assumptions, depth, true) {
                        if let Some(antecedent) = self.prove(l, assumptions, depth, true) {
                            return Some(Proof::new(
                                goal.clone(),
                                Rule::ImpliesElim,
                                vec![imp, antecedent],
                            ));
                        }
                    }
                }
                Prop::Iff(l, r) if **l == *goal => {
                    if let Some(iff) = self.prove(known, assumptions, depth, true) {
                        if let Some(other) = self.prove(r, assumptions, depth, true) {
                            return Some(Proof::new(
                                goal.clone(),
                                Rule::IffElim,
                                vec![iff, other],
                            ));
                        }
                    }
                }
                Prop::Iff(l, r) if **r == *goal => {
                    if let Some(iff) = self.prove(known, assumptions, depth, true) {
                        if let Some(other) = self.prove(l, assumptions, depth, true) {
                            return Some(Proof::new(
                                goal.clone(),
                                Rule::IffElim,
                                vec![iff, other],
                            ));
                        }
                    }
                }
                _ => {}
            }
        }

        // Introductions: decompose the goal.
        match goal {
            Prop::And(l, r) => {
                if let Some(left) = self.prove(l, assumptions, depth, true) {
                    if let Some(right) = self.prove(r, assumptions, depth, true) {
                        return Some(Proof::new(
                            goal.clone(),
                            Rule::AndIntro,
                            vec![left, right],
                        ));
                    }
                }
            }
            Prop::Or(l, r) => {
                let arm = self
                    .prove(l, assumptions, depth, true)
                    .or_else(|| self.prove(r, assumptions, depth, true));
                if let Some(arm) = arm {
                    return Some(Proof::new(goal.clone(), Rule::OrIntro, vec![arm]));
                }
            }
            Prop::Implies(l, r) => {
                assumptions.push((**l).clone());
                let consequent = self.prove(r, assumptions, depth, true);
                assumptions.pop();
                if let Some(consequent) = consequent {
                    let block = Proof::wrap(consequent, (**l).clone());
                    return Some(Proof::new(goal.clone(), Rule::ImpliesIntro, vec![block]));
                }
            }
            Prop::Iff(l, r) => {
                let ltr = Prop::implies((**l).clone(), (**r).clone());
                let rtl = Prop::implies((**r).clone(), (**l).clone());
                if let Some(forward) = self.prove(&ltr, assumptions, depth, true) {
                    if let Some(backward) = self.prove(&rtl, assumptions, depth, true) {
                        return Some(Proof::new(
                            goal.clone(),
                            Rule::IffIntro,
                            vec![forward, backward],
                        ));
                    }
                }
            }
            Prop::Not(inner) => {
                assumptions.push((**inner).clone());
                let contradiction = self.prove(&Prop::Bottom, assumptions, depth, true);
                assumptions.pop();
                if let Some(contradiction) = contradiction {
                    let block = Proof::wrap(contradiction, (**inner).clone());
                    return Some(Proof::new(goal.clone(), Rule::NotIntro, vec![block]));
                }
            }
            Prop::Bottom => {
                // A contradictory pair: some reachable proposition alongside
                // its negation.
                for known in &accessible {
                    if let Prop::Not(inner) = known {
                        if let Some(negation) = self.prove(known, assumptions, depth, true) {
                            if let Some(positive) = self.prove(inner, assumptions, depth, true)
                            {
                                return Some(Proof::new(
                                    Prop::Bottom,
                                    Rule::BottomIntro,
                                    vec![positive, negation],
                                ));
                            }
                        }
                    } else {
                        let negated = Prop::not(known.clone());
                        if let Some(negation) = self.prove(&negated, assumptions, depth, true) {
                            if let Some(positive) = self.prove(known, assumptions, depth, true)
                            {
                                return Some(Proof::new(
                                    Prop::Bottom,
                                    Rule::BottomIntro,
                                    vec![positive, negation],
                                ));
                            }
                        }
                    }
                }
            }
            Prop::Name(_) => {}
        }

        // Double negation: prove ¬¬goal, then eliminate.
        if allow_double_negation && *goal != Prop::Bottom {
            let doubled = Prop::not(Prop::not(goal.clone()));
            if let Some(inner) = self.prove(&doubled, assumptions, depth, false) {
                return Some(Proof::new(goal.clone(), Rule::NotElim, vec![inner]));
            }
        }

        // Case split on a reachable disjunction.
        for known in &accessible {
            if let Prop::Or(l, r) = known {
                if let Some(disjunction) = self.prove(known, assumptions, depth, true) {
                    assumptions.push((**l).clone());
                    let left_case = self.prove(goal, assumptions, depth, true);
                    assumptions.pop();
                    if let Some(left_case) = left_case {
                        assumptions.push((**r).clone());
                        let right_case = self.prove(goal, assumptions, depth, true);
                        assumptions.pop();
                        if let Some(right_case) = right_case {
                            return Some(Proof::new(
                                goal.clone(),
                                Rule::OrElim,
                                vec![
                                    disjunction,
                                    Proof::wrap(left_case, (**l).clone()),
                                    Proof::wrap(right_case, (**r).clone()),
                                ],
                            ));
                        }
                    }
                }
            }
        }

        // Ex falso: anything follows from an inconsistent scope.
        if *goal != Prop::Bottom && accessible.iter().any(|p| matches!(p, Prop::Not(_))) {
            if let Some(bottom) = self.prove(&Prop::Bottom, assumptions, depth, true) {
                return Some(Proof::new(goal.clone(), Rule::BottomElim, vec![bottom]));
            }
        }

        None
    }
}

/// Everything reachable from the assumptions by conjunction projection:
/// the assumptions themselves plus, recursively, both sides of every
/// conjunction among them.
fn accessible(assumptions: &[Prop]) -> Vec<Prop> {
    fn add(prop: &Prop, out: &mut Vec<Prop>) {
        if out.contains(prop) {
            return;
        }
        out.push(prop.clone());
        if let Prop::And(l, r) = prop {
            add(l, out);
            add(r, out);
        }
    }

    let mut out = Vec::new();
    for assumption in assumptions {
        add(assumption, &mut out);
    }
    out
}
