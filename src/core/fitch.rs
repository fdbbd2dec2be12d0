//! Fitch-style arrangement and rendering of proofs.
//!
//! Converts a proof tree into the familiar linear, numbered presentation:
//!
//! ```text
//! │ 1. (a → b) ∧ (b → c)   [as]
//! │───
//! ││ 2. a   [as]
//! ││───
//! ││ 3. b → c  [∧E:1]
//! ││ 4. a → b  [∧E:1]
//! ││ 5. b  [→E:4,2]
//! ││ 6. c  [→E:3,5]
//! │ 7. a → c  [→I:2-6]
//! 8. ((a → b) ∧ (b → c)) → (a → c)  [→I:1-7]
//! ```
//!
//! Hypothetical subproofs become indented blocks; other subproofs are
//! inlined into the enclosing block. Reiterations are never printed (the
//! line already in scope is cited instead), and a claim that has already
//! been established in scope is likewise cited rather than re-proved, so
//! repetition in the tree does not survive into the output.

use std::fmt;

use crate::core::proof::{indent, Proof, Rule};
use crate::core::prop::Prop;

/// Reference to an earlier line or block, as cited in a justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    Line(usize),
    Range(usize, usize),
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Span::Line(n) => write!(f, "{n}"),
            Span::Range(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

/// A single numbered statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stmt {
    pub lineno: usize,
    pub claim: Prop,
    pub rule: Rule,
    pub prereqs: Vec<Span>,
}

impl Stmt {
    fn render(&self) -> String {
        let cites = if self.prereqs.is_empty() {
            String::new()
        } else {
            let spans: Vec<String> = self.prereqs.iter().map(Span::to_string).collect();
            format!(":{}", spans.join(","))
        };
        format!("{}. {}  [{}{}]", self.lineno, self.claim, self.rule.label(), cites)
    }
}

/// One line of a block: a statement or a nested block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Stmt(Stmt),
    Block(Block),
}

/// An assumption scope and the lines proved inside it. The root block of a
/// proof from no premises has no assumption and renders without a gutter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Line number of the assumption, or of the first statement when there
    /// is no assumption.
    pub lineno: usize,
    pub assumption: Option<Prop>,
    pub lines: Vec<Line>,
}

impl Block {
    /// Number of numbered lines in this block, nested blocks included.
    pub fn stmt_count(&self) -> usize {
        let own = usize::from(self.assumption.is_some());
        own + self
            .lines
            .iter()
            .map(|line| match line {
                Line::Stmt(_) => 1,
                Line::Block(block) => block.stmt_count(),
            })
            .sum::<usize>()
    }

    fn last_lineno(&self) -> usize {
        match self.lines.last() {
            Some(Line::Stmt(stmt)) => stmt.lineno,
            Some(Line::Block(block)) => block.last_lineno(),
            None => self.lineno,
        }
    }

    /// The citable extent of this block.
    pub fn span(&self) -> Span {
        Span::Range(self.lineno, self.last_lineno())
    }

    /// The span of this block's concluding statement.
    fn conclusion_span(&self) -> Span {
        Span::Line(self.last_lineno())
    }

    /// Render the block with `│` gutters.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::new();

        if let Some(assumption) = &self.assumption {
            parts.push(format!(" {}. {}   [as]", self.lineno, assumption));
            parts.push("───".to_string());
        }

        for line in &self.lines {
            match line {
                Line::Stmt(stmt) if self.assumption.is_some() => {
                    parts.push(format!(" {}", stmt.render()));
                }
                Line::Stmt(stmt) => parts.push(stmt.render()),
                Line::Block(block) => parts.push(block.render()),
            }
        }

        let text = parts.join("\n");
        if self.assumption.is_some() {
            indent(&text, "│")
        } else {
            text
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

/// Arrange a proof tree into Fitch-style blocks.
pub fn arrange(proof: &Proof) -> Block {
    arrange_aux(proof, &[], 1)
}

/// Render a proof tree directly.
pub fn pretty_print(proof: &Proof) -> String {
    arrange(proof).render()
}

/// Recursive worker. `ctx` maps every claim currently in scope to the span
/// where it was established, so reiterations and redundant subproofs can be
/// cited instead of re-emitted.
fn arrange_aux(proof: &Proof, parent_ctx: &[(Prop, Span)], start: usize) -> Block {
    let block_lineno = start;
    let mut ctx: Vec<(Prop, Span)> = parent_ctx.to_vec();
    let mut next = start;

    if let Some(assumption) = &proof.assumption {
        ctx.push((assumption.clone(), Span::Line(block_lineno)));
        next += 1;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut prereqs: Vec<Span> = Vec::new();

    fn cite(prereqs: &mut Vec<Span>, span: Span) {
        if !prereqs.contains(&span) {
            prereqs.push(span);
        }
    }

    for subproof in &proof.subproofs {
        // Already in scope: cite it, don't re-prove it. This covers both
        // reiteration leaves and genuine redundancy in the tree. Hypothetical
        // blocks are exempt: the rule that opened them needs the block
        // itself, not an earlier line with the same conclusion.
        if subproof.assumption.is_none() {
            let existing = ctx
                .iter()
                .rev()
                .find(|(claim, _)| *claim == subproof.claim)
                .map(|(_, span)| *span);
            if let Some(span) = existing {
                cite(&mut prereqs, span);
                continue;
            }
        }

        let sub_block = arrange_aux(subproof, &ctx, next);
        next += sub_block.stmt_count();

        if subproof.assumption.is_some() {
            // A hypothetical scope stays a nested block; its inner lines go
            // out of scope when it closes, so only its span is citable.
            cite(&mut prereqs, sub_block.span());
            lines.push(Line::Block(sub_block));
        } else {
            // Inline the subderivation into this block; its statements stay
            // in scope for everything that follows.
            cite(&mut prereqs, sub_block.conclusion_span());
            for line in sub_block.lines {
                if let Line::Stmt(stmt) = &line {
                    ctx.push((stmt.claim.clone(), Span::Line(stmt.lineno)));
                }
                lines.push(line);
            }
        }
    }

    // A reiteration that survives as a statement (the whole body of a
    // hypothetical block) cites the line it restates.
    if proof.rule == Rule::Reiteration && prereqs.is_empty() {
        if let Some((_, span)) = ctx.iter().rev().find(|(claim, _)| *claim == proof.claim) {
            prereqs.push(*span);
        }
    }

    lines.push(Line::Stmt(Stmt {
        lineno: next,
        claim: proof.claim.clone(),
        rule: proof.rule,
        prereqs,
    }));

    Block {
        lineno: block_lineno,
        assumption: proof.assumption.clone(),
        lines,
    }
}
