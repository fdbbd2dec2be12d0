//! Proof trees.
//!
//! A proof is represented as a tree of rule applications. Each node claims
//! a proposition, names the natural-deduction rule that justifies it, and
//! carries the subproofs the rule was applied to. A node may additionally
//! open a hypothetical scope by assuming a proposition; everything below it
//! is proved with that assumption available.
//!
//! The tree reads "inside out" compared to a Fitch-style proof: where a
//! Fitch proof builds consequences upward from what is known, the tree
//! decomposes its conclusion downward into simpler obligations. All leaves
//! are reiterations of something assumed in an enclosing scope.
//! [`crate::core::fitch`] converts between the two shapes.

use std::fmt;

use crate::core::prop::Prop;

/// Natural-deduction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Reiteration,
    AndIntro,
    AndElim,
    OrIntro,
    OrElim,
    ImpliesIntro,
    ImpliesElim,
    IffIntro,
    IffElim,
    BottomIntro,
    BottomElim,
    NotIntro,
    NotElim,
}

impl Rule {
    /// Compact label used in rendered proofs, e.g. `∧I`.
    pub fn label(&self) -> &'static str {
        match self {
            Rule::Reiteration => "re",
            Rule::AndIntro => "∧I",
            Rule::AndElim => "∧E",
            Rule::OrIntro => "∨I",
            Rule::OrElim => "∨E",
            Rule::ImpliesIntro => "→I",
            Rule::ImpliesElim => "→E",
            Rule::IffIntro => "↔I",
            Rule::IffElim => "↔E",
            Rule::BottomIntro => "⊥I",
            Rule::BottomElim => "⊥E",
            Rule::NotIntro => "¬I",
            Rule::NotElim => "¬E",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Rule::Reiteration => "reiteration",
            Rule::AndIntro => "and-intro",
            Rule::AndElim => "and-elim",
            Rule::OrIntro => "or-intro",
            Rule::OrElim => "or-elim",
            Rule::ImpliesIntro => "implies-intro",
            Rule::ImpliesElim => "implies-elim",
            Rule::IffIntro => "iff-intro",
            Rule::IffElim => "iff-elim",
            Rule::BottomIntro => "bottom-intro",
            Rule::BottomElim => "bottom-elim",
            Rule::NotIntro => "not-intro",
            Rule::NotElim => "not-elim",
        };
        write!(f, "{name}")
    }
}

/// A node in a proof tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
    /// Hypothetical assumption opened by this node, if any.
    pub assumption: Option<Prop>,
    pub subproofs: Vec<Proof>,
    pub claim: Prop,
    pub rule: Rule,
}

impl Proof {
    pub fn new(claim: Prop, rule: Rule, subproofs: Vec<Proof>) -> Self {
        Self {
            assumption: None,
            subproofs,
            claim,
            rule,
        }
    }

    /// A leaf restating something assumed in an enclosing scope.
    pub fn reiterate(claim: Prop) -> Self {
        Self::new(claim, Rule::Reiteration, Vec::new())
    }

    /// Attach an assumption to a proof, turning it into a hypothetical block.
    pub fn wrap(proof: Proof, assumption: Prop) -> Self {
        Self {
            assumption: Some(assumption),
            subproofs: proof.subproofs,
            claim: proof.claim,
            rule: proof.rule,
        }
    }

    /// Debug rendering of the rule tree, one node per line.
    ///
    /// ```text
    /// prove <a → a> via implies-intro:
    ///   assuming <a>, prove <a> via reiteration
    /// ```
    pub fn long_form(&self) -> String {
        let mut stub = format!("prove <{}> via {}", self.claim, self.rule);
        if let Some(assumption) = &self.assumption {
            stub = format!("assuming <{assumption}>, {stub}");
        }

        if self.subproofs.is_empty() {
            stub
        } else {
            let mut text = stub + ":";
            for subproof in &self.subproofs {
                text.push('\n');
                text.push_str(&indent(&subproof.long_form(), "  "));
            }
            text
        }
    }
}

/// Prefix every line of a block of text.
pub(crate) fn indent(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_form() {
        let inner = Proof::wrap(Proof::reiterate(Prop::Name('a')), Prop::Name('a'));
        let proof = Proof::new(
            Prop::implies(Prop::Name('a'), Prop::Name('a')),
            Rule::ImpliesIntro,
            vec![inner],
        );

        assert_eq!(
            proof.long_form(),
            "prove <a → a> via implies-intro:\n  assuming <a>, prove <a> via reiteration"
        );
    }

    #[test]
    fn test_wrap_keeps_claim_and_rule() {
        let proof = Proof::reiterate(Prop::Name('q'));
        let wrapped = Proof::wrap(proof, Prop::Name('s'));
        assert_eq!(wrapped.assumption, Some(Prop::Name('s')));
        assert_eq!(wrapped.claim, Prop::Name('q'));
        assert_eq!(wrapped.rule, Rule::Reiteration);
    }
}
