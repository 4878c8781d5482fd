//! Verified sample snippets
//!
//! Each constant is a complete, canonical Argdown snippet. Map samples cover
//! single and multiple roots, deep objection chains and inline data;
//! argument samples cover linear chains, sub-inferences, YAML and comments.

use crate::argdown::ast::argument::ArgumentDoc;
use crate::argdown::ast::map::MapTree;
use crate::argdown::ast::ArgdownTree;
use crate::argdown::parsing::parse;

/// The two-level map from the README.
pub const README_MAP: &str = r"[Main claim]: This is the main claim.
    <+ <Argument 1>: The first reason.
    <+ <Argument 2>: The second reason.
    <- <Objection>: An objection to the main claim.
        <- <Rebuttal>: The objection can be rebutted.";

/// A three-level map carrying inline YAML and an inline comment.
pub const CLIMATE_MAP: &str = r"[Climate Action]: We should act on climate change.
    <+ <Scientific Evidence>: Science supports action. {confidence: 0.95}
    <- <Economic Cost>: Action is too expensive. // Common objection
        <- <Long-term Benefits>: Benefits outweigh costs.
            <+ <Health Savings>: Prevents health costs.";

/// Two roots with symmetric subtrees, for traversal-order tests.
pub const MULTIROOT_MAP: &str = r"[Main-1]: Central claim 1.
    <+ <Support A>: First supporter.
        <+ <Sub A1>: Support for A.
        <- <Sub A2>: Attack on A.
    <- <Attack B>: Main attacker.
        <+ <Sub B1>: Support for B.
[Main-2]: Central claim 2.
    <+ <Support C>: First supporter.
        <+ <Sub C1>: Support for C.
        <- <Sub C2>: Attack on C.";

/// A support chain, an objection and a nest of rebuttals.
pub const VEGETARIANISM_MAP: &str = r"[Vegetarianism]: People should be vegetarian.
    <+ <Animal Welfare>: Animals suffer in factory farms.
        <+ <Scientific Evidence>: Studies show animal pain.
    <- <Nutrition Concern>: Vegetarian diets lack nutrients.
        <- <Modern Alternatives>: Supplements provide nutrients.
            <+ <Bioavailability>: Modern supplements work well.
        <- <Health Studies>: Vegetarians are healthier.";

/// The smallest well-formed map.
pub const SINGLE_CLAIM: &str = "[Root]: Only claim.";

/// A map whose only dialectical relation is a contradiction.
pub const CONTRADICTION_MAP: &str = r"[Tenet]: The core tenet holds.
    >< [Counter-Tenet]: The core tenet fails.";

/// The argument example from the README.
pub const README_ARGUMENT: &str = r"<Argument title>: Gist of the argument.

(1) Premise 1.
(2) Premise 2.
-- inference rule --
(3) Intermediary conclusion 1.
(4) Premise 3.
-- inference rule --
(5) Final conclusion.";

/// Feature-rich argument: intermediate conclusion, rule names, YAML and a
/// comment.
pub const MORAL_ARGUMENT: &str = r"<Moral Argument>: We should protect the environment.

(1) Climate change causes suffering. {certainty: 0.9}
(2) We have a duty to prevent suffering. // Kantian principle
-- modus ponens --
(3) We should act against climate change.
(4) Environmental protection reduces climate change.
-- practical syllogism --
(5) We should protect the environment.";

/// Sub-inference argument whose rule text names its premises.
pub const DEMOCRACY_ARGUMENT: &str = r"<Democracy Argument>: Democracy is the best system.

(1) Democracy respects individual rights.
(2) Individual rights are fundamental.
(3) Systems respecting fundamental values are superior.
-- from (2) and (3) --
(4) Democracy respects fundamental values. {strength: 0.8}
-- from (1) and (4) --
(5) Democracy is the best system. // Main conclusion";

/// A plain five-statement chain without YAML or comments.
pub const CHAIN_ARGUMENT: &str = r"<Chain>: A two-step chain.

(1) Premise one.
(2) Premise two.
-- from (1) and (2) --
(3) Intermediate conclusion.
(4) Premise three.
-- from (3) and (4) --
(5) Final conclusion.";

/// Minimal argument exercising YAML plus an inline comment on one line.
pub const YAML_COMMENT_ARGUMENT: &str = r"(1) Claim. {certainty: 0.9} // inline note
-----
(2) So the conclusion.";

/// Parse a fixture known to be an argument map.
pub fn parse_map(source: &str) -> MapTree {
    match parse(source) {
        Ok(ArgdownTree::Map(map)) => map,
        Ok(_) => panic!("fixture parsed as an argument, expected a map"),
        Err(err) => panic!("fixture failed to parse: {}", err),
    }
}

/// Parse a fixture known to be an individual argument.
pub fn parse_argument(source: &str) -> ArgumentDoc {
    match parse(source) {
        Ok(ArgdownTree::Argument(doc)) => doc,
        Ok(_) => panic!("fixture parsed as a map, expected an argument"),
        Err(err) => panic!("fixture failed to parse: {}", err),
    }
}
