/// Validation and parsing of raw input text.
///
/// Contains the number validator, the operator validator, and the calculation
/// line parser that combines them into a typed request.
pub mod core;
/// Token definitions for the two input grammars.
///
/// Input is lexed with two separate token sets: one for standalone number
/// literals and one for whole calculation lines. Keeping them apart preserves
/// the places where the two grammars deliberately disagree.
pub mod lexer;
