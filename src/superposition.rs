//! A cell's set of still-possible labels, packed into three bits.
//!
//! The alphabet never grows past three members, so a `HashSet<Label>` would be paying
//! for generality this problem doesn't need; a bitset keeps `intersect`/`contains`/`len`
//! at the cost of a handful of integer instructions and makes `Board` trivially
//! `Clone`-able (every board clone in the search tree copies one of these per cell).
use crate::label::Label;
use strum::IntoEnumIterator;

/// A non-empty-by-construction-invariant (callers must check [`Superposition::is_empty`]
/// themselves; an empty superposition is a valid, representable value meaning
/// *infeasible*, not a type-level impossibility) subset of [`Label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Superposition(u8);

impl Superposition {
    /// The superposition holding every label: the initial state of every cell.
    pub fn full() -> Self {
        Label::iter().fold(Superposition(0), |acc, label| acc.insert(label))
    }

    /// The superposition holding no labels at all.
    pub fn empty() -> Self {
        Superposition(0)
    }

    /// The superposition collapsed to exactly one label.
    pub fn single(label: Label) -> Self {
        Superposition(label.bit())
    }

    pub fn contains(&self, label: Label) -> bool {
        self.0 & label.bit() != 0
    }

    pub fn insert(&self, label: Label) -> Self {
        Superposition(self.0 | label.bit())
    }

    pub fn intersect(&self, other: Superposition) -> Self {
        Superposition(self.0 & other.0)
    }

    pub fn union(&self, other: Superposition) -> Self {
        Superposition(self.0 | other.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> u32 {
        self.0.count_ones()
    }

    pub fn is_collapsed(&self) -> bool {
        self.len() == 1
    }

    /// The single label this superposition is collapsed to, or `None` if it holds zero
    /// or more than one label.
    pub fn collapsed_label(&self) -> Option<Label> {
        if self.is_collapsed() {
            Label::iter().find(|label| self.contains(*label))
        } else {
            None
        }
    }

    /// All labels still live in this superposition, in [`Label`] iteration order.
    pub fn labels(&self) -> Vec<Label> {
        Label::iter().filter(|label| self.contains(*label)).collect()
    }
}
