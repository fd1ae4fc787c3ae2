//! Answer sheet for a quiz run
//!
//! One slot per question across all rounds, laid out contiguously in round
//! order. The source implementation reset a per-round array at each round
//! boundary while slicing it with global offsets at results time; this
//! sheet is globally indexed so the results slicing is well-defined for
//! every round.

use crate::quiz::entities::Round;

/// Recorded answers for the whole quiz run.
///
/// A slot holds the selected option string or `None` if the question was
/// never answered. Selecting again overwrites the previous choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    slots: Vec<Option<String>>,
    /// Cumulative question offsets: `offsets[i]` is the slot index of the
    /// first question of round `i`; the last entry is the total count.
    offsets: Vec<usize>,
}

impl AnswerSheet {
    /// Empty sheet, used before any rounds are loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fresh all-unset sheet sized to the given rounds.
    pub fn for_rounds(rounds: &[Round]) -> Self {
        let mut offsets = Vec::with_capacity(rounds.len() + 1);
        let mut total = 0;
        for round in rounds {
            offsets.push(total);
            total += round.question_count();
        }
        offsets.push(total);
        Self {
            slots: vec![None; total],
            offsets,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Record a selection for the given position, overwriting any previous
    /// one. Out-of-range positions are ignored.
    pub fn select(&mut self, round: usize, question: usize, option: impl Into<String>) {
        if let Some(index) = self.slot_index(round, question) {
            self.slots[index] = Some(option.into());
        }
    }

    /// The currently recorded option for the given position.
    pub fn selected(&self, round: usize, question: usize) -> Option<&str> {
        self.slot_index(round, question)
            .and_then(|index| self.slots[index].as_deref())
    }

    /// How many questions of round `round` have a recorded answer.
    pub fn answered_in_round(&self, round: usize) -> usize {
        let Some(range) = self.round_range(round) else {
            return 0;
        };
        self.slots[range].iter().filter(|slot| slot.is_some()).count()
    }

    fn round_range(&self, round: usize) -> Option<std::ops::Range<usize>> {
        let start = *self.offsets.get(round)?;
        let end = *self.offsets.get(round + 1)?;
        Some(start..end)
    }

    fn slot_index(&self, round: usize, question: usize) -> Option<usize> {
        let range = self.round_range(round)?;
        let index = range.start + question;
        (index < range.end).then_some(index)
    }
}
