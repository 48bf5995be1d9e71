//! Choice registry for the main menu
//!
//! The registry is a static, ordered table of [`Choice`] records. Codes are
//! checked when the table is turned into a [`ChoiceRegistry`], so a bad table
//! behind a `static` fails constant evaluation.

/// A single selectable menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub code: u32,
    pub label: &'static str,
    pub is_exit: bool,
}

impl Choice {
    pub const fn new(code: u32, label: &'static str) -> Self {
        Self {
            code,
            label,
            is_exit: false,
        }
    }

    pub const fn exit(code: u32, label: &'static str) -> Self {
        Self {
            code,
            label,
            is_exit: true,
        }
    }
}

/// Reserved "nothing chosen" value. Never displayed, never dispatched.
pub const NO_SELECTION: Choice = Choice::new(0, "No value selected, default");

const STANDARD_CHOICES: [Choice; 4] = [
    Choice::new(1, "Eat Candy"),
    Choice::new(2, "Go Fishing"),
    Choice::new(3, "Play Basketball"),
    Choice::exit(4, "Exit"),
];

/// The registry used by the binary
pub static REGISTRY: ChoiceRegistry = ChoiceRegistry::new(&STANDARD_CHOICES);

/// Immutable ordered set of menu choices
#[derive(Debug, Clone, Copy)]
pub struct ChoiceRegistry {
    choices: &'static [Choice],
}

impl ChoiceRegistry {
    /// Build a registry from a table whose codes run `1..=N` in order.
    ///
    /// # Panics
    ///
    /// Panics if any code is out of sequence (a gap, a duplicate, or a zero).
    /// In a `static` or `const` initializer this is a compile error; a call at
    /// runtime with a bad table panics at that call.
    pub const fn new(choices: &'static [Choice]) -> Self {
        let mut i = 0;
        while i < choices.len() {
            if choices[i].code as usize != i + 1 {
                panic!("menu choice codes must run 1..=N in display order");
            }
            i += 1;
        }
        Self { choices }
    }

    pub fn standard() -> &'static ChoiceRegistry {
        &REGISTRY
    }

    /// Real choices in ascending code order. The sentinel is never included.
    pub fn list_choices(&self) -> &'static [Choice] {
        self.choices
    }

    pub fn get(&self, code: i64) -> Option<&'static Choice> {
        // codes are contiguous from 1, so the code doubles as a 1-based index
        let index = usize::try_from(code).ok()?.checked_sub(1)?;
        self.choices.get(index)
    }

    pub fn is_valid(&self, code: i64) -> bool {
        self.get(code).is_some()
    }

    /// Label for `code`, or the sentinel's label when the code is unknown.
    pub fn describe(&self, code: i64) -> &'static str {
        self.get(code).unwrap_or(&NO_SELECTION).label
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_codes_are_valid_and_described() {
        let registry = ChoiceRegistry::standard();
        let expected = ["Eat Candy", "Go Fishing", "Play Basketball", "Exit"];

        for (i, label) in expected.iter().enumerate() {
            let code = i as i64 + 1;
            assert!(registry.is_valid(code), "code {} should be valid", code);
            assert_eq!(registry.describe(code), *label);
        }
    }

    #[test]
    fn test_codes_run_from_one_in_display_order() {
        let codes: Vec<u32> = REGISTRY.list_choices().iter().map(|c| c.code).collect();
        assert_eq!(codes, vec![1, 2, 3, 4]);
        assert_eq!(REGISTRY.len(), 4);
        assert!(!REGISTRY.is_empty());
    }

    #[test]
    fn test_unknown_codes_fall_back_to_sentinel() {
        for code in [0, -1, 5, 9, i64::MAX, i64::MIN] {
            assert!(!REGISTRY.is_valid(code));
            assert_eq!(REGISTRY.get(code), None);
            assert_eq!(REGISTRY.describe(code), NO_SELECTION.label);
        }
    }

    #[test]
    fn test_sentinel_is_not_listed() {
        assert!(!REGISTRY.list_choices().contains(&NO_SELECTION));
    }

    #[test]
    fn test_list_choices_is_restartable() {
        let first = REGISTRY.list_choices();
        let second = REGISTRY.list_choices();
        assert_eq!(first, second);
    }

    #[test]
    fn test_exit_is_the_only_terminal_choice_and_comes_last() {
        let exits: Vec<&Choice> = REGISTRY.list_choices().iter().filter(|c| c.is_exit).collect();
        assert_eq!(exits.len(), 1);
        assert_eq!(exits[0].code, 4);
        assert_eq!(exits[0].label, "Exit");
    }

    #[test]
    fn test_standard_registry_is_the_process_registry() {
        assert!(std::ptr::eq(ChoiceRegistry::standard(), &REGISTRY));
    }

    #[test]
    #[should_panic(expected = "menu choice codes must run 1..=N")]
    fn test_duplicate_code_is_rejected_at_runtime() {
        static DUPLICATED: [Choice; 2] = [Choice::new(1, "One"), Choice::exit(1, "Exit")];
        let _ = ChoiceRegistry::new(&DUPLICATED);
    }

    #[test]
    #[should_panic(expected = "menu choice codes must run 1..=N")]
    fn test_out_of_sequence_table_is_rejected() {
        static GAPPED: [Choice; 2] = [Choice::new(1, "One"), Choice::new(3, "Three")];
        let _ = ChoiceRegistry::new(&GAPPED);
    }
}
