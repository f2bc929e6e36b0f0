//! Clue sets and their structural validation
//!
//! A clue set is the complete board for one round. Its shape is not
//! checked on construction; callers run [`ClueSet::validate`] (the game
//! constructor does so itself) and receive the first rule that failed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::Category;
use crate::config::RoundConfig;

/// The categories of one round, in board order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueSet {
    /// The categories on the board
    pub categories: Vec<Category>,
}

/// Errors describing why a clue set does not fit the round shape
#[derive(Error, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The board has the wrong number of categories
    #[error("expected {expected} categories, found {actual}")]
    IncorrectCategoryCount {
        /// Number of categories found
        actual: usize,
        /// Number of categories required
        expected: usize,
    },
    /// A category has an empty title
    #[error("category {category_index} has an empty title")]
    EmptyCategoryTitle {
        /// Index of the offending category
        category_index: usize,
    },
    /// A category has the wrong number of clues
    #[error("category {category_index} has {actual} clues, expected {expected}")]
    IncorrectClueCount {
        /// Number of clues found
        actual: usize,
        /// Number of clues required
        expected: usize,
        /// Index of the offending category
        category_index: usize,
    },
    /// A clue is worth the wrong number of points for its position
    #[error(
        "clue {clue_index} of category {category_index} is worth {actual}, expected {expected}"
    )]
    IncorrectPointValue {
        /// Point value found
        actual: u32,
        /// Point value required at this position
        expected: u32,
        /// Index of the offending category
        category_index: usize,
        /// Index of the offending clue within its category
        clue_index: usize,
    },
    /// A clue is already marked as done
    #[error("clue {clue_index} of category {category_index} is already done")]
    ClueIsDone {
        /// Index of the offending category
        category_index: usize,
        /// Index of the offending clue within its category
        clue_index: usize,
    },
}

impl ClueSet {
    /// Creates a clue set from categories in board order
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Validates this clue set against the default round shape
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(&RoundConfig::default())
    }

    /// Validates this clue set against `config`
    ///
    /// Checks run in a fixed order: the category count first, then for each
    /// category its title and clue count, then for each of its clues the
    /// point value and the done flag. Validation stops at the first
    /// failure.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] encountered.
    pub fn validate_with(&self, config: &RoundConfig) -> Result<(), ValidationError> {
        if self.categories.len() != config.category_count {
            return Err(ValidationError::IncorrectCategoryCount {
                actual: self.categories.len(),
                expected: config.category_count,
            });
        }

        for (category_index, category) in self.categories.iter().enumerate() {
            Self::validate_category(category, category_index, config)?;
        }

        Ok(())
    }

    fn validate_category(
        category: &Category,
        category_index: usize,
        config: &RoundConfig,
    ) -> Result<(), ValidationError> {
        if category.title().is_empty() {
            return Err(ValidationError::EmptyCategoryTitle { category_index });
        }

        let clue_count = category.clues().len();
        if clue_count != config.clue_count_per_category {
            return Err(ValidationError::IncorrectClueCount {
                actual: clue_count,
                expected: config.clue_count_per_category,
                category_index,
            });
        }

        for (clue_index, clue) in category.clues().iter().enumerate() {
            let expected = config.expected_point_value(clue_index);
            if clue.point_value() != expected {
                return Err(ValidationError::IncorrectPointValue {
                    actual: clue.point_value(),
                    expected,
                    category_index,
                    clue_index,
                });
            }
            if clue.is_done() {
                return Err(ValidationError::ClueIsDone {
                    category_index,
                    clue_index,
                });
            }
        }

        Ok(())
    }

    /// Builds a well-formed clue set of the requested shape
    #[cfg(test)]
    pub(crate) fn sample(config: &RoundConfig) -> Self {
        use super::media::Song;

        Self::new(
            (0..config.category_count)
                .map(|c| {
                    Category::from_songs(
                        format!("Artist {c}"),
                        (0..config.clue_count_per_category).map(|s| {
                            Song::new(format!("{c}-{s}"), format!("Song {c}-{s}"), format!("Artist {c}"))
                        }),
                        config,
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::board::{clue::Clue, media::Song};

    fn song() -> Song {
        Song::new("x", "Song", "Artist")
    }

    fn replace_category(set: &mut ClueSet, index: usize, category: Category) {
        set.categories[index] = category;
    }

    #[test]
    fn test_valid_default_shape() {
        assert_eq!(ClueSet::sample(&RoundConfig::default()).validate(), Ok(()));
    }

    #[test]
    fn test_valid_custom_shapes() {
        for (categories, clues) in [(1, 1), (3, 4), (6, 5), (8, 7)] {
            let config = RoundConfig {
                category_count: categories,
                clue_count_per_category: clues,
                ..RoundConfig::default()
            };
            assert_eq!(ClueSet::sample(&config).validate_with(&config), Ok(()));
        }
    }

    #[test]
    fn test_incorrect_category_count() {
        let config = RoundConfig {
            category_count: 4,
            ..RoundConfig::default()
        };
        let set = ClueSet::sample(&config);

        assert_eq!(
            set.validate(),
            Err(ValidationError::IncorrectCategoryCount {
                actual: 4,
                expected: 6
            })
        );
        assert_eq!(
            ClueSet::default().validate(),
            Err(ValidationError::IncorrectCategoryCount {
                actual: 0,
                expected: 6
            })
        );
    }

    #[test]
    fn test_empty_category_title() {
        let config = RoundConfig::default();
        let mut set = ClueSet::sample(&config);
        let clues = set.categories[2].clues().to_vec();
        replace_category(&mut set, 2, Category::new("", clues));

        assert_eq!(
            set.validate(),
            Err(ValidationError::EmptyCategoryTitle { category_index: 2 })
        );
    }

    #[test]
    fn test_incorrect_clue_count() {
        let config = RoundConfig::default();
        let mut set = ClueSet::sample(&config);
        let clues = set.categories[1].clues()[..3].to_vec();
        replace_category(&mut set, 1, Category::new("Short", clues));

        assert_eq!(
            set.validate(),
            Err(ValidationError::IncorrectClueCount {
                actual: 3,
                expected: 5,
                category_index: 1
            })
        );
    }

    #[test]
    fn test_first_incorrect_point_value_is_reported() {
        let config = RoundConfig::default();
        let mut set = ClueSet::sample(&config);

        let mut late = set.categories[4].clues().to_vec();
        late[0] = Clue::new("Wrong", song(), 100);
        replace_category(&mut set, 4, Category::new("Later", late));

        let mut early = set.categories[1].clues().to_vec();
        early[3] = Clue::new("Wrong", song(), 700);
        early[4] = Clue::new("Also wrong", song(), 1200);
        replace_category(&mut set, 1, Category::new("Earlier", early));

        assert_eq!(
            set.validate(),
            Err(ValidationError::IncorrectPointValue {
                actual: 700,
                expected: 800,
                category_index: 1,
                clue_index: 3
            })
        );
    }

    #[test]
    fn test_zero_point_clue_rejected() {
        let config = RoundConfig::default();
        let mut set = ClueSet::sample(&config);
        let mut clues = set.categories[0].clues().to_vec();
        clues[0] = Clue::new("Free", song(), 0);
        replace_category(&mut set, 0, Category::new("Artist 0", clues));

        assert_eq!(
            set.validate(),
            Err(ValidationError::IncorrectPointValue {
                actual: 0,
                expected: 200,
                category_index: 0,
                clue_index: 0
            })
        );
    }

    #[test]
    fn test_done_clue_rejected() {
        let config = RoundConfig::default();
        let mut set = ClueSet::sample(&config);
        let mut clues = set.categories[5].clues().to_vec();
        clues[2].mark_done();
        replace_category(&mut set, 5, Category::new("Played", clues));

        assert_eq!(
            set.validate(),
            Err(ValidationError::ClueIsDone {
                category_index: 5,
                clue_index: 2
            })
        );
    }

    #[test]
    fn test_point_value_checked_before_done_flag() {
        let config = RoundConfig::default();
        let mut set = ClueSet::sample(&config);
        let mut clues = set.categories[0].clues().to_vec();
        let mut wrong = Clue::new("Wrong", song(), 5);
        wrong.mark_done();
        clues[0] = wrong;
        replace_category(&mut set, 0, Category::new("Both", clues));

        assert!(matches!(
            set.validate(),
            Err(ValidationError::IncorrectPointValue {
                category_index: 0,
                clue_index: 0,
                ..
            })
        ));
    }

    #[test]
    fn test_title_checked_before_clue_count() {
        let config = RoundConfig::default();
        let mut set = ClueSet::sample(&config);
        replace_category(&mut set, 0, Category::new("", Vec::new()));

        assert_eq!(
            set.validate(),
            Err(ValidationError::EmptyCategoryTitle { category_index: 0 })
        );
    }

    #[test]
    fn test_validation_does_not_mutate() {
        let set = ClueSet::sample(&RoundConfig::default());
        let before = set.clone();
        let _ = set.validate();
        assert_eq!(set, before);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ValidationError::IncorrectCategoryCount {
                actual: 2,
                expected: 6
            }
            .to_string(),
            "expected 6 categories, found 2"
        );
        assert_eq!(
            ValidationError::ClueIsDone {
                category_index: 1,
                clue_index: 4
            }
            .to_string(),
            "clue 4 of category 1 is already done"
        );
    }
}
