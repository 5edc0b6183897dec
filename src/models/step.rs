//! Wizard steps
//!
//! The ordered sequence of screens. Only these three exist, so the step
//! index is always within 1..=3.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One screen of the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub enum Step {
    #[default]
    PersonalInfo,
    AccountSetup,
    Preferences,
}

impl Step {
    /// All steps in order
    pub const ALL: [Step; 3] = [Step::PersonalInfo, Step::AccountSetup, Step::Preferences];

    /// 1-based position of the step
    pub fn number(self) -> u8 {
        match self {
            Self::PersonalInfo => 1,
            Self::AccountSetup => 2,
            Self::Preferences => 3,
        }
    }

    /// Step from its 1-based position
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::PersonalInfo),
            2 => Some(Self::AccountSetup),
            3 => Some(Self::Preferences),
            _ => None,
        }
    }

    /// Title shown in the progress indicator
    pub fn title(self) -> &'static str {
        match self {
            Self::PersonalInfo => "Personal Info",
            Self::AccountSetup => "Account Setup",
            Self::Preferences => "Preferences",
        }
    }

    /// The following step, if any
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.number() + 1)
    }

    /// The preceding step, if any
    pub fn prev(self) -> Option<Self> {
        Self::from_number(self.number() - 1)
    }

    /// Whether this is the final step
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(Step::PersonalInfo < Step::AccountSetup);
        assert!(Step::AccountSetup < Step::Preferences);
        assert_eq!(Step::ALL.map(Step::number), [1, 2, 3]);
    }

    #[test]
    fn test_next_prev() {
        assert_eq!(Step::PersonalInfo.next(), Some(Step::AccountSetup));
        assert_eq!(Step::Preferences.next(), None);
        assert_eq!(Step::PersonalInfo.prev(), None);
        assert_eq!(Step::Preferences.prev(), Some(Step::AccountSetup));
        assert!(Step::Preferences.is_last());
    }

    #[test]
    fn test_from_number_out_of_range() {
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(4), None);
        assert_eq!(Step::from_number(2), Some(Step::AccountSetup));
    }
}
