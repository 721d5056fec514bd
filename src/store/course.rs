// Course enumeration shared by the store, the form and the config file

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the four fixed menu categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    Appetizers,
    #[serde(rename = "Main Courses")]
    MainCourses,
    Desserts,
    Beverages,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown course '{0}'")]
pub struct UnknownCourse(pub String);

impl Course {
    /// All courses in canonical presentation order
    pub const ALL: [Course; 4] = [
        Course::Appetizers,
        Course::MainCourses,
        Course::Desserts,
        Course::Beverages,
    ];

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Course::Appetizers => "Appetizers",
            Course::MainCourses => "Main Courses",
            Course::Desserts => "Desserts",
            Course::Beverages => "Beverages",
        }
    }

    /// Position in canonical order
    pub fn index(self) -> usize {
        match self {
            Course::Appetizers => 0,
            Course::MainCourses => 1,
            Course::Desserts => 2,
            Course::Beverages => 3,
        }
    }

    /// Next course, wrapping around
    pub fn next(self) -> Course {
        Course::ALL[(self.index() + 1) % Course::ALL.len()]
    }

    /// Previous course, wrapping around
    pub fn previous(self) -> Course {
        Course::ALL[(self.index() + Course::ALL.len() - 1) % Course::ALL.len()]
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Course {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Course::ALL
            .into_iter()
            .find(|course| course.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCourse(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let labels: Vec<&str> = Course::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec!["Appetizers", "Main Courses", "Desserts", "Beverages"]
        );
        for (i, course) in Course::ALL.iter().enumerate() {
            assert_eq!(course.index(), i);
        }
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Course::Beverages.next(), Course::Appetizers);
        assert_eq!(Course::Appetizers.previous(), Course::Beverages);
        assert_eq!(Course::MainCourses.next().previous(), Course::MainCourses);
    }

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("main courses".parse::<Course>(), Ok(Course::MainCourses));
        assert_eq!(" Desserts ".parse::<Course>(), Ok(Course::Desserts));
        assert!("Soups".parse::<Course>().is_err());
    }
}
