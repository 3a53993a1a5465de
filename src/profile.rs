use crate::date::Date;
use std::cmp::Ordering;
use std::fmt;

fn compare_ignore_case(left: &str, right: &str) -> Ordering {
    left.chars()
        .flat_map(char::to_lowercase)
        .cmp(right.chars().flat_map(char::to_lowercase))
}

/// The person holding an account. Two profiles identify the same holder when
/// last name, first name (both case-insensitive) and date of birth match.
#[derive(Debug, Clone)]
pub struct Profile {
    first_name: String,
    last_name: String,
    date_of_birth: Date,
}

impl Profile {
    pub fn new(first_name: &str, last_name: &str, date_of_birth: Date) -> Self {
        Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
            date_of_birth,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn date_of_birth(&self) -> &Date {
        &self.date_of_birth
    }

    pub fn compare(&self, other: &Profile) -> Ordering {
        compare_ignore_case(&self.last_name, &other.last_name)
            .then_with(|| compare_ignore_case(&self.first_name, &other.first_name))
            .then_with(|| self.date_of_birth.compare(&other.date_of_birth))
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Profile {}

impl PartialOrd for Profile {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Profile {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.first_name, self.last_name, self.date_of_birth
        )
    }
}
