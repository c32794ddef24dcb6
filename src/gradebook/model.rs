use crate::error::MarkError;
use crate::validation::validate_mark;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SUBJECT_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Subject {
    Math,
    English,
    Science,
    History,
    Computer,
}

impl Subject {
    /// All subjects in mark order.
    pub const ALL: [Subject; SUBJECT_COUNT] = [
        Subject::Math,
        Subject::English,
        Subject::Science,
        Subject::History,
        Subject::Computer,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::English => "English",
            Subject::Science => "Science",
            Subject::History => "History",
            Subject::Computer => "Computer",
        }
    }

    /// Column label used in tabular listings.
    pub fn short_name(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::English => "Eng",
            Subject::Science => "Sci",
            Subject::History => "His",
            Subject::Computer => "Comp",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Maps an average to its letter grade.
    ///
    /// Thresholds are inclusive lower bounds: 90 → A, 75 → B, 60 → C, 50 → D, anything
    /// else (including NaN) → F.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            Grade::A
        } else if average >= 75.0 {
            Grade::B
        } else if average >= 60.0 {
            Grade::C
        } else if average >= 50.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rounds to two decimal places. Exact halves go to the even digit, so 0.125 becomes
/// 0.12 and 0.375 becomes 0.38.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Five validated marks, one per [`Subject`] in [`Subject::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Marks([f64; SUBJECT_COUNT]);

impl Marks {
    /// Validates every value, reporting the first offending subject.
    pub fn new(values: [f64; SUBJECT_COUNT]) -> Result<Self, MarkError> {
        for (subject, value) in Subject::ALL.iter().zip(values.iter()) {
            validate_mark(*subject, *value)?;
        }
        Ok(Self(values))
    }

    pub fn values(&self) -> &[f64; SUBJECT_COUNT] {
        &self.0
    }

    pub fn get(&self, subject: Subject) -> f64 {
        self.0[subject as usize]
    }

    /// Subject/mark pairs in subject order.
    pub fn iter(&self) -> impl Iterator<Item = (Subject, f64)> + '_ {
        Subject::ALL.iter().copied().zip(self.0.iter().copied())
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

/// A student with derived score fields.
///
/// Fields are private: `total`, `average` and `grade` are only ever written together
/// with `marks`, so they can never disagree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    name: String,
    roll: String,
    marks: Marks,
    total: f64,
    average: f64,
    grade: Grade,
}

impl StudentRecord {
    pub fn new(name: String, roll: String, marks: Marks) -> Self {
        let (total, average, grade) = derive_scores(&marks);
        Self {
            name,
            roll,
            marks,
            total,
            average,
            grade,
        }
    }

    /// Replaces the marks and recomputes every derived field in one step.
    pub fn set_marks(&mut self, marks: Marks) {
        let (total, average, grade) = derive_scores(&marks);
        self.marks = marks;
        self.total = total;
        self.average = average;
        self.grade = grade;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn roll(&self) -> &str {
        &self.roll
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}

// Grade is looked up from the rounded average, so 89.999 grades as 90.00.
fn derive_scores(marks: &Marks) -> (f64, f64, Grade) {
    let total = marks.total();
    let average = round2(total / SUBJECT_COUNT as f64);
    (total, average, Grade::from_average(average))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_boundaries() {
        let cases = [
            (100.0, Grade::A),
            (90.0, Grade::A),
            (89.99, Grade::B),
            (75.0, Grade::B),
            (74.99, Grade::C),
            (60.0, Grade::C),
            (59.99, Grade::D),
            (50.0, Grade::D),
            (49.99, Grade::F),
            (0.0, Grade::F),
            (-5.0, Grade::F),
        ];
        for (average, expected) in cases {
            assert_eq!(Grade::from_average(average), expected, "average {average}");
        }
    }

    #[test]
    fn nan_average_is_f() {
        assert_eq!(Grade::from_average(f64::NAN), Grade::F);
    }

    #[test]
    fn record_derives_scores() {
        let marks = Marks::new([90.0, 80.0, 70.0, 60.0, 50.0]).unwrap();
        let record = StudentRecord::new("Alice".into(), "R1".into(), marks);
        assert_eq!(record.total(), 350.0);
        assert_eq!(record.average(), 70.0);
        assert_eq!(record.grade(), Grade::C);
    }

    #[test]
    fn average_is_rounded_before_grading() {
        let marks = Marks::new([100.0, 100.0, 100.0, 100.0, 49.995]).unwrap();
        let record = StudentRecord::new("Edge".into(), "E1".into(), marks);
        assert_eq!(record.average(), 90.0);
        assert_eq!(record.grade(), Grade::A);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let marks = Marks::new([33.0, 33.0, 33.0, 33.0, 34.0]).unwrap();
        let record = StudentRecord::new("Round".into(), "X1".into(), marks);
        assert_eq!(record.total(), 166.0);
        assert_eq!(record.average(), 33.2);

        let marks = Marks::new([1.0, 1.0, 1.0, 1.0, 0.333]).unwrap();
        let record = StudentRecord::new("Tiny".into(), "X2".into(), marks);
        assert_eq!(record.average(), 0.87);
    }

    #[test]
    fn exact_halves_round_to_even() {
        let marks = Marks::new([0.625, 0.0, 0.0, 0.0, 0.0]).unwrap();
        let record = StudentRecord::new("Half".into(), "H1".into(), marks);
        assert_eq!(record.average(), 0.12);

        let marks = Marks::new([100.0, 100.0, 100.0, 100.0, 48.125]).unwrap();
        let record = StudentRecord::new("Half".into(), "H2".into(), marks);
        assert_eq!(record.average(), 89.62);
        assert_eq!(record.grade(), Grade::B);

        assert_eq!(round2(0.375), 0.38);
    }

    #[test]
    fn set_marks_recomputes_everything() {
        let marks = Marks::new([10.0, 10.0, 10.0, 10.0, 10.0]).unwrap();
        let mut record = StudentRecord::new("Bob".into(), "R2".into(), marks);
        assert_eq!(record.grade(), Grade::F);

        record.set_marks(Marks::new([100.0; SUBJECT_COUNT]).unwrap());
        assert_eq!(record.total(), 500.0);
        assert_eq!(record.average(), 100.0);
        assert_eq!(record.grade(), Grade::A);
    }

    #[test]
    fn marks_reject_first_invalid_subject() {
        let err = Marks::new([50.0, 101.0, -1.0, 50.0, 50.0]).unwrap_err();
        assert_eq!(err.subject(), Subject::English);
    }

    #[test]
    fn marks_iterate_in_subject_order() {
        let marks = Marks::new([1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let pairs: Vec<_> = marks.iter().collect();
        assert_eq!(pairs[0], (Subject::Math, 1.0));
        assert_eq!(pairs[4], (Subject::Computer, 5.0));
        assert_eq!(marks.get(Subject::History), 4.0);
    }
}
