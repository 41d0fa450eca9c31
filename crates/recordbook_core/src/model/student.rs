//! Student score record and letter-grade banding.

use crate::model::entity::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Letter grade derived from a numeric score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Bands: 80-100 A, 70-79 B, 60-69 C, 50-59 D, anything else F.
    ///
    /// Scores above 100 are not clamped and fall through to `F`.
    pub fn from_score(score: i32) -> Self {
        match score {
            80..=100 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            50..=59 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: EntityId,
    pub full_name: String,
    pub score: i32,
}

impl Student {
    pub fn new(id: EntityId, full_name: impl Into<String>, score: i32) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }

    /// Report line, e.g. `Ama Owusu (ID: 7): Score = 85, Grade = A`.
    pub fn report_line(&self) -> String {
        format!(
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}

impl Entity for Student {
    fn id(&self) -> EntityId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::{Grade, Student};

    #[test]
    fn grade_bands_match_boundaries() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(69), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(59), Grade::D);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
    }

    #[test]
    fn out_of_range_scores_are_f() {
        assert_eq!(Grade::from_score(101), Grade::F);
        assert_eq!(Grade::from_score(-5), Grade::F);
    }

    #[test]
    fn report_line_uses_expected_layout() {
        let student = Student::new(7, "Ama Owusu", 85);
        assert_eq!(
            student.report_line(),
            "Ama Owusu (ID: 7): Score = 85, Grade = A"
        );
    }
}
