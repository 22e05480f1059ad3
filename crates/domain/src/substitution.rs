use std::cmp::Ordering;

use crate::{Context, ExecutionMethod, Exercise, FinderSettings, MethodSelector, ProgramID};

/// Grouping of exercises which can substitute each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Variations of the same movement, e.g. all pull-up variants.
    BaseMovement,
    /// Coarser category of movements, e.g. horizontal push.
    MovementGroup,
}

impl Family {
    #[must_use]
    pub fn key(self, exercise: &Exercise) -> Option<&str> {
        match self {
            Family::BaseMovement => exercise.base_movement_id.as_deref(),
            Family::MovementGroup => exercise.movement_group.as_deref(),
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Family::BaseMovement => "base movement",
            Family::MovementGroup => "movement group",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelComparison {
    Lower,
    Same,
    Higher,
}

impl LevelComparison {
    #[must_use]
    pub fn new(level: u32, reference_level: u32) -> Self {
        match level.cmp(&reference_level) {
            Ordering::Less => LevelComparison::Lower,
            Ordering::Equal => LevelComparison::Same,
            Ordering::Greater => LevelComparison::Higher,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub exercise: Exercise,
    pub selected_execution_method: ExecutionMethod,
    pub level: u32,
    pub level_comparison: LevelComparison,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Substitutes {
    pub variations: Vec<Candidate>,
    pub alternatives: Vec<Candidate>,
}

#[derive(Debug, Clone, Copy)]
pub struct SubstitutionQuery<'a> {
    pub exercise: &'a Exercise,
    pub level: u32,
    pub context: Context<'a>,
    pub program_id: Option<&'a ProgramID>,
}

pub struct SubstitutionFinder<'a> {
    selector: MethodSelector<'a>,
    level_window: u32,
}

impl<'a> SubstitutionFinder<'a> {
    #[must_use]
    pub fn new(selector: MethodSelector<'a>, settings: &FinderSettings) -> Self {
        Self {
            selector,
            level_window: settings.level_window,
        }
    }

    /// Exercises of the same family as the queried exercise which can be performed in the
    /// queried context, ordered by level.
    ///
    /// Exercises outside the level window around the queried level are excluded. If the queried
    /// exercise is not part of a family, no candidates are returned.
    #[must_use]
    pub fn find(
        &self,
        family: Family,
        query: &SubstitutionQuery,
        exercises: &[Exercise],
    ) -> Vec<Candidate> {
        let Some(key) = family.key(query.exercise) else {
            return vec![];
        };

        let mut candidates = exercises
            .iter()
            .filter(|e| e.id != query.exercise.id && family.key(e) == Some(key))
            .filter_map(|e| self.candidate(e, query))
            .collect::<Vec<_>>();
        candidates.sort_by_key(|c| c.level);
        candidates
    }

    fn candidate(&self, exercise: &Exercise, query: &SubstitutionQuery) -> Option<Candidate> {
        let level = exercise.level(query.program_id);

        if level.abs_diff(query.level) > self.level_window
            || exercise.execution_methods.is_empty()
            || !exercise.is_available_at(query.context.location)
        {
            return None;
        }

        let selected_execution_method = self.selector.select(exercise, &query.context)?;

        Some(Candidate {
            exercise: exercise.clone(),
            selected_execution_method,
            level,
            level_comparison: LevelComparison::new(level, query.level),
        })
    }
}
