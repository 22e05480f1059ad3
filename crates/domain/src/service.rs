use log::warn;

use crate::{
    Candidate, Context, EquipmentCache, EquipmentCatalog, EquipmentRepository, ExecutionMethod,
    Exercise, ExerciseRepository, Family, FetchError, FinderSettings, MethodSelector, Park, ParkID,
    ParkRepository, Settings, Substitutes, SubstitutionFinder, SubstitutionQuery,
};

#[allow(async_fn_in_trait)]
pub trait ExecutionMethodService {
    async fn select_method(
        &self,
        exercise: &Exercise,
        context: &Context<'_>,
    ) -> Option<ExecutionMethod>;
}

#[allow(async_fn_in_trait)]
pub trait SubstitutionService {
    async fn get_variations(
        &self,
        query: &SubstitutionQuery<'_>,
    ) -> Result<Vec<Candidate>, FetchError>;
    async fn get_alternatives(
        &self,
        query: &SubstitutionQuery<'_>,
    ) -> Result<Vec<Candidate>, FetchError>;
    async fn get_substitutes(
        &self,
        query: &SubstitutionQuery<'_>,
    ) -> Result<Substitutes, FetchError>;
}

pub struct Service<R> {
    catalog: EquipmentCatalog<R>,
    finder_settings: FinderSettings,
}

impl<R> Service<R> {
    pub fn new(repository: R, settings: &Settings) -> Self {
        Self::with_cache(
            repository,
            EquipmentCache::new(settings.cache_policy()),
            settings.finder,
        )
    }

    pub fn with_cache(
        repository: R,
        cache: EquipmentCache,
        finder_settings: FinderSettings,
    ) -> Self {
        Self {
            catalog: EquipmentCatalog::new(repository, cache),
            finder_settings,
        }
    }

    pub fn catalog(&self) -> &EquipmentCatalog<R> {
        &self.catalog
    }

    pub fn invalidate_cache(&self) {
        self.catalog.cache().invalidate();
    }
}

impl<R: ParkRepository> Service<R> {
    pub async fn get_park(&self, id: &ParkID) -> Result<Option<Park>, FetchError> {
        self.catalog.park(id).await
    }
}

impl<R: ExerciseRepository + EquipmentRepository> Service<R> {
    /// Candidates for each of the given families, in the same order.
    ///
    /// Nothing is fetched if the queried exercise belongs to none of the families.
    async fn find<const N: usize>(
        &self,
        families: [Family; N],
        query: &SubstitutionQuery<'_>,
    ) -> Result<[Vec<Candidate>; N], FetchError> {
        let families = families.map(|family| {
            if family.key(query.exercise).is_none() {
                warn!(
                    "exercise {} has no {}, skipping substitution search",
                    query.exercise.id,
                    family.name()
                );
                return None;
            }
            Some(family)
        });

        if families.iter().all(Option::is_none) {
            return Ok(families.map(|_| vec![]));
        }

        let exercises = log_on_error!(
            self.catalog.repository().read_exercises(),
            "fetch",
            "exercises"
        )?;
        let gym_equipment = self.catalog.gym_equipment().await;
        let finder =
            SubstitutionFinder::new(MethodSelector::new(&gym_equipment), &self.finder_settings);

        Ok(families.map(|family| {
            family.map_or_else(Vec::new, |family| finder.find(family, query, &exercises))
        }))
    }
}

impl<R: EquipmentRepository> ExecutionMethodService for Service<R> {
    async fn select_method(
        &self,
        exercise: &Exercise,
        context: &Context<'_>,
    ) -> Option<ExecutionMethod> {
        let gym_equipment = self.catalog.gym_equipment().await;
        MethodSelector::new(&gym_equipment).select(exercise, context)
    }
}

impl<R: ExerciseRepository + EquipmentRepository> SubstitutionService for Service<R> {
    async fn get_variations(
        &self,
        query: &SubstitutionQuery<'_>,
    ) -> Result<Vec<Candidate>, FetchError> {
        let [variations] = self.find([Family::BaseMovement], query).await?;
        Ok(variations)
    }

    async fn get_alternatives(
        &self,
        query: &SubstitutionQuery<'_>,
    ) -> Result<Vec<Candidate>, FetchError> {
        let [alternatives] = self.find([Family::MovementGroup], query).await?;
        Ok(alternatives)
    }

    async fn get_substitutes(
        &self,
        query: &SubstitutionQuery<'_>,
    ) -> Result<Substitutes, FetchError> {
        let [variations, alternatives] = self
            .find([Family::BaseMovement, Family::MovementGroup], query)
            .await?;
        Ok(Substitutes {
            variations,
            alternatives,
        })
    }
}
