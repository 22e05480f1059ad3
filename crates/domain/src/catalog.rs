//! Equipment catalog
//!
//! Cached read access to the reference tables needed while resolving execution methods. A
//! substitution search resolves a method for every candidate exercise, so the gym equipment
//! catalog is fetched once and then served from the cache until the cache policy considers it
//! stale or the cache is invalidated explicitly.

use std::{cell::RefCell, sync::Arc};

use chrono::{DateTime, TimeDelta, Utc};
use log::{debug, warn};

use crate::{
    EquipmentID, EquipmentRepository, FetchError, GearID, GymEquipment, Park, ParkID,
    ParkRepository, UserGear,
};

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum CachePolicy {
    /// Keep fetched data until the cache is invalidated.
    #[default]
    Forever,
    /// Refetch data older than the given duration.
    Ttl(TimeDelta),
}

impl CachePolicy {
    fn is_fresh(self, fetched_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            CachePolicy::Forever => true,
            CachePolicy::Ttl(ttl) => now - fetched_at < ttl,
        }
    }
}

struct Entry<T> {
    items: Arc<[T]>,
    fetched_at: DateTime<Utc>,
}

pub struct EquipmentCache {
    policy: CachePolicy,
    clock: Box<dyn Clock>,
    gym_equipment: RefCell<Option<Entry<GymEquipment>>>,
    user_gear: RefCell<Option<Entry<UserGear>>>,
}

impl EquipmentCache {
    #[must_use]
    pub fn new(policy: CachePolicy) -> Self {
        Self::with_clock(policy, SystemClock)
    }

    #[must_use]
    pub fn with_clock(policy: CachePolicy, clock: impl Clock + 'static) -> Self {
        Self {
            policy,
            clock: Box::new(clock),
            gym_equipment: RefCell::new(None),
            user_gear: RefCell::new(None),
        }
    }

    #[must_use]
    pub fn policy(&self) -> CachePolicy {
        self.policy
    }

    pub fn invalidate(&self) {
        self.gym_equipment.replace(None);
        self.user_gear.replace(None);
    }

    fn fresh<T>(&self, entry: &RefCell<Option<Entry<T>>>) -> Option<Arc<[T]>> {
        entry
            .borrow()
            .as_ref()
            .filter(|e| self.policy.is_fresh(e.fetched_at, self.clock.now()))
            .map(|e| Arc::clone(&e.items))
    }

    fn store<T>(&self, entry: &RefCell<Option<Entry<T>>>, items: Vec<T>) -> Arc<[T]> {
        let items: Arc<[T]> = Arc::from(items);
        entry.replace(Some(Entry {
            items: Arc::clone(&items),
            fetched_at: self.clock.now(),
        }));
        items
    }
}

impl Default for EquipmentCache {
    fn default() -> Self {
        Self::new(CachePolicy::default())
    }
}

pub struct EquipmentCatalog<R> {
    repository: R,
    cache: EquipmentCache,
}

impl<R> EquipmentCatalog<R> {
    pub fn new(repository: R, cache: EquipmentCache) -> Self {
        Self { repository, cache }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn cache(&self) -> &EquipmentCache {
        &self.cache
    }
}

impl<R: EquipmentRepository> EquipmentCatalog<R> {
    pub async fn try_gym_equipment(&self) -> Result<Arc<[GymEquipment]>, FetchError> {
        if let Some(items) = self.cache.fresh(&self.cache.gym_equipment) {
            return Ok(items);
        }

        let items = log_on_error!(
            self.repository.read_gym_equipment(),
            "fetch",
            "gym equipment"
        )?;
        debug!("cached {} gym equipment definitions", items.len());

        Ok(self.cache.store(&self.cache.gym_equipment, items))
    }

    /// Gym equipment catalog, or an empty catalog if it could not be fetched.
    pub async fn gym_equipment(&self) -> Arc<[GymEquipment]> {
        self.try_gym_equipment()
            .await
            .unwrap_or_else(|_| Arc::from(Vec::new()))
    }

    pub async fn try_user_gear(&self) -> Result<Arc<[UserGear]>, FetchError> {
        if let Some(items) = self.cache.fresh(&self.cache.user_gear) {
            return Ok(items);
        }

        let items = log_on_error!(self.repository.read_user_gear(), "fetch", "user gear")?;
        debug!("cached {} user gear definitions", items.len());

        Ok(self.cache.store(&self.cache.user_gear, items))
    }

    pub async fn user_gear(&self) -> Arc<[UserGear]> {
        self.try_user_gear()
            .await
            .unwrap_or_else(|_| Arc::from(Vec::new()))
    }

    pub async fn find_gym_equipment(&self, id: &EquipmentID) -> Option<GymEquipment> {
        self.gym_equipment()
            .await
            .iter()
            .find(|e| e.id == *id)
            .cloned()
    }

    pub async fn find_user_gear(&self, id: &GearID) -> Option<UserGear> {
        self.user_gear().await.iter().find(|g| g.id == *id).cloned()
    }

    /// Whether the park has the equipment installed, optionally of a specific brand.
    ///
    /// Equipment unknown to the catalog is considered absent.
    pub async fn park_has_equipment(
        &self,
        park: &Park,
        equipment_id: &EquipmentID,
        brand: Option<&str>,
    ) -> bool {
        let Some(installed) = park.installed(equipment_id) else {
            return false;
        };
        let Some(definition) = self.find_gym_equipment(equipment_id).await else {
            warn!(
                "equipment {equipment_id} of park {} missing in catalog",
                park.id
            );
            return false;
        };

        match brand {
            None => true,
            Some(brand) => {
                installed.brand_name.as_deref() == Some(brand) && definition.brand(brand).is_some()
            }
        }
    }
}

impl<R: ParkRepository> EquipmentCatalog<R> {
    pub async fn park(&self, id: &ParkID) -> Result<Option<Park>, FetchError> {
        log_on_error!(self.repository.read_park(id), "fetch", "park")
    }
}
