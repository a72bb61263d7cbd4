use crate::model::fixture::Fixture;
use crate::model::rights::RightsPackage;
use crate::model::territory::Territory;
use crate::repository::database::RepositoryError;
use crate::rights::rules::{RightsCandidate, RuleContext, RuleEvaluator, UserContext};
use crate::rights::store::RightsStore;
use crate::util::timezone::{territory_timezone, utc_to_timezone, DEFAULT_TIMEZONE};
use chrono::{DateTime, FixedOffset, Offset, Utc};
use log::{info, warn};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundReason {
    FixtureNotFound,
    TerritoryNotFound,
    NoRights,
    NoApplicableRights,
}

impl NotFoundReason {
    pub fn message(&self) -> &'static str {
        match self {
            NotFoundReason::FixtureNotFound => "Fixture not found",
            NotFoundReason::TerritoryNotFound => "Territory not found",
            NotFoundReason::NoRights => "No broadcast rights found for this fixture and territory",
            NotFoundReason::NoApplicableRights => {
                "No broadcast rights apply for this fixture and territory"
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedRights {
    pub fixture_id: i32,
    pub territory_id: i32,
    pub territory_name: String,
    pub rights_id: i32,
    pub rights_package_id: Option<i32>,
    pub platform_name: Option<String>,
    pub platform_url: Option<String>,
    pub is_live: bool,
    pub is_on_demand: bool,
    pub is_free: bool,
    pub requires_subscription: bool,
    pub is_exclusive: bool,
    pub alternative_options: usize,
    pub timezone: String,
    pub local_kickoff: DateTime<FixedOffset>,
}

/// Kickoff in the territory's zone: the stored one, else the per-code default.
fn local_kickoff(fixture: &Fixture, territory: &Territory) -> (String, DateTime<FixedOffset>) {
    let timezone = territory
        .timezone
        .as_deref()
        .unwrap_or_else(|| territory_timezone(Some(&territory.code)));
    match utc_to_timezone(fixture.match_date, timezone) {
        Ok(local) => (timezone.to_string(), local.with_timezone(&local.offset().fix())),
        Err(err) => {
            warn!("Territory {} has a bad timezone: {}", territory.id, err);
            let utc = fixture.match_date;
            (DEFAULT_TIMEZONE.to_string(), utc.with_timezone(&utc.offset().fix()))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Resolved(ResolvedRights),
    NotFound { reason: NotFoundReason },
}

impl Resolution {
    fn not_found(reason: NotFoundReason) -> Self {
        Resolution::NotFound { reason }
    }
}

pub struct RightsResolutionEngine<'a, S: RightsStore + ?Sized> {
    store: &'a S,
    rules: RuleEvaluator,
}

impl<'a, S: RightsStore + ?Sized> RightsResolutionEngine<'a, S> {
    pub fn new(store: &'a S) -> Self {
        RightsResolutionEngine {
            store,
            rules: RuleEvaluator::default(),
        }
    }

    pub fn with_rules(store: &'a S, rules: RuleEvaluator) -> Self {
        RightsResolutionEngine { store, rules }
    }

    pub async fn resolve(
        &self,
        fixture_id: i32,
        territory_id: i32,
        user: Option<&UserContext>,
    ) -> Result<Resolution, RepositoryError> {
        self.resolve_at(fixture_id, territory_id, user, Utc::now())
            .await
    }

    pub async fn resolve_at(
        &self,
        fixture_id: i32,
        territory_id: i32,
        user: Option<&UserContext>,
        now: DateTime<Utc>,
    ) -> Result<Resolution, RepositoryError> {
        info!(
            "Resolving rights for fixture {} in territory {}",
            fixture_id, territory_id
        );

        let Some(fixture) = self.store.load_fixture(fixture_id).await? else {
            warn!("Fixture {} not found", fixture_id);
            return Ok(Resolution::not_found(NotFoundReason::FixtureNotFound));
        };
        let Some(territory) = self.store.load_territory(territory_id).await? else {
            warn!("Territory {} not found", territory_id);
            return Ok(Resolution::not_found(NotFoundReason::TerritoryNotFound));
        };

        let candidates = self.load_candidates(fixture_id, territory_id).await?;
        if candidates.is_empty() {
            info!(
                "No rights found for fixture {} in territory {}",
                fixture_id, territory_id
            );
            return Ok(Resolution::not_found(NotFoundReason::NoRights));
        }

        let context = RuleContext {
            fixture: Some(&fixture),
            territory: Some(&territory),
            user,
            now,
        };
        let survivors = self.rules.apply_rules(candidates, &context);
        let alternative_options = survivors.len().saturating_sub(1);

        let Some(primary) = survivors.into_iter().next() else {
            info!(
                "No applicable rights left for fixture {} in territory {}",
                fixture_id, territory_id
            );
            return Ok(Resolution::not_found(NotFoundReason::NoApplicableRights));
        };

        let is_exclusive = primary.is_exclusive();
        let (timezone, local_kickoff) = local_kickoff(&fixture, &territory);
        let rights = primary.rights;
        Ok(Resolution::Resolved(ResolvedRights {
            fixture_id: fixture.id,
            territory_id: territory.id,
            territory_name: territory.name,
            rights_id: rights.id,
            rights_package_id: rights.rights_package_id,
            platform_name: rights.platform_name,
            platform_url: rights.platform_url,
            is_live: rights.is_live,
            is_on_demand: rights.is_on_demand,
            is_free: rights.is_free,
            requires_subscription: rights.requires_subscription,
            is_exclusive,
            alternative_options,
            timezone,
            local_kickoff,
        }))
    }

    /// Rows whose package is missing or inactive are not candidates.
    async fn load_candidates(
        &self,
        fixture_id: i32,
        territory_id: i32,
    ) -> Result<Vec<RightsCandidate>, RepositoryError> {
        let rows = self
            .store
            .load_active_rights(fixture_id, territory_id)
            .await?;
        info!("Found {} rights entries", rows.len());

        let mut package_ids: Vec<i32> = rows.iter().filter_map(|r| r.rights_package_id).collect();
        package_ids.sort_unstable();
        package_ids.dedup();

        let packages: HashMap<i32, RightsPackage> = self
            .store
            .load_packages(&package_ids)
            .await?
            .into_iter()
            .filter(|p| p.is_active)
            .map(|p| (p.id, p))
            .collect();

        let candidates = rows
            .into_iter()
            .filter_map(|rights| match rights.rights_package_id {
                None => Some(RightsCandidate {
                    rights,
                    package: None,
                }),
                Some(package_id) => packages.get(&package_id).map(|package| RightsCandidate {
                    rights,
                    package: Some(package.clone()),
                }),
            })
            .collect();
        Ok(candidates)
    }

    /// Sequential; a store error for one fixture is kept under its key.
    pub async fn resolve_bulk(
        &self,
        fixture_ids: &[i32],
        territory_id: i32,
    ) -> BTreeMap<i32, Result<Resolution, RepositoryError>> {
        self.resolve_bulk_at(fixture_ids, territory_id, Utc::now())
            .await
    }

    pub async fn resolve_bulk_at(
        &self,
        fixture_ids: &[i32],
        territory_id: i32,
        now: DateTime<Utc>,
    ) -> BTreeMap<i32, Result<Resolution, RepositoryError>> {
        info!(
            "Bulk resolving rights for {} fixtures in territory {}",
            fixture_ids.len(),
            territory_id
        );
        let mut results = BTreeMap::new();
        for &fixture_id in fixture_ids {
            if results.contains_key(&fixture_id) {
                continue;
            }
            let outcome = self.resolve_at(fixture_id, territory_id, None, now).await;
            results.insert(fixture_id, outcome);
        }
        results
    }
}
