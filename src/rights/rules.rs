use crate::model::fixture::{Fixture, FixtureStatus};
use crate::model::rights::{FixtureRights, RightsPackage};
use crate::model::territory::Territory;
use chrono::{DateTime, Duration, Utc};
use log::debug;

/// Kick-off plus this long is still treated as live.
const LIVE_WINDOW_HOURS: i64 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RulePriority {
    Low = 1,
    Medium = 2,
    High = 3,
    Critical = 4,
}

/// A rights row together with the package it is sold under.
#[derive(Debug, Clone, PartialEq)]
pub struct RightsCandidate {
    pub rights: FixtureRights,
    pub package: Option<RightsPackage>,
}

impl RightsCandidate {
    pub fn is_exclusive(&self) -> bool {
        self.package.as_ref().map_or(false, |p| p.is_exclusive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserContext {
    pub user_id: i32,
}

pub struct RuleContext<'a> {
    pub fixture: Option<&'a Fixture>,
    pub territory: Option<&'a Territory>,
    pub user: Option<&'a UserContext>,
    pub now: DateTime<Utc>,
}

pub trait RightsRule: Send + Sync {
    fn name(&self) -> &'static str;

    fn priority(&self) -> RulePriority;

    /// Whether the rule takes part for this context.
    fn evaluate(&self, context: &RuleContext<'_>) -> bool;

    fn apply(&self, candidates: Vec<RightsCandidate>, context: &RuleContext<'_>)
        -> Vec<RightsCandidate>;
}

/// Keeps `preferred` when it is non-empty, otherwise everything.
fn prefer<F>(candidates: Vec<RightsCandidate>, predicate: F) -> Vec<RightsCandidate>
where
    F: Fn(&RightsCandidate) -> bool,
{
    if candidates.iter().any(&predicate) {
        candidates.into_iter().filter(|c| predicate(c)).collect()
    } else {
        candidates
    }
}

pub struct ExclusivityRule;

impl RightsRule for ExclusivityRule {
    fn name(&self) -> &'static str {
        "ExclusivityRule"
    }

    fn priority(&self) -> RulePriority {
        RulePriority::High
    }

    fn evaluate(&self, _context: &RuleContext<'_>) -> bool {
        true
    }

    fn apply(
        &self,
        candidates: Vec<RightsCandidate>,
        _context: &RuleContext<'_>,
    ) -> Vec<RightsCandidate> {
        prefer(candidates, RightsCandidate::is_exclusive)
    }
}

pub struct GeographicRestrictionRule;

impl RightsRule for GeographicRestrictionRule {
    fn name(&self) -> &'static str {
        "GeographicRestrictionRule"
    }

    fn priority(&self) -> RulePriority {
        RulePriority::Critical
    }

    fn evaluate(&self, context: &RuleContext<'_>) -> bool {
        context.territory.is_some()
    }

    fn apply(
        &self,
        candidates: Vec<RightsCandidate>,
        context: &RuleContext<'_>,
    ) -> Vec<RightsCandidate> {
        let Some(territory) = context.territory else {
            return candidates;
        };
        candidates
            .into_iter()
            .filter(|c| {
                c.package
                    .as_ref()
                    .map_or(true, |p| p.covers_territory(&territory.code))
            })
            .collect()
    }
}

pub struct TimeBasedAvailabilityRule;

impl TimeBasedAvailabilityRule {
    fn is_past_live_window(fixture: &Fixture, now: DateTime<Utc>) -> bool {
        fixture.fixture_status() == FixtureStatus::Completed
            || now > fixture.match_date + Duration::hours(LIVE_WINDOW_HOURS)
    }
}

impl RightsRule for TimeBasedAvailabilityRule {
    fn name(&self) -> &'static str {
        "TimeBasedAvailabilityRule"
    }

    fn priority(&self) -> RulePriority {
        RulePriority::Medium
    }

    fn evaluate(&self, context: &RuleContext<'_>) -> bool {
        context.fixture.is_some()
    }

    fn apply(
        &self,
        candidates: Vec<RightsCandidate>,
        context: &RuleContext<'_>,
    ) -> Vec<RightsCandidate> {
        let Some(fixture) = context.fixture else {
            return candidates;
        };
        let match_day = fixture.match_date.date_naive();
        let in_window: Vec<RightsCandidate> = candidates
            .into_iter()
            .filter(|c| c.package.as_ref().map_or(true, |p| p.is_in_window(match_day)))
            .collect();

        if Self::is_past_live_window(fixture, context.now) {
            prefer(in_window, |c| c.rights.is_on_demand)
        } else {
            prefer(in_window, |c| c.rights.is_live)
        }
    }
}

pub struct SubscriptionRequiredRule;

impl RightsRule for SubscriptionRequiredRule {
    fn name(&self) -> &'static str {
        "SubscriptionRequiredRule"
    }

    fn priority(&self) -> RulePriority {
        RulePriority::Medium
    }

    fn evaluate(&self, context: &RuleContext<'_>) -> bool {
        context.user.is_some()
    }

    fn apply(
        &self,
        candidates: Vec<RightsCandidate>,
        _context: &RuleContext<'_>,
    ) -> Vec<RightsCandidate> {
        prefer(candidates, |c| c.rights.is_free)
    }
}

/// Priority-ordered rule list. Equal priorities keep insertion order.
pub struct RuleEvaluator {
    rules: Vec<Box<dyn RightsRule>>,
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        let mut evaluator = RuleEvaluator::empty();
        evaluator.add_rule(Box::new(ExclusivityRule));
        evaluator.add_rule(Box::new(GeographicRestrictionRule));
        evaluator.add_rule(Box::new(TimeBasedAvailabilityRule));
        evaluator.add_rule(Box::new(SubscriptionRequiredRule));
        debug!("Initialized rule evaluator with {} rules", evaluator.rules.len());
        evaluator
    }
}

impl RuleEvaluator {
    pub fn empty() -> Self {
        RuleEvaluator { rules: Vec::new() }
    }

    pub fn add_rule(&mut self, rule: Box<dyn RightsRule>) {
        self.rules.push(rule);
        // sort_by_key is stable
        self.rules.sort_by_key(|r| std::cmp::Reverse(r.priority()));
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn evaluate_all(&self, context: &RuleContext<'_>) -> Vec<&dyn RightsRule> {
        self.rules
            .iter()
            .map(|r| r.as_ref())
            .filter(|r| r.evaluate(context))
            .collect()
    }

    pub fn apply_rules(
        &self,
        candidates: Vec<RightsCandidate>,
        context: &RuleContext<'_>,
    ) -> Vec<RightsCandidate> {
        let mut result = candidates;
        for rule in self.evaluate_all(context) {
            result = rule.apply(result, context);
            debug!("Applied rule {}, {} options remain", rule.name(), result.len());
        }
        result
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    pub(crate) fn kickoff() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 2, 1, 14, 15, 0).unwrap()
    }

    pub(crate) fn fixture(status: &str) -> Fixture {
        Fixture {
            id: 10,
            season_id: 1,
            home_team_id: 1,
            away_team_id: 2,
            venue_id: None,
            match_date: kickoff(),
            round: Some("Round 1".to_string()),
            status: status.to_string(),
            home_score: None,
            away_score: None,
            external_id: None,
            source: None,
            notes: None,
            is_active: true,
            created_at: kickoff(),
            updated_at: kickoff(),
        }
    }

    pub(crate) fn territory(code: &str) -> Territory {
        Territory {
            id: 3,
            name: "Ireland".to_string(),
            code: code.to_string(),
            region: Some("Europe".to_string()),
            timezone: Some("Europe/Dublin".to_string()),
            is_active: true,
            created_at: kickoff(),
            updated_at: kickoff(),
        }
    }

    pub(crate) fn package(id: i32, coverage: Option<&str>, exclusive: bool) -> RightsPackage {
        RightsPackage {
            id,
            provider_id: 1,
            name: format!("Package {id}"),
            description: None,
            competition_coverage: None,
            territory_coverage: coverage.map(str::to_string),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            is_exclusive: exclusive,
            is_active: true,
            created_at: kickoff(),
            updated_at: kickoff(),
        }
    }

    pub(crate) fn rights(id: i32, package_id: Option<i32>) -> FixtureRights {
        FixtureRights {
            id,
            fixture_id: 10,
            territory_id: 3,
            rights_package_id: package_id,
            platform_name: Some(format!("Platform {id}")),
            platform_url: None,
            is_live: true,
            is_on_demand: false,
            is_free: false,
            requires_subscription: true,
            verified_at: None,
            is_active: true,
            created_at: kickoff(),
            updated_at: kickoff(),
        }
    }

    fn candidate(id: i32, package: Option<RightsPackage>) -> RightsCandidate {
        RightsCandidate {
            rights: rights(id, package.as_ref().map(|p| p.id)),
            package,
        }
    }

    fn ids(candidates: &[RightsCandidate]) -> Vec<i32> {
        candidates.iter().map(|c| c.rights.id).collect()
    }

    fn context<'a>(
        fixture: Option<&'a Fixture>,
        territory: Option<&'a Territory>,
        user: Option<&'a UserContext>,
        now: DateTime<Utc>,
    ) -> RuleContext<'a> {
        RuleContext {
            fixture,
            territory,
            user,
            now,
        }
    }

    struct Named(&'static str, RulePriority);

    impl RightsRule for Named {
        fn name(&self) -> &'static str {
            self.0
        }

        fn priority(&self) -> RulePriority {
            self.1
        }

        fn evaluate(&self, _context: &RuleContext<'_>) -> bool {
            true
        }

        fn apply(
            &self,
            candidates: Vec<RightsCandidate>,
            _context: &RuleContext<'_>,
        ) -> Vec<RightsCandidate> {
            candidates
        }
    }

    #[test]
    fn rules_sorted_by_priority_then_insertion() {
        let mut evaluator = RuleEvaluator::empty();
        evaluator.add_rule(Box::new(Named("medium-1", RulePriority::Medium)));
        evaluator.add_rule(Box::new(Named("low", RulePriority::Low)));
        evaluator.add_rule(Box::new(Named("critical", RulePriority::Critical)));
        evaluator.add_rule(Box::new(Named("medium-2", RulePriority::Medium)));
        evaluator.add_rule(Box::new(Named("high", RulePriority::High)));

        assert_eq!(
            evaluator.rule_names(),
            vec!["critical", "high", "medium-1", "medium-2", "low"]
        );
    }

    #[test]
    fn default_pipeline_order() {
        assert_eq!(
            RuleEvaluator::default().rule_names(),
            vec![
                "GeographicRestrictionRule",
                "ExclusivityRule",
                "TimeBasedAvailabilityRule",
                "SubscriptionRequiredRule",
            ]
        );
    }

    #[test]
    fn participation_depends_on_context() {
        let evaluator = RuleEvaluator::default();
        let fx = fixture("scheduled");
        let user = UserContext { user_id: 1 };

        let bare = context(None, None, None, kickoff());
        let names: Vec<_> = evaluator.evaluate_all(&bare).iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["ExclusivityRule"]);

        let full = context(Some(&fx), None, Some(&user), kickoff());
        let names: Vec<_> = evaluator.evaluate_all(&full).iter().map(|r| r.name()).collect();
        assert_eq!(
            names,
            vec!["ExclusivityRule", "TimeBasedAvailabilityRule", "SubscriptionRequiredRule"]
        );
    }

    #[test]
    fn exclusivity_keeps_exclusive_only_when_present() {
        let ctx = context(None, None, None, kickoff());
        let mixed = vec![
            candidate(1, Some(package(1, None, false))),
            candidate(2, Some(package(2, None, true))),
            candidate(3, None),
        ];
        assert_eq!(ids(&ExclusivityRule.apply(mixed, &ctx)), vec![2]);

        let none_exclusive = vec![candidate(1, None), candidate(2, Some(package(2, None, false)))];
        assert_eq!(ids(&ExclusivityRule.apply(none_exclusive, &ctx)), vec![1, 2]);
    }

    #[test]
    fn geography_filters_by_declared_coverage() {
        let ie = territory("IE");
        let ctx = context(None, Some(&ie), None, kickoff());
        let candidates = vec![
            candidate(1, Some(package(1, Some("GB,FR"), false))),
            candidate(2, Some(package(2, Some("gb, ie"), false))),
            candidate(3, Some(package(3, None, false))),
            candidate(4, None),
        ];
        assert_eq!(ids(&GeographicRestrictionRule.apply(candidates, &ctx)), vec![2, 3, 4]);
    }

    #[test]
    fn time_rule_prefers_live_before_and_during_the_match() {
        let fx = fixture("scheduled");
        let mut replay = candidate(2, None);
        replay.rights.is_live = false;
        replay.rights.is_on_demand = true;
        let candidates = vec![candidate(1, None), replay];

        let ctx = context(Some(&fx), None, None, kickoff() + Duration::minutes(30));
        assert_eq!(ids(&TimeBasedAvailabilityRule.apply(candidates, &ctx)), vec![1]);
    }

    #[test]
    fn time_rule_prefers_on_demand_after_the_match() {
        let fx = fixture("scheduled");
        let mut replay = candidate(2, None);
        replay.rights.is_on_demand = true;
        let candidates = vec![candidate(1, None), replay];

        let late = context(Some(&fx), None, None, kickoff() + Duration::hours(3));
        assert_eq!(ids(&TimeBasedAvailabilityRule.apply(candidates.clone(), &late)), vec![2]);

        let completed = fixture("completed");
        let early = context(Some(&completed), None, None, kickoff());
        assert_eq!(ids(&TimeBasedAvailabilityRule.apply(candidates, &early)), vec![2]);
    }

    #[test]
    fn time_rule_drops_packages_outside_their_window() {
        let fx = fixture("scheduled");
        let mut expired = package(1, None, false);
        expired.end_date = NaiveDate::from_ymd_opt(2025, 1, 31).unwrap();
        let candidates = vec![candidate(1, Some(expired)), candidate(2, Some(package(2, None, false)))];

        let ctx = context(Some(&fx), None, None, kickoff());
        assert_eq!(ids(&TimeBasedAvailabilityRule.apply(candidates, &ctx)), vec![2]);
    }

    #[test]
    fn subscription_rule_prefers_free() {
        let user = UserContext { user_id: 9 };
        let ctx = context(None, None, Some(&user), kickoff());
        let mut free = candidate(2, None);
        free.rights.is_free = true;

        let result = SubscriptionRequiredRule.apply(vec![candidate(1, None), free], &ctx);
        assert_eq!(ids(&result), vec![2]);

        let paid_only = vec![candidate(1, None), candidate(3, None)];
        assert_eq!(ids(&SubscriptionRequiredRule.apply(paid_only, &ctx)), vec![1, 3]);
    }

    #[test]
    fn every_rule_tolerates_empty_input() {
        let fx = fixture("live");
        let ie = territory("IE");
        let user = UserContext { user_id: 1 };
        let ctx = context(Some(&fx), Some(&ie), Some(&user), kickoff());
        assert!(RuleEvaluator::default().apply_rules(Vec::new(), &ctx).is_empty());
    }
}
