//! Route candidate ranking, filtering, and ordering.
//!
//! Ranking identifies the minimum-cost, minimum-duration, and maximum-rating
//! candidates for comparison highlighting. Ties are preserved: every route
//! matching a best value is reported, not just the first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Route, TrafficLevel, TransportMode};

/// Ids of the best routes per metric. Empty vectors when the input is empty
/// (or, for ratings, when no route carries a rating).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRanking {
    pub best_cost_ids: Vec<u32>,
    pub best_duration_ids: Vec<u32>,
    pub best_rating_ids: Vec<u32>,
}

/// Finds the best route candidates across all three metrics.
///
/// Routes without a rating are excluded from the rating comparison but still
/// compete on cost and duration.
pub fn rank_routes(routes: &[Route]) -> RouteRanking {
    let best_cost = routes.iter().map(|r| r.cost).min();
    let best_duration = routes.iter().map(|r| r.duration_minutes).min();
    let best_rating = routes.iter().filter_map(|r| r.rating).max();

    let ids_where = |predicate: &dyn Fn(&Route) -> bool| -> Vec<u32> {
        routes
            .iter()
            .filter(|r| predicate(r))
            .map(|r| r.id)
            .collect()
    };

    RouteRanking {
        best_cost_ids: best_cost.map_or_else(Vec::new, |best| ids_where(&|r| r.cost == best)),
        best_duration_ids: best_duration
            .map_or_else(Vec::new, |best| ids_where(&|r| r.duration_minutes == best)),
        best_rating_ids: best_rating
            .map_or_else(Vec::new, |best| ids_where(&|r| r.rating == Some(best))),
    }
}

/// Sort orders offered by the route comparison view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteSort {
    Fastest,
    Cheapest,
    BestRated,
}

impl RouteSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fastest => "fastest",
            Self::Cheapest => "cheapest",
            Self::BestRated => "best-rated",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "fastest" => Some(Self::Fastest),
            "cheapest" => Some(Self::Cheapest),
            "best-rated" => Some(Self::BestRated),
            _ => None,
        }
    }

    /// Reorders routes in place. Unrated routes sort last under `BestRated`.
    pub fn apply(
        &self,
        routes: &mut [Route],
    ) {
        match self {
            Self::Fastest => routes.sort_by_key(|r| r.duration_minutes),
            Self::Cheapest => routes.sort_by(|a, b| a.cost.cmp(&b.cost)),
            Self::BestRated => routes.sort_by(|a, b| match (a.rating, b.rating) {
                (Some(ra), Some(rb)) => rb.cmp(&ra),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => std::cmp::Ordering::Equal,
            }),
        }
    }
}

/// Criteria for narrowing a route candidate list. All fields are optional;
/// an empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFilter {
    pub transport_mode: Option<TransportMode>,
    pub max_duration_minutes: Option<u32>,
    pub max_cost: Option<Decimal>,

    /// Accepted traffic levels. `None` accepts all levels; an empty list
    /// matches nothing.
    pub traffic_levels: Option<Vec<TrafficLevel>>,
}

impl RouteFilter {
    pub fn matches(
        &self,
        route: &Route,
    ) -> bool {
        if let Some(mode) = self.transport_mode
            && route.transport_mode != mode
        {
            return false;
        }
        if let Some(max) = self.max_duration_minutes
            && route.duration_minutes > max
        {
            return false;
        }
        if let Some(max) = self.max_cost
            && route.cost > max
        {
            return false;
        }
        if let Some(levels) = &self.traffic_levels
            && !levels.contains(&route.traffic_level)
        {
            return false;
        }
        true
    }

    pub fn apply(
        &self,
        routes: &[Route],
    ) -> Vec<Route> {
        routes
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn route(
        id: u32,
        mode: TransportMode,
        duration_minutes: u32,
        cost: Decimal,
        rating: Option<Decimal>,
    ) -> Route {
        Route {
            id,
            name: format!("Route {id}"),
            transport_mode: mode,
            duration_minutes,
            distance: "245 km".to_string(),
            cost,
            traffic_level: TrafficLevel::Moderate,
            rating,
            bookmarked: false,
        }
    }

    fn candidates() -> Vec<Route> {
        vec![
            route(1, TransportMode::Car, 180, dec!(45.00), Some(dec!(4.2))),
            route(2, TransportMode::Train, 140, dec!(89.00), Some(dec!(4.8))),
            route(3, TransportMode::Bus, 260, dec!(25.00), None),
            route(4, TransportMode::Plane, 140, dec!(150.00), Some(dec!(4.8))),
        ]
    }

    // =========================================================================
    // rank_routes tests
    // =========================================================================

    #[test]
    fn ranks_each_metric_independently() {
        let ranking = rank_routes(&candidates());

        assert_eq!(ranking.best_cost_ids, vec![3]);
        assert_eq!(ranking.best_duration_ids, vec![2, 4]);
        assert_eq!(ranking.best_rating_ids, vec![2, 4]);
    }

    #[test]
    fn ties_report_every_matching_route() {
        let routes = vec![
            route(1, TransportMode::Car, 120, dec!(40.00), None),
            route(2, TransportMode::Bus, 200, dec!(40.00), None),
        ];

        let ranking = rank_routes(&routes);

        assert_eq!(ranking.best_cost_ids, vec![1, 2]);
    }

    #[test]
    fn unrated_routes_excluded_from_rating_max() {
        let routes = vec![
            route(1, TransportMode::Car, 120, dec!(40.00), None),
            route(2, TransportMode::Bus, 200, dec!(60.00), Some(dec!(3.1))),
        ];

        let ranking = rank_routes(&routes);

        assert_eq!(ranking.best_rating_ids, vec![2]);
    }

    #[test]
    fn all_unrated_yields_no_rating_winner() {
        let routes = vec![route(1, TransportMode::Car, 120, dec!(40.00), None)];

        let ranking = rank_routes(&routes);

        assert!(ranking.best_rating_ids.is_empty());
        assert_eq!(ranking.best_cost_ids, vec![1]);
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        assert_eq!(rank_routes(&[]), RouteRanking::default());
    }

    // =========================================================================
    // RouteSort tests
    // =========================================================================

    #[test]
    fn sort_fastest_orders_by_duration() {
        let mut routes = candidates();
        RouteSort::Fastest.apply(&mut routes);

        let ids: Vec<u32> = routes.iter().map(|r| r.id).collect();
        assert_eq!(ids[..2], [2, 4]);
        assert_eq!(ids[3], 3);
    }

    #[test]
    fn sort_cheapest_orders_by_cost() {
        let mut routes = candidates();
        RouteSort::Cheapest.apply(&mut routes);

        let ids: Vec<u32> = routes.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2, 4]);
    }

    #[test]
    fn sort_best_rated_places_unrated_last() {
        let mut routes = candidates();
        RouteSort::BestRated.apply(&mut routes);

        assert_eq!(routes.last().unwrap().id, 3);
        assert_eq!(routes[0].rating, Some(dec!(4.8)));
    }

    #[test]
    fn sort_parse_round_trips() {
        for sort in [RouteSort::Fastest, RouteSort::Cheapest, RouteSort::BestRated] {
            assert_eq!(RouteSort::parse(sort.as_str()), Some(sort));
        }
        assert_eq!(RouteSort::parse("scenic"), None);
    }

    // =========================================================================
    // RouteFilter tests
    // =========================================================================

    #[test]
    fn empty_filter_matches_everything() {
        let filter = RouteFilter::default();

        assert_eq!(filter.apply(&candidates()).len(), 4);
    }

    #[test]
    fn filters_combine_conjunctively() {
        let filter = RouteFilter {
            max_duration_minutes: Some(200),
            max_cost: Some(dec!(100)),
            ..Default::default()
        };

        let kept: Vec<u32> = filter.apply(&candidates()).iter().map(|r| r.id).collect();
        assert_eq!(kept, vec![1, 2]);
    }

    #[test]
    fn transport_mode_filter_is_exact() {
        let filter = RouteFilter {
            transport_mode: Some(TransportMode::Train),
            ..Default::default()
        };

        let kept = filter.apply(&candidates());
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 2);
    }

    #[test]
    fn empty_traffic_level_list_matches_nothing() {
        let filter = RouteFilter {
            traffic_levels: Some(vec![]),
            ..Default::default()
        };

        assert!(filter.apply(&candidates()).is_empty());
    }
}
