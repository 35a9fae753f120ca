//! Unit tests for op-graph.
//!
//! All tests use hand-crafted record tables.

#[cfg(test)]
mod helpers {
    use crate::{CityRecord, EdgeRecord};

    /// A(1) -5- B(2) -5- C(3)
    pub fn line() -> (Vec<CityRecord>, Vec<EdgeRecord>) {
        let cities = vec![
            CityRecord::new("A", 0.0, 0.0, 1.0),
            CityRecord::new("B", 1.0, 0.0, 2.0),
            CityRecord::new("C", 2.0, 0.0, 3.0),
        ];
        let edges = vec![
            EdgeRecord::new("A", "B", 5.0),
            EdgeRecord::new("B", "C", 5.0),
        ];
        (cities, edges)
    }
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use op_core::{CityId, Point};

    use crate::build_graph;

    #[test]
    fn line_graph_dimensions() {
        let (cities, edges) = super::helpers::line();
        let g = build_graph(&cities, &edges).unwrap();
        assert_eq!(g.city_count(), 3);
        assert_eq!(g.edge_count(), 2);
        assert!(!g.is_empty());
    }

    #[test]
    fn ids_follow_record_order() {
        let (cities, edges) = super::helpers::line();
        let g = build_graph(&cities, &edges).unwrap();
        let names: Vec<&str> = g.ids().map(|id| g.name(id)).collect();
        assert_eq!(names, ["A", "B", "C"]);
        assert_eq!(g.id_of("C"), Some(CityId(2)));
        assert_eq!(g.id_of("Z"), None);
    }

    #[test]
    fn city_data_carried_through() {
        let (cities, edges) = super::helpers::line();
        let g = build_graph(&cities, &edges).unwrap();
        let b = g.city(CityId(1));
        assert_eq!(b.name, "B");
        assert_eq!(b.pos, Point::new(1.0, 0.0));
        assert_eq!(g.value(CityId(1)), 2.0);
    }

    #[test]
    fn edges_are_undirected() {
        let (cities, edges) = super::helpers::line();
        let g = build_graph(&cities, &edges).unwrap();
        let [a, b, c] = [CityId(0), CityId(1), CityId(2)];

        assert_eq!(g.degree(a), 1);
        assert_eq!(g.degree(b), 2);
        assert_eq!(g.degree(c), 1);

        let (targets, times) = g.neighbors(b);
        assert_eq!(targets, &[a, c]);
        assert_eq!(times, &[5.0, 5.0]);

        assert_eq!(g.travel_time(c, b), Some(5.0));
        assert_eq!(g.travel_time(a, c), None);
    }

    #[test]
    fn csr_row_pointer_is_consistent() {
        let (cities, edges) = super::helpers::line();
        let g = build_graph(&cities, &edges).unwrap();
        assert_eq!(g.neighbor_start.len(), g.city_count() + 1);
        assert_eq!(*g.neighbor_start.last().unwrap() as usize, g.neighbor_to.len());
        assert_eq!(g.neighbor_to.len(), g.neighbor_time.len());
    }

    #[test]
    fn min_edge_time() {
        let (cities, mut edges) = super::helpers::line();
        edges[1].time = 0.5;
        let g = build_graph(&cities, &edges).unwrap();
        assert_eq!(g.min_edge_time(), Some(0.5));
    }

    #[test]
    fn empty_tables_build_empty_graph() {
        let g = build_graph(&[], &[]).unwrap();
        assert!(g.is_empty());
        assert_eq!(g.min_edge_time(), None);
    }
}

// ── Neighbour merging ─────────────────────────────────────────────────────────

#[cfg(test)]
mod merging {
    use op_core::CityId;

    use crate::{CityRecord, EdgeRecord, GraphBuilder, build_graph};

    #[test]
    fn repeated_pair_keeps_first_slot_and_last_time() {
        let cities = vec![
            CityRecord::new("A", 0.0, 0.0, 1.0),
            CityRecord::new("B", 0.0, 0.0, 1.0),
            CityRecord::new("C", 0.0, 0.0, 1.0),
        ];
        let edges = vec![
            EdgeRecord::new("A", "B", 4.0),
            EdgeRecord::new("A", "C", 1.0),
            EdgeRecord::new("B", "A", 9.0), // same pair, reversed
        ];
        let g = build_graph(&cities, &edges).unwrap();
        assert_eq!(g.edge_count(), 2);

        let (targets, times) = g.neighbors(CityId(0));
        assert_eq!(targets, &[CityId(1), CityId(2)]);
        assert_eq!(times, &[9.0, 1.0]);
        assert_eq!(g.travel_time(CityId(1), CityId(0)), Some(9.0));
    }

    #[test]
    fn self_loop_is_one_entry() {
        let mut b = GraphBuilder::new();
        let a = b.add_city("A", 0.0, 0.0, 1.0).unwrap();
        b.add_road(a, a, 2.0).unwrap();
        let g = b.build().unwrap();
        assert_eq!(g.degree(a), 1);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.neighbors(a).0, &[a]);
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod errors {
    use crate::{CityRecord, EdgeRecord, GraphError, InvalidGraph, build_graph};

    #[test]
    fn unknown_city() {
        let (cities, mut edges) = super::helpers::line();
        edges.push(EdgeRecord::new("C", "Nowhere", 1.0));
        let err = build_graph(&cities, &edges).unwrap_err();
        assert_eq!(
            err,
            GraphError::UnknownCity {
                city_from: "C".into(),
                city_to:   "Nowhere".into(),
                missing:   "Nowhere".into(),
            }
        );
    }

    #[test]
    fn zero_time_is_invalid() {
        let (cities, mut edges) = super::helpers::line();
        edges[0].time = 0.0;
        let err = build_graph(&cities, &edges).unwrap_err();
        assert!(
            matches!(err, GraphError::Invalid(InvalidGraph::NonPositiveTime { time, .. }) if time == 0.0),
            "got {err:?}"
        );
    }

    #[test]
    fn negative_and_nan_times_are_invalid() {
        for bad in [-1.0, f64::NAN] {
            let (cities, mut edges) = super::helpers::line();
            edges[1].time = bad;
            let err = build_graph(&cities, &edges).unwrap_err();
            assert!(matches!(err, GraphError::Invalid(InvalidGraph::NonPositiveTime { .. })));
        }
    }

    #[test]
    fn isolated_city_is_invalid() {
        let (mut cities, edges) = super::helpers::line();
        cities.push(CityRecord::new("Lonely", 9.0, 9.0, 100.0));
        let err = build_graph(&cities, &edges).unwrap_err();
        assert_eq!(err, GraphError::Invalid(InvalidGraph::IsolatedCity("Lonely".into())));
        assert_eq!(err.to_string(), "invalid graph: city \"Lonely\" has no neighbours");
    }

    #[test]
    fn duplicate_city_is_invalid() {
        let (mut cities, edges) = super::helpers::line();
        cities.push(CityRecord::new("B", 0.0, 0.0, 0.0));
        let err = build_graph(&cities, &edges).unwrap_err();
        assert_eq!(err, GraphError::Invalid(InvalidGraph::DuplicateCity("B".into())));
    }

    #[test]
    fn negative_value_is_invalid() {
        let (mut cities, edges) = super::helpers::line();
        cities[0].value = -3.0;
        let err = build_graph(&cities, &edges).unwrap_err();
        assert!(matches!(err, GraphError::Invalid(InvalidGraph::InvalidValue { .. })));
    }
}
