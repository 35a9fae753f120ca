//! The solution summary shown after a solve: what the stats panel and the
//! downloadable solution text carry.

use std::fmt;
use std::time::Duration;

use serde::Serialize;

use op_graph::Graph;
use op_search::Solution;

#[derive(Debug, Serialize)]
pub struct Summary {
    pub reward:         f64,
    pub time_budget:    f64,
    pub time_left:      f64,
    pub solving_secs:   f64,
    pub cities_visited: usize,
    pub path:           Vec<String>,
    pub edges:          Vec<(String, String)>,
}

impl Summary {
    pub fn new(graph: &Graph, solution: &Solution, time_budget: f64, elapsed: Duration) -> Self {
        Self {
            reward:         solution.reward(),
            time_budget,
            time_left:      solution.time_left(),
            solving_secs:   elapsed.as_secs_f64(),
            cities_visited: solution.walk.distinct_cities(),
            path:           solution.city_names(graph).into_iter().map(str::to_owned).collect(),
            edges:          solution
                .named_edges(graph)
                .into_iter()
                .map(|(a, b)| (a.to_owned(), b.to_owned()))
                .collect(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Working time   : {}", self.time_budget)?;
        writeln!(f, "Time left      : {}", self.time_left)?;
        writeln!(f, "Earned         : {}", self.reward)?;
        writeln!(f, "Cities visited : {}", self.cities_visited)?;
        writeln!(f, "Solved in      : {:.3} s", self.solving_secs)?;
        writeln!(f)?;
        writeln!(f, "Best found path:")?;
        write!(f, "  {}", self.path.join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use op_core::CityId;
    use op_graph::{CityRecord, EdgeRecord, build_graph};
    use op_search::{Solution, WalkResult};

    use super::Summary;

    #[test]
    fn summary_names_the_path() {
        let cities = vec![
            CityRecord::new("A", 0.0, 0.0, 1.0),
            CityRecord::new("B", 1.0, 0.0, 2.0),
        ];
        let edges = vec![EdgeRecord::new("A", "B", 5.0)];
        let graph = build_graph(&cities, &edges).unwrap();
        let solution = Solution::from_walk(WalkResult {
            time_left: 1.0,
            reward:    3.0,
            path:      vec![CityId(0), CityId(1), CityId(0)],
            travelled: 15.0,
            distinct:  2,
        });

        let s = Summary::new(&graph, &solution, 11.0, Duration::from_millis(250));
        assert_eq!(s.cities_visited, 2);
        assert_eq!(s.edges, vec![("A".into(), "B".into()), ("B".into(), "A".into())]);
        assert!(s.to_string().ends_with("A -> B -> A"));
    }
}
