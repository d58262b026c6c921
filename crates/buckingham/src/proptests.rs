//! Property-based tests for the Pi theorem engine.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        AnalysisConfig, BaseDimensions, BasisNormalization, DimensionalAnalysis, VariableSet,
    };

    /// Random variable sets: 1..=4 base dimensions, 1..=8 variables, small
    /// integer exponents.
    fn variable_set() -> impl Strategy<Value = VariableSet> {
        (1usize..=4, 1usize..=8).prop_flat_map(|(dims, vars)| {
            proptest::collection::vec(proptest::collection::vec(-3i64..=3, dims), vars).prop_map(
                |columns| {
                    let mut set = VariableSet::new();
                    for (j, exponents) in columns.iter().enumerate() {
                        set.insert_i64(format!("v{j}"), exponents).unwrap();
                    }
                    set
                },
            )
        })
    }

    fn engine_for(set: &VariableSet, normalization: BasisNormalization) -> DimensionalAnalysis {
        let dims = BaseDimensions::anonymous(set.dimension_count().unwrap()).unwrap();
        DimensionalAnalysis::new(
            AnalysisConfig::default()
                .with_dimensions(dims)
                .with_normalization(normalization),
        )
    }

    fn reversed(set: &VariableSet) -> VariableSet {
        let mut out = VariableSet::new();
        let vars: Vec<_> = set.iter().collect();
        for v in vars.into_iter().rev() {
            out.insert(v.name(), v.exponents().to_vec()).unwrap();
        }
        out
    }

    proptest! {
        #[test]
        fn rank_is_bounded_and_count_matches(set in variable_set()) {
            let analysis = engine_for(&set, BasisNormalization::Rational).analyze(&set).unwrap();
            let d = set.dimension_count().unwrap();
            prop_assert!(analysis.rank <= d.min(set.len()));
            prop_assert_eq!(analysis.pi_count, set.len() - analysis.rank);
            prop_assert_eq!(analysis.terms.len(), analysis.pi_count);
        }

        #[test]
        fn every_term_is_dimensionless(set in variable_set()) {
            for normalization in [BasisNormalization::Rational, BasisNormalization::PrimitiveInteger] {
                let terms = engine_for(&set, normalization).compute(&set).unwrap();
                for term in &terms {
                    prop_assert!(term.is_dimensionless(&set));
                }
            }
        }

        #[test]
        fn compute_is_deterministic(set in variable_set()) {
            let engine = engine_for(&set, BasisNormalization::Rational);
            let first = engine.compute(&set).unwrap();
            let second = engine.compute(&set.clone()).unwrap();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn reordering_keeps_count(set in variable_set()) {
            let engine = engine_for(&set, BasisNormalization::Rational);
            let forward = engine.compute(&set).unwrap();
            let flipped = reversed(&set);
            let backward = engine.compute(&flipped).unwrap();
            prop_assert_eq!(forward.len(), backward.len());
            for term in &backward {
                prop_assert!(term.is_dimensionless(&flipped));
            }
        }

        #[test]
        fn primitive_vectors_are_integral(set in variable_set()) {
            let terms = engine_for(&set, BasisNormalization::PrimitiveInteger)
                .compute(&set)
                .unwrap();
            for term in &terms {
                prop_assert!(term.basis_vector().iter().all(|e| e.is_integer()));
                prop_assert!(!term.monomial().is_one());
            }
        }
    }
}
