mod eda;
mod first_order_prompt;
mod lineage;
mod rank;
mod resample_demos;
mod zero_order_prompt;

pub(crate) use eda::EstimationOfDistributionMutation;
pub(crate) use first_order_prompt::FirstOrderPromptGeneration;
pub(crate) use lineage::LineageMutation;
pub(crate) use rank::RankAndIndexMutation;
pub(crate) use resample_demos::ResampleDemos;
pub(crate) use zero_order_prompt::ZeroOrderPromptGeneration;

use rand::{seq::SliceRandom, Rng};

use crate::breeder::unit::{Population, ScoredUnit, Unit};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum OperatorKind {
    ZeroOrderPrompt,
    FirstOrderPrompt,
    EstimationOfDistribution,
    RankAndIndex,
    Lineage,
    ResampleDemos,
}

impl OperatorKind {
    /// Uniform choice among the operators applicable to this unit and
    /// population.
    pub(crate) fn choose<R: Rng>(
        rng: &mut R,
        population: &Population,
        unit: &ScoredUnit,
        trainset_len: usize,
    ) -> Self {
        let mut applicable = vec![OperatorKind::ZeroOrderPrompt, OperatorKind::FirstOrderPrompt];
        if population.scored.len() >= 2 {
            applicable.push(OperatorKind::EstimationOfDistribution);
            applicable.push(OperatorKind::RankAndIndex);
        }
        if !unit.get_elites().is_empty() {
            applicable.push(OperatorKind::Lineage);
        }
        if trainset_len > 0 {
            applicable.push(OperatorKind::ResampleDemos);
        }
        applicable
            .choose(rng)
            .copied()
            .unwrap_or(OperatorKind::FirstOrderPrompt)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::breeder::test_support::scored_unit;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn population_operators_need_two_scored_members() {
        let mut rng = StdRng::seed_from_u64(7);
        let unit = scored_unit("Read carefully, then decide.", 0.5);
        let thin = Population {
            scored: vec![unit.clone()],
            ..Population::default()
        };

        for _ in 0..50 {
            let kind = OperatorKind::choose(&mut rng, &thin, &unit, 0);
            assert!(
                matches!(
                    kind,
                    OperatorKind::ZeroOrderPrompt | OperatorKind::FirstOrderPrompt
                ),
                "unexpected operator {kind:?}"
            );
        }
    }

    #[test]
    fn lineage_requires_elite_ancestry() {
        let mut rng = StdRng::seed_from_u64(7);
        let unit = scored_unit("Read carefully, then decide.", 0.5);
        let population = Population {
            scored: vec![unit.clone(), scored_unit("Guess quickly.", 0.25)],
            ..Population::default()
        };

        for _ in 0..50 {
            let kind = OperatorKind::choose(&mut rng, &population, &unit, 8);
            assert_ne!(kind, OperatorKind::Lineage);
        }
    }
}
