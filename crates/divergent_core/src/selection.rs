//! Context-aware word selection
//!
//! Replaces pure randomness with a three step preference order:
//! 1. the requested category of the target domain
//! 2. technique words when the context has goals, challenge words when it has constraints
//! 3. any other category of the domain, then the generic random words

use crate::catalog::{Catalog, WordCategory};
use crate::context::CreativityContext;
use crate::sampler::Sampler;

pub struct WordSelector<'a> {
    catalog: &'a Catalog,
}

impl<'a> WordSelector<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn select(
        &self,
        domain: &str,
        context: Option<&CreativityContext>,
        category: WordCategory,
        count: usize,
        sampler: &mut Sampler,
    ) -> Vec<String> {
        let mut selected = sampler.sample(self.catalog.words(domain, category), count);

        if let Some(ctx) = context {
            let remaining = count - selected.len();
            if remaining > 0 && !ctx.goals.is_empty() && category != WordCategory::Techniques {
                let techniques = self.catalog.words(domain, WordCategory::Techniques);
                selected.extend(sampler.sample(techniques, remaining / 2));
            }

            let remaining = count - selected.len();
            if remaining > 0 && !ctx.constraints.is_empty() && category != WordCategory::Challenges {
                let challenges = self.catalog.words(domain, WordCategory::Challenges);
                selected.extend(sampler.sample(challenges, remaining));
            }
        }

        let remaining = count - selected.len();
        if remaining > 0 {
            let others: Vec<String> = WordCategory::ALL
                .into_iter()
                .filter(|c| *c != category)
                .flat_map(|c| self.catalog.words(domain, c).iter().cloned())
                .collect();
            selected.extend(sampler.sample(&others, remaining));

            let remaining = count - selected.len();
            if remaining > 0 {
                selected.extend(sampler.sample(&self.catalog.random_words, remaining));
            }
        }

        selected.truncate(count);
        selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefers_requested_category() {
        let catalog = Catalog::builtin();
        let selector = WordSelector::new(catalog);
        let mut sampler = Sampler::seeded(3);
        let words = selector.select(
            "natural language processing",
            None,
            WordCategory::Metaphors,
            2,
            &mut sampler,
        );
        let metaphors = catalog.words("natural language processing", WordCategory::Metaphors);
        assert_eq!(words.len(), 2);
        assert!(words.iter().all(|w| metaphors.contains(w)));
    }

    #[test]
    fn test_unknown_domain_falls_back_to_random_words() {
        let catalog = Catalog::builtin();
        let selector = WordSelector::new(catalog);
        let mut sampler = Sampler::seeded(3);
        let words = selector.select("knitting", None, WordCategory::CoreConcepts, 4, &mut sampler);
        assert_eq!(words.len(), 4);
        assert!(words.iter().all(|w| catalog.random_words.contains(w)));
    }

    #[test]
    fn test_tops_up_from_context_and_other_categories() {
        let catalog = Catalog::builtin();
        let selector = WordSelector::new(catalog);
        let domain = "version control systems";
        let available = catalog.words(domain, WordCategory::Applications).len();
        let ctx = CreativityContext::new(domain)
            .with_goals(["faster reviews"])
            .with_constraints(["no central server"]);
        let mut sampler = Sampler::seeded(11);
        let words = selector.select(domain, Some(&ctx), WordCategory::Applications, available + 4, &mut sampler);
        assert_eq!(words.len(), available + 4);
        let profile = catalog.domain(domain).unwrap();
        assert!(words
            .iter()
            .all(|w| WordCategory::ALL.iter().any(|c| profile.words.get(*c).contains(w))));
    }

    #[test]
    fn test_zero_count() {
        let selector = WordSelector::new(Catalog::builtin());
        let mut sampler = Sampler::seeded(1);
        assert!(selector
            .select("predictive analytics", None, WordCategory::Techniques, 0, &mut sampler)
            .is_empty());
    }
}
