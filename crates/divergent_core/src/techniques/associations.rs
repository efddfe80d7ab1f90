use super::Techniques;
use crate::catalog::WordCategory;
use crate::context::{domain_label, CreativityContext};
use crate::sampler::Sampler;

/// Analogy prompts kept after rendering.
const MAX_ANALOGIES: usize = 6;

impl<'a> Techniques<'a> {
    /// Four prompts for each of `num_words` words drawn from the domain's
    /// core concepts and metaphors.
    pub fn word_associations(
        &self,
        idea: &str,
        num_words: usize,
        context: Option<&CreativityContext>,
        sampler: &mut Sampler,
    ) -> Vec<String> {
        let domain = domain_label(self.catalog, context);
        let half = num_words / 2;

        let mut words = self.selector.select(domain, context, WordCategory::CoreConcepts, half, sampler);
        words.extend(self.selector.select(domain, context, WordCategory::Metaphors, half, sampler));
        if words.len() < num_words {
            let missing = num_words - words.len();
            words.extend(self.selector.select(domain, context, WordCategory::Techniques, missing, sampler));
        }
        if words.len() < num_words {
            let missing = num_words - words.len();
            words.extend(sampler.sample(&self.catalog.random_words, missing));
        }
        words.truncate(num_words);

        words
            .iter()
            .flat_map(|word| {
                [
                    format!("How does '{word}' relate to '{idea}' in the context of {domain}?"),
                    format!("What if '{idea}' embodied the essence of '{word}' in {domain} applications?"),
                    format!("How could '{word}' inspire a new approach to '{idea}' within {domain}?"),
                    format!("What {domain}-specific insights emerge when connecting '{idea}' with '{word}'?"),
                ]
            })
            .collect()
    }

    /// Analogies from fields outside the domain, at most six prompts.
    ///
    /// `domain` overrides the context domain. When it names one of the generic
    /// analogy sources (e.g. "music") only that source is used.
    pub fn analogies(
        &self,
        idea: &str,
        domain: Option<&str>,
        context: Option<&CreativityContext>,
        sampler: &mut Sampler,
    ) -> Vec<String> {
        let normalized = domain.map(crate::catalog::normalize_domain);
        let target = match normalized.as_deref() {
            Some(d) if !d.is_empty() => self.catalog.resolve(d).label(),
            _ => domain_label(self.catalog, context),
        };

        let single_source = self.catalog.analogies.iter().find(|a| a.source == target);
        let sources = match single_source {
            Some(source) => std::slice::from_ref(source),
            None => self.catalog.analogies_for(target),
        };

        let mut prompts = Vec::new();
        for source in sources {
            let field = &source.source;
            for example in sampler.sample(&source.examples, 2) {
                prompts.push(format!(
                    "How is '{idea}' like {example} in {field}? What insights does this reveal for {target}?"
                ));
                prompts.push(format!(
                    "If '{idea}' operated like {example} from {field}, how would it transform {target} practices?"
                ));
                prompts.push(format!(
                    "What principles from {example} in {field} could enhance '{idea}' for {target} applications?"
                ));
            }
            if prompts.len() >= MAX_ANALOGIES {
                break;
            }
        }
        prompts.truncate(MAX_ANALOGIES);
        prompts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_word_associations_four_per_word() {
        let techniques = Techniques::new(Catalog::builtin());
        let idea = "office chair";
        let results = techniques.word_associations(idea, 3, None, &mut Sampler::seeded(1));
        assert_eq!(results.len(), 12);
        assert!(results.iter().all(|r| r.contains(idea)));
        assert!(results.iter().all(|r| r.contains("general innovation")));
    }

    #[test]
    fn test_word_associations_use_domain_vocabulary() {
        let catalog = Catalog::builtin();
        let techniques = Techniques::new(catalog);
        let ctx = CreativityContext::new("compiler design optimization");
        let results = techniques.word_associations("error messages", 2, Some(&ctx), &mut Sampler::seeded(8));
        assert_eq!(results.len(), 8);
        let profile = catalog.domain("compiler design optimization").unwrap();
        let first_word = profile
            .words
            .core_concepts
            .iter()
            .find(|w| results[0].contains(&format!("'{w}'")));
        assert!(first_word.is_some(), "{}", results[0]);
    }

    #[test]
    fn test_analogies_capped_at_six() {
        let techniques = Techniques::new(Catalog::builtin());
        let idea = "mobile app design";
        let results = techniques.analogies(idea, None, None, &mut Sampler::seeded(2));
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|r| r.contains(idea)));
    }

    #[test]
    fn test_analogies_single_generic_source() {
        let techniques = Techniques::new(Catalog::builtin());
        let results = techniques.analogies("team collaboration", Some("Music"), None, &mut Sampler::seeded(4));
        assert_eq!(results.len(), 6);
        assert!(results.iter().all(|r| r.contains("in music") || r.contains("from music")));
    }

    #[test]
    fn test_analogies_domain_specific_sources() {
        let techniques = Techniques::new(Catalog::builtin());
        let ctx = CreativityContext::new("cybersecurity architecture");
        let results = techniques.analogies("zero trust rollout", None, Some(&ctx), &mut Sampler::seeded(4));
        assert_eq!(results.len(), 6);
        // the first source has five examples, so both sampled examples come from it
        assert!(results.iter().all(|r| r.contains("defense systems")));
    }
}
