use super::Techniques;
use crate::context::{domain_label, CreativityContext};
use crate::sampler::Sampler;

impl<'a> Techniques<'a> {
    /// Four prompts for each of three sampled organisms.
    pub fn biomimicry(
        &self,
        idea: &str,
        context: Option<&CreativityContext>,
        sampler: &mut Sampler,
    ) -> Vec<String> {
        let domain = domain_label(self.catalog, context);
        let examples = sampler.sample(self.catalog.biomimicry_for(domain), 3);

        examples
            .iter()
            .flat_map(|example| {
                let organism = &example.organism;
                let mechanism = &example.mechanism;
                let property = &example.property;
                [
                    format!("How could '{idea}' mimic how {organism} {mechanism} to achieve {property} in {domain}?"),
                    format!("What if '{idea}' adopted the {property} strategy of {organism} for {domain} applications?"),
                    format!("How would the way {organism} {mechanism} inspire new solutions for '{idea}' in {domain}?"),
                    format!("What {domain}-specific innovations could emerge by applying the {property} of {organism} to '{idea}'?"),
                ]
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_biomimicry_generic_examples() {
        let catalog = Catalog::builtin();
        let techniques = Techniques::new(catalog);
        let idea = "efficient transportation";
        let results = techniques.biomimicry(idea, None, &mut Sampler::seeded(12));
        assert_eq!(results.len(), 12);
        assert!(results.iter().all(|r| r.contains(idea)));
        assert!(catalog
            .biomimicry
            .iter()
            .any(|b| results[0].contains(&b.organism)));
    }

    #[test]
    fn test_biomimicry_domain_examples() {
        let catalog = Catalog::builtin();
        let techniques = Techniques::new(catalog);
        let ctx = CreativityContext::new("microservices architecture");
        let results = techniques.biomimicry("service mesh", Some(&ctx), &mut Sampler::seeded(12));
        let domain_examples = catalog.biomimicry_for("microservices architecture");
        assert!(domain_examples.iter().any(|b| results[0].contains(&b.organism)));
        assert!(results.iter().all(|r| r.contains("microservices architecture")));
    }
}
