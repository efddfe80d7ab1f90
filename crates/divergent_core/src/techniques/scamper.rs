use super::{nth_or, Techniques};
use crate::catalog::WordCategory;
use crate::context::{domain_label, CreativityContext};
use crate::sampler::Sampler;

impl<'a> Techniques<'a> {
    /// One domain-aware prompt per SCAMPER letter, prefixed with the letter's name.
    pub fn scamper(
        &self,
        idea: &str,
        context: Option<&CreativityContext>,
        sampler: &mut Sampler,
    ) -> Vec<String> {
        let domain = domain_label(self.catalog, context);
        let concepts = self.selector.select(domain, context, WordCategory::CoreConcepts, 5, sampler);
        let techniques = self.selector.select(domain, context, WordCategory::Techniques, 3, sampler);
        let applications = self.selector.select(domain, context, WordCategory::Applications, 3, sampler);

        let substitute_with = nth_or(&concepts, 0, "innovative elements");
        let merge_with = nth_or(&concepts, 1, "complementary concepts");
        let principles = nth_or(&concepts, 2, "best practices");
        let emphasis = nth_or(&concepts, 3, "key aspects");
        let new_method = nth_or(&techniques, 0, "new approaches");
        let proven = nth_or(&techniques, 1, "proven techniques");
        let specialized = nth_or(&techniques, 2, "specialized approaches");
        let existing_use = nth_or(&applications, 0, "existing applications");
        let other_use = nth_or(&applications, 1, "different use cases");

        let letters: [(&str, [String; 4]); 7] = [
            (
                "Substitute",
                [
                    format!("What if you replaced key components of '{idea}' with {substitute_with}?"),
                    format!("How could {new_method} substitute current methods in '{idea}'?"),
                    format!("What {domain}-specific alternatives exist for the core elements of '{idea}'?"),
                    format!("How could '{idea}' substitute traditional solutions in {domain}?"),
                ],
            ),
            (
                "Combine",
                [
                    format!("How could '{idea}' merge with {merge_with} to create something new in {domain}?"),
                    format!("What happens when you combine '{idea}' with {proven} from {domain}?"),
                    format!("How could '{idea}' integrate multiple {domain} approaches simultaneously?"),
                    format!("What if '{idea}' combined with {existing_use} in {domain}?"),
                ],
            ),
            (
                "Adapt",
                [
                    format!("How could '{idea}' adapt {principles} principles for better results in {domain}?"),
                    format!("What {domain} best practices could '{idea}' adopt and customize?"),
                    format!("How could '{idea}' evolve to better serve {domain} needs and requirements?"),
                    format!("What successful {domain} solutions could inspire adaptations to '{idea}'?"),
                ],
            ),
            (
                "Modify",
                [
                    format!("What if '{idea}' emphasized {emphasis} more strongly for {domain} applications?"),
                    format!("How could '{idea}' be modified using {specialized} from {domain}?"),
                    format!("What {domain}-specific modifications would enhance the effectiveness of '{idea}'?"),
                    format!("How could '{idea}' be scaled or optimized for {domain} requirements?"),
                ],
            ),
            (
                "Put to other uses",
                [
                    format!("How could '{idea}' solve other {domain} challenges beyond its original purpose?"),
                    format!("What unexpected {domain} applications could '{idea}' enable or support?"),
                    format!("How could '{idea}' transform other areas within {domain} or related fields?"),
                    format!("What if '{idea}' was applied to {other_use} in {domain}?"),
                ],
            ),
            (
                "Eliminate",
                [
                    format!("What {domain} constraints or limitations could '{idea}' remove or simplify?"),
                    format!("How could '{idea}' eliminate common {domain} pain points or inefficiencies?"),
                    format!("What unnecessary {domain} complexities could '{idea}' strip away?"),
                    format!("How could '{idea}' reduce barriers in {domain} processes or workflows?"),
                ],
            ),
            (
                "Reverse",
                [
                    format!("What if '{idea}' approached {domain} problems from the opposite direction?"),
                    format!("How could '{idea}' invert typical {domain} assumptions or conventions?"),
                    format!("What would '{idea}' look like if it challenged established {domain} practices?"),
                    format!("How could '{idea}' reverse traditional {domain} workflows or processes?"),
                ],
            ),
        ];

        letters
            .iter()
            .map(|(letter, prompts)| {
                let prompt = sampler.choose(prompts).map(String::as_str).unwrap_or_default();
                format!("[{letter}] {prompt}")
            })
            .collect()
    }
}
