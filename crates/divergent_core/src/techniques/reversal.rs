use super::Techniques;

const DIMENSIONS: [&str; 4] = [
    "Core function/purpose",
    "Key components/elements",
    "Operating principles",
    "Target context/environment",
];

impl<'a> Techniques<'a> {
    /// Six failure provocations followed by the instruction to invert them.
    pub fn reverse_brainstorming(&self, idea: &str) -> Vec<String> {
        vec![
            format!("How could we make '{idea}' completely unusable?"),
            format!("What would guarantee that '{idea}' fails spectacularly?"),
            format!("How could we make '{idea}' as inconvenient as possible?"),
            format!("What would make people actively avoid '{idea}'?"),
            format!("How could we make '{idea}' solve the wrong problem entirely?"),
            format!("What would make '{idea}' work only in impossible conditions?"),
            "Now, how can we reverse each of these failure modes into innovative features?".to_string(),
        ]
    }

    /// Four prompts per constraint; the catalog defaults apply when `constraints` is empty.
    pub fn constraint_relaxation(&self, idea: &str, constraints: &[String]) -> Vec<String> {
        let constraints = if constraints.is_empty() {
            self.catalog.default_constraints.as_slice()
        } else {
            constraints
        };

        constraints
            .iter()
            .flat_map(|constraint| {
                [
                    format!("What if '{idea}' had unlimited {constraint}?"),
                    format!("How would '{idea}' change if {constraint} didn't exist?"),
                    format!("What becomes possible with '{idea}' if we ignore {constraint}?"),
                    format!("How could we work around the {constraint} limitation for '{idea}'?"),
                ]
            })
            .collect()
    }

    /// Dimension checklist for each idea plus the recombination instruction.
    pub fn morphological_analysis(&self, first: &str, second: &str) -> Vec<String> {
        let mut prompts = Vec::with_capacity(DIMENSIONS.len() * 2 + 1);
        for idea in [first, second] {
            prompts.extend(DIMENSIONS.iter().map(|d| format!("{d} of '{idea}'")));
        }
        prompts.push(
            "Create novel combinations by mixing and matching dimensions across both ideas. \
             Generate at least 3 hybrid concepts that combine different dimensional aspects in unexpected ways."
                .to_string(),
        );
        prompts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_reverse_brainstorming() {
        let techniques = Techniques::new(Catalog::builtin());
        let idea = "create a user-friendly app";
        let results = techniques.reverse_brainstorming(idea);
        assert_eq!(results.len(), 7);
        assert!(results[..6].iter().all(|r| r.contains(idea)));
        assert!(results[6].to_lowercase().contains("reverse"));
    }

    #[test]
    fn test_constraint_relaxation() {
        let techniques = Techniques::new(Catalog::builtin());
        let constraints: Vec<String> = ["limited battery", "small screen", "slow internet"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let results = techniques.constraint_relaxation("design a mobile app", &constraints);
        assert_eq!(results.len(), 12);
        assert!(results[0].contains("unlimited limited battery"));
    }

    #[test]
    fn test_constraint_relaxation_defaults() {
        let techniques = Techniques::new(Catalog::builtin());
        let results = techniques.constraint_relaxation("create a learning platform", &[]);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|r| r.contains("create a learning platform")));
    }

    #[test]
    fn test_morphological_analysis() {
        let techniques = Techniques::new(Catalog::builtin());
        let results = techniques.morphological_analysis("office chair", "voice assistant");
        assert_eq!(results.len(), 9);
        assert!(results[0].contains("office chair"));
        assert!(results[4].contains("voice assistant"));
    }
}
