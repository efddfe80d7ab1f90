use super::Techniques;
use crate::context::{domain_label, CreativityContext};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Hat {
    White,
    Red,
    Black,
    Yellow,
    Green,
    Blue,
}

impl Hat {
    pub const ALL: [Hat; 6] = [Hat::White, Hat::Red, Hat::Black, Hat::Yellow, Hat::Green, Hat::Blue];

    pub fn title(&self) -> &'static str {
        match self {
            Hat::White => "White Hat (Facts)",
            Hat::Red => "Red Hat (Emotions)",
            Hat::Black => "Black Hat (Critical)",
            Hat::Yellow => "Yellow Hat (Positive)",
            Hat::Green => "Green Hat (Creative)",
            Hat::Blue => "Blue Hat (Process)",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HatSection {
    pub hat: Hat,
    pub prompts: Vec<String>,
}

impl<'a> Techniques<'a> {
    /// Six Thinking Hats in their canonical order.
    ///
    /// Domains with curated perspectives use them for the white, red, black and
    /// yellow hats; everything else is rendered from generic templates.
    pub fn six_thinking_hats(&self, idea: &str, context: Option<&CreativityContext>) -> Vec<HatSection> {
        let domain = domain_label(self.catalog, context);
        let curated = self.catalog.perspectives_for(domain);

        Hat::ALL
            .into_iter()
            .map(|hat| {
                let curated = curated.map(|p| match hat {
                    Hat::White => p.factual.as_slice(),
                    Hat::Red => p.emotional.as_slice(),
                    Hat::Black => p.critical.as_slice(),
                    Hat::Yellow => p.positive.as_slice(),
                    Hat::Green | Hat::Blue => &[][..],
                });
                let prompts = match curated {
                    Some(list) if !list.is_empty() => list.to_vec(),
                    _ => generic_hat_prompts(hat, idea, domain),
                };
                HatSection { hat, prompts }
            })
            .collect()
    }
}

fn generic_hat_prompts(hat: Hat, idea: &str, domain: &str) -> Vec<String> {
    match hat {
        Hat::White => vec![
            format!("What {domain}-specific data validates '{idea}'?"),
            format!("What metrics matter most in {domain} for '{idea}'?"),
            format!("What evidence exists in {domain} for approaches similar to '{idea}'?"),
            format!("What measurable outcomes define success for '{idea}' in {domain}?"),
        ],
        Hat::Red => vec![
            format!("How do {domain} stakeholders feel about '{idea}'?"),
            format!("What emotional barriers exist in {domain} for '{idea}'?"),
            format!("What emotional benefits does '{idea}' provide in {domain}?"),
            format!("What intuitive reactions do {domain} professionals have to '{idea}'?"),
        ],
        Hat::Black => vec![
            format!("What {domain}-specific risks does '{idea}' present?"),
            format!("How could '{idea}' fail in {domain} contexts?"),
            format!("What {domain} constraints limit '{idea}'?"),
            format!("What unintended consequences could '{idea}' have in {domain}?"),
        ],
        Hat::Yellow => vec![
            format!("What {domain} benefits does '{idea}' offer?"),
            format!("How could '{idea}' transform {domain} practices?"),
            format!("What opportunities does '{idea}' create in {domain}?"),
            format!("What's the best-case scenario for '{idea}' in {domain}?"),
        ],
        Hat::Green => vec![
            format!("What {domain}-specific innovations could '{idea}' inspire?"),
            format!("How could '{idea}' be creatively adapted for {domain}?"),
            format!("What wild {domain} possibilities does '{idea}' suggest?"),
            format!("What creative combinations exist between '{idea}' and {domain} practices?"),
        ],
        Hat::Blue => vec![
            format!("How should we approach implementing '{idea}' in {domain}?"),
            format!("What {domain} processes would best evaluate '{idea}'?"),
            format!("How can we organize {domain} thinking about '{idea}'?"),
            format!("What {domain} methodology should guide the development of '{idea}'?"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_six_hats_generic() {
        let techniques = Techniques::new(Catalog::builtin());
        let idea = "implement remote work policy";
        let sections = techniques.six_thinking_hats(idea, None);
        let titles: Vec<_> = sections.iter().map(|s| s.hat.title()).collect();
        assert_eq!(
            titles,
            [
                "White Hat (Facts)",
                "Red Hat (Emotions)",
                "Black Hat (Critical)",
                "Yellow Hat (Positive)",
                "Green Hat (Creative)",
                "Blue Hat (Process)",
            ]
        );
        for section in &sections {
            assert_eq!(section.prompts.len(), 4);
            assert!(section.prompts.iter().all(|p| p.contains(idea)));
        }
    }

    #[test]
    fn test_six_hats_curated_perspectives() {
        let catalog = Catalog::builtin();
        let techniques = Techniques::new(catalog);
        let ctx = CreativityContext::new("artificial intelligence systems");
        let sections = techniques.six_thinking_hats("triage assistant", Some(&ctx));
        let curated = catalog.perspectives_for("artificial intelligence systems").unwrap();
        assert_eq!(sections[2].prompts, curated.critical);
        // green and blue are always rendered from templates
        assert!(sections[4].prompts[0].contains("triage assistant"));
        assert!(sections[5].prompts[0].contains("artificial intelligence systems"));
    }
}
