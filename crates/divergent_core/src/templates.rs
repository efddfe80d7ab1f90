//! Static prompt templates and placeholder interpolation

use crate::method::PerspectiveType;

pub const PERSPECTIVE_INANIMATE: [&str; 3] = [
    "You are {entity} observing '{thought}'. What do you notice that humans miss? How would you interact with or modify this concept based on your unique properties?",
    "As {entity}, you have no emotions or preconceptions. Analyze '{thought}' purely from your material and functional perspective. What inefficiencies or opportunities do you detect?",
    "Imagine '{thought}' from the viewpoint of {entity} that has existed for centuries. What patterns and cycles do you observe that short-lived humans cannot see?",
];

pub const PERSPECTIVE_ABSTRACT: [&str; 3] = [
    "You are the embodiment of {entity}. How does '{thought}' align with or challenge your fundamental nature? What would you change to make it more harmonious with your essence?",
    "As {entity} personified, you see '{thought}' through the lens of your abstract principles. What deeper meanings and connections do you perceive?",
    "From your perspective as {entity}, '{thought}' is just one manifestation of larger patterns. What other forms could it take while keeping its essential relationship to you?",
];

pub const PERSPECTIVE_IMPOSSIBLE: [&str; 3] = [
    "You are {entity} with abilities that defy physical laws. How would you approach '{thought}' using your impossible capabilities? What solutions become available to you?",
    "As {entity}, you exist outside the normal constraints of time, space and logic. Reimagine '{thought}' from your transcendent perspective.",
    "You are {entity} who experiences reality in ways humans cannot comprehend. How would you transform '{thought}' based on your alien understanding?",
];

const INANIMATE_ENTITIES: [&str; 5] = [
    "an ancient lighthouse",
    "a well-worn park bench",
    "a river stone",
    "a forgotten umbrella",
    "a city streetlamp",
];

const ABSTRACT_ENTITIES: [&str; 5] = ["time", "curiosity", "entropy", "trust", "balance"];

const IMPOSSIBLE_ENTITIES: [&str; 5] = [
    "a creature that lives backwards in time",
    "a being made of pure sound",
    "a mind spread across every mirror in the world",
    "a traveller who can be in two places at once",
    "an intelligence that perceives only possibilities",
];

pub const CONSTRAINT: [&str; 5] = [
    "Transform '{thought}' by applying the constraint: '{constraint}'. Don't just add the constraint; let it fundamentally reshape the concept's DNA.",
    "The constraint '{constraint}' isn't a limitation, it's a creative catalyst for '{thought}'. How does this constraint unlock new possibilities?",
    "Imagine '{thought}' was born in a world where '{constraint}' is the natural law. How would it evolve differently?",
    "Use '{constraint}' as a lens to reveal hidden aspects of '{thought}' that are normally invisible.",
    "The constraint '{constraint}' forces '{thought}' to find creative workarounds. What elegant solutions emerge?",
];

pub const COMBINATION: [&str; 5] = [
    "'{thought1}' and '{thought2}' are two ingredients in a recipe for innovation. What unexpected dish do they create when combined with the right catalyst?",
    "Imagine '{thought1}' and '{thought2}' are two different species that must evolve together. What hybrid offspring would emerge from their symbiosis?",
    "'{thought1}' and '{thought2}' are two musical themes. Compose a symphony that weaves them together into something greater than the sum of their parts.",
    "If '{thought1}' and '{thought2}' were pieces from different puzzles, what new picture would emerge when they're forced to fit together?",
    "'{thought1}' and '{thought2}' are two different languages. Create a new form of communication that incorporates the unique strengths of both.",
];

pub fn perspective_templates(perspective: PerspectiveType) -> &'static [&'static str] {
    match perspective {
        PerspectiveType::InanimateObject => &PERSPECTIVE_INANIMATE,
        PerspectiveType::AbstractConcept => &PERSPECTIVE_ABSTRACT,
        PerspectiveType::ImpossibleBeing => &PERSPECTIVE_IMPOSSIBLE,
    }
}

/// Concrete embodiments a perspective prompt can speak as.
pub fn perspective_entities(perspective: PerspectiveType) -> &'static [&'static str] {
    match perspective {
        PerspectiveType::InanimateObject => &INANIMATE_ENTITIES,
        PerspectiveType::AbstractConcept => &ABSTRACT_ENTITIES,
        PerspectiveType::ImpossibleBeing => &IMPOSSIBLE_ENTITIES,
    }
}

/// Replace `{name}` placeholders in a single pass.
///
/// Substituted values are never rescanned, so user text containing braces is
/// copied verbatim. Unknown placeholders are left as they are.
pub fn fill(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 64);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after
            .find('}')
            .and_then(|close| {
                let key = &after[..close];
                vars.iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, value)| (*value, close))
            });
        match value {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
