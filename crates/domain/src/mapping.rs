//! Exercise identity resolution.
//!
//! Each program name is resolved by a chain of tiers, tried in order until one decides:
//! override table, custom exercise table, exact title, similarity. Names no tier accepts are
//! left to be registered as new exercises.

use log::debug;

use crate::{ExerciseTemplate, NewExerciseTemplate, TemplateID, catalog};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchPolicy {
    /// Lowest similarity accepted by the fuzzy tier.
    pub threshold: f64,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self { threshold: 0.6 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Template(TemplateID),
    NeedsCreation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseMapping {
    pub name: String,
    pub resolution: Resolution,
    pub title: String,
    pub confidence: f64,
    pub custom: bool,
}

impl ExerciseMapping {
    fn matched(name: &str, template: &ExerciseTemplate, confidence: f64, custom: bool) -> Self {
        Self {
            name: name.to_string(),
            resolution: Resolution::Template(template.id.clone()),
            title: template.title.clone(),
            confidence,
            custom,
        }
    }

    fn unresolved(name: &str) -> Self {
        Self {
            name: name.to_string(),
            resolution: Resolution::NeedsCreation,
            title: name.to_string(),
            confidence: 0.0,
            custom: true,
        }
    }

    /// The template referenced by a plan. Names that need creation get a placeholder, which is
    /// replaced once the template is registered.
    #[must_use]
    pub fn planned_template_id(&self) -> TemplateID {
        match &self.resolution {
            Resolution::Template(id) => id.clone(),
            Resolution::NeedsCreation => TemplateID::placeholder(&self.name),
        }
    }

    #[must_use]
    pub fn needs_creation(&self) -> bool {
        self.resolution == Resolution::NeedsCreation
    }

    /// The registration to submit for a name that needs creation.
    #[must_use]
    pub fn registration(&self) -> NewExerciseTemplate {
        catalog::custom_exercise(&self.name)
            .map_or_else(|| NewExerciseTemplate::generic(&self.name), Into::into)
    }
}

type Tier = fn(&str, &[ExerciseTemplate], &MatchPolicy) -> Option<ExerciseMapping>;

const TIERS: [Tier; 4] = [
    by_override,
    by_custom_exercise,
    by_exact_title,
    by_similarity,
];

/// Resolves a single name. Returns `None` for administrative markers.
#[must_use]
pub fn resolve(
    name: &str,
    catalog: &[ExerciseTemplate],
    policy: &MatchPolicy,
) -> Option<ExerciseMapping> {
    if catalog::is_marker(name) {
        return None;
    }
    Some(
        TIERS
            .iter()
            .find_map(|tier| tier(name, catalog, policy))
            .unwrap_or_else(|| ExerciseMapping::unresolved(name)),
    )
}

fn by_override(
    name: &str,
    catalog: &[ExerciseTemplate],
    _: &MatchPolicy,
) -> Option<ExerciseMapping> {
    let title = catalog::override_title(name)?;
    find_by_title(catalog, title).map(|t| ExerciseMapping::matched(name, t, 1.0, false))
}

fn by_custom_exercise(
    name: &str,
    catalog: &[ExerciseTemplate],
    _: &MatchPolicy,
) -> Option<ExerciseMapping> {
    catalog::custom_exercise(name)?;
    Some(
        find_by_title(catalog, name).map_or_else(
            || ExerciseMapping::unresolved(name),
            |t| ExerciseMapping::matched(name, t, 1.0, true),
        ),
    )
}

fn by_exact_title(
    name: &str,
    catalog: &[ExerciseTemplate],
    _: &MatchPolicy,
) -> Option<ExerciseMapping> {
    find_by_title(catalog, name).map(|t| ExerciseMapping::matched(name, t, 1.0, false))
}

fn by_similarity(
    name: &str,
    catalog: &[ExerciseTemplate],
    policy: &MatchPolicy,
) -> Option<ExerciseMapping> {
    let lowered = name.to_lowercase();
    let mut best: Option<(&ExerciseTemplate, f64)> = None;
    for template in catalog {
        let score = similarity(&lowered, &template.title.to_lowercase());
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((template, score));
        }
    }
    let (template, score) = best?;
    debug!("best match for \"{name}\": \"{}\" ({score:.2})", template.title);
    (score >= policy.threshold).then(|| ExerciseMapping::matched(name, template, score, false))
}

fn find_by_title<'a>(catalog: &'a [ExerciseTemplate], title: &str) -> Option<&'a ExerciseTemplate> {
    catalog.iter().find(|t| catalog::same_title(&t.title, title))
}

/// Dice coefficient over the character bigrams of both strings, ignoring whitespace.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();
    let b = b.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>();

    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut bigrams = a.windows(2).collect::<Vec<_>>();
    let mut intersection = 0;
    for bigram in b.windows(2) {
        if let Some(position) = bigrams.iter().position(|candidate| *candidate == bigram) {
            bigrams.swap_remove(position);
            intersection += 1;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    let score = (2 * intersection) as f64 / (a.len() + b.len() - 2) as f64;
    score
}

/// One mapping per distinct program name, in the order the names were given.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExerciseMappings(Vec<ExerciseMapping>);

impl ExerciseMappings {
    #[must_use]
    pub fn build<'a>(
        names: impl IntoIterator<Item = &'a str>,
        catalog: &[ExerciseTemplate],
        policy: &MatchPolicy,
    ) -> Self {
        let mut mappings = Self::default();
        for name in names {
            if mappings.get(name).is_none() {
                if let Some(mapping) = resolve(name, catalog, policy) {
                    mappings.0.push(mapping);
                }
            }
        }
        mappings
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ExerciseMapping> {
        self.0.iter().find(|m| m.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExerciseMapping> {
        self.0.iter()
    }

    pub fn pending(&self) -> impl Iterator<Item = &ExerciseMapping> {
        self.0.iter().filter(|m| m.needs_creation())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
