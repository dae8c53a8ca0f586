//! Trigger matching and ranking
//!
//! Scores every registered skill against a message under a classified
//! intent and returns the eligible candidates ranked for activation.

use crate::intent::Intent;
use crate::registry::SkillRegistry;
use serde::{Deserialize, Serialize};

/// A candidate skill with its match evidence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatch {
    /// Skill name
    pub name: String,
    /// Category, carried for response building
    pub category: String,
    /// Descriptor priority, carried for tie-breaks and diagnostics
    pub priority: i32,
    /// Sum of matched trigger weights
    pub score: i32,
    /// The trigger words that fired, in descriptor order
    pub matched_triggers: Vec<String>,
}

/// Rank skills for a message under an intent
///
/// Eligibility per skill: the intent passes the required/excluded gates and
/// no exclusion word appears in the message. Score is the sum of matched
/// trigger weights; zero-score skills are not candidates. The result is
/// ordered by score descending, then priority descending, then registry
/// insertion order. The sort is stable, so equal candidates never swap
/// between calls.
pub fn match_skills(message: &str, intent: Intent, registry: &SkillRegistry) -> Vec<SkillMatch> {
    let haystack = message.to_lowercase();
    let mut matches = Vec::new();

    for skill in registry.iter() {
        if !skill.required_intents.is_empty() && !skill.required_intents.contains(&intent) {
            continue;
        }
        if skill.excluded_intents.contains(&intent) {
            continue;
        }
        if skill
            .excludes
            .iter()
            .any(|word| haystack.contains(&word.to_lowercase()))
        {
            continue;
        }

        let mut score = 0;
        let mut matched_triggers = Vec::new();
        for trigger in &skill.triggers {
            if haystack.contains(&trigger.word.to_lowercase()) {
                score += trigger.weight;
                matched_triggers.push(trigger.word.clone());
            }
        }
        if score == 0 {
            continue;
        }

        matches.push(SkillMatch {
            name: skill.name.clone(),
            category: skill.category.clone(),
            priority: skill.priority,
            score,
            matched_triggers,
        });
    }

    matches.sort_by(|a, b| b.score.cmp(&a.score).then(b.priority.cmp(&a.priority)));
    matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SkillDescriptor;

    fn fixture_registry() -> SkillRegistry {
        let mut registry = SkillRegistry::new();
        registry.register(
            SkillDescriptor::new("frontend", "Frontend work")
                .with_priority(10)
                .with_trigger("react", 4)
                .with_trigger("组件", 5)
                .require_intent(Intent::Create),
        );
        registry.register(
            SkillDescriptor::new("research", "Source reading")
                .with_priority(8)
                .with_trigger("源码", 5)
                .require_intent(Intent::Research),
        );
        registry.register(
            SkillDescriptor::new("generalist", "Anything")
                .with_priority(1)
                .with_trigger("react", 1)
                .with_trigger("api", 1),
        );
        registry
    }

    #[test]
    fn test_intent_gating() {
        let registry = fixture_registry();
        // High trigger score but wrong intent: frontend requires Create
        let matches = match_skills("react react react", Intent::Research, &registry);
        assert!(matches.iter().all(|m| m.name != "frontend"));
        // generalist has no required intents, so it survives
        assert!(matches.iter().any(|m| m.name == "generalist"));
    }

    #[test]
    fn test_excluded_intent_disqualifies() {
        let mut registry = SkillRegistry::new();
        registry.register(
            SkillDescriptor::new("deploy", "Ship it")
                .with_trigger("release", 3)
                .exclude_intent(Intent::Research),
        );
        assert!(match_skills("release notes", Intent::Research, &registry).is_empty());
        assert_eq!(
            match_skills("release notes", Intent::Deploy, &registry).len(),
            1
        );
    }

    #[test]
    fn test_exclusion_word_beats_any_score() {
        let mut registry = SkillRegistry::new();
        registry.register(
            SkillDescriptor::new("backend", "API work")
                .with_trigger("api", 5)
                .with_trigger("endpoint", 5)
                .with_exclude("frontend"),
        );
        let matches = match_skills("frontend api endpoint api", Intent::Create, &registry);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let mut registry = SkillRegistry::new();
        registry.register(
            SkillDescriptor::new("backend", "API work")
                .with_trigger("api", 5)
                .with_exclude("Frontend"),
        );
        assert!(match_skills("FRONTEND api", Intent::Create, &registry).is_empty());
    }

    #[test]
    fn test_score_is_sum_of_matched_weights() {
        let registry = fixture_registry();
        let matches = match_skills("用react写一个组件", Intent::Create, &registry);
        let frontend = matches.iter().find(|m| m.name == "frontend").unwrap();
        assert_eq!(frontend.score, 9);
        assert_eq!(frontend.matched_triggers, vec!["react", "组件"]);
    }

    #[test]
    fn test_zero_score_skills_dropped() {
        let registry = fixture_registry();
        let matches = match_skills("nothing relevant here", Intent::Create, &registry);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_ordering_score_then_priority_then_insertion() {
        let mut registry = SkillRegistry::new();
        registry.register(
            SkillDescriptor::new("low-priority-high-score", "A")
                .with_priority(1)
                .with_trigger("widget", 10),
        );
        registry.register(
            SkillDescriptor::new("first-tied", "B")
                .with_priority(5)
                .with_trigger("widget", 3),
        );
        registry.register(
            SkillDescriptor::new("high-priority-tied", "C")
                .with_priority(9)
                .with_trigger("widget", 3),
        );
        registry.register(
            SkillDescriptor::new("second-tied", "D")
                .with_priority(5)
                .with_trigger("widget", 3),
        );

        let matches = match_skills("widget", Intent::Unknown, &registry);
        let names: Vec<_> = matches.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "low-priority-high-score",
                "high-priority-tied",
                "first-tied",
                "second-tied",
            ]
        );
    }

    #[test]
    fn test_trigger_matching_case_insensitive() {
        let registry = fixture_registry();
        let matches = match_skills("REACT Component", Intent::Create, &registry);
        assert!(matches.iter().any(|m| m.name == "frontend"));
    }

    #[test]
    fn test_determinism_across_calls() {
        let registry = fixture_registry();
        let first = match_skills("react 源码 api", Intent::Research, &registry);
        for _ in 0..10 {
            let again = match_skills("react 源码 api", Intent::Research, &registry);
            let names_a: Vec<_> = first.iter().map(|m| &m.name).collect();
            let names_b: Vec<_> = again.iter().map(|m| &m.name).collect();
            assert_eq!(names_a, names_b);
        }
    }
}
