//! End-to-end routing flow over the core engine

use skillhub_core::{
    DeactivateOutcome, Intent, Locale, RouteOutcome, SkillRegistry, SkillRouter,
};
use tempfile::TempDir;

async fn router_with_builtins() -> SkillRouter {
    let mut registry = SkillRegistry::new();
    registry.register_builtins();
    SkillRouter::new(registry)
}

#[tokio::test]
async fn scenario_chinese_create_then_release() {
    let router = router_with_builtins().await;

    let outcome = router.analyze_and_route("s1", "创建一个React组件", 1).await;
    let RouteOutcome::Activated {
        detected_intent,
        locale,
        activated_skills,
        skill_contents,
        instructions,
    } = outcome
    else {
        panic!("expected activation");
    };

    assert_eq!(detected_intent, Intent::Create);
    assert_eq!(locale, Locale::Zh);
    assert_eq!(activated_skills[0].name, "frontend-design");
    assert_eq!(activated_skills[0].category, "frontend");
    assert!(!activated_skills[0].match_reason.is_empty());
    assert!(skill_contents[0].content.is_some());
    assert!(instructions.contains("deactivate"));

    // Round trip: active list contains the skill, then excludes it after
    // deactivation
    let snapshot = router.sessions().snapshot("s1").await;
    assert_eq!(snapshot.active_skills, vec!["frontend-design"]);
    assert!(snapshot.last_analysis.is_some());

    match router.sessions().deactivate_one("s1", "frontend-design").await {
        DeactivateOutcome::Deactivated { remaining } => assert!(remaining.is_empty()),
        other => panic!("unexpected: {:?}", other),
    }
    assert!(router.sessions().snapshot("s1").await.active_skills.is_empty());
}

#[tokio::test]
async fn scenario_research_activates_source_skill() {
    let router = router_with_builtins().await;

    let outcome = router.analyze_and_route("s1", "查看React源码", 1).await;
    let RouteOutcome::Activated {
        detected_intent,
        activated_skills,
        ..
    } = outcome
    else {
        panic!("expected activation");
    };

    assert_eq!(detected_intent, Intent::Research);
    assert_eq!(activated_skills[0].name, "source-research");
    assert!(activated_skills[0].match_reason.contains(&"源码".to_string()));
}

#[tokio::test]
async fn scenario_greeting_is_no_match() {
    let router = router_with_builtins().await;

    let outcome = router.analyze_and_route("s1", "你好", 1).await;
    match outcome {
        RouteOutcome::NoMatch {
            detected_intent,
            activated_skills,
            ..
        } => {
            assert_eq!(detected_intent, Intent::Chat);
            assert!(activated_skills.is_empty());
        }
        other => panic!("expected no_match, got {:?}", other),
    }
}

#[tokio::test]
async fn scenario_e2e_test_writing() {
    let router = router_with_builtins().await;

    let outcome = router.analyze_and_route("s1", "写E2E测试", 1).await;
    let RouteOutcome::Activated {
        detected_intent,
        activated_skills,
        ..
    } = outcome
    else {
        panic!("expected activation");
    };

    assert_eq!(detected_intent, Intent::TestWriteE2e);
    assert_eq!(activated_skills[0].name, "e2e-testing");
}

#[tokio::test]
async fn concurrent_sessions_see_only_their_own_skills() {
    let router = std::sync::Arc::new(router_with_builtins().await);

    let a = {
        let router = router.clone();
        tokio::spawn(async move { router.analyze_and_route("a", "创建一个React组件", 1).await })
    };
    let b = {
        let router = router.clone();
        tokio::spawn(async move { router.analyze_and_route("b", "查看React源码", 1).await })
    };
    a.await.unwrap();
    b.await.unwrap();

    assert_eq!(
        router.sessions().snapshot("a").await.active_skills,
        vec!["frontend-design"]
    );
    assert_eq!(
        router.sessions().snapshot("b").await.active_skills,
        vec!["source-research"]
    );

    // Bulk release on one session leaves the other untouched
    let cleared = router.sessions().deactivate_all("a").await;
    assert_eq!(cleared.count, 1);
    assert_eq!(
        router.sessions().snapshot("b").await.active_skills,
        vec!["source-research"]
    );
}

#[tokio::test]
async fn scanned_skills_join_the_builtin_table() {
    let temp = TempDir::new().unwrap();
    tokio::fs::write(
        temp.path().join("incident-response.md"),
        "---\ndescription: Production incident handling\ncategory: ops\npriority: 12\ntriggers:\n  - word: incident\n    weight: 6\n  - word: outage\n    weight: 6\n---\nDeclare severity first.",
    )
    .await
    .unwrap();

    let mut registry = SkillRegistry::new();
    registry.register_builtins();
    registry.discover_from_dir(temp.path(), false).await.unwrap();
    let router = SkillRouter::new(registry);

    let outcome = router
        .analyze_and_route("ops", "we have a production outage", 1)
        .await;
    let RouteOutcome::Activated {
        activated_skills,
        skill_contents,
        ..
    } = outcome
    else {
        panic!("expected activation");
    };

    assert_eq!(activated_skills[0].name, "incident-response");
    assert_eq!(
        skill_contents[0].content.as_deref(),
        Some("Declare severity first.")
    );
}
