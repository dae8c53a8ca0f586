//! Builtin skill table
//!
//! Registered before any directory scan, so these names always win over
//! scanned files. Trigger tables are bilingual: the server answers both
//! Chinese and English phrasing for the same task.

use crate::intent::Intent;

use super::types::SkillDescriptor;

/// Build the builtin descriptors, in registration order
pub fn builtin_skills() -> Vec<SkillDescriptor> {
    vec![
        SkillDescriptor::new("frontend-design", "Component, page, and UI implementation guidance")
            .with_category("frontend")
            .with_priority(10)
            .with_trigger("组件", 5)
            .with_trigger("前端", 4)
            .with_trigger("页面", 3)
            .with_trigger("界面", 3)
            .with_trigger("react", 4)
            .with_trigger("vue", 4)
            .with_trigger("component", 4)
            .with_trigger("frontend", 3)
            .with_trigger("ui", 2)
            .require_intent(Intent::Create)
            .exclude_intent(Intent::Research)
            .with_body(include_str!("builtin_prompts/frontend_design.md")),
        SkillDescriptor::new("source-research", "Reading and explaining existing source code")
            .with_category("research")
            .with_priority(8)
            .with_trigger("源码", 5)
            .with_trigger("实现原理", 4)
            .with_trigger("原理", 3)
            .with_trigger("阅读", 2)
            .with_trigger("source code", 4)
            .with_trigger("internals", 3)
            .with_trigger("how does", 2)
            .require_intent(Intent::Research)
            .with_body(include_str!("builtin_prompts/source_research.md")),
        SkillDescriptor::new("e2e-testing", "End-to-end test authoring with browser drivers")
            .with_category("testing")
            .with_priority(9)
            .with_trigger("e2e", 5)
            .with_trigger("端到端", 5)
            .with_trigger("playwright", 4)
            .with_trigger("cypress", 4)
            .with_trigger("browser test", 3)
            .require_intent(Intent::TestWriteE2e)
            .with_body(include_str!("builtin_prompts/e2e_testing.md")),
        SkillDescriptor::new("unit-testing", "Unit test design and assertion patterns")
            .with_category("testing")
            .with_priority(7)
            .with_trigger("单元测试", 5)
            .with_trigger("unit test", 4)
            .with_trigger("测试用例", 3)
            .with_trigger("jest", 3)
            .with_trigger("pytest", 3)
            .require_intent(Intent::TestWriteUnit)
            .with_body(include_str!("builtin_prompts/unit_testing.md")),
        SkillDescriptor::new("test-runner", "Running suites and triaging failures")
            .with_category("testing")
            .with_priority(6)
            .with_trigger("运行测试", 5)
            .with_trigger("跑测试", 5)
            .with_trigger("run tests", 4)
            .with_trigger("ci failure", 3)
            .require_intent(Intent::TestRun)
            .with_body(include_str!("builtin_prompts/test_runner.md")),
        SkillDescriptor::new("systematic-debugging", "Reproduce, isolate, and fix defects")
            .with_category("diagnostics")
            .with_priority(9)
            .with_trigger("报错", 5)
            .with_trigger("调试", 4)
            .with_trigger("崩溃", 4)
            .with_trigger("异常", 4)
            .with_trigger("bug", 4)
            .with_trigger("stack trace", 4)
            .with_trigger("error", 3)
            .with_trigger("crash", 4)
            .require_intent(Intent::Debug)
            .with_body(include_str!("builtin_prompts/systematic_debugging.md")),
        SkillDescriptor::new("refactoring", "Behavior-preserving restructuring")
            .with_category("code-quality")
            .with_priority(7)
            .with_trigger("重构", 5)
            .with_trigger("refactor", 4)
            .with_trigger("clean up", 3)
            .with_trigger("simplify", 3)
            .with_trigger("拆分", 3)
            .require_intent(Intent::Refactor)
            .with_body(include_str!("builtin_prompts/refactoring.md")),
        SkillDescriptor::new("documentation", "Docs, comments, and README writing")
            .with_category("docs")
            .with_priority(6)
            .with_trigger("文档", 4)
            .with_trigger("注释", 3)
            .with_trigger("readme", 4)
            .with_trigger("document", 3)
            .with_trigger("docstring", 3)
            .require_intent(Intent::Document)
            .with_body(include_str!("builtin_prompts/documentation.md")),
        SkillDescriptor::new("api-design", "HTTP API surface and contract design")
            .with_category("backend")
            .with_priority(8)
            .with_trigger("接口", 4)
            .with_trigger("api", 3)
            .with_trigger("graphql", 4)
            .with_trigger("endpoint", 3)
            .with_trigger("rest", 3)
            .with_trigger("后端", 3)
            .with_exclude("前端")
            .with_exclude("frontend")
            .with_body(include_str!("builtin_prompts/api_design.md")),
        SkillDescriptor::new("deployment", "Shipping, rollout, and release hygiene")
            .with_category("devops")
            .with_priority(8)
            .with_trigger("部署", 5)
            .with_trigger("发布", 4)
            .with_trigger("上线", 4)
            .with_trigger("deploy", 4)
            .with_trigger("docker", 3)
            .with_trigger("kubernetes", 4)
            .with_trigger("release", 3)
            .require_intent(Intent::Deploy)
            .exclude_intent(Intent::Research)
            .with_body(include_str!("builtin_prompts/deployment.md")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names_unique() {
        let skills = builtin_skills();
        let mut names = std::collections::HashSet::new();
        for skill in &skills {
            assert!(names.insert(skill.name.clone()), "duplicate {}", skill.name);
        }
    }

    #[test]
    fn test_builtins_carry_bodies() {
        for skill in builtin_skills() {
            assert!(skill.body.is_some(), "{} has no body", skill.name);
            assert!(skill.is_builtin());
        }
    }

    #[test]
    fn test_builtins_have_triggers() {
        for skill in builtin_skills() {
            assert!(!skill.triggers.is_empty(), "{} has no triggers", skill.name);
        }
    }
}
