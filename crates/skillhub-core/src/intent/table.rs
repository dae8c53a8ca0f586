//! The standard intent classification table
//!
//! Rows are ordered most-specific first: the specialized test intents sit
//! above the generic `test` row so that "write e2e tests" resolves to
//! `test_write_e2e` even though the generic row also fires. Tie-breaking
//! between rows with equal scores picks the earlier row.

use super::types::{Intent, IntentPattern};

/// Build the production intent table
///
/// Returned by value so callers own their table; the router builds it once
/// at startup and shares it behind an `Arc`.
pub fn standard_intents() -> Vec<IntentPattern> {
    vec![
        IntentPattern::new(
            Intent::TestWriteE2e,
            5,
            &[
                r"(?i)(write|add|create|写|编写|补充).{0,12}(e2e|端到端)",
                r"(?i)(e2e|端到端).{0,8}(test|测试|用例)",
                r"(?i)\b(playwright|cypress)\b",
            ],
        ),
        IntentPattern::new(
            Intent::TestWriteIntegration,
            5,
            &[
                r"(?i)(write|add|create|写|编写|补充).{0,12}(integration|集成)",
                r"(?i)(integration|集成).{0,8}(test|测试|用例)",
            ],
        ),
        IntentPattern::new(
            Intent::TestWriteUnit,
            5,
            &[
                r"(?i)(write|add|create|写|编写|补充).{0,12}(unit|单元)",
                r"(?i)(unit|单元).{0,8}(test|测试|用例)",
            ],
        ),
        IntentPattern::new(
            Intent::TestRun,
            4,
            &[
                r"(?i)\b(run|execute|rerun)\b.{0,16}\btests?\b",
                r"(跑|运行|执行).{0,8}测试",
                r"(?i)\b(cargo test|npm test|pytest)\b",
            ],
        ),
        IntentPattern::new(
            Intent::Test,
            2,
            &[r"(?i)\btests?\b|\btesting\b", r"测试|用例|断言"],
        ),
        IntentPattern::new(
            Intent::Create,
            3,
            &[
                r"(?i)\b(create|build|implement|scaffold|generate|make)\b",
                r"(?i)\bwrite\b.{0,16}\b(component|page|module|function|class|api|script)\b",
                r"创建|新建|实现|搭建|生成|编写|写一个|做一个",
            ],
        ),
        IntentPattern::new(
            Intent::Research,
            3,
            &[
                r"(?i)\b(research|investigate|explore|understand|explain)\b",
                r"(?i)\bhow does\b|\bwhat is\b|\bread(ing)? (the )?source\b",
                r"查看|研究|了解|调研|阅读|源码|原理|是什么|怎么实现",
            ],
        ),
        IntentPattern::new(
            Intent::Debug,
            3,
            &[
                r"(?i)\b(debug|fix|bug|error|crash|broken|exception|traceback)\b",
                r"(?i)\bstack ?trace\b|\bnot working\b|\bfail(s|ed|ing)?\b",
                r"调试|修复|报错|出错|崩溃|异常|失败|排查",
            ],
        ),
        IntentPattern::new(
            Intent::Refactor,
            3,
            &[
                r"(?i)\b(refactor|restructure|rewrite|clean ?up|simplify|extract)\b",
                r"重构|整理|拆分|简化|抽取",
            ],
        ),
        IntentPattern::new(
            Intent::Document,
            3,
            &[
                r"(?i)\b(document|documentation|docs|readme|changelog|docstring)\b",
                r"(?i)\b(comment|annotate)\b",
                r"文档|注释|说明",
            ],
        ),
        IntentPattern::new(
            Intent::Deploy,
            3,
            &[
                r"(?i)\b(deploy|deployment|release|ship|publish|rollout|launch)\b",
                r"(?i)\b(docker|kubernetes|k8s)\b|\bci/cd\b",
                r"部署|发布|上线|灰度",
            ],
        ),
        IntentPattern::new(
            Intent::Analyze,
            3,
            &[
                r"(?i)\b(analyze|analyse|profile|benchmark|measure|audit|review)\b",
                r"分析|评估|审查|评审",
            ],
        ),
        IntentPattern::new(
            Intent::Convert,
            3,
            &[
                r"(?i)\b(convert|transform|migrate|port|translate)\b",
                r"转换|迁移|转成|改写成|翻译",
            ],
        ),
    ]
}
