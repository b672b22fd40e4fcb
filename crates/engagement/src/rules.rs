//! Data-driven rule tables and their evaluation fold.
//!
//! A scoring profile is an ordered slice of [`Rule`]s. Evaluation is a
//! fold over that slice: each rule whose predicate holds contributes its
//! delta, appends exactly one reason, and optionally renders a suggested
//! action. Mutually exclusive if/else-if chains are expressed as rules
//! sharing a `group`; within a group only the first matching rule fires.

/// A single scoring rule.
pub struct Rule<Ctx> {
    /// Stable identifier, useful for tuning and diagnostics.
    pub id: &'static str,
    /// Exclusion group: once a rule in the group fires, later rules in
    /// the same group are skipped.
    pub group: Option<&'static str>,
    /// Signed score contribution.
    pub delta: i32,
    /// Reason string appended when the rule fires.
    pub reason: &'static str,
    /// Predicate over the scoring context.
    pub applies: fn(&Ctx) -> bool,
    /// Optional suggested action seeded when the rule fires.
    pub action: Option<fn(&Ctx) -> String>,
}

/// Outcome of evaluating a rule table.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Final score, clamped to 0..=100.
    pub score: i32,
    /// One reason per fired rule, in evaluation order.
    pub reasons: Vec<String>,
    /// Actions seeded by fired rules, in evaluation order.
    pub actions: Vec<String>,
}

/// Evaluate an ordered rule table against a context.
///
/// The running score starts at `baseline` and is clamped to 0..=100 only
/// after every rule has been evaluated, so a mid-run excursion outside
/// the range does not mask later rules.
pub fn evaluate<Ctx>(rules: &[Rule<Ctx>], baseline: i32, ctx: &Ctx) -> Evaluation {
    let mut fired_groups: Vec<&'static str> = Vec::new();

    let (score, reasons, actions) = rules.iter().fold(
        (baseline, Vec::new(), Vec::new()),
        |(score, mut reasons, mut actions), rule| {
            if rule
                .group
                .is_some_and(|group| fired_groups.contains(&group))
            {
                return (score, reasons, actions);
            }
            if !(rule.applies)(ctx) {
                return (score, reasons, actions);
            }

            if let Some(group) = rule.group {
                fired_groups.push(group);
            }
            reasons.push(rule.reason.to_string());
            if let Some(render) = rule.action {
                actions.push(render(ctx));
            }
            (score + rule.delta, reasons, actions)
        },
    );

    Evaluation {
        score: score.clamp(0, 100),
        reasons,
        actions,
    }
}
