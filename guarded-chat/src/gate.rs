//! Deterministic safety gate, the first pipeline stage.
//!
//! A model-based safety judge risks unparseable output and unpredictable
//! over-blocking; a fixed substring list is auditable and never produces
//! false total-blocks from format errors. BLOCK only clear unsafe or
//! illegal intents, ALLOW everything else.

use tracing::debug;

/// Gate verdict.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Allow,
    Block,
}

/// Gate verdict plus the reason recorded in the transaction log.
#[derive(Clone, Debug)]
pub struct GateDecision {
    pub decision: Decision,
    pub reason: String,
}

impl GateDecision {
    /// Whether the request may proceed to retrieval and generation.
    pub fn allowed(&self) -> bool {
        self.decision == Decision::Allow
    }
}

/// Phrases that trigger a BLOCK, matched as case-insensitive substrings.
const BLOCKED_PHRASES: &[&str] = &[
    // weapons/explosives/violence
    "how to build a bomb",
    "make a bomb",
    "explosive",
    "molotov",
    "how to kill",
    "kill someone",
    "murder",
    "shoot",
    "stab",
    // self-harm
    "suicide",
    "kill myself",
    "self harm",
    // illegal / sabotage
    "sabotage",
    "disable a plow",
    "destroy",
    "poison",
    "ricin",
    "steal",
    "hack",
    "bypass",
    "jailbreak",
];

/// Evaluates the safety gate for one query.
///
/// Lower-cases and trims the query, then tests substring membership
/// against the block-list. Deterministic, no model call.
pub fn prompt_filter(user_query: &str) -> GateDecision {
    let q = user_query.to_lowercase().trim().to_string();

    if BLOCKED_PHRASES.iter().any(|p| q.contains(p)) {
        debug!("gate blocked query");
        return GateDecision {
            decision: Decision::Block,
            reason: "Unsafe or illegal request.".to_string(),
        };
    }

    GateDecision {
        decision: Decision::Allow,
        reason: "Looks safe.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_weapon_queries() {
        let gate = prompt_filter("how to build a bomb");
        assert_eq!(gate.decision, Decision::Block);
        assert_eq!(gate.reason, "Unsafe or illegal request.");
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(
            prompt_filter("Can I HACK the plow schedule?").decision,
            Decision::Block
        );
        assert_eq!(
            prompt_filter("  best way to SABOTAGE a route  ").decision,
            Decision::Block
        );
    }

    #[test]
    fn allows_ordinary_service_questions() {
        let gate = prompt_filter("When will my street be plowed?");
        assert_eq!(gate.decision, Decision::Allow);
        assert_eq!(gate.reason, "Looks safe.");
        assert!(gate.allowed());
    }

    #[test]
    fn allows_empty_query() {
        assert_eq!(prompt_filter("").decision, Decision::Allow);
    }
}
