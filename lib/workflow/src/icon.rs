//! Icon classification for node types.
//!
//! n8n node types are free-text strings (`n8n-nodes-base.webhook`,
//! `@n8n/n8n-nodes-langchain.agent`, ...) with an unconstrained
//! vocabulary. Classification is a total function over ordered substring
//! rules with an explicit default, so unknown types still render.

use serde::{Deserialize, Serialize};

/// The icon drawn on a node card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKind {
    Webhook,
    Branch,
    Code,
    Cloud,
    Mail,
    Chat,
    Bot,
    Terminal,
    Sliders,
    Filter,
    Shuffle,
    Play,
    Send,
    Database,
    Wrench,
    File,
    /// Default for types no rule matches.
    Bolt,
}

impl IconKind {
    /// Classifies a node type string.
    ///
    /// Rules are checked in order; the first match wins. Matching is
    /// case-insensitive substring containment on the full type string.
    #[must_use]
    pub fn classify(node_type: &str) -> Self {
        let ty = node_type.to_lowercase();
        let has = |needle: &str| ty.contains(needle);

        if has("webhook") {
            Self::Webhook
        } else if has("git") {
            Self::Branch
        } else if has("function") || has("code") {
            Self::Code
        } else if has("http") || has("request") {
            Self::Cloud
        } else if has("email") || has("mail") {
            Self::Mail
        } else if has("slack") || has("discord") || has("telegram") {
            Self::Chat
        } else if has("openai") || has("ai") {
            Self::Bot
        } else if has("ssh") || has("execute") {
            Self::Terminal
        } else if has("set") || has("edit") {
            Self::Sliders
        } else if has("if") || has("switch") || has("filter") {
            Self::Filter
        } else if has("split") || has("merge") {
            Self::Shuffle
        } else if has("trigger") || has("manual") {
            Self::Play
        } else if has("respond") || has("send") {
            Self::Send
        } else if has("postgres") || has("mysql") || has("database") {
            Self::Database
        } else if has("noop") || has("no operation") {
            Self::Wrench
        } else if has("workflow") {
            Self::File
        } else {
            Self::Bolt
        }
    }

    /// A short human-readable label, used for accessibility titles.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Webhook => "webhook",
            Self::Branch => "version control",
            Self::Code => "code",
            Self::Cloud => "http request",
            Self::Mail => "email",
            Self::Chat => "messaging",
            Self::Bot => "ai",
            Self::Terminal => "shell",
            Self::Sliders => "data shaping",
            Self::Filter => "control flow",
            Self::Shuffle => "split/merge",
            Self::Play => "trigger",
            Self::Send => "outbound",
            Self::Database => "database",
            Self::Wrench => "no-op",
            Self::File => "sub-workflow",
            Self::Bolt => "node",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_common_n8n_types() {
        assert_eq!(
            IconKind::classify("n8n-nodes-base.webhook"),
            IconKind::Webhook
        );
        assert_eq!(IconKind::classify("n8n-nodes-base.gitlab"), IconKind::Branch);
        assert_eq!(
            IconKind::classify("n8n-nodes-base.httpRequest"),
            IconKind::Cloud
        );
        assert_eq!(IconKind::classify("n8n-nodes-base.slack"), IconKind::Chat);
        assert_eq!(
            IconKind::classify("n8n-nodes-base.postgres"),
            IconKind::Database
        );
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(IconKind::classify("WEBHOOK"), IconKind::Webhook);
        assert_eq!(IconKind::classify("OpenAI"), IconKind::Bot);
    }

    #[test]
    fn earlier_rules_take_precedence() {
        // Contains both "webhook" and "trigger"; webhook is checked first.
        assert_eq!(
            IconKind::classify("n8n-nodes-base.webhookTrigger"),
            IconKind::Webhook
        );
    }

    #[test]
    fn unknown_types_fall_back_to_bolt() {
        assert_eq!(IconKind::classify(""), IconKind::Bolt);
        assert_eq!(IconKind::classify("something-novel"), IconKind::Bolt);
    }

    #[test]
    fn every_kind_has_a_label() {
        assert!(!IconKind::classify("anything").label().is_empty());
        assert_eq!(IconKind::Play.label(), "trigger");
    }
}
