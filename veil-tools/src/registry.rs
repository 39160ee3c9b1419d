//! Tool table and dispatch.

use std::sync::Arc;

use serde_json::Value;

use veil_core::errors::ToolError;
use veil_core::{VeilErrorCode, VeilResult};
use veil_observability::tracing_setup::events;

use crate::bindings::{anonymize, transcript};
use crate::envelope;
use crate::runtime::{self, VeilRuntime};

type Handler = fn(&VeilRuntime, &Value) -> VeilResult<Value>;

/// A named tool and its handler.
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    handler: Handler,
}

const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "replace_sensitive_values",
        description: "Replace agent-identified values with deterministic category placeholders",
        handler: anonymize::replace_sensitive_values,
    },
    ToolSpec {
        name: "replace_names_in_text",
        description: "Replace person names with deterministic placeholders",
        handler: anonymize::replace_names_in_text,
    },
    ToolSpec {
        name: "anonymize_pii_patterns",
        description: "Detect and replace emails, phones, SSNs, card numbers, IPv4 addresses and UUIDs",
        handler: anonymize::anonymize_pii_patterns,
    },
    ToolSpec {
        name: "anonymize_identifiers",
        description: "Replace the identifier fields of a conversation message record",
        handler: anonymize::anonymize_identifiers,
    },
    ToolSpec {
        name: "clear_anonymization_cache",
        description: "Drop every cached placeholder mapping",
        handler: anonymize::clear_anonymization_cache,
    },
    ToolSpec {
        name: "anonymize_conversation",
        description: "Anonymize identifiers and free text of every message in a conversation",
        handler: transcript::anonymize_conversation,
    },
    ToolSpec {
        name: "format_conversation_for_summary",
        description: "Render a conversation as [ROLE]: content blocks",
        handler: transcript::format_conversation_for_summary,
    },
    ToolSpec {
        name: "extract_conversation_metadata",
        description: "Count messages, roles, turns, lengths, duration and feedback signals",
        handler: transcript::extract_conversation_metadata,
    },
    ToolSpec {
        name: "categorize_feedback",
        description: "Normalize a feedback observation into a categorized item",
        handler: transcript::categorize_feedback,
    },
];

/// Dispatches tool calls against one runtime.
#[derive(Clone)]
pub struct ToolRegistry {
    runtime: Arc<VeilRuntime>,
}

impl ToolRegistry {
    pub fn new(runtime: Arc<VeilRuntime>) -> Self {
        Self { runtime }
    }

    /// Registry over the process-wide runtime.
    pub fn global() -> Self {
        Self::new(runtime::get())
    }

    pub fn runtime(&self) -> &VeilRuntime {
        &self.runtime
    }

    /// Every registered tool, in a stable order.
    pub fn specs() -> &'static [ToolSpec] {
        TOOLS
    }

    /// Call `name` with `args` and wrap the outcome in a status envelope.
    pub fn call(&self, name: &str, args: &Value) -> Value {
        let result = match TOOLS.iter().find(|tool| tool.name == name) {
            Some(tool) => (tool.handler)(&self.runtime, args),
            None => Err(ToolError::UnknownTool {
                name: name.to_string(),
            }
            .into()),
        };

        match result {
            Ok(payload) => {
                events::tool_succeeded(name);
                envelope::success(payload)
            }
            Err(e) => {
                events::tool_failed(name, e.error_code(), &e.message());
                envelope::error(&e)
            }
        }
    }
}

/// Call a tool against the process-wide runtime.
pub fn call_tool(name: &str, args: &Value) -> Value {
    ToolRegistry::global().call(name, args)
}
