//! The route table. Order here is the order in every rendered document.

use super::{Endpoint, Parameter, Section};

/// Illustrative identifiers; real values come from the user's instance.
const EXAMPLE_MODEL_ID: &str = "ai-assistant-platform";
const EXAMPLE_TOOL_ID: &str = "postgres_database_tool";
const EXAMPLE_FUNCTION_ID: &str = "add_to_knowledge_action";
const EXAMPLE_KNOWLEDGE_UUID: &str = "a1b2c3d4-e5f6-7890-1234-567890abcdef";
const EXAMPLE_CHAT_UUID: &str = "a1b2c3d4-e5f6-7890-1234-567890abcdef";
const EXAMPLE_PROMPT_COMMAND: &str = "%2Fmy-hardware-specs";

const MODEL_ID: Parameter = Parameter {
    name: "modelId",
    description: "The ID value from the model table in database",
    example: EXAMPLE_MODEL_ID,
    hint: "For model-specific URLs, replace `{modelId}` with the actual model ID from your database",
};

const KNOWLEDGE_ID: Parameter = Parameter {
    name: "knowledgeId",
    description: "UUID of the document collection",
    example: EXAMPLE_KNOWLEDGE_UUID,
    hint: "For knowledge document URLs, replace `{knowledgeId}` with the actual UUID of the document collection",
};

const COMMAND_VALUE: Parameter = Parameter {
    name: "commandValue",
    description: "The command line value for the prompt",
    example: EXAMPLE_PROMPT_COMMAND,
    hint: "For prompt URLs, replace `{commandValue}` with the prompt's URL-encoded command (e.g. `%2Fmy-command`)",
};

const TOOL_ID: Parameter = Parameter {
    name: "toolId",
    description: "Tool ID in your instance",
    example: EXAMPLE_TOOL_ID,
    hint: "For tool-specific URLs, replace `{toolId}` with the actual tool ID from your instance",
};

const FUNCTION_ID: Parameter = Parameter {
    name: "functionId",
    description: "Function ID",
    example: EXAMPLE_FUNCTION_ID,
    hint: "For function-specific URLs, replace `{functionId}` with the actual function ID",
};

const CHAT_ID: Parameter = Parameter {
    name: "chatId",
    description: "Chat UUID",
    example: EXAMPLE_CHAT_UUID,
    hint: "For chat history URLs, replace `{chatId}` with the actual chat UUID",
};

const fn plain(function: &'static str, url_pattern: &'static str, notes: &'static str) -> Endpoint {
    Endpoint {
        function,
        url_pattern,
        notes,
        parameters: &[],
    }
}

pub(super) static SECTIONS: &[Section] = &[
    Section {
        name: "General",
        endpoints: &[plain("Home", "/", "Base URL")],
    },
    Section {
        name: "Models",
        endpoints: &[
            plain("Models Home", "/workspace/models", "List all models"),
            Endpoint {
                function: "Chat with Specific Model",
                url_pattern: "/?models={modelId}",
                notes: "Chat UI prepopulated with model",
                parameters: &[MODEL_ID],
            },
            Endpoint {
                function: "Edit Model",
                url_pattern: "/workspace/models/edit?id={modelId}",
                notes: "Edit a specific model",
                parameters: &[MODEL_ID],
            },
            plain("Create New Model", "/workspace/models/create", "Create a new model"),
        ],
    },
    Section {
        name: "Knowledge",
        endpoints: &[
            plain(
                "Knowledge Home",
                "/workspace/knowledge",
                "List all knowledge collections",
            ),
            plain(
                "Create Knowledge",
                "/workspace/knowledge/create",
                "Create a new knowledge collection",
            ),
            Endpoint {
                function: "View Knowledge",
                url_pattern: "/workspace/knowledge/{knowledgeId}",
                notes: "View a specific knowledge collection",
                parameters: &[KNOWLEDGE_ID],
            },
        ],
    },
    Section {
        name: "Prompts",
        endpoints: &[
            plain("Prompts Home", "/workspace/prompts", "List all prompts"),
            plain("Create Prompt", "/workspace/prompts/create", "Create a new prompt"),
            Endpoint {
                function: "Edit Prompt",
                url_pattern: "/workspace/prompts/edit?command={commandValue}",
                notes: "URL based on command line value, not prompt name",
                parameters: &[COMMAND_VALUE],
            },
        ],
    },
    Section {
        name: "Tools",
        endpoints: &[
            plain("Tools Home", "/workspace/tools", "List all tools"),
            Endpoint {
                function: "Edit Tool",
                url_pattern: "/workspace/tools/edit?id={toolId}",
                notes: "Edit a specific tool",
                parameters: &[TOOL_ID],
            },
        ],
    },
    Section {
        name: "Admin",
        endpoints: &[
            plain("Settings", "/admin/settings", "Admin settings"),
            plain("User Management", "/admin/users", "Manage users"),
            plain("Evaluations", "/admin/evaluations", "View evaluations"),
        ],
    },
    Section {
        name: "Functions",
        endpoints: &[
            plain("Functions List", "/admin/functions", "List all functions"),
            Endpoint {
                function: "Edit Function",
                url_pattern: "/admin/functions/edit?id={functionId}",
                notes: "Edit a specific function",
                parameters: &[FUNCTION_ID],
            },
            plain("Playground", "/playground", "Function playground"),
            plain("Completions Tester", "/playground/completions", "Test completions"),
        ],
    },
    Section {
        name: "Conversations",
        endpoints: &[Endpoint {
            function: "View Chat History",
            url_pattern: "/c/{chatId}",
            notes: "View a specific chat history",
            parameters: &[CHAT_ID],
        }],
    },
];
