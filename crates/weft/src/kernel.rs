//! The kernel: plugin registry and function-call dispatch

use crate::config::FunctionCallingConfig;
use crate::function::SharedFunction;
use crate::plugin::KernelPlugin;
use crate::{KernelError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};
use weft_core::{
    AuthorRole, ChatHistory, ChatMessageContent, FunctionCallContent, FunctionName,
    FunctionResultContent, KernelArguments, KernelContent,
};

/// Core kernel structure for weft
#[derive(Debug, Clone, Default)]
pub struct Kernel {
    plugins: HashMap<String, Arc<KernelPlugin>>,
    config: FunctionCallingConfig,
}

impl Kernel {
    /// Create an empty kernel with default function calling settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder
    pub fn builder() -> KernelBuilder {
        KernelBuilder::new()
    }

    pub fn config(&self) -> &FunctionCallingConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: FunctionCallingConfig) {
        self.config = config;
    }

    /// Register a plugin; names must be unique
    pub fn add_plugin(&mut self, plugin: KernelPlugin) -> Result<()> {
        if self.plugins.contains_key(plugin.name()) {
            return Err(KernelError::DuplicatePlugin(plugin.name().to_string()));
        }
        info!(plugin = plugin.name(), functions = plugin.len(), "Registered plugin");
        self.plugins
            .insert(plugin.name().to_string(), Arc::new(plugin));
        Ok(())
    }

    pub fn plugin(&self, name: &str) -> Option<&KernelPlugin> {
        self.plugins.get(name).map(Arc::as_ref)
    }

    pub fn plugins(&self) -> impl Iterator<Item = &KernelPlugin> {
        self.plugins.values().map(Arc::as_ref)
    }

    /// Qualified names of every registered function, sorted
    pub fn function_names(&self) -> Vec<FunctionName> {
        let mut names: Vec<FunctionName> = self
            .plugins
            .values()
            .flat_map(|plugin| plugin.function_names())
            .collect();
        names.sort_by(|a, b| {
            (&a.plugin_name, &a.function_name).cmp(&(&b.plugin_name, &b.function_name))
        });
        names
    }

    /// Look up a function.
    ///
    /// An empty `plugin_name` searches every plugin and succeeds only when
    /// exactly one of them defines `function_name`.
    pub fn function(&self, plugin_name: &str, function_name: &str) -> Result<SharedFunction> {
        if plugin_name.is_empty() {
            return self.find_unqualified(function_name);
        }

        let plugin = self
            .plugins
            .get(plugin_name)
            .ok_or_else(|| KernelError::PluginNotFound(plugin_name.to_string()))?;
        plugin.get(function_name).ok_or_else(|| {
            KernelError::FunctionNotFound(FunctionName::new(plugin_name, function_name).qualified())
        })
    }

    fn find_unqualified(&self, function_name: &str) -> Result<SharedFunction> {
        let mut matches: Vec<&Arc<KernelPlugin>> = self
            .plugins
            .values()
            .filter(|plugin| plugin.contains(function_name))
            .collect();

        match matches.len() {
            0 => Err(KernelError::FunctionNotFound(function_name.to_string())),
            1 => matches[0]
                .get(function_name)
                .ok_or_else(|| KernelError::FunctionNotFound(function_name.to_string())),
            _ => {
                matches.sort_by(|a, b| a.name().cmp(b.name()));
                Err(KernelError::AmbiguousFunction {
                    function: function_name.to_string(),
                    plugins: matches.iter().map(|p| p.name().to_string()).collect(),
                })
            }
        }
    }

    /// Invoke a function by plugin and function name
    pub async fn invoke(
        &self,
        plugin_name: &str,
        function_name: &str,
        arguments: KernelArguments,
    ) -> Result<serde_json::Value> {
        let function = self.function(plugin_name, function_name)?;
        debug!(
            plugin = plugin_name,
            function = function_name,
            arguments = arguments.len(),
            "Invoking function"
        );
        function.invoke(arguments).await
    }

    /// Dispatch one model-issued function call and wrap its value as a result
    pub async fn invoke_function_call(
        &self,
        call: &FunctionCallContent,
    ) -> Result<FunctionResultContent> {
        let call_id = call.id.as_deref().unwrap_or_default();
        let (plugin_name, function_name) = call.split_name()?;
        let arguments = call.to_kernel_arguments()?;

        let value = self.invoke(plugin_name, function_name, arguments).await?;
        debug!(call_id, plugin = plugin_name, function = function_name, "Function call completed");
        Ok(FunctionResultContent::from_function_call(call, value))
    }

    /// Answer every function call in `message` with a tool message.
    ///
    /// Calls run one after another in message order. A failing call is
    /// answered with an error result and does not stop the others.
    pub async fn process_function_calls(&self, message: &ChatMessageContent) -> ChatMessageContent {
        let mut items = Vec::new();
        for (index, call) in message.function_calls().enumerate() {
            let call_id = call.id.as_deref().unwrap_or_default();
            if index >= self.config.max_function_calls_per_message {
                warn!(
                    call_id,
                    limit = self.config.max_function_calls_per_message,
                    "Rejecting function call over the per-message limit"
                );
                items.push(KernelContent::from(FunctionResultContent::from_error(
                    call,
                    "too many function calls in one message",
                )));
                continue;
            }

            let result = match self.invoke_function_call(call).await {
                Ok(result) => result,
                Err(e) => {
                    warn!(
                        call_id,
                        name = call.name.as_deref().unwrap_or_default(),
                        error = %e,
                        "Function call failed"
                    );
                    let detail = if self.config.include_error_details {
                        e.to_string()
                    } else {
                        "function call failed".to_string()
                    };
                    FunctionResultContent::from_error(call, detail)
                }
            };
            items.push(KernelContent::from(result));
        }
        ChatMessageContent::with_items(AuthorRole::Tool, items)
    }

    /// Append an assistant message to `history` and, when auto invocation is
    /// enabled and the message requests function calls, the tool message
    /// answering them. Returns whether a tool message was appended.
    pub async fn handle_assistant_message(
        &self,
        history: &mut ChatHistory,
        message: ChatMessageContent,
    ) -> bool {
        let needs_tools = self.config.auto_invoke && message.has_function_calls();
        let tool_message = if needs_tools {
            Some(self.process_function_calls(&message).await)
        } else {
            None
        };

        history.add_message(message);
        match tool_message {
            Some(tool_message) => {
                history.add_message(tool_message);
                true
            }
            None => false,
        }
    }
}

/// Builder for creating kernels
#[derive(Default)]
pub struct KernelBuilder {
    plugins: Vec<KernelPlugin>,
    config: FunctionCallingConfig,
}

impl KernelBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plugin
    pub fn plugin(mut self, plugin: KernelPlugin) -> Self {
        self.plugins.push(plugin);
        self
    }

    /// Set the function calling configuration
    pub fn config(mut self, config: FunctionCallingConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the kernel
    pub fn build(self) -> Result<Kernel> {
        let mut kernel = Kernel {
            plugins: HashMap::new(),
            config: self.config,
        };
        for plugin in self.plugins {
            kernel.add_plugin(plugin)?;
        }
        Ok(kernel)
    }
}
