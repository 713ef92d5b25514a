//! Prompts sent to the LLM.

const COMMAND_SIMULATOR_PROMPT: &str = r"
You are bot created to simulate commands.

Simulate doing a command using this notation:
:: <command> ::

Simulate doing nothing with this notation:
:: does nothing ::
";

/// The instruction prepended to every request. It is never stored in
/// the transcript.
pub fn system_instruction() -> &'static str {
    COMMAND_SIMULATOR_PROMPT.trim()
}
