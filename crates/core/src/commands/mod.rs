mod builtin;
mod context;
mod error;
mod help;
mod node;
mod parameter;
mod registry;
mod sender;
pub mod suppliers;
mod tokenizer;

pub use builtin::{register_commands, workshop_command, workshop_tree, WORKSHOP};
pub use context::ExecutionContext;
pub use error::{CommandError, CommandResult, InternalError, RegistryError, RuntimeError};
pub use help::help_lines;
pub use node::{CommandNode, Enabler, Executor};
pub use parameter::{AllowedEntries, Parameter, ParameterSupplier, ParameterSupplierBuilder};
pub use registry::{CommandDeclaration, CommandRegistry, CommandTree};
pub use sender::{BufferedSender, CommandSender};
pub use tokenizer::{check_argument_lengths, combine_quoted_arguments, split_line, ARG_MAX_LENGTH};
