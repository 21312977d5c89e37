use bach_core::HierarchyDocument;
use bach_core::entities::{
    Agent, AgentDraft, DaemonJob, Message, NewDaemonJob, NewMessage, NewTask, Task, TaskUpdate,
};
use bach_core::responses::StatusResponse;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{SchemaArgs, SchemaType};

/// Handle `bach schema`. Schemas are always printed as JSON.
pub fn handle(args: &SchemaArgs, _flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name {
        SchemaType::Hierarchy => serde_json::to_value(schema_for!(HierarchyDocument))?,
        SchemaType::Task => serde_json::to_value(schema_for!(Task))?,
        SchemaType::NewTask => serde_json::to_value(schema_for!(NewTask))?,
        SchemaType::TaskUpdate => serde_json::to_value(schema_for!(TaskUpdate))?,
        SchemaType::Message => serde_json::to_value(schema_for!(Message))?,
        SchemaType::NewMessage => serde_json::to_value(schema_for!(NewMessage))?,
        SchemaType::DaemonJob => serde_json::to_value(schema_for!(DaemonJob))?,
        SchemaType::NewDaemonJob => serde_json::to_value(schema_for!(NewDaemonJob))?,
        SchemaType::Agent => serde_json::to_value(schema_for!(Agent))?,
        SchemaType::AgentDraft => serde_json::to_value(schema_for!(AgentDraft))?,
        SchemaType::Status => serde_json::to_value(schema_for!(StatusResponse))?,
    };
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
